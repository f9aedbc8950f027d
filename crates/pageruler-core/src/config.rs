//! Ruler configuration.

use crate::annotate::{INTERESTING_STYLES, LabelFormat};
use crate::error::{RulerError, RulerResult};
use serde::{Deserialize, Serialize};

/// Settings supplied by the host when the ruler is created.
///
/// Every field has a default, so `{}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulerConfig {
    /// Computed-style properties listed in the info annotation.
    pub style_properties: Vec<String>,
    /// Decimal places kept in pixel labels.
    pub label_decimals: u32,
    /// Log level for the browser console (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
}

impl Default for RulerConfig {
    fn default() -> Self {
        Self {
            style_properties: INTERESTING_STYLES.iter().map(|s| s.to_string()).collect(),
            label_decimals: 0,
            log_level: "info".to_string(),
        }
    }
}

impl RulerConfig {
    /// Largest supported `label_decimals`.
    pub const MAX_LABEL_DECIMALS: u32 = 6;

    /// Parse and validate a configuration from JSON.
    pub fn from_json(json: &str) -> RulerResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the ruler cannot honour.
    pub fn validate(&self) -> RulerResult<()> {
        if self.label_decimals > Self::MAX_LABEL_DECIMALS {
            return Err(RulerError::Config(format!(
                "label_decimals must be at most {}, got {}",
                Self::MAX_LABEL_DECIMALS,
                self.label_decimals
            )));
        }
        if self.log_level().is_none() {
            return Err(RulerError::Config(format!("unknown log level: {}", self.log_level)));
        }
        if self.style_properties.iter().any(|p| p.trim().is_empty()) {
            return Err(RulerError::Config("empty style property name".to_string()));
        }
        Ok(())
    }

    /// Parsed log level, if `log_level` names one.
    pub fn log_level(&self) -> Option<log::Level> {
        self.log_level.parse().ok()
    }

    /// Label formatting derived from this configuration.
    pub fn label_format(&self) -> LabelFormat {
        LabelFormat::new(self.label_decimals)
    }
}
