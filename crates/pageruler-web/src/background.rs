//! Activation side: decides per tab whether the ruler must be loaded first.
//!
//! The extension's event pages forward tab events here; sending messages and
//! injecting scripts stays on the JS side.

use pageruler_core::ActivationRegistry;
use pageruler_core::message::{self, Request};
use wasm_bindgen::prelude::*;

/// Tracks which tabs already run the ruler.
#[wasm_bindgen]
#[derive(Default)]
pub struct Background {
    registry: ActivationRegistry<i32>,
}

#[wasm_bindgen]
impl Background {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// The liveness probe to send to a tab, as JSON.
    #[wasm_bindgen(js_name = probeRequest)]
    pub fn probe_request() -> String {
        Request::Echo.to_json().unwrap_or_default()
    }

    /// The toggle message to send after activation, as JSON.
    #[wasm_bindgen(js_name = toggleRequest)]
    pub fn toggle_request() -> String {
        Request::Toggle.to_json().unwrap_or_default()
    }

    /// Record a tab's reply to the probe (`undefined` when nothing answered).
    #[wasm_bindgen(js_name = recordProbe)]
    pub fn record_probe(&mut self, tab_id: i32, reply: Option<String>) -> bool {
        let present = message::probe_succeeded(reply.as_deref());
        log::debug!("Tab {} probe: present={}", tab_id, present);
        self.registry.record_probe(tab_id, present);
        present
    }

    /// Handle a toolbar click. Returns whether the ruler must be injected
    /// before the toggle message is sent.
    pub fn activate(&mut self, tab_id: i32) -> bool {
        let activation = self.registry.activate(tab_id);
        if activation.inject {
            log::info!("Injecting ruler into tab {}", tab_id);
        }
        activation.inject
    }

    /// Forget a closed tab.
    pub fn forget(&mut self, tab_id: i32) {
        self.registry.forget(&tab_id);
    }

    #[wasm_bindgen(js_name = isPresent)]
    pub fn is_present(&self, tab_id: i32) -> bool {
        self.registry.is_present(&tab_id)
    }
}
