//! Messages between the activation trigger and the in-page ruler.
//!
//! Requests look like `{"action": "echo"}` or `{"action": "toggle"}`.
//! Responses are `{"echo": "echo"}` and `{"toggle": <attached>}`.

use crate::error::{RulerError, RulerResult};
use crate::selection::{Overlay, Page, Ruler};
use serde::{Deserialize, Serialize};

/// Payload of an echo response.
pub const ECHO: &str = "echo";

/// Request sent to a page context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Request {
    /// Liveness probe: is the ruler loaded in this page?
    Echo,
    /// Attach or detach the ruler.
    Toggle,
}

impl Request {
    pub fn from_json(json: &str) -> RulerResult<Self> {
        serde_json::from_str(json).map_err(|e| RulerError::InvalidRequest(e.to_string()))
    }

    pub fn to_json(&self) -> RulerResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Reply from a page context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    Echo { echo: String },
    Toggle { toggle: bool },
}

impl Response {
    pub fn echo() -> Self {
        Response::Echo {
            echo: ECHO.to_string(),
        }
    }

    pub fn to_json(&self) -> RulerResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Interpret the raw reply to an echo probe.
///
/// No reply, or a reply that is not an echo, means the page has no ruler.
pub fn probe_succeeded(reply: Option<&str>) -> bool {
    reply
        .and_then(|json| serde_json::from_str::<Response>(json).ok())
        .is_some_and(|response| matches!(response, Response::Echo { .. }))
}

/// Answer a request, creating the ruler on the first toggle.
///
/// After a toggle, `listen` is told the new attachment flag so the host can
/// register or drop its event listeners. If that fails while attaching, the
/// ruler is detached again before the error is returned.
///
/// Echo never creates a ruler. A failed creation leaves `ruler` empty.
pub fn dispatch<P, O>(
    ruler: &mut Option<Ruler<P, O>>,
    request: Request,
    create: impl FnOnce() -> RulerResult<Ruler<P, O>>,
    listen: impl FnOnce(bool) -> RulerResult<()>,
) -> RulerResult<Response>
where
    P: Page,
    O: Overlay<P::Target>,
{
    match request {
        Request::Echo => Ok(Response::echo()),
        Request::Toggle => {
            let mut current = match ruler.take() {
                Some(current) => current,
                None => create()?,
            };
            let toggle = current.toggle();
            let listened = listen(toggle);
            if let Err(e) = &listened {
                if toggle {
                    log::warn!("Listener setup failed, detaching: {}", e);
                    current.detach();
                }
            }
            *ruler = Some(current);
            listened.map(|()| Response::Toggle { toggle })
        }
    }
}
