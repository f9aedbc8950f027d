//! PageRuler host glue
//!
//! Binds the core ruler to a browser page (WASM) and provides the native
//! measuring command.

pub mod measure;

#[cfg(target_arch = "wasm32")]
mod background;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use background::Background;
#[cfg(target_arch = "wasm32")]
pub use web::{configure, handle_message, start};
