//! Selection cycle over three element slots.
//!
//! - Hovering binds the active slot to the element under the pointer
//! - Confirming shows info for the first pick, distances for the second,
//!   and nothing for the third before the cycle starts over
//! - The page and the overlay are reached only through [`Page`] and [`Overlay`]

mod host;
mod ruler;
mod slot;

pub use host::{Overlay, Page};
pub use ruler::{Annotation, Confirm, Ruler};
pub use slot::{SLOT_COUNT, Slot};
