//! PageRuler Core Library
//!
//! Platform-agnostic measuring logic: rectangle relationships, distance and
//! info annotations, and the three-slot selection cycle.

pub mod annotate;
pub mod config;
pub mod error;
pub mod geometry;
pub mod message;
pub mod registry;
pub mod scroll;
pub mod selection;

pub use annotate::{
    Distance, DistanceAnnotation, DistanceKind, DistanceMode, Edge, INTERESTING_STYLES,
    InfoAnnotation, LabelFormat, StyleEntry,
};
pub use config::RulerConfig;
pub use error::{RulerError, RulerResult};
pub use geometry::{Axis, Interval, ORIGIN_RECT, Segment};
pub use message::{Request, Response};
pub use registry::{Activation, ActivationRegistry};
pub use scroll::ScrollOffset;
pub use selection::{Annotation, Confirm, Overlay, Page, Ruler, SLOT_COUNT, Slot};
