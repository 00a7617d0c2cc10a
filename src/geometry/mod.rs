//! Geometry module orchestrator.
//!
//! Downstream code imports the value types from here while the
//! implementation details live in the private `core` module.

mod core;

pub use core::{Bounds, BoundsPatch, Insets, Size};
