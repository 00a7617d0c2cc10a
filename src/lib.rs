//! Alcove computes the position and size of rectangular components inside a
//! container, using one of several pluggable layout algorithms.
//!
//! The crate deliberately stops at geometry: it negotiates sizes against the
//! [`Component`] capability interface and writes bounds back through it.
//! Rendering surfaces, event handling, and persistence live with the caller.

pub mod component;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod logging;
pub mod metrics;

pub use component::{Block, Component, ComponentRef, Panel, component_ref};
pub use error::{AlcoveError, Result};
pub use geometry::{Bounds, BoundsPatch, Insets, Size};
pub use layout::{Alignment, Border, Fill, FlexGrid, Flow, Grid, Layout, Relative};
pub use logging::{
    FileSink, LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult,
    MemorySink,
};
pub use metrics::{LayoutMetrics, MetricSnapshot};
