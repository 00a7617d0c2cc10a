//! Layout module orchestrator.
//!
//! The shared [`Layout`] contract lives in the private `core` module; each
//! concrete strategy gets its own file and is re-exported from here.

mod border;
mod core;
mod flex_grid;
mod flow;
mod grid;
mod relative;

pub use border::Border;
pub use core::Layout;
pub use flex_grid::FlexGrid;
pub use flow::{Alignment, Flow};
pub use grid::{Fill, Grid};
pub use relative::Relative;
