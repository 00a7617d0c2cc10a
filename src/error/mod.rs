//! Error module orchestrator.

mod types;

pub use types::{AlcoveError, Result};
