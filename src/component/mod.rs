//! Component module orchestrator.
//!
//! The capability interface consumed by every layout algorithm lives here,
//! together with the two concrete components the crate ships: a leaf
//! [`Block`] and a [`Panel`] container.

mod core;

pub use core::{Block, Component, ComponentRef, Panel, component_ref};
