//! Shared test utilities used across kruskal crates.

pub mod ci;
pub mod tracing;
