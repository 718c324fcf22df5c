//! Benchmark support crate for kruskal.
//!
//! Provides seeded synthetic graphs and parameter types used by the Criterion
//! benchmarks for heap construction and spanning tree computation.

pub mod error;
pub mod params;
pub mod synthetic;
