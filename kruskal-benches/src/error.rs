//! Benchmark setup error type.
//!
//! Setup functions propagate failures with `?` and the bench entry points
//! turn the final error into a panic message.

use kruskal_core::MstError;

use crate::synthetic::SyntheticGraphError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticGraphError),
    /// The warm-up spanning tree computation failed.
    #[error("MST computation failed: {0}")]
    Mst(#[from] MstError),
}
