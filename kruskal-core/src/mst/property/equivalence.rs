//! Property 1: Equivalence with the sequential oracle.
//!
//! For any generated graph, the builder must produce a forest with the same
//! total weight, edge count, and component count as the oracle. Specific
//! edges may differ when weights tie.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::kruskal;

use super::helpers::total_weight;
use super::oracle::sequential_kruskal;
use super::types::MstFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let forest = kruskal(&fixture.graph())
        .map_err(|e| TestCaseError::fail(format!("kruskal failed: {e} ({})", fixture.describe())))?;
    let oracle = sequential_kruskal(fixture.node_count, &fixture.edges);

    let weight = total_weight(forest.edges());
    if weight != oracle.total_weight {
        return Err(TestCaseError::fail(format!(
            "total weight mismatch: kruskal={weight}, oracle={} ({})",
            oracle.total_weight,
            fixture.describe(),
        )));
    }

    if forest.edges().len() != oracle.edge_count {
        return Err(TestCaseError::fail(format!(
            "edge count mismatch: kruskal={}, oracle={} ({})",
            forest.edges().len(),
            oracle.edge_count,
            fixture.describe(),
        )));
    }

    if forest.component_count() != oracle.component_count {
        return Err(TestCaseError::fail(format!(
            "component count mismatch: kruskal={}, oracle={} ({})",
            forest.component_count(),
            oracle.component_count,
            fixture.describe(),
        )));
    }

    Ok(())
}
