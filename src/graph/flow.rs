use tracing::{debug, info};

use crate::error::{FlowError, Result};
use crate::graph::adjacencies::Adjacencies;
use crate::graph::augmenting_path::augmenting_path;
use crate::graph::terminals::find_source_sink;
use crate::report::FlowReport;
use crate::types::{Capacity, EdgeDB, VertexId};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlowOutcome {
    pub value: Capacity,
    pub augmentations: usize,
}

/// Edmonds-Karp: augments along shortest residual paths until the sink is
/// unreachable. Flows are written into `adjacencies` in place.
pub fn compute_flow(
    adjacencies: &mut Adjacencies,
    source: VertexId,
    sink: VertexId,
) -> Result<FlowOutcome> {
    let mut outcome = FlowOutcome::default();
    while let Some(path) = augmenting_path(source, sink, adjacencies) {
        let Some(bottleneck) = path.iter().map(|&id| adjacencies.residual(id)).min() else {
            break;
        };
        for &id in &path {
            adjacencies.push_flow(id, bottleneck);
        }
        outcome.value = outcome
            .value
            .checked_add(bottleneck)
            .ok_or(FlowError::Overflow)?;
        outcome.augmentations += 1;
        debug!(
            augmentation = outcome.augmentations,
            bottleneck,
            path_length = path.len(),
            "augmented"
        );
    }
    info!(
        source,
        sink,
        value = outcome.value,
        augmentations = outcome.augmentations,
        "max flow computed"
    );
    Ok(outcome)
}

pub fn has_augmenting_path(adjacencies: &Adjacencies, source: VertexId, sink: VertexId) -> bool {
    augmenting_path(source, sink, adjacencies).is_some()
}

/// Builds the residual network for `edges`, infers source and sink, solves
/// and projects the result.
pub fn max_flow(edges: &EdgeDB) -> Result<FlowReport> {
    let mut adjacencies = Adjacencies::from_edges(edges)?;
    let (source, sink) = find_source_sink(&adjacencies)?;
    debug!(
        vertices = adjacencies.vertex_count(),
        edges = edges.edge_count(),
        source,
        sink,
        "inferred terminals"
    );
    let outcome = compute_flow(&mut adjacencies, source, sink)?;
    Ok(FlowReport::from_adjacencies(
        &adjacencies,
        source,
        sink,
        outcome.value,
    ))
}
