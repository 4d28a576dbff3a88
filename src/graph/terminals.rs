use crate::error::{FlowError, Result};
use crate::graph::adjacencies::Adjacencies;
use crate::types::VertexId;

/// Picks the source and sink from the topology alone.
///
/// A vertex is a potential source if it has an outgoing arc with positive
/// capacity and a potential sink if such an arc ends at it. The source is the
/// lowest-indexed vertex that is only a potential source, the sink the
/// lowest-indexed vertex that is only a potential sink. Graphs where every
/// vertex both sends and receives (e.g. cycles) have neither.
pub fn find_source_sink(adjacencies: &Adjacencies) -> Result<(VertexId, VertexId)> {
    let vertex_count = adjacencies.vertex_count();
    let mut potential_source = vec![false; vertex_count];
    let mut potential_sink = vec![false; vertex_count];

    for (u, is_source) in potential_source.iter_mut().enumerate() {
        for &id in adjacencies.outgoing(u) {
            let edge = adjacencies.arc(id);
            if edge.capacity > 0 {
                *is_source = true;
                potential_sink[edge.to] = true;
            }
        }
    }

    let source = (0..vertex_count)
        .find(|&v| potential_source[v] && !potential_sink[v])
        .ok_or(FlowError::NoSource)?;
    let sink = (0..vertex_count)
        .find(|&v| potential_sink[v] && !potential_source[v])
        .ok_or(FlowError::NoSink)?;
    Ok((source, sink))
}
