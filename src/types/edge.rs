use crate::error::{FlowError, Result};
use crate::types::{Capacity, VertexId};

/// One `(from, to, capacity)` record of the input edge list.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Ord, PartialOrd)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub capacity: Capacity,
}

impl Edge {
    pub fn new(from: VertexId, to: VertexId, capacity: Capacity) -> Edge {
        Edge { from, to, capacity }
    }
}

/// The decoded input: a vertex count plus the edges in file order.
/// Duplicate edges are kept as separate records.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EdgeDB {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl EdgeDB {
    pub fn new(vertex_count: usize, edges: Vec<Edge>) -> EdgeDB {
        EdgeDB {
            vertex_count,
            edges,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &Vec<Edge> {
        &self.edges
    }

    pub fn push(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    /// Checks that every endpoint names an existing vertex.
    pub fn validate(&self) -> Result<()> {
        for edge in &self.edges {
            for vertex in [edge.from, edge.to] {
                if vertex >= self.vertex_count {
                    return Err(FlowError::VertexOutOfRange {
                        vertex: vertex as i64,
                        vertex_count: self.vertex_count,
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn duplicates_are_kept() {
        let mut db = EdgeDB::new(2, vec![Edge::new(0, 1, 3)]);
        db.push(Edge::new(0, 1, 3));
        assert_eq!(db.edge_count(), 2);
        assert!(db.validate().is_ok());
    }

    #[test]
    fn endpoint_out_of_range() {
        let db = EdgeDB::new(2, vec![Edge::new(0, 2, 3)]);
        assert!(matches!(
            db.validate(),
            Err(FlowError::VertexOutOfRange {
                vertex: 2,
                vertex_count: 2
            })
        ));
    }
}
