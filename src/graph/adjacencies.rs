use crate::error::Result;
use crate::types::{Capacity, EdgeDB, VertexId};

/// A directed arc of the residual network. Arcs live in an arena owned by
/// [`Adjacencies`]; `reverse` is the arena index of the paired arc.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResidualEdge {
    pub to: VertexId,
    pub capacity: Capacity,
    pub flow: Capacity,
    pub reverse: usize,
}

impl ResidualEdge {
    pub fn residual(&self) -> Capacity {
        self.capacity - self.flow
    }
}

/// Residual network: every input edge is stored as a forward arc at an even
/// arena index followed by its zero-capacity reverse arc. Only `flow` changes
/// after construction, and only through [`Adjacencies::push_flow`], which
/// keeps `reverse.flow == -forward.flow`.
#[derive(Debug, Default, Clone)]
pub struct Adjacencies {
    edges: Vec<ResidualEdge>,
    outgoing: Vec<Vec<usize>>,
}

impl Adjacencies {
    pub fn new(vertex_count: usize) -> Self {
        Adjacencies {
            edges: Vec::new(),
            outgoing: vec![Vec::new(); vertex_count],
        }
    }

    pub fn from_edges(edges: &EdgeDB) -> Result<Self> {
        edges.validate()?;
        let mut adjacencies = Adjacencies::new(edges.vertex_count());
        for edge in edges.edges() {
            adjacencies.add_edge(edge.from, edge.to, edge.capacity);
        }
        Ok(adjacencies)
    }

    /// Adds `from -> to` and its reverse arc, returning the forward arc id.
    /// Panics if either endpoint is not a vertex of this network.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, capacity: Capacity) -> usize {
        let forward = self.edges.len();
        let reverse = forward + 1;
        self.edges.push(ResidualEdge {
            to,
            capacity,
            flow: 0,
            reverse,
        });
        self.edges.push(ResidualEdge {
            to: from,
            capacity: 0,
            flow: 0,
            reverse: forward,
        });
        self.outgoing[from].push(forward);
        self.outgoing[to].push(reverse);
        forward
    }

    pub fn vertex_count(&self) -> usize {
        self.outgoing.len()
    }

    /// Number of arcs, reverse arcs included.
    pub fn arc_count(&self) -> usize {
        self.edges.len()
    }

    pub fn arc(&self, id: usize) -> &ResidualEdge {
        &self.edges[id]
    }

    /// Arc ids leaving `vertex`, in insertion order.
    pub fn outgoing(&self, vertex: VertexId) -> &[usize] {
        &self.outgoing[vertex]
    }

    pub fn residual(&self, id: usize) -> Capacity {
        self.edges[id].residual()
    }

    /// The vertex an arc starts at.
    pub fn tail(&self, id: usize) -> VertexId {
        self.edges[self.edges[id].reverse].to
    }

    /// False for the zero-capacity arcs created alongside each input edge.
    pub fn is_forward(&self, id: usize) -> bool {
        id % 2 == 0
    }

    pub fn push_flow(&mut self, id: usize, amount: Capacity) {
        self.edges[id].flow += amount;
        let reverse = self.edges[id].reverse;
        self.edges[reverse].flow -= amount;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::types::Edge;

    #[test]
    fn add_edge_links_reverse_pair() {
        let mut adjacencies = Adjacencies::new(3);
        let forward = adjacencies.add_edge(0, 2, 7);
        let reverse = adjacencies.arc(forward).reverse;
        assert_eq!(adjacencies.arc(reverse).reverse, forward);
        assert_eq!(adjacencies.arc(forward).to, 2);
        assert_eq!(adjacencies.arc(reverse).to, 0);
        assert_eq!(adjacencies.arc(reverse).capacity, 0);
        assert_eq!(adjacencies.tail(forward), 0);
        assert_eq!(adjacencies.tail(reverse), 2);
        assert!(adjacencies.is_forward(forward));
        assert!(!adjacencies.is_forward(reverse));
        assert_eq!(adjacencies.outgoing(0), &[forward]);
        assert_eq!(adjacencies.outgoing(2), &[reverse]);
        assert!(adjacencies.outgoing(1).is_empty());
    }

    #[test]
    fn parallel_edges_stay_distinct() {
        let mut adjacencies = Adjacencies::new(2);
        let a = adjacencies.add_edge(0, 1, 4);
        let b = adjacencies.add_edge(0, 1, 4);
        assert_ne!(a, b);
        assert_eq!(adjacencies.outgoing(0), &[a, b]);
        assert_eq!(adjacencies.arc_count(), 4);
    }

    #[test]
    fn push_flow_keeps_skew_symmetry() {
        let mut adjacencies = Adjacencies::new(2);
        let forward = adjacencies.add_edge(0, 1, 10);
        let reverse = adjacencies.arc(forward).reverse;
        adjacencies.push_flow(forward, 6);
        assert_eq!(adjacencies.arc(forward).flow, 6);
        assert_eq!(adjacencies.arc(reverse).flow, -6);
        assert_eq!(adjacencies.residual(forward), 4);
        assert_eq!(adjacencies.residual(reverse), 6);
        adjacencies.push_flow(reverse, 2);
        assert_eq!(adjacencies.arc(forward).flow, 4);
        assert_eq!(adjacencies.arc(reverse).flow, -4);
    }

    #[test]
    fn from_edges_rejects_bad_endpoint() {
        let edges = EdgeDB::new(1, vec![Edge::new(0, 1, 1)]);
        assert!(Adjacencies::from_edges(&edges).is_err());
    }
}
