use crate::graph::adjacencies::Adjacencies;
use crate::types::VertexId;
use std::collections::VecDeque;

/// Breadth-first search for a shortest path with positive residual capacity.
///
/// Returns the arc ids of the path ordered from the sink back to the source,
/// or `None` once the sink is unreachable. The search stops as soon as the
/// sink is labelled.
pub fn augmenting_path(
    source: VertexId,
    sink: VertexId,
    adjacencies: &Adjacencies,
) -> Option<Vec<usize>> {
    if source == sink {
        return None;
    }
    let mut visited = vec![false; adjacencies.vertex_count()];
    let mut parent: Vec<Option<usize>> = vec![None; adjacencies.vertex_count()];
    let mut queue = VecDeque::new();
    visited[source] = true;
    queue.push_back(source);
    while let Some(node) = queue.pop_front() {
        for &id in adjacencies.outgoing(node) {
            let target = adjacencies.arc(id).to;
            if !visited[target] && adjacencies.residual(id) > 0 {
                visited[target] = true;
                parent[target] = Some(id);
                if target == sink {
                    return Some(trace(&parent, adjacencies, source, sink));
                }
                queue.push_back(target);
            }
        }
    }
    None
}

fn trace(
    parent: &[Option<usize>],
    adjacencies: &Adjacencies,
    source: VertexId,
    sink: VertexId,
) -> Vec<usize> {
    let mut path = Vec::new();
    let mut node = sink;
    while node != source {
        let Some(id) = parent[node] else {
            unreachable!("vertex {node} was labelled without a parent arc");
        };
        path.push(id);
        node = adjacencies.tail(id);
    }
    path
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn finds_shortest_path() {
        let mut adjacencies = Adjacencies::new(4);
        let long_a = adjacencies.add_edge(0, 1, 5);
        let long_b = adjacencies.add_edge(1, 2, 5);
        let long_c = adjacencies.add_edge(2, 3, 5);
        let short = adjacencies.add_edge(0, 3, 1);
        assert_eq!(augmenting_path(0, 3, &adjacencies), Some(vec![short]));
        adjacencies.push_flow(short, 1);
        assert_eq!(
            augmenting_path(0, 3, &adjacencies),
            Some(vec![long_c, long_b, long_a])
        );
    }

    #[test]
    fn follows_insertion_order_between_equal_paths() {
        let mut adjacencies = Adjacencies::new(4);
        let via_1 = adjacencies.add_edge(0, 1, 5);
        adjacencies.add_edge(0, 2, 5);
        let from_1 = adjacencies.add_edge(1, 3, 5);
        adjacencies.add_edge(2, 3, 5);
        assert_eq!(augmenting_path(0, 3, &adjacencies), Some(vec![from_1, via_1]));
    }

    #[test]
    fn saturated_edges_block() {
        let mut adjacencies = Adjacencies::new(2);
        let id = adjacencies.add_edge(0, 1, 3);
        adjacencies.push_flow(id, 3);
        assert_eq!(augmenting_path(0, 1, &adjacencies), None);
    }

    #[test]
    fn uses_reverse_arcs() {
        let mut adjacencies = Adjacencies::new(4);
        let a = adjacencies.add_edge(0, 1, 1);
        let b = adjacencies.add_edge(1, 2, 1);
        let c = adjacencies.add_edge(2, 3, 1);
        let d = adjacencies.add_edge(0, 2, 1);
        let e = adjacencies.add_edge(1, 3, 1);
        // Route 0 -> 1 -> 2 -> 3, which leaves 0 -> 2 -> 1 -> 3 through the reverse of b.
        for id in [a, b, c] {
            adjacencies.push_flow(id, 1);
        }
        let reverse_b = adjacencies.arc(b).reverse;
        assert_eq!(
            augmenting_path(0, 3, &adjacencies),
            Some(vec![e, reverse_b, d])
        );
    }

    #[test]
    fn source_equal_to_sink() {
        let mut adjacencies = Adjacencies::new(1);
        adjacencies.add_edge(0, 0, 1);
        assert_eq!(augmenting_path(0, 0, &adjacencies), None);
    }
}
