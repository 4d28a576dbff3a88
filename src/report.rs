use std::fmt::{Display, Formatter};
use std::io::{self, Write};

use crate::graph::Adjacencies;
use crate::types::{Capacity, VertexId};

/// An input edge together with the flow it carries in the final assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlowEdge {
    pub from: VertexId,
    pub to: VertexId,
    pub flow: Capacity,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlowReport {
    pub source: VertexId,
    pub sink: VertexId,
    pub value: Capacity,
    pub edges: Vec<FlowEdge>,
}

impl FlowReport {
    /// Collects every arc with strictly positive flow, by origin vertex and
    /// then adjacency order. Reverse arcs never carry positive flow, so only
    /// input edges appear.
    pub fn from_adjacencies(
        adjacencies: &Adjacencies,
        source: VertexId,
        sink: VertexId,
        value: Capacity,
    ) -> FlowReport {
        let edges = (0..adjacencies.vertex_count())
            .flat_map(move |from| {
                adjacencies.outgoing(from).iter().filter_map(move |&id| {
                    let edge = adjacencies.arc(id);
                    (edge.flow > 0).then_some(FlowEdge {
                        from,
                        to: edge.to,
                        flow: edge.flow,
                    })
                })
            })
            .collect();
        FlowReport {
            source,
            sink,
            value,
            edges,
        }
    }

    pub fn write_text(&self, out: &mut impl Write) -> io::Result<()> {
        write!(out, "{self}")
    }

    pub fn to_json(&self) -> json::JsonValue {
        json::object! {
            source: self.source,
            sink: self.sink,
            maxFlowValue: self.value,
            flowEdges: self.edges.iter().map(|e| {
                json::object! {
                    from: e.from,
                    to: e.to,
                    flow: e.flow,
                }
            }).collect::<Vec<_>>()
        }
    }

    pub fn to_dot(&self) -> String {
        let mut out = String::from("digraph flow {\n");
        out.push_str(&format!(
            "    {} [shape=box, label=\"{} (source)\"];\n",
            self.source, self.source
        ));
        out.push_str(&format!(
            "    {} [shape=box, label=\"{} (sink)\"];\n",
            self.sink, self.sink
        ));
        for FlowEdge { from, to, flow } in &self.edges {
            out.push_str(&format!("    {from} -> {to} [label=\"{flow}\"];\n"));
        }
        out.push_str("}\n");
        out
    }
}

impl Display for FlowReport {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        writeln!(
            f,
            "Max Flow from {} to {}: {}",
            self.source, self.sink, self.value
        )?;
        for FlowEdge { from, to, flow } in &self.edges {
            writeln!(f, "{from} -> {to} | Flow: {flow}")?;
        }
        Ok(())
    }
}
