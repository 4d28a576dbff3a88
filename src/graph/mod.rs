//! Maximum flow on a residual network.
//!
//! Each input edge `from -> to` with capacity `c` becomes a forward arc with
//! capacity `c` and a reverse arc `to -> from` with capacity 0. Pushing `f`
//! units along an arc adds `f` to its flow and subtracts `f` from its pair, so
//! residual capacity (`capacity - flow`) on the reverse arc is exactly the
//! flow that can be cancelled.

pub mod adjacencies;
pub mod augmenting_path;
pub mod flow;
pub mod terminals;


pub use crate::graph::adjacencies::{Adjacencies, ResidualEdge};
pub use crate::graph::flow::{compute_flow, has_augmenting_path, max_flow, FlowOutcome};
pub use crate::graph::terminals::find_source_sink;
