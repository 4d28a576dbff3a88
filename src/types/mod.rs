pub mod edge;

pub use edge::{Edge, EdgeDB};

/// Dense vertex index in `[0, vertex_count)`.
pub type VertexId = usize;

/// Capacity and flow values. Input fields are 16 bits wide; they are widened
/// on load so sums of flows cannot wrap.
pub type Capacity = i64;
