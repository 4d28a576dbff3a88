use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FlowError>;

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("cannot access \"{}\": {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("input is missing the vertex count")]
    MissingVertexCount,

    #[error("invalid vertex count {0}")]
    InvalidVertexCount(i64),

    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: i64, vertex_count: usize },

    #[error("could not determine a source: no vertex has only outgoing capacity")]
    NoSource,

    #[error("could not determine a sink: no vertex has only incoming capacity")]
    NoSink,

    #[error("total flow overflowed the capacity type")]
    Overflow,

    #[error("value {value} does not fit a 16-bit field")]
    ValueTooLarge { value: i64 },

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("invalid JSON edge list: {0}")]
    Json(#[from] serde_json::Error),
}

impl FlowError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        FlowError::Io {
            path: path.into(),
            source,
        }
    }

    /// True for failures of source/sink inference.
    pub fn is_topology_error(&self) -> bool {
        matches!(self, FlowError::NoSource | FlowError::NoSink)
    }
}
