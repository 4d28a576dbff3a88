pub mod error;
pub mod graph;
pub mod io;
pub mod report;
pub mod run_context;
pub mod types;

pub use error::{FlowError, Result};
