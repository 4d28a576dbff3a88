use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::info;

/// Ties log lines of one solver run to its input file and reports how long
/// the run took when dropped.
pub struct RunContext {
    input: PathBuf,
    start_time: Instant,
}

impl RunContext {
    pub fn new(input: &Path) -> Self {
        let context = RunContext {
            input: input.to_path_buf(),
            start_time: Instant::now(),
        };
        info!(input = %context.input.display(), "run started");
        context
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn log_message(&self, message: &str) {
        info!(input = %self.input.display(), "{message}");
    }
}

impl Drop for RunContext {
    fn drop(&mut self) {
        let took_ms = self.start_time.elapsed().as_millis() as u64;
        info!(input = %self.input.display(), took_ms, "run finished");
    }
}
