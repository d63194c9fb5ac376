use std::fmt;

/// Per-source counters accumulated by the pipeline driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PipelineResult {
    pub attempted: usize,
    pub succeeded: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl PipelineResult {
    pub fn cap_reached(&self, cap: Option<usize>) -> bool {
        cap.is_some_and(|cap| self.succeeded >= cap)
    }
}

impl fmt::Display for PipelineResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "attempted={} succeeded={} skipped={} failed={}",
            self.attempted, self.succeeded, self.skipped, self.failed
        )
    }
}
