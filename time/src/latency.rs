use std::time::Instant;

/// Logs how long a scope took once it is dropped.
pub struct LatencyGuard {
    label: String,
    start: Instant,
}

impl LatencyGuard {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            start: Instant::now(),
        }
    }

    pub fn elapsed_millis(&self) -> u128 {
        self.start.elapsed().as_millis()
    }
}

impl Drop for LatencyGuard {
    fn drop(&mut self) {
        log::debug!("{} took {} ms", self.label, self.elapsed_millis());
    }
}
