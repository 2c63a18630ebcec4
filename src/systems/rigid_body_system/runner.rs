/// Fixed-timestep runner
///
/// The host calls `advance` once per display frame with the elapsed time;
/// the runner converts that into a bounded number of fixed steps so
/// physics behaves the same at 30, 60 or 144 Hz.
#[derive(Clone, Debug)]
pub struct Runner {
    timestep_ms: f64,
    max_substeps: u32,
    accumulator_ms: f64,
    running: bool,
    steps_total: u64,
}

impl Runner {
    pub fn new(timestep_ms: f64, max_substeps: u32) -> Self {
        Self {
            timestep_ms: timestep_ms.max(0.1),
            max_substeps: max_substeps.max(1),
            accumulator_ms: 0.0,
            running: true,
            steps_total: 0,
        }
    }

    pub fn timestep_ms(&self) -> f64 {
        self.timestep_ms
    }

    /// Returns how many fixed steps to run for this frame. Time beyond
    /// `max_substeps` is dropped (tab was in the background, debugger, ...).
    pub fn advance(&mut self, elapsed_ms: f64) -> u32 {
        if !self.running || !elapsed_ms.is_finite() || elapsed_ms <= 0.0 {
            return 0;
        }
        self.accumulator_ms += elapsed_ms;
        let mut steps = 0;
        while self.accumulator_ms >= self.timestep_ms && steps < self.max_substeps {
            self.accumulator_ms -= self.timestep_ms;
            steps += 1;
        }
        if steps == self.max_substeps {
            self.accumulator_ms = 0.0;
        }
        self.steps_total += steps as u64;
        steps
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.accumulator_ms = 0.0;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn steps_total(&self) -> u64 {
        self.steps_total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_partial_frames() {
        let mut runner = Runner::new(10.0, 4);
        assert_eq!(runner.advance(4.0), 0);
        assert_eq!(runner.advance(7.0), 1);
        assert_eq!(runner.advance(25.0), 2);
    }

    #[test]
    fn long_pause_is_capped() {
        let mut runner = Runner::new(10.0, 4);
        assert_eq!(runner.advance(5_000.0), 4);
        assert!(runner.advance(0.0) == 0);
        assert_eq!(runner.advance(10.0), 1);
    }

    #[test]
    fn stopped_runner_never_steps() {
        let mut runner = Runner::new(10.0, 4);
        runner.stop();
        assert_eq!(runner.advance(100.0), 0);
        assert!(!runner.is_running());
    }
}
