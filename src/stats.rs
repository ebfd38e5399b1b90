use std::time::{Duration, Instant};

/// How often a progress report becomes available
const REPORT_EVERY: Duration = Duration::from_millis(500);

/// Tracks progress of a run for the periodic status line
pub struct Recorder {
    gens: usize,
    alive: usize,
    gens_in_report: usize,
    last_report: Instant,
}
impl Recorder {
    pub fn new(alive: usize) -> Self {
        Self {
            gens: 0,
            alive,
            gens_in_report: 0,
            last_report: Instant::now(),
        }
    }

    pub fn record(&mut self, alive: usize) {
        self.gens += 1;
        self.gens_in_report += 1;
        self.alive = alive;
    }

    #[inline]
    pub fn gens(&self) -> usize {
        self.gens
    }

    pub fn has_report(&self) -> bool {
        self.last_report.elapsed() >= REPORT_EVERY
    }
    pub fn report(&mut self) -> String {
        let gens_per_sec = self.gens_in_report as f64 / self.last_report.elapsed().as_secs_f64();
        // reset stats for next report
        self.last_report = Instant::now();
        self.gens_in_report = 0;

        format!(
            "{:.02}gen/s gen:{} alive:{}",
            gens_per_sec, self.gens, self.alive
        )
    }
}
