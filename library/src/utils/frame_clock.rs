use std::time::{Duration, Instant};

/// Measures the time between consecutive frames and keeps a sliding window
/// of the most recent deltas for frame rate reports.
pub struct FrameClock {
    deltas: Vec<Duration>,
    circular_buffer_pointer: usize,
    total_delta: Duration,

    last_time_mark: Option<Instant>,
}

impl FrameClock {
    #[must_use]
    pub fn new(measurements_count: usize) -> Self {
        assert!(measurements_count > 0);
        Self {
            deltas: vec![Duration::ZERO; measurements_count],
            circular_buffer_pointer: 0,
            total_delta: Duration::ZERO,
            last_time_mark: None,
        }
    }

    /// Time since the previous tick; the first tick only starts the clock.
    pub fn tick(&mut self) -> Duration {
        self.tick_at(Instant::now())
    }

    pub(crate) fn tick_at(&mut self, now: Instant) -> Duration {
        let Some(previous) = self.last_time_mark.replace(now) else {
            return Duration::ZERO;
        };
        let delta = now.saturating_duration_since(previous);
        self.add_delta(delta);
        delta
    }

    fn add_delta(&mut self, delta: Duration) {
        let erased_value = self.deltas[self.circular_buffer_pointer];
        self.deltas[self.circular_buffer_pointer] = delta;
        self.total_delta += delta;
        self.total_delta -= erased_value;
        self.circular_buffer_pointer = (self.circular_buffer_pointer + 1) % self.deltas.len();
    }

    #[must_use]
    pub fn average_delta(&self) -> Duration {
        self.total_delta / self.deltas.len() as u32
    }

    #[must_use]
    pub fn frames_per_second(&self) -> Option<f32> {
        let average = self.average_delta();
        if average.is_zero() {
            None
        } else {
            Some(1.0 / average.as_secs_f32())
        }
    }
}
