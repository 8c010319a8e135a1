/// Turns host timestamps (`performance.now()`, ms) into the
/// `(elapsed_ms, dt_seconds)` pair `tick` expects.
///
/// The first timestamp after construction or `restart` becomes time zero.
/// `dt` is clamped to `max_dt_seconds` so a backgrounded tab does not
/// fling the spiral forward when it wakes.
#[derive(Clone, Debug)]
pub struct FrameClock {
    start_ms: Option<f64>,
    last_ms: f64,
    max_dt_seconds: f32,
}

impl FrameClock {
    pub fn new(max_dt_seconds: f32) -> Self {
        Self { start_ms: None, last_ms: 0.0, max_dt_seconds: max_dt_seconds.max(0.0) }
    }

    pub fn restart(&mut self, now_ms: f64) {
        self.start_ms = Some(now_ms);
        self.last_ms = now_ms;
    }

    pub fn advance(&mut self, now_ms: f64) -> (f64, f32) {
        if !now_ms.is_finite() {
            return (self.elapsed_ms(), 0.0);
        }
        let start = match self.start_ms {
            Some(s) => s,
            None => {
                self.restart(now_ms);
                now_ms
            }
        };
        let dt = (((now_ms - self.last_ms) / 1000.0) as f32).clamp(0.0, self.max_dt_seconds);
        self.last_ms = self.last_ms.max(now_ms);
        ((now_ms - start).max(0.0), dt)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start_ms.map(|s| (self.last_ms - s).max(0.0)).unwrap_or(0.0)
    }
}
