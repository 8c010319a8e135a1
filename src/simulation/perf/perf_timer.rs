#[cfg(target_arch = "wasm32")]
use js_sys;

#[inline]
fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::sync::OnceLock;
        use std::time::Instant;
        static EPOCH: OnceLock<Instant> = OnceLock::new();
        EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
    }
}

/// Lap timer for the tick passes.
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    start_ms: f64,
    lap_ms: f64,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        let now = now_ms();
        PerfTimer { start_ms: now, lap_ms: now }
    }

    /// Time since the previous lap (or start), then begin a new lap.
    pub(crate) fn lap(&mut self) -> f64 {
        let now = now_ms();
        let lap = (now - self.lap_ms).max(0.0);
        self.lap_ms = now;
        lap
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        (now_ms() - self.start_ms).max(0.0)
    }
}
