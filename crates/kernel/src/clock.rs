/// Frame clock: turns monotonically increasing timestamps into clamped
/// delta-times and keeps a once-per-second FPS figure.
#[derive(Debug, Clone)]
pub struct Clock {
    last_ms: f64,
    max_dt: f32,
    frames: u32,
    fps_elapsed: f32,
    fps: f32,
    elapsed: f64,
}

impl Clock {
    /// Largest delta a single tick may report, in seconds.
    pub const DEFAULT_MAX_DT: f32 = 0.1;

    pub fn new(start_ms: f64) -> Self {
        Self {
            last_ms: start_ms,
            max_dt: Self::DEFAULT_MAX_DT,
            frames: 0,
            fps_elapsed: 0.0,
            fps: 0.0,
            elapsed: 0.0,
        }
    }

    /// Advance to `now_ms` and return the delta in seconds, clamped to
    /// `[0, max_dt]`.
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let dt = (((now_ms - self.last_ms) / 1000.0) as f32).clamp(0.0, self.max_dt);
        self.last_ms = now_ms;
        self.elapsed += f64::from(dt);

        self.frames += 1;
        self.fps_elapsed += dt;
        if self.fps_elapsed >= 1.0 {
            self.fps = self.frames as f32 / self.fps_elapsed;
            self.frames = 0;
            self.fps_elapsed = 0.0;
        }
        dt
    }

    /// Frames per second over the last full accumulation window, 0 until one
    /// window has completed.
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Sum of all clamped deltas, in seconds.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}
