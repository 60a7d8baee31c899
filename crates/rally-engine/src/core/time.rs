use std::time::{Duration, Instant};

/// Frame pacing and elapsed-time measurement.
///
/// The loop is wall-clock throttled, not fixed-timestep: `throttle` sleeps
/// off the remainder of the frame budget, while `measure` reports the real
/// time between frames for informational use. Motion is never scaled by the
/// measured delta; velocities are per-frame quantities.
pub struct FrameClock {
    target: Duration,
    last_measure: Option<Instant>,
    last_throttle: Option<Instant>,
}

impl FrameClock {
    pub fn new(target_fps: u32) -> Self {
        assert!(target_fps > 0, "target frame rate must be positive");
        Self {
            target: Duration::from_secs_f64(1.0 / target_fps as f64),
            last_measure: None,
            last_throttle: None,
        }
    }

    /// Seconds since the previous call; 0.0 on the first call.
    pub fn measure(&mut self) -> f32 {
        let now = Instant::now();
        let dt = self
            .last_measure
            .map(|last| now.duration_since(last).as_secs_f32())
            .unwrap_or(0.0);
        self.last_measure = Some(now);
        dt
    }

    /// Sleep so that successive calls are at least one frame budget apart.
    pub fn throttle(&mut self) {
        if let Some(last) = self.last_throttle {
            let elapsed = last.elapsed();
            if elapsed < self.target {
                std::thread::sleep(self.target - elapsed);
            }
        }
        self.last_throttle = Some(Instant::now());
    }

    /// The frame budget in seconds.
    pub fn target_dt(&self) -> f32 {
        self.target.as_secs_f32()
    }
}
