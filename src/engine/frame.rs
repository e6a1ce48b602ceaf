/// Frame timing
///
/// One update per pumped frame, variable timestep. The clock hands gameplay
/// the seconds elapsed since the previous frame and keeps a windowed FPS
/// average for diagnostics.
use std::time::{Duration, Instant};

/// FPS averaging window (last N frames)
const FPS_WINDOW_SIZE: usize = 60;

/// Per-frame timing state
pub struct FrameClock {
    last_frame_time: Instant,
    start_time: Instant,
    frame_times: Vec<Duration>,
    frame_count: u64,
    current_fps: f32,
    delta_time: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last_frame_time: now,
            start_time: now,
            frame_times: Vec::with_capacity(FPS_WINDOW_SIZE),
            frame_count: 0,
            current_fps: 0.0,
            delta_time: 0.0,
        }
    }

    /// Mark the start of a new frame and return the delta time in seconds.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.frame_count += 1;

        self.frame_times.push(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.remove(0);
        }
        if self.frame_count % 10 == 0 {
            self.update_fps();
        }

        self.delta_time = frame_time.as_secs_f32();
        self.delta_time
    }

    /// Seconds elapsed between the two most recent frames.
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Smoothed frames-per-second readout.
    pub fn fps(&self) -> f32 {
        self.current_fps
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Total time since the clock was created.
    pub fn elapsed(&self) -> Duration {
        Instant::now().duration_since(self.start_time)
    }

    fn update_fps(&mut self) {
        if self.frame_times.is_empty() {
            self.current_fps = 0.0;
            return;
        }
        let total: Duration = self.frame_times.iter().sum();
        let avg = total / self.frame_times.len() as u32;
        self.current_fps = if avg.as_secs_f32() > 0.0 {
            1.0 / avg.as_secs_f32()
        } else {
            0.0
        };
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
