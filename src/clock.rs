//! Frame timing
//!
//! Tracks elapsed seconds between frames and caps the frame rate by
//! sleeping off the remainder of each frame. The sleep is the only
//! scheduling primitive in the whole system; everything else runs to
//! completion within the frame.

use std::time::{Duration, Instant};

/// Frames sampled for the FPS estimate
const FPS_WINDOW: usize = 60;

/// Per-frame delta-time source with a target-framerate cap
#[derive(Debug)]
pub struct FrameClock {
    target_fps: u32,
    last: Instant,
    delta: f32,
    // Ring buffer of recent deltas for the FPS readout
    frame_times: [f32; FPS_WINDOW],
    frame_index: usize,
    frames_seen: usize,
}

impl FrameClock {
    /// Clock capped at `target_fps` frames per second (0 = uncapped)
    pub fn new(target_fps: u32) -> Self {
        Self {
            target_fps,
            last: Instant::now(),
            delta: 0.0,
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            frames_seen: 0,
        }
    }

    /// End the current frame: sleep until the minimum frame duration has
    /// passed, then return the elapsed seconds since the previous tick.
    pub fn tick(&mut self) -> f32 {
        if self.target_fps > 0 {
            let min_frame = Duration::from_secs_f64(1.0 / self.target_fps as f64);
            let elapsed = self.last.elapsed();
            if elapsed < min_frame {
                std::thread::sleep(min_frame - elapsed);
            }
        }

        let now = Instant::now();
        self.delta = (now - self.last).as_secs_f32();
        self.last = now;

        self.frame_times[self.frame_index] = self.delta;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;
        self.frames_seen = self.frames_seen.saturating_add(1);

        self.delta
    }

    /// Seconds between the two most recent ticks
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Frames per second, averaged over the recent frame window
    pub fn fps(&self) -> u32 {
        let samples = self.frames_seen.min(FPS_WINDOW);
        if samples == 0 {
            return 0;
        }
        let total: f32 = self.frame_times[..samples].iter().sum();
        if total <= 0.0 {
            return 0;
        }
        (samples as f32 / total).round() as u32
    }
}
