//! Frame timing and FPS reporting.

use std::time::{Duration, Instant};

pub struct FrameStats {
    pub show_fps: bool,
    last_report: Instant,
    last_frame: Instant,
    frame_count: u32,
    last_fps: u32,
}

impl FrameStats {
    pub fn new(now: Instant) -> Self {
        Self {
            show_fps: false,
            last_report: now,
            last_frame: now,
            frame_count: 0,
            last_fps: 0,
        }
    }

    /// Starts timing afresh from `now`, dropping anything counted so far.
    pub fn restart(&mut self, now: Instant) {
        self.last_report = now;
        self.last_frame = now;
        self.frame_count = 0;
    }

    /// Records a frame at `now` and returns the time since the previous one.
    pub fn begin_frame(&mut self, now: Instant) -> Duration {
        let delta = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;
        self.frame_count += 1;
        delta
    }

    /// Frames counted over the last full second, once per second while FPS display is on.
    pub fn poll_fps(&mut self, now: Instant) -> Option<u32> {
        let elapsed = now.saturating_duration_since(self.last_report);
        if elapsed < Duration::from_secs(1) {
            return None;
        }
        self.last_fps = self.frame_count;
        self.frame_count = 0;
        self.last_report = now;
        self.show_fps.then_some(self.last_fps)
    }

    pub fn toggle_fps_display(&mut self) -> bool {
        self.show_fps = !self.show_fps;
        self.show_fps
    }

    pub fn get_fps(&self) -> u32 {
        self.last_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_between_frames() {
        let start = Instant::now();
        let mut stats = FrameStats::new(start);
        let delta = stats.begin_frame(start + Duration::from_millis(16));
        assert_eq!(delta, Duration::from_millis(16));
    }

    #[test]
    fn restart_excludes_startup_time() {
        let start = Instant::now();
        let mut stats = FrameStats::new(start);
        stats.begin_frame(start);
        let ready = start + Duration::from_secs(3);
        stats.restart(ready);
        let delta = stats.begin_frame(ready + Duration::from_millis(16));
        assert_eq!(delta, Duration::from_millis(16));
        stats.toggle_fps_display();
        assert_eq!(stats.poll_fps(ready + Duration::from_secs(1)), Some(1));
    }

    #[test]
    fn reports_once_per_second_when_enabled() {
        let start = Instant::now();
        let mut stats = FrameStats::new(start);
        stats.toggle_fps_display();
        for i in 1..=60 {
            stats.begin_frame(start + Duration::from_millis(i * 16));
        }
        assert_eq!(stats.poll_fps(start + Duration::from_millis(900)), None);
        assert_eq!(stats.poll_fps(start + Duration::from_secs(1)), Some(60));
        assert_eq!(stats.poll_fps(start + Duration::from_millis(1500)), None);
    }

    #[test]
    fn silent_when_disabled_but_still_counts() {
        let start = Instant::now();
        let mut stats = FrameStats::new(start);
        stats.begin_frame(start);
        stats.begin_frame(start);
        assert_eq!(stats.poll_fps(start + Duration::from_secs(2)), None);
        assert_eq!(stats.get_fps(), 2);
    }
}
