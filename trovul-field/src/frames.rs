//! Frame clock
//!
//! The animation is an endless sequence of frames consumed one at a time.
//! Each `next()` waits for the following refresh deadline; frames that were
//! missed are skipped rather than replayed. Cancelling the clock ends the
//! sequence, and nothing else needs tearing down.

use std::iter::FusedIterator;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// One tick of the animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Zero-based frame number
    pub index: u64,
    /// Time since the previous frame (zero for the first)
    pub delta: Duration,
}

/// Stops a running frame sequence from any thread
#[derive(Debug, Clone, Default)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Display-paced frame source
#[derive(Debug)]
pub struct FrameClock {
    interval: Duration,
    cancel: CancelHandle,
}

impl FrameClock {
    /// Clock ticking at `fps` frames per second (at least 1)
    pub fn new(fps: u32) -> Self {
        let fps = fps.max(1);
        Self {
            interval: Duration::from_secs(1) / fps,
            cancel: CancelHandle::default(),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Start the frame sequence
    pub fn frames(self) -> Frames {
        Frames {
            interval: self.interval,
            cancel: self.cancel,
            next_deadline: None,
            last: None,
            index: 0,
        }
    }
}

impl IntoIterator for FrameClock {
    type Item = Frame;
    type IntoIter = Frames;

    fn into_iter(self) -> Frames {
        self.frames()
    }
}

/// Lazy, cancelable sequence of frames
#[derive(Debug)]
pub struct Frames {
    interval: Duration,
    cancel: CancelHandle,
    next_deadline: Option<Instant>,
    last: Option<Instant>,
    index: u64,
}

impl Frames {
    /// Time left before the next frame is due
    pub fn time_until_next(&self) -> Duration {
        self.next_deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(Duration::ZERO)
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }
}

impl Iterator for Frames {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.cancel.is_cancelled() {
            return None;
        }

        let wait = self.time_until_next();
        if !wait.is_zero() {
            thread::sleep(wait);
            if self.cancel.is_cancelled() {
                return None;
            }
        }

        let now = Instant::now();
        let delta = self
            .last
            .map(|last| now.duration_since(last))
            .unwrap_or(Duration::ZERO);

        self.last = Some(now);
        self.next_deadline = Some(now + self.interval);

        let frame = Frame {
            index: self.index,
            delta,
        };
        self.index += 1;
        Some(frame)
    }
}

impl FusedIterator for Frames {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_from_fps() {
        assert_eq!(FrameClock::new(50).interval(), Duration::from_millis(20));
        // Zero is treated as one frame per second
        assert_eq!(FrameClock::new(0).interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_frames_are_numbered_and_paced() {
        let clock = FrameClock::new(200);
        let start = Instant::now();
        let frames: Vec<Frame> = clock.frames().take(4).collect();

        assert_eq!(
            frames.iter().map(|f| f.index).collect::<Vec<_>>(),
            vec![0, 1, 2, 3]
        );
        assert_eq!(frames[0].delta, Duration::ZERO);
        for frame in &frames[1..] {
            assert!(frame.delta >= Duration::from_millis(5));
        }
        assert!(start.elapsed() >= Duration::from_millis(15));
    }

    #[test]
    fn test_cancel_ends_sequence() {
        let clock = FrameClock::new(1000);
        let handle = clock.cancel_handle();
        let mut frames = clock.frames();

        assert!(frames.next().is_some());
        assert!(frames.next().is_some());
        handle.cancel();
        assert!(frames.next().is_none());
        assert!(frames.next().is_none());
    }

    #[test]
    fn test_cancel_before_start() {
        let clock = FrameClock::new(60);
        clock.cancel_handle().cancel();
        assert_eq!(clock.frames().count(), 0);
    }
}
