//! Stat counters that count up once their section is revealed

use std::time::Duration;

/// Time a counter takes to reach its target
pub const COUNTER_DURATION: Duration = Duration::from_millis(2000);
/// Interval between counter steps
pub const COUNTER_TICK: Duration = Duration::from_millis(16);

/// Animated number such as `10K+` or `98`
#[derive(Debug, Clone, PartialEq)]
pub struct Counter {
    label: String,
    target: f64,
    current: f64,
    increment: f64,
    thousands: bool,
    plus: bool,
    started: bool,
    pending: Duration,
}

impl Counter {
    /// Read the target from the digits in `label`
    ///
    /// A `K` anywhere in the label is kept as a suffix, then a `+`.
    /// Returns `None` when the label has no digits.
    pub fn parse(label: &str) -> Option<Self> {
        let digits: String = label.chars().filter(|c| c.is_ascii_digit()).collect();
        let target: f64 = digits.parse().ok()?;
        let steps = (COUNTER_DURATION.as_millis() / COUNTER_TICK.as_millis()) as f64;

        Some(Self {
            label: label.to_string(),
            target,
            current: 0.0,
            increment: target / steps,
            thousands: label.contains('K'),
            plus: label.contains('+'),
            started: false,
            pending: Duration::ZERO,
        })
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_finished(&self) -> bool {
        self.started && self.current >= self.target
    }

    /// Begin counting from zero
    pub fn start(&mut self) {
        self.started = true;
        self.current = 0.0;
        self.pending = Duration::ZERO;
    }

    /// One counter step, clamped at the target
    pub fn tick(&mut self) {
        if !self.started {
            return;
        }
        self.current += self.increment;
        if self.current >= self.target {
            self.current = self.target;
        }
    }

    /// Run as many steps as fit in `elapsed`, carrying the remainder
    pub fn advance(&mut self, elapsed: Duration) {
        if !self.started || self.is_finished() {
            return;
        }
        self.pending += elapsed;
        while self.pending >= COUNTER_TICK && !self.is_finished() {
            self.pending -= COUNTER_TICK;
            self.tick();
        }
    }

    /// Text to show: the label until started, then the count
    pub fn display(&self) -> String {
        if !self.started {
            return self.label.clone();
        }
        let mut text = (self.current.floor() as u64).to_string();
        if self.thousands {
            text.push('K');
        }
        if self.plus {
            text.push('+');
        }
        text
    }
}

/// Fraction of a section inside the visible window
pub fn visible_ratio(section_top: f32, section_height: f32, view_top: f32, view_height: f32) -> f32 {
    if section_height <= 0.0 {
        return 0.0;
    }
    let top = section_top.max(view_top);
    let bottom = (section_top + section_height).min(view_top + view_height);
    ((bottom - top) / section_height).clamp(0.0, 1.0)
}

/// Fires once when a section becomes sufficiently visible
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealObserver {
    threshold: f32,
    fired: bool,
}

impl Default for RevealObserver {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl RevealObserver {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            fired: false,
        }
    }

    /// Report the current visible ratio; true only on the first crossing
    pub fn observe(&mut self, ratio: f32) -> bool {
        if self.fired || ratio < self.threshold {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}
