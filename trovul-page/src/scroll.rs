//! Smooth scrolling between page sections

/// Fraction of the remaining distance covered per frame
const EASE: f32 = 0.2;
/// Distance under which the animation snaps to the target
const SNAP: f32 = 0.5;

/// Section ids and their offsets from the top of the page
#[derive(Debug, Clone, Default)]
pub struct Anchors {
    entries: Vec<(String, f32)>,
}

impl Anchors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or move an anchor
    pub fn insert(&mut self, id: impl Into<String>, offset: f32) {
        let id = id.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == id) {
            Some(entry) => entry.1 = offset,
            None => self.entries.push((id, offset)),
        }
    }

    /// Offset of `id`, accepting an optional leading `#`
    pub fn offset_of(&self, id: &str) -> Option<f32> {
        let id = id.strip_prefix('#').unwrap_or(id);
        self.entries
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, offset)| *offset)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    /// Last anchor at or above `offset`
    pub fn current(&self, offset: f32) -> Option<&str> {
        self.entries
            .iter()
            .filter(|(_, start)| *start <= offset + SNAP)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id.as_str())
    }
}

/// Eased vertical scroll position
#[derive(Debug, Clone, Default)]
pub struct ScrollAnimator {
    current: f32,
    target: f32,
    max: f32,
}

impl ScrollAnimator {
    pub fn new(max: f32) -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            max: max.max(0.0),
        }
    }

    /// Current scroll offset
    pub fn offset(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Change the scrollable range, pulling offsets back inside it
    pub fn set_max(&mut self, max: f32) {
        self.max = max.max(0.0);
        self.current = self.current.clamp(0.0, self.max);
        self.target = self.target.clamp(0.0, self.max);
    }

    /// Start an eased scroll toward `target`
    pub fn scroll_to(&mut self, target: f32) {
        self.target = target.clamp(0.0, self.max);
    }

    /// Smooth-scroll to a named anchor; unknown anchors are ignored
    pub fn scroll_to_anchor(&mut self, anchors: &Anchors, id: &str) -> bool {
        match anchors.offset_of(id) {
            Some(offset) => {
                self.scroll_to(offset);
                true
            }
            None => {
                tracing::debug!(anchor = id, "scroll target not found");
                false
            }
        }
    }

    /// Jump immediately, cancelling any animation
    pub fn scroll_by(&mut self, delta: f32) {
        self.current = (self.current + delta).clamp(0.0, self.max);
        self.target = self.current;
    }

    pub fn is_animating(&self) -> bool {
        self.current != self.target
    }

    /// Advance the animation by one frame; returns true while still moving
    pub fn step(&mut self) -> bool {
        let remaining = self.target - self.current;
        if remaining.abs() <= SNAP {
            self.current = self.target;
            return false;
        }
        self.current += remaining * EASE;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_anchors() -> Anchors {
        let mut anchors = Anchors::new();
        anchors.insert("hero", 0.0);
        anchors.insert("features", 400.0);
        anchors.insert("pricing", 900.0);
        anchors
    }

    #[test]
    fn test_anchor_lookup() {
        let anchors = page_anchors();
        assert_eq!(anchors.offset_of("#features"), Some(400.0));
        assert_eq!(anchors.offset_of("pricing"), Some(900.0));
        assert_eq!(anchors.offset_of("#missing"), None);
        assert_eq!(anchors.current(450.0), Some("features"));
        assert_eq!(anchors.current(0.0), Some("hero"));
    }

    #[test]
    fn test_anchor_insert_replaces() {
        let mut anchors = page_anchors();
        anchors.insert("features", 420.0);
        assert_eq!(anchors.offset_of("features"), Some(420.0));
        assert_eq!(anchors.ids().count(), 3);
    }

    #[test]
    fn test_eases_to_target() {
        let mut scroll = ScrollAnimator::new(1000.0);
        scroll.scroll_to(400.0);

        scroll.step();
        assert!((scroll.offset() - 80.0).abs() < 1e-3);

        let mut frames = 1;
        while scroll.step() {
            frames += 1;
            assert!(frames < 100);
        }
        assert_eq!(scroll.offset(), 400.0);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn test_unknown_anchor_does_nothing() {
        let mut scroll = ScrollAnimator::new(1000.0);
        assert!(!scroll.scroll_to_anchor(&page_anchors(), "#faq"));
        assert!(!scroll.is_animating());
        assert!(scroll.scroll_to_anchor(&page_anchors(), "#pricing"));
        assert_eq!(scroll.target(), 900.0);
    }

    #[test]
    fn test_clamped_to_range() {
        let mut scroll = ScrollAnimator::new(500.0);
        scroll.scroll_to(900.0);
        assert_eq!(scroll.target(), 500.0);

        scroll.scroll_by(-50.0);
        assert_eq!(scroll.offset(), 0.0);
        assert!(!scroll.is_animating());

        scroll.scroll_by(700.0);
        assert_eq!(scroll.offset(), 500.0);
        scroll.set_max(200.0);
        assert_eq!(scroll.offset(), 200.0);
    }
}
