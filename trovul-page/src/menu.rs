//! Mobile menu toggle

/// Collapsible nav menu shown on narrow screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Following a menu link always closes the menu
    pub fn follow_link(&mut self) {
        self.open = false;
    }

    /// Escape closes an open menu; returns true if it did
    pub fn escape(&mut self) -> bool {
        if self.open {
            self.open = false;
            true
        } else {
            false
        }
    }

    /// Page scrolling is locked while the menu is open
    pub fn scroll_locked(&self) -> bool {
        self.open
    }
}
