//! Nav bar background and hero parallax, both driven by the scroll offset

use trovul_field::{Rgb, Rgba};

/// Scroll offset after which the nav bar turns solid
pub const NAV_SOLID_AFTER: f32 = 100.0;

/// Hero background moves at this fraction of the scroll speed
pub const PARALLAX_FACTOR: f32 = 0.3;

const NAV_BASE: Rgb = Rgb::new(5, 5, 8);

/// Nav bar look for the current scroll position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavStyle {
    #[default]
    Translucent,
    /// Scrolled past the hero: near-opaque with a drop shadow
    Solid,
}

impl NavStyle {
    pub fn for_scroll(offset: f32) -> Self {
        if offset > NAV_SOLID_AFTER {
            NavStyle::Solid
        } else {
            NavStyle::Translucent
        }
    }

    pub fn background(self) -> Rgba {
        match self {
            NavStyle::Translucent => NAV_BASE.with_alpha(0.7),
            NavStyle::Solid => NAV_BASE.with_alpha(0.95),
        }
    }

    pub fn has_shadow(self) -> bool {
        matches!(self, NavStyle::Solid)
    }
}

/// Background offset for a page scrolled by `scrolled`
pub fn parallax_offset(scrolled: f32) -> f32 {
    scrolled * PARALLAX_FACTOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_threshold() {
        assert_eq!(NavStyle::for_scroll(0.0), NavStyle::Translucent);
        assert_eq!(NavStyle::for_scroll(100.0), NavStyle::Translucent);
        assert_eq!(NavStyle::for_scroll(100.5), NavStyle::Solid);
        assert!(NavStyle::Solid.has_shadow());
        assert!(!NavStyle::Translucent.has_shadow());
        assert_eq!(NavStyle::Solid.background().alpha, 0.95);
    }

    #[test]
    fn test_parallax() {
        assert_eq!(parallax_offset(0.0), 0.0);
        assert!((parallax_offset(200.0) - 60.0).abs() < 1e-4);
    }
}
