//! Page behaviors for Trovul
//!
//! Small, independent state machines behind the landing page: smooth
//! scrolling, the nav bar background, parallax, stat counters, card tilt,
//! the mobile menu and the confetti burst.

mod confetti;
mod counter;
mod menu;
mod nav;
mod scroll;
mod tilt;

pub use confetti::{ConfettiBurst, ConfettiPiece, ConfettiShape, CONFETTI_COLORS, CONFETTI_LIFETIME};
pub use counter::{visible_ratio, Counter, RevealObserver, COUNTER_DURATION, COUNTER_TICK};
pub use menu::MobileMenu;
pub use nav::{parallax_offset, NavStyle, NAV_SOLID_AFTER, PARALLAX_FACTOR};
pub use scroll::{Anchors, ScrollAnimator};
pub use tilt::{Bounds, CardTilt, Tilt, MAX_TILT_DEGREES};
