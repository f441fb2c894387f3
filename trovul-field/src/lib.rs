//! Pixel particle field for Trovul
//!
//! Drifting point-sprites joined by constellation lines, short-lived
//! pointer trails, and a frame clock that paces the animation.

mod color;
mod config;
mod field;
mod frames;
mod geometry;
mod particle;
mod surface;

pub use color::{Rgb, Rgba, LINE_COLOR, PALETTE};
pub use config::{FieldConfig, PointerResponse};
pub use field::ParticleField;
pub use frames::{CancelHandle, Frame, FrameClock, Frames};
pub use geometry::{Point, Viewport};
pub use particle::{pointer_force, snap, DriftParticle, TrailParticle};
pub use surface::{DrawCommand, RecordingSurface, Surface};
