//! Drift and trail particles

use rand::seq::SliceRandom;
use rand::Rng;

use crate::color::Rgb;
use crate::config::FieldConfig;
use crate::geometry::{Point, Viewport};
use crate::surface::Surface;

/// Snap a coordinate down onto a grid of `grid` units
pub fn snap(value: f32, grid: f32) -> f32 {
    if grid <= 0.0 {
        return value;
    }
    (value / grid).floor() * grid
}

/// Pointer force for a particle `distance` away, or `None` outside `radius`
///
/// Falls linearly from 1.0 at the pointer to 0.0 at the radius.
pub fn pointer_force(distance: f32, radius: f32) -> Option<f32> {
    if distance < radius {
        Some((radius - distance) / radius)
    } else {
        None
    }
}

/// Uniform sample in `[low, high)`, or `low` for an empty range
fn uniform<R: Rng + ?Sized>(rng: &mut R, low: f32, high: f32) -> f32 {
    if high > low {
        rng.gen_range(low..high)
    } else {
        low
    }
}

pub(crate) fn pick_color<R: Rng + ?Sized>(rng: &mut R, palette: &[Rgb]) -> Rgb {
    palette.choose(rng).copied().unwrap_or_default()
}

/// Long-lived drifting point-sprite
#[derive(Debug, Clone, PartialEq)]
pub struct DriftParticle {
    pub position: Point,
    pub size: f32,
    /// Per-frame displacement, fixed at creation
    pub velocity: Point,
    pub color: Rgb,
    pub base_opacity: f32,
    /// Opacity for the current frame, derived from `base_opacity`
    pub opacity: f32,
}

impl DriftParticle {
    /// Create a particle with randomized attributes inside the viewport
    pub fn random<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport, config: &FieldConfig) -> Self {
        let position = Point::new(
            uniform(rng, 0.0, viewport.width),
            uniform(rng, 0.0, viewport.height),
        );
        let size = uniform(rng, config.pixel_size, config.pixel_size * 2.0);
        let velocity = Point::new(
            uniform(rng, -config.max_speed, config.max_speed),
            uniform(rng, -config.max_speed, config.max_speed),
        );
        let color = pick_color(rng, config.palette);
        let base_opacity = uniform(rng, config.min_base_opacity, config.max_base_opacity);

        Self {
            position,
            size,
            velocity,
            color,
            base_opacity,
            opacity: base_opacity,
        }
    }

    /// Move by the fixed velocity
    pub fn advance(&mut self) {
        self.position.x += self.velocity.x;
        self.position.y += self.velocity.y;
    }

    /// Apply the pointer offset and recompute opacity from the base value
    ///
    /// Returns the force applied, if the pointer was within range.
    pub fn respond_to_pointer(&mut self, pointer: Point, config: &FieldConfig) -> Option<f32> {
        let dx = pointer.x - self.position.x;
        let dy = pointer.y - self.position.y;
        let distance = (dx * dx + dy * dy).sqrt();

        match pointer_force(distance, config.interaction_radius) {
            Some(force) => {
                let step = force * config.pointer_strength * config.pointer_response.sign();
                self.opacity = self.base_opacity + force * config.highlight_gain;
                self.position.x += dx * step;
                self.position.y += dy * step;
                Some(force)
            }
            None => {
                self.opacity = self.base_opacity;
                None
            }
        }
    }

    /// Toroidal wrap once a coordinate leaves the viewport by more than `size`
    pub fn wrap(&mut self, viewport: Viewport) {
        let size = self.size;

        if self.position.x < -size {
            self.position.x = viewport.width + size;
        }
        if self.position.x > viewport.width + size {
            self.position.x = -size;
        }
        if self.position.y < -size {
            self.position.y = viewport.height + size;
        }
        if self.position.y > viewport.height + size {
            self.position.y = -size;
        }
    }

    /// Draw as a grid-snapped square
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, grid: f32) {
        surface.set_fill_color(self.color);
        surface.set_global_alpha(self.opacity);
        surface.fill_rect(
            snap(self.position.x, grid),
            snap(self.position.y, grid),
            self.size,
            self.size,
        );
    }
}

/// Short-lived sprite left behind by pointer movement
#[derive(Debug, Clone, PartialEq)]
pub struct TrailParticle {
    /// Grid-snapped spawn position
    pub position: Point,
    pub size: f32,
    pub color: Rgb,
    pub opacity: f32,
}

impl TrailParticle {
    /// Spawn at the grid cell containing `pointer`
    pub fn spawn(pointer: Point, grid: f32, color: Rgb, opacity: f32) -> Self {
        Self {
            position: Point::new(snap(pointer.x, grid), snap(pointer.y, grid)),
            size: grid,
            color,
            opacity,
        }
    }

    pub fn decay(&mut self, factor: f32) {
        self.opacity *= factor.clamp(0.0, 1.0);
    }

    pub fn is_expired(&self, threshold: f32) -> bool {
        self.opacity < threshold
    }

    /// Draw at the stored position (already on the grid)
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.set_fill_color(self.color);
        surface.set_global_alpha(self.opacity);
        surface.fill_rect(self.position.x, self.position.y, self.size, self.size);
    }
}
