//! The particle field component
//!
//! Owns the drift particles, the trail sequence, and the pointer and viewport
//! state they read. Input entry points (`pointer_moved`, `resize`) are the
//! only writers; `frame` advances and redraws everything once.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::FieldConfig;
use crate::geometry::{Point, Viewport};
use crate::particle::{pick_color, DriftParticle, TrailParticle};
use crate::surface::Surface;

/// Pointer-reactive particle background
#[derive(Debug)]
pub struct ParticleField<R = StdRng> {
    config: FieldConfig,
    viewport: Viewport,
    pointer: Point,
    drift: Vec<DriftParticle>,
    trails: Vec<TrailParticle>,
    rng: R,
    frame_count: u64,
}

impl ParticleField<StdRng> {
    /// Field seeded from `seed`, or from system entropy when `None`
    pub fn with_seed(viewport: Viewport, config: FieldConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(viewport, config, rng)
    }

    /// Start a field on `surface`
    ///
    /// Returns `None` when there is no surface to draw on; the background is
    /// then simply skipped.
    pub fn mount<S: Surface + ?Sized>(
        surface: Option<&S>,
        config: FieldConfig,
        seed: Option<u64>,
    ) -> Option<Self> {
        let Some(surface) = surface else {
            tracing::debug!("no particle surface, background disabled");
            return None;
        };

        let viewport = surface.size();
        if viewport.is_empty() {
            tracing::debug!(
                width = viewport.width,
                height = viewport.height,
                "particle surface has no area, background disabled"
            );
            return None;
        }

        Some(Self::with_seed(viewport, config, seed))
    }
}

impl<R: Rng> ParticleField<R> {
    /// Create the fixed drift population over `viewport`
    pub fn new(viewport: Viewport, config: FieldConfig, mut rng: R) -> Self {
        let drift = (0..config.particle_count)
            .map(|_| DriftParticle::random(&mut rng, viewport, &config))
            .collect();

        tracing::debug!(
            particles = config.particle_count,
            width = viewport.width,
            height = viewport.height,
            "particle field initialised"
        );

        Self {
            config,
            viewport,
            pointer: viewport.center(),
            drift,
            trails: Vec::new(),
            rng,
            frame_count: 0,
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Last known pointer position
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    pub fn drift(&self) -> &[DriftParticle] {
        &self.drift
    }

    pub fn trails(&self) -> &[TrailParticle] {
        &self.trails
    }

    /// Frames drawn so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Record a pointer move, occasionally leaving a trail particle behind
    ///
    /// Returns true if a trail particle was added.
    pub fn pointer_moved(&mut self, x: f32, y: f32) -> bool {
        self.pointer = Point::new(x, y);

        if !self.rng.gen_bool(self.config.trail_spawn_chance.clamp(0.0, 1.0)) {
            return false;
        }

        let color = pick_color(&mut self.rng, self.config.palette);
        self.trails.push(TrailParticle::spawn(
            self.pointer,
            self.config.pixel_size,
            color,
            self.config.trail_start_opacity,
        ));
        true
    }

    /// Adopt new viewport bounds and resize the surface to match
    ///
    /// Particle positions are left alone; anything now outside the bounds is
    /// brought back by the regular wrap on the next frame.
    pub fn resize<S: Surface + ?Sized>(&mut self, surface: &mut S, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        surface.resize(width, height);
        tracing::debug!(width, height, "particle field resized");
    }

    /// Advance every particle by one frame and redraw the field
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear_rect(0.0, 0.0, self.viewport.width, self.viewport.height);

        self.draw_connections(surface);

        let grid = self.config.pixel_size;
        for particle in &mut self.drift {
            particle.advance();
            particle.respond_to_pointer(self.pointer, &self.config);
            particle.wrap(self.viewport);
            particle.draw(surface, grid);
        }

        let threshold = self.config.trail_prune_opacity;
        self.trails.retain(|trail| !trail.is_expired(threshold));
        for trail in &mut self.trails {
            trail.decay(self.config.trail_decay);
            trail.draw(surface);
        }

        surface.set_global_alpha(1.0);
        self.frame_count += 1;
    }

    /// Constellation lines between every pair closer than the threshold
    fn draw_connections<S: Surface + ?Sized>(&self, surface: &mut S) {
        let threshold = self.config.connect_distance;
        if threshold <= 0.0 {
            return;
        }

        surface.set_stroke(self.config.line_color, self.config.line_width);

        for (i, a) in self.drift.iter().enumerate() {
            for b in &self.drift[i + 1..] {
                let distance = a.position.distance(b.position);
                if distance < threshold {
                    let alpha = (threshold - distance) / threshold * self.config.connect_max_alpha;
                    surface.set_global_alpha(alpha);
                    surface.stroke_line(a.position, b.position);
                }
            }
        }
    }
}
