//! Tuning for the particle field

use crate::color::{Rgb, Rgba, LINE_COLOR, PALETTE};

/// Direction particles are nudged when the pointer is near
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerResponse {
    /// Pulled toward the pointer
    #[default]
    Attract,
    /// Pushed away from the pointer
    Repel,
}

impl PointerResponse {
    /// Multiplier applied to the pointer offset
    pub fn sign(self) -> f32 {
        match self {
            PointerResponse::Attract => 1.0,
            PointerResponse::Repel => -1.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PointerResponse::Attract => "attract",
            PointerResponse::Repel => "repel",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "attract" => Some(PointerResponse::Attract),
            "repel" => Some(PointerResponse::Repel),
            _ => None,
        }
    }
}

/// Particle field parameters
///
/// Distances are in surface units, opacities in 0.0-1.0 and rates per frame.
#[derive(Debug, Clone)]
pub struct FieldConfig {
    /// Number of drift particles, fixed for the lifetime of the field
    pub particle_count: usize,
    /// Pixel grid used for snapping; also the minimum particle size
    pub pixel_size: f32,
    /// Largest absolute velocity per axis
    pub max_speed: f32,
    pub min_base_opacity: f32,
    pub max_base_opacity: f32,
    /// Colors picked for drift and trail particles (must not be empty)
    pub palette: &'static [Rgb],

    /// Pairs closer than this are joined by a line
    pub connect_distance: f32,
    /// Line opacity when two particles overlap
    pub connect_max_alpha: f32,
    pub line_color: Rgba,
    pub line_width: f32,

    /// Pointer influence radius
    pub interaction_radius: f32,
    /// Fraction of the pointer offset applied at full force
    pub pointer_strength: f32,
    /// Extra opacity at full force
    pub highlight_gain: f32,
    pub pointer_response: PointerResponse,

    pub trail_start_opacity: f32,
    /// Per-frame opacity multiplier
    pub trail_decay: f32,
    /// Trails fainter than this are dropped
    pub trail_prune_opacity: f32,
    /// Probability that a pointer move leaves a trail particle
    pub trail_spawn_chance: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: 50,
            pixel_size: 4.0,
            max_speed: 0.25,
            min_base_opacity: 0.1,
            max_base_opacity: 0.4,
            palette: &PALETTE,
            connect_distance: 100.0,
            connect_max_alpha: 0.2,
            line_color: LINE_COLOR,
            line_width: 1.0,
            interaction_radius: 150.0,
            pointer_strength: 0.02,
            highlight_gain: 0.5,
            pointer_response: PointerResponse::Attract,
            trail_start_opacity: 0.5,
            trail_decay: 0.95,
            trail_prune_opacity: 0.01,
            trail_spawn_chance: 0.3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_response_parse() {
        assert_eq!(PointerResponse::parse("Repel"), Some(PointerResponse::Repel));
        assert_eq!(PointerResponse::parse(" attract "), Some(PointerResponse::Attract));
        assert_eq!(PointerResponse::parse("orbit"), None);
    }

    #[test]
    fn test_defaults() {
        let config = FieldConfig::default();
        assert_eq!(config.particle_count, 50);
        assert_eq!(config.palette.len(), 5);
        assert_eq!(config.pointer_response.sign(), 1.0);
    }
}
