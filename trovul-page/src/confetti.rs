//! Confetti burst shown after a successful signup

use std::time::Duration;

use rand::Rng;
use trovul_field::Rgb;

pub const CONFETTI_COLORS: [Rgb; 5] = [
    Rgb::from_hex(0x8b5cf6),
    Rgb::from_hex(0x06b6d4),
    Rgb::from_hex(0x10b981),
    Rgb::from_hex(0xfbbf24),
    Rgb::from_hex(0xf87171),
];

/// Pieces per burst
const PIECES: usize = 50;
/// Pieces start this far above the top edge
const START_ABOVE: f32 = 20.0;
/// Full spin over a piece's fall, in degrees
const SPIN_DEGREES: f32 = 720.0;

/// Time after which the whole burst is removed
pub const CONFETTI_LIFETIME: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfettiShape {
    Round,
    Square,
}

/// One falling piece
#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiPiece {
    /// Horizontal position as a percentage of the width
    pub x_percent: f32,
    pub color: Rgb,
    pub shape: ConfettiShape,
    /// Time to fall the full height
    pub fall_time: Duration,
}

impl ConfettiPiece {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let color = CONFETTI_COLORS[rng.gen_range(0..CONFETTI_COLORS.len())];
        let shape = if rng.gen_bool(0.5) {
            ConfettiShape::Round
        } else {
            ConfettiShape::Square
        };

        Self {
            x_percent: rng.gen_range(0.0..100.0),
            color,
            shape,
            fall_time: Duration::from_secs_f32(rng.gen_range(2.0..4.0)),
        }
    }

    /// Linear progress through the fall, 0.0-1.0
    pub fn progress(&self, age: Duration) -> f32 {
        if self.fall_time.is_zero() {
            return 1.0;
        }
        (age.as_secs_f32() / self.fall_time.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Vertical position for a screen `height` units tall
    pub fn y(&self, age: Duration, height: f32) -> f32 {
        -START_ABOVE + self.progress(age) * height
    }

    pub fn opacity(&self, age: Duration) -> f32 {
        1.0 - self.progress(age)
    }

    pub fn rotation(&self, age: Duration) -> f32 {
        self.progress(age) * SPIN_DEGREES
    }
}

/// A burst of confetti and its age
#[derive(Debug, Clone)]
pub struct ConfettiBurst {
    pieces: Vec<ConfettiPiece>,
    age: Duration,
}

impl ConfettiBurst {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            pieces: (0..PIECES).map(|_| ConfettiPiece::random(rng)).collect(),
            age: Duration::ZERO,
        }
    }

    pub fn pieces(&self) -> &[ConfettiPiece] {
        &self.pieces
    }

    pub fn age(&self) -> Duration {
        self.age
    }

    pub fn advance(&mut self, elapsed: Duration) {
        self.age += elapsed;
    }

    pub fn is_finished(&self) -> bool {
        self.age >= CONFETTI_LIFETIME
    }
}
