//! Hover tilt for feature cards

/// Largest tilt on either axis, in degrees
pub const MAX_TILT_DEGREES: f32 = 3.0;
/// Pointer offset (in surface units) per degree of tilt
const UNITS_PER_DEGREE: f32 = 80.0;

/// Axis-aligned card rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Rotation applied to a hovered card, in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    /// Positive when the pointer is below center
    pub rotate_x: f32,
    /// Positive when the pointer is left of center
    pub rotate_y: f32,
}

impl Tilt {
    /// Tilt for a pointer at (`x`, `y`) over `bounds`
    pub fn from_pointer(bounds: Bounds, x: f32, y: f32) -> Self {
        let local_x = x - bounds.x;
        let local_y = y - bounds.y;
        let center_x = bounds.width / 2.0;
        let center_y = bounds.height / 2.0;

        Self {
            rotate_x: ((local_y - center_y) / UNITS_PER_DEGREE)
                .clamp(-MAX_TILT_DEGREES, MAX_TILT_DEGREES),
            rotate_y: ((center_x - local_x) / UNITS_PER_DEGREE)
                .clamp(-MAX_TILT_DEGREES, MAX_TILT_DEGREES),
        }
    }

    pub fn is_flat(&self) -> bool {
        self.rotate_x == 0.0 && self.rotate_y == 0.0
    }
}

/// A card that tilts while the pointer is over it
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CardTilt {
    bounds: Bounds,
    tilt: Option<Tilt>,
}

impl CardTilt {
    pub fn new(bounds: Bounds) -> Self {
        Self { bounds, tilt: None }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Move the card; an existing tilt is dropped until the next pointer move
    pub fn set_bounds(&mut self, bounds: Bounds) {
        if bounds != self.bounds {
            self.bounds = bounds;
            self.tilt = None;
        }
    }

    /// Track the pointer; leaving the card resets the tilt
    pub fn pointer_at(&mut self, x: f32, y: f32) {
        self.tilt = self
            .bounds
            .contains(x, y)
            .then(|| Tilt::from_pointer(self.bounds, x, y));
    }

    pub fn tilt(&self) -> Option<Tilt> {
        self.tilt
    }
}
