//! Color themes for the Trovul page

use ratatui::style::{Color, Modifier, Style};
use trovul_field::Rgb;
use trovul_waitlist::FormState;

/// Theme configuration for the UI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,
    /// Primary foreground color (body text)
    pub fg: Color,
    /// Dimmed foreground (secondary text, borders)
    pub fg_dim: Color,
    /// Background color
    pub bg: Color,
    /// Brand color (titles, active links)
    pub highlight: Color,
    /// Accent color (numbers, focused input)
    pub accent: Color,
    /// Success color (signup accepted)
    pub success: Color,
    /// Error/danger color
    pub danger: Color,
    /// Solid nav bar background
    pub nav_solid: Color,
    /// Particle canvas backdrop
    pub canvas: Rgb,
}

impl Theme {
    /// Get style for normal text
    pub fn normal(&self) -> Style {
        Style::default().fg(self.fg)
    }

    /// Get style for dimmed text
    pub fn dim(&self) -> Style {
        Style::default().fg(self.fg_dim)
    }

    /// Get style for highlighted/selected items
    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.bg)
            .bg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for borders
    pub fn border(&self) -> Style {
        Style::default().fg(self.fg_dim)
    }

    /// Get style for active borders
    pub fn border_active(&self) -> Style {
        Style::default().fg(self.highlight)
    }

    /// Get title style
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for large numbers
    pub fn figure(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Get style for the submit button in a given form state
    pub fn button(&self, state: FormState) -> Style {
        let base = Style::default().add_modifier(Modifier::BOLD);
        match state {
            FormState::Idle => base.fg(self.bg).bg(self.highlight),
            FormState::Sending => base.fg(self.fg_dim).bg(self.highlight),
            FormState::Succeeded => base.fg(self.bg).bg(self.success),
            FormState::Failed => base.fg(self.bg).bg(self.danger),
        }
    }

    pub fn danger(&self) -> Style {
        Style::default().fg(self.danger)
    }

    pub fn success(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Style for the solid nav bar
    pub fn nav_solid(&self) -> Style {
        Style::default().bg(self.nav_solid)
    }
}

/// Convert a field color to a terminal color
pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Violet-on-night theme matching the landing page
pub const NIGHT: Theme = Theme {
    name: "night",
    fg: Color::Rgb(228, 228, 240),       // near white
    fg_dim: Color::Rgb(113, 113, 140),   // slate
    bg: Color::Rgb(5, 5, 8),             // #050508
    highlight: Color::Rgb(139, 92, 246), // #8b5cf6 violet
    accent: Color::Rgb(6, 182, 212),     // #06b6d4 cyan
    success: Color::Rgb(16, 185, 129),   // #10b981 emerald
    danger: Color::Rgb(239, 68, 68),     // #ef4444 red
    nav_solid: Color::Rgb(12, 12, 18),
    canvas: Rgb::new(5, 5, 8),
};

/// Low-color theme for plain terminals
pub const MONO: Theme = Theme {
    name: "mono",
    fg: Color::White,
    fg_dim: Color::Gray,
    bg: Color::Black,
    highlight: Color::White,
    accent: Color::White,
    success: Color::Green,
    danger: Color::Red,
    nav_solid: Color::DarkGray,
    canvas: Rgb::new(0, 0, 0),
};

impl Theme {
    /// Look up a theme by name
    pub fn by_name(name: &str) -> Option<Theme> {
        match name {
            "night" => Some(NIGHT),
            "mono" => Some(MONO),
            _ => None,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        NIGHT
    }
}
