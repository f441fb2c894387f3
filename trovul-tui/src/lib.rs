//! Terminal UI for Trovul - pixel canvas, widgets, themes, and layout
//!
//! Renders the landing page as a scrolling column of sections over a
//! full-screen particle background.

mod app;
mod canvas;
mod layout;
mod theme;
pub mod widgets;

pub use app::{App, AppState, Focus, MessageType, STAT_LABELS};
pub use canvas::{CanvasWidget, PixelCanvas, UNITS_PER_PIXEL};
pub use layout::{
    cell_center, PageLayout, Section, CELL_HEIGHT, CELL_WIDTH, NAV_ROWS,
    STATUS_ROWS,
};
pub use theme::{to_color, Theme, MONO, NIGHT};
pub use widgets::{
    ConfettiWidget, FeaturesWidget, HeroWidget, MenuOverlay, NavBar, PageWidget, PricingWidget,
    StatsWidget, StatusBarWidget, WaitlistWidget,
};
