//! UI Widgets for Trovul

mod confetti;
mod features;
mod hero;
mod menu;
mod nav;
mod page;
mod pricing;
mod shadow;
mod stats;
pub mod status_bar;
mod waitlist;

pub use confetti::ConfettiWidget;
pub use features::FeaturesWidget;
pub use hero::HeroWidget;
pub use menu::MenuOverlay;
pub use nav::NavBar;
pub use page::PageWidget;
pub use pricing::PricingWidget;
pub use stats::StatsWidget;
pub use status_bar::StatusBarWidget;
pub use waitlist::WaitlistWidget;
