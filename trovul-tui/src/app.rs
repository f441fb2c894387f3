//! Application state management (Elm architecture)

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::layout::Rect;
use trovul_field::{FieldConfig, ParticleField, Surface};
use trovul_page::{
    parallax_offset, visible_ratio, Anchors, Bounds, CardTilt, ConfettiBurst, Counter,
    MobileMenu, NavStyle, RevealObserver, ScrollAnimator,
};
use trovul_waitlist::{SubmitError, WaitlistForm};

use crate::canvas::PixelCanvas;
use crate::layout::{cell_center, PageLayout, Section, CELL_HEIGHT, CELL_WIDTH, NAV_ROWS};
use crate::theme::Theme;

/// Labels of the social proof counters
pub const STAT_LABELS: [(&str, &str); 3] = [
    ("10K+", "pessoas na fila"),
    ("500+", "equipes testando"),
    ("50+", "integrações"),
];

/// Status line text for a failed signup
fn submit_error_text(error: &SubmitError) -> String {
    match error {
        SubmitError::InvalidEmail => "Digite um e-mail válido.".to_string(),
        SubmitError::Http(_) => "Sem conexão com o servidor. Tente novamente.".to_string(),
        SubmitError::Status(code) => format!("O servidor recusou a inscrição ({code})."),
        SubmitError::Disconnected => "O envio foi interrompido. Tente novamente.".to_string(),
    }
}

/// Where keyboard input goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys scroll the page
    #[default]
    Page,
    /// Typing edits the waitlist email
    Email,
}

/// Message type for colored status messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageType {
    #[default]
    Info,
    Success,
    Error,
}

/// Application state
pub struct AppState {
    pub theme: Theme,

    // Particle background
    pub canvas: PixelCanvas,
    pub field: Option<ParticleField>,

    // Page behaviors
    pub layout: PageLayout,
    pub scroll: ScrollAnimator,
    pub anchors: Anchors,
    pub menu: MobileMenu,
    pub counters: Vec<Counter>,
    pub reveal: RevealObserver,
    pub featured_tilt: CardTilt,
    pub mockup_tilt: CardTilt,
    pub confetti: Option<ConfettiBurst>,

    // Waitlist
    pub form: WaitlistForm,
    pub focus: Focus,

    // Status line
    pub message: Option<String>,
    pub message_type: MessageType,

    pub frame_count: u64,
    field_config: FieldConfig,
    seed: Option<u64>,
    rng: StdRng,
}

impl AppState {
    /// State for a `cols` x `rows` terminal
    pub fn new(cols: u16, rows: u16, theme: Theme, field_config: FieldConfig, seed: Option<u64>) -> Self {
        let canvas = PixelCanvas::for_cells(cols, rows, theme.canvas);
        let field = ParticleField::mount(Some(&canvas), field_config.clone(), seed);
        let layout = PageLayout::new(cols, rows);
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
            None => StdRng::from_entropy(),
        };

        let counters = STAT_LABELS
            .iter()
            .filter_map(|(label, _)| Counter::parse(label))
            .collect();

        let mut state = Self {
            theme,
            canvas,
            field,
            scroll: ScrollAnimator::new(0.0),
            anchors: Anchors::new(),
            layout,
            menu: MobileMenu::new(),
            counters,
            reveal: RevealObserver::default(),
            featured_tilt: CardTilt::default(),
            mockup_tilt: CardTilt::default(),
            confetti: None,
            form: WaitlistForm::new(),
            focus: Focus::Page,
            message: None,
            message_type: MessageType::Info,
            frame_count: 0,
            field_config,
            seed,
            rng,
        };
        state.apply_layout();
        state
    }

    fn apply_layout(&mut self) {
        self.scroll
            .set_max(self.layout.max_scroll_rows() as f32 * CELL_HEIGHT);
        self.anchors = self.layout.anchors();
        self.update_tilt_bounds();
    }

    /// Terminal resized to `cols` x `rows`
    pub fn resize(&mut self, cols: u16, rows: u16) {
        let width = cols as f32 * CELL_WIDTH;
        let height = rows as f32 * CELL_HEIGHT;
        match self.field.as_mut() {
            Some(field) => field.resize(&mut self.canvas, width, height),
            None => {
                self.canvas.resize(width, height);
                self.field =
                    ParticleField::mount(Some(&self.canvas), self.field_config.clone(), self.seed);
            }
        }
        self.layout = PageLayout::new(cols, rows);
        self.apply_layout();
    }

    /// Mouse moved over cell (`col`, `row`)
    pub fn pointer_moved(&mut self, col: u16, row: u16) {
        let point = cell_center(col, row);
        if let Some(field) = self.field.as_mut() {
            field.pointer_moved(point.x, point.y);
        }
        self.update_tilt_bounds();
        self.featured_tilt.pointer_at(point.x, point.y);
        self.mockup_tilt.pointer_at(point.x, point.y);
    }

    /// Scroll offset in whole rows
    pub fn scroll_rows(&self) -> u16 {
        (self.scroll.offset() / CELL_HEIGHT).round() as u16
    }

    pub fn nav_style(&self) -> NavStyle {
        NavStyle::for_scroll(self.scroll.offset())
    }

    /// Hero background offset in rows
    pub fn parallax_rows(&self) -> u16 {
        (parallax_offset(self.scroll.offset()) / CELL_HEIGHT).round() as u16
    }

    /// Section currently at the top of the view
    pub fn current_section(&self) -> Section {
        self.anchors
            .current(self.scroll.offset())
            .and_then(Section::from_anchor)
            .unwrap_or(Section::Hero)
    }

    /// A page rectangle in screen units; empty when the card is not laid out
    fn screen_bounds(&self, card: Option<Rect>) -> Bounds {
        let Some(card) = card else {
            return Bounds::default();
        };
        let top_row = card.y as f32 - self.scroll_rows() as f32 + NAV_ROWS as f32;
        Bounds::new(
            card.x as f32 * CELL_WIDTH,
            top_row * CELL_HEIGHT,
            card.width as f32 * CELL_WIDTH,
            card.height as f32 * CELL_HEIGHT,
        )
    }

    /// Follow the tilting cards as the page scrolls or reflows
    fn update_tilt_bounds(&mut self) {
        self.featured_tilt
            .set_bounds(self.screen_bounds(Some(self.layout.featured_card())));
        self.mockup_tilt
            .set_bounds(self.screen_bounds(self.layout.hero_mockup()));
    }

    /// Smooth-scroll to a section, closing the menu
    pub fn jump_to(&mut self, section: Section) {
        self.menu.follow_link();
        self.scroll.scroll_to_anchor(&self.anchors, section.anchor());
        if section == Section::Waitlist {
            self.focus_email();
        } else {
            self.focus = Focus::Page;
        }
    }

    /// Scroll by whole rows unless the menu holds the page still
    pub fn scroll_lines(&mut self, rows: i32) {
        if self.menu.scroll_locked() {
            return;
        }
        self.scroll.scroll_by(rows as f32 * CELL_HEIGHT);
    }

    pub fn scroll_page(&mut self, pages: i32) {
        let rows = self.layout.viewport_rows().saturating_sub(2).max(1) as i32;
        self.scroll_lines(rows * pages);
    }

    pub fn toggle_menu(&mut self) {
        self.menu.toggle();
    }

    /// Escape closes the menu first, then leaves the email field
    pub fn escape(&mut self) {
        if !self.menu.escape() {
            self.focus = Focus::Page;
        }
    }

    pub fn focus_email(&mut self) {
        self.focus = Focus::Email;
    }

    /// Start a signup; returns the email to send if the form accepted it
    pub fn begin_submit(&mut self) -> Option<String> {
        match self.form.begin_submit() {
            Ok(email) => email,
            Err(e) => {
                self.set_error(submit_error_text(&e));
                None
            }
        }
    }

    /// Relay answered the pending signup
    pub fn finish_submit(&mut self, result: Result<(), SubmitError>) {
        if self.form.finish(&result) {
            self.confetti = Some(ConfettiBurst::new(&mut self.rng));
            self.set_success("Inscrição confirmada");
        } else if let Err(e) = result {
            tracing::warn!("waitlist signup failed: {e}");
            self.set_error(submit_error_text(&e));
        }
    }

    /// Advance every animation by one frame
    pub fn tick(&mut self, delta: Duration) {
        self.scroll.step();
        self.update_tilt_bounds();

        self.update_reveal();
        for counter in &mut self.counters {
            counter.advance(delta);
        }

        self.form.advance(delta);

        if let Some(burst) = self.confetti.as_mut() {
            burst.advance(delta);
            if burst.is_finished() {
                self.confetti = None;
            }
        }

        if let Some(field) = self.field.as_mut() {
            field.frame(&mut self.canvas);
        }

        self.frame_count = self.frame_count.wrapping_add(1);
    }

    fn update_reveal(&mut self) {
        let proof = self.layout.section(Section::Proof);
        let ratio = visible_ratio(
            proof.y as f32 * CELL_HEIGHT,
            proof.height as f32 * CELL_HEIGHT,
            self.scroll.offset(),
            self.layout.viewport_rows() as f32 * CELL_HEIGHT,
        );
        if self.reveal.observe(ratio) {
            tracing::debug!("social proof revealed, starting counters");
            self.counters.iter_mut().for_each(Counter::start);
        }
    }

    /// Clear any displayed message
    pub fn clear_message(&mut self) {
        self.message = None;
        self.message_type = MessageType::Info;
    }

    /// Set a message to display (info level)
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.message_type = MessageType::Info;
    }

    /// Set a success message (green)
    pub fn set_success(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.message_type = MessageType::Success;
    }

    /// Set an error message (red)
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.message_type = MessageType::Error;
    }

    /// Canvas size in surface units
    pub fn canvas_size(&self) -> (f32, f32) {
        let size = self.canvas.size();
        (size.width, size.height)
    }
}

/// Main application wrapper
pub struct App {
    pub state: AppState,
    pub should_quit: bool,
}

impl App {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            should_quit: false,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::NIGHT;
    use trovul_waitlist::FormState;

    fn state() -> AppState {
        AppState::new(100, 32, NIGHT, FieldConfig::default(), Some(3))
    }

    #[test]
    fn test_field_mounted_on_canvas() {
        let state = state();
        let field = state.field.as_ref().unwrap();
        assert_eq!(field.drift().len(), 50);
        assert_eq!(field.viewport().width, 800.0);
        assert_eq!(field.viewport().height, 32.0 * 16.0);
    }

    #[test]
    fn test_zero_terminal_skips_field() {
        let state = AppState::new(0, 0, NIGHT, FieldConfig::default(), Some(3));
        assert!(state.field.is_none());
    }

    #[test]
    fn test_field_mounts_once_terminal_has_size() {
        let mut state = AppState::new(0, 0, NIGHT, FieldConfig::default(), Some(3));
        state.resize(40, 12);
        assert!(state.field.is_some());
    }

    #[test]
    fn test_resize_updates_field_and_canvas() {
        let mut state = state();
        state.resize(50, 19);
        let field = state.field.as_ref().unwrap();
        assert_eq!(field.viewport().width, 400.0);
        assert_eq!(field.viewport().height, 304.0);
        assert_eq!(state.canvas_size(), (400.0, 304.0));
        assert!(state.layout.compact_nav());
    }

    #[test]
    fn test_jump_and_nav_style() {
        let mut state = state();
        assert_eq!(state.nav_style(), NavStyle::Translucent);

        state.jump_to(Section::Features);
        for _ in 0..120 {
            state.tick(Duration::from_millis(16));
        }
        assert_eq!(state.scroll_rows(), 30);
        assert_eq!(state.current_section(), Section::Features);
        assert_eq!(state.nav_style(), NavStyle::Solid);
    }

    #[test]
    fn test_counters_start_when_revealed() {
        let mut state = state();
        state.tick(Duration::from_millis(16));
        assert!(state.counters.iter().all(|c| !c.is_started()));

        state.jump_to(Section::Proof);
        for _ in 0..200 {
            state.tick(Duration::from_millis(16));
        }
        assert!(state.counters.iter().all(|c| c.is_finished()));
        assert_eq!(state.counters[0].display(), "10K+");
    }

    #[test]
    fn test_menu_locks_scroll() {
        let mut state = state();
        state.toggle_menu();
        state.scroll_lines(5);
        assert_eq!(state.scroll_rows(), 0);

        state.escape();
        assert!(!state.menu.is_open());
        state.scroll_lines(5);
        assert_eq!(state.scroll_rows(), 5);
    }

    #[test]
    fn test_signup_success_starts_confetti() {
        let mut state = state();
        state.jump_to(Section::Waitlist);
        assert_eq!(state.focus, Focus::Email);

        "ana@trovul.app".chars().for_each(|c| state.form.push_char(c));
        assert_eq!(state.begin_submit(), Some("ana@trovul.app".to_string()));
        assert_eq!(state.begin_submit(), None);

        state.finish_submit(Ok(()));
        assert_eq!(state.form.state(), FormState::Succeeded);
        assert!(state.confetti.is_some());

        for _ in 0..260 {
            state.tick(Duration::from_millis(16));
        }
        assert!(state.confetti.is_none());
        assert_eq!(state.form.state(), FormState::Idle);
    }

    #[test]
    fn test_signup_failure_message() {
        let mut state = state();
        "ana@trovul.app".chars().for_each(|c| state.form.push_char(c));
        state.begin_submit();
        state.finish_submit(Err(SubmitError::Status(503)));
        assert_eq!(state.form.state(), FormState::Failed);
        assert_eq!(state.message_type, MessageType::Error);
        assert_eq!(
            state.message.as_deref(),
            Some("O servidor recusou a inscrição (503).")
        );
        assert!(state.confetti.is_none());
    }

    #[test]
    fn test_invalid_email_message() {
        let mut state = state();
        "ana".chars().for_each(|c| state.form.push_char(c));
        assert_eq!(state.begin_submit(), None);
        assert_eq!(state.message.as_deref(), Some("Digite um e-mail válido."));
        assert_eq!(
            submit_error_text(&SubmitError::Disconnected),
            "O envio foi interrompido. Tente novamente."
        );
    }

    #[test]
    fn test_jump_away_from_waitlist_returns_focus() {
        let mut state = state();
        state.jump_to(Section::Waitlist);
        assert_eq!(state.focus, Focus::Email);
        state.jump_to(Section::Features);
        assert_eq!(state.focus, Focus::Page);
    }

    #[test]
    fn test_hero_mockup_tilts_until_scrolled_away() {
        let mut state = state();
        let window = state.layout.hero_mockup().unwrap();
        let col = window.x + 1;
        let row = window.y + NAV_ROWS + 1;

        state.pointer_moved(col, row);
        assert!(state.mockup_tilt.tilt().is_some());
        assert!(state.featured_tilt.tilt().is_none());

        state.jump_to(Section::Pricing);
        for _ in 0..120 {
            state.tick(Duration::from_millis(16));
        }
        state.pointer_moved(col, row);
        assert!(state.mockup_tilt.tilt().is_none());
    }

    #[test]
    fn test_featured_card_tilts_under_pointer() {
        let mut state = state();
        state.jump_to(Section::Pricing);
        for _ in 0..120 {
            state.tick(Duration::from_millis(16));
        }

        let card = state.layout.featured_card();
        let col = card.x + 1;
        let row = card.y - state.scroll_rows() + NAV_ROWS + 1;
        state.pointer_moved(col, row);
        assert!(state.featured_tilt.tilt().is_some());

        state.pointer_moved(0, 0);
        assert!(state.featured_tilt.tilt().is_none());
    }
}
