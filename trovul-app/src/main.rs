//! Trovul - landing page in the terminal
//!
//! A particle field drifts behind a scrolling page; the mouse pulls the
//! particles around and leaves a trail, and the waitlist form posts real
//! signups.

mod config;

use std::fs::{self, File};
use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use crossbeam_channel::{Receiver, TryRecvError};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    widgets::Widget,
    Frame, Terminal,
};
use tracing_subscriber::EnvFilter;

use trovul_field::FrameClock;
use trovul_tui::{
    App, AppState, CanvasWidget, ConfettiWidget, Focus, MenuOverlay, NavBar, PageWidget, Section,
    StatusBarWidget, Theme,
};
use trovul_waitlist::{spawn_submit, RelayClient, SubmitError};

use crate::config::Config;

/// Log filter environment variable
const LOG_ENV: &str = "TROVUL_LOG";

type SubmitResult = Result<(), SubmitError>;

fn main() -> anyhow::Result<()> {
    init_logging();
    let config = Config::load();
    tracing::info!(fps = config.fps, relay = %config.relay_endpoint, "starting trovul");

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &config);

    // Cleanup
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!("trovul exited with error: {e:#}");
    }
    result
}

/// Send tracing output to a log file; the terminal belongs to the UI
fn init_logging() {
    let dir = dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("trovul");
    let file = match fs::create_dir_all(&dir).and_then(|_| File::create(dir.join("trovul.log"))) {
        Ok(file) => file,
        Err(_) => return, // Run without logs rather than not at all
    };

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &Config,
) -> anyhow::Result<()> {
    let size = terminal.size()?;
    let theme = Theme::by_name(&config.theme).unwrap_or_else(|| {
        tracing::warn!(theme = %config.theme, "unknown theme, using night");
        Theme::default()
    });

    let state = AppState::new(
        size.width,
        size.height,
        theme,
        config.field_config(),
        config.seed,
    );
    let mut app = App::new(state);
    app.state
        .set_message("Trovul | Tab/1-5 navegar, m menu, q sair");

    let relay = RelayClient::new(config.relay_endpoint.as_str())?;
    let mut pending: Option<Receiver<SubmitResult>> = None;

    let clock = FrameClock::new(config.fps);
    let cancel = clock.cancel_handle();

    for frame in clock {
        // Handle input that arrived since the last frame
        while event::poll(Duration::ZERO)? {
            if let Some(email) = handle_event(&mut app, event::read()?) {
                tracing::debug!("submitting waitlist signup");
                pending = Some(spawn_submit(relay.clone(), email));
            }
        }

        if app.should_quit {
            cancel.cancel();
            continue;
        }

        // Process the relay answer
        if let Some(rx) = pending.as_ref() {
            let answer = match rx.try_recv() {
                Ok(result) => Some(result),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => Some(Err(SubmitError::Disconnected)),
            };
            if let Some(result) = answer {
                app.state.finish_submit(result);
                pending = None;
            }
        }

        app.state.tick(frame.delta);

        terminal.draw(|f| render_ui(f, &app.state))?;
    }

    tracing::info!(frames = app.state.frame_count, "trovul stopped");
    Ok(())
}

/// Apply one terminal event; returns an email when a signup should be sent
fn handle_event(app: &mut App, event: Event) -> Option<String> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        Event::Mouse(mouse) => {
            match mouse.kind {
                MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                    app.state.pointer_moved(mouse.column, mouse.row);
                }
                MouseEventKind::ScrollDown => app.state.scroll_lines(3),
                MouseEventKind::ScrollUp => app.state.scroll_lines(-3),
                _ => {}
            }
            None
        }
        Event::Resize(cols, rows) => {
            app.state.resize(cols, rows);
            None
        }
        _ => None,
    }
}

fn handle_key(app: &mut App, key: KeyEvent) -> Option<String> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return None;
    }
    if key.code == KeyCode::Char('q') && app.state.focus == Focus::Page {
        app.quit();
        return None;
    }

    let state = &mut app.state;

    if state.focus == Focus::Email {
        match key.code {
            KeyCode::Enter => return state.begin_submit(),
            KeyCode::Backspace => state.form.backspace(),
            KeyCode::Esc => state.escape(),
            KeyCode::Tab => state.jump_to(next_section(state.current_section())),
            KeyCode::Up => state.scroll_lines(-1),
            KeyCode::Down => state.scroll_lines(1),
            KeyCode::Char(c) => {
                state.form.push_char(c);
                state.clear_message();
            }
            _ => {}
        }
        return None;
    }

    match key.code {
        KeyCode::Char('m') => state.toggle_menu(),
        KeyCode::Esc => state.escape(),
        KeyCode::Tab => state.jump_to(next_section(state.current_section())),
        KeyCode::BackTab => state.jump_to(previous_section(state.current_section())),
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            state.jump_to(Section::ALL[index]);
        }
        KeyCode::Enter => state.jump_to(Section::Waitlist),
        KeyCode::Up | KeyCode::Char('k') => state.scroll_lines(-1),
        KeyCode::Down | KeyCode::Char('j') => state.scroll_lines(1),
        KeyCode::PageUp => state.scroll_page(-1),
        KeyCode::PageDown | KeyCode::Char(' ') => state.scroll_page(1),
        KeyCode::Home => state.jump_to(Section::Hero),
        KeyCode::End => state.jump_to(Section::Waitlist),
        _ => {}
    }
    None
}

fn next_section(current: Section) -> Section {
    let index = Section::ALL.iter().position(|s| *s == current).unwrap_or(0);
    Section::ALL[(index + 1) % Section::ALL.len()]
}

fn previous_section(current: Section) -> Section {
    let index = Section::ALL.iter().position(|s| *s == current).unwrap_or(0);
    Section::ALL[(index + Section::ALL.len() - 1) % Section::ALL.len()]
}

fn render_ui(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let buf = frame.buffer_mut();

    // Particle background fills the whole screen
    CanvasWidget::new(&state.canvas).render(area, buf);

    let [nav_area, page_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    PageWidget::new(state).render(page_area, buf);

    if let Some(burst) = state.confetti.as_ref() {
        ConfettiWidget::new(burst, &state.theme).render(area, buf);
    }

    let current = state.current_section();
    NavBar::new(&state.theme)
        .style(state.nav_style())
        .current(current)
        .compact(state.layout.compact_nav(), state.menu.is_open())
        .render(Rect::new(nav_area.x, nav_area.y, nav_area.width, 2).intersection(area), buf);

    if state.menu.is_open() {
        MenuOverlay::new(&state.theme, current).render(area, buf);
    }

    StatusBarWidget::new(state.focus, &state.theme)
        .message(state.message.as_deref(), state.message_type)
        .render(status_area, buf);
}
