//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (splash reveal in progress): polls every ~80ms so each
//!   revealed line shows up promptly.
//! - **Idle** (content pages, splash finished): sleeps up to 500ms, only
//!   redraws on events or terminal resize.
//!
//! ## Splash animator
//!
//! The art reveal is a background tokio task that sends one
//! `Action::SplashLine` per configured delay over the same mpsc channel
//! the loop already drains, so all buffer appends and redraws happen on
//! the UI thread. Confirming the splash aborts the task through its
//! `AbortHandle`; lines already queued in the channel still land in the
//! (now invisible) splash buffer, which is harmless.

pub mod component;
pub mod components;
pub mod event;
pub mod ui;

use std::io::stdout;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use log::{debug, info, warn};
use ratatui::style::Color;
use tokio::task::AbortHandle;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::content;
use crate::core::state::{App, Focus, PageId};
use crate::tui::component::EventHandler;
use crate::tui::components::{MenuState, TextPanelState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub menu: MenuState,
    pub intro_panel: TextPanelState,
    pub rules_panel: TextPanelState,
    pub accent: Color,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            menu: MenuState::main_menu(),
            intro_panel: TextPanelState::new(),
            rules_panel: TextPanelState::new(),
            accent: accent_color(&config.accent),
        }
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self {
            menu: MenuState::main_menu(),
            intro_panel: TextPanelState::new(),
            rules_panel: TextPanelState::new(),
            accent: Color::Magenta,
        }
    }
}

/// Parse a configured color name, falling back to the stock magenta.
fn accent_color(name: &str) -> Color {
    name.parse().unwrap_or_else(|_| {
        warn!("Unknown accent color {:?}, using magenta", name);
        Color::Magenta
    })
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(config: ResolvedConfig, rules_text: String) -> std::io::Result<()> {
    let mut app = App::new(rules_text);
    let mut tui = TuiState::new(&config);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from the splash animator task
    let (tx, rx) = mpsc::channel();
    let mut splash_abort: Option<AbortHandle> = Some(spawn_splash(config.splash_delay, tx));

    let mut needs_redraw = true; // Force first frame
    let mut should_quit = false;

    loop {
        let animating = app.page == PageId::Front && !app.splash.finished;
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short while the splash animates, long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Ctrl+C always quits regardless of focus
            if matches!(event, TuiEvent::ForceQuit) {
                apply(&mut app, Action::Quit, &mut splash_abort, &mut should_quit);
                continue;
            }

            if let Some(action) = dispatch_event(&app, &mut tui, &event) {
                apply(&mut app, action, &mut splash_abort, &mut should_quit);
            }
        }

        if should_quit {
            break;
        }

        // Handle splash animator actions
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            apply(&mut app, action, &mut splash_abort, &mut should_quit);
        }
    }

    ratatui::restore();
    Ok(())
}

/// Route an input event by page and focus, translating it into a core
/// action where one applies. Scrolling is absorbed by the focused panel.
fn dispatch_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match app.page {
        PageId::Front => match event {
            // Enter leaves the splash whether or not the reveal has finished
            TuiEvent::Submit => Some(Action::ConfirmSplash),
            _ => None,
        },
        PageId::Main | PageId::Rules => match app.focus {
            Focus::Menu => tui.menu.handle_event(event),
            Focus::Intro => {
                if matches!(event, TuiEvent::Escape | TuiEvent::FocusNext) {
                    Some(Action::FocusMenu)
                } else {
                    tui.intro_panel.handle_event(event);
                    None
                }
            }
            Focus::Rules => {
                if matches!(event, TuiEvent::Escape | TuiEvent::FocusNext) {
                    Some(Action::FocusMenu)
                } else {
                    tui.rules_panel.handle_event(event);
                    None
                }
            }
            // Splash focus never coexists with a content page
            Focus::Splash => None,
        },
    }
}

/// Run an action through the reducer and execute the resulting effect.
fn apply(
    app: &mut App,
    action: Action,
    splash_abort: &mut Option<AbortHandle>,
    should_quit: &mut bool,
) {
    match update(app, action) {
        Effect::Quit => *should_quit = true,
        Effect::CancelSplash => {
            if let Some(handle) = splash_abort.take() {
                handle.abort();
                info!("Splash animator cancelled");
            }
        }
        Effect::None => {}
    }
}

/// Spawn the splash animator: one art line per `delay`, then a completion
/// marker. Returns the abort handle used by `Effect::CancelSplash`.
fn spawn_splash(delay: Duration, tx: mpsc::Sender<Action>) -> AbortHandle {
    info!("Spawning splash animator ({}ms per line)", delay.as_millis());
    let handle = tokio::spawn(async move {
        for line in content::SPLASH_ART.lines() {
            if tx.send(Action::SplashLine(line.to_string())).is_err() {
                warn!("Failed to send splash line: receiver dropped");
                return;
            }
            tokio::time::sleep(delay).await;
        }
        if tx.send(Action::SplashFinished).is_err() {
            warn!("Failed to send splash completion: receiver dropped");
        }
    });
    handle.abort_handle()
}
