//! # Actions
//!
//! Everything that can happen in the shell becomes an `Action`. The user
//! picks "Rules" in the menu? That's `Action::ShowRules`. The splash
//! animator reveals a line? That's `Action::SplashLine(line)`.
//!
//! The `update()` function applies an action to the current state and
//! returns an [`Effect`] for the event loop to execute. No side effects
//! here; I/O and task management happen in the `tui` module.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```

use log::{debug, info};

use crate::core::state::{App, Focus, PageId};

/// A state transition request. Menu items carry these as
/// `Option<Action>` — unbound entries ("Create Character",
/// "Load Character") are `None` rather than a no-op callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The animator revealed one line of splash art.
    SplashLine(String),
    /// The animator ran out of lines.
    SplashFinished,
    /// Enter on the front page: leave the splash, focus the menu.
    ConfirmSplash,
    /// Menu "Home": show the main page with the intro text focused.
    ShowHome,
    /// Menu "Rules": show the rules page with the rules text focused.
    ShowRules,
    /// Return focus from a text panel to the menu.
    FocusMenu,
    /// Menu "Quit" or Ctrl+C.
    Quit,
}

/// What the event loop must do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Tear down the terminal and exit 0.
    Quit,
    /// Abort the splash animator task; its remaining lines are no longer
    /// wanted now that the front page is gone.
    CancelSplash,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::SplashLine(line) => {
            // May arrive after ConfirmSplash if lines were already queued
            // in the channel; appending to the invisible buffer is harmless.
            app.splash.revealed.push(line);
            Effect::None
        }
        Action::SplashFinished => {
            app.splash.finished = true;
            debug!("Splash reveal finished ({} lines)", app.splash.revealed.len());
            Effect::None
        }
        Action::ConfirmSplash => {
            if app.page != PageId::Front {
                return Effect::None;
            }
            info!("Leaving splash for main page");
            app.page = PageId::Main;
            app.focus = Focus::Menu;
            Effect::CancelSplash
        }
        Action::ShowHome => {
            info!("Switching to main page");
            app.page = PageId::Main;
            app.focus = Focus::Intro;
            Effect::None
        }
        Action::ShowRules => {
            info!("Switching to rules page");
            app.page = PageId::Rules;
            app.focus = Focus::Rules;
            Effect::None
        }
        Action::FocusMenu => {
            if app.page != PageId::Front {
                app.focus = Focus::Menu;
            }
            Effect::None
        }
        Action::Quit => {
            info!("Quit requested");
            Effect::Quit
        }
    }
}
