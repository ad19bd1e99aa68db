//! # TUI Components
//!
//! Two patterns live here:
//!
//! - **Stateless** components receive everything as props and just draw:
//!   [`header::Header`], [`controls_bar::ControlsBar`],
//!   [`splash::SplashView`].
//! - **Stateful** components keep persistent state in `TuiState` and are
//!   wrapped by a transient renderer each frame: [`menu::Menu`] over
//!   `MenuState`, [`text_panel::TextPanel`] over `TextPanelState`.
//!
//! Each component file contains its state types, event handling,
//! rendering, and tests, so one file tells the whole story.

pub mod controls_bar;
pub mod header;
pub mod menu;
pub mod splash;
pub mod text_panel;

pub use controls_bar::ControlsBar;
pub use header::Header;
pub use menu::{Menu, MenuItem, MenuState};
pub use splash::SplashView;
pub use text_panel::{TextPanel, TextPanelState};
