//! # Controls Bar Component
//!
//! Bottom panel with key hints for whatever currently has focus.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::core::state::Focus;
use crate::tui::component::Component;

pub struct ControlsBar {
    focus: Focus,
    accent: Color,
}

impl ControlsBar {
    pub fn new(focus: Focus, accent: Color) -> Self {
        Self { focus, accent }
    }

    fn hints(&self) -> &'static str {
        match self.focus {
            Focus::Splash => " Enter Continue  Ctrl+C Quit ",
            Focus::Menu => " ↑/↓ Select  Enter Activate  h/r/c/l/q Shortcuts  Ctrl+C Quit ",
            Focus::Intro | Focus::Rules => " ↑/↓ Scroll  PgUp/PgDn Page  Esc/Tab Menu  Ctrl+C Quit ",
        }
    }
}

impl Component for ControlsBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let panel = Paragraph::new(self.hints())
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::bordered().title(" Controls ").border_style(
                Style::default()
                    .fg(self.accent)
                    .add_modifier(Modifier::BOLD),
            ));
        frame.render_widget(panel, area);
    }
}
