//! # Header Component
//!
//! The bordered banner across the top of every page: app title in the
//! border, tagline centered inside. Purely presentational.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::core::content;
use crate::tui::component::Component;

pub struct Header {
    accent: Color,
}

impl Header {
    pub fn new(accent: Color) -> Self {
        Self { accent }
    }
}

impl Component for Header {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let banner = Paragraph::new(content::BANNER_TEXT)
            .style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::bordered()
                    .title(content::APP_TITLE)
                    .border_style(
                        Style::default()
                            .fg(self.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
            );
        frame.render_widget(banner, area);
    }
}
