//! # Splash View
//!
//! Renders the front-page art reveal. The lines themselves live in
//! `App::splash` (the animator appends to them); this component only
//! decides where they go on screen.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::content;
use crate::tui::component::Component;

pub struct SplashView<'a> {
    lines: &'a [String],
    accent: Color,
}

impl<'a> SplashView<'a> {
    pub fn new(lines: &'a [String], accent: Color) -> Self {
        Self { lines, accent }
    }
}

/// Width of the widest line of the full art, so the revealed block stays
/// put instead of re-centering as wider lines appear.
fn art_width() -> u16 {
    content::SPLASH_ART
        .lines()
        .map(UnicodeWidthStr::width)
        .max()
        .unwrap_or(0) as u16
}

impl Component for SplashView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().border_style(
            Style::default()
                .fg(self.accent)
                .add_modifier(Modifier::BOLD),
        );
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [art_area] = Layout::horizontal([Constraint::Length(art_width())])
            .flex(Flex::Center)
            .areas(inner);

        let text: Vec<Line> = self
            .lines
            .iter()
            .map(|line| {
                if line.trim() == "Press Enter to continue" {
                    Line::styled(
                        line.as_str(),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Line::raw(line.as_str())
                }
            })
            .collect();

        frame.render_widget(Paragraph::new(text), art_area);
    }
}
