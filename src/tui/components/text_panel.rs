//! # Text Panel Component
//!
//! Bordered, word-wrapped, scrollable text body. Used for both the intro
//! text on the main page and the rules viewer — they differ only in title
//! and content, so they share one component with separate scroll states.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `TextPanelState` lives in `TuiState` and owns the scroll offset
//! - `TextPanel` is created each frame with borrowed state and props

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Scroll state for one text panel. Must be persisted in `TuiState`.
#[derive(Default)]
pub struct TextPanelState {
    pub scroll_state: ScrollViewState,
    /// Last known content/viewport heights, for scroll clamping.
    content_height: u16,
    viewport_height: u16,
}

impl TextPanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamp the scroll offset so it never exceeds the content bounds.
    fn clamp_scroll(&mut self) {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

impl EventHandler for TextPanelState {
    type Event = (); // Scrolling is handled internally; no events emitted.

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        match event {
            TuiEvent::CursorUp | TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
            }
            TuiEvent::CursorDown | TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.clamp_scroll();
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.clamp_scroll();
            }
            _ => {}
        }
        None
    }
}

/// Transient render wrapper for a text panel.
pub struct TextPanel<'a> {
    state: &'a mut TextPanelState,
    title: &'a str,
    text: &'a str,
    focused: bool,
    accent: Color,
}

impl<'a> TextPanel<'a> {
    pub fn new(
        state: &'a mut TextPanelState,
        title: &'a str,
        text: &'a str,
        focused: bool,
        accent: Color,
    ) -> Self {
        Self {
            state,
            title,
            text,
            focused,
            accent,
        }
    }
}

impl Component for TextPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.accent).add_modifier(Modifier::DIM)
        };
        let block = Block::bordered()
            .title(self.title)
            .border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Reserve one column for the scrollbar
        let content_width = inner.width.saturating_sub(1);
        let paragraph = Paragraph::new(self.text).wrap(Wrap { trim: false });
        let content_height = paragraph.line_count(content_width) as u16;

        self.state.content_height = content_height;
        self.state.viewport_height = inner.height;
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, content_height));

        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_renders_title_and_text() {
        let backend = TestBackend::new(40, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = TextPanelState::new();

        terminal
            .draw(|f| {
                TextPanel::new(&mut state, " Rules ", "Roll high.", true, Color::Magenta)
                    .render(f, f.area());
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Rules"));
        assert!(text.contains("Roll high."));
    }

    #[test]
    fn test_scroll_clamps_to_content() {
        let mut state = TextPanelState::new();
        state.content_height = 10;
        state.viewport_height = 4;

        for _ in 0..50 {
            state.handle_event(&TuiEvent::CursorDown);
        }
        assert!(state.scroll_state.offset().y <= 6);
    }

    #[test]
    fn test_scroll_up_saturates_at_top() {
        let mut state = TextPanelState::new();
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.scroll_state.offset().y, 0);
    }

    #[test]
    fn test_long_text_scrolls() {
        let backend = TestBackend::new(30, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = TextPanelState::new();
        let long_text = (1..=20)
            .map(|i| format!("line {i}"))
            .collect::<Vec<_>>()
            .join("\n");

        terminal
            .draw(|f| {
                TextPanel::new(&mut state, " Rules ", &long_text, true, Color::Magenta)
                    .render(f, f.area());
            })
            .unwrap();
        assert!(buffer_text(&terminal).contains("line 1"));

        state.handle_event(&TuiEvent::ScrollPageDown);
        terminal
            .draw(|f| {
                TextPanel::new(&mut state, " Rules ", &long_text, true, Color::Magenta)
                    .render(f, f.area());
            })
            .unwrap();
        assert!(state.scroll_state.offset().y > 0);
    }
}
