//! # Menu Component
//!
//! The navigation list shown on the content pages.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `MenuState` lives in `TuiState` and owns the selection
//! - `Menu` is created each frame with borrowed state
//!
//! Each entry carries `action: Option<Action>`. "Create Character" and
//! "Load Character" are deliberately unbound (`None`): selecting them is
//! a silent no-op until the character model exists.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState};

use crate::core::action::Action;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub struct MenuItem {
    pub label: &'static str,
    pub description: &'static str,
    pub shortcut: char,
    pub action: Option<Action>,
}

/// Persistent selection state for the menu.
pub struct MenuState {
    pub items: Vec<MenuItem>,
    pub selected: usize,
    pub list_state: ListState,
}

impl MenuState {
    pub fn new(items: Vec<MenuItem>) -> Self {
        let mut list_state = ListState::default();
        if !items.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            items,
            selected: 0,
            list_state,
        }
    }

    /// The main menu of the shell, mirroring the five stock entries.
    pub fn main_menu() -> Self {
        Self::new(vec![
            MenuItem {
                label: "Home",
                description: "Return to start",
                shortcut: 'h',
                action: Some(Action::ShowHome),
            },
            MenuItem {
                label: "Rules",
                description: "Read the rules",
                shortcut: 'r',
                action: Some(Action::ShowRules),
            },
            MenuItem {
                label: "Create Character",
                description: "Create & save a PC",
                shortcut: 'c',
                action: None,
            },
            MenuItem {
                label: "Load Character",
                description: "Load a saved PC",
                shortcut: 'l',
                action: None,
            },
            MenuItem {
                label: "Quit",
                description: "Press to exit",
                shortcut: 'q',
                action: Some(Action::Quit),
            },
        ])
    }

    fn select(&mut self, index: usize) {
        self.selected = index;
        self.list_state.select(Some(index));
    }
}

/// EventHandler lives on `MenuState` because the selection must persist
/// across frames while the `Menu` wrapper is rebuilt every draw.
impl EventHandler for MenuState {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        match event {
            TuiEvent::CursorUp => {
                let index = self.selected.saturating_sub(1);
                self.select(index);
                None
            }
            TuiEvent::CursorDown => {
                if !self.items.is_empty() {
                    let index = (self.selected + 1).min(self.items.len() - 1);
                    self.select(index);
                }
                None
            }
            TuiEvent::Submit => self
                .items
                .get(self.selected)
                .and_then(|item| item.action.clone()),
            TuiEvent::InputChar(c) => {
                let index = self.items.iter().position(|item| item.shortcut == *c)?;
                self.select(index);
                self.items[index].action.clone()
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the menu.
pub struct Menu<'a> {
    state: &'a mut MenuState,
    focused: bool,
    accent: Color,
}

impl<'a> Menu<'a> {
    pub fn new(state: &'a mut MenuState, focused: bool, accent: Color) -> Self {
        Self {
            state,
            focused,
            accent,
        }
    }
}

impl Component for Menu<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.accent).add_modifier(Modifier::DIM)
        };
        let block = Block::bordered()
            .title(" Menu ")
            .border_style(border_style);

        let items: Vec<ListItem> = self
            .state
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let is_selected = i == self.state.selected;
                let label_style = if is_selected && self.focused {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else if is_selected {
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };

                let label = Line::from(vec![
                    Span::styled(format!("{} ", item.shortcut), label_style),
                    Span::styled(item.label, label_style),
                ]);
                let description = Line::from(Span::styled(
                    format!("  {}", item.description),
                    Style::default().fg(Color::DarkGray),
                ));
                ListItem::new(vec![label, description])
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_menu_has_stock_entries() {
        let menu = MenuState::main_menu();
        let labels: Vec<_> = menu.items.iter().map(|i| i.label).collect();
        assert_eq!(
            labels,
            vec!["Home", "Rules", "Create Character", "Load Character", "Quit"]
        );
        assert_eq!(menu.selected, 0);
    }

    #[test]
    fn test_selection_saturates_at_ends() {
        let mut menu = MenuState::main_menu();
        menu.handle_event(&TuiEvent::CursorUp);
        assert_eq!(menu.selected, 0);

        for _ in 0..10 {
            menu.handle_event(&TuiEvent::CursorDown);
        }
        assert_eq!(menu.selected, menu.items.len() - 1);
    }

    #[test]
    fn test_submit_activates_selected_item() {
        let mut menu = MenuState::main_menu();
        assert_eq!(menu.handle_event(&TuiEvent::Submit), Some(Action::ShowHome));

        menu.handle_event(&TuiEvent::CursorDown);
        assert_eq!(menu.handle_event(&TuiEvent::Submit), Some(Action::ShowRules));
    }

    #[test]
    fn test_shortcut_selects_and_activates() {
        let mut menu = MenuState::main_menu();
        assert_eq!(menu.handle_event(&TuiEvent::InputChar('q')), Some(Action::Quit));
        assert_eq!(menu.selected, 4);

        assert_eq!(
            menu.handle_event(&TuiEvent::InputChar('r')),
            Some(Action::ShowRules)
        );
        assert_eq!(menu.selected, 1);
    }

    #[test]
    fn test_unbound_items_yield_no_action() {
        let mut menu = MenuState::main_menu();
        // "Create Character" selects but does nothing
        assert_eq!(menu.handle_event(&TuiEvent::InputChar('c')), None);
        assert_eq!(menu.selected, 2);
        assert_eq!(menu.handle_event(&TuiEvent::Submit), None);
    }

    #[test]
    fn test_unknown_shortcut_is_ignored() {
        let mut menu = MenuState::main_menu();
        assert_eq!(menu.handle_event(&TuiEvent::InputChar('x')), None);
        assert_eq!(menu.selected, 0);
    }
}
