//! Per-page layout. One full-screen view is drawn per frame, selected by
//! `App::page`; the content pages share the header / (menu | body) /
//! controls arrangement with a 1:3 menu-to-body split.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::state::{App, Focus, PageId};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ControlsBar, Header, Menu, SplashView, TextPanel};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};

    match app.page {
        PageId::Front => {
            let layout = Layout::vertical([Length(3), Min(0)]);
            let [header_area, splash_area] = layout.areas(frame.area());

            Header::new(tui.accent).render(frame, header_area);
            SplashView::new(&app.splash.revealed, tui.accent).render(frame, splash_area);
        }
        PageId::Main => {
            let (header_area, body_area, controls_area) = content_areas(frame.area());
            draw_content_chrome(frame, app, tui, header_area, controls_area);

            let [menu_area, intro_area] = body_columns(body_area);
            Menu::new(&mut tui.menu, app.focus == Focus::Menu, tui.accent)
                .render(frame, menu_area);
            TextPanel::new(
                &mut tui.intro_panel,
                " Introduction ",
                &app.intro_text,
                app.focus == Focus::Intro,
                tui.accent,
            )
            .render(frame, intro_area);
        }
        PageId::Rules => {
            let (header_area, body_area, controls_area) = content_areas(frame.area());
            draw_content_chrome(frame, app, tui, header_area, controls_area);

            let [menu_area, rules_area] = body_columns(body_area);
            Menu::new(&mut tui.menu, app.focus == Focus::Menu, tui.accent)
                .render(frame, menu_area);
            TextPanel::new(
                &mut tui.rules_panel,
                " Rules ",
                &app.rules_text,
                app.focus == Focus::Rules,
                tui.accent,
            )
            .render(frame, rules_area);
        }
    }
}

fn content_areas(area: Rect) -> (Rect, Rect, Rect) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(3), Min(0), Length(3)]);
    let [header, body, controls] = layout.areas(area);
    (header, body, controls)
}

fn body_columns(area: Rect) -> [Rect; 2] {
    use Constraint::Percentage;
    Layout::horizontal([Percentage(25), Percentage(75)]).areas(area)
}

fn draw_content_chrome(
    frame: &mut Frame,
    app: &App,
    tui: &mut TuiState,
    header_area: Rect,
    controls_area: Rect,
) {
    Header::new(tui.accent).render(frame, header_area);
    ControlsBar::new(app.focus, tui.accent).render(frame, controls_area);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use crate::core::action::{Action, update};
    use crate::test_support::test_app;
    use crate::tui::TuiState;

    use super::*;

    fn render(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_front_page_shows_only_revealed_art() {
        let mut app = test_app();
        let mut tui = TuiState::for_tests();
        update(&mut app, Action::SplashLine("Welcome to Grimoire".to_string()));

        let text = render(&app, &mut tui);
        assert!(text.contains("Grimoire"));
        assert!(text.contains("Welcome to Grimoire"));
        // Menu and intro belong to the hidden main page
        assert!(!text.contains("Create Character"));
        assert!(!text.contains("Introduction"));
    }

    #[test]
    fn test_main_page_shows_menu_and_intro() {
        let mut app = test_app();
        let mut tui = TuiState::for_tests();
        update(&mut app, Action::ConfirmSplash);

        let text = render(&app, &mut tui);
        assert!(text.contains("Menu"));
        assert!(text.contains("Home"));
        assert!(text.contains("Create Character"));
        assert!(text.contains("Introduction"));
        assert!(text.contains("Ashen Vale"));
        assert!(text.contains("Controls"));
    }

    #[test]
    fn test_rules_page_shows_rules_text() {
        let mut app = test_app();
        let mut tui = TuiState::for_tests();
        update(&mut app, Action::ConfirmSplash);
        update(&mut app, Action::ShowRules);

        let text = render(&app, &mut tui);
        assert!(text.contains("Rules"));
        assert!(text.contains("Roll dice."));
        assert!(!text.contains("Introduction"));
    }
}
