//! Keyboard Input Handler
//!
//! Maps key presses to the table's controls: search box, sort selector,
//! page-size selector and the previous/next buttons.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::App;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    // Ctrl-C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.controller.ui_mut().should_quit = true;
        return Ok(());
    }

    // Loading or failed: only quit is honored
    if !app.controller.is_ready() {
        if key.code == KeyCode::Char('q') {
            app.controller.ui_mut().should_quit = true;
        }
        return Ok(());
    }

    // Search input has focus: keystrokes edit the term
    if app.controller.model().ui.search_mode {
        match key.code {
            KeyCode::Esc => {
                app.controller.ui_mut().search_mode = false;
                app.clear_search();
            }
            KeyCode::Enter => {
                app.controller.ui_mut().search_mode = false;
            }
            KeyCode::Backspace => app.pop_search_char(),
            KeyCode::Char(c) => app.push_search_char(c),
            _ => {}
        }
        return Ok(());
    }

    let vim_mode = app.controller.model().ui.vim_mode;

    match key.code {
        KeyCode::Char('q') => {
            app.controller.ui_mut().should_quit = true;
        }
        KeyCode::Char('f') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.controller.ui_mut().search_mode = true;
        }
        KeyCode::Char('/') if vim_mode => {
            app.controller.ui_mut().search_mode = true;
        }
        KeyCode::Esc => {
            // Clear an accepted search
            app.clear_search();
        }
        KeyCode::Char('s') => app.cycle_sort_mode(true),
        KeyCode::Char('S') => app.cycle_sort_mode(false),
        KeyCode::Char('z') => app.cycle_page_size(true),
        KeyCode::Char('Z') => app.cycle_page_size(false),
        KeyCode::Right | KeyCode::PageDown => app.next_page(),
        KeyCode::Left | KeyCode::PageUp => app.prev_page(),
        KeyCode::Char('l') if vim_mode => app.next_page(),
        KeyCode::Char('h') if vim_mode => app.prev_page(),
        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[tokio::test]
    async fn test_before_load_only_quit_is_honored() {
        let mut app = App::new(&Config::default()).unwrap();

        for code in [
            KeyCode::Esc,
            KeyCode::Char('s'),
            KeyCode::Char('z'),
            KeyCode::Right,
            KeyCode::Enter,
        ] {
            handle_key(&mut app, press(code)).unwrap();
        }
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('f'), KeyModifiers::CONTROL),
        )
        .unwrap();

        let model = app.controller.model();
        assert!(!model.ui.should_quit);
        assert!(!model.ui.search_mode);
        assert_eq!(model.table.sort_mode, prodtable::SortMode::None);
        assert_eq!(model.table.page_size, 10);

        handle_key(&mut app, press(KeyCode::Char('q'))).unwrap();
        assert!(app.controller.model().ui.should_quit);
    }

    #[tokio::test]
    async fn test_ctrl_c_quits_while_loading() {
        let mut app = App::new(&Config::default()).unwrap();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        )
        .unwrap();
        assert!(app.controller.model().ui.should_quit);
    }
}
