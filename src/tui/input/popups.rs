use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::actions;
use crate::tui::app::{App, Mode};

/// Delete List confirmation: `y` deletes, anything else cancels
pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    app.mode = Mode::Navigate;
    if matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y')) {
        actions::delete_list(app);
    }
}

/// Cached-list picker
pub(super) fn handle_picker(app: &mut App, key: KeyEvent) {
    let count = app.tabs.cached().len();
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.mode = Mode::Navigate,
        KeyCode::Up | KeyCode::Char('k') => {
            app.picker_cursor = app.picker_cursor.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if app.picker_cursor + 1 < count {
                app.picker_cursor += 1;
            }
        }
        KeyCode::Enter => {
            app.mode = Mode::Navigate;
            actions::promote_cached(app, app.picker_cursor, Instant::now());
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::super::handle_key;
    use super::super::tests::{app_with_list, key};
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn confirm_yes_deletes_list() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with_list(&dir);
        handle_key(&mut app, key(KeyCode::Char('D')));
        handle_key(&mut app, key(KeyCode::Char('y')));

        assert!(!dir.path().join("todo.json").exists());
        assert!(app.tabs.is_empty());
        assert!(app.current_tab().is_none());
    }

    #[test]
    fn confirm_other_key_cancels() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with_list(&dir);
        handle_key(&mut app, key(KeyCode::Char('D')));
        handle_key(&mut app, key(KeyCode::Char('n')));

        assert_eq!(app.mode, Mode::Navigate);
        assert!(dir.path().join("todo.json").exists());
        assert_eq!(app.tabs.len(), 1);
    }

    #[test]
    fn picker_promotes_selected_cached_list() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with_list(&dir);
        app.tabs = crate::tabs::TabCache::new(1);
        app.open_lists(
            vec![
                dir.path().join("a.json"),
                dir.path().join("b.json"),
                dir.path().join("c.json"),
            ],
            Instant::now(),
        );
        // visible c, cached b a
        handle_key(&mut app, key(KeyCode::Char('c')));
        assert_eq!(app.mode, Mode::Picker);
        handle_key(&mut app, key(KeyCode::Down));
        handle_key(&mut app, key(KeyCode::Down));
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.current_tab().unwrap().name(), "a");
        let cached: Vec<String> = app.tabs.cached().iter().map(|t| t.name()).collect();
        assert_eq!(cached, vec!["c", "b"]);
    }
}
