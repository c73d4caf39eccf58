use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::Priority;
use crate::tui::actions;
use crate::tui::app::{App, Mode, PromptKind, TextEdit};
use crate::tui::line_input::LineInput;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    app.status = None;
    let now = Instant::now();

    match key.code {
        KeyCode::Char('q') => actions::quit(app),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => actions::quit(app),
        KeyCode::Char('?') => app.show_help = true,

        // Tabs
        KeyCode::Tab => actions::next_tab(app),
        KeyCode::BackTab => actions::prev_tab(app),
        KeyCode::Char('N') => app.open_prompt(PromptKind::NewList, ""),
        KeyCode::Char('o') => app.open_prompt(PromptKind::OpenList, ""),
        KeyCode::Char('s') => {
            if let Some(name) = app.current_tab().map(|t| t.path().display().to_string()) {
                app.open_prompt(PromptKind::SaveList, &name);
            }
        }
        KeyCode::Char('D') => {
            if app.current_tab().is_some() {
                app.mode = Mode::Confirm;
            }
        }
        KeyCode::Char('w') => actions::close_tab(app, now),
        KeyCode::Char('c') => {
            if app.tabs.cached().is_empty() {
                app.set_status("no cached lists");
            } else {
                app.picker_cursor = 0;
                app.mode = Mode::Picker;
            }
        }

        // Entries
        KeyCode::Char('n') => {
            if app.current_tab().is_some() {
                app.open_prompt(PromptKind::EntryText, "");
            }
        }
        KeyCode::Char('x') => actions::clear_completed(app),

        // Cursor
        KeyCode::Up | KeyCode::Char('k') => move_cursor(app, -1),
        KeyCode::Down | KeyCode::Char('j') => move_cursor(app, 1),
        KeyCode::PageUp => move_cursor(app, -10),
        KeyCode::PageDown => move_cursor(app, 10),
        KeyCode::Home | KeyCode::Char('g') => {
            if let Some(tab) = app.current_tab_mut() {
                tab.cursor_to_start();
            }
        }
        KeyCode::End | KeyCode::Char('G') => {
            if let Some(tab) = app.current_tab_mut() {
                tab.cursor_to_end();
            }
        }

        // Cell edits: these only touch the row; the synchronizer picks them up
        KeyCode::Enter | KeyCode::Char('e') => begin_text_edit(app),
        KeyCode::Char(' ') => {
            if let Some(row) = app.current_tab_mut().and_then(|t| t.cursor_row_mut()) {
                row.toggle_completed();
            }
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            if let Some(row) = app.current_tab_mut().and_then(|t| t.cursor_row_mut()) {
                row.set_priority(row.priority.raised());
            }
        }
        KeyCode::Char('-') => {
            if let Some(row) = app.current_tab_mut().and_then(|t| t.cursor_row_mut()) {
                row.set_priority(row.priority.lowered());
            }
        }
        KeyCode::Char(c @ '0'..='9') => {
            let value = match c.to_digit(10) {
                Some(0) => 10,
                Some(d) => d as i64,
                None => return,
            };
            if let (Some(row), Ok(p)) = (
                app.current_tab_mut().and_then(|t| t.cursor_row_mut()),
                Priority::new(value),
            ) {
                row.set_priority(p);
            }
        }
        _ => {}
    }
}

fn move_cursor(app: &mut App, delta: isize) {
    if let Some(tab) = app.current_tab_mut() {
        tab.move_cursor(delta);
    }
}

fn begin_text_edit(app: &mut App) {
    let Some(row) = app.current_tab().and_then(|t| t.cursor_row()) else {
        return;
    };
    let edit = TextEdit {
        id: row.id.clone(),
        input: LineInput::with_text(&row.text),
    };
    app.edit = Some(edit);
    app.mode = Mode::Edit;
}
