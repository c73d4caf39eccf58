use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::actions;
use crate::tui::app::{App, Mode, PromptKind};

use super::edit_line;

/// Editing a row's text cell. Enter writes the buffer into the row,
/// Esc drops it.
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.edit = None;
            app.mode = Mode::Navigate;
        }
        KeyCode::Enter => {
            app.mode = Mode::Navigate;
            let Some(edit) = app.edit.take() else {
                return;
            };
            // The row may have moved since the edit began; find it by id
            if let Some(row) = app.current_tab_mut().and_then(|t| t.row_mut(&edit.id)) {
                row.text = edit.input.into_text();
            }
        }
        _ => {
            if let Some(edit) = &mut app.edit {
                edit_line(&mut edit.input, key);
            }
        }
    }
}

pub(super) fn handle_prompt(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_prompt(),
        KeyCode::Enter => {
            let Some(prompt) = app.prompt.take() else {
                app.mode = Mode::Navigate;
                return;
            };
            app.mode = Mode::Navigate;
            submit_prompt(app, prompt.kind, prompt.input.into_text());
        }
        _ => {
            if let Some(prompt) = &mut app.prompt {
                edit_line(&mut prompt.input, key);
            }
        }
    }
}

fn submit_prompt(app: &mut App, kind: PromptKind, value: String) {
    let now = Instant::now();
    match kind {
        PromptKind::EntryText => {
            // Empty text: nothing to create, no priority question
            if !value.trim().is_empty() {
                app.open_prompt(PromptKind::EntryPriority { text: value }, "5");
            }
        }
        PromptKind::EntryPriority { text } => actions::create_entry(app, &text, &value),
        PromptKind::NewList => actions::new_list(app, &value, now),
        PromptKind::OpenList => actions::open_list(app, &value, now),
        PromptKind::SaveList => actions::save_list(app, &value),
    }
}
