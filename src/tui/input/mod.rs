mod edit;
mod navigate;
mod popups;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Mode};
use super::line_input::LineInput;

use edit::{handle_edit, handle_prompt};
use navigate::handle_navigate;
use popups::{handle_confirm, handle_picker};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Dialogs and help swallow the key that dismisses them
    if app.dialog.take().is_some() {
        return;
    }
    if app.show_help {
        app.show_help = false;
        return;
    }

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Edit => handle_edit(app, key),
        Mode::Prompt => handle_prompt(app, key),
        Mode::Confirm => handle_confirm(app, key),
        Mode::Picker => handle_picker(app, key),
    }
}

/// Handle a bracketed paste event. Only text fields take pasted text.
pub fn handle_paste(app: &mut App, text: &str) {
    if text.is_empty() {
        return;
    }
    match app.mode {
        Mode::Edit => {
            if let Some(edit) = &mut app.edit {
                edit.input.insert_str(text);
            }
        }
        Mode::Prompt => {
            if let Some(prompt) = &mut app.prompt {
                prompt.input.insert_str(text);
            }
        }
        _ => {}
    }
}

/// Shared line-editing keys. Returns false if the key is not an editing key.
fn edit_line(input: &mut LineInput, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.left(),
        KeyCode::Right => input.right(),
        KeyCode::Home => input.home(),
        KeyCode::End => input.end(),
        _ => return false,
    }
    true
}
