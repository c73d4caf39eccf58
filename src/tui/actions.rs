//! User-level operations behind the key bindings: list management and
//! entry creation/clearing. Each one reports through the status row.

use std::fs;
use std::time::Instant;

use crate::io::list_dir::resolve_list_path;
use crate::ops::entry_ops::CreateOutcome;
use crate::tabs::Tab;

use super::app::App;

/// New List: create `<name>.json` in the data directory and show it
pub fn new_list(app: &mut App, name: &str, now: Instant) {
    if name.trim().is_empty() {
        return;
    }
    let Some(path) = resolve_list_path(&app.data_dir, name) else {
        app.set_error(format!("not a list name: {}", name.trim()));
        return;
    };
    if path.exists() || app.tabs.contains(&path) {
        app.set_error(format!("{} already exists", path.display()));
        return;
    }
    let tab = Tab::open(path, app.periods, now);
    app.set_status(format!("created {}", tab.name()));
    app.insert_tab(tab, now);
}

/// Open List: show an existing list file, promoting it if already held
pub fn open_list(app: &mut App, input: &str, now: Instant) {
    if input.trim().is_empty() {
        return;
    }
    let Some(path) = resolve_list_path(&app.data_dir, input) else {
        app.set_error(format!("not a list name: {}", input.trim()));
        return;
    };
    if app.tabs.contains(&path) {
        app.promote(&path, now);
        return;
    }
    if !path.is_file() {
        app.set_error(format!("no list at {}", path.display()));
        return;
    }
    let tab = Tab::open(path, app.periods, now);
    app.set_status(format!("opened {}", tab.name()));
    app.insert_tab(tab, now);
}

/// Save List: write the current list to another file and rebind the tab to it
pub fn save_list(app: &mut App, input: &str) {
    if input.trim().is_empty() {
        return;
    }
    let Some(path) = resolve_list_path(&app.data_dir, input) else {
        app.set_error(format!("not a list name: {}", input.trim()));
        return;
    };
    let Some(current) = app.current_tab().map(|tab| tab.path().to_path_buf()) else {
        return;
    };
    if path != current && app.tabs.contains(&path) {
        // The other tab's file is about to be overwritten
        app.tabs.delete(&path);
        app.current = app
            .tabs
            .visible()
            .iter()
            .position(|tab| tab.path() == current)
            .unwrap_or(0);
    }
    let Some(tab) = app.current_tab_mut() else {
        return;
    };
    match tab.save_as(path) {
        Ok(()) => {
            let msg = format!("saved as {}", tab.path().display());
            app.set_status(msg);
        }
        Err(e) => {
            tracing::error!("save as failed: {e}");
            app.set_error(format!("save failed: {e}"));
        }
    }
}

/// Delete List: remove the file and its tab. The tab goes even if the file
/// could not be removed; the failure is shown in a dialog.
pub fn delete_list(app: &mut App) {
    let Some(path) = app.current_tab().map(|tab| tab.path().to_path_buf()) else {
        return;
    };
    if let Err(e) = fs::remove_file(&path) {
        tracing::error!(list = %path.display(), "delete failed: {e}");
        app.dialog = Some(format!("Could not delete {}:\n{}", path.display(), e));
    } else {
        tracing::info!(list = %path.display(), "list deleted");
        app.set_status(format!("deleted {}", path.display()));
    }
    app.tabs.delete(&path);
    app.clamp_current();
}

/// Close the current tab. Its edits are flushed; the file stays.
pub fn close_tab(app: &mut App, now: Instant) {
    let Some(tab) = app.current_tab_mut() else {
        return;
    };
    if let Err(e) = tab.sync() {
        let msg = format!("could not save {}: {}", tab.name(), e);
        app.set_error(msg);
    }
    let Some(path) = app.current_tab().map(|tab| tab.path().to_path_buf()) else {
        return;
    };
    let had_cached = !app.tabs.cached().is_empty();
    app.tabs.close(&path);
    if had_cached {
        // close promoted the front of the cache; it is now visible[0]
        if let Some(front) = app.tabs.visible().front().map(|t| t.path().to_path_buf()) {
            app.after_promotion(&front, None, now);
        }
    } else {
        app.clamp_current();
    }
}

/// Promote the cached tab at `index` in the cached ordering
pub fn promote_cached(app: &mut App, index: usize, now: Instant) {
    let Some(path) = app.tabs.cached().get(index).map(|t| t.path().to_path_buf()) else {
        return;
    };
    app.promote(&path, now);
    app.set_status(format!("showing {}", crate::io::list_dir::list_name(&path)));
}

pub fn next_tab(app: &mut App) {
    let n = app.tabs.visible().len();
    if n > 0 {
        app.current = (app.current + 1) % n;
    }
}

pub fn prev_tab(app: &mut App) {
    let n = app.tabs.visible().len();
    if n > 0 {
        app.current = (app.current + n - 1) % n;
    }
}

/// New Entry. Bad input (empty text, priority not an integer in 1-10)
/// silently creates nothing.
pub fn create_entry(app: &mut App, text: &str, priority: &str) {
    let Ok(priority) = priority.trim().parse::<i64>() else {
        tracing::debug!(priority, "entry not created: priority is not a number");
        return;
    };
    let Some(tab) = app.current_tab_mut() else {
        return;
    };
    match tab.create_entry(text, priority) {
        Ok(CreateOutcome::Created(id)) => tracing::debug!(%id, "entry created"),
        Ok(CreateOutcome::Rejected(why)) => tracing::debug!(?why, "entry not created"),
        Err(e) => {
            tracing::error!("create failed: {e}");
            app.set_error(format!("could not save: {e}"));
        }
    }
}

/// Clear Completed on the current list
pub fn clear_completed(app: &mut App) {
    let Some(tab) = app.current_tab_mut() else {
        return;
    };
    match tab.clear_completed() {
        Ok(0) => app.set_status("nothing completed"),
        Ok(n) => app.set_status(format!("cleared {n} completed")),
        Err(e) => {
            tracing::error!("clear completed failed: {e}");
            app.set_error(format!("could not save: {e}"));
        }
    }
}

/// Quit after the next loop iteration; edits are flushed on the way out
pub fn quit(app: &mut App) {
    app.should_quit = true;
}
