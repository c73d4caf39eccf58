use std::path::PathBuf;
use std::time::Instant;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::{AppConfig, Entry, EntryId, EntryStore, Priority};
use crate::tabs::Tab;
use crate::tui::app::App;

pub const TERM_W: u16 = 60;
pub const TERM_H: u16 = 12;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Store from `(text, priority, completed)` triples, ids "1", "2", …
pub fn store_of(entries: &[(&str, i64, bool)]) -> EntryStore {
    let mut store = EntryStore::new();
    for (i, (text, priority, completed)) in entries.iter().enumerate() {
        let mut entry = Entry::new(*text, Priority::new(*priority).unwrap());
        entry.completed = *completed;
        store.upsert(EntryId::new((i + 1).to_string()), entry);
    }
    store
}

/// Tab over an in-memory store; nothing touches the path unless it syncs.
pub fn tab_named(name: &str, entries: &[(&str, i64, bool)]) -> Tab {
    let config = AppConfig::default();
    Tab::with_store(
        PathBuf::from(format!("/tmp/zentodo-test/{name}.json")),
        store_of(entries),
        (&config.sync).into(),
        Instant::now(),
    )
}

/// App with a single list built from entries
pub fn app_with_entries(entries: &[(&str, i64, bool)]) -> App {
    app_with_tabs(vec![tab_named("todo", entries)], 5)
}

/// App holding `tabs`, opened in order (the last one ends up in front)
pub fn app_with_tabs(tabs: Vec<Tab>, max_visible: usize) -> App {
    let mut config = AppConfig::default();
    config.tabs.max_visible = max_visible;
    let mut app = App::new(&config, PathBuf::from("/tmp/zentodo-test"));
    for tab in tabs {
        app.tabs.open(tab);
    }
    app.current = 0;
    app
}

pub const GROCERIES: &[(&str, i64, bool)] = &[
    ("Buy milk", 7, false),
    ("Call the plumber", 9, false),
    ("Water plants", 3, true),
];
