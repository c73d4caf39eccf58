use std::error::Error;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::list_dir::{DEFAULT_LIST, discover_lists};
use crate::model::{AppConfig, EntryId};
use crate::tabs::{Tab, TabCache, TickPeriods};

use super::input;
use super::line_input::LineInput;
use super::render;
use super::theme::Theme;

/// Longest the loop waits for input when no tick is due sooner
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Editing the text cell of one row
    Edit,
    /// Single-line prompt (see `PromptKind`)
    Prompt,
    /// Yes/no confirmation of deleting the current list
    Confirm,
    /// Choosing a cached list to bring back
    Picker,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptKind {
    EntryText,
    EntryPriority { text: String },
    NewList,
    OpenList,
    SaveList,
}

impl PromptKind {
    pub fn title(&self) -> &'static str {
        match self {
            PromptKind::EntryText => "New entry",
            PromptKind::EntryPriority { .. } => "Priority (1-10)",
            PromptKind::NewList => "New list name",
            PromptKind::OpenList => "Open list",
            PromptKind::SaveList => "Save list as",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Prompt {
    pub kind: PromptKind,
    pub input: LineInput,
}

/// In-progress edit of a row's text cell. Bound to the entry id, so a
/// reorder while typing does not move the edit to another entry.
#[derive(Debug, Clone)]
pub struct TextEdit {
    pub id: EntryId,
    pub input: LineInput,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// Main application state
pub struct App {
    pub tabs: TabCache<Tab>,
    /// Index of the shown tab within the visible ordering
    pub current: usize,
    pub data_dir: PathBuf,
    pub periods: TickPeriods,
    pub theme: Theme,
    pub show_key_hints: bool,
    pub mode: Mode,
    pub edit: Option<TextEdit>,
    pub prompt: Option<Prompt>,
    /// Modal message; any key dismisses it
    pub dialog: Option<String>,
    pub picker_cursor: usize,
    pub status: Option<StatusMessage>,
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig, data_dir: PathBuf) -> Self {
        App {
            tabs: TabCache::new(config.tabs.capacity()),
            current: 0,
            data_dir,
            periods: TickPeriods::from(&config.sync),
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            mode: Mode::Navigate,
            edit: None,
            prompt: None,
            dialog: None,
            picker_cursor: 0,
            status: None,
            show_help: false,
            should_quit: false,
        }
    }

    /// Open lists in order; the last one opened ends up in front
    pub fn open_lists(&mut self, paths: Vec<PathBuf>, now: Instant) {
        for path in paths {
            let tab = Tab::open(path, self.periods, now);
            self.insert_tab(tab, now);
        }
    }

    /// Put a tab at the front of the visible set and show it
    pub fn insert_tab(&mut self, tab: Tab, now: Instant) {
        let key = tab.path().to_path_buf();
        let demoted = self.tabs.open(tab);
        self.after_promotion(&key, demoted, now);
    }

    /// Bring a held tab (visible or cached) to the front and show it
    pub fn promote(&mut self, key: &Path, now: Instant) {
        if !self.tabs.contains(key) {
            return;
        }
        let demoted = self.tabs.promote(key);
        self.after_promotion(key, demoted, now);
    }

    /// The front tab is shown and ticking again; a demoted tab goes dormant
    /// with its pending edits flushed.
    pub(super) fn after_promotion(&mut self, key: &Path, demoted: Option<PathBuf>, now: Instant) {
        if let Some(tab) = self.tabs.get_mut(key) {
            tab.wake(now);
        }
        if let Some(demoted) = demoted {
            tracing::debug!(list = %demoted.display(), "list moved to cache");
            if let Some(tab) = self.tabs.get_mut(&demoted)
                && let Err(e) = tab.sync()
            {
                self.set_error(format!("could not save {}: {}", demoted.display(), e));
            }
        }
        self.current = 0;
    }

    pub fn current_tab(&self) -> Option<&Tab> {
        self.tabs.visible().get(self.current)
    }

    pub fn current_tab_mut(&mut self) -> Option<&mut Tab> {
        self.tabs.visible_mut().get_mut(self.current)
    }

    pub fn clamp_current(&mut self) {
        self.current = self.current.min(self.tabs.visible().len().saturating_sub(1));
    }

    /// Run due ticks on every visible tab. Cached tabs never tick.
    /// Returns true when anything on screen may have changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        let mut errors = Vec::new();
        for tab in self.tabs.visible_mut().iter_mut() {
            match tab.tick(now) {
                Ok(outcome) => {
                    changed |= outcome.reordered
                        || outcome.report.is_some_and(|report| report.changed());
                }
                Err(e) => {
                    tracing::error!(list = %tab.path().display(), "sync failed: {e}");
                    errors.push(format!("could not save {}: {}", tab.name(), e));
                    changed = true;
                }
            }
        }
        if let Some(last) = errors.pop() {
            self.set_error(last);
        }
        changed
    }

    /// Earliest tick deadline among visible tabs
    pub fn next_due(&self) -> Option<Instant> {
        self.tabs.visible().iter().map(Tab::next_due).min()
    }

    /// Sync every held tab, cached ones included. Used on exit.
    pub fn flush_all(&mut self) {
        let tabs = self.tabs.visible_mut().iter_mut();
        for tab in tabs {
            if let Err(e) = tab.sync() {
                tracing::error!(list = %tab.path().display(), "final save failed: {e}");
            }
        }
        for tab in self.tabs.cached_mut().iter_mut() {
            if let Err(e) = tab.sync() {
                tracing::error!(list = %tab.path().display(), "final save failed: {e}");
            }
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: false,
        });
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: true,
        });
    }

    pub fn open_prompt(&mut self, kind: PromptKind, initial: &str) {
        self.prompt = Some(Prompt {
            kind,
            input: LineInput::with_text(initial),
        });
        self.mode = Mode::Prompt;
    }

    pub fn close_prompt(&mut self) {
        self.prompt = None;
        self.mode = Mode::Navigate;
    }
}

/// Run the TUI application over every list in `data_dir`
pub fn run(data_dir: &Path, config: &AppConfig) -> Result<(), Box<dyn Error>> {
    let mut paths = discover_lists(data_dir)?;
    if paths.is_empty() {
        paths.push(data_dir.join(DEFAULT_LIST));
    }
    tracing::info!(lists = paths.len(), dir = %data_dir.display(), "opening lists");

    let mut app = App::new(config, data_dir.to_path_buf());
    app.open_lists(paths, Instant::now());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    app.flush_all();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn Error>> {
    let mut redraw = true;
    loop {
        if redraw {
            terminal.draw(|frame| render::render(frame, app))?;
            redraw = false;
        }

        let now = Instant::now();
        let timeout = app
            .next_due()
            .map_or(IDLE_POLL, |due| due.saturating_duration_since(now))
            .min(IDLE_POLL);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                    redraw = true;
                }
                Event::Paste(text) => {
                    input::handle_paste(app, &text);
                    redraw = true;
                }
                Event::Resize(..) => redraw = true,
                _ => {}
            }
        }

        redraw |= app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
