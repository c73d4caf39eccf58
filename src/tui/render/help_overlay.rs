use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::centered_rect_fixed;

const ENTRY_KEYS: &[(&str, &str)] = &[
    ("\u{2191}\u{2193}/jk", "Move cursor up/down"),
    ("g/G", "Jump to top/bottom"),
    ("n", "New entry"),
    ("Enter/e", "Edit text"),
    ("1-9, 0", "Set priority (0 is 10)"),
    ("+/-", "Raise/lower priority"),
    ("Space", "Toggle done"),
    ("x", "Clear completed"),
];

const LIST_KEYS: &[(&str, &str)] = &[
    ("Tab/S-Tab", "Next/previous list"),
    ("N", "New list"),
    ("o", "Open list"),
    ("s", "Save list as"),
    ("D", "Delete list"),
    ("w", "Close tab"),
    ("c", "Show a cached list"),
    ("?", "This help"),
    ("q", "Quit"),
];

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(" Entries", header_style)));
    for (key, desc) in ENTRY_KEYS {
        add_binding(&mut lines, key, desc, key_style, desc_style);
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(" Lists", header_style)));
    for (key, desc) in LIST_KEYS {
        add_binding(&mut lines, key, desc, key_style, desc_style);
    }

    let height = lines.len() as u16 + 2;
    let overlay_area = centered_rect_fixed(44, height, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Key Bindings ")
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));
    frame.render_widget(
        Paragraph::new(lines).block(block).style(Style::default().bg(bg)),
        overlay_area,
    );
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &'a str,
    desc: &'a str,
    key_style: Style,
    desc_style: Style,
) {
    let padded_key = format!(" {:<12}", key);
    lines.push(Line::from(vec![
        Span::styled(padded_key, key_style),
        Span::styled(desc, desc_style),
    ]));
}
