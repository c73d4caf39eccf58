use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::util::unicode::fit_to_width;

use super::centered_rect_fixed;

/// Modal message (e.g. a failed delete). Any key dismisses it.
pub fn render_dialog(frame: &mut Frame, app: &App, area: Rect) {
    let Some(message) = app.dialog.as_deref() else {
        return;
    };
    let popup_w: u16 = 48.min(area.width.saturating_sub(2));
    let inner_w = popup_w.saturating_sub(2) as usize;

    let bg = app.theme.background;
    let header_style = Style::default()
        .fg(app.theme.red)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text).bg(bg);

    let mut styled_lines: Vec<(String, Style)> = vec![
        (" Error".into(), header_style),
        (String::new(), text_style),
    ];
    for paragraph in message.lines() {
        for s in wrap_text(" ", paragraph, inner_w) {
            styled_lines.push((s, text_style));
        }
    }
    styled_lines.push((String::new(), text_style));
    styled_lines.push((" Press any key to dismiss.".into(), Style::default().fg(app.theme.dim).bg(bg)));

    // Dynamic height from content + 2 for borders
    let popup_h = ((styled_lines.len() as u16) + 2).min(area.height.saturating_sub(2));
    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let lines: Vec<Line> = styled_lines
        .into_iter()
        .map(|(text, style)| Line::from(Span::styled(text, style)))
        .collect();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.red).bg(bg))
        .style(Style::default().bg(bg));
    frame.render_widget(
        Paragraph::new(lines).block(block).style(Style::default().bg(bg)),
        overlay_area,
    );
}

/// Picker over the cached lists, most recently shown first
pub fn render_picker(frame: &mut Frame, app: &App, area: Rect) {
    let cached = app.tabs.cached();
    let popup_w: u16 = 36.min(area.width.saturating_sub(2));
    let inner_w = popup_w.saturating_sub(2) as usize;
    let popup_h = (cached.len() as u16 + 2).min(area.height);
    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let lines: Vec<Line> = cached
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            let label = fit_to_width(&format!(" {}", tab.name()), inner_w);
            let style = if i == app.picker_cursor {
                Style::default()
                    .fg(app.theme.text_bright)
                    .bg(app.theme.selection_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(app.theme.text).bg(bg)
            };
            Line::from(Span::styled(label, style))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Cached lists ")
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .style(Style::default().bg(bg));
    frame.render_widget(Paragraph::new(lines).block(block), overlay_area);
}

/// Word-wrap `text` into lines of at most `max_width` characters.
/// Every line (including the first) is prefixed with `indent`.
fn wrap_text(indent: &str, text: &str, max_width: usize) -> Vec<String> {
    let indent_len = indent.len();
    let mut lines = Vec::new();
    let mut current = indent.to_string();

    for word in text.split_whitespace() {
        let space = if current.len() == indent_len { 0 } else { 1 };
        if current.len() + space + word.len() > max_width && current.len() > indent_len {
            lines.push(current);
            current = indent.to_string();
        }
        if current.len() > indent_len {
            current.push(' ');
        }
        current.push_str(word);
    }
    if current.len() > indent_len || lines.is_empty() {
        lines.push(current);
    }
    lines
}
