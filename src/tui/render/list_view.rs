use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::sync::ViewRow;
use crate::tui::app::{App, Mode};
use crate::util::unicode::{center_in_width, fit_to_width};

/// Cursor marker + padding before the text column
const MARKER_W: usize = 2;
const PRIORITY_W: usize = 10;
const DONE_W: usize = 6;

/// Render the current list as a three-column table: Text | Priority | Done
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let text_w = width.saturating_sub(MARKER_W + PRIORITY_W + DONE_W);

    let Some(tab) = app.tabs.visible().get(app.current) else {
        let msg = Line::from(Span::styled(
            "  No open lists. Press N to create one or o to open one.",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        frame.render_widget(Paragraph::new(vec![Line::from(""), msg]), area);
        return;
    };

    let header_style = Style::default()
        .fg(app.theme.dim)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let mut lines: Vec<Line> = vec![Line::from(Span::styled(
        format!(
            "{}{}{}{}",
            " ".repeat(MARKER_W),
            fit_to_width("Text", text_w),
            center_in_width("Priority", PRIORITY_W),
            center_in_width("Done", DONE_W),
        ),
        header_style,
    ))];

    if tab.rows.is_empty() {
        lines.push(Line::from(Span::styled(
            "  (empty, press n to add an entry)",
            Style::default().fg(app.theme.dim).bg(bg),
        )));
        frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
        return;
    }

    // Keep the cursor row inside the viewport
    let body_h = (area.height as usize).saturating_sub(1).max(1);
    let cursor = tab.cursor;
    let mut scroll = tab.scroll_offset;
    if cursor < scroll {
        scroll = cursor;
    } else if cursor >= scroll + body_h {
        scroll = cursor + 1 - body_h;
    }

    let editing = match (&app.mode, &app.edit) {
        (Mode::Edit, Some(edit)) => Some(edit),
        _ => None,
    };

    for (i, row) in tab.rows.iter().enumerate().skip(scroll).take(body_h) {
        let is_cursor = i == cursor;
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };
        let mut spans: Vec<Span> = Vec::new();

        if is_cursor {
            spans.push(Span::styled(
                "\u{258E} ",
                Style::default().fg(app.theme.selection_border).bg(row_bg),
            ));
        } else {
            spans.push(Span::styled("  ", Style::default().bg(row_bg)));
        }

        match editing.filter(|edit| edit.id == row.id) {
            Some(edit) => {
                let (before, after) = edit.input.split_at_cursor();
                let text_style = Style::default().fg(app.theme.text_bright).bg(row_bg);
                let shown = fit_to_width(&format!("{before}\u{258C}{after}"), text_w);
                spans.push(Span::styled(shown, text_style));
            }
            None => spans.push(Span::styled(
                fit_to_width(&row.text, text_w),
                cell_style(row, row_bg),
            )),
        }

        spans.push(Span::styled(
            center_in_width(&row.priority.to_string(), PRIORITY_W),
            Style::default().fg(row.color).bg(row_bg),
        ));
        let done = if row.completed { "[x]" } else { "[ ]" };
        spans.push(Span::styled(
            center_in_width(done, DONE_W),
            Style::default().fg(app.theme.text).bg(row_bg),
        ));

        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);

    if let Some(tab) = app.current_tab_mut() {
        tab.scroll_offset = scroll;
    }
}

/// Text cell style: priority colour, struck through once the completion
/// has been picked up by the synchronizer
fn cell_style(row: &ViewRow, bg: ratatui::style::Color) -> Style {
    let style = Style::default().fg(row.color).bg(bg);
    if row.strikethrough {
        style.add_modifier(Modifier::CROSSED_OUT)
    } else {
        style
    }
}
