use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::tui::line_input::LineInput;

use super::spans_width;

/// Render the status row (bottom of screen). Prompts and the delete
/// confirmation are typed here.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let (spans, hint) = match app.mode {
        Mode::Navigate | Mode::Picker => {
            let spans = match &app.status {
                Some(status) => {
                    let fg = if status.is_error {
                        app.theme.red
                    } else {
                        app.theme.text
                    };
                    vec![Span::styled(status.text.clone(), Style::default().fg(fg).bg(bg))]
                }
                None => Vec::new(),
            };
            let hint = if app.mode == Mode::Picker {
                Some("Enter show  Esc cancel")
            } else if app.show_key_hints {
                Some("n new  x clear done  ? help  q quit")
            } else {
                None
            };
            (spans, hint)
        }
        Mode::Edit => {
            let spans = vec![Span::styled(
                "-- EDIT --",
                Style::default()
                    .fg(app.theme.highlight)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            )];
            (spans, Some("Enter save  Esc cancel"))
        }
        Mode::Prompt => {
            let spans = match &app.prompt {
                Some(prompt) => input_spans(app, prompt.kind.title(), &prompt.input),
                None => Vec::new(),
            };
            (spans, Some("Enter confirm  Esc cancel"))
        }
        Mode::Confirm => {
            let name = app.current_tab().map(|t| t.name()).unwrap_or_default();
            let spans = vec![Span::styled(
                format!("Delete list {name} and its file? "),
                Style::default()
                    .fg(app.theme.red)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            )];
            (spans, Some("y delete  any key cancel"))
        }
    };

    let mut spans = spans;
    if let Some(hint) = hint {
        let content_width = spans_width(&spans);
        let hint_width = hint.chars().count();
        if content_width + hint_width < width {
            let padding = width - content_width - hint_width;
            spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
            spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// `Title: text▌more`
fn input_spans<'a>(app: &App, title: &str, input: &LineInput) -> Vec<Span<'a>> {
    let bg = app.theme.background;
    let (before, after) = input.split_at_cursor();
    vec![
        Span::styled(
            format!("{title}: "),
            Style::default().fg(app.theme.highlight).bg(bg),
        ),
        Span::styled(
            before.to_string(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ),
        Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)),
        Span::styled(
            after.to_string(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::PromptKind;
    use crate::tui::render::test_helpers::*;

    fn status_line(app: &App) -> String {
        render_to_string(TERM_W, 1, |frame, area| {
            render_status_row(frame, app, area);
        })
    }

    #[test]
    fn prompt_shows_title_and_cursor() {
        let mut app = app_with_entries(GROCERIES);
        app.open_prompt(PromptKind::NewList, "groc");
        let line = status_line(&app);
        assert!(line.starts_with("New list name: groc\u{258C}"));
        assert!(line.ends_with("Enter confirm  Esc cancel"));
    }

    #[test]
    fn error_status_is_shown() {
        let mut app = app_with_entries(GROCERIES);
        app.set_error("could not save todo");
        assert!(status_line(&app).starts_with("could not save todo"));
    }

    #[test]
    fn confirm_names_the_list() {
        let mut app = app_with_entries(GROCERIES);
        app.mode = Mode::Confirm;
        assert!(status_line(&app).starts_with("Delete list todo and its file?"));
    }

    #[test]
    fn navigate_hints_are_opt_in() {
        let mut app = app_with_entries(GROCERIES);
        assert_eq!(status_line(&app), "");
        app.show_key_hints = true;
        assert!(status_line(&app).ends_with("? help  q quit"));
    }
}
