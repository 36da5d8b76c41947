use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use contact_core::{CsrfToken, FieldId, FormFields};

use crate::ui::{theme, App, Focus};

const SPINNER_FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

/// Widest the form column gets; centered within the terminal
const FORM_WIDTH: u16 = 56;

fn centered_column(area: Rect, height: u16) -> Rect {
    let width = FORM_WIDTH.min(area.width);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height.min(area.height))
}

/// Loading phase: spinner only, no form
pub fn render_loading(f: &mut Frame, app: &App, area: Rect) {
    let frame = SPINNER_FRAMES[(app.tick as usize) % SPINNER_FRAMES.len()];
    let line = Line::from(vec![
        Span::styled(frame, Style::default().fg(theme::ACCENT_PRIMARY)),
        Span::styled(" Loading contact form", Style::default().fg(theme::TEXT_MUTED)),
    ]);
    let target = centered_column(area, 1);
    f.render_widget(Paragraph::new(line).centered(), target);
}

/// Token acquisition failed: error text, no form fields
pub fn render_failed(f: &mut Frame, error: &str, area: Rect) {
    let line = Line::from(Span::styled(error, Style::default().fg(theme::ACCENT_ERROR)));
    let target = centered_column(area, 1);
    f.render_widget(Paragraph::new(line).centered(), target);
}

/// Submission accepted: success message, form discarded
pub fn render_success(f: &mut Frame, area: Rect) {
    let line = Line::from(Span::styled(
        "Form submitted successfully",
        Style::default().fg(theme::ACCENT_SUCCESS),
    ));
    let target = centered_column(area, 1);
    f.render_widget(Paragraph::new(line).centered(), target);
}

/// The editable form: five fields, token row in field mode, inline error,
/// submit control and key hints
pub fn render_form(
    f: &mut Frame,
    app: &App,
    area: Rect,
    fields: &FormFields,
    error: Option<&str>,
    token: &CsrfToken,
) {
    // label + value per field, then token row, error row, submit, gap, hints
    let height = (FieldId::ALL.len() as u16) * 2 + 5;
    let column = centered_column(area, height);
    let mut y = column.y;

    for id in FieldId::ALL {
        let focused = app.focus == Focus::Field(id);
        render_input(f, column, &mut y, id, fields.get(id), focused);
    }

    if app.is_field_mode() {
        // The "hidden field": visible here only as a dimmed, non-editable row.
        let token_row = Paragraph::new(Line::from(Span::styled(
            format!("csrfToken: {}", token.as_str()),
            Style::default().fg(theme::TEXT_DIM),
        )));
        render_row(f, column, y, token_row);
    }
    y += 1;

    if let Some(error) = error {
        let error_row = Paragraph::new(Line::from(Span::styled(
            error,
            Style::default().fg(theme::ACCENT_ERROR),
        )));
        render_row(f, column, y, error_row);
    }
    y += 1;

    let submit_focused = app.focus == Focus::Submit;
    let submit_label = if app.submitting {
        "[ Submitting… ]"
    } else {
        "[ Submit ]"
    };
    let submit_style = if submit_focused {
        Style::default()
            .fg(theme::ACCENT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme::TEXT_MUTED)
    };
    let submit = Paragraph::new(Line::from(Span::styled(submit_label, submit_style)));
    render_row(f, column, y, submit);
    y += 2;

    let hints = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(theme::ACCENT_WARNING)),
        Span::styled(" switch field", Style::default().fg(theme::TEXT_MUTED)),
        Span::styled(" · ", Style::default().fg(theme::TEXT_MUTED)),
        Span::styled("Enter", Style::default().fg(theme::ACCENT_SUCCESS)),
        Span::styled(" submit", Style::default().fg(theme::TEXT_MUTED)),
        Span::styled(" · ", Style::default().fg(theme::TEXT_MUTED)),
        Span::styled("Esc", Style::default().fg(theme::ACCENT_WARNING)),
        Span::styled(" quit", Style::default().fg(theme::TEXT_MUTED)),
    ]));
    render_row(f, column, y, hints);
}

/// Draw one row of the form column, dropping rows the clamped column cannot
/// hold. On a short terminal the bottom rows are cut instead of panicking.
fn render_row(f: &mut Frame, column: Rect, y: u16, widget: Paragraph) {
    if y < column.bottom() {
        f.render_widget(widget, Rect::new(column.x, y, column.width, 1));
    }
}

fn render_input(f: &mut Frame, column: Rect, y: &mut u16, id: FieldId, value: &str, focused: bool) {
    let label_style = if focused {
        Style::default()
            .fg(theme::ACCENT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme::TEXT_MUTED)
    };
    let label = Paragraph::new(Line::from(Span::styled(id.label(), label_style)));
    render_row(f, column, *y, label);
    *y += 1;

    let mut spans = Vec::new();
    if value.is_empty() {
        spans.push(Span::styled(id.label(), Style::default().fg(theme::TEXT_DIM)));
    } else {
        spans.push(Span::styled(
            visible_tail(value, column.width.saturating_sub(2) as usize),
            Style::default().fg(theme::TEXT_PRIMARY),
        ));
    }
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(theme::ACCENT_PRIMARY)));
    } else if value.is_empty() {
        spans.push(Span::styled(" ", Style::default().fg(theme::BORDER_INACTIVE)));
    }
    let input = Paragraph::new(Line::from(spans));
    render_row(f, column, *y, input);
    *y += 1;
}

/// Keep the end of the value visible when it is wider than the input row
fn visible_tail(value: &str, max_width: usize) -> String {
    if value.width() <= max_width {
        return value.to_string();
    }
    let mut tail = String::new();
    let mut width = 0;
    for c in value.chars().rev() {
        let w = c.to_string().width();
        if width + w > max_width {
            break;
        }
        width += w;
        tail.insert(0, c);
    }
    tail
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_tail_keeps_short_values_intact() {
        assert_eq!(visible_tail("hello", 10), "hello");
    }

    #[test]
    fn visible_tail_trims_from_the_front() {
        assert_eq!(visible_tail("abcdefgh", 3), "fgh");
    }
}
