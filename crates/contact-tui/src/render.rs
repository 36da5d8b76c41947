use ratatui::Frame;

use contact_core::WidgetState;

use crate::ui::views::widget;
use crate::ui::App;

/// Draw the phase the widget is in. The three views are mutually exclusive.
pub fn render(f: &mut Frame, app: &App) {
    let area = f.area();
    match &app.state {
        WidgetState::Loading => widget::render_loading(f, app, area),
        WidgetState::Failed { error } => widget::render_failed(f, error, area),
        WidgetState::Ready {
            fields,
            error,
            token,
        } => widget::render_form(f, app, area, fields, error.as_deref(), token),
        WidgetState::Success => widget::render_success(f, area),
    }
}
