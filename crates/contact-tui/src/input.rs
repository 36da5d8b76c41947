use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::{App, Focus};

/// Route a key press into the widget
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Quit keys work in every phase.
    if key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
    {
        app.quit();
        return;
    }

    if !app.state.is_ready() {
        return;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => app.focus = app.focus.next(),
        KeyCode::BackTab | KeyCode::Up => app.focus = app.focus.prev(),
        KeyCode::Enter => match app.focus {
            Focus::Submit => app.begin_submit(),
            Focus::Field(_) => app.focus = app.focus.next(),
        },
        KeyCode::Backspace => app.edit_backspace(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => app.edit_char(c),
        _ => {}
    }
}
