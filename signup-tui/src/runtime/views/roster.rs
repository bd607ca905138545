use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

pub(super) fn handle_roster_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.roster_focus_down(),
        KeyCode::Up | KeyCode::Char('k') => app.roster_focus_up(),
        KeyCode::PageDown => app.roster_page_down(),
        KeyCode::PageUp => app.roster_page_up(),
        // Remove the participant under the cursor
        KeyCode::Enter | KeyCode::Delete | KeyCode::Char('d') => {
            app.activate_focused_control();
        }
        _ => {}
    }
}
