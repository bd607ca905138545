use crate::app::{self, App};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_form_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    if key.code == KeyCode::Enter {
        submit(app, action_tx);
        return;
    }
    match app.focused_box {
        app::FocusedBox::Email => handle_email_key(key, app),
        app::FocusedBox::Activity => handle_activity_key(key, app),
        app::FocusedBox::Roster => {}
    }
}

fn submit(app: &mut App, action_tx: &ActionTx) {
    if let Some((email, activity)) = app.form_submission() {
        enqueue_action(action_tx, Action::Enroll { email, activity });
    }
}

fn handle_email_key(key: KeyEvent, app: &mut App) {
    let input = &mut app.form.email;
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.home(),
        KeyCode::End => input.end(),
        KeyCode::Down => app.focus_next(),
        _ => return,
    }
    app.form.validation_error = None;
}

fn handle_activity_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Down | KeyCode::Right | KeyCode::Char('j') => app.select_next_activity(),
        KeyCode::Up | KeyCode::Left | KeyCode::Char('k') => app.select_previous_activity(),
        _ => return,
    }
    app.form.validation_error = None;
}
