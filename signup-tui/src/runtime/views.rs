use crate::app::{self, App};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::action_queue::{Action, ActionTx};

mod confirm_unregister;
mod form;
mod roster;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

fn is_quit(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
}

pub(super) fn handle_view_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    if is_quit(&key) {
        app.quit();
        return;
    }
    match app.current_view {
        app::View::ConfirmUnregister => {
            confirm_unregister::handle_confirm_unregister_key(key, app, action_tx)
        }
        app::View::Main => match key.code {
            KeyCode::Tab => app.focus_next(),
            KeyCode::BackTab => app.focus_previous(),
            _ => match app.focused_box {
                app::FocusedBox::Email | app::FocusedBox::Activity => {
                    form::handle_form_key(key, app, action_tx)
                }
                app::FocusedBox::Roster => roster::handle_roster_key(key, app),
            },
        },
    }
}

pub(super) fn handle_mouse(mouse: MouseEvent, app: &mut App) {
    if app.current_view != app::View::Main {
        return;
    }
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(path) = app.hit_test(mouse.column, mouse.row) {
                app.activate(&path);
            }
        }
        MouseEventKind::ScrollUp => app.roster_scroll_up(),
        MouseEventKind::ScrollDown => app.roster_scroll_down(),
        _ => {}
    }
}
