use crate::api::ApiClient;
use crate::app::App;
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use super::action_queue::{channel, event_channel};
use super::actions::Runtime;
use super::views::{handle_mouse, handle_view_key};

pub async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: ApiClient,
) -> Result<()> {
    let (action_tx, mut action_rx) = channel();
    let (event_tx, mut event_rx) = event_channel();
    let mut runtime = Runtime::new(client, event_tx);

    runtime.load_initial_snapshot(app);

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if app.is_loading {
            app.throbber_state.calc_next();
        }

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_view_key(key, app, &action_tx);
                }
                Event::Mouse(mouse) => handle_mouse(mouse, app),
                _ => {}
            }
        }

        while let Ok(action) = action_rx.try_recv() {
            runtime.run_action(action);
        }

        while let Ok(event) = event_rx.try_recv() {
            runtime.apply_event(event, app);
        }

        if !app.running {
            break;
        }
    }

    Ok(())
}
