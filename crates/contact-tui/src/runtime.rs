use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use tokio::sync::mpsc::Receiver;

use crate::input::handle_key;
use crate::render::render;
use crate::ui::{App, NetEvent, Tui};

/// Drive the widget: draw, then wait for a terminal event, a network
/// outcome, or a spinner tick.
pub async fn run_app(terminal: &mut Tui, app: &mut App, net_rx: &mut Receiver<NetEvent>) -> Result<()> {
    let mut event_stream = EventStream::new();
    let mut tick_interval = tokio::time::interval(Duration::from_millis(100));

    // One token fetch per mount. Redraws inside the loop never re-issue it.
    app.spawn_token_fetch();

    while app.running {
        terminal.draw(|f| render(f, app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        handle_key(app, key);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(err)) => return Err(err.into()),
                    None => app.quit(),
                }
            }
            Some(event) = net_rx.recv() => {
                app.apply_net_event(event);
            }
            _ = tick_interval.tick() => {
                app.tick = app.tick.wrapping_add(1);
            }
        }
    }

    Ok(())
}
