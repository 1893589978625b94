use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use portfolio_core::{CatalogueResponse, FetchError};
use std::time::{Duration, Instant};
use tokio::sync::oneshot::{self, error::TryRecvError};

use crate::app::{handle_input, App, LoadState};
use crate::fetch::CatalogueLocation;
use crate::terminal::Tui;
use crate::ui;

// Upper bound on how long input polling may block (ms)
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(50);

type PendingLoad = oneshot::Receiver<Result<CatalogueResponse, FetchError>>;

/// Fetches on a tokio task; the result comes back to the loop, which stays
/// the only writer of the session.
fn spawn_fetch(location: CatalogueLocation) -> PendingLoad {
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let _ = tx.send(location.fetch().await);
    });
    rx
}

/// Run the main application event loop
pub async fn run(terminal: &mut Tui, app: &mut App, location: &CatalogueLocation) -> Result<()> {
    let mut pending: Option<PendingLoad> = None;

    loop {
        if app.load_state == LoadState::Requested {
            pending = Some(spawn_fetch(location.clone()));
            app.load_state = LoadState::Loading;
        }

        if let Some(rx) = pending.as_mut() {
            match rx.try_recv() {
                Ok(result) => {
                    app.apply_load(result);
                    pending = None;
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Closed) => {
                    app.apply_load(Err(FetchError::Request(
                        "catalogue task ended without a result".to_string(),
                    )));
                    pending = None;
                }
            }
        }

        // Advance the transition
        app.update(Instant::now());

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(eyre!("Terminal draw error: {e}"));
        }

        let timeout = app.poll_timeout(Instant::now(), EVENT_POLL_TIMEOUT);
        if matches!(event::poll(timeout), Ok(true)) {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    handle_input(app, key.code);
                    if !app.running {
                        break;
                    }
                }
                // Resizes are picked up by the next draw
                Ok(_) | Err(_) => {}
            }
        }
    }

    Ok(())
}
