//! Async worker - runs in Tokio runtime and fetches the module feed

use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::time::Duration;

use tracing::{debug, warn};

use crate::infrastructure::backend::BackendClient;
use crate::infrastructure::runtime::bridge::{RuntimeCommand, RuntimeEvent};

/// Run the async worker loop.
///
/// Exactly one fetch is issued per worker lifetime; there is no retry and
/// no polling. After the outcome event is delivered the worker only waits
/// for shutdown.
pub async fn run_async_worker(
    backend_url: String,
    cmd_rx: Receiver<RuntimeCommand>,
    evt_tx: Sender<RuntimeEvent>,
) {
    let client = BackendClient::new(backend_url);

    debug!(backend = client.base_url(), "fetching module list");
    let event = match client.fetch_modules().await {
        Ok(modules) => {
            debug!(count = modules.len(), "module list loaded");
            RuntimeEvent::ModulesLoaded { modules }
        }
        Err(err) => {
            warn!(error = %err, "module fetch failed");
            RuntimeEvent::LoadFailed {
                message: err.user_message(),
            }
        }
    };
    let _ = evt_tx.send(event);

    loop {
        match cmd_rx.try_recv() {
            Ok(RuntimeCommand::Shutdown) | Err(TryRecvError::Disconnected) => return,
            Err(TryRecvError::Empty) => {}
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
}
