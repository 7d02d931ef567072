use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use jobsearch_core::{RequestId, SearchKey};
use search_logging::{search_debug, search_error};

use crate::client::{ReqwestSearchClient, SearchClient, SearchSettings};
use crate::{EngineEvent, FailureKind, SearchError};

enum EngineCommand {
    Search { request_id: RequestId, key: SearchKey },
}

/// Handle to the background search worker.
///
/// Requests run concurrently on a tokio runtime owned by a dedicated thread;
/// completions are delivered in arrival order, not request order. Nothing is
/// cancelled while a handle is alive; once every handle is dropped the worker
/// stops and its runtime goes with it.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(settings: SearchSettings) -> Self {
        Self::with_client(Arc::new(ReqwestSearchClient::new(settings)))
    }

    pub fn with_client(client: Arc<dyn SearchClient>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    search_error!("Failed to start search runtime: {}", err);
                    reject_all(cmd_rx, event_tx, &err.to_string());
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(client.as_ref(), command, event_tx).await;
                });
            }
            search_debug!("search engine command channel closed");
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn search(&self, request_id: RequestId, key: SearchKey) {
        let _ = self
            .cmd_tx
            .send(EngineCommand::Search { request_id, key });
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.recv_timeout(timeout).ok()
    }

    /// Completion stream that does not keep the worker alive.
    pub fn events(&self) -> EngineEvents {
        EngineEvents {
            event_rx: Arc::clone(&self.event_rx),
        }
    }
}

/// Receiving side of an [`EngineHandle`] without its command channel.
pub struct EngineEvents {
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineEvents {
    /// Blocks for the next completion. Returns `None` after the last
    /// [`EngineHandle`] is gone and the worker has shut down.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.recv().ok()
    }
}

async fn handle_command(
    client: &dyn SearchClient,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Search { request_id, key } => {
            let result = client.search(&key).await;
            let _ = event_tx.send(EngineEvent::SearchCompleted {
                request_id,
                key,
                result,
            });
        }
    }
}

fn reject_all(
    cmd_rx: mpsc::Receiver<EngineCommand>,
    event_tx: mpsc::Sender<EngineEvent>,
    reason: &str,
) {
    while let Ok(EngineCommand::Search { request_id, key }) = cmd_rx.recv() {
        let _ = event_tx.send(EngineEvent::SearchCompleted {
            request_id,
            key,
            result: Err(SearchError::new(FailureKind::Network, reason)),
        });
    }
}
