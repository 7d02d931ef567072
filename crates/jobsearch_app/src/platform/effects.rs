use std::sync::mpsc;
use std::thread;

use jobsearch_core::{Effect, Msg};
use jobsearch_engine::{EngineEvent, EngineHandle, SearchSettings};
use search_logging::{search_debug, search_info, search_warn};

use super::app::AppEvent;
use super::persistence::{save_saved_jobs, SavedStore};

pub struct EffectRunner {
    engine: EngineHandle,
    saved_store: SavedStore,
}

impl EffectRunner {
    pub fn new(
        settings: SearchSettings,
        saved_store: SavedStore,
        event_tx: mpsc::Sender<AppEvent>,
    ) -> Self {
        search_info!("Searching via {}", settings.endpoint);
        Self::with_engine(EngineHandle::new(settings), saved_store, event_tx)
    }

    pub fn with_engine(
        engine: EngineHandle,
        saved_store: SavedStore,
        event_tx: mpsc::Sender<AppEvent>,
    ) -> Self {
        let runner = Self {
            engine,
            saved_store,
        };
        runner.spawn_event_loop(event_tx);
        runner
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Search { request_id, key } => {
                    search_info!("Search request_id={} key={}", request_id, key);
                    self.engine.search(request_id, key);
                }
                Effect::PersistSaved(saved) => save_saved_jobs(&self.saved_store, &saved),
            }
        }
    }

    // Ends when the engine shuts down (runner dropped) or the app stops listening.
    fn spawn_event_loop(&self, event_tx: mpsc::Sender<AppEvent>) {
        let events = self.engine.events();
        thread::spawn(move || {
            while let Some(event) = events.recv() {
                let msg = match event {
                    EngineEvent::SearchCompleted {
                        request_id,
                        key,
                        result,
                    } => Msg::SearchCompleted {
                        request_id,
                        result: result.map_err(|err| {
                            search_warn!("Search {} for {} failed: {}", request_id, key, err);
                            err.to_string()
                        }),
                        key,
                    },
                };
                if event_tx.send(AppEvent::Msg(msg)).is_err() {
                    break;
                }
            }
            search_debug!("engine event forwarding stopped");
        });
    }
}
