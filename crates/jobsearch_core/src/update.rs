use search_logging::{search_debug, search_info};

use crate::{AppState, Effect, Msg, SearchStatus, Selection};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            state.mark_dirty();
            search_current(&mut state)
        }
        Msg::SavedRestored(saved) => {
            search_info!("restored {} saved job(s)", saved.len());
            state.restore_saved(saved);
            Vec::new()
        }
        Msg::RoleSelected(role) => {
            let selection = Selection::new(role, state.selection().location);
            select(&mut state, selection)
        }
        Msg::LocationSelected(location) => {
            let selection = Selection::new(state.selection().role, location);
            select(&mut state, selection)
        }
        Msg::RetryRequested => {
            if matches!(state.current_status(), Some(SearchStatus::Failure(_))) {
                state.mark_dirty();
                search_current(&mut state)
            } else {
                Vec::new()
            }
        }
        Msg::SaveToggled(job) => {
            let saved = state.toggle_saved(&job).clone();
            search_debug!(
                "toggled '{}' (now {} saved)",
                job.identifier(),
                saved.len()
            );
            vec![Effect::PersistSaved(saved)]
        }
        Msg::SearchCompleted {
            request_id,
            key,
            result,
        } => {
            state.complete_search(request_id, &key, result);
            Vec::new()
        }
    };

    (state, effects)
}

fn select(state: &mut AppState, selection: Selection) -> Vec<Effect> {
    if !state.set_selection(selection) {
        return Vec::new();
    }
    search_current(state)
}

fn search_current(state: &mut AppState) -> Vec<Effect> {
    match state.request_current() {
        Some((request_id, key)) => {
            search_info!("search #{} for {}", request_id, key);
            vec![Effect::Search { request_id, key }]
        }
        None => Vec::new(),
    }
}
