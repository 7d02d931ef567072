use std::sync::Once;

use jobsearch_core::{
    update, AppState, Effect, JobIdentifier, JobRecord, Location, Msg, ResultsView, SavedSet,
    SearchKey,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(search_logging::initialize_for_tests);
}

fn job(title: &str, company: &str) -> JobRecord {
    JobRecord {
        salary: Some("$100k".to_string()),
        location: Some("Seattle, WA".to_string()),
        ..JobRecord::new(title, company)
    }
}

fn loaded(jobs: Vec<JobRecord>) -> AppState {
    let (state, _) = update(AppState::new(), Msg::Started);
    let (state, _) = update(
        state,
        Msg::SearchCompleted {
            request_id: 1,
            key: SearchKey::new("Software Engineer", "Seattle"),
            result: Ok(jobs),
        },
    );
    state
}

fn saved_titles(state: &AppState) -> Option<Vec<String>> {
    match state.view().results {
        ResultsView::Loaded { saved, .. } => {
            saved.map(|cards| cards.into_iter().map(|card| card.title).collect())
        }
        other => panic!("expected loaded results, got {other:?}"),
    }
}

#[test]
fn toggle_emits_write_through_persist() {
    init_logging();
    let target = job("Backend Engineer", "Initech");
    let state = loaded(vec![target.clone()]);

    let (state, effects) = update(state, Msg::SaveToggled(target.clone()));
    let expected: SavedSet = [target.identifier()].into_iter().collect();
    assert_eq!(effects, vec![Effect::PersistSaved(expected.clone())]);
    assert_eq!(state.saved(), &expected);

    let (state, effects) = update(state, Msg::SaveToggled(target));
    assert_eq!(effects, vec![Effect::PersistSaved(SavedSet::new())]);
    assert!(state.saved().is_empty());
}

#[test]
fn toggling_twice_restores_the_saved_set() {
    init_logging();
    let target = job("Designer", "Pied Piper");
    let restored: SavedSet = [JobIdentifier::from("Designer-Hooli")].into_iter().collect();
    let (state, _) = update(loaded(vec![target.clone()]), Msg::SavedRestored(restored.clone()));

    let (state, _) = update(state, Msg::SaveToggled(target.clone()));
    assert_ne!(state.saved(), &restored);
    let (state, _) = update(state, Msg::SaveToggled(target));
    assert_eq!(state.saved(), &restored);
}

#[test]
fn cards_reflect_saved_membership() {
    init_logging();
    let first = job("One", "Acme");
    let second = job("Two", "Acme");
    let state = loaded(vec![first, second.clone()]);
    assert_eq!(saved_titles(&state), None);

    let (state, _) = update(state, Msg::SaveToggled(second));
    match state.view().results {
        ResultsView::Loaded { available, saved } => {
            let flags: Vec<bool> = available.iter().map(|card| card.saved).collect();
            assert_eq!(flags, vec![false, true]);
            assert_eq!(saved.unwrap().len(), 1);
        }
        other => panic!("expected loaded results, got {other:?}"),
    }
    assert_eq!(state.view().saved_count, 1);
}

#[test]
fn saved_view_only_lists_jobs_in_current_results() {
    init_logging();
    let seattle_jobs = vec![
        job("Software Engineer I", "Acme"),
        job("Software Engineer II", "Globex"),
        job("Software Engineer III", "Initech"),
    ];
    let state = loaded(seattle_jobs.clone());

    let (state, _) = update(state, Msg::SaveToggled(seattle_jobs[1].clone()));
    assert_eq!(
        saved_titles(&state),
        Some(vec!["Software Engineer II".to_string()])
    );

    let (state, effects) = update(state, Msg::LocationSelected(Location::UnitedStates));
    assert_eq!(effects.len(), 1);
    let (state, _) = update(
        state,
        Msg::SearchCompleted {
            request_id: 2,
            key: SearchKey::new("Software Engineer", "United States"),
            result: Ok(vec![job("Staff Engineer", "Umbrella")]),
        },
    );

    match state.view().results {
        ResultsView::Loaded { available, saved } => {
            let titles: Vec<&str> = available.iter().map(|card| card.title.as_str()).collect();
            assert_eq!(titles, vec!["Staff Engineer"]);
            assert_eq!(saved, Some(Vec::new()));
        }
        other => panic!("expected loaded results, got {other:?}"),
    }
    assert!(state.saved().is_saved(&seattle_jobs[1].identifier()));
}

#[test]
fn restored_set_marks_matching_cards() {
    init_logging();
    let target = job("Frontend Engineer", "Vandelay");
    let restored: SavedSet = [target.identifier()].into_iter().collect();
    let (state, effects) = update(AppState::new(), Msg::SavedRestored(restored));
    assert!(effects.is_empty());

    let (state, _) = update(state, Msg::Started);
    let (state, _) = update(
        state,
        Msg::SearchCompleted {
            request_id: 1,
            key: SearchKey::new("Software Engineer", "Seattle"),
            result: Ok(vec![target, job("Other", "Co")]),
        },
    );
    assert_eq!(
        saved_titles(&state),
        Some(vec!["Frontend Engineer".to_string()])
    );
}

#[test]
fn card_fields_fall_back_to_placeholders() {
    init_logging();
    let bare = JobRecord {
        is_remote: true,
        ..JobRecord::new("Mobile Engineer", "Hooli")
    };
    let state = loaded(vec![bare]);

    match state.view().results {
        ResultsView::Loaded { available, .. } => {
            let card = &available[0];
            assert_eq!(card.number, 1);
            assert_eq!(card.logo, jobsearch_core::NO_LOGO_PLACEHOLDER);
            assert_eq!(card.location, "Remote");
            assert_eq!(card.salary, "");
        }
        other => panic!("expected loaded results, got {other:?}"),
    }
}
