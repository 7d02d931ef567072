use jobsearch_core::{JobIdentifier, JobRecord, SavedSet};

#[test]
fn empty_set_saves_nothing() {
    let saved = SavedSet::new();
    assert!(saved.is_empty());
    assert!(!saved.is_saved(&JobIdentifier::from("Software Engineer-Acme")));
}

#[test]
fn toggle_flips_membership_each_call() {
    let job = JobRecord::new("Mobile Engineer", "Hooli");
    let before = SavedSet::new();

    let once = before.clone().toggled(&job);
    assert_ne!(once, before);
    assert!(once.is_saved(&job.identifier()));

    let twice = once.clone().toggled(&job);
    assert_ne!(twice, once);
    assert_eq!(twice, before);
}

#[test]
fn toggle_is_deterministic_given_current_state() {
    let job = JobRecord::new("Designer", "Pied Piper");
    let start: SavedSet = [JobIdentifier::from("Other-Co")].into_iter().collect();

    assert_eq!(start.clone().toggled(&job), start.clone().toggled(&job));
}

#[test]
fn toggle_involution_leaves_other_members_alone() {
    let kept = JobIdentifier::from("Product Manager-Vandelay");
    let job = JobRecord::new("Software Architect", "Umbrella");
    let mut saved: SavedSet = [kept.clone()].into_iter().collect();

    assert!(saved.toggle(job.identifier()));
    assert!(!saved.toggle(job.identifier()));
    assert!(saved.is_saved(&kept));
    assert_eq!(saved.len(), 1);
}

#[test]
fn duplicate_identifiers_collapse() {
    let saved: SavedSet = ["A-B", "A-B", "C-D"]
        .into_iter()
        .map(JobIdentifier::from)
        .collect();
    assert_eq!(saved.len(), 2);
    assert_eq!(saved.to_strings(), vec!["A-B".to_string(), "C-D".to_string()]);
}
