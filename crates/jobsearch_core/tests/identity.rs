use jobsearch_core::{JobIdentifier, JobRecord};
use pretty_assertions::assert_eq;

#[test]
fn identifier_joins_title_and_company_with_hyphen() {
    let job = JobRecord::new("Software Engineer", "Acme");
    assert_eq!(job.identifier().as_str(), "Software Engineer-Acme");
}

#[test]
fn identity_is_structural() {
    let first = JobRecord {
        salary: Some("$150k".to_string()),
        posted_at: Some("2 days ago".to_string()),
        ..JobRecord::new("Backend Engineer", "Initech")
    };
    let second = JobRecord {
        salary: Some("$170k".to_string()),
        is_remote: true,
        ..JobRecord::new("Backend Engineer", "Initech")
    };

    assert_ne!(first, second);
    assert_eq!(first.identifier(), second.identifier());
    assert_ne!(
        first.identifier(),
        JobRecord::new("Backend Engineer", "Initrode").identifier()
    );
}

#[test]
fn separator_collisions_are_not_disambiguated() {
    let left = JobRecord::new("Dev-Ops", "Acme");
    let right = JobRecord::new("Dev", "Ops-Acme");
    assert_eq!(left.identifier(), right.identifier());
}

#[test]
fn decodes_service_payload_with_wire_names() {
    let payload = r#"{
        "title": "Data Scientist",
        "company": "Globex",
        "company_image": "https://cdn.example.com/globex.png",
        "salary": "$140,000",
        "location": "Seattle, WA",
        "isRemote": true,
        "type": "Full-time",
        "postedAt": "3 days ago",
        "via": "LinkedIn"
    }"#;

    let job: JobRecord = serde_json::from_str(payload).unwrap();
    assert_eq!(
        job,
        JobRecord {
            title: "Data Scientist".to_string(),
            company: "Globex".to_string(),
            company_image: Some("https://cdn.example.com/globex.png".to_string()),
            salary: Some("$140,000".to_string()),
            location: Some("Seattle, WA".to_string()),
            is_remote: true,
            job_type: Some("Full-time".to_string()),
            posted_at: Some("3 days ago".to_string()),
        }
    );
}

#[test]
fn decoding_is_lenient_about_missing_and_odd_fields() {
    let payload = r#"{
        "title": "Designer",
        "company_image": null,
        "salary": 120000,
        "isRemote": "yes",
        "postedAt": ""
    }"#;

    let job: JobRecord = serde_json::from_str(payload).unwrap();
    assert_eq!(job.company, "");
    assert_eq!(job.company_image, None);
    assert_eq!(job.salary.as_deref(), Some("120000"));
    assert!(job.is_remote);
    assert_eq!(job.posted_at, None);
    assert_eq!(job.identifier(), JobIdentifier::from("Designer-"));
}

#[test]
fn remote_flag_defaults_to_false() {
    let job: JobRecord = serde_json::from_str(r#"{"title": "A", "company": "B"}"#).unwrap();
    assert!(!job.is_remote);

    let job: JobRecord =
        serde_json::from_str(r#"{"title": "A", "company": "B", "isRemote": 0}"#).unwrap();
    assert!(!job.is_remote);
}

#[test]
fn remote_flag_follows_truthiness_of_strings() {
    let job: JobRecord =
        serde_json::from_str(r#"{"title": "A", "company": "B", "isRemote": "false"}"#).unwrap();
    assert!(job.is_remote);

    let job: JobRecord =
        serde_json::from_str(r#"{"title": "A", "company": "B", "isRemote": ""}"#).unwrap();
    assert!(!job.is_remote);
}
