use autoapply_engine::{ApplyRequest, ApplyTarget, FailureKind, SubmitSettings};
use pretty_assertions::assert_eq;

fn endpoint(base_url: &str, target: ApplyTarget) -> String {
    SubmitSettings {
        base_url: base_url.to_string(),
        target,
        ..SubmitSettings::default()
    }
    .endpoint()
    .expect("endpoint")
    .to_string()
}

#[test]
fn default_settings_point_at_local_linkedin_route() {
    let settings = SubmitSettings::default();
    assert_eq!(settings.job_type, "any");
    assert_eq!(settings.target, ApplyTarget::LinkedIn);
    assert_eq!(
        settings.endpoint().expect("endpoint").as_str(),
        "http://localhost:8000/apply/linkedin"
    );
}

#[test]
fn endpoint_keeps_base_path_prefix() {
    assert_eq!(
        endpoint("https://jobs.example.com/api", ApplyTarget::JobBoard),
        "https://jobs.example.com/api/apply"
    );
    assert_eq!(
        endpoint("https://jobs.example.com/api/", ApplyTarget::LinkedIn),
        "https://jobs.example.com/api/apply/linkedin"
    );
}

#[test]
fn endpoint_rejects_non_base_urls() {
    let settings = SubmitSettings {
        base_url: "mailto:someone@example.com".to_string(),
        ..SubmitSettings::default()
    };
    assert_eq!(
        settings.endpoint().unwrap_err().kind,
        FailureKind::InvalidEndpoint
    );
}

#[test]
fn apply_target_parses_cli_names() {
    assert_eq!("linkedin".parse::<ApplyTarget>(), Ok(ApplyTarget::LinkedIn));
    assert_eq!("Job-Board".parse::<ApplyTarget>(), Ok(ApplyTarget::JobBoard));
    assert_eq!("jobboard".parse::<ApplyTarget>(), Ok(ApplyTarget::JobBoard));
    assert!("indeed".parse::<ApplyTarget>().is_err());
    assert_eq!(ApplyTarget::JobBoard.to_string(), "job-board");
}

#[test]
fn apply_request_serializes_both_fields() {
    let body = ApplyRequest {
        keywords: "software engineer, frontend".to_string(),
        job_type: "any".to_string(),
    };
    let value = serde_json::to_value(&body).expect("serialize");
    assert_eq!(
        value,
        serde_json::json!({ "keywords": "software engineer, frontend", "job_type": "any" })
    );
}
