use autoapply_core::{
    update, validate, AppState, Effect, Msg, SubmissionOutcome, SubmissionState,
};

const SENDING: &str = "Sending request to backend...";

fn submit_keywords(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::KeywordsChanged(input.to_string()));
    update(state, Msg::SubmitClicked)
}

fn finish(state: AppState, submission_id: u64, outcome: SubmissionOutcome) -> AppState {
    let (state, effects) = update(
        state,
        Msg::SubmissionFinished {
            submission_id,
            outcome,
        },
    );
    assert!(effects.is_empty());
    state
}

#[test]
fn second_submit_while_pending_is_ignored() {
    let (state, effects) = submit_keywords(AppState::new(), "backend");
    assert_eq!(effects.len(), 1);

    let (mut state, effects) = update(state, Msg::SubmitClicked);
    assert!(effects.is_empty());
    assert!(state.consume_dirty());

    let (mut state, effects) = update(state, Msg::SubmitClicked);
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
    assert_eq!(state.submission(), SubmissionState::Pending);
    assert_eq!(state.in_flight(), Some(1));
}

#[test]
fn programmatic_submit_while_pending_is_ignored() {
    let (state, _) = submit_keywords(AppState::new(), "backend");
    let before = state.clone();

    let (state, effects) = update(state, Msg::SubmitKeyword(validate("frontend").unwrap()));

    assert!(effects.is_empty());
    assert_eq!(state, before);
}

#[test]
fn empty_submit_while_pending_keeps_sending_status() {
    let (state, _) = submit_keywords(AppState::new(), "backend");
    let (state, effects) = submit_keywords(state, "   ");

    assert!(effects.is_empty());
    assert_eq!(state.submission(), SubmissionState::Pending);
    assert_eq!(state.status().map(|s| s.text.as_str()), Some(SENDING));
}

#[test]
fn programmatic_submit_from_idle_issues_request() {
    let keyword = validate("devops").unwrap();
    let (state, effects) = update(AppState::new(), Msg::SubmitKeyword(keyword.clone()));

    assert_eq!(state.submission(), SubmissionState::Pending);
    assert_eq!(
        effects,
        vec![Effect::SubmitApplication {
            submission_id: 1,
            keywords: keyword,
        }]
    );
}

#[test]
fn resubmit_after_success_starts_new_request() {
    let (state, _) = submit_keywords(AppState::new(), "first");
    let state = finish(
        state,
        1,
        SubmissionOutcome::Applied {
            message: "Processed 3 jobs".to_string(),
        },
    );

    let (state, effects) = submit_keywords(state, "second");
    assert_eq!(state.submission(), SubmissionState::Pending);
    assert_eq!(state.status().map(|s| s.text.as_str()), Some(SENDING));
    assert_eq!(
        effects,
        vec![Effect::SubmitApplication {
            submission_id: 2,
            keywords: validate("second").unwrap(),
        }]
    );
}

#[test]
fn resubmit_after_failure_starts_new_request() {
    let (state, _) = submit_keywords(AppState::new(), "first");
    let state = finish(state, 1, SubmissionOutcome::Failed);

    let (state, effects) = update(state, Msg::SubmitClicked);
    assert_eq!(state.submission(), SubmissionState::Pending);
    assert_eq!(effects.len(), 1);
    assert_eq!(state.in_flight(), Some(2));
}

#[test]
fn empty_submit_after_success_returns_to_idle() {
    let (state, _) = submit_keywords(AppState::new(), "first");
    let state = finish(
        state,
        1,
        SubmissionOutcome::Applied {
            message: "done".to_string(),
        },
    );

    let (state, effects) = submit_keywords(state, "");
    assert!(effects.is_empty());
    assert_eq!(state.submission(), SubmissionState::Idle);
    assert_eq!(
        state.status().map(|s| s.text.as_str()),
        Some("Please enter job keywords")
    );
}

#[test]
fn stale_completion_is_ignored() {
    let (state, _) = submit_keywords(AppState::new(), "first");
    let state = finish(state, 1, SubmissionOutcome::Failed);
    let (state, _) = update(state, Msg::SubmitClicked);
    let before = state.clone();

    // A late duplicate for the first request must not resolve the second one.
    let state = finish(
        state,
        1,
        SubmissionOutcome::Applied {
            message: "late".to_string(),
        },
    );
    assert_eq!(state, before);
    assert_eq!(state.submission(), SubmissionState::Pending);
}

#[test]
fn completion_without_request_is_ignored() {
    let state = finish(AppState::new(), 7, SubmissionOutcome::Failed);
    assert_eq!(state.submission(), SubmissionState::Idle);
    assert!(state.status().is_none());
}
