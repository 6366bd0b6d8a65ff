use crate::{validate, AppState, Effect, Keyword, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::KeywordsChanged(text) => {
            state.set_keyword_input(text);
            Vec::new()
        }
        Msg::SubmitClicked => {
            // The in-flight guard runs before validation: a click while pending must
            // not even replace the "sending" status with a validation error.
            if !state.submission().accepts_submit() {
                return (state, Vec::new());
            }
            match validate(state.keyword_input()) {
                Ok(keywords) => submit(&mut state, keywords),
                Err(err) => {
                    state.reject_input(err);
                    Vec::new()
                }
            }
        }
        Msg::SubmitKeyword(keywords) => submit(&mut state, keywords),
        Msg::SubmissionFinished {
            submission_id,
            outcome,
        } => {
            state.finish_submission(submission_id, outcome);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn submit(state: &mut AppState, keywords: Keyword) -> Vec<Effect> {
    match state.begin_submission() {
        Some(submission_id) => vec![Effect::SubmitApplication {
            submission_id,
            keywords,
        }],
        None => Vec::new(),
    }
}
