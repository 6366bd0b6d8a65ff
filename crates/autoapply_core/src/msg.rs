#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the keyword input.
    KeywordsChanged(String),
    /// User pressed the submit trigger; the current input is validated first.
    SubmitClicked,
    /// Programmatic submission of an already validated keyword.
    SubmitKeyword(crate::Keyword),
    /// Engine resolved a submission.
    SubmissionFinished {
        submission_id: crate::SubmissionId,
        outcome: SubmissionOutcome,
    },
    /// UI tick used to drain engine events.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}

/// Result of one request as far as the user is concerned.
///
/// Failure detail stays with the engine and the log; the core only needs to know
/// that the request did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Applied { message: String },
    Failed,
}
