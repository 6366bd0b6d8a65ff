use crate::view_model::{AppViewModel, LABEL_PROCESSING, LABEL_START};
use crate::ValidationError;

pub type SubmissionId = u64;

pub(crate) const MSG_EMPTY_INPUT: &str = "Please enter job keywords";
pub(crate) const MSG_SENDING: &str = "Sending request to backend...";
pub(crate) const MSG_FAILED: &str =
    "Failed to trigger job application. Make sure backend is running.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

impl SubmissionState {
    /// Every state except `Pending` is ready for a new submission.
    pub fn accepts_submit(self) -> bool {
        self != SubmissionState::Pending
    }
}

/// Visual category of the status region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusMessage {
    fn new(text: impl Into<String>, kind: StatusKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// Every change of submission state. Each variant fixes both the next state and
/// its status message.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Transition {
    Rejected(ValidationError),
    Started,
    Applied(String),
    Failed,
}

impl Transition {
    fn target(&self) -> SubmissionState {
        match self {
            Transition::Rejected(_) => SubmissionState::Idle,
            Transition::Started => SubmissionState::Pending,
            Transition::Applied(_) => SubmissionState::Succeeded,
            Transition::Failed => SubmissionState::Failed,
        }
    }

    fn into_status(self) -> StatusMessage {
        match self {
            Transition::Rejected(ValidationError::EmptyInput) => {
                StatusMessage::new(MSG_EMPTY_INPUT, StatusKind::Error)
            }
            Transition::Started => StatusMessage::new(MSG_SENDING, StatusKind::Info),
            Transition::Applied(message) => StatusMessage::new(message, StatusKind::Success),
            Transition::Failed => StatusMessage::new(MSG_FAILED, StatusKind::Error),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    keyword_input: String,
    submission: SubmissionState,
    status: Option<StatusMessage>,
    in_flight: Option<SubmissionId>,
    next_submission_id: SubmissionId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let pending = self.submission == SubmissionState::Pending;
        AppViewModel {
            keyword_input: self.keyword_input.clone(),
            submission: self.submission,
            status: self.status.clone(),
            submit_enabled: !pending,
            submit_label: if pending { LABEL_PROCESSING } else { LABEL_START },
            in_flight: self.in_flight,
            dirty: self.dirty,
        }
    }

    pub fn submission(&self) -> SubmissionState {
        self.submission
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn keyword_input(&self) -> &str {
        &self.keyword_input
    }

    pub fn in_flight(&self) -> Option<SubmissionId> {
        self.in_flight
    }

    /// Returns whether anything visible changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_keyword_input(&mut self, text: String) {
        if self.keyword_input != text {
            self.keyword_input = text;
            self.dirty = true;
        }
    }

    pub(crate) fn reject_input(&mut self, err: ValidationError) {
        self.apply(Transition::Rejected(err));
    }

    /// Move to `Pending` and allocate the id of the new request.
    ///
    /// Returns `None` while another submission is still in flight.
    pub(crate) fn begin_submission(&mut self) -> Option<SubmissionId> {
        if !self.submission.accepts_submit() {
            return None;
        }
        self.next_submission_id += 1;
        let id = self.next_submission_id;
        self.in_flight = Some(id);
        self.apply(Transition::Started);
        Some(id)
    }

    /// Resolve the in-flight submission. Returns `false` if `submission_id` is not
    /// the one currently outstanding.
    pub(crate) fn finish_submission(
        &mut self,
        submission_id: SubmissionId,
        outcome: crate::SubmissionOutcome,
    ) -> bool {
        if self.in_flight != Some(submission_id) {
            return false;
        }
        self.in_flight = None;
        let transition = match outcome {
            crate::SubmissionOutcome::Applied { message } => Transition::Applied(message),
            crate::SubmissionOutcome::Failed => Transition::Failed,
        };
        self.apply(transition);
        true
    }

    fn apply(&mut self, transition: Transition) {
        self.submission = transition.target();
        self.status = Some(transition.into_status());
        self.dirty = true;
    }
}
