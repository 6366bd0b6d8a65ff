use crate::{StatusMessage, SubmissionId, SubmissionState};

pub const TITLE: &str = "LinkedIn Auto Apply";
pub const INPUT_LABEL: &str = "Job Keywords";
pub const INPUT_PLACEHOLDER: &str = "e.g. software engineer, full stack, frontend";
pub const LABEL_START: &str = "Start Applying";
pub const LABEL_PROCESSING: &str = "Processing...";

/// Read-only projection of [`crate::AppState`] for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub keyword_input: String,
    pub submission: SubmissionState,
    pub status: Option<StatusMessage>,
    pub submit_enabled: bool,
    pub submit_label: &'static str,
    pub in_flight: Option<SubmissionId>,
    pub dirty: bool,
}
