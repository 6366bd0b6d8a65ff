//! Auto-apply core: pure submission state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod validate;
mod view_model;

pub use effect::Effect;
pub use msg::{Msg, SubmissionOutcome};
pub use state::{AppState, StatusKind, StatusMessage, SubmissionId, SubmissionState};
pub use update::update;
pub use validate::{validate, Keyword, ValidationError};
pub use view_model::{
    AppViewModel, INPUT_LABEL, INPUT_PLACEHOLDER, LABEL_PROCESSING, LABEL_START, TITLE,
};
