//! Auto-apply engine: submission IO and effect execution.
mod engine;
mod submit;
mod types;

pub use engine::{EngineError, EngineHandle};
pub use submit::{
    ApplyTarget, ReqwestSubmitter, SubmitSettings, Submitter, DEFAULT_BASE_URL, DEFAULT_JOB_TYPE,
};
pub use types::{
    ApplyRequest, ApplyResponse, EngineEvent, FailureKind, SubmissionId, SubmitError,
};
