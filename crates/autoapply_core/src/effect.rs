use crate::{Keyword, SubmissionId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Post the keywords to the apply backend.
    SubmitApplication {
        submission_id: SubmissionId,
        keywords: Keyword,
    },
}
