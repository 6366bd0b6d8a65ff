use autoapply_core::{Effect, Msg, SubmissionOutcome};
use autoapply_engine::{EngineError, EngineEvent, EngineHandle, SubmitSettings};
use autoapply_logging::{apply_info, apply_warn};

/// Executes core effects on the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: SubmitSettings) -> Result<Self, EngineError> {
        Ok(Self {
            engine: EngineHandle::new(settings)?,
        })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitApplication {
                    submission_id,
                    keywords,
                } => {
                    apply_info!(
                        "SubmitApplication submission_id={} keywords_len={}",
                        submission_id,
                        keywords.as_str().len()
                    );
                    self.engine.submit(submission_id, keywords.into_string());
                }
            }
        }
    }

    /// Messages for every engine event that has already arrived.
    pub fn drain(&self) -> Vec<Msg> {
        std::iter::from_fn(|| self.engine.try_recv())
            .map(event_to_msg)
            .collect()
    }

    /// Blocks for the next engine event. `None` means the engine has stopped.
    pub fn wait(&self) -> Option<Msg> {
        self.engine.recv().map(event_to_msg)
    }
}

fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::SubmissionCompleted {
            submission_id,
            result,
        } => {
            let outcome = match result {
                Ok(response) => SubmissionOutcome::Applied {
                    message: response.message,
                },
                Err(err) => {
                    let class = if err.kind.is_backend() {
                        "backend"
                    } else {
                        "transport"
                    };
                    apply_warn!(
                        "Submission {} failed ({}): {}",
                        submission_id,
                        class,
                        err
                    );
                    SubmissionOutcome::Failed
                }
            };
            Msg::SubmissionFinished {
                submission_id,
                outcome,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use autoapply_engine::{ApplyResponse, FailureKind, SubmitError};

    use super::*;

    #[test]
    fn success_event_keeps_backend_message() {
        let msg = event_to_msg(EngineEvent::SubmissionCompleted {
            submission_id: 3,
            result: Ok(ApplyResponse {
                message: "Processed 5 jobs".to_string(),
            }),
        });

        assert_eq!(
            msg,
            Msg::SubmissionFinished {
                submission_id: 3,
                outcome: SubmissionOutcome::Applied {
                    message: "Processed 5 jobs".to_string()
                },
            }
        );
    }

    #[test]
    fn failures_drop_error_detail() {
        for kind in [
            FailureKind::HttpStatus(500),
            FailureKind::Network,
            FailureKind::MalformedResponse,
        ] {
            let msg = event_to_msg(EngineEvent::SubmissionCompleted {
                submission_id: 4,
                result: Err(SubmitError {
                    kind,
                    message: "connection refused (os error 111)".to_string(),
                }),
            });

            assert_eq!(
                msg,
                Msg::SubmissionFinished {
                    submission_id: 4,
                    outcome: SubmissionOutcome::Failed,
                }
            );
        }
    }
}
