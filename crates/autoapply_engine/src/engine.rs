use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use autoapply_logging::{apply_debug, apply_warn};
use thiserror::Error;
use tokio::sync::mpsc as tokio_mpsc;

use crate::submit::{ReqwestSubmitter, SubmitSettings, Submitter};
use crate::{EngineEvent, SubmissionId, SubmitError};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] io::Error),
    #[error("failed to build http client: {0}")]
    Client(#[from] SubmitError),
}

enum EngineCommand {
    Submit {
        submission_id: SubmissionId,
        keywords: String,
    },
}

/// Runs submissions on a background thread and reports completions as events.
///
/// The thread drives a single-threaded runtime; the HTTP call is the only await
/// point. Dropping the handle closes the command channel and stops the thread.
pub struct EngineHandle {
    cmd_tx: tokio_mpsc::UnboundedSender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: SubmitSettings) -> Result<Self, EngineError> {
        let submitter = ReqwestSubmitter::new(settings)?;
        Self::with_submitter(Arc::new(submitter))
    }

    pub fn with_submitter(submitter: Arc<dyn Submitter>) -> Result<Self, EngineError> {
        let (cmd_tx, mut cmd_rx) = tokio_mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        thread::spawn(move || {
            runtime.block_on(async move {
                while let Some(command) = cmd_rx.recv().await {
                    let submitter = submitter.clone();
                    let event_tx = event_tx.clone();
                    tokio::spawn(async move {
                        handle_command(submitter.as_ref(), command, event_tx).await;
                    });
                }
            });
            apply_debug!("Engine thread exiting");
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn submit(&self, submission_id: SubmissionId, keywords: impl Into<String>) {
        let command = EngineCommand::Submit {
            submission_id,
            keywords: keywords.into(),
        };
        if self.cmd_tx.send(command).is_err() {
            apply_warn!("Engine thread gone; submission {} dropped", submission_id);
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks until the next event arrives. Returns `None` once the engine thread is gone.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }

    /// Blocks until the next event arrives or `timeout` elapses.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    submitter: &dyn Submitter,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Submit {
            submission_id,
            keywords,
        } => {
            let result = submitter.submit(submission_id, &keywords).await;
            let _ = event_tx.send(EngineEvent::SubmissionCompleted {
                submission_id,
                result,
            });
        }
    }
}
