use std::process::ExitCode;

use anyhow::{bail, Result};
use autoapply_core::{update, AppState, Msg, StatusKind, StatusMessage, SubmissionState};
use autoapply_engine::SubmitSettings;
use autoapply_logging::{apply_error, apply_info, apply_warn};

use super::effects::EffectRunner;

/// Runs one submission without the form and prints the resulting status line.
///
/// Exits with success only when the backend accepted the request.
pub fn run(settings: SubmitSettings, keywords: String) -> Result<ExitCode> {
    let status = run_once(settings, keywords)?;
    match status.kind {
        StatusKind::Success => {
            println!("{}", status.text);
            Ok(ExitCode::SUCCESS)
        }
        StatusKind::Info | StatusKind::Error => {
            eprintln!("{}", status.text);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Drives the state machine through a single submission and returns the final status.
pub fn run_once(settings: SubmitSettings, keywords: String) -> Result<StatusMessage> {
    match settings.endpoint() {
        Ok(endpoint) => apply_info!("Headless submission to {}", endpoint),
        Err(err) => apply_warn!("Endpoint unusable: {}", err),
    }
    let runner = EffectRunner::new(settings)?;

    let (state, _) = update(AppState::new(), Msg::KeywordsChanged(keywords));
    let (mut state, effects) = update(state, Msg::SubmitClicked);
    runner.enqueue(effects);

    while state.submission() == SubmissionState::Pending {
        let Some(msg) = runner.wait() else {
            apply_error!("Engine stopped with submission {:?} pending", state.in_flight());
            bail!("engine stopped before the submission completed");
        };
        let (next, effects) = update(state, msg);
        runner.enqueue(effects);
        state = next;
    }

    match state.status() {
        Some(status) => Ok(status.clone()),
        None => bail!("submission finished without a status"),
    }
}
