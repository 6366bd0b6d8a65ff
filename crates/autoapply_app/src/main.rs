mod platform;

use std::path::PathBuf;
use std::process::ExitCode;

use autoapply_engine::{ApplyTarget, SubmitSettings, DEFAULT_BASE_URL, DEFAULT_JOB_TYPE};
use clap::Parser;

use platform::logging::{self, LogDestination};

/// Submit job keywords to the auto-apply backend.
#[derive(Debug, Parser)]
#[command(name = "autoapply", version, about)]
struct Cli {
    /// Base URL of the apply backend.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Backend route to trigger.
    #[arg(long, default_value_t = ApplyTarget::LinkedIn)]
    target: ApplyTarget,

    /// Submit these keywords once without the interactive form.
    #[arg(long)]
    keywords: Option<String>,

    /// Log file used by the interactive form.
    #[arg(long, default_value = "./autoapply.log")]
    log_file: PathBuf,

    /// Log debug output.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn settings(&self) -> SubmitSettings {
        SubmitSettings {
            base_url: self.base_url.clone(),
            target: self.target,
            job_type: DEFAULT_JOB_TYPE.to_string(),
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let settings = cli.settings();

    match cli.keywords {
        Some(keywords) => {
            logging::initialize(LogDestination::Terminal, cli.verbose);
            platform::headless::run(settings, keywords)
        }
        None => {
            logging::initialize(LogDestination::File(cli.log_file), cli.verbose);
            platform::app::run_app(settings)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
