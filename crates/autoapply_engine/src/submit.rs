use std::fmt;
use std::str::FromStr;

use autoapply_logging::{apply_debug, apply_info};
use url::Url;

use crate::{ApplyRequest, ApplyResponse, FailureKind, SubmissionId, SubmitError};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_JOB_TYPE: &str = "any";

/// Backend route that receives the keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApplyTarget {
    /// Easy Apply automation on LinkedIn.
    #[default]
    LinkedIn,
    /// Job board scrape that records matches for manual review.
    JobBoard,
}

impl ApplyTarget {
    pub fn path(self) -> &'static str {
        match self {
            ApplyTarget::LinkedIn => "apply/linkedin",
            ApplyTarget::JobBoard => "apply",
        }
    }
}

impl fmt::Display for ApplyTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplyTarget::LinkedIn => write!(f, "linkedin"),
            ApplyTarget::JobBoard => write!(f, "job-board"),
        }
    }
}

impl FromStr for ApplyTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linkedin" => Ok(ApplyTarget::LinkedIn),
            "job-board" | "jobboard" => Ok(ApplyTarget::JobBoard),
            other => Err(format!("unknown apply target '{other}'")),
        }
    }
}

/// Where and how submissions are sent.
///
/// No request timeout is applied: a submission stays pending until the transport
/// itself reports success or an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitSettings {
    pub base_url: String,
    pub target: ApplyTarget,
    pub job_type: String,
}

impl Default for SubmitSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            target: ApplyTarget::default(),
            job_type: DEFAULT_JOB_TYPE.to_string(),
        }
    }
}

impl SubmitSettings {
    /// Full URL of the target route under `base_url`.
    pub fn endpoint(&self) -> Result<Url, SubmitError> {
        let mut base = Url::parse(&self.base_url)
            .map_err(|err| SubmitError::new(FailureKind::InvalidEndpoint, err.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(SubmitError::new(
                FailureKind::InvalidEndpoint,
                format!("{} cannot be used as a base url", self.base_url),
            ));
        }
        // Without a trailing slash `join` would replace the last path segment.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(self.target.path())
            .map_err(|err| SubmitError::new(FailureKind::InvalidEndpoint, err.to_string()))
    }
}

#[async_trait::async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(
        &self,
        submission_id: SubmissionId,
        keywords: &str,
    ) -> Result<ApplyResponse, SubmitError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestSubmitter {
    settings: SubmitSettings,
    client: reqwest::Client,
}

impl ReqwestSubmitter {
    pub fn new(settings: SubmitSettings) -> Result<Self, SubmitError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|err| SubmitError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }
}

#[async_trait::async_trait]
impl Submitter for ReqwestSubmitter {
    async fn submit(
        &self,
        submission_id: SubmissionId,
        keywords: &str,
    ) -> Result<ApplyResponse, SubmitError> {
        let endpoint = self.settings.endpoint()?;
        let body = ApplyRequest {
            keywords: keywords.to_string(),
            job_type: self.settings.job_type.clone(),
        };
        apply_info!(
            "Submission {} posting to {} keywords_len={}",
            submission_id,
            endpoint,
            body.keywords.len()
        );

        let response = self
            .client
            .post(endpoint)
            .json(&body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        let parsed: ApplyResponse = serde_json::from_slice(&bytes)
            .map_err(|err| SubmitError::new(FailureKind::MalformedResponse, err.to_string()))?;
        apply_debug!(
            "Submission {} resolved with message_len={}",
            submission_id,
            parsed.message.len()
        );
        Ok(parsed)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> SubmitError {
    if err.is_timeout() {
        return SubmitError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_builder() {
        return SubmitError::new(FailureKind::InvalidEndpoint, err.to_string());
    }
    SubmitError::new(FailureKind::Network, err.to_string())
}
