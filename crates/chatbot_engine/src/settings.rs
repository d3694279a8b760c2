use std::time::Duration;

use url::Url;

use crate::{BackendError, FailureKind};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Ask,
    UploadPdf,
    StartCrawl,
}

impl Endpoint {
    /// Path relative to the base address.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Ask => "rag/ask",
            Endpoint::UploadPdf => "upload/pdf",
            Endpoint::StartCrawl => "start-crawl",
        }
    }
}

/// Where the backend lives and how long to wait for it.
///
/// Timeouts are `None` by default: requests wait until the backend answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendSettings {
    base_url: Url,
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
}

impl BackendSettings {
    pub fn new(base_url: &str) -> Result<Self, BackendError> {
        let mut url = Url::parse(base_url.trim())
            .map_err(|err| BackendError::new(FailureKind::InvalidUrl, err.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(BackendError::new(
                FailureKind::InvalidUrl,
                format!("unsupported base url {base_url}"),
            ));
        }
        // Joining relative paths replaces the last segment unless the path ends in '/'.
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(Self {
            base_url: url,
            connect_timeout: None,
            request_timeout: None,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn endpoint(&self, endpoint: Endpoint) -> Result<Url, BackendError> {
        self.base_url
            .join(endpoint.path())
            .map_err(|err| BackendError::new(FailureKind::InvalidUrl, err.to_string()))
    }
}
