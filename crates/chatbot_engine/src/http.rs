use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use chatbot_logging::{chatbot_debug, chatbot_info};

use crate::settings::Endpoint;
use crate::{
    AskRequest, AskResponse, Backend, BackendError, BackendSettings, CrawlRequest, CrawlResponse,
    FailureKind,
};

const PDF_MIME: &str = "application/pdf";

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// `Backend` over HTTP with a shared reqwest client.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    settings: BackendSettings,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(settings: BackendSettings) -> Result<Self, BackendError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| BackendError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    async fn send(
        &self,
        endpoint: Endpoint,
        build: impl FnOnce(reqwest::RequestBuilder) -> reqwest::RequestBuilder,
    ) -> Result<Vec<u8>, BackendError> {
        let url = self.settings.endpoint(endpoint)?;
        chatbot_info!("POST {}", url);
        let response = build(self.client.post(url))
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_reqwest_error)?;
        if !status.is_success() {
            return Err(BackendError::new(
                FailureKind::HttpStatus(status.as_u16()),
                error_message(status, &body),
            ));
        }
        chatbot_debug!("{} answered {} ({} bytes)", endpoint.path(), status, body.len());
        Ok(body.to_vec())
    }
}

#[async_trait::async_trait]
impl Backend for HttpBackend {
    async fn ask(&self, request: &AskRequest) -> Result<AskResponse, BackendError> {
        let body = self.send(Endpoint::Ask, |req| req.json(request)).await?;
        decode(&body)
    }

    async fn upload_pdf(&self, file_name: &str, bytes: Vec<u8>) -> Result<(), BackendError> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(PDF_MIME)
            .map_err(|err| BackendError::new(FailureKind::Network, err.to_string()))?;
        let form = Form::new().part("file", part);
        self.send(Endpoint::UploadPdf, |req| req.multipart(form))
            .await?;
        Ok(())
    }

    async fn start_crawl(&self, request: &CrawlRequest) -> Result<CrawlResponse, BackendError> {
        let body = self
            .send(Endpoint::StartCrawl, |req| req.json(request))
            .await?;
        decode(&body)
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, BackendError> {
    serde_json::from_slice(body)
        .map_err(|err| BackendError::new(FailureKind::MalformedResponse, err.to_string()))
}

/// Prefer the backend's `{"error": ...}` message over the bare status line.
fn error_message(status: reqwest::StatusCode, body: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .map(|parsed| parsed.error)
        .unwrap_or_else(|_| status.to_string())
}

fn map_reqwest_error(err: reqwest::Error) -> BackendError {
    if err.is_timeout() {
        return BackendError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return BackendError::new(FailureKind::MalformedResponse, err.to_string());
    }
    BackendError::new(FailureKind::Network, err.to_string())
}
