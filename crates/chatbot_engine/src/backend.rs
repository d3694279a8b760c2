use crate::{AskRequest, AskResponse, BackendError, CrawlRequest, CrawlResponse};

/// The three calls the client makes against the chatbot backend.
///
/// `HttpBackend` is the production implementation; tests substitute fakes.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    /// Ask a question against the retrieval-augmented answering service.
    async fn ask(&self, request: &AskRequest) -> Result<AskResponse, BackendError>;

    /// Send a PDF for ingestion. Any 2xx is success; the body is ignored.
    async fn upload_pdf(&self, file_name: &str, bytes: Vec<u8>) -> Result<(), BackendError>;

    /// Run a crawl job and report how many documents it updated.
    async fn start_crawl(&self, request: &CrawlRequest) -> Result<CrawlResponse, BackendError>;
}
