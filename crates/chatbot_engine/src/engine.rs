use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use chatbot_logging::{chatbot_info, chatbot_warn};

use crate::{
    AskRequest, AskResponse, Backend, BackendError, BackendSettings, CrawlRequest, CrawlResponse,
    FailureKind, HttpBackend,
};

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub backend: BackendSettings,
    /// Sent with every question so the backend can personalise answers.
    pub user_id: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to build backend client: {0}")]
    Backend(#[from] BackendError),
}

enum EngineCommand {
    Ask { question: String },
    UploadPdf { path: PathBuf, file_name: String },
    StartCrawl { domain: String, depth: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    AskCompleted(Result<AskResponse, BackendError>),
    UploadCompleted {
        file_name: String,
        result: Result<(), BackendError>,
    },
    CrawlCompleted(Result<CrawlResponse, BackendError>),
}

/// Runs backend calls on a tokio runtime owned by a worker thread.
///
/// Every command becomes its own task, so slow crawls never hold up questions
/// or uploads. Completions arrive in settlement order.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        chatbot_info!("Backend base url {}", config.backend.base_url());
        let backend = HttpBackend::new(config.backend)?;
        Self::with_backend(Arc::new(backend), config.user_id)
    }

    pub fn with_backend(
        backend: Arc<dyn Backend>,
        user_id: Option<String>,
    ) -> Result<Self, EngineError> {
        let runtime = tokio::runtime::Runtime::new()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let user_id: Option<Arc<str>> = user_id.map(Arc::from);

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let backend = backend.clone();
                let event_tx = event_tx.clone();
                let user_id = user_id.clone();
                runtime.spawn(async move {
                    let event = handle_command(backend.as_ref(), command, user_id).await;
                    let _ = event_tx.send(event);
                });
            }
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn ask(&self, question: impl Into<String>) {
        self.submit(EngineCommand::Ask {
            question: question.into(),
        });
    }

    pub fn upload_pdf(&self, path: impl Into<PathBuf>, file_name: impl Into<String>) {
        self.submit(EngineCommand::UploadPdf {
            path: path.into(),
            file_name: file_name.into(),
        });
    }

    pub fn start_crawl(&self, domain: impl Into<String>, depth: u8) {
        self.submit(EngineCommand::StartCrawl {
            domain: domain.into(),
            depth,
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }

    fn submit(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            chatbot_warn!("Engine worker has stopped; command dropped");
        }
    }
}

async fn handle_command(
    backend: &dyn Backend,
    command: EngineCommand,
    user_id: Option<Arc<str>>,
) -> EngineEvent {
    match command {
        EngineCommand::Ask { question } => {
            let request = AskRequest {
                question,
                user_id: user_id.map(|id| id.to_string()),
            };
            EngineEvent::AskCompleted(backend.ask(&request).await)
        }
        EngineCommand::UploadPdf { path, file_name } => {
            let result = match tokio::fs::read(&path).await {
                Ok(bytes) => backend.upload_pdf(&file_name, bytes).await,
                Err(err) => Err(BackendError::new(
                    FailureKind::Io,
                    format!("{}: {err}", path.display()),
                )),
            };
            EngineEvent::UploadCompleted { file_name, result }
        }
        EngineCommand::StartCrawl { domain, depth } => {
            let request = CrawlRequest { domain, depth };
            EngineEvent::CrawlCompleted(backend.start_crawl(&request).await)
        }
    }
}
