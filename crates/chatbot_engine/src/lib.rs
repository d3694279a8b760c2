//! Chatbot engine: backend capability, HTTP transport and effect execution.
mod backend;
mod engine;
mod http;
mod settings;
mod types;

pub use backend::Backend;
pub use engine::{EngineConfig, EngineError, EngineEvent, EngineHandle};
pub use http::HttpBackend;
pub use settings::{BackendSettings, Endpoint, DEFAULT_BASE_URL};
pub use types::{
    AnswerSource, AskRequest, AskResponse, BackendError, CrawlRequest, CrawlResponse, FailureKind,
};
