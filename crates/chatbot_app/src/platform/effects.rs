use chatbot_core::{AnswerPayload, AnswerSource, Effect, Msg, RequestFailed};
use chatbot_engine::{AskResponse, BackendError, EngineEvent, EngineHandle};
use chatbot_logging::{chatbot_info, chatbot_warn};

/// Executes core effects on the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Ask { question } => {
                    chatbot_info!("Ask question_len={}", question.len());
                    self.engine.ask(question);
                }
                Effect::UploadPdf { path, file_name } => {
                    chatbot_info!("UploadPdf file_name={} path={:?}", file_name, path);
                    self.engine.upload_pdf(path, file_name);
                }
                Effect::StartCrawl { domain, depth } => {
                    chatbot_info!("StartCrawl domain={} depth={}", domain, depth);
                    self.engine.start_crawl(domain, depth);
                }
            }
        }
    }

    /// Drains every completed request without blocking.
    pub fn poll(&self) -> Vec<Msg> {
        let mut msgs = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            msgs.push(map_event(event));
        }
        msgs
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::AskCompleted(result) => Msg::AskSettled(
            result
                .map(map_answer)
                .map_err(|err| request_failed("Ask", &err)),
        ),
        EngineEvent::UploadCompleted { file_name, result } => {
            let result = result.map_err(|err| request_failed("Upload", &err));
            if result.is_ok() {
                chatbot_info!("Upload of {} accepted", file_name);
            }
            Msg::UploadSettled { file_name, result }
        }
        EngineEvent::CrawlCompleted(result) => Msg::CrawlSettled(
            result
                .map(|response| {
                    chatbot_info!(
                        "Crawl finished status={:?} docs_updated={}",
                        response.status,
                        response.docs_updated
                    );
                    response.docs_updated
                })
                .map_err(|err| request_failed("Crawl", &err)),
        ),
    }
}

fn map_answer(response: AskResponse) -> AnswerPayload {
    AnswerPayload {
        improved_answer: response.improved_answer,
        answer: response.answer,
        next_steps: response.next_steps,
        sources: response
            .sources
            .into_iter()
            .map(|source| AnswerSource {
                title: source.title,
                url: source.url,
            })
            .collect(),
    }
}

fn request_failed(operation: &str, err: &BackendError) -> RequestFailed {
    chatbot_warn!("{} failed ({}): {}", operation, err.kind, err.message);
    RequestFailed
}
