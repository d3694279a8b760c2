use crate::{AnswerSource, Notice};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub question_text: String,
    /// The answer, or "Awaiting response..." before the first one arrives.
    pub answer_display: String,
    pub answer_next_steps: Option<String>,
    pub answer_sources: Vec<AnswerSource>,
    pub ask_enabled: bool,
    pub selected_file_name: Option<String>,
    /// "Uploaded: <name>" once an upload succeeded.
    pub uploaded_label: Option<String>,
    pub upload_enabled: bool,
    pub crawl_domain: String,
    pub crawl_depth: u8,
    pub crawl_enabled: bool,
    pub crawl_button_label: &'static str,
    pub crawl_status: Option<String>,
    /// Front of the notice queue.
    pub notice: Option<Notice>,
    /// Notices waiting behind the one shown.
    pub queued_notices: usize,
}

impl AppViewModel {
    /// True while any panel waits on the backend.
    pub fn has_requests_in_flight(&self) -> bool {
        !(self.ask_enabled && self.upload_enabled && self.crawl_enabled)
    }
}
