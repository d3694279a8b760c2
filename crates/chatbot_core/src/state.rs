use std::collections::VecDeque;

use crate::display::select_display_text;
use crate::text;
use crate::view_model::AppViewModel;

pub const MIN_CRAWL_DEPTH: u8 = 1;
pub const MAX_CRAWL_DEPTH: u8 = 5;
pub const DEFAULT_CRAWL_DEPTH: u8 = 2;

/// Clamp a requested depth into `MIN_CRAWL_DEPTH..=MAX_CRAWL_DEPTH`.
pub fn clamp_depth(depth: u32) -> u8 {
    depth.clamp(u32::from(MIN_CRAWL_DEPTH), u32::from(MAX_CRAWL_DEPTH)) as u8
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnswerSource {
    pub title: Option<String>,
    pub url: Option<String>,
}

/// The fields of an ask response the client renders.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnswerPayload {
    pub improved_answer: Option<String>,
    pub answer: Option<String>,
    pub next_steps: Option<String>,
    pub sources: Vec<AnswerSource>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// A modal message the user has to acknowledge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    fn failure(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Failure,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct QuestionState {
    question_text: String,
    answer_text: String,
    next_steps: Option<String>,
    sources: Vec<AnswerSource>,
    awaiting: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct UploadState {
    selected_file_name: Option<String>,
    uploaded_file_name: Option<String>,
    in_flight: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CrawlState {
    domain: String,
    depth: u8,
    is_running: bool,
    status: Option<String>,
}

impl Default for CrawlState {
    fn default() -> Self {
        Self {
            domain: String::new(),
            depth: DEFAULT_CRAWL_DEPTH,
            is_running: false,
            status: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    ask: QuestionState,
    upload: UploadState,
    crawl: CrawlState,
    notices: VecDeque<Notice>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let answer_display = if self.ask.answer_text.is_empty() {
            text::AWAITING_RESPONSE.to_string()
        } else {
            self.ask.answer_text.clone()
        };

        AppViewModel {
            question_text: self.ask.question_text.clone(),
            answer_display,
            answer_next_steps: self.ask.next_steps.clone(),
            answer_sources: self.ask.sources.clone(),
            ask_enabled: !self.ask.awaiting,
            selected_file_name: self.upload.selected_file_name.clone(),
            uploaded_label: self
                .upload
                .uploaded_file_name
                .as_ref()
                .map(|name| format!("Uploaded: {name}")),
            upload_enabled: !self.upload.in_flight,
            crawl_domain: self.crawl.domain.clone(),
            crawl_depth: self.crawl.depth,
            crawl_enabled: !self.crawl.is_running,
            crawl_button_label: if self.crawl.is_running {
                text::CRAWL_BUTTON_RUNNING
            } else {
                text::CRAWL_BUTTON_IDLE
            },
            crawl_status: self.crawl.status.clone(),
            notice: self.notices.front().cloned(),
            queued_notices: self.notices.len().saturating_sub(1),
        }
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_question(&mut self, question: String) {
        if self.ask.question_text != question {
            self.ask.question_text = question;
            self.mark_dirty();
        }
    }

    /// Marks the ask panel busy and returns the question to send, or `None`
    /// when a question is already outstanding.
    pub(crate) fn begin_ask(&mut self) -> Option<String> {
        if self.ask.awaiting {
            return None;
        }
        self.ask.awaiting = true;
        self.mark_dirty();
        Some(self.ask.question_text.clone())
    }

    pub(crate) fn settle_ask(&mut self, result: Result<AnswerPayload, crate::RequestFailed>) {
        self.ask.awaiting = false;
        match result {
            Ok(payload) => {
                self.ask.answer_text = select_display_text(&payload);
                self.ask.next_steps = payload.next_steps.filter(|steps| !steps.is_empty());
                self.ask.sources = payload.sources;
            }
            Err(crate::RequestFailed) => {
                self.ask.answer_text = text::ANSWER_ERROR.to_string();
                self.ask.next_steps = None;
                self.ask.sources.clear();
            }
        }
        self.mark_dirty();
    }

    /// Records the chosen file and reports whether an upload may start.
    pub(crate) fn begin_upload(&mut self, file_name: &str) -> bool {
        if self.upload.in_flight {
            return false;
        }
        self.upload.in_flight = true;
        self.upload.selected_file_name = Some(file_name.to_string());
        self.mark_dirty();
        true
    }

    pub(crate) fn settle_upload(&mut self, file_name: String, result: Result<(), crate::RequestFailed>) {
        self.upload.in_flight = false;
        match result {
            Ok(()) => {
                self.upload.selected_file_name = Some(file_name.clone());
                self.upload.uploaded_file_name = Some(file_name);
                self.notices.push_back(Notice::success(text::UPLOAD_SUCCEEDED));
            }
            Err(crate::RequestFailed) => {
                self.notices.push_back(Notice::failure(text::UPLOAD_FAILED));
            }
        }
        self.mark_dirty();
    }

    pub(crate) fn set_crawl_domain(&mut self, domain: String) {
        if self.crawl.domain != domain {
            self.crawl.domain = domain;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_crawl_depth(&mut self, depth: u32) {
        let depth = clamp_depth(depth);
        if self.crawl.depth != depth {
            self.crawl.depth = depth;
            self.mark_dirty();
        }
    }

    /// Moves the crawl panel Idle -> Crawling. Returns the request parameters,
    /// or `None` when a crawl is already running.
    pub(crate) fn begin_crawl(&mut self) -> Option<(String, u8)> {
        if self.crawl.is_running {
            return None;
        }
        self.crawl.is_running = true;
        self.crawl.status = Some(text::CRAWL_STARTING.to_string());
        self.mark_dirty();
        Some((self.crawl.domain.clone(), self.crawl.depth))
    }

    pub(crate) fn settle_crawl(&mut self, result: Result<u64, crate::RequestFailed>) {
        self.crawl.is_running = false;
        match result {
            Ok(docs) => {
                self.crawl.status = Some(text::crawl_completed_status(docs));
                self.notices.push_back(Notice::success(text::crawl_found_notice(docs)));
            }
            Err(crate::RequestFailed) => {
                self.crawl.status = Some(text::CRAWL_FAILED_STATUS.to_string());
                self.notices.push_back(Notice::failure(text::CRAWL_FAILED));
            }
        }
        self.mark_dirty();
    }

    pub(crate) fn dismiss_notice(&mut self) {
        if self.notices.pop_front().is_some() {
            self.mark_dirty();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::clamp_depth;

    #[test]
    fn depth_is_clamped_into_range() {
        assert_eq!(clamp_depth(0), 1);
        assert_eq!(clamp_depth(3), 3);
        assert_eq!(clamp_depth(99), 5);
    }
}
