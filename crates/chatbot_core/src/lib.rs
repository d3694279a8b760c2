//! Chatbot core: pure panel state machine and view-model helpers.
mod display;
mod effect;
mod msg;
mod state;
mod text;
mod update;
mod view_model;

pub use display::select_display_text;
pub use effect::Effect;
pub use msg::{Msg, RequestFailed};
pub use state::{
    clamp_depth, AnswerPayload, AnswerSource, AppState, Notice, NoticeKind, DEFAULT_CRAWL_DEPTH,
    MAX_CRAWL_DEPTH, MIN_CRAWL_DEPTH,
};
pub use text::{
    crawl_completed_status, crawl_found_notice, ANSWER_ERROR, AWAITING_RESPONSE, CRAWL_BUTTON_IDLE,
    CRAWL_BUTTON_RUNNING, CRAWL_FAILED, CRAWL_FAILED_STATUS, CRAWL_STARTING, NO_ANSWER,
    UPLOAD_FAILED, UPLOAD_SUCCEEDED,
};
pub use update::update;
pub use view_model::AppViewModel;
