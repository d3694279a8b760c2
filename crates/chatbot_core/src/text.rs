//! User-facing strings shared by the state machine and the renderer.

pub const NO_ANSWER: &str = "No answer found.";
pub const ANSWER_ERROR: &str = "Error getting answer.";
pub const AWAITING_RESPONSE: &str = "Awaiting response...";

pub const UPLOAD_SUCCEEDED: &str = "✅ PDF uploaded and processed";
pub const UPLOAD_FAILED: &str = "❌ Error uploading PDF";

pub const CRAWL_FAILED: &str = "❌ Crawling failed";
pub const CRAWL_STARTING: &str = "Starting crawl...";
pub const CRAWL_FAILED_STATUS: &str = "Crawling failed";
pub const CRAWL_BUTTON_IDLE: &str = "Start Crawl";
pub const CRAWL_BUTTON_RUNNING: &str = "Crawling...";

pub fn crawl_found_notice(docs: u64) -> String {
    format!("✅ Found {docs} documents")
}

pub fn crawl_completed_status(docs: u64) -> String {
    format!("Completed: {docs} docs")
}
