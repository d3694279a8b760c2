pub const APP_TITLE: &str = "LLM Scraper Chatbot";
pub const WINDOW_SIZE: [f32; 2] = [760.0, 620.0];
pub const WINDOW_MIN_SIZE: [f32; 2] = [520.0, 420.0];

pub const INPUT_WIDTH: f32 = 300.0;
pub const SECTION_SPACING: f32 = 24.0;
pub const SECTION_HEADING_SIZE: f32 = 18.0;

pub const ASK_HEADING: &str = "Ask a Question";
pub const QUESTION_HINT: &str = "What is AI ethics?";
pub const ASK_BUTTON: &str = "Ask Mistral";

pub const UPLOAD_HEADING: &str = "Upload PDF";
pub const CHOOSE_PDF_BUTTON: &str = "Choose PDF\u{2026}";
pub const NO_FILE_CHOSEN: &str = "No file chosen";

pub const CRAWL_HEADING: &str = "Run Web Scraper";
pub const DOMAIN_HINT: &str = "example.com";

pub const NOTICE_TITLE: &str = "Notice";
