use std::path::PathBuf;

/// Side effects requested by `update`; the platform layer executes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Ask { question: String },
    UploadPdf { path: PathBuf, file_name: String },
    StartCrawl { domain: String, depth: u8 },
}
