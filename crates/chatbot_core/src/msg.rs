use std::path::PathBuf;

/// A request settled without a usable response. The cause is not carried;
/// each panel maps it to one fixed failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestFailed;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the question box.
    QuestionEdited(String),
    /// User clicked Ask.
    AskClicked,
    /// Backend answered (or failed to answer) the outstanding question.
    AskSettled(Result<crate::AnswerPayload, RequestFailed>),
    /// User picked a PDF in the file dialog; this starts the upload.
    PdfChosen { path: PathBuf, file_name: String },
    /// Upload request settled.
    UploadSettled {
        file_name: String,
        result: Result<(), RequestFailed>,
    },
    /// User edited the crawl domain box.
    CrawlDomainEdited(String),
    /// User changed the crawl depth.
    CrawlDepthEdited(u32),
    /// User clicked Start Crawl.
    CrawlClicked,
    /// Crawl request settled with the number of documents updated.
    CrawlSettled(Result<u64, RequestFailed>),
    /// User acknowledged the front notice.
    NoticeDismissed,
}
