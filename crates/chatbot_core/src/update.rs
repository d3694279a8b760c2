use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::QuestionEdited(text) => {
            state.set_question(text);
            Vec::new()
        }
        Msg::AskClicked => match state.begin_ask() {
            // Empty questions are forwarded as-is.
            Some(question) => vec![Effect::Ask { question }],
            None => Vec::new(),
        },
        Msg::AskSettled(result) => {
            state.settle_ask(result);
            Vec::new()
        }
        Msg::PdfChosen { path, file_name } => {
            if state.begin_upload(&file_name) {
                vec![Effect::UploadPdf { path, file_name }]
            } else {
                Vec::new()
            }
        }
        Msg::UploadSettled { file_name, result } => {
            state.settle_upload(file_name, result);
            Vec::new()
        }
        Msg::CrawlDomainEdited(domain) => {
            state.set_crawl_domain(domain);
            Vec::new()
        }
        Msg::CrawlDepthEdited(depth) => {
            state.set_crawl_depth(depth);
            Vec::new()
        }
        Msg::CrawlClicked => match state.begin_crawl() {
            Some((domain, depth)) => vec![Effect::StartCrawl { domain, depth }],
            None => Vec::new(),
        },
        Msg::CrawlSettled(result) => {
            state.settle_crawl(result);
            Vec::new()
        }
        Msg::NoticeDismissed => {
            state.dismiss_notice();
            Vec::new()
        }
    };

    (state, effects)
}
