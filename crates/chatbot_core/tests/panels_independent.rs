use std::path::PathBuf;

use chatbot_core::{update, AnswerPayload, AppState, Effect, Msg};

#[test]
fn all_three_panels_can_be_in_flight_together() {
    let state = AppState::new();
    let (state, ask) = update(state, Msg::AskClicked);
    let (state, upload) = update(
        state,
        Msg::PdfChosen {
            path: PathBuf::from("a.pdf"),
            file_name: "a.pdf".to_string(),
        },
    );
    let (state, crawl) = update(state, Msg::CrawlClicked);

    assert!(matches!(ask.as_slice(), [Effect::Ask { .. }]));
    assert!(matches!(upload.as_slice(), [Effect::UploadPdf { .. }]));
    assert!(matches!(crawl.as_slice(), [Effect::StartCrawl { .. }]));

    let view = state.view();
    assert!(!view.ask_enabled);
    assert!(!view.upload_enabled);
    assert!(!view.crawl_enabled);

    // Settling one panel leaves the others busy.
    let (state, _) = update(
        state,
        Msg::AskSettled(Ok(AnswerPayload {
            answer: Some("ok".to_string()),
            ..AnswerPayload::default()
        })),
    );
    let view = state.view();
    assert!(view.ask_enabled);
    assert!(!view.upload_enabled);
    assert!(!view.crawl_enabled);
}

#[test]
fn notices_queue_in_arrival_order() {
    let (state, _) = update(AppState::new(), Msg::CrawlClicked);
    let (state, _) = update(
        state,
        Msg::PdfChosen {
            path: PathBuf::from("a.pdf"),
            file_name: "a.pdf".to_string(),
        },
    );
    let (state, _) = update(state, Msg::CrawlSettled(Ok(3)));
    let (state, _) = update(
        state,
        Msg::UploadSettled {
            file_name: "a.pdf".to_string(),
            result: Ok(()),
        },
    );

    let view = state.view();
    assert_eq!(view.notice.expect("first").text, "✅ Found 3 documents");
    assert_eq!(view.queued_notices, 1);

    let (state, _) = update(state, Msg::NoticeDismissed);
    let view = state.view();
    assert_eq!(
        view.notice.expect("second").text,
        "✅ PDF uploaded and processed"
    );
    assert_eq!(view.queued_notices, 0);

    let (state, _) = update(state, Msg::NoticeDismissed);
    assert!(state.view().notice.is_none());
}

#[test]
fn in_flight_flag_follows_panels() {
    let state = AppState::new();
    assert!(!state.view().has_requests_in_flight());

    let (state, _) = update(state, Msg::CrawlClicked);
    assert!(state.view().has_requests_in_flight());

    let (state, _) = update(state, Msg::CrawlSettled(Ok(0)));
    assert!(!state.view().has_requests_in_flight());
}
