use std::sync::Once;

use chatbot_core::{update, AppState, Effect, Msg, NoticeKind, RequestFailed, DEFAULT_CRAWL_DEPTH};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(chatbot_logging::initialize_for_tests);
}

fn start_crawl(state: AppState, domain: &str, depth: u32) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::CrawlDomainEdited(domain.to_string()));
    let (state, _) = update(state, Msg::CrawlDepthEdited(depth));
    update(state, Msg::CrawlClicked)
}

#[test]
fn depth_defaults_to_two() {
    init_logging();
    let view = AppState::new().view();
    assert_eq!(view.crawl_depth, DEFAULT_CRAWL_DEPTH);
    assert_eq!(view.crawl_depth, 2);
    assert!(view.crawl_enabled);
    assert_eq!(view.crawl_button_label, "Start Crawl");
}

#[test]
fn trigger_disables_until_success() {
    init_logging();
    let (state, effects) = start_crawl(AppState::new(), "example.com", 2);

    assert_eq!(
        effects,
        vec![Effect::StartCrawl {
            domain: "example.com".to_string(),
            depth: 2,
        }]
    );
    let view = state.view();
    assert!(!view.crawl_enabled);
    assert_eq!(view.crawl_button_label, "Crawling...");
    assert_eq!(view.crawl_status.as_deref(), Some("Starting crawl..."));

    let (state, _) = update(state, Msg::CrawlSettled(Ok(7)));
    let view = state.view();
    assert!(view.crawl_enabled);
    assert_eq!(view.crawl_button_label, "Start Crawl");
    assert_eq!(view.crawl_status.as_deref(), Some("Completed: 7 docs"));
    let notice = view.notice.expect("notice");
    assert_eq!(notice.kind, NoticeKind::Success);
    assert!(notice.text.contains('7'));
}

#[test]
fn trigger_reenabled_after_failure() {
    init_logging();
    let (state, _) = start_crawl(AppState::new(), "example.com", 3);
    let (state, _) = update(state, Msg::CrawlSettled(Err(RequestFailed)));

    let view = state.view();
    assert!(view.crawl_enabled);
    assert_eq!(view.notice.expect("notice").text, "❌ Crawling failed");
}

#[test]
fn second_trigger_while_running_is_ignored() {
    init_logging();
    let (state, _) = start_crawl(AppState::new(), "example.com", 2);
    let (state, effects) = update(state, Msg::CrawlClicked);

    assert!(effects.is_empty());
    assert!(!state.view().crawl_enabled);
}

#[test]
fn out_of_range_depth_is_clamped() {
    init_logging();
    let (_state, effects) = start_crawl(AppState::new(), "example.com", 12);
    assert_eq!(
        effects,
        vec![Effect::StartCrawl {
            domain: "example.com".to_string(),
            depth: 5,
        }]
    );

    let (state, _) = update(AppState::new(), Msg::CrawlDepthEdited(0));
    assert_eq!(state.view().crawl_depth, 1);
}

#[test]
fn domain_is_not_validated() {
    init_logging();
    let (_state, effects) = start_crawl(AppState::new(), "not a hostname", 1);
    assert_eq!(
        effects,
        vec![Effect::StartCrawl {
            domain: "not a hostname".to_string(),
            depth: 1,
        }]
    );
}
