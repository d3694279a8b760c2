use chatbot_core::{AppViewModel, Msg, NoticeKind, MAX_CRAWL_DEPTH, MIN_CRAWL_DEPTH};
use egui::{Button, RichText, TextEdit};

use super::constants::*;

/// Text the user is typing. egui edits these in place; changes are reported
/// back to the state machine as messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drafts {
    pub question: String,
    pub domain: String,
    pub depth: u32,
}

impl Drafts {
    pub fn from_view(view: &AppViewModel) -> Self {
        Self {
            question: view.question_text.clone(),
            domain: view.crawl_domain.clone(),
            depth: u32::from(view.crawl_depth),
        }
    }
}

pub fn render(ctx: &egui::Context, view: &AppViewModel, drafts: &mut Drafts) -> Vec<Msg> {
    let mut msgs = Vec::new();

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading(APP_TITLE);
        ui.add_space(SECTION_SPACING / 2.0);
        egui::ScrollArea::vertical().show(ui, |ui| {
            ask_section(ui, view, drafts, &mut msgs);
            ui.add_space(SECTION_SPACING);
            upload_section(ui, view, &mut msgs);
            ui.add_space(SECTION_SPACING);
            crawl_section(ui, view, drafts, &mut msgs);
        });
    });

    notice_window(ctx, view, &mut msgs);
    msgs
}

fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(text).strong().size(SECTION_HEADING_SIZE));
}

fn ask_section(ui: &mut egui::Ui, view: &AppViewModel, drafts: &mut Drafts, msgs: &mut Vec<Msg>) {
    section_heading(ui, ASK_HEADING);
    ui.horizontal(|ui| {
        let input = ui.add(
            TextEdit::singleline(&mut drafts.question)
                .hint_text(QUESTION_HINT)
                .desired_width(INPUT_WIDTH),
        );
        if input.changed() {
            msgs.push(Msg::QuestionEdited(drafts.question.clone()));
        }
        let submitted = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let clicked = ui
            .add_enabled(view.ask_enabled, Button::new(ASK_BUTTON))
            .clicked();
        if clicked || (submitted && view.ask_enabled) {
            msgs.push(Msg::AskClicked);
        }
        if !view.ask_enabled {
            ui.spinner();
        }
    });

    ui.add_space(8.0);
    ui.horizontal_wrapped(|ui| {
        ui.label(RichText::new("Answer:").strong());
        ui.label(&view.answer_display);
    });

    if let Some(steps) = &view.answer_next_steps {
        ui.label(RichText::new(format!("Next steps: {steps}")).italics());
    }

    if !view.answer_sources.is_empty() {
        ui.collapsing(format!("Sources ({})", view.answer_sources.len()), |ui| {
            for source in &view.answer_sources {
                match (&source.title, &source.url) {
                    (title, Some(url)) => {
                        ui.hyperlink_to(title.as_deref().unwrap_or(url), url);
                    }
                    (Some(title), None) => {
                        ui.label(title);
                    }
                    (None, None) => {}
                }
            }
        });
    }
}

fn upload_section(ui: &mut egui::Ui, view: &AppViewModel, msgs: &mut Vec<Msg>) {
    section_heading(ui, UPLOAD_HEADING);
    ui.horizontal(|ui| {
        if ui
            .add_enabled(view.upload_enabled, Button::new(CHOOSE_PDF_BUTTON))
            .clicked()
        {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("PDF", &["pdf"])
                .pick_file()
            {
                let file_name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                msgs.push(Msg::PdfChosen { path, file_name });
            }
        }
        ui.label(view.selected_file_name.as_deref().unwrap_or(NO_FILE_CHOSEN));
        if !view.upload_enabled {
            ui.spinner();
        }
    });
    if let Some(label) = &view.uploaded_label {
        ui.label(label);
    }
}

fn crawl_section(ui: &mut egui::Ui, view: &AppViewModel, drafts: &mut Drafts, msgs: &mut Vec<Msg>) {
    section_heading(ui, CRAWL_HEADING);
    ui.horizontal(|ui| {
        let domain = ui.add(
            TextEdit::singleline(&mut drafts.domain)
                .hint_text(DOMAIN_HINT)
                .desired_width(INPUT_WIDTH),
        );
        if domain.changed() {
            msgs.push(Msg::CrawlDomainEdited(drafts.domain.clone()));
        }

        ui.label("Depth");
        let depth = ui.add(
            egui::DragValue::new(&mut drafts.depth)
                .range(u32::from(MIN_CRAWL_DEPTH)..=u32::from(MAX_CRAWL_DEPTH))
                .speed(0.1),
        );
        if depth.changed() {
            msgs.push(Msg::CrawlDepthEdited(drafts.depth));
        }

        if ui
            .add_enabled(view.crawl_enabled, Button::new(view.crawl_button_label))
            .clicked()
        {
            msgs.push(Msg::CrawlClicked);
        }
    });
    if let Some(status) = &view.crawl_status {
        ui.label(status);
    }
}

/// Modal acknowledgement for the front notice; later notices wait their turn.
fn notice_window(ctx: &egui::Context, view: &AppViewModel, msgs: &mut Vec<Msg>) {
    let Some(notice) = &view.notice else {
        return;
    };

    egui::Window::new(NOTICE_TITLE)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            let color = match notice.kind {
                NoticeKind::Success => ui.visuals().text_color(),
                NoticeKind::Failure => ui.visuals().error_fg_color,
            };
            ui.label(RichText::new(&notice.text).color(color));
            if view.queued_notices > 0 {
                ui.small(format!("{} more waiting", view.queued_notices));
            }
            ui.add_space(6.0);
            if ui.button("OK").clicked() {
                msgs.push(Msg::NoticeDismissed);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::{render, Drafts};
    use chatbot_core::{update, AppState, Msg};

    fn run_frame(view: &chatbot_core::AppViewModel, drafts: &mut Drafts) -> Vec<Msg> {
        let ctx = egui::Context::default();
        let mut msgs = Vec::new();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            msgs = render(ctx, view, drafts);
        });
        msgs
    }

    #[test]
    fn idle_frame_emits_no_messages() {
        let view = AppState::new().view();
        let mut drafts = Drafts::from_view(&view);
        assert!(run_frame(&view, &mut drafts).is_empty());
        assert_eq!(drafts, Drafts::from_view(&view));
    }

    #[test]
    fn frame_with_notice_renders_without_input() {
        let (state, _) = update(AppState::new(), Msg::CrawlClicked);
        let (state, _) = update(state, Msg::CrawlSettled(Ok(7)));
        let view = state.view();
        let mut drafts = Drafts::from_view(&view);
        assert!(run_frame(&view, &mut drafts).is_empty());
    }

    #[test]
    fn drafts_start_from_view() {
        let (state, _) = update(AppState::new(), Msg::CrawlDomainEdited("example.com".into()));
        let drafts = Drafts::from_view(&state.view());
        assert_eq!(drafts.domain, "example.com");
        assert_eq!(drafts.depth, 2);
        assert!(drafts.question.is_empty());
    }
}
