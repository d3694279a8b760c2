use std::path::Path;
use std::time::Duration;

use anyhow::Context as _;
use chatbot_core::{update, AppState, AppViewModel, Msg};
use chatbot_engine::EngineHandle;
use chatbot_logging::{chatbot_error, chatbot_info, chatbot_warn};

use super::config::{self, ClientConfig};
use super::effects::EffectRunner;
use super::ui;

/// How often the window polls the engine while a request is outstanding.
const POLL_INTERVAL: Duration = Duration::from_millis(75);

pub fn run_app() -> anyhow::Result<()> {
    let (config, config_problem) = match config::load(Path::new(config::CONFIG_FILENAME)) {
        Ok(config) => (config, None),
        Err(err) => (ClientConfig::default(), Some(err)),
    };

    if let Some(active) = chatbot_logging::initialize(
        config.log_destination,
        config.log_level(),
        Some(&config.log_file),
    ) {
        if active != config.log_destination {
            chatbot_warn!(
                "could not open log file {:?}; logging to {:?} instead of {:?}",
                config.log_file,
                active,
                config.log_destination
            );
        }
    }
    if let Some(err) = config_problem {
        chatbot_warn!("{}; using default configuration", err);
    }

    let engine_config = config
        .engine_config()
        .with_context(|| format!("invalid base_url {:?}", config.base_url))?;
    let engine = EngineHandle::new(engine_config).context("failed to start engine")?;
    let runner = EffectRunner::new(engine);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(ui::constants::APP_TITLE)
            .with_inner_size(ui::constants::WINDOW_SIZE)
            .with_min_inner_size(ui::constants::WINDOW_MIN_SIZE),
        ..Default::default()
    };

    chatbot_info!("Launching window");
    eframe::run_native(
        ui::constants::APP_TITLE,
        native_options,
        Box::new(move |_cc| Ok(Box::new(ChatbotApp::new(runner)))),
    )
    .map_err(|err| {
        chatbot_error!("Failed to launch window: {}", err);
        anyhow::anyhow!("failed to launch window: {err}")
    })
}

struct ChatbotApp {
    state: AppState,
    view: AppViewModel,
    drafts: ui::render::Drafts,
    runner: EffectRunner,
}

impl ChatbotApp {
    fn new(runner: EffectRunner) -> Self {
        let state = AppState::new();
        let view = state.view();
        let drafts = ui::render::Drafts::from_view(&view);
        Self {
            state,
            view,
            drafts,
            runner,
        }
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.view = state.view();
        }
        self.state = state;
        self.runner.run(effects);
    }
}

impl eframe::App for ChatbotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for msg in self.runner.poll() {
            self.dispatch_msg(msg);
        }

        let view = self.view.clone();
        for msg in ui::render::render(ctx, &view, &mut self.drafts) {
            self.dispatch_msg(msg);
        }

        // Responses arrive off the UI thread; keep polling until they do.
        if self.view.has_requests_in_flight() {
            ctx.request_repaint_after(POLL_INTERVAL);
        } else if self.view != view {
            ctx.request_repaint();
        }
    }
}
