use std::sync::mpsc;

use eframe::egui;
use log::LevelFilter;
use sentiment_core::{update, AppState, Msg};
use sentiment_engine::{AnalyzerSettings, ExportSettings};
use sentiment_logging::{sentiment_info, LogDestination};

use super::effects::{self, EffectRunner};
use super::ui::{self, render::UiAction};

pub fn run_app() -> anyhow::Result<()> {
    sentiment_logging::initialize(LogDestination::default(), LevelFilter::Info);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let (runner, events) = EffectRunner::new(
        AnalyzerSettings::default(),
        ExportSettings::default(),
        msg_tx.clone(),
    )?;

    sentiment_info!("Starting {}", ui::constants::APP_NAME);
    eframe::run_native(
        ui::constants::APP_NAME,
        ui::layout::native_options(),
        Box::new(move |cc| {
            effects::spawn_event_loop(events, msg_tx, cc.egui_ctx.clone());
            Box::new(SentimentApp::new(runner, msg_rx))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}

struct SentimentApp {
    state: AppState,
    runner: EffectRunner,
    msg_rx: mpsc::Receiver<Msg>,
    /// Backing buffer for the text area; mirrors `AppState::input_text`.
    input: String,
    started: bool,
}

impl SentimentApp {
    fn new(runner: EffectRunner, msg_rx: mpsc::Receiver<Msg>) -> Self {
        Self {
            state: AppState::new(),
            runner,
            msg_rx,
            input: String::new(),
            started: false,
        }
    }

    fn process_pending_messages(&mut self, ctx: &egui::Context) {
        let inbox: Vec<Msg> = self.msg_rx.try_iter().collect();
        for msg in inbox {
            self.dispatch_msg(ctx, msg);
        }
    }

    fn dispatch_msg(&mut self, ctx: &egui::Context, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;

        self.runner.enqueue(effects);
        if was_dirty {
            ctx.request_repaint();
        }
    }

    fn handle_action(&mut self, ctx: &egui::Context, action: UiAction) {
        match action {
            UiAction::Send(msg) => self.dispatch_msg(ctx, msg),
            UiAction::PickFile => {
                let picked = rfd::FileDialog::new()
                    .add_filter("Legal documents", &["txt", "csv"])
                    .set_title("Analyze File")
                    .pick_file();
                if let Some(path) = picked {
                    self.dispatch_msg(ctx, Msg::FileChosen(path));
                }
            }
        }
    }
}

impl eframe::App for SentimentApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.started {
            self.started = true;
            self.dispatch_msg(ctx, Msg::Started);
        }
        self.process_pending_messages(ctx);

        let view = self.state.view();
        let actions = ui::layout::show(ctx, &view, &mut self.input);
        for action in actions {
            self.handle_action(ctx, action);
        }
    }
}
