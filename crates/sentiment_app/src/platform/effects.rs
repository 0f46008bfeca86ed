use std::sync::mpsc;
use std::thread;

use eframe::egui;
use sentiment_core::{AnalysisOutcome, AnalysisResult, BackendStatus, Effect, Msg, ResultRow};
use sentiment_engine::{
    export_results_csv, AnalysisResponse, AnalyzerSettings, EngineError, EngineEvent,
    EngineEvents, EngineHandle, ExportSettings, SentenceSentiment,
};
use sentiment_logging::{sentiment_info, sentiment_warn};

pub struct EffectRunner {
    engine: EngineHandle,
    export: ExportSettings,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(
        settings: AnalyzerSettings,
        export: ExportSettings,
        msg_tx: mpsc::Sender<Msg>,
    ) -> Result<(Self, EngineEvents), EngineError> {
        let (engine, events) = EngineHandle::new(settings)?;
        Ok((
            Self {
                engine,
                export,
                msg_tx,
            },
            events,
        ))
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::AnalyzeText { request_id, text } => {
                    sentiment_info!(
                        "AnalyzeText request_id={} text_len={}",
                        request_id,
                        text.len()
                    );
                    self.engine.analyze_text(request_id, text);
                }
                Effect::AnalyzeFile { request_id, path } => {
                    sentiment_info!("AnalyzeFile request_id={} path={:?}", request_id, path);
                    self.engine.analyze_file(request_id, path);
                }
                Effect::PingBackend => self.engine.ping(),
                Effect::ExportCsv { rows } => {
                    let result = self.export_rows(&rows);
                    let _ = self.msg_tx.send(Msg::ExportFinished(result));
                }
            }
        }
    }

    fn export_rows(&self, rows: &[ResultRow]) -> Result<String, String> {
        let rows: Vec<SentenceSentiment> = rows
            .iter()
            .map(|row| SentenceSentiment {
                text: row.text.clone(),
                sentiment: row.sentiment.clone(),
            })
            .collect();
        export_results_csv(&self.export, &rows)
            .map(|path| path.display().to_string())
            .map_err(|err| {
                sentiment_warn!("Export failed: {}", err);
                err.to_string()
            })
    }
}

/// Forwards engine completions to the UI thread and wakes it up.
pub fn spawn_event_loop(events: EngineEvents, msg_tx: mpsc::Sender<Msg>, ctx: egui::Context) {
    thread::spawn(move || {
        while let Some(event) = events.recv() {
            if msg_tx.send(map_event(event)).is_err() {
                break;
            }
            ctx.request_repaint();
        }
    });
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::AnalysisCompleted { request_id, result } => Msg::AnalysisDone {
            request_id,
            outcome: match result {
                Ok(response) => AnalysisOutcome::Success(map_response(response)),
                Err(err) => {
                    sentiment_warn!("Request {} failed: {}", request_id, err);
                    AnalysisOutcome::Failed
                }
            },
        },
        EngineEvent::PingCompleted { result } => Msg::BackendStatus(match result {
            Ok(()) => BackendStatus::Online,
            Err(err) => {
                sentiment_warn!("Backend ping failed: {}", err);
                BackendStatus::Offline
            }
        }),
    }
}

fn map_response(response: AnalysisResponse) -> AnalysisResult {
    AnalysisResult {
        summary: response.summary,
        results: response.results.map(|rows| {
            rows.into_iter()
                .map(|row| ResultRow {
                    text: row.text,
                    sentiment: row.sentiment,
                })
                .collect()
        }),
    }
}
