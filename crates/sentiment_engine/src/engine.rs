use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use sentiment_logging::{sentiment_debug, sentiment_info};

use crate::client::{Analyzer, AnalyzerSettings, ReqwestAnalyzer};
use crate::{AnalyzeError, EngineEvent, RequestId};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to build http client: {0}")]
    Client(#[from] AnalyzeError),
}

enum EngineCommand {
    AnalyzeText { request_id: RequestId, text: String },
    AnalyzeFile { request_id: RequestId, path: PathBuf },
    Ping,
}

/// Sending half of the engine. Every command runs as its own task, so
/// overlapping submissions are all in flight and complete in any order.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

/// Receiving half of the engine: completions tagged with their request id.
pub struct EngineEvents {
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: AnalyzerSettings) -> Result<(Self, EngineEvents), EngineError> {
        let analyzer = ReqwestAnalyzer::new(settings)?;
        sentiment_info!("Analyzer backend at {}", analyzer.settings().base_url);
        Self::with_analyzer(Arc::new(analyzer))
    }

    pub fn with_analyzer(
        analyzer: Arc<dyn Analyzer>,
    ) -> Result<(Self, EngineEvents), EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let analyzer = analyzer.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(analyzer.as_ref(), command, event_tx).await;
                });
            }
            sentiment_debug!("Engine command channel closed");
        });

        Ok((Self { cmd_tx }, EngineEvents { event_rx }))
    }

    pub fn analyze_text(&self, request_id: RequestId, text: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::AnalyzeText {
            request_id,
            text: text.into(),
        });
    }

    pub fn analyze_file(&self, request_id: RequestId, path: impl Into<PathBuf>) {
        let _ = self.cmd_tx.send(EngineCommand::AnalyzeFile {
            request_id,
            path: path.into(),
        });
    }

    pub fn ping(&self) {
        let _ = self.cmd_tx.send(EngineCommand::Ping);
    }
}

impl EngineEvents {
    /// Blocks until the next event. Returns `None` once the engine is gone.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    analyzer: &dyn Analyzer,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let event = match command {
        EngineCommand::AnalyzeText { request_id, text } => EngineEvent::AnalysisCompleted {
            request_id,
            result: analyzer.analyze_text(&text).await,
        },
        EngineCommand::AnalyzeFile { request_id, path } => EngineEvent::AnalysisCompleted {
            request_id,
            result: analyzer.analyze_file(&path).await,
        },
        EngineCommand::Ping => EngineEvent::PingCompleted {
            result: analyzer.ping().await,
        },
    };
    let _ = event_tx.send(event);
}
