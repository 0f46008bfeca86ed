//! Sentiment engine: HTTP client for the analyzer backend and effect execution.
mod client;
mod engine;
mod export;
mod persist;
mod types;

pub use client::{Analyzer, AnalyzerSettings, ReqwestAnalyzer};
pub use engine::{EngineError, EngineEvents, EngineHandle};
pub use export::{export_results_csv, ExportError, ExportSettings};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use types::{
    AnalysisRequest, AnalysisResponse, AnalyzeError, EngineEvent, FailureKind, PingResponse,
    RequestId, SentenceSentiment,
};
