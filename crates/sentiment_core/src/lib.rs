//! Sentiment core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{
    AnalysisOutcome, AnalysisResult, AppState, BackendStatus, ExportNotice, RequestId, ResultRow,
    FALLBACK_SUMMARY,
};
pub use update::update;
pub use view_model::{AppViewModel, ResultRowView, ResultView, Tone};
