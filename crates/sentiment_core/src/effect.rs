use std::path::PathBuf;

use crate::{RequestId, ResultRow};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    AnalyzeText { request_id: RequestId, text: String },
    AnalyzeFile { request_id: RequestId, path: PathBuf },
    PingBackend,
    ExportCsv { rows: Vec<ResultRow> },
}
