use std::fmt;

use serde::{Deserialize, Serialize};

pub type RequestId = u64;

/// Body of `POST /analyze_text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisRequest<'a> {
    pub text: &'a str,
}

/// Body returned by `/analyze_text` and `/analyze_file`.
///
/// `summary` is mandatory; a body without it (e.g. the backend's
/// `{"error": ...}` reply) does not decode. `results` may be missing or null.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnalysisResponse {
    pub summary: String,
    #[serde(default)]
    pub results: Option<Vec<SentenceSentiment>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SentenceSentiment {
    pub text: String,
    pub sentiment: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PingResponse {
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    AnalysisCompleted {
        request_id: RequestId,
        result: Result<AnalysisResponse, AnalyzeError>,
    },
    PingCompleted {
        result: Result<(), AnalyzeError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeError {
    pub kind: FailureKind,
    pub message: String,
}

impl AnalyzeError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for AnalyzeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AnalyzeError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    Network,
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    InvalidBody,
    FileRead,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::InvalidBody => write!(f, "invalid response body"),
            FailureKind::FileRead => write!(f, "file read error"),
        }
    }
}
