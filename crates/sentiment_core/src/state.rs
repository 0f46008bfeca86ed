use crate::view_model::{AppViewModel, ResultRowView, ResultView, Tone};

pub type RequestId = u64;

/// Summary shown whenever a submission fails for any reason.
pub const FALLBACK_SUMMARY: &str = "⚠️ Error analyzing sentiment";

/// One sentence and the label the backend assigned to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub text: String,
    pub sentiment: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub summary: String,
    pub results: Option<Vec<ResultRow>>,
}

impl AnalysisResult {
    pub fn fallback() -> Self {
        Self {
            summary: FALLBACK_SUMMARY.to_string(),
            results: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisOutcome {
    Success(AnalysisResult),
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendStatus {
    #[default]
    Unknown,
    Online,
    Offline,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportNotice {
    Written { path: String },
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    input_text: String,
    last_result: Option<AnalysisResult>,
    issued_requests: RequestId,
    latest_request: Option<RequestId>,
    backend: BackendStatus,
    export_notice: Option<ExportNotice>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            input_text: self.input_text.clone(),
            result: self.last_result.as_ref().map(result_view),
            backend: self.backend,
            can_export: self.exportable_rows().is_some(),
            export_notice: self.export_notice.clone(),
            dirty: self.dirty,
        }
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn last_result(&self) -> Option<&AnalysisResult> {
        self.last_result.as_ref()
    }

    pub fn latest_request(&self) -> Option<RequestId> {
        self.latest_request
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_input_text(&mut self, text: String) {
        if self.input_text != text {
            self.input_text = text;
            self.mark_dirty();
        }
    }

    /// Allocates the next request id and makes it the only one whose
    /// completion will be applied.
    pub(crate) fn begin_request(&mut self) -> RequestId {
        self.issued_requests += 1;
        self.latest_request = Some(self.issued_requests);
        self.issued_requests
    }

    /// Applies a completion. Returns false when it belongs to a superseded
    /// request and was dropped.
    pub(crate) fn apply_outcome(&mut self, request_id: RequestId, outcome: AnalysisOutcome) -> bool {
        if self.latest_request != Some(request_id) {
            return false;
        }
        self.last_result = Some(match outcome {
            AnalysisOutcome::Success(result) => result,
            AnalysisOutcome::Failed => AnalysisResult::fallback(),
        });
        self.mark_dirty();
        true
    }

    pub(crate) fn set_backend(&mut self, status: BackendStatus) {
        if self.backend != status {
            self.backend = status;
            self.mark_dirty();
        }
    }

    pub(crate) fn exportable_rows(&self) -> Option<&[ResultRow]> {
        self.last_result
            .as_ref()
            .and_then(|result| result.results.as_deref())
            .filter(|rows| !rows.is_empty())
    }

    pub(crate) fn set_export_notice(&mut self, notice: ExportNotice) {
        self.export_notice = Some(notice);
        self.mark_dirty();
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

fn result_view(result: &AnalysisResult) -> ResultView {
    ResultView {
        summary: result.summary.clone(),
        rows: result.results.as_ref().map(|rows| {
            rows.iter()
                .map(|row| ResultRowView {
                    text: row.text.clone(),
                    sentiment: row.sentiment.clone(),
                    tone: Tone::from_label(&row.sentiment),
                })
                .collect()
        }),
    }
}
