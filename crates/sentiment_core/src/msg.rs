use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Window finished its first frame.
    Started,
    /// User edited the text area.
    InputChanged(String),
    /// User clicked "Analyze Sentiment".
    AnalyzeClicked,
    /// User picked a TXT/CSV file for upload.
    FileChosen(PathBuf),
    /// Engine completion for a submission.
    AnalysisDone {
        request_id: crate::RequestId,
        outcome: crate::AnalysisOutcome,
    },
    /// User clicked "Check backend".
    CheckBackendClicked,
    /// Engine answer to a ping.
    BackendStatus(crate::BackendStatus),
    /// User clicked "Export CSV".
    ExportClicked,
    /// Export finished with the written path or an error message.
    ExportFinished(Result<String, String>),
    /// Fallback for placeholder wiring.
    NoOp,
}
