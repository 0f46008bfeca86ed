use crate::{BackendStatus, ExportNotice};

/// Display class of a sentiment label. Only the exact labels `Positive`
/// and `Negative` are highlighted; everything else renders neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

impl Tone {
    pub fn from_label(label: &str) -> Self {
        match label {
            "Positive" => Tone::Positive,
            "Negative" => Tone::Negative,
            _ => Tone::Neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub input_text: String,
    pub result: Option<ResultView>,
    pub backend: BackendStatus,
    pub can_export: bool,
    pub export_notice: Option<ExportNotice>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub summary: String,
    /// `None` means no table is rendered at all.
    pub rows: Option<Vec<ResultRowView>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRowView {
    pub text: String,
    pub sentiment: String,
    pub tone: Tone,
}
