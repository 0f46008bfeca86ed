use crate::{AppState, BackendStatus, Effect, ExportNotice, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input_text(text);
            Vec::new()
        }
        Msg::AnalyzeClicked => {
            // Empty input is submitted as-is.
            let request_id = state.begin_request();
            vec![Effect::AnalyzeText {
                request_id,
                text: state.input_text().to_string(),
            }]
        }
        Msg::FileChosen(path) => {
            let request_id = state.begin_request();
            vec![Effect::AnalyzeFile { request_id, path }]
        }
        Msg::AnalysisDone {
            request_id,
            outcome,
        } => {
            state.apply_outcome(request_id, outcome);
            Vec::new()
        }
        Msg::Started | Msg::CheckBackendClicked => {
            state.set_backend(BackendStatus::Unknown);
            vec![Effect::PingBackend]
        }
        Msg::BackendStatus(status) => {
            state.set_backend(status);
            Vec::new()
        }
        Msg::ExportClicked => match state.exportable_rows() {
            Some(rows) => vec![Effect::ExportCsv {
                rows: rows.to_vec(),
            }],
            None => Vec::new(),
        },
        Msg::ExportFinished(result) => {
            state.set_export_notice(match result {
                Ok(path) => ExportNotice::Written { path },
                Err(message) => ExportNotice::Failed { message },
            });
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
