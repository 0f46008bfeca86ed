use std::sync::Once;

use sentiment_core::{
    update, AnalysisOutcome, AnalysisResult, AppState, Effect, Msg, ResultRow, Tone,
    FALLBACK_SUMMARY,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(sentiment_logging::initialize_for_tests);
}

fn submit_text(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::InputChanged(input.to_string()));
    update(state, Msg::AnalyzeClicked)
}

fn row(text: &str, sentiment: &str) -> ResultRow {
    ResultRow {
        text: text.to_string(),
        sentiment: sentiment.to_string(),
    }
}

fn success(summary: &str, results: Option<Vec<ResultRow>>) -> AnalysisOutcome {
    AnalysisOutcome::Success(AnalysisResult {
        summary: summary.to_string(),
        results,
    })
}

#[test]
fn analyze_emits_request_with_current_text() {
    init_logging();
    let (state, effects) = submit_text(AppState::new(), "The contract is fair and valid.");

    assert_eq!(
        effects,
        vec![Effect::AnalyzeText {
            request_id: 1,
            text: "The contract is fair and valid.".to_string(),
        }]
    );
    assert_eq!(state.latest_request(), Some(1));
    // Nothing is shown until the response arrives.
    assert!(state.view().result.is_none());
}

#[test]
fn empty_text_is_still_submitted() {
    init_logging();
    let (_state, effects) = update(AppState::new(), Msg::AnalyzeClicked);

    assert_eq!(
        effects,
        vec![Effect::AnalyzeText {
            request_id: 1,
            text: String::new(),
        }]
    );
}

#[test]
fn successful_result_renders_summary_and_rows() {
    init_logging();
    let (state, _) = submit_text(AppState::new(), "The contract is fair and valid.");
    let (mut state, effects) = update(
        state,
        Msg::AnalysisDone {
            request_id: 1,
            outcome: success(
                "Overall Positive",
                Some(vec![row("The contract is fair and valid.", "Positive")]),
            ),
        },
    );

    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    let result = state.view().result.expect("result shown");
    assert_eq!(result.summary, "Overall Positive");
    let rows = result.rows.expect("table shown");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].text, "The contract is fair and valid.");
    assert_eq!(rows[0].sentiment, "Positive");
    assert_eq!(rows[0].tone, Tone::Positive);
}

#[test]
fn result_without_rows_renders_no_table() {
    init_logging();
    let (state, _) = submit_text(AppState::new(), "text");
    let (state, _) = update(
        state,
        Msg::AnalysisDone {
            request_id: 1,
            outcome: success("Only a summary", None),
        },
    );

    let view = state.view();
    let result = view.result.expect("result shown");
    assert_eq!(result.summary, "Only a summary");
    assert!(result.rows.is_none());
    assert!(!view.can_export);
}

#[test]
fn failure_renders_fallback_summary_without_table() {
    init_logging();
    let (state, _) = submit_text(AppState::new(), "text");
    let (state, _) = update(
        state,
        Msg::AnalysisDone {
            request_id: 1,
            outcome: AnalysisOutcome::Failed,
        },
    );

    let result = state.view().result.expect("result shown");
    assert_eq!(result.summary, FALLBACK_SUMMARY);
    assert_eq!(result.summary, "⚠️ Error analyzing sentiment");
    assert!(result.rows.is_none());
}

#[test]
fn failure_replaces_previous_result_wholesale() {
    init_logging();
    let (state, _) = submit_text(AppState::new(), "first");
    let (state, _) = update(
        state,
        Msg::AnalysisDone {
            request_id: 1,
            outcome: success("ok", Some(vec![row("a", "Positive")])),
        },
    );
    let (state, _) = submit_text(state, "second");
    let (state, _) = update(
        state,
        Msg::AnalysisDone {
            request_id: 2,
            outcome: AnalysisOutcome::Failed,
        },
    );

    assert_eq!(state.last_result(), Some(&AnalysisResult::fallback()));
}

#[test]
fn labels_map_to_tones_exactly() {
    init_logging();
    let (state, _) = submit_text(AppState::new(), "text");
    let (state, _) = update(
        state,
        Msg::AnalysisDone {
            request_id: 1,
            outcome: success(
                "mixed",
                Some(vec![
                    row("a", "Positive"),
                    row("b", "Negative"),
                    row("c", "Neutral"),
                    row("d", "positive"),
                    row("e", ""),
                ]),
            ),
        },
    );

    let tones: Vec<_> = state
        .view()
        .result
        .and_then(|result| result.rows)
        .unwrap()
        .iter()
        .map(|row| row.tone)
        .collect();
    assert_eq!(
        tones,
        vec![
            Tone::Positive,
            Tone::Negative,
            Tone::Neutral,
            Tone::Neutral,
            Tone::Neutral,
        ]
    );
}

#[test]
fn editing_input_marks_dirty_only_on_change() {
    init_logging();
    let (mut state, effects) = update(AppState::new(), Msg::InputChanged("abc".to_string()));
    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    assert_eq!(state.view().input_text, "abc");

    let (mut state, _) = update(state, Msg::InputChanged("abc".to_string()));
    assert!(!state.consume_dirty());
}

#[test]
fn file_choice_emits_upload_effect() {
    init_logging();
    let path = std::path::PathBuf::from("contract.txt");
    let (state, effects) = update(AppState::new(), Msg::FileChosen(path.clone()));

    assert_eq!(
        effects,
        vec![Effect::AnalyzeFile {
            request_id: 1,
            path,
        }]
    );
    assert_eq!(state.latest_request(), Some(1));
}
