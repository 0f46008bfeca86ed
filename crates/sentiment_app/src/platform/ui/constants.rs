use eframe::egui::Color32;

pub const APP_NAME: &str = "sentiment_app";
pub const WINDOW_TITLE: &str = "Legal Sentiment Analyzer";
pub const WINDOW_SIZE: [f32; 2] = [560.0, 720.0];

pub const HEADING: &str = "⚖️ Legal Sentiment Analyzer 🚀";
pub const INPUT_HINT: &str = "Paste your legal text here...";
pub const BUTTON_ANALYZE: &str = "Analyze Sentiment";
pub const BUTTON_ANALYZE_FILE: &str = "Analyze File…";
pub const BUTTON_EXPORT: &str = "Export CSV";
pub const BUTTON_CHECK_BACKEND: &str = "Check backend";
pub const RESULT_HEADING: &str = "📊 Result:";
pub const COLUMN_SENTENCE: &str = "Sentence";
pub const COLUMN_SENTIMENT: &str = "Sentiment";

pub const INPUT_ROWS: usize = 8;
pub const TABLE_MAX_HEIGHT: f32 = 160.0;

pub const COLOR_POSITIVE: Color32 = Color32::from_rgb(22, 163, 74);
pub const COLOR_NEGATIVE: Color32 = Color32::from_rgb(220, 38, 38);
pub const COLOR_NEUTRAL: Color32 = Color32::from_rgb(55, 65, 81);
pub const COLOR_SUMMARY: Color32 = Color32::from_rgb(126, 34, 206);
pub const COLOR_HEADING: Color32 = Color32::from_rgb(55, 48, 163);
