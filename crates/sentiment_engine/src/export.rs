use std::path::{Path, PathBuf};

use sentiment_logging::sentiment_info;

use crate::persist::{AtomicFileWriter, PersistError};
use crate::SentenceSentiment;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSettings {
    pub output_dir: PathBuf,
    pub filename: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            filename: "sentiment_analysis_results.csv".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv buffer error: {0}")]
    Buffer(String),
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
}

/// Writes `rows` as a `text,sentiment` CSV to `{output_dir}/{filename}`,
/// replacing any previous export.
pub fn export_results_csv(
    settings: &ExportSettings,
    rows: &[SentenceSentiment],
) -> Result<PathBuf, ExportError> {
    let content = render_csv(rows)?;
    let path = write_export(&settings.output_dir, &settings.filename, &content)?;
    sentiment_info!("Exported {} rows to {:?}", rows.len(), path);
    Ok(path)
}

fn render_csv(rows: &[SentenceSentiment]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["text", "sentiment"])?;
    for row in rows {
        writer.write_record([row.text.as_str(), row.sentiment.as_str()])?;
    }
    writer
        .into_inner()
        .map_err(|err| ExportError::Buffer(err.to_string()))
}

fn write_export(dir: &Path, filename: &str, content: &[u8]) -> Result<PathBuf, PersistError> {
    AtomicFileWriter::new(dir).write(filename, content)
}
