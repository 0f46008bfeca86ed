use std::path::Path;
use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use sentiment_logging::{sentiment_debug, sentiment_trace};
use url::Url;

use crate::{AnalysisRequest, AnalysisResponse, AnalyzeError, FailureKind, PingResponse};

const ANALYZE_TEXT_ROUTE: &str = "analyze_text";
const ANALYZE_FILE_ROUTE: &str = "analyze_file";
const PING_ROUTE: &str = "ping";

#[derive(Debug, Clone)]
pub struct AnalyzerSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    /// The backend loads its model on first use, so the first call is slow.
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(60),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

#[async_trait::async_trait]
pub trait Analyzer: Send + Sync {
    async fn analyze_text(&self, text: &str) -> Result<AnalysisResponse, AnalyzeError>;

    async fn analyze_file(&self, path: &Path) -> Result<AnalysisResponse, AnalyzeError>;

    /// Succeeds only when the backend answers `{"status": "ok"}` with a 2xx.
    async fn ping(&self) -> Result<(), AnalyzeError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestAnalyzer {
    settings: AnalyzerSettings,
    client: reqwest::Client,
}

impl ReqwestAnalyzer {
    pub fn new(settings: AnalyzerSettings) -> Result<Self, AnalyzeError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| AnalyzeError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    pub fn settings(&self) -> &AnalyzerSettings {
        &self.settings
    }

    fn endpoint(&self, route: &str) -> Result<Url, AnalyzeError> {
        let mut base = Url::parse(&self.settings.base_url)
            .map_err(|err| AnalyzeError::new(FailureKind::InvalidUrl, err.to_string()))?;
        // Without a trailing slash `join` would replace the last path segment.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(route)
            .map_err(|err| AnalyzeError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, AnalyzeError> {
        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(AnalyzeError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(AnalyzeError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }

    /// The status code is not inspected: any body that decodes into the
    /// response shape is accepted.
    async fn decode_analysis(
        &self,
        response: reqwest::Response,
    ) -> Result<AnalysisResponse, AnalyzeError> {
        let status = response.status();
        let bytes = self.read_body(response).await?;
        sentiment_trace!("analysis response status={} body_len={}", status, bytes.len());
        serde_json::from_slice(&bytes)
            .map_err(|err| AnalyzeError::new(FailureKind::InvalidBody, err.to_string()))
    }
}

#[async_trait::async_trait]
impl Analyzer for ReqwestAnalyzer {
    async fn analyze_text(&self, text: &str) -> Result<AnalysisResponse, AnalyzeError> {
        let url = self.endpoint(ANALYZE_TEXT_ROUTE)?;
        let body = serde_json::to_vec(&AnalysisRequest { text })
            .map_err(|err| AnalyzeError::new(FailureKind::InvalidBody, err.to_string()))?;
        sentiment_debug!("POST {} text_len={}", url, text.len());

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        self.decode_analysis(response).await
    }

    async fn analyze_file(&self, path: &Path) -> Result<AnalysisResponse, AnalyzeError> {
        let url = self.endpoint(ANALYZE_FILE_ROUTE)?;
        let content = tokio::fs::read(path).await.map_err(|err| {
            AnalyzeError::new(FailureKind::FileRead, format!("{}: {err}", path.display()))
        })?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload.txt".to_string());
        sentiment_debug!("POST {} file={} bytes={}", url, filename, content.len());

        let part = reqwest::multipart::Part::bytes(content).file_name(filename);
        let form = reqwest::multipart::Form::new().part("file", part);
        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        self.decode_analysis(response).await
    }

    async fn ping(&self) -> Result<(), AnalyzeError> {
        let url = self.endpoint(PING_ROUTE)?;
        let response = self
            .client
            .post(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalyzeError::new(FailureKind::Network, status.to_string()));
        }
        let bytes = self.read_body(response).await?;
        let ping: PingResponse = serde_json::from_slice(&bytes)
            .map_err(|err| AnalyzeError::new(FailureKind::InvalidBody, err.to_string()))?;
        if ping.status == "ok" {
            Ok(())
        } else {
            Err(AnalyzeError::new(
                FailureKind::InvalidBody,
                format!("unexpected ping status {:?}", ping.status),
            ))
        }
    }
}

fn map_reqwest_error(err: reqwest::Error) -> AnalyzeError {
    if err.is_timeout() {
        return AnalyzeError::new(FailureKind::Timeout, err.to_string());
    }
    AnalyzeError::new(FailureKind::Network, err.to_string())
}
