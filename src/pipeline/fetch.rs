use std::time::Duration;

use crate::infra::http::headers::add_standard_headers;

use super::PipelineError;

/// Fixed request timeout for page retrieval.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Raw page text plus the declared content type. Encoding is handled by
/// reqwest's charset-aware body decoding.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub body: String,
    pub content_type: Option<String>,
}

#[derive(Clone)]
pub struct Fetcher {
    http: reqwest::Client,
}

impl Fetcher {
    pub fn new() -> Self {
        let http = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .expect("reqwest client");
        Self { http }
    }

    /// Retrieve a page. Network error, timeout, or non-2xx status all map
    /// to `fetch_failed`; nothing is thrown across the pipeline boundary.
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage, PipelineError> {
        let (builder, _rid) = add_standard_headers(self.http.get(url), None);
        let resp = builder.send().await.map_err(|e| PipelineError::Fetch {
            cause: e.to_string(),
            status: None,
        })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(PipelineError::Fetch {
                cause: format!("status {status}"),
                status: Some(status.as_u16()),
            });
        }

        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = resp.text().await.map_err(|e| PipelineError::Fetch {
            cause: e.to_string(),
            status: Some(status.as_u16()),
        })?;

        Ok(FetchedPage { body, content_type })
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}
