use std::time::Duration;

use futures_util::StreamExt;
use job_search_core::Query;
use reqwest::header::CONTENT_TYPE;
use search_logging::{search_debug, search_trace};
use url::Url;

use crate::{CatalogBody, Credential, FailureKind, FetchError, FetchMetadata};

pub const DEFAULT_BASE_URL: &str = "https://apis.ccbp.in";

const JOBS_PATH: &str = "jobs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

#[async_trait::async_trait]
pub trait CatalogClient: Send + Sync {
    /// Issues one catalog GET. Non-2xx statuses are errors; the body of a
    /// 2xx response is returned unparsed.
    async fn fetch_jobs(
        &self,
        query: &Query,
        credential: &Credential,
    ) -> Result<CatalogBody, FetchError>;
}

/// Builds `<base>/jobs?employment_type=..&minimum_package=..&search=..`.
///
/// Every parameter is present, empty when unconstrained.
pub fn catalog_url(base: &Url, query: &Query) -> Result<Url, FetchError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| FetchError::new(FailureKind::InvalidUrl, "base url cannot carry a path"))?
        .pop_if_empty()
        .push(JOBS_PATH);
    url.query_pairs_mut().clear().extend_pairs(query.pairs());
    Ok(url)
}

#[derive(Debug, Clone)]
pub struct ReqwestCatalogClient {
    settings: CatalogSettings,
    base: Url,
    client: reqwest::Client,
}

impl ReqwestCatalogClient {
    pub fn new(settings: CatalogSettings) -> Result<Self, FetchError> {
        let base = Url::parse(&settings.base_url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self {
            settings,
            base,
            client,
        })
    }

    pub fn settings(&self) -> &CatalogSettings {
        &self.settings
    }

    fn too_large(&self, actual: u64) -> FetchError {
        FetchError::new(
            FailureKind::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual: Some(actual),
            },
            "response too large",
        )
    }
}

#[async_trait::async_trait]
impl CatalogClient for ReqwestCatalogClient {
    async fn fetch_jobs(
        &self,
        query: &Query,
        credential: &Credential,
    ) -> Result<CatalogBody, FetchError> {
        let url = catalog_url(&self.base, query)?;
        search_debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .bearer_auth(credential.expose())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(self.too_large(content_len));
            }
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(self.too_large(next_len));
            }
            bytes.extend_from_slice(&chunk);
        }
        search_trace!("received {} bytes from {}", bytes.len(), url);

        let metadata = FetchMetadata {
            url: url.to_string(),
            status: status.as_u16(),
            content_type,
            byte_len: bytes.len() as u64,
        };

        Ok(CatalogBody { bytes, metadata })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use job_search_core::{build_query, FilterState};

    #[test]
    fn url_carries_every_parameter() {
        let base = Url::parse("https://apis.ccbp.in").unwrap();
        let url = catalog_url(&base, &Query::default()).unwrap();
        assert_eq!(
            url.as_str(),
            "https://apis.ccbp.in/jobs?employment_type=&minimum_package=&search="
        );
    }

    #[test]
    fn url_encodes_values_and_keeps_base_path() {
        let filters = FilterState::new()
            .toggle_employment_type("FULLTIME", true)
            .filters
            .toggle_employment_type("PARTTIME", true)
            .filters
            .set_search_text("ui & ux")
            .filters;
        let base = Url::parse("http://localhost:8080/api/").unwrap();

        let url = catalog_url(&base, &build_query(&filters)).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/api/jobs?employment_type=FULLTIME%2CPARTTIME&minimum_package=&search=ui+%26+ux"
        );
    }

    #[test]
    fn rejects_non_hierarchical_base() {
        let base = Url::parse("mailto:jobs@example.com").unwrap();
        let err = catalog_url(&base, &Query::default()).unwrap_err();
        assert_eq!(err.kind, FailureKind::InvalidUrl);
    }
}
