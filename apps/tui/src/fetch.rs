use portfolio_core::{CatalogueResponse, FetchError};
use std::fmt;
use std::path::PathBuf;

/// Where the catalogue request goes: a local file or an HTTP(S) endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogueLocation {
    File(PathBuf),
    Http(String),
}

impl CatalogueLocation {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Self::Http(raw.to_string())
        } else {
            Self::File(PathBuf::from(raw))
        }
    }

    /// Performs the single catalogue request. No retry, no timeout.
    pub async fn fetch(&self) -> Result<CatalogueResponse, FetchError> {
        tracing::info!(location = %self, "requesting catalogue");
        match self {
            Self::File(path) => tokio::fs::read_to_string(path)
                .await
                .map(CatalogueResponse::ok)
                .map_err(|e| FetchError::Request(format!("{}: {e}", path.display()))),
            Self::Http(url) => {
                let response = reqwest::get(url)
                    .await
                    .map_err(|e| FetchError::Request(e.to_string()))?;
                let status = response.status().as_u16();
                let body = response
                    .text()
                    .await
                    .map_err(|e| FetchError::Request(e.to_string()))?;
                Ok(CatalogueResponse { status, body })
            }
        }
    }
}

impl fmt::Display for CatalogueLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Http(url) => write!(f, "{url}"),
        }
    }
}
