//! Remote level service client.

use crate::{Level, LevelError};
use log::{debug, info};
use reqwest::blocking::{Client, Response};
use std::time::Duration;

/// Production level service.
pub const DEFAULT_BASE_URL: &str = "https://deaddropgames.com/stuntski/api";

/// Default request timeout (connect + transfer).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches levels by numeric identifier from `<base-url>/levels/{id}`.
#[derive(Debug, Clone)]
pub struct LevelService {
    base_url: String,
    timeout: Duration,
}

impl Default for LevelService {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl LevelService {
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the URL level `id` is fetched from.
    pub fn url(&self, id: u64) -> String {
        format!("{}/levels/{id}", self.base_url.trim_end_matches('/'))
    }

    /// Fetches and parses level `id`.
    ///
    /// Connection failures, timeouts, non-success statuses, and bodies
    /// which don't parse as a [Level] are all reported as
    /// [LevelError::SourceUnavailable]. No retries are attempted.
    pub fn fetch(&self, id: u64) -> Result<Level, LevelError> {
        let url = self.url(id);
        info!("fetching level from {url}");
        let unavailable = |source| LevelError::SourceUnavailable {
            url: url.clone(),
            source,
        };
        let now = std::time::Instant::now();
        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(unavailable)?;
        let level = client
            .get(&url)
            .send()
            .and_then(Response::error_for_status)
            .and_then(|resp| resp.json::<Level>())
            .map_err(unavailable)?;
        debug!(
            "fetch; polylines: {}, points: {}, exec: {:?}",
            level.poly_lines.len(),
            level.point_count(),
            now.elapsed()
        );
        Ok(level)
    }
}

#[cfg(test)]
mod tests {
    use super::{LevelService, DEFAULT_BASE_URL};
    use crate::LevelError;
    use std::time::Duration;

    #[test]
    fn test_url_template() {
        let svc = LevelService::default();
        assert_eq!(svc.url(42), format!("{DEFAULT_BASE_URL}/levels/42"));
    }

    #[test]
    fn test_url_trailing_slash() {
        let svc = LevelService::new("http://localhost:8080/api//");
        assert_eq!(svc.url(7), "http://localhost:8080/api/levels/7");
    }

    #[test]
    fn test_unreachable_service() {
        // Nothing listens on port 1; the connection is refused.
        let svc = LevelService::new("http://127.0.0.1:1").timeout(Duration::from_secs(2));
        match svc.fetch(3) {
            Err(LevelError::SourceUnavailable { url, .. }) => {
                assert_eq!(url, "http://127.0.0.1:1/levels/3");
            }
            other => panic!("expected SourceUnavailable, got {other:?}"),
        }
    }
}
