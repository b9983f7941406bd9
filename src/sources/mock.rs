//! Canned-page fetcher for testing the pipeline without a network.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use url::Url;

use crate::session::{classify_resolved, Page, PageFetcher};
use crate::sources::SourceError;

#[derive(Debug, Clone)]
enum MockResponse {
    Body(String),
    Redirect(Url),
}

/// A fetcher that serves predefined pages keyed by exact URL.
///
/// Redirects go through the same classification as the real session, so a
/// redirect to the login form yields `AuthenticationLost`, and so on. Every
/// requested URL is recorded in order.
#[derive(Debug, Default)]
pub struct MockFetcher {
    responses: Mutex<HashMap<String, MockResponse>>,
    requests: Mutex<Vec<String>>,
}

impl MockFetcher {
    /// Create a new mock fetcher with no pages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `url`.
    pub fn set_page(&self, url: &str, body: impl Into<String>) {
        let mut guard = self.responses.lock().unwrap_or_else(|e| e.into_inner());
        guard.insert(url.to_string(), MockResponse::Body(body.into()));
    }

    /// Pretend that requesting `url` lands on `resolved`.
    pub fn set_redirect(&self, url: &str, resolved: &str) -> Result<(), SourceError> {
        let resolved = Url::parse(resolved)?;
        let mut guard = self.responses.lock().unwrap_or_else(|e| e.into_inner());
        guard.insert(url.to_string(), MockResponse::Redirect(resolved));
        Ok(())
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch(&self, url: &Url, index: u32, context_id: &str) -> Result<Page, SourceError> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(url.to_string());

        let response = self
            .responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(url.as_str())
            .cloned();

        match response {
            Some(MockResponse::Body(body)) => Ok(Page::new(url.clone(), index, body)),
            Some(MockResponse::Redirect(resolved)) => {
                classify_resolved(url, &resolved, context_id)?;
                Ok(Page::new(url.clone(), index, String::new()))
            }
            None => Err(SourceError::Network(format!("no mock page for {}", url))),
        }
    }
}
