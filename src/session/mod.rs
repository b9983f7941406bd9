//! Authenticated portal session and page fetching.
//!
//! A [`Session`] owns one cookie-keeping HTTP client for one identity. After
//! [`Session::login`] succeeds, every fetch carries the session cookies.
//! Failures are classified from the URL the request finally landed on, see
//! [`classify_resolved`].

mod portal;

pub use portal::{
    classify_resolved, is_dashboard, Portal, AUTHOR_LISTING_MARKER, DASHBOARD_MARKER,
    DEFAULT_BASE_URL, LOGIN_MARKER,
};

use async_trait::async_trait;
use scraper::Html;
use tracing::Instrument;
use url::Url;

use crate::config::Config;
use crate::sources::SourceError;
use crate::utils::HttpClient;

/// Login credentials for one portal account
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Both parts must be non-blank
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self, SourceError> {
        let username = username.into();
        let password = password.into();
        if username.trim().is_empty() || password.trim().is_empty() {
            return Err(SourceError::MissingCredentials);
        }
        Ok(Self { username, password })
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// One fetched results page
#[derive(Debug, Clone)]
pub struct Page {
    /// The URL that was requested (and, on success, resolved to)
    pub url: Url,
    /// 1-indexed page number
    pub index: u32,
    pub body: String,
}

impl Page {
    pub fn new(url: Url, index: u32, body: impl Into<String>) -> Self {
        Self {
            url,
            index,
            body: body.into(),
        }
    }

    /// Parse the body. `Html` is not `Send`; drop it before the next `.await`.
    pub fn document(&self) -> Html {
        Html::parse_document(&self.body)
    }
}

/// Something that can load a portal page for an author.
///
/// [`Session`] is the real implementation; [`MockFetcher`](crate::sources::MockFetcher)
/// serves canned pages in tests.
#[async_trait]
pub trait PageFetcher: Send + Sync + std::fmt::Debug {
    /// Fetch `url` as page `index`. `context_id` names the author in errors.
    async fn fetch(&self, url: &Url, index: u32, context_id: &str) -> Result<Page, SourceError>;
}

/// An authenticated portal session
#[derive(Debug)]
pub struct Session {
    http: HttpClient,
    portal: Portal,
    credentials: Credentials,
    span: tracing::Span,
}

impl Session {
    pub fn new(credentials: Credentials, portal: Portal, http: HttpClient) -> Self {
        let span = tracing::info_span!("session", user = %credentials.username());
        Self {
            http,
            portal,
            credentials,
            span,
        }
    }

    /// Build a session with the portal and HTTP settings from `config`
    pub fn from_config(credentials: Credentials, config: &Config) -> Result<Self, SourceError> {
        let portal = Portal::new(&config.portal.base_url)?;
        let http = HttpClient::from_config(&config.http)?;
        Ok(Self::new(credentials, portal, http))
    }

    pub fn portal(&self) -> &Portal {
        &self.portal
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Post the credentials once and keep the resulting cookies.
    ///
    /// Succeeds only if the portal redirects to its dashboard. There is no
    /// retry: bad credentials stay bad.
    pub async fn login(&self) -> Result<(), SourceError> {
        let login_url = self.portal.login_url()?;
        let form = [
            ("username", self.credentials.username.as_str()),
            ("password", self.credentials.password.as_str()),
        ];

        async {
            let response = self
                .http
                .client()
                .post(login_url.clone())
                .form(&form)
                .send()
                .await
                .map_err(|e| SourceError::Network(format!("Failed to log in: {}", e)))?;

            tracing::debug!(status = %response.status(), resolved = %response.url(), "login response");

            if is_dashboard(response.url()) {
                tracing::info!("Login successful");
                Ok(())
            } else {
                tracing::warn!(resolved = %response.url(), "Login did not reach the dashboard");
                Err(SourceError::InvalidLoginCredential)
            }
        }
        .instrument(self.span.clone())
        .await
    }
}

#[async_trait]
impl PageFetcher for Session {
    async fn fetch(&self, url: &Url, index: u32, context_id: &str) -> Result<Page, SourceError> {
        async {
            tracing::debug!(%url, page = index, "GET");

            let response = self
                .http
                .client()
                .get(url.clone())
                .header("Accept", "text/html")
                .send()
                .await
                .map_err(|e| SourceError::Network(format!("Failed to fetch {}: {}", url, e)))?;

            classify_resolved(url, response.url(), context_id)?;

            if !response.status().is_success() {
                return Err(SourceError::Network(format!(
                    "{} returned status: {}",
                    url,
                    response.status()
                )));
            }

            let body = response
                .text()
                .await
                .map_err(|e| SourceError::Network(format!("Failed to read {}: {}", url, e)))?;

            Ok(Page::new(url.clone(), index, body))
        }
        .instrument(self.span.clone())
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_require_both_parts() {
        assert!(Credentials::new("user", "pass").is_ok());
        assert!(matches!(
            Credentials::new("", "pass"),
            Err(SourceError::MissingCredentials)
        ));
        assert!(matches!(
            Credentials::new("user", "   "),
            Err(SourceError::MissingCredentials)
        ));
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let creds = Credentials::new("user", "s3cret").unwrap();
        let printed = format!("{:?}", creds);
        assert!(printed.contains("user"));
        assert!(!printed.contains("s3cret"));
    }

    #[test]
    fn test_session_from_config() {
        let mut config = Config::default();
        config.portal.base_url = "http://127.0.0.1:9".to_string();
        let session =
            Session::from_config(Credentials::new("u", "p").unwrap(), &config).unwrap();
        assert_eq!(session.portal().base().as_str(), "http://127.0.0.1:9/");
        assert_eq!(session.credentials().username(), "u");
    }

    #[test]
    fn test_page_document() {
        let url = Url::parse("https://x.test/a?view=wos").unwrap();
        let page = Page::new(url, 1, "<html><body><p>hi</p></body></html>");
        let doc = page.document();
        let p = crate::utils::parse_selector("p").unwrap();
        assert_eq!(doc.select(&p).count(), 1);
    }
}
