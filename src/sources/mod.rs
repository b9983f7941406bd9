//! Source adapters for the author verification portal.
//!
//! Every source the portal exposes for an author (Google Scholar, Scopus,
//! Web of Science and the IPR patent registry) is described by a
//! [`SourceSpec`]: a URL layout plus a table of per-field extraction rules.
//! The [`SourceAdapter`] runs the same pipeline for all of them:
//!
//! 1. validate the author identifiers
//! 2. fetch the first author page and read the page count from it
//! 3. extract rows from every page into one column table
//! 4. project the table onto the requested fields and output shape
//!
//! Adding a source means adding a spec table and registering it with the
//! [`SourceRegistry`]; the pipeline itself does not change.

mod adapter;
mod google_scholar;
mod ipr;
pub mod mock;
mod registry;
mod scopus;
mod spec;
mod wos;

pub use adapter::SourceAdapter;
pub use google_scholar::GOOGLE_SCHOLAR;
pub use ipr::IPR;
pub use mock::MockFetcher;
pub use registry::SourceRegistry;
pub use scopus::SCOPUS;
pub use spec::SourceSpec;
pub use wos::WOS;

/// Errors that can occur while scraping the portal
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Unsupported output format or malformed argument
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The identifier is not a plain decimal number
    #[error("Invalid author ID: \"{0}\" must contain digits only")]
    InvalidAuthorId(String),

    /// Username or password is empty
    #[error("Missing login credentials: both username and password are required")]
    MissingCredentials,

    /// The login form did not land on the dashboard
    #[error("Invalid login credential: the username or password was rejected")]
    InvalidLoginCredential,

    /// A page request was redirected to the login form
    #[error("Authentication lost: the session is not logged in or has expired")]
    AuthenticationLost,

    /// The portal redirected to the author listing instead of a profile
    #[error("Author ID not found: {0}")]
    AuthorIdNotFound(String),

    /// The portal redirected somewhere this scraper does not recognise
    #[error("Unexpected redirect: requested {requested}, landed on {resolved}")]
    UnexpectedRedirect { requested: String, resolved: String },

    /// Extracted columns have different lengths; the page markup changed
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    /// Network or HTTP error
    #[error("Network error: {0}")]
    Network(String),

    /// Parsing error (URL, selector, etc.)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        SourceError::Network(err.to_string())
    }
}

impl From<url::ParseError> for SourceError {
    fn from(err: url::ParseError) -> Self {
        SourceError::Parse(format!("URL: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SourceError::AuthorIdNotFound("12345".to_string());
        assert_eq!(err.to_string(), "Author ID not found: 12345");

        let err = SourceError::UnexpectedRedirect {
            requested: "https://a/x".to_string(),
            resolved: "https://a/y".to_string(),
        };
        assert!(err.to_string().contains("https://a/y"));
    }

    #[test]
    fn test_url_error_conversion() {
        let err: SourceError = url::Url::parse("not a url").unwrap_err().into();
        assert!(matches!(err, SourceError::Parse(_)));
    }
}
