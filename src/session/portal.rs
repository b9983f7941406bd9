//! URL layout of the author verification portal and redirect classification.

use url::Url;

use crate::models::AuthorId;
use crate::sources::{SourceError, SourceSpec};

/// Default portal location
pub const DEFAULT_BASE_URL: &str = "https://sinta.kemdikbud.go.id";

const LOGIN_PATH: &str = "authorverification/login/do_login";

/// A resolved URL containing this lands on the login form
pub const LOGIN_MARKER: &str = "authorverification/login";

/// A resolved URL containing this lands on the generic author listing
pub const AUTHOR_LISTING_MARKER: &str = "authorverification/author/all";

/// A resolved URL containing this after login means the login succeeded
pub const DASHBOARD_MARKER: &str = "dashboard";

/// URL builder for one portal deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Portal {
    base: Url,
}

impl Portal {
    pub fn new(base_url: &str) -> Result<Self, SourceError> {
        let mut base = Url::parse(base_url.trim())?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Endpoint that accepts the login form
    pub fn login_url(&self) -> Result<Url, SourceError> {
        Ok(self.base.join(LOGIN_PATH)?)
    }

    /// First page of one author's records for a source
    pub fn author_url(&self, spec: &SourceSpec, author_id: &AuthorId) -> Result<Url, SourceError> {
        let relative = format!(
            "{}/{}?view={}",
            spec.profile_path, author_id, spec.view
        );
        Ok(self.base.join(&relative)?)
    }

    /// The `page`-th page (1-indexed) of an author URL
    pub fn page_url(author_url: &Url, page: u32) -> Result<Url, SourceError> {
        Ok(Url::parse(&format!("{}&page={}", author_url, page))?)
    }
}

/// Classify where a page request ended up after redirects.
///
/// Only an exact match with the requested URL counts as success. The login
/// form and the author listing are the two redirects the portal is known to
/// issue; anything else is reported rather than trusted.
pub fn classify_resolved(
    requested: &Url,
    resolved: &Url,
    context_id: &str,
) -> Result<(), SourceError> {
    if resolved == requested {
        return Ok(());
    }

    let landed = resolved.as_str();
    if landed.contains(LOGIN_MARKER) {
        Err(SourceError::AuthenticationLost)
    } else if landed.contains(AUTHOR_LISTING_MARKER) {
        Err(SourceError::AuthorIdNotFound(context_id.to_string()))
    } else {
        Err(SourceError::UnexpectedRedirect {
            requested: requested.to_string(),
            resolved: landed.to_string(),
        })
    }
}

/// Whether the URL reached after posting the login form means success
pub fn is_dashboard(resolved: &Url) -> bool {
    resolved.as_str().contains(DASHBOARD_MARKER)
}
