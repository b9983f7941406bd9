//! Logged-in entry point: one session plus the source registry.

use crate::config::Config;
use crate::models::{AuthorIds, FieldSelection, OutFormat, Output};
use crate::session::{Credentials, Session};
use crate::sources::{
    SourceAdapter, SourceError, SourceRegistry, SourceSpec, GOOGLE_SCHOLAR, IPR, SCOPUS, WOS,
};

/// Author verification client.
///
/// ```no_run
/// # async fn run() -> Result<(), sinta_av::sources::SourceError> {
/// use sinta_av::{AvClient, Config, FieldSelection, OutFormat};
///
/// let client = AvClient::connect("user@example.ac.id", "secret", &Config::default()).await?;
/// let output = client
///     .get_scopus("6005631", OutFormat::Records, &FieldSelection::All)
///     .await?;
/// println!("{} records", output.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct AvClient {
    session: Session,
    registry: SourceRegistry,
}

impl AvClient {
    /// Build a client without logging in
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        config: &Config,
    ) -> Result<Self, SourceError> {
        let credentials = Credentials::new(username, password)?;
        Ok(Self::with_session(Session::from_config(credentials, config)?))
    }

    /// Build a client and log in right away
    pub async fn connect(
        username: impl Into<String>,
        password: impl Into<String>,
        config: &Config,
    ) -> Result<Self, SourceError> {
        let client = Self::new(username, password, config)?;
        client.login().await?;
        Ok(client)
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            session,
            registry: SourceRegistry::new(),
        }
    }

    pub async fn login(&self) -> Result<(), SourceError> {
        self.session.login().await
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn registry(&self) -> &SourceRegistry {
        &self.registry
    }

    /// Pipeline for one source over this client's session
    pub fn adapter(&self, spec: &'static SourceSpec) -> SourceAdapter<'_> {
        SourceAdapter::new(spec, &self.session, self.session.portal())
    }

    /// Scrape a source looked up by id (`google`, `scopus`, `wos`, `ipr`)
    pub async fn get(
        &self,
        source_id: &str,
        ids: impl Into<AuthorIds>,
        format: OutFormat,
        fields: &FieldSelection,
    ) -> Result<Output, SourceError> {
        let spec = self.registry.get_required(source_id)?;
        self.adapter(spec).get(ids, format, fields).await
    }

    pub async fn get_gscholar(
        &self,
        ids: impl Into<AuthorIds>,
        format: OutFormat,
        fields: &FieldSelection,
    ) -> Result<Output, SourceError> {
        self.adapter(&GOOGLE_SCHOLAR).get(ids, format, fields).await
    }

    pub async fn get_scopus(
        &self,
        ids: impl Into<AuthorIds>,
        format: OutFormat,
        fields: &FieldSelection,
    ) -> Result<Output, SourceError> {
        self.adapter(&SCOPUS).get(ids, format, fields).await
    }

    pub async fn get_wos(
        &self,
        ids: impl Into<AuthorIds>,
        format: OutFormat,
        fields: &FieldSelection,
    ) -> Result<Output, SourceError> {
        self.adapter(&WOS).get(ids, format, fields).await
    }

    pub async fn get_ipr(
        &self,
        ids: impl Into<AuthorIds>,
        format: OutFormat,
        fields: &FieldSelection,
    ) -> Result<Output, SourceError> {
        self.adapter(&IPR).get(ids, format, fields).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_requires_credentials() {
        let config = Config::default();
        assert!(matches!(
            AvClient::new("", "secret", &config),
            Err(SourceError::MissingCredentials)
        ));
        assert!(AvClient::new("user", "secret", &config).is_ok());
    }

    #[tokio::test]
    async fn test_unknown_source() {
        let client = AvClient::new("user", "secret", &Config::default()).unwrap();
        let err = client
            .get("garuda", "123", OutFormat::Records, &FieldSelection::All)
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::InvalidParameter(_)));
    }

    #[tokio::test]
    async fn test_invalid_id_fails_before_network() {
        let mut config = Config::default();
        config.portal.base_url = "http://127.0.0.1:9".to_string();
        let client = AvClient::new("user", "secret", &config).unwrap();
        let err = client
            .get_wos("abc", OutFormat::Records, &FieldSelection::All)
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::InvalidAuthorId(_)));
    }
}
