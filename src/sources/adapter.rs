//! The scrape pipeline shared by every source.

use tracing::{debug, info};

use super::{SourceError, SourceSpec};
use crate::extract::{extract_rows, resolve_page_count};
use crate::models::{AuthorId, AuthorIds, FieldSelection, OutFormat, Output, Table};
use crate::projection::{project, project_records};
use crate::session::{PageFetcher, Portal};

/// Runs one [`SourceSpec`] against the portal through a [`PageFetcher`].
#[derive(Debug, Clone, Copy)]
pub struct SourceAdapter<'a> {
    spec: &'static SourceSpec,
    fetcher: &'a dyn PageFetcher,
    portal: &'a Portal,
}

impl<'a> SourceAdapter<'a> {
    pub fn new(spec: &'static SourceSpec, fetcher: &'a dyn PageFetcher, portal: &'a Portal) -> Self {
        Self {
            spec,
            fetcher,
            portal,
        }
    }

    pub fn spec(&self) -> &'static SourceSpec {
        self.spec
    }

    /// Scrape every page of one author into a table with the source's schema.
    ///
    /// The bare author URL serves as page 1 and tells how many pages exist;
    /// pages 2 and up are requested with an explicit `page` parameter.
    pub async fn scrape(&self, author_id: &AuthorId) -> Result<Table, SourceError> {
        let author_url = self.portal.author_url(self.spec, author_id)?;
        let mut table = Table::with_columns(self.spec.field_names());

        let first = self.fetcher.fetch(&author_url, 1, author_id.as_str()).await?;
        let page_count = {
            let document = first.document();
            let count = resolve_page_count(&document, first.url.as_str())?;
            let rows = extract_rows(self.spec.fields, &document, first.url.as_str())?;
            debug!(page = first.index, rows = rows.row_count(), "page extracted");
            table.extend(rows);
            count
        };

        info!(
            source = self.spec.id,
            author = %author_id,
            pages = page_count,
            "Scraping author"
        );

        for index in 2..=page_count {
            let url = Portal::page_url(&author_url, index)?;
            let page = self.fetcher.fetch(&url, index, author_id.as_str()).await?;
            let rows = extract_rows(self.spec.fields, &page.document(), page.url.as_str())?;
            debug!(page = page.index, rows = rows.row_count(), "page extracted");
            table.extend(rows);
        }

        info!(
            source = self.spec.id,
            author = %author_id,
            rows = table.row_count(),
            "Scrape complete"
        );

        Ok(table)
    }

    /// Scrape one author or a batch and project the result.
    ///
    /// Every identifier is validated before the first request. A single
    /// author honours `format`; a batch is always records, concatenated in
    /// input order, and stops at the first failing author.
    pub async fn get(
        &self,
        ids: impl Into<AuthorIds>,
        format: OutFormat,
        fields: &FieldSelection,
    ) -> Result<Output, SourceError> {
        let ids = ids.into();
        let authors = ids.validate()?;

        if let (false, [author]) = (ids.is_batch(), authors.as_slice()) {
            let table = self.scrape(author).await?;
            return Ok(project(&table, fields, format));
        }

        if format != OutFormat::Records {
            debug!(%format, "batch results are always records");
        }

        let mut records = Vec::new();
        for author in &authors {
            let table = self.scrape(author).await?;
            records.extend(project_records(&table, fields));
        }
        Ok(Output::Records(records))
    }
}
