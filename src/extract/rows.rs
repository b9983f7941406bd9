//! Row extraction from one results page.

use scraper::Html;

use super::FieldRule;
use crate::models::Table;
use crate::sources::SourceError;
use crate::utils::parse_selector;

/// Result rows on every author page
pub const RESULT_ROWS: &str = "div.table-responsive > table.table tr";

/// Extract one value per rule for every result row on the page.
///
/// Each field is looked up independently: a field whose markup is missing in
/// a row becomes an empty string and the rest of the row is still read. Rows
/// without any `td` (table headers) are not records.
///
/// The returned table's columns are checked for equal length; a mismatch
/// means rows and fields can no longer be lined up and fails the whole page.
pub fn extract_rows(
    rules: &[FieldRule],
    document: &Html,
    page_url: &str,
) -> Result<Table, SourceError> {
    let row_selector = parse_selector(RESULT_ROWS)?;
    let cell_selector = parse_selector("td")?;
    let compiled = rules
        .iter()
        .map(|rule| Ok((rule, parse_selector(rule.selector)?)))
        .collect::<Result<Vec<_>, SourceError>>()?;

    let mut table = Table::with_columns(rules.iter().map(|rule| rule.name));

    for row in document.select(&row_selector) {
        if row.select(&cell_selector).next().is_none() {
            continue;
        }
        for (rule, selector) in &compiled {
            let value = rule.extract(row, selector).unwrap_or_default();
            table.column_mut(rule.name).push(value);
        }
    }

    let lengths = table.column_lengths();
    tracing::debug!(url = page_url, ?lengths, "extracted columns");

    if !table.is_aligned() {
        return Err(SourceError::MalformedDocument(format!(
            "{}: column lengths differ {:?}",
            page_url, lengths
        )));
    }

    Ok(table)
}
