//! Page count discovery.

use scraper::Html;
use std::num::ParseIntError;

use crate::sources::SourceError;
use crate::utils::{first_text, parse_selector};

/// Where the portal renders its `Page <a> of <b> | ...` caption
pub const PAGINATION_CAPTION: &str =
    "div.col-md-12 > div:nth-of-type(2) > div:nth-of-type(2) > small";

/// Read the total number of pages from the first results page.
///
/// A missing caption, or one without a `Page <a> of <b>` part, means the
/// author has no records: the answer is 1 and the single page yields no rows.
/// A total that is present but not a number fails with `MalformedDocument`.
pub fn resolve_page_count(first_page: &Html, page_url: &str) -> Result<u32, SourceError> {
    let selector = parse_selector(PAGINATION_CAPTION)?;
    let caption = first_text(first_page.root_element(), &selector);

    let Some(caption) = caption else {
        tracing::warn!(url = page_url, "No pagination caption; assuming a single page");
        return Ok(1);
    };

    match parse_caption(&caption) {
        Ok(Some(total)) => Ok(total),
        Ok(None) => {
            tracing::warn!(
                url = page_url,
                caption = caption.trim(),
                "Caption has no page total; assuming a single page"
            );
            Ok(1)
        }
        Err(e) => Err(SourceError::MalformedDocument(format!(
            "{}: unreadable page total in \"{}\": {}",
            page_url,
            caption.trim(),
            e
        ))),
    }
}

/// Total page count from caption text such as `Page 1 of 12 | Total Records : 240`.
///
/// `Ok(None)` when the part before `|` has no `of`; a total of 0 counts as 1.
pub fn parse_caption(caption: &str) -> Result<Option<u32>, ParseIntError> {
    let head = caption.split('|').next().unwrap_or_default().replace("Page", "");
    let Some(total) = head.split("of").nth(1) else {
        return Ok(None);
    };
    let total: u32 = total.trim().parse()?;
    Ok(Some(total.max(1)))
}
