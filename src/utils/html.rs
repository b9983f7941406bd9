//! Small lookups over parsed HTML.

use scraper::{ElementRef, Selector};

use crate::sources::SourceError;

/// Parse a CSS selector, returning a [`SourceError`] on failure
pub fn parse_selector(selector: &str) -> Result<Selector, SourceError> {
    Selector::parse(selector)
        .map_err(|e| SourceError::Parse(format!("invalid CSS selector '{}': {}", selector, e)))
}

/// First direct text node among the elements matching `selector` under `scope`.
///
/// Elements are visited in document order and only their own text children
/// are considered, so text belonging to nested markup is skipped. Returns
/// `None` when no matching element carries text.
pub fn first_text(scope: ElementRef<'_>, selector: &Selector) -> Option<String> {
    scope
        .select(selector)
        .flat_map(|el| {
            el.children()
                .filter_map(|node| node.value().as_text().map(|text| (**text).to_string()))
        })
        .next()
}

/// First value of `attr` among the elements matching `selector` under `scope`
pub fn first_attr(scope: ElementRef<'_>, selector: &Selector, attr: &str) -> Option<String> {
    scope
        .select(selector)
        .find_map(|el| el.value().attr(attr))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    const ROW: &str = r#"
        <table><tr id="row">
            <td><a href="/one">First <b>bold</b></a><a href="/two">Second</a></td>
            <td><span><b>nested only</b></span><small>Tail</small></td>
        </tr></table>
    "#;

    fn row(doc: &Html) -> ElementRef<'_> {
        doc.select(&parse_selector("#row").unwrap()).next().unwrap()
    }

    #[test]
    fn test_first_text_takes_first_direct_text() {
        let doc = Html::parse_document(ROW);
        let a = parse_selector("a").unwrap();
        assert_eq!(first_text(row(&doc), &a).as_deref(), Some("First "));
    }

    #[test]
    fn test_first_text_skips_elements_without_text() {
        let doc = Html::parse_document(ROW);
        let sel = parse_selector("span, small").unwrap();
        assert_eq!(first_text(row(&doc), &sel).as_deref(), Some("Tail"));
    }

    #[test]
    fn test_first_text_missing() {
        let doc = Html::parse_document(ROW);
        let sel = parse_selector("strong").unwrap();
        assert_eq!(first_text(row(&doc), &sel), None);
    }

    #[test]
    fn test_first_attr() {
        let doc = Html::parse_document(ROW);
        let a = parse_selector("a").unwrap();
        assert_eq!(first_attr(row(&doc), &a, "href").as_deref(), Some("/one"));
        assert_eq!(first_attr(row(&doc), &a, "title"), None);
    }

    #[test]
    fn test_invalid_selector() {
        assert!(matches!(parse_selector("td[["), Err(SourceError::Parse(_))));
    }
}
