//! Scopus publications of an author, with document type and journal quartile.

use super::SourceSpec;
use crate::extract::FieldRule;

/// Scopus view of the author profile
pub const SCOPUS: SourceSpec = SourceSpec {
    id: "scopus",
    name: "Scopus",
    profile_path: "authorverification/author/profile",
    view: "scopus",
    fields: &[
        FieldRule::text("title", "a"),
        FieldRule::labelled(
            "author",
            "td.text-lg-nowrap.text-nowrap small:nth-of-type(1)",
            "Creator :",
        ),
        FieldRule::text("journal", "td.text-lg-nowrap.text-nowrap small:nth-of-type(2)"),
        FieldRule::text("type", "td:nth-of-type(3) strong:nth-of-type(1)"),
        FieldRule::text("year", "td:nth-of-type(3) strong:nth-of-type(2)"),
        FieldRule::text("citations", "td:nth-of-type(4) strong"),
        FieldRule::text("quartile", "td:nth-of-type(1) > div"),
        FieldRule::href("url", "a"),
    ],
};
