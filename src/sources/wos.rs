//! Web of Science publications of an author.

use super::SourceSpec;
use crate::extract::FieldRule;

/// Web of Science view of the author profile.
///
/// The year cell may carry qualifier text before the year, so only its last
/// four characters are kept.
pub const WOS: SourceSpec = SourceSpec {
    id: "wos",
    name: "Web of Science",
    profile_path: "authorverification/author/profile",
    view: "wos",
    fields: &[
        FieldRule::text("title", "a"),
        FieldRule::labelled(
            "author",
            "td.text-lg-nowrap.text-nowrap small:nth-of-type(1)",
            "Authors :",
        ),
        FieldRule::text("journal", "td.text-lg-nowrap.text-nowrap small:nth-of-type(2)"),
        FieldRule::last_chars("year", "td:nth-of-type(3) strong", 4),
        FieldRule::text("citations", "td:nth-of-type(4) strong"),
        FieldRule::text("quartile", "td:nth-of-type(1) > div"),
        FieldRule::href("url", "a"),
    ],
};
