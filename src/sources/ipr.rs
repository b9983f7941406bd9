//! Intellectual property (patent) records of an author.

use super::SourceSpec;
use crate::extract::FieldRule;

/// IPR registry view; served from its own profile path
pub const IPR: SourceSpec = SourceSpec {
    id: "ipr",
    name: "Intellectual Property Rights",
    profile_path: "authorverification/author/ipr",
    view: "ipr",
    fields: &[
        FieldRule::text("title", "a"),
        FieldRule::text("application_no", "td:nth-of-type(3) strong:nth-of-type(1)"),
        FieldRule::labelled(
            "inventor",
            "td.text-lg-nowrap.text-nowrap small:nth-of-type(1)",
            "Inventor :",
        ),
        FieldRule::labelled(
            "patent_holder",
            "td.text-lg-nowrap.text-nowrap small:nth-of-type(2)",
            "Patent Holder :",
        ),
        FieldRule::text("category", "td:nth-of-type(1) > div"),
        FieldRule::text("year", "td:nth-of-type(3) strong:nth-of-type(2)"),
        FieldRule::text("status", "td:nth-of-type(4) strong"),
    ],
};
