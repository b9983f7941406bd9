//! Core data models for author identifiers, scraped records and output shapes.

mod author;
mod output;
mod record;

pub use author::{AuthorId, AuthorIds};
pub use output::{FieldSelection, OutFormat, Output};
pub use record::{Column, Record, Table};
