//! Structural extraction from rendered portal pages.
//!
//! - [`resolve_page_count`] reads how many result pages an author has
//! - [`extract_rows`] turns one page into column data using a table of [`FieldRule`]s
//!
//! Label guessing (accepting an author line only if it carries its label) lives
//! entirely in [`Clean::Label`], so it can change without touching pagination
//! or projection.

mod pagination;
mod rows;
mod rules;

pub use pagination::{parse_caption, resolve_page_count, PAGINATION_CAPTION};
pub use rows::{extract_rows, RESULT_ROWS};
pub use rules::{Clean, FieldRule, Target};
