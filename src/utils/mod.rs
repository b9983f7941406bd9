//! Utility modules shared by the session and the extractors.
//!
//! - [`HttpClient`]: cookie-keeping HTTP client built from [`HttpConfig`](crate::config::HttpConfig)
//! - [`parse_selector`], [`first_text`], [`first_attr`]: small helpers over `scraper`
//!   that mirror "first text node" / "first attribute" lookups inside one element

mod html;
mod http;

pub use html::{first_attr, first_text, parse_selector};
pub use http::HttpClient;
