//! # sinta-av
//!
//! Scraper for the SINTA author verification portal. After logging in with
//! an operator account it reads an author's publications as listed for
//! Google Scholar, Scopus and Web of Science, and the author's registered
//! intellectual property (IPR).
//!
//! ## Architecture
//!
//! - [`session`]: login, cookies and page fetching with redirect classification
//! - [`extract`]: page count discovery and rule-driven row extraction
//! - [`sources`]: per-source rule tables, the registry and the shared pipeline
//! - [`projection`]: narrowing to requested fields as records or a column table
//! - [`client`]: the logged-in entry point tying the above together
//! - [`config`]: configuration management

pub mod client;
pub mod config;
pub mod extract;
pub mod models;
pub mod projection;
pub mod session;
pub mod sources;
pub mod utils;

// Re-export commonly used types
pub use client::AvClient;
pub use config::Config;
pub use models::{AuthorId, AuthorIds, FieldSelection, OutFormat, Output, Record, Table};
pub use sources::{SourceError, SourceRegistry};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
