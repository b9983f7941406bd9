//! Output shapes and field selection.

use serde::Serialize;
use std::str::FromStr;

use super::{Record, Table};
use crate::sources::SourceError;

/// The shape of the value handed back to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutFormat {
    /// One field→value mapping per row ("json" in the portal tooling)
    #[default]
    Records,
    /// One field→values mapping for the whole result ("csv" in the portal tooling)
    Table,
}

impl FromStr for OutFormat {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "records" | "json" => Ok(OutFormat::Records),
            "table" | "csv" => Ok(OutFormat::Table),
            other => Err(SourceError::InvalidParameter(format!(
                "output format must be one of \"records\" (\"json\") or \"table\" (\"csv\"), got \"{}\"",
                other
            ))),
        }
    }
}

impl std::fmt::Display for OutFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutFormat::Records => write!(f, "records"),
            OutFormat::Table => write!(f, "table"),
        }
    }
}

/// Which fields to keep in the output.
///
/// Names that the source does not know are ignored rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldSelection {
    /// Every field the source supports (`*`)
    #[default]
    All,
    /// Only the named fields
    Only(Vec<String>),
}

impl FieldSelection {
    /// Build a selection from a list of names; `*` anywhere in the list selects everything
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut only = Vec::new();
        for name in names {
            let name = name.as_ref().trim();
            if name == "*" {
                return FieldSelection::All;
            }
            if !name.is_empty() && !only.iter().any(|n| n == name) {
                only.push(name.to_string());
            }
        }
        FieldSelection::Only(only)
    }

    /// Whether the named field is part of this selection
    pub fn includes(&self, name: &str) -> bool {
        match self {
            FieldSelection::All => true,
            FieldSelection::Only(names) => names.iter().any(|n| n == name),
        }
    }
}

impl FromStr for FieldSelection {
    type Err = SourceError;

    /// Parse a comma-separated list such as `title,author` or `*`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(FieldSelection::from_names(s.split(',')))
    }
}

/// Projected result in one of the two output shapes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Output {
    Records(Vec<Record>),
    Table(Table),
}

impl Output {
    pub fn format(&self) -> OutFormat {
        match self {
            Output::Records(_) => OutFormat::Records,
            Output::Table(_) => OutFormat::Table,
        }
    }

    /// Number of rows carried by this output
    pub fn len(&self) -> usize {
        match self {
            Output::Records(records) => records.len(),
            Output::Table(table) => table.row_count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Narrow the output to `selection`, keeping its shape
    pub fn select(&self, selection: &FieldSelection) -> Output {
        match self {
            Output::Records(records) => {
                Output::Records(records.iter().map(|r| r.select(selection)).collect())
            }
            Output::Table(table) => Output::Table(table.select(selection)),
        }
    }

    /// Convert into records, transposing a table if needed
    pub fn into_records(self) -> Vec<Record> {
        match self {
            Output::Records(records) => records,
            Output::Table(table) => table.to_records(),
        }
    }

    /// Convert into a table, transposing records if needed
    pub fn into_table(self) -> Table {
        match self {
            Output::Records(records) => Table::from_records(&records),
            Output::Table(table) => table,
        }
    }
}
