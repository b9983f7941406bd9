//! Data-driven description of one portal source.

use crate::extract::FieldRule;

/// URL layout and row schema of one source.
///
/// The order of `fields` is the order of fields in every output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceSpec {
    /// Short key used on the command line and in the registry
    pub id: &'static str,
    /// Human-readable name
    pub name: &'static str,
    /// Path below the portal base, followed by `/<author id>`
    pub profile_path: &'static str,
    /// Value of the `view` query parameter
    pub view: &'static str,
    /// One extraction rule per output field
    pub fields: &'static [FieldRule],
}

impl SourceSpec {
    /// Field names in schema order
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> {
        self.fields.iter().map(|rule| rule.name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|rule| rule.name == name)
    }
}
