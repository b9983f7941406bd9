//! Per-field extraction rules.
//!
//! A [`FieldRule`] says where a field lives inside one result row and how to
//! clean the raw text. Source adapters are tables of these rules.

use scraper::{ElementRef, Selector};

use crate::utils::{first_attr, first_text};

/// What to read from the matched element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// First direct text node
    Text,
    /// First value of the named attribute
    Attr(&'static str),
}

/// How to clean the raw value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clean {
    /// Trim surrounding whitespace
    Trim,
    /// Accept only text carrying this label, with the label removed.
    ///
    /// Some rows omit the author line and the next piece of metadata moves
    /// into its slot; without the label the slot holds something else.
    Label(&'static str),
    /// Trim, then keep only the last `n` characters
    LastChars(usize),
}

impl Clean {
    /// Apply the rule; `None` means the value is treated as missing
    pub fn apply(&self, raw: &str) -> Option<String> {
        match *self {
            Clean::Trim => Some(raw.trim().to_string()),
            Clean::Label(label) => raw
                .contains(label)
                .then(|| raw.replace(label, "").trim().to_string()),
            Clean::LastChars(n) => {
                let trimmed = raw.trim();
                let len = trimmed.chars().count();
                Some(trimmed.chars().skip(len.saturating_sub(n)).collect())
            }
        }
    }
}

/// Location and cleaning of one field inside a result row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    /// Output field name
    pub name: &'static str,
    /// CSS selector, evaluated inside the row
    pub selector: &'static str,
    pub target: Target,
    pub clean: Clean,
}

impl FieldRule {
    /// Trimmed text of the first match
    pub const fn text(name: &'static str, selector: &'static str) -> Self {
        Self {
            name,
            selector,
            target: Target::Text,
            clean: Clean::Trim,
        }
    }

    /// Trimmed `href` of the first match
    pub const fn href(name: &'static str, selector: &'static str) -> Self {
        Self {
            name,
            selector,
            target: Target::Attr("href"),
            clean: Clean::Trim,
        }
    }

    /// Text of the first match, only if it carries `label`
    pub const fn labelled(name: &'static str, selector: &'static str, label: &'static str) -> Self {
        Self {
            name,
            selector,
            target: Target::Text,
            clean: Clean::Label(label),
        }
    }

    /// Last `n` characters of the trimmed text of the first match
    pub const fn last_chars(name: &'static str, selector: &'static str, n: usize) -> Self {
        Self {
            name,
            selector,
            target: Target::Text,
            clean: Clean::LastChars(n),
        }
    }

    /// Extract this field from one row; `None` when the markup is absent or rejected
    pub fn extract(&self, row: ElementRef<'_>, selector: &Selector) -> Option<String> {
        let raw = match self.target {
            Target::Text => first_text(row, selector),
            Target::Attr(attr) => first_attr(row, selector, attr),
        }?;
        self.clean.apply(&raw)
    }
}
