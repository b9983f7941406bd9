//! Registry of the sources the portal exposes.

use std::collections::HashMap;

use super::{SourceError, SourceSpec, GOOGLE_SCHOLAR, IPR, SCOPUS, WOS};

/// Registry for all available portal sources
#[derive(Debug, Clone)]
pub struct SourceRegistry {
    sources: HashMap<String, &'static SourceSpec>,
}

impl SourceRegistry {
    /// Create a new registry with all built-in sources
    pub fn new() -> Self {
        let mut registry = Self {
            sources: HashMap::new(),
        };

        registry.register(&GOOGLE_SCHOLAR);
        registry.register(&SCOPUS);
        registry.register(&WOS);
        registry.register(&IPR);

        registry
    }

    /// Register a source under its id
    pub fn register(&mut self, spec: &'static SourceSpec) {
        self.sources.insert(spec.id.to_string(), spec);
    }

    /// Get a source by id (`gscholar` and `google_scholar` also name Google Scholar)
    pub fn get(&self, id: &str) -> Option<&'static SourceSpec> {
        let id = id.trim().to_ascii_lowercase();
        let id = match id.as_str() {
            "gscholar" | "google_scholar" => "google",
            other => other,
        };
        self.sources.get(id).copied()
    }

    /// Get a source by id, returning an error if not found
    pub fn get_required(&self, id: &str) -> Result<&'static SourceSpec, SourceError> {
        self.get(id).ok_or_else(|| {
            SourceError::InvalidParameter(format!(
                "unknown source '{}', expected one of: {}",
                id,
                self.ids().join(", ")
            ))
        })
    }

    /// All registered sources, ordered by id
    pub fn all(&self) -> Vec<&'static SourceSpec> {
        let mut specs: Vec<_> = self.sources.values().copied().collect();
        specs.sort_by_key(|spec| spec.id);
        specs
    }

    /// All source ids, sorted
    pub fn ids(&self) -> Vec<&'static str> {
        self.all().into_iter().map(|spec| spec.id).collect()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
