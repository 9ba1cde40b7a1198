//! Format registry
//!
//! Every output format implements [`Formatter`] and is looked up by name.

use crate::proust::ast::Unit;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Format '{0}' not found")]
    FormatNotFound(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Renders a run of sibling units (usually paragraphs) as one string.
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g. "sexpr", "json").
    fn name(&self) -> &str;

    fn serialize(&self, units: &[Unit<'_>]) -> Result<String, FormatError>;

    fn description(&self) -> &str {
        ""
    }
}

pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter, replacing any formatter of the same name.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    pub fn serialize(&self, units: &[Unit<'_>], format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(units)
    }

    /// Registered format names, sorted.
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(super::SExprFormatter);
        registry.register(super::JsonFormatter);
        registry.register(super::TreevizFormatter);
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proust::segmenting::segment;

    struct CountFormatter;
    impl Formatter for CountFormatter {
        fn name(&self) -> &str {
            "count"
        }
        fn serialize(&self, units: &[Unit<'_>]) -> Result<String, FormatError> {
            Ok(units.len().to_string())
        }
        fn description(&self) -> &str {
            "Number of units"
        }
    }

    #[test]
    fn test_registry_register() {
        let mut registry = FormatRegistry::new();
        registry.register(CountFormatter);

        assert!(registry.has("count"));
        assert_eq!(registry.list_formats(), vec!["count"]);
        assert_eq!(registry.get("count").unwrap().description(), "Number of units");
    }

    #[test]
    fn test_registry_serialize() {
        let mut registry = FormatRegistry::new();
        registry.register(CountFormatter);
        let tree = segment(&["Je vois.", "Il part."]);
        let paragraphs: Vec<_> = tree.paragraphs().collect();

        assert_eq!(registry.serialize(&paragraphs, "count").unwrap(), "2");
    }

    #[test]
    fn test_registry_serialize_not_found() {
        let registry = FormatRegistry::new();
        let tree = segment(&["Je vois."]);

        let err = registry.serialize(&[tree.root()], "yaml").unwrap_err();
        assert_eq!(err, FormatError::FormatNotFound("yaml".to_string()));
        assert_eq!(err.to_string(), "Format 'yaml' not found");
    }

    #[test]
    fn test_registry_replace_formatter() {
        let mut registry = FormatRegistry::new();
        registry.register(CountFormatter);
        registry.register(CountFormatter);

        assert_eq!(registry.list_formats().len(), 1);
    }

    #[test]
    fn test_registry_with_defaults() {
        let registry = FormatRegistry::default();
        assert_eq!(registry.list_formats(), vec!["json", "sexpr", "treeviz"]);
    }
}
