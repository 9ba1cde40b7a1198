//! Text matching for unit assertions

#[derive(Debug, Clone)]
pub enum TextMatch {
    Exact(String),
    StartsWith(String),
    Contains(String),
}

impl TextMatch {
    /// Panic with `context` in the message when `actual` does not match.
    pub fn assert(&self, actual: &str, context: &str) {
        match self {
            TextMatch::Exact(expected) => {
                assert_eq!(
                    actual, expected,
                    "{context}: expected text '{expected}', got '{actual}'"
                );
            }
            TextMatch::StartsWith(prefix) => {
                assert!(
                    actual.starts_with(prefix.as_str()),
                    "{context}: expected text starting with '{prefix}', got '{actual}'"
                );
            }
            TextMatch::Contains(needle) => {
                assert!(
                    actual.contains(needle.as_str()),
                    "{context}: expected text containing '{needle}', got '{actual}'"
                );
            }
        }
    }
}
