//! The aggregate error returned when a payload breaks one or more order rules.

use std::collections::BTreeMap;
use thiserror::Error;

/// Every rule a payload violated, keyed by field path (`customer`, `items[0].pizza`, ...).
///
/// Paths are kept sorted so the rendered message is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error, serde::Serialize)]
#[error("{} violation(s){}", .violations.len(), render(.violations))]
pub struct ValidationError {
    violations: BTreeMap<String, String>,
}

impl ValidationError {
    /// Records a violation. A later reason for the same path replaces the earlier one.
    pub fn add(&mut self, path: impl Into<String>, reason: impl Into<String>) {
        self.violations.insert(path.into(), reason.into());
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn violations(&self) -> &BTreeMap<String, String> {
        &self.violations
    }

    pub fn reason(&self, path: &str) -> Option<&str> {
        self.violations.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.violations.contains_key(path)
    }
}

/// `: path reason; path reason` for every violation, or nothing when there are none.
fn render(violations: &BTreeMap<String, String>) -> String {
    violations
        .iter()
        .enumerate()
        .map(|(i, (path, reason))| {
            let sep = if i == 0 { ": " } else { "; " };
            format!("{}{} {}", sep, path, reason)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lists_paths_in_order() {
        let mut err = ValidationError::default();
        err.add("total", "is required");
        err.add("customer", "must not be empty");
        assert_eq!(
            err.to_string(),
            "2 violation(s): customer must not be empty; total is required"
        );
        assert_eq!(err.reason("total"), Some("is required"));
        assert!(!err.contains("address"));
    }

    #[test]
    fn test_is_a_std_error() {
        let err: Box<dyn std::error::Error + Send + Sync> = Box::new(ValidationError::default());
        assert_eq!(err.to_string(), "0 violation(s)");
        assert!(err.source().is_none());
    }
}
