use std::path::PathBuf;

use crate::generation::domain::SbomSpecification;

/// ValidationRequest - input for post-hoc manifest validation
#[derive(Debug, Clone)]
pub struct ValidationRequest {
    /// The original build drop directory the manifest describes
    pub build_drop_path: PathBuf,
    /// Manifest root to validate; the manifest is located under it via the
    /// fixed `_manifest/<spec>_<version>` convention
    pub manifest_root: PathBuf,
    /// Optional path where the validator writes its findings report
    pub output_path: Option<PathBuf>,
    /// SBOM format and version the manifest is expected to conform to
    pub specification: SbomSpecification,
}

/// ValidationOutcome - aggregated result of manifest validation
///
/// Diagnostics are ordered and complete: validation collects every
/// discrepancy found rather than stopping at the first mismatch.
#[derive(Debug, Clone, Default)]
pub struct ValidationOutcome {
    pub is_success: bool,
    pub diagnostics: Vec<String>,
}

impl ValidationOutcome {
    pub fn success() -> Self {
        Self {
            is_success: true,
            diagnostics: Vec::new(),
        }
    }

    pub fn failure(diagnostics: Vec<String>) -> Self {
        Self {
            is_success: false,
            diagnostics,
        }
    }

    /// Merges another outcome into this one, preserving diagnostic order.
    pub fn merge(&mut self, other: ValidationOutcome) {
        self.is_success = self.is_success && other.is_success;
        self.diagnostics.extend(other.diagnostics);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_outcome() {
        let outcome = ValidationOutcome::success();
        assert!(outcome.is_success);
        assert!(outcome.diagnostics.is_empty());
    }

    #[test]
    fn test_merge_preserves_order_and_failure() {
        let mut outcome = ValidationOutcome::success();
        outcome.merge(ValidationOutcome::failure(vec!["first".to_string()]));
        outcome.merge(ValidationOutcome::failure(vec!["second".to_string()]));

        assert!(!outcome.is_success);
        assert_eq!(outcome.diagnostics, vec!["first", "second"]);
    }

    #[test]
    fn test_merge_success_into_failure_stays_failed() {
        let mut outcome = ValidationOutcome::failure(vec!["mismatch".to_string()]);
        outcome.merge(ValidationOutcome::success());
        assert!(!outcome.is_success);
        assert_eq!(outcome.diagnostics, vec!["mismatch"]);
    }
}
