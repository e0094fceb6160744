use crate::application::dto::{ValidationOutcome, ValidationRequest};
use crate::generation::services::resolve_manifest_paths;
use crate::ports::outbound::{ProgressReporter, SbomEngine};
use crate::shared::Result;

/// ValidateManifestUseCase - the validation orchestrator
///
/// Locates the manifest through the fixed path convention, invokes the
/// engine's validate capability, and returns aggregated diagnostics.
/// Discrepancies are collected, not raised one at a time, so a caller can
/// report every mismatch found.
pub struct ValidateManifestUseCase<E, PR> {
    engine: E,
    progress_reporter: PR,
}

impl<E, PR> ValidateManifestUseCase<E, PR>
where
    E: SbomEngine,
    PR: ProgressReporter,
{
    pub fn new(engine: E, progress_reporter: PR) -> Self {
        Self {
            engine,
            progress_reporter,
        }
    }

    /// Executes the validation workflow.
    ///
    /// # Errors
    /// Only for request-shape problems (bad paths) or infrastructure
    /// faults; a manifest that fails validation yields `Ok` with a
    /// non-success outcome.
    pub async fn execute(&self, request: ValidationRequest) -> Result<ValidationOutcome> {
        let paths = resolve_manifest_paths(
            &request.build_drop_path,
            Some(&request.manifest_root),
            &request.specification,
        )?;

        let mut outcome = ValidationOutcome::success();

        // Structural pre-check: the manifest must sit at the convention path.
        if !paths.manifest_file.is_file() {
            outcome.merge(ValidationOutcome::failure(vec![format!(
                "Manifest not found at expected location: {}",
                paths.manifest_file.display()
            )]));
        }

        self.progress_reporter.engine_started(&format!(
            "🔍 Validating {} manifest in {}",
            request.specification,
            paths.manifest_dir.display()
        ));
        let engine_outcome = self.engine.validate(&request).await?;
        self.progress_reporter.engine_finished("Validator finished");

        outcome.merge(engine_outcome);

        if outcome.is_success {
            self.progress_reporter
                .report("✅ Manifest validation passed");
        } else {
            for diagnostic in &outcome.diagnostics {
                self.progress_reporter.report_error(diagnostic);
            }
        }

        Ok(outcome)
    }
}
