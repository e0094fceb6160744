use crate::application::dto::{GenerationRequest, GenerationResponse, ResolvedGenerationRequest};
use crate::generation::services::clear_previous_manifest;
use crate::ports::outbound::{ProgressReporter, SbomEngine};
use crate::shared::error::SbomTaskError;
use crate::shared::Result;

/// GenerateManifestUseCase - the generation orchestrator
///
/// Resolves a raw generation request, then hands it to the SBOM engine and
/// maps the outcome. All validation completes before anything destructive
/// happens on disk, so a malformed request never produces partial manifest
/// output.
///
/// # Type Parameters
/// * `E` - SbomEngine implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateManifestUseCase<E, PR> {
    engine: E,
    progress_reporter: PR,
}

impl<E, PR> GenerateManifestUseCase<E, PR>
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

    /// Executes the generation workflow.
    ///
    /// # Returns
    /// The manifest path computed during resolution (not re-derived from
    /// engine output), plus the resolved namespace URI.
    ///
    /// # Errors
    /// Any resolution failure from the request pipeline, or
    /// `GenerationFailed` carrying the engine's diagnostics verbatim.
    pub async fn execute(&self, request: GenerationRequest) -> Result<GenerationResponse> {
        // Step 1: resolve and validate everything up front.
        let resolved = self.resolve_and_report(&request)?;

        // Step 2: destructive cleanup, only now that the request is known good
        // and the engine is about to run.
        if resolved.delete_manifest_dir_if_present {
            let removed = clear_previous_manifest(&resolved.paths)?;
            if removed {
                self.progress_reporter.report(&format!(
                    "🧹 Removed previous manifest output: {}",
                    resolved.paths.manifest_dir.display()
                ));
            }
        }

        // Step 3: hand off to the engine and await full completion.
        self.progress_reporter.engine_started(&format!(
            "⚙️  Generating {} manifest for {}",
            resolved.specification,
            resolved.build_drop_path.display()
        ));
        let outcome = self.engine.generate(&resolved).await?;
        self.progress_reporter.engine_finished("Engine finished");

        // Step 4: map the outcome.
        if !outcome.is_success {
            return Err(SbomTaskError::GenerationFailed {
                details: outcome.diagnostics.join("\n"),
            }
            .into());
        }

        for line in &outcome.diagnostics {
            self.progress_reporter.report(line);
        }
        self.progress_reporter.report(&format!(
            "✅ SBOM generated: {}",
            resolved.paths.manifest_file.display()
        ));

        Ok(GenerationResponse::new(
            resolved.paths.manifest_file.clone(),
            resolved.namespace_uri.clone(),
            resolved.namespace_unique_part,
        ))
    }

    fn resolve_and_report(
        &self,
        request: &GenerationRequest,
    ) -> Result<ResolvedGenerationRequest> {
        self.progress_reporter.report(&format!(
            "📋 Resolving generation request for: {}",
            request.build_drop_path.display()
        ));

        let (resolved, warnings) = ResolvedGenerationRequest::resolve(request)?;
        for warning in warnings {
            self.progress_reporter.report_warning(&warning);
        }

        self.progress_reporter.report(&format!(
            "🔗 Document namespace: {}",
            resolved.namespace_uri
        ));

        Ok(resolved)
    }
}
