use async_trait::async_trait;

use crate::application::dto::{ResolvedGenerationRequest, ValidationOutcome, ValidationRequest};
use crate::shared::Result;

/// Result of an engine invocation.
///
/// Diagnostics carry the engine's output verbatim (both streams for an
/// out-of-process engine) so failures can be surfaced to the caller's
/// logging channel without loss.
#[derive(Debug, Clone, Default)]
pub struct EngineOutcome {
    pub is_success: bool,
    pub diagnostics: Vec<String>,
}

impl EngineOutcome {
    pub fn success(diagnostics: Vec<String>) -> Self {
        Self {
            is_success: true,
            diagnostics,
        }
    }

    pub fn failure(diagnostics: Vec<String>) -> Self {
        Self {
            is_success: false,
            diagnostics,
        }
    }
}

/// SbomEngine port - the external generation/validation engine
///
/// The engine that scans files, computes hashes, and assembles the SPDX
/// document is an opaque collaborator behind this two-capability
/// interface. Any implementation (an in-process library call or a spawned
/// executable) can satisfy it interchangeably.
///
/// # Errors
/// Implementations return `Err` only for infrastructure faults (the engine
/// could not be invoked at all); an engine that runs and reports failure
/// yields `Ok` with a non-success outcome.
#[async_trait]
pub trait SbomEngine: Send + Sync {
    /// Generates an SBOM manifest for the resolved request.
    ///
    /// The engine writes the manifest under the request's resolved paths;
    /// the orchestrator does not re-derive the location from engine output.
    async fn generate(&self, request: &ResolvedGenerationRequest) -> Result<EngineOutcome>;

    /// Validates a previously generated manifest against the build drop.
    async fn validate(&self, request: &ValidationRequest) -> Result<ValidationOutcome>;
}
