use std::fs;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use sbom_task::application::dto::{
    ResolvedGenerationRequest, ValidationOutcome, ValidationRequest,
};
use sbom_task::generation::services::resolve_manifest_paths;
use sbom_task::ports::outbound::{EngineOutcome, ProgressReporter, SbomEngine};
use sbom_task::shared::Result;

/// MockEngine - stand-in for the external SBOM engine
///
/// On generate it records the resolved request and, unless configured to
/// fail, writes a minimal manifest document at the request's resolved
/// path, mirroring the real engine's side effect. On validate it checks
/// the manifest at the convention path parses as JSON and carries a
/// document namespace.
#[derive(Clone)]
pub struct MockEngine {
    fail_with: Option<Vec<String>>,
    pub generate_requests: Arc<Mutex<Vec<ResolvedGenerationRequest>>>,
    pub validate_requests: Arc<Mutex<Vec<ValidationRequest>>>,
}

impl MockEngine {
    pub fn new() -> Self {
        Self {
            fail_with: None,
            generate_requests: Arc::new(Mutex::new(Vec::new())),
            validate_requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_failure(diagnostics: Vec<String>) -> Self {
        Self {
            fail_with: Some(diagnostics),
            generate_requests: Arc::new(Mutex::new(Vec::new())),
            validate_requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn recorded_generate_requests(&self) -> Vec<ResolvedGenerationRequest> {
        self.generate_requests.lock().unwrap().clone()
    }

    fn write_manifest(request: &ResolvedGenerationRequest) -> Result<()> {
        fs::create_dir_all(&request.paths.spec_dir)?;
        let manifest = serde_json::json!({
            "spdxVersion": format!("SPDX-{}", request.specification.version()),
            "name": format!("{} {}", request.metadata.name, request.metadata.version),
            "documentNamespace": request.namespace_uri,
            "creationInfo": {
                "creators": [format!("Organization: {}", request.metadata.supplier)],
            },
        });
        fs::write(
            &request.paths.manifest_file,
            serde_json::to_string_pretty(&manifest)?,
        )?;
        Ok(())
    }
}

impl Default for MockEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SbomEngine for MockEngine {
    async fn generate(&self, request: &ResolvedGenerationRequest) -> Result<EngineOutcome> {
        self.generate_requests.lock().unwrap().push(request.clone());

        if let Some(diagnostics) = &self.fail_with {
            return Ok(EngineOutcome::failure(diagnostics.clone()));
        }

        Self::write_manifest(request)?;
        Ok(EngineOutcome::success(vec![
            "Generation complete".to_string()
        ]))
    }

    async fn validate(&self, request: &ValidationRequest) -> Result<ValidationOutcome> {
        self.validate_requests.lock().unwrap().push(request.clone());

        if let Some(diagnostics) = &self.fail_with {
            return Ok(ValidationOutcome::failure(diagnostics.clone()));
        }

        let paths = resolve_manifest_paths(
            &request.build_drop_path,
            Some(&request.manifest_root),
            &request.specification,
        )?;

        let mut diagnostics = Vec::new();
        match fs::read_to_string(&paths.manifest_file) {
            Ok(content) => match serde_json::from_str::<serde_json::Value>(&content) {
                Ok(document) => {
                    let namespace = document
                        .get("documentNamespace")
                        .and_then(|v| v.as_str())
                        .unwrap_or("");
                    if namespace.is_empty() {
                        diagnostics.push("Manifest has no document namespace".to_string());
                    }
                }
                Err(e) => diagnostics.push(format!("Manifest is not valid JSON: {}", e)),
            },
            Err(e) => diagnostics.push(format!("Manifest could not be read: {}", e)),
        }

        if diagnostics.is_empty() {
            Ok(ValidationOutcome::success())
        } else {
            Ok(ValidationOutcome::failure(diagnostics))
        }
    }
}

/// MockProgressReporter - records every diagnostic channel separately
#[derive(Clone, Default)]
pub struct MockProgressReporter {
    pub messages: Arc<Mutex<Vec<String>>>,
    pub warnings: Arc<Mutex<Vec<String>>>,
    pub errors: Arc<Mutex<Vec<String>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recorded_warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }

    pub fn recorded_messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn report_warning(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }

    fn report_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }

    fn engine_started(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn engine_finished(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
