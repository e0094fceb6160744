use std::path::PathBuf;
use std::process::Stdio;

use anyhow::Context;
use async_trait::async_trait;
use tokio::process::Command;

use crate::application::dto::{ResolvedGenerationRequest, ValidationOutcome, ValidationRequest};
use crate::ports::outbound::{EngineOutcome, SbomEngine};
use crate::shared::Result;

/// SbomToolEngine - out-of-process SBOM engine adapter
///
/// Spawns an external SBOM tool executable and encodes every resolved
/// request field into a deterministic `/Name:value` argument vector.
/// Optional fields are omitted entirely rather than passed empty, and
/// booleans serialize as literal `true`/`false`.
pub struct SbomToolEngine {
    tool_path: PathBuf,
}

impl SbomToolEngine {
    pub fn new(tool_path: PathBuf) -> Self {
        Self { tool_path }
    }

    /// Builds the argument vector for the `generate` verb.
    ///
    /// Order is fixed: required fields first, then optional paths, then
    /// the engine toggles. One token per argument; no shell is involved,
    /// so values are passed through unquoted and verbatim.
    pub fn generate_args(request: &ResolvedGenerationRequest) -> Vec<String> {
        let mut args = vec![
            "generate".to_string(),
            format!("/BuildDropPath:{}", request.build_drop_path.display()),
            format!("/PackageSupplier:{}", request.metadata.supplier),
            format!("/PackageName:{}", request.metadata.name),
            format!("/PackageVersion:{}", request.metadata.version),
            format!("/NamespaceUriBase:{}", request.namespace_base_uri),
            format!("/NamespaceUriUniquePart:{}", request.namespace_unique_part),
        ];

        if let Some(component_path) = &request.build_component_path {
            args.push(format!("/BuildComponentPath:{}", component_path.display()));
        }
        if let Some(list_file) = &request.external_document_list_file {
            args.push(format!("/ExternalDocumentListFile:{}", list_file.display()));
        }

        args.push(format!(
            "/FetchLicenseInformation:{}",
            request.fetch_license_information
        ));
        args.push(format!(
            "/EnablePackageMetadataParsing:{}",
            request.enable_package_metadata_parsing
        ));
        args.push(format!("/Verbosity:{}", request.verbosity));
        args.push(format!("/ManifestInfo:{}", request.specification));
        args.push(format!(
            "/DeleteManifestDirIfPresent:{}",
            request.delete_manifest_dir_if_present
        ));

        if request.manifest_dir_overridden {
            args.push(format!(
                "/ManifestDirPath:{}",
                request.paths.manifest_root.display()
            ));
        }

        args
    }

    /// Builds the argument vector for the `validate` verb.
    pub fn validate_args(request: &ValidationRequest) -> Vec<String> {
        let mut args = vec![
            "validate".to_string(),
            format!("/BuildDropPath:{}", request.build_drop_path.display()),
            format!("/ManifestDirPath:{}", request.manifest_root.display()),
            format!("/ManifestInfo:{}", request.specification),
        ];
        if let Some(output_path) = &request.output_path {
            args.push(format!("/OutputPath:{}", output_path.display()));
        }
        args
    }

    /// Runs the tool and captures both streams.
    ///
    /// `output()` drains stdout and stderr concurrently, so a chatty
    /// engine can never deadlock on a full pipe buffer, and the child's
    /// lifetime is fully awaited. `kill_on_drop` terminates the child if
    /// the caller abandons the request mid-flight.
    async fn run(&self, args: Vec<String>) -> Result<(bool, Vec<String>)> {
        let output = Command::new(&self.tool_path)
            .args(&args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .with_context(|| {
                format!("Failed to launch SBOM tool '{}'", self.tool_path.display())
            })?;

        let mut diagnostics = Vec::new();
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stdout.trim().is_empty() {
            diagnostics.push(stdout.trim_end().to_string());
        }
        if !stderr.trim().is_empty() {
            diagnostics.push(stderr.trim_end().to_string());
        }

        Ok((output.status.success(), diagnostics))
    }
}

#[async_trait]
impl SbomEngine for SbomToolEngine {
    async fn generate(&self, request: &ResolvedGenerationRequest) -> Result<EngineOutcome> {
        let (succeeded, diagnostics) = self.run(Self::generate_args(request)).await?;
        if succeeded {
            Ok(EngineOutcome::success(diagnostics))
        } else {
            Ok(EngineOutcome::failure(diagnostics))
        }
    }

    async fn validate(&self, request: &ValidationRequest) -> Result<ValidationOutcome> {
        let (succeeded, diagnostics) = self.run(Self::validate_args(request)).await?;
        if succeeded {
            Ok(ValidationOutcome {
                is_success: true,
                diagnostics,
            })
        } else {
            Ok(ValidationOutcome::failure(diagnostics))
        }
    }
}
