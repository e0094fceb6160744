use std::path::PathBuf;

use uuid::Uuid;

use crate::application::dto::GenerationRequest;
use crate::generation::domain::{PackageMetadata, SbomSpecification, Verbosity};
use crate::generation::services::{
    build_namespace_uri, require_existing, resolve_manifest_paths, validate_package_identifiers,
    ResolvedManifestPaths,
};
use crate::shared::error::SbomTaskError;

/// ResolvedGenerationRequest - the validated, fully resolved form of a
/// generation request handed to the engine.
///
/// Immutable once produced. Every field has passed validation; in
/// particular the namespace unique part is final and is embedded verbatim
/// into the manifest, and the manifest paths follow the fixed convention.
#[derive(Debug, Clone)]
pub struct ResolvedGenerationRequest {
    pub build_drop_path: PathBuf,
    pub build_component_path: Option<PathBuf>,
    pub metadata: PackageMetadata,
    /// Trimmed, validated namespace base URI
    pub namespace_base_uri: String,
    /// Final disambiguating GUID (supplied or generated)
    pub namespace_unique_part: Uuid,
    /// Full document namespace URI
    pub namespace_uri: String,
    pub external_document_list_file: Option<PathBuf>,
    /// Whether the override directory was supplied by the caller
    pub manifest_dir_overridden: bool,
    pub delete_manifest_dir_if_present: bool,
    pub fetch_license_information: bool,
    pub enable_package_metadata_parsing: bool,
    pub verbosity: Verbosity,
    pub specification: SbomSpecification,
    pub paths: ResolvedManifestPaths,
}

impl ResolvedGenerationRequest {
    /// Runs the resolution pipeline over a raw request.
    ///
    /// Order follows the request contract: identifiers, verbosity,
    /// namespace URI, manifest location, then auxiliary paths. The first
    /// failure short-circuits; nothing on disk is touched destructively.
    /// Returns the resolved request together with any non-fatal warnings
    /// (currently only verbosity fallback notices) for the caller's
    /// diagnostic channel.
    pub fn resolve(
        request: &GenerationRequest,
    ) -> Result<(Self, Vec<String>), SbomTaskError> {
        let mut warnings = Vec::new();

        validate_package_identifiers(
            &request.package_supplier,
            &request.package_name,
            &request.package_version,
        )?;

        let verbosity = Verbosity::resolve(request.verbosity.as_deref());
        if let Some(warning) = verbosity.warning {
            warnings.push(warning);
        }

        let namespace = build_namespace_uri(
            &request.namespace_base_uri,
            &request.package_name,
            &request.package_version,
            request.namespace_uri_unique_part.as_deref(),
        )?;

        let paths = resolve_manifest_paths(
            &request.build_drop_path,
            request.manifest_dir_path.as_deref(),
            &request.specification,
        )?;

        if let Some(component_path) = &request.build_component_path {
            require_existing("BuildComponentPath", component_path, |path| {
                SbomTaskError::BuildComponentPathNotFound { path }
            })?;
        }

        if let Some(list_file) = &request.external_document_list_file {
            require_existing("ExternalDocumentListFile", list_file, |path| {
                SbomTaskError::ExternalDocumentListFileNotFound { path }
            })?;
            if !list_file.is_file() {
                return Err(SbomTaskError::ExternalDocumentListFileNotFound {
                    path: list_file.clone(),
                });
            }
        }

        let resolved = Self {
            build_drop_path: request.build_drop_path.clone(),
            build_component_path: request.build_component_path.clone(),
            metadata: PackageMetadata::new(
                &request.package_supplier,
                &request.package_name,
                &request.package_version,
            ),
            namespace_base_uri: namespace.base_uri,
            namespace_unique_part: namespace.unique_part,
            namespace_uri: namespace.uri,
            external_document_list_file: request.external_document_list_file.clone(),
            manifest_dir_overridden: request.manifest_dir_path.is_some(),
            delete_manifest_dir_if_present: request.delete_manifest_dir_if_present,
            fetch_license_information: request.fetch_license_information,
            enable_package_metadata_parsing: request.enable_package_metadata_parsing,
            verbosity: verbosity.level,
            specification: request.specification.clone(),
            paths,
        };

        Ok((resolved, warnings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn valid_request(drop: &TempDir) -> GenerationRequest {
        GenerationRequest::builder()
            .build_drop_path(drop.path())
            .package_supplier("Contoso")
            .package_name("Widget")
            .package_version("1.0.0")
            .namespace_base_uri("https://ex.org")
            .build()
            .unwrap()
    }

    #[test]
    fn test_resolve_happy_path() {
        let drop = TempDir::new().unwrap();
        let request = valid_request(&drop);

        let (resolved, warnings) = ResolvedGenerationRequest::resolve(&request).unwrap();

        assert!(warnings.is_empty());
        assert_eq!(resolved.verbosity, Verbosity::Verbose);
        assert!(resolved
            .namespace_uri
            .starts_with("https://ex.org/Widget/1.0.0/"));
        assert_eq!(
            resolved.paths.manifest_file,
            drop.path()
                .join("_manifest")
                .join("spdx_2.2")
                .join("manifest.spdx.json")
        );
        assert!(!resolved.manifest_dir_overridden);
    }

    #[test]
    fn test_resolve_reports_verbosity_warning() {
        let drop = TempDir::new().unwrap();
        let mut request = valid_request(&drop);
        request.verbosity = Some("Invalid Verbosity".to_string());

        let (resolved, warnings) = ResolvedGenerationRequest::resolve(&request).unwrap();

        assert_eq!(resolved.verbosity, Verbosity::Verbose);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Invalid Verbosity"));
    }

    #[test]
    fn test_resolve_fails_on_empty_supplier_before_filesystem_checks() {
        let mut request = GenerationRequest::builder()
            .build_drop_path("/nonexistent")
            .package_supplier("Contoso")
            .package_name("Widget")
            .package_version("1.0.0")
            .namespace_base_uri("https://ex.org")
            .build()
            .unwrap();
        request.package_supplier = "   ".to_string();

        // Identifier failure wins even though the build drop is also bad.
        let err = ResolvedGenerationRequest::resolve(&request).unwrap_err();
        assert!(matches!(
            err,
            SbomTaskError::RequiredArgumentMissing {
                name: "PackageSupplier"
            }
        ));
    }

    #[test]
    fn test_resolve_fails_on_missing_component_path() {
        let drop = TempDir::new().unwrap();
        let mut request = valid_request(&drop);
        request.build_component_path = Some(drop.path().join("no-such-project"));

        let err = ResolvedGenerationRequest::resolve(&request).unwrap_err();
        assert!(matches!(
            err,
            SbomTaskError::BuildComponentPathNotFound { .. }
        ));
    }

    #[test]
    fn test_resolve_fails_on_missing_external_document_list_file() {
        let drop = TempDir::new().unwrap();
        let mut request = valid_request(&drop);
        request.external_document_list_file = Some(drop.path().join("no-such-list.txt"));

        let err = ResolvedGenerationRequest::resolve(&request).unwrap_err();
        assert!(matches!(
            err,
            SbomTaskError::ExternalDocumentListFileNotFound { .. }
        ));
    }

    #[test]
    fn test_resolve_preserves_supplied_unique_part() {
        let drop = TempDir::new().unwrap();
        let mut request = valid_request(&drop);
        request.namespace_uri_unique_part =
            Some("  3F2504E0-4F89-11D3-9A0C-0305E82C3301 ".to_string());

        let (resolved, _) = ResolvedGenerationRequest::resolve(&request).unwrap();
        assert_eq!(
            resolved.namespace_unique_part.to_string(),
            "3f2504e0-4f89-11d3-9a0c-0305e82c3301"
        );
        assert!(resolved
            .namespace_uri
            .ends_with("3f2504e0-4f89-11d3-9a0c-0305e82c3301"));
    }
}
