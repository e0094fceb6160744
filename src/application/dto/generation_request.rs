use std::path::PathBuf;

use crate::generation::domain::SbomSpecification;
use crate::shared::error::SbomTaskError;

/// GenerationRequest - raw task input for SBOM generation
///
/// Field values are carried exactly as supplied by the build system; all
/// normalization and validation happens once, when the request is resolved.
/// A request is never mutated after resolution.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// The built artifact directory the SBOM will describe
    pub build_drop_path: PathBuf,
    /// Optional hint for dependency/component metadata (e.g. a project file)
    pub build_component_path: Option<PathBuf>,
    /// Supplier of the package the SBOM represents
    pub package_supplier: String,
    /// Name of the package the SBOM represents
    pub package_name: String,
    /// Version of the package the SBOM represents
    pub package_version: String,
    /// Base of the SBOM document namespace URI
    pub namespace_base_uri: String,
    /// Optional GUID appended to the namespace; generated when absent
    pub namespace_uri_unique_part: Option<String>,
    /// Optional file listing external SBOMs to merge
    pub external_document_list_file: Option<PathBuf>,
    /// Optional manifest output directory; defaults to the build drop
    pub manifest_dir_path: Option<PathBuf>,
    /// Whether to remove previous manifest output before generating
    pub delete_manifest_dir_if_present: bool,
    /// Engine-side toggle: fetch licensing information for detected packages
    pub fetch_license_information: bool,
    /// Engine-side toggle: parse licensing/supplier data from package metadata
    pub enable_package_metadata_parsing: bool,
    /// Free-form verbosity token; resolved to a severity level later
    pub verbosity: Option<String>,
    /// SBOM format and version of the manifest to produce
    pub specification: SbomSpecification,
}

impl GenerationRequest {
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }
}

/// Builder for GenerationRequest.
///
/// `build` only checks that the five required fields were set at all;
/// emptiness and path validity are the resolution pipeline's concern so a
/// build system can construct a request before touching the filesystem.
#[derive(Debug, Default)]
pub struct GenerationRequestBuilder {
    build_drop_path: Option<PathBuf>,
    build_component_path: Option<PathBuf>,
    package_supplier: Option<String>,
    package_name: Option<String>,
    package_version: Option<String>,
    namespace_base_uri: Option<String>,
    namespace_uri_unique_part: Option<String>,
    external_document_list_file: Option<PathBuf>,
    manifest_dir_path: Option<PathBuf>,
    delete_manifest_dir_if_present: Option<bool>,
    fetch_license_information: bool,
    enable_package_metadata_parsing: bool,
    verbosity: Option<String>,
    specification: Option<SbomSpecification>,
}

impl GenerationRequestBuilder {
    pub fn build_drop_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.build_drop_path = Some(path.into());
        self
    }

    pub fn build_component_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.build_component_path = Some(path.into());
        self
    }

    pub fn package_supplier(mut self, supplier: impl Into<String>) -> Self {
        self.package_supplier = Some(supplier.into());
        self
    }

    pub fn package_name(mut self, name: impl Into<String>) -> Self {
        self.package_name = Some(name.into());
        self
    }

    pub fn package_version(mut self, version: impl Into<String>) -> Self {
        self.package_version = Some(version.into());
        self
    }

    pub fn namespace_base_uri(mut self, uri: impl Into<String>) -> Self {
        self.namespace_base_uri = Some(uri.into());
        self
    }

    pub fn namespace_uri_unique_part(mut self, part: impl Into<String>) -> Self {
        self.namespace_uri_unique_part = Some(part.into());
        self
    }

    pub fn external_document_list_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.external_document_list_file = Some(path.into());
        self
    }

    pub fn manifest_dir_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.manifest_dir_path = Some(path.into());
        self
    }

    pub fn delete_manifest_dir_if_present(mut self, delete: bool) -> Self {
        self.delete_manifest_dir_if_present = Some(delete);
        self
    }

    pub fn fetch_license_information(mut self, fetch: bool) -> Self {
        self.fetch_license_information = fetch;
        self
    }

    pub fn enable_package_metadata_parsing(mut self, enable: bool) -> Self {
        self.enable_package_metadata_parsing = enable;
        self
    }

    pub fn verbosity(mut self, verbosity: impl Into<String>) -> Self {
        self.verbosity = Some(verbosity.into());
        self
    }

    pub fn specification(mut self, specification: SbomSpecification) -> Self {
        self.specification = Some(specification);
        self
    }

    pub fn build(self) -> Result<GenerationRequest, SbomTaskError> {
        let build_drop_path = self
            .build_drop_path
            .ok_or(SbomTaskError::RequiredArgumentMissing {
                name: "BuildDropPath",
            })?;
        let package_supplier =
            self.package_supplier
                .ok_or(SbomTaskError::RequiredArgumentMissing {
                    name: "PackageSupplier",
                })?;
        let package_name = self
            .package_name
            .ok_or(SbomTaskError::RequiredArgumentMissing {
                name: "PackageName",
            })?;
        let package_version =
            self.package_version
                .ok_or(SbomTaskError::RequiredArgumentMissing {
                    name: "PackageVersion",
                })?;
        let namespace_base_uri =
            self.namespace_base_uri
                .ok_or(SbomTaskError::RequiredArgumentMissing {
                    name: "NamespaceBaseUri",
                })?;

        Ok(GenerationRequest {
            build_drop_path,
            build_component_path: self.build_component_path,
            package_supplier,
            package_name,
            package_version,
            namespace_base_uri,
            namespace_uri_unique_part: self.namespace_uri_unique_part,
            external_document_list_file: self.external_document_list_file,
            manifest_dir_path: self.manifest_dir_path,
            delete_manifest_dir_if_present: self.delete_manifest_dir_if_present.unwrap_or(true),
            fetch_license_information: self.fetch_license_information,
            enable_package_metadata_parsing: self.enable_package_metadata_parsing,
            verbosity: self.verbosity,
            specification: self.specification.unwrap_or_else(SbomSpecification::spdx_2_2),
        })
    }
}
