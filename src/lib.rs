//! sbom-task - SBOM generation build task for build drop directories
//!
//! This library assembles, validates, and dispatches SBOM generation
//! requests for a built artifact directory, delegating the actual document
//! assembly to an external engine behind a narrow two-capability port.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`generation`): request identifiers, namespace URIs,
//!   verbosity, and the manifest path convention
//! - **Application Layer** (`application`): use cases and request/response DTOs
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): concrete implementations of ports
//! - **Shared** (`shared`): common error types and result alias
//!
//! # Example
//!
//! ```no_run
//! use sbom_task::prelude::*;
//! use std::path::PathBuf;
//!
//! # async fn run() -> Result<()> {
//! let engine = SbomToolEngine::new(PathBuf::from("/usr/local/bin/sbom-tool"));
//! let progress_reporter = StderrProgressReporter::new();
//! let use_case = GenerateManifestUseCase::new(engine, progress_reporter);
//!
//! let request = GenerationRequest::builder()
//!     .build_drop_path("/builds/widget/drop")
//!     .package_supplier("Contoso")
//!     .package_name("Widget")
//!     .package_version("1.0.0")
//!     .namespace_base_uri("https://sbom.contoso.com")
//!     .build()?;
//!
//! let response = use_case.execute(request).await?;
//! println!("{}", response.manifest_path.display());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod generation;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::process::SbomToolEngine;
    pub use crate::application::dto::{
        GenerationRequest, GenerationResponse, ResolvedGenerationRequest, ValidationOutcome,
        ValidationRequest,
    };
    pub use crate::application::use_cases::{GenerateManifestUseCase, ValidateManifestUseCase};
    pub use crate::generation::domain::{
        PackageMetadata, SbomSpecification, Verbosity, VerbosityResolution,
    };
    pub use crate::generation::services::{
        build_namespace_uri, clear_previous_manifest, resolve_manifest_paths,
        validate_package_identifiers, ResolvedManifestPaths, ResolvedNamespace,
    };
    pub use crate::ports::outbound::{EngineOutcome, ProgressReporter, SbomEngine};
    pub use crate::shared::Result;
}
