/// Pure and filesystem-backed services for request resolution
pub mod identifier_validator;
pub mod manifest_locator;
pub mod namespace_builder;

pub use identifier_validator::validate_package_identifiers;
pub use manifest_locator::{
    clear_previous_manifest, require_existing, resolve_manifest_paths, ResolvedManifestPaths,
    MANIFEST_DIR_NAME,
};
pub use namespace_builder::{build_namespace_uri, ResolvedNamespace};
