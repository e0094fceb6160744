/// SBOM generation domain: request identifiers, namespace URIs, and the
/// manifest directory convention.
pub mod domain;
pub mod services;
