/// Domain types for SBOM generation requests
mod metadata;
mod specification;
mod verbosity;

pub use metadata::PackageMetadata;
pub use specification::SbomSpecification;
pub use verbosity::{Verbosity, VerbosityResolution};
