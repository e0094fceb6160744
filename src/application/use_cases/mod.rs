/// Use cases orchestrating request resolution and engine invocation
mod generate_manifest;
mod validate_manifest;

pub use generate_manifest::GenerateManifestUseCase;
pub use validate_manifest::ValidateManifestUseCase;
