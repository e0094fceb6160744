use std::path::PathBuf;

use uuid::Uuid;

/// GenerationResponse - result of a successful SBOM generation
///
/// The manifest path is the one computed during request resolution, not
/// re-derived from engine output, so callers can locate the manifest
/// without parsing the engine's streams.
#[derive(Debug, Clone)]
pub struct GenerationResponse {
    /// Path of the generated manifest file
    pub manifest_path: PathBuf,
    /// Full document namespace URI embedded in the manifest
    pub namespace_uri: String,
    /// The disambiguating GUID used as the final namespace segment
    pub namespace_unique_part: Uuid,
}

impl GenerationResponse {
    pub fn new(manifest_path: PathBuf, namespace_uri: String, namespace_unique_part: Uuid) -> Self {
        Self {
            manifest_path,
            namespace_uri,
            namespace_unique_part,
        }
    }
}
