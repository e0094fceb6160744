use std::fmt;
use std::str::FromStr;

use crate::shared::error::SbomTaskError;

/// SbomSpecification - identifies the SBOM format and version of a manifest
///
/// The specification picks the manifest output sub-path and the validator
/// used against the generated document. The textual form matches the
/// engine's `ManifestInfo` argument, e.g. `SPDX:2.2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SbomSpecification {
    name: String,
    version: String,
}

impl SbomSpecification {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// The default specification used when none is configured.
    pub fn spdx_2_2() -> Self {
        Self::new("SPDX", "2.2")
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Directory segment under `_manifest`, e.g. `spdx_2.2`.
    ///
    /// The lowercasing is load-bearing: downstream consumers locate the
    /// manifest solely through this formula.
    pub fn directory_name(&self) -> String {
        format!("{}_{}", self.name, self.version).to_lowercase()
    }

    /// Manifest file name inside the specification directory, e.g.
    /// `manifest.spdx.json`.
    pub fn manifest_file_name(&self) -> String {
        format!("manifest.{}.json", self.name.to_lowercase())
    }
}

impl FromStr for SbomSpecification {
    type Err = SbomTaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (name, version) = trimmed
            .split_once(':')
            .ok_or_else(|| SbomTaskError::InvalidSpecification {
                value: s.to_string(),
            })?;

        let name = name.trim();
        let version = version.trim();
        if name.is_empty() || version.is_empty() {
            return Err(SbomTaskError::InvalidSpecification {
                value: s.to_string(),
            });
        }

        Ok(Self::new(name, version))
    }
}

impl fmt::Display for SbomSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.version)
    }
}
