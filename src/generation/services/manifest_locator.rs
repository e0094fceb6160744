use std::fs;
use std::path::{Path, PathBuf};

use crate::generation::domain::SbomSpecification;
use crate::shared::error::SbomTaskError;

/// Name of the manifest directory created under the manifest root.
pub const MANIFEST_DIR_NAME: &str = "_manifest";

/// On-disk locations derived from the manifest path convention:
/// `<manifest_root>/_manifest/<name>_<version>/manifest.<format>.json`.
///
/// This formula is load-bearing; the validator and downstream consumers
/// locate the manifest solely through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedManifestPaths {
    /// Override directory if supplied, otherwise the build drop itself.
    pub manifest_root: PathBuf,
    /// `<manifest_root>/_manifest`
    pub manifest_dir: PathBuf,
    /// `<manifest_dir>/<spec>_<version>` (lowercased)
    pub spec_dir: PathBuf,
    /// `<spec_dir>/manifest.<format>.json`
    pub manifest_file: PathBuf,
}

/// Computes the manifest output locations for a generation request.
///
/// Validates that the build drop exists and is a directory, and that the
/// override directory (when supplied) already exists; the resolver never
/// creates directories outside the build-drop convention. All checks run
/// before any engine invocation, so a malformed request does no work.
pub fn resolve_manifest_paths(
    build_drop_path: &Path,
    manifest_dir_override: Option<&Path>,
    specification: &SbomSpecification,
) -> Result<ResolvedManifestPaths, SbomTaskError> {
    require_absolute("BuildDropPath", build_drop_path)?;
    if !build_drop_path.is_dir() {
        return Err(SbomTaskError::BuildDropPathNotFound {
            path: build_drop_path.to_path_buf(),
        });
    }

    let manifest_root = match manifest_dir_override {
        Some(dir) => {
            require_absolute("ManifestDirPath", dir)?;
            if !dir.is_dir() {
                return Err(SbomTaskError::ManifestDirPathNotFound {
                    path: dir.to_path_buf(),
                });
            }
            dir.to_path_buf()
        }
        None => build_drop_path.to_path_buf(),
    };

    let manifest_dir = manifest_root.join(MANIFEST_DIR_NAME);
    let spec_dir = manifest_dir.join(specification.directory_name());
    let manifest_file = spec_dir.join(specification.manifest_file_name());

    Ok(ResolvedManifestPaths {
        manifest_root,
        manifest_dir,
        spec_dir,
        manifest_file,
    })
}

/// Recursively removes previous manifest output under the resolved root.
///
/// Destructive. Callers invoke this only immediately before a successful
/// hand-off to the generation engine, never speculatively. Returns whether
/// anything was removed.
pub fn clear_previous_manifest(paths: &ResolvedManifestPaths) -> Result<bool, SbomTaskError> {
    if !paths.manifest_dir.exists() {
        return Ok(false);
    }

    fs::remove_dir_all(&paths.manifest_dir).map_err(|e| SbomTaskError::ManifestCleanupFailed {
        path: paths.manifest_dir.clone(),
        details: e.to_string(),
    })?;
    Ok(true)
}

fn require_absolute(name: &'static str, path: &Path) -> Result<(), SbomTaskError> {
    if !path.is_absolute() {
        return Err(SbomTaskError::PathNotAbsolute {
            name,
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Validates an optional auxiliary path that must be absolute and exist.
///
/// Used for the build component path and the external document list file,
/// with the matching not-found error supplied by the caller.
pub fn require_existing(
    name: &'static str,
    path: &Path,
    not_found: impl FnOnce(PathBuf) -> SbomTaskError,
) -> Result<(), SbomTaskError> {
    require_absolute(name, path)?;
    if !path.exists() {
        return Err(not_found(path.to_path_buf()));
    }
    Ok(())
}
