use crate::shared::error::SbomTaskError;

/// Validates the three required package identifiers.
///
/// A value is rejected only when it is empty once whitespace and control
/// characters are discounted. Interior whitespace and control characters in
/// otherwise non-empty values are preserved verbatim into the manifest;
/// sanitization is deliberately the caller's responsibility.
pub fn validate_package_identifiers(
    supplier: &str,
    name: &str,
    version: &str,
) -> Result<(), SbomTaskError> {
    require_non_empty("PackageSupplier", supplier)?;
    require_non_empty("PackageName", name)?;
    require_non_empty("PackageVersion", version)?;
    Ok(())
}

fn require_non_empty(argument: &'static str, value: &str) -> Result<(), SbomTaskError> {
    let effectively_empty = value
        .chars()
        .all(|c| c.is_whitespace() || c.is_control());
    if effectively_empty {
        return Err(SbomTaskError::RequiredArgumentMissing { name: argument });
    }
    Ok(())
}
