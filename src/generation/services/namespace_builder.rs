use url::Url;
use uuid::Uuid;

use crate::shared::error::SbomTaskError;

/// Resolved document namespace for a generation request.
///
/// The unique part, once resolved here (supplied or freshly generated), is
/// embedded verbatim as the final URI path segment and never replaced later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedNamespace {
    /// The trimmed, validated base URI as supplied by the caller.
    pub base_uri: String,
    /// The disambiguating GUID, normalized to hyphenated lowercase.
    pub unique_part: Uuid,
    /// The full document namespace URI.
    pub uri: String,
}

/// Composes the document namespace URI from its parts.
///
/// The base URI is trimmed, then must parse as an absolute URI with an
/// authority. The unique part, if supplied, must parse as a GUID in any of
/// the common textual forms (hyphenated or not, braced, mixed case,
/// surrounding whitespace); if absent, a fresh random GUID is generated.
///
/// Composition is purely textual: exactly one `/` separates each segment
/// regardless of whether the base already ends with one, and no further
/// escaping is applied to an already-valid URI.
pub fn build_namespace_uri(
    base_uri: &str,
    package_name: &str,
    package_version: &str,
    unique_part: Option<&str>,
) -> Result<ResolvedNamespace, SbomTaskError> {
    let base = validate_base_uri(base_uri)?;
    let unique = resolve_unique_part(unique_part)?;

    let uri = format!(
        "{}/{}/{}/{}",
        base.trim_end_matches('/'),
        package_name,
        package_version,
        unique
    );

    Ok(ResolvedNamespace {
        base_uri: base,
        unique_part: unique,
        uri,
    })
}

fn validate_base_uri(base_uri: &str) -> Result<String, SbomTaskError> {
    let trimmed = base_uri.trim();
    if trimmed.is_empty() {
        return Err(SbomTaskError::RequiredArgumentMissing {
            name: "NamespaceBaseUri",
        });
    }

    let parsed = Url::parse(trimmed).map_err(|e| SbomTaskError::InvalidBaseUri {
        value: base_uri.to_string(),
        details: e.to_string(),
    })?;

    // Scheme-only URIs like "mailto:x" parse but carry no authority; the
    // namespace convention requires scheme + authority.
    if !parsed.has_host() {
        return Err(SbomTaskError::InvalidBaseUri {
            value: base_uri.to_string(),
            details: "URI has no authority component".to_string(),
        });
    }

    Ok(trimmed.to_string())
}

fn resolve_unique_part(unique_part: Option<&str>) -> Result<Uuid, SbomTaskError> {
    match unique_part.map(str::trim).filter(|s| !s.is_empty()) {
        Some(supplied) => Uuid::parse_str(supplied).map_err(|_| SbomTaskError::InvalidUniquePart {
            value: supplied.to_string(),
        }),
        None => Ok(Uuid::new_v4()),
    }
}
