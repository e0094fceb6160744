/// PackageMetadata - identifies the package a manifest describes
///
/// Values are recorded into the manifest verbatim. Interior whitespace and
/// control characters are preserved; callers wanting sanitized identifiers
/// must sanitize before building the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageMetadata {
    pub supplier: String,
    pub name: String,
    pub version: String,
}

impl PackageMetadata {
    pub fn new(
        supplier: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            supplier: supplier.into(),
            name: name.into(),
            version: version.into(),
        }
    }
}
