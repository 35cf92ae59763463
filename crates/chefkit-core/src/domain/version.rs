//! Version token normalization.

/// Version token the server resolves to the newest cookbook version.
pub const LATEST_VERSION: &str = "_latest";

/// Normalize a caller-supplied version to the token used in the manifest URL.
///
/// An empty string or the literal `latest` become [`LATEST_VERSION`];
/// anything else is passed through untouched (including `_latest` itself).
///
/// # Example
///
/// ```
/// use chefkit_core::resolve_version;
///
/// assert_eq!(resolve_version(""), "_latest");
/// assert_eq!(resolve_version("latest"), "_latest");
/// assert_eq!(resolve_version("1.2.3"), "1.2.3");
/// ```
#[must_use]
pub fn resolve_version(version: &str) -> &str {
    if version.is_empty() || version == "latest" {
        LATEST_VERSION
    } else {
        version
    }
}
