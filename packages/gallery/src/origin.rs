use std::fmt;

use crate::error::OriginError;

/// Base URL prefixed onto relative storage paths.
///
/// Built once at startup from configuration and passed explicitly to every
/// normalizer and domain adapter. Any trailing `/api` segment is stripped so
/// the API base URL can be reused as the asset origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetOrigin(String);

impl AssetOrigin {
    pub fn new(base: &str) -> Result<Self, OriginError> {
        let trimmed = base.trim();
        if trimmed.is_empty() {
            return Err(OriginError::Missing);
        }
        let not_absolute = || OriginError::NotAbsolute(trimmed.to_string());
        if !has_scheme(trimmed) {
            return Err(not_absolute());
        }
        let (scheme, rest) = trimmed.split_once("://").ok_or_else(not_absolute)?;
        let (authority, path) = rest.find('/').map_or((rest, ""), |i| rest.split_at(i));
        if authority.is_empty() {
            return Err(not_absolute());
        }

        // `/api` is only stripped as a path segment, never from the host.
        let mut path = path.trim_end_matches('/');
        if let Some(stripped) = path.strip_suffix("/api") {
            path = stripped.trim_end_matches('/');
        }
        Ok(Self(format!("{scheme}://{authority}{path}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Turn one raw path into a canonical image URL.
    ///
    /// Empty input yields an empty string. Absolute URLs and `data:` URIs are
    /// returned unchanged, so resolving twice is a no-op.
    pub fn resolve(&self, raw: &str) -> String {
        if raw.is_empty() {
            return String::new();
        }
        if is_absolute(raw) {
            return raw.to_string();
        }
        format!("{}/{}", self.0, raw.trim_start_matches('/'))
    }

    /// Strip this origin from a resolved URL, leaving the storage path.
    ///
    /// URLs on other hosts and `data:` URIs are returned unchanged.
    pub fn relativize(&self, url: &str) -> String {
        match url.strip_prefix(self.0.as_str()) {
            Some(path) if path.starts_with('/') => path.to_string(),
            _ => url.to_string(),
        }
    }
}

impl fmt::Display for AssetOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolve `raw` against `origin`. See [`AssetOrigin::resolve`].
pub fn resolve(raw: &str, origin: &AssetOrigin) -> String {
    origin.resolve(raw)
}

/// Whether `raw` already carries a `scheme://` prefix or is a `data:` URI.
pub fn is_absolute(raw: &str) -> bool {
    raw.get(..5)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("data:"))
        || has_scheme(raw)
}

fn has_scheme(raw: &str) -> bool {
    let Some((scheme, _)) = raw.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
