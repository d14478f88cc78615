use serde::Serialize;
use thiserror::Error;

/// Which side of a domain's gallery bounds was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConstraintKind {
    TooFew,
    TooMany,
}

/// Raised on the write path when a gallery falls outside its domain bounds.
///
/// This is the only error the normalization pipeline lets cross into the
/// CRUD layer; the message is meant to be shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryConstraintError {
    #[error("{resource} gallery needs at least {min} image(s), got {actual}")]
    TooFew {
        resource: String,
        min: usize,
        actual: usize,
    },

    #[error("{resource} gallery allows at most {max} image(s), got {actual}")]
    TooMany {
        resource: String,
        max: usize,
        actual: usize,
    },
}

impl GalleryConstraintError {
    pub fn kind(&self) -> ConstraintKind {
        match self {
            Self::TooFew { .. } => ConstraintKind::TooFew,
            Self::TooMany { .. } => ConstraintKind::TooMany,
        }
    }

    /// Number of images the rejected collection held.
    pub fn actual(&self) -> usize {
        match self {
            Self::TooFew { actual, .. } | Self::TooMany { actual, .. } => *actual,
        }
    }

    pub fn resource(&self) -> &str {
        match self {
            Self::TooFew { resource, .. } | Self::TooMany { resource, .. } => resource,
        }
    }
}

/// Invalid asset origin configuration. Fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OriginError {
    #[error("Asset origin is not configured")]
    Missing,

    #[error("Asset origin must be an absolute URL, got '{0}'")]
    NotAbsolute(String),
}

/// Errors raised while loading process configuration.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Origin(#[from] OriginError),
}
