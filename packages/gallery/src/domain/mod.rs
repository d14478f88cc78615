//! Per-domain gallery adapters.
//!
//! Each content type declares where its images live and how many it may
//! hold. [`DomainAdapter`] turns that declaration into a read path
//! ([`DomainAdapter::to_canonical`]) and a write path
//! ([`DomainAdapter::to_validated_payload`]).

mod home;
mod portfolio;
mod service;

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::coerce::SynonymKeys;
use crate::collection::ImageCollection;
use crate::error::GalleryConstraintError;
use crate::normalize::Normalizer;
use crate::origin::AssetOrigin;
use crate::validate::{DomainBounds, validate};

pub use home::HomeSectionEntry;
pub use portfolio::PortfolioItem;
pub use service::ServiceEntry;

/// Static description of a gallery-bearing content type.
pub trait GalleryDomain {
    /// Resource name used in validation messages.
    const NAME: &'static str;
    /// Explicit multi-image field. Highest priority.
    const GALLERY_FIELD: &'static str;
    /// Legacy array-like alias fields, in priority order.
    const ALIAS_FIELDS: &'static [&'static str];
    /// Legacy single-image fields, in priority order. Lowest priority.
    const COVER_FIELDS: &'static [&'static str];
    /// Synonym keys accepted on top of the defaults.
    const EXTRA_KEYS: &'static [&'static str] = &[];
    const MIN: usize;
    const MAX: usize;

    fn bounds() -> DomainBounds {
        DomainBounds::new(Self::MIN, Self::MAX, Self::NAME)
    }

    fn synonym_keys() -> SynonymKeys {
        SynonymKeys::extended(Self::EXTRA_KEYS)
    }

    /// Borrow every present source field of `record` in priority order.
    ///
    /// Missing fields are skipped, which coerces the same as an empty input.
    fn sources(record: &Value) -> Vec<&Value> {
        std::iter::once(Self::GALLERY_FIELD)
            .chain(Self::ALIAS_FIELDS.iter().copied())
            .chain(Self::COVER_FIELDS.iter().copied())
            .filter_map(|field| record.get(field))
            .collect()
    }
}

/// Render-ready view of a record's images.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CanonicalRecord {
    pub cover: String,
    pub gallery: ImageCollection,
}

/// Gallery columns to persist after a successful write validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WritePayload {
    /// Cover image, mirrored into the legacy single-image column.
    pub image: String,
    pub gallery: Vec<String>,
}

impl WritePayload {
    fn from_collection(collection: ImageCollection) -> Self {
        Self {
            image: collection.cover().to_string(),
            gallery: collection.into_vec(),
        }
    }

    /// Replace URLs on `origin` with bare storage paths.
    ///
    /// Lets a deployment persist unresolved paths and resolve at render time;
    /// resolution is idempotent, so reading the payload back is lossless.
    pub fn into_storage_paths(self, origin: &AssetOrigin) -> Self {
        Self {
            image: origin.relativize(&self.image),
            gallery: self
                .gallery
                .iter()
                .map(|url| origin.relativize(url))
                .collect(),
        }
    }
}

/// Normalization entry point for one content type.
pub struct DomainAdapter<D> {
    normalizer: Normalizer,
    bounds: DomainBounds,
    _domain: PhantomData<D>,
}

impl<D: GalleryDomain> DomainAdapter<D> {
    pub fn new(origin: AssetOrigin) -> Self {
        Self {
            normalizer: Normalizer::new(origin, D::synonym_keys()),
            bounds: D::bounds(),
            _domain: PhantomData,
        }
    }

    /// Best-effort read path. Never fails; oversized galleries are capped.
    pub fn to_canonical(&self, record: &Value) -> CanonicalRecord {
        let gallery = self
            .normalizer
            .normalize_values(D::sources(record), self.bounds.max);
        CanonicalRecord {
            cover: gallery.cover().to_string(),
            gallery,
        }
    }

    /// Write path: the uncapped collection must satisfy the domain bounds.
    pub fn to_validated_payload(
        &self,
        form: &Value,
    ) -> Result<WritePayload, GalleryConstraintError> {
        let collected = self.normalizer.collect_values(D::sources(form));
        let collection = validate(collected, &self.bounds).inspect_err(|e| {
            debug!(domain = D::NAME, error = %e, "Rejected gallery write");
        })?;
        Ok(WritePayload::from_collection(collection))
    }
}

impl<D> Clone for DomainAdapter<D> {
    fn clone(&self) -> Self {
        Self {
            normalizer: self.normalizer.clone(),
            bounds: self.bounds.clone(),
            _domain: PhantomData,
        }
    }
}

impl<D> fmt::Debug for DomainAdapter<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomainAdapter")
            .field("normalizer", &self.normalizer)
            .field("bounds", &self.bounds)
            .finish()
    }
}

/// Content types selectable by name at the process boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainKind {
    Portfolio,
    Service,
    Home,
}

impl DomainKind {
    pub const ALL: &'static [DomainKind] = &[Self::Portfolio, Self::Service, Self::Home];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Portfolio => "portfolio",
            Self::Service => "service",
            Self::Home => "home",
        }
    }

    pub fn bounds(&self) -> DomainBounds {
        match self {
            Self::Portfolio => PortfolioItem::bounds(),
            Self::Service => ServiceEntry::bounds(),
            Self::Home => HomeSectionEntry::bounds(),
        }
    }

    /// Build the adapter for this domain once, for use across a batch.
    pub fn adapter(&self, origin: AssetOrigin) -> AnyDomainAdapter {
        match self {
            Self::Portfolio => AnyDomainAdapter::Portfolio(DomainAdapter::new(origin)),
            Self::Service => AnyDomainAdapter::Service(DomainAdapter::new(origin)),
            Self::Home => AnyDomainAdapter::Home(DomainAdapter::new(origin)),
        }
    }
}

/// A [`DomainAdapter`] for a domain chosen at runtime.
#[derive(Debug, Clone)]
pub enum AnyDomainAdapter {
    Portfolio(DomainAdapter<PortfolioItem>),
    Service(DomainAdapter<ServiceEntry>),
    Home(DomainAdapter<HomeSectionEntry>),
}

impl AnyDomainAdapter {
    pub fn to_canonical(&self, record: &Value) -> CanonicalRecord {
        match self {
            Self::Portfolio(adapter) => adapter.to_canonical(record),
            Self::Service(adapter) => adapter.to_canonical(record),
            Self::Home(adapter) => adapter.to_canonical(record),
        }
    }

    pub fn to_validated_payload(
        &self,
        form: &Value,
    ) -> Result<WritePayload, GalleryConstraintError> {
        match self {
            Self::Portfolio(adapter) => adapter.to_validated_payload(form),
            Self::Service(adapter) => adapter.to_validated_payload(form),
            Self::Home(adapter) => adapter.to_validated_payload(form),
        }
    }
}

impl fmt::Display for DomainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown domain name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown domain '{invalid}' (expected portfolio, service or home)")]
pub struct ParseDomainError {
    pub invalid: String,
}

impl FromStr for DomainKind {
    type Err = ParseDomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "portfolio" => Ok(Self::Portfolio),
            "service" => Ok(Self::Service),
            "home" => Ok(Self::Home),
            _ => Err(ParseDomainError {
                invalid: s.to_string(),
            }),
        }
    }
}
