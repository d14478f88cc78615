//! Gallery normalization for content records.
//!
//! Reconciles every shape a record's images may be stored in (native arrays,
//! JSON-encoded text, legacy single-image fields, objects keyed by `url`,
//! `path`, `src`, `href` or `image`) into one ordered, deduplicated list of
//! absolute asset URLs, and enforces per-domain gallery sizes on writes.

pub mod coerce;
pub mod collection;
pub mod config;
pub mod domain;
pub mod error;
pub mod input;
pub mod normalize;
pub mod origin;
pub mod validate;

pub use coerce::{SynonymKeys, coerce, coerce_value};
pub use collection::ImageCollection;
pub use domain::{
    AnyDomainAdapter, CanonicalRecord, DomainAdapter, DomainKind, GalleryDomain,
    HomeSectionEntry, PortfolioItem, ServiceEntry, WritePayload,
};
pub use error::{ConfigLoadError, ConstraintKind, GalleryConstraintError, OriginError};
pub use input::GalleryInput;
pub use normalize::{Normalizer, normalize};
pub use origin::{AssetOrigin, resolve};
pub use validate::{DomainBounds, validate};
