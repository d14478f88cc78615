use serde_json::Value;
use tracing::debug;

use crate::coerce::{SynonymKeys, coerce, coerce_value};
use crate::collection::ImageCollection;
use crate::input::GalleryInput;
use crate::origin::AssetOrigin;

/// Combines raw gallery sources into one canonical collection.
#[derive(Debug, Clone)]
pub struct Normalizer {
    origin: AssetOrigin,
    keys: SynonymKeys,
}

impl Normalizer {
    pub fn new(origin: AssetOrigin, keys: SynonymKeys) -> Self {
        Self { origin, keys }
    }

    /// Coerce, resolve and deduplicate `sources` without capping the result.
    ///
    /// Sources must already be in priority order. Entries keep source order,
    /// then within-source order; a URL seen again later is dropped.
    pub fn collect(&self, sources: &[GalleryInput]) -> ImageCollection {
        self.resolve_all(sources.iter().flat_map(|source| coerce(source, &self.keys)))
    }

    /// [`collect`](Self::collect) over borrowed record fields.
    pub fn collect_values<'v, I>(&self, values: I) -> ImageCollection
    where
        I: IntoIterator<Item = &'v Value>,
    {
        self.resolve_all(
            values
                .into_iter()
                .flat_map(|value| coerce_value(value, &self.keys)),
        )
    }

    /// [`collect`](Self::collect), then keep the first `max` entries.
    pub fn normalize(&self, sources: &[GalleryInput], max: usize) -> ImageCollection {
        capped(self.collect(sources), max)
    }

    /// [`collect_values`](Self::collect_values), then keep the first `max` entries.
    pub fn normalize_values<'v, I>(&self, values: I, max: usize) -> ImageCollection
    where
        I: IntoIterator<Item = &'v Value>,
    {
        capped(self.collect_values(values), max)
    }

    fn resolve_all(&self, raw: impl Iterator<Item = String>) -> ImageCollection {
        ImageCollection::from_resolved(raw.map(|path| self.origin.resolve(&path)))
    }
}

fn capped(collected: ImageCollection, max: usize) -> ImageCollection {
    if collected.len() > max {
        debug!(
            max,
            dropped = collected.len() - max,
            "Truncating gallery to domain maximum"
        );
    }
    collected.truncated(max)
}

/// Normalize `sources` with the default synonym keys.
pub fn normalize(sources: &[GalleryInput], origin: &AssetOrigin, max: usize) -> ImageCollection {
    Normalizer::new(origin.clone(), SynonymKeys::default()).normalize(sources, max)
}
