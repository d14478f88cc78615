use serde::Serialize;

use crate::collection::ImageCollection;
use crate::error::GalleryConstraintError;

/// Inclusive gallery size bounds for one kind of content record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainBounds {
    pub min: usize,
    pub max: usize,
    /// Human-readable resource name used in validation messages.
    pub resource_name: String,
}

impl DomainBounds {
    pub fn new(min: usize, max: usize, resource_name: impl Into<String>) -> Self {
        Self {
            min,
            max,
            resource_name: resource_name.into(),
        }
    }

    pub fn contains(&self, len: usize) -> bool {
        (self.min..=self.max).contains(&len)
    }
}

/// Check a finished collection against its domain bounds.
///
/// Only the write path calls this. Reads render whatever normalization
/// produced so existing out-of-bounds records stay viewable.
pub fn validate(
    collection: ImageCollection,
    bounds: &DomainBounds,
) -> Result<ImageCollection, GalleryConstraintError> {
    let actual = collection.len();
    if actual < bounds.min {
        return Err(GalleryConstraintError::TooFew {
            resource: bounds.resource_name.clone(),
            min: bounds.min,
            actual,
        });
    }
    if actual > bounds.max {
        return Err(GalleryConstraintError::TooMany {
            resource: bounds.resource_name.clone(),
            max: bounds.max,
            actual,
        });
    }
    Ok(collection)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(n: usize) -> ImageCollection {
        ImageCollection::from_resolved((0..n).map(|i| format!("https://cdn.x/{i}.jpg")))
    }

    #[test]
    fn accepts_within_bounds() {
        let bounds = DomainBounds::new(1, 3, "Portfolio item");
        for n in 1..=3 {
            let ok = validate(collection(n), &bounds).unwrap();
            assert_eq!(ok.len(), n);
        }
    }

    #[test]
    fn rejects_too_few() {
        let bounds = DomainBounds::new(1, 3, "Portfolio item");
        assert_eq!(
            validate(collection(0), &bounds),
            Err(GalleryConstraintError::TooFew {
                resource: "Portfolio item".into(),
                min: 1,
                actual: 0,
            })
        );
    }

    #[test]
    fn rejects_too_many() {
        let bounds = DomainBounds::new(1, 7, "Portfolio item");
        assert_eq!(
            validate(collection(9), &bounds),
            Err(GalleryConstraintError::TooMany {
                resource: "Portfolio item".into(),
                max: 7,
                actual: 9,
            })
        );
    }

    #[test]
    fn zero_minimum_allows_empty() {
        let bounds = DomainBounds::new(0, 2, "Service");
        assert!(validate(ImageCollection::default(), &bounds).is_ok());
        assert!(bounds.contains(0));
        assert!(!bounds.contains(3));
    }
}
