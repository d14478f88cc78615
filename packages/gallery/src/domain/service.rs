use super::GalleryDomain;

/// A service catalog entry. Images are optional.
#[derive(Debug, Clone, Copy)]
pub struct ServiceEntry;

impl GalleryDomain for ServiceEntry {
    const NAME: &'static str = "Service";
    const GALLERY_FIELD: &'static str = "gallery";
    const ALIAS_FIELDS: &'static [&'static str] = &["images"];
    const COVER_FIELDS: &'static [&'static str] = &["image"];
    const EXTRA_KEYS: &'static [&'static str] = &["thumbnail"];
    const MIN: usize = 0;
    const MAX: usize = 6;
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::DomainAdapter;
    use crate::origin::AssetOrigin;

    fn adapter() -> DomainAdapter<ServiceEntry> {
        DomainAdapter::new(AssetOrigin::new("https://cdn.x").unwrap())
    }

    #[test]
    fn accepts_thumbnail_key() {
        let canonical = adapter().to_canonical(&json!({
            "gallery": [{"thumbnail": "t.jpg"}, {"url": "u.jpg"}]
        }));
        assert_eq!(
            canonical.gallery.as_slice(),
            ["https://cdn.x/t.jpg", "https://cdn.x/u.jpg"]
        );
    }

    #[test]
    fn photo_is_not_a_service_source() {
        let canonical = adapter().to_canonical(&json!({"photo": "p.jpg"}));
        assert!(canonical.gallery.is_empty());
        assert_eq!(canonical.cover, "");
    }

    #[test]
    fn empty_write_is_accepted() {
        let payload = adapter().to_validated_payload(&json!({})).unwrap();
        assert_eq!(payload.image, "");
        assert!(payload.gallery.is_empty());
    }

    #[test]
    fn write_rejects_more_than_six() {
        let images: Vec<String> = (0..7).map(|i| format!("s{i}.png")).collect();
        let err = adapter()
            .to_validated_payload(&json!({ "images": images }))
            .unwrap_err();
        assert_eq!(err.actual(), 7);
        assert_eq!(
            err.to_string(),
            "Service gallery allows at most 6 image(s), got 7"
        );
    }
}
