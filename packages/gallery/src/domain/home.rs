use super::GalleryDomain;

/// An entry in one of the homepage sections.
#[derive(Debug, Clone, Copy)]
pub struct HomeSectionEntry;

impl GalleryDomain for HomeSectionEntry {
    const NAME: &'static str = "Home section";
    const GALLERY_FIELD: &'static str = "gallery";
    const ALIAS_FIELDS: &'static [&'static str] = &["images", "slides"];
    const COVER_FIELDS: &'static [&'static str] = &["image", "photo"];
    const EXTRA_KEYS: &'static [&'static str] = &["thumbnail"];
    const MIN: usize = 0;
    const MAX: usize = 12;
}
