use super::GalleryDomain;

/// A portfolio project. Must show at least one image.
#[derive(Debug, Clone, Copy)]
pub struct PortfolioItem;

impl GalleryDomain for PortfolioItem {
    const NAME: &'static str = "Portfolio item";
    const GALLERY_FIELD: &'static str = "gallery";
    const ALIAS_FIELDS: &'static [&'static str] = &["images"];
    const COVER_FIELDS: &'static [&'static str] = &["image", "photo"];
    const MIN: usize = 1;
    const MAX: usize = 7;
}
