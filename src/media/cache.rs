use std::collections::HashMap;

use super::{Blob, BlobStore, BlobUrl, DEFAULT_MEDIA_TYPE, SVG_MEDIA_TYPE};
use crate::state::types::{Competition, Country};

/// Entity an image belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageKey {
    /// Flag of the country with this id.
    CountryFlag(i32),
    /// Logo of the competition with this id, within the current competition list.
    CompetitionLogo(i32),
}

/// Per-entity image references with explicit release.
///
/// Resolves each entity's blob once and hands out the same reference on every
/// render. When the owning list is replaced the caller releases the whole
/// family (`release_flags` / `release_logos`), so the number of live blobs is
/// bounded by the size of the lists on screen.
#[derive(Debug, Default)]
pub struct ImageCache {
    store: BlobStore,
    entries: HashMap<ImageKey, BlobUrl>,
}

impl ImageCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn resolve_once(&mut self, key: ImageKey, bytes: &[u8], media_type: &str) -> BlobUrl {
        if let Some(url) = self.entries.get(&key) {
            return url.clone();
        }
        let url = self.store.resolve(bytes, media_type);
        if !url.is_empty() {
            self.entries.insert(key, url.clone());
        }
        url
    }

    /// Reference for a country's flag (SVG).
    pub fn flag(&mut self, country: &Country) -> BlobUrl {
        self.resolve_once(
            ImageKey::CountryFlag(country.id),
            &country.flag_blob,
            SVG_MEDIA_TYPE,
        )
    }

    /// Reference for a competition's logo.
    pub fn logo(&mut self, competition: &Competition) -> BlobUrl {
        self.resolve_once(
            ImageKey::CompetitionLogo(competition.id),
            &competition.logo_blob,
            DEFAULT_MEDIA_TYPE,
        )
    }

    /// Look up the blob behind a reference.
    #[must_use]
    pub fn blob(&self, url: &BlobUrl) -> Option<&Blob> {
        self.store.get(url)
    }

    fn release_matching(&mut self, pred: impl Fn(&ImageKey) -> bool) -> usize {
        let keys: Vec<ImageKey> = self.entries.keys().copied().filter(|k| pred(k)).collect();
        let mut released = 0;
        for key in keys {
            if let Some(url) = self.entries.remove(&key)
                && self.store.release(&url)
            {
                released += 1;
            }
        }
        released
    }

    /// Release every flag reference. Returns how many were freed.
    pub fn release_flags(&mut self) -> usize {
        self.release_matching(|k| matches!(k, ImageKey::CountryFlag(_)))
    }

    /// Release every logo reference. Returns how many were freed.
    pub fn release_logos(&mut self) -> usize {
        self.release_matching(|k| matches!(k, ImageKey::CompetitionLogo(_)))
    }

    /// Number of live references held by the cache.
    #[must_use]
    pub fn live(&self) -> usize {
        self.store.len()
    }
}
