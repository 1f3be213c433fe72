//! Blob → displayable image reference resolution.
//!
//! Flags and logos arrive from the backend as raw byte sequences. The UI never
//! holds those bytes directly; it asks [`BlobStore::resolve`] for a short
//! reference (`blob:lta-switcher/<n>`) that renderers can look up later, the
//! same way a webview would use an object URL as an image source.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

mod cache;

pub use cache::{ImageCache, ImageKey};

/// Media type assumed when the caller does not provide one.
pub const DEFAULT_MEDIA_TYPE: &str = "image/png";
/// Media type used for country flags.
pub const SVG_MEDIA_TYPE: &str = "image/svg+xml";

/// Scheme prefix of every non-empty reference.
const BLOB_SCHEME: &str = "blob:lta-switcher/";

/// Reference to a resolved blob. The empty reference means "render a placeholder".
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BlobUrl(String);

impl BlobUrl {
    /// The empty reference.
    #[must_use]
    pub const fn empty() -> Self {
        Self(String::new())
    }

    /// Whether this is the empty reference.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reference text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlobUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// In-memory binary object tagged with its media type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Blob {
    /// Media type tag, e.g. `image/png`.
    pub media_type: String,
    /// Raw content.
    pub bytes: Arc<[u8]>,
}

impl Blob {
    /// What: Human-readable one-line summary for the terminal preview.
    ///
    /// Output:
    /// - Text like `image/png, 24.1 KiB`.
    #[must_use]
    pub fn describe(&self) -> String {
        format!("{}, {}", self.media_type, human_size(self.bytes.len()))
    }
}

/// What: Format a byte count with binary units.
///
/// Inputs:
/// - `len`: Size in bytes.
///
/// Output:
/// - `"512 B"`, `"1.5 KiB"`, `"2.0 MiB"`.
fn human_size(len: usize) -> String {
    const KIB: f64 = 1024.0;
    #[allow(clippy::cast_precision_loss)]
    let n = len as f64;
    if n < KIB {
        format!("{len} B")
    } else if n < KIB * KIB {
        format!("{:.1} KiB", n / KIB)
    } else {
        format!("{:.1} MiB", n / (KIB * KIB))
    }
}

/// Registry of live blobs keyed by their reference.
///
/// Every successful [`resolve`](BlobStore::resolve) allocates a new entry;
/// there is no deduplication. Entries live until [`release`](BlobStore::release)
/// is called, so owners are responsible for releasing what they resolve
/// (see [`ImageCache`]).
#[derive(Debug)]
pub struct BlobStore {
    blobs: HashMap<BlobUrl, Blob>,
    next_id: u64,
}

impl Default for BlobStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BlobStore {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            blobs: HashMap::new(),
            next_id: 1,
        }
    }

    /// What: Turn raw bytes into a reference usable as an image source.
    ///
    /// Inputs:
    /// - `bytes`: Raw image content; may be empty.
    /// - `media_type`: Media type tag; empty falls back to [`DEFAULT_MEDIA_TYPE`].
    ///
    /// Output:
    /// - [`BlobUrl::empty`] for empty input; otherwise a fresh reference, distinct per call.
    pub fn resolve(&mut self, bytes: &[u8], media_type: &str) -> BlobUrl {
        if bytes.is_empty() {
            return BlobUrl::empty();
        }
        let url = BlobUrl(format!("{BLOB_SCHEME}{}", self.next_id));
        self.next_id += 1;
        let media_type = if media_type.trim().is_empty() {
            DEFAULT_MEDIA_TYPE
        } else {
            media_type
        };
        self.blobs.insert(
            url.clone(),
            Blob {
                media_type: media_type.to_string(),
                bytes: Arc::from(bytes),
            },
        );
        url
    }

    /// Look up a live blob.
    #[must_use]
    pub fn get(&self, url: &BlobUrl) -> Option<&Blob> {
        self.blobs.get(url)
    }

    /// Release a reference. Returns `true` if it was live.
    pub fn release(&mut self, url: &BlobUrl) -> bool {
        self.blobs.remove(url).is_some()
    }

    /// Number of live blobs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    /// Whether no blobs are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}
