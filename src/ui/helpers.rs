use ratatui::layout::Rect;

use crate::media::{Blob, ImageCache};
use crate::state::{Competition, Country};

/// Braille spinner frames, advanced by the tick handler.
const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner glyph for a frame counter.
#[must_use]
pub fn spinner(frame: usize) -> &'static str {
    SPINNER[frame % SPINNER.len()]
}

/// What: Rect inside a bordered block, as the `(x, y, w, h)` tuple used for hit-testing.
#[must_use]
pub const fn inner_tuple(area: Rect) -> (u16, u16, u16, u16) {
    (
        area.x.saturating_add(1),
        area.y.saturating_add(1),
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    )
}

/// What: One-line description of an entity's image for the preview pane.
///
/// Inputs:
/// - `blob`: Resolved blob, `None` when the entity has no image.
///
/// Output:
/// - `"image/png, 1.5 KiB"` or `"no image"`.
#[must_use]
pub fn image_summary(blob: Option<&Blob>) -> String {
    blob.map_or_else(|| "no image".to_string(), Blob::describe)
}

/// Marker shown before a country name: a flag glyph, or a dot when no flag is available.
pub fn flag_marker(images: &mut ImageCache, country: &Country) -> &'static str {
    if images.flag(country).is_empty() {
        "·"
    } else {
        "⚑"
    }
}

/// Marker shown before a competition name: a trophy glyph, or a dot when no logo is available.
pub fn logo_marker(images: &mut ImageCache, competition: &Competition) -> &'static str {
    if images.logo(competition).is_empty() {
        "·"
    } else {
        "🏆"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Markers reflect whether an image could be resolved.
    ///
    /// Inputs:
    /// - Country with a flag, country without.
    ///
    /// Output:
    /// - Flag glyph vs placeholder dot; summary text matches.
    fn markers_follow_image_presence() {
        let mut images = ImageCache::new();
        let with = Country {
            id: 1,
            name: "Argentina".into(),
            flag_blob: b"<svg/>".to_vec(),
        };
        let without = Country {
            id: 2,
            name: "Nowhere".into(),
            flag_blob: Vec::new(),
        };
        assert_eq!(flag_marker(&mut images, &with), "⚑");
        assert_eq!(flag_marker(&mut images, &without), "·");
        let url = images.flag(&with);
        assert_eq!(image_summary(images.blob(&url)), "image/svg+xml, 6 B");
        assert_eq!(image_summary(None), "no image");
        assert_eq!(spinner(11), spinner(1));
    }
}
