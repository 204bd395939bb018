//! Symbolic thumbnail sizes.

use std::fmt;

/// Preset thumbnail sizes offered by the media browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThumbnailSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ThumbnailSize {
    /// Parse a size name. Unknown names fall back to medium.
    pub fn from_name(name: &str) -> Self {
        match name {
            "small" => ThumbnailSize::Small,
            "large" => ThumbnailSize::Large,
            _ => ThumbnailSize::Medium,
        }
    }

    /// Pixel dimensions as (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            ThumbnailSize::Small => (200, 200),
            ThumbnailSize::Medium => (400, 400),
            ThumbnailSize::Large => (800, 800),
        }
    }
}

impl fmt::Display for ThumbnailSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThumbnailSize::Small => write!(f, "small"),
            ThumbnailSize::Medium => write!(f, "medium"),
            ThumbnailSize::Large => write!(f, "large"),
        }
    }
}
