//! Document layout engine interface.
//!
//! Vellum does not parse markup or shape glyphs. A layout engine implements
//! [`Document`] and hands back a rasterized texture plus the link and image
//! regions it found, all in document-local pixel coordinates.

use std::sync::Arc;

use crate::error::Result;
use crate::primitives::Rect;
use crate::tint::Hue;

/// A bitmap that can be blitted. Usually a cheap handle.
pub trait Texture {
    fn width(&self) -> i32;
    fn height(&self) -> i32;
}

impl Texture for image::RgbaImage {
    fn width(&self) -> i32 {
        self.dimensions().0 as i32
    }

    fn height(&self) -> i32 {
        self.dimensions().1 as i32
    }
}

impl<T: Texture + ?Sized> Texture for Arc<T> {
    fn width(&self) -> i32 {
        (**self).width()
    }

    fn height(&self) -> i32 {
        (**self).height()
    }
}

impl<T: Texture + ?Sized> Texture for &T {
    fn width(&self) -> i32 {
        (**self).width()
    }

    fn height(&self) -> i32 {
        (**self).height()
    }
}

/// A laid-out, rasterized markup document.
///
/// Width, height, texture and regions are only meaningful after
/// [`render`](Document::render) has succeeded.
pub trait Document {
    type Texture: Texture;

    /// Build a fresh document for `text` wrapped at `max_width` pixels.
    fn create(text: &str, max_width: i32, collapse_content: bool) -> Self
    where
        Self: Sized;

    /// Drop the current layout, keeping allocations for reuse.
    fn reset(&mut self);

    /// Replace the markup and wrap width. Takes effect on the next render.
    fn set_markup(&mut self, text: &str, max_width: i32);

    /// Lay out and rasterize.
    fn render(&mut self) -> Result<()>;

    fn width(&self) -> i32;
    fn height(&self) -> i32;
    fn texture(&self) -> &Self::Texture;

    /// Link regions in document order.
    fn links(&self) -> &[LinkRegion];

    /// Image regions in document order.
    fn images(&self) -> &[ImageRegion<Self::Texture>];
}

// =========================================================================
// Regions
// =========================================================================

/// Per-state hues for a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LinkStyle {
    pub color: Hue,
    pub hover_color: Hue,
    pub active_color: Hue,
}

impl LinkStyle {
    /// Pick the hue for the current pointer state: active beats hover beats normal.
    #[inline]
    pub fn hue_for(&self, hovered: bool, pressed: bool) -> Hue {
        match (hovered, pressed) {
            (true, true) => self.active_color,
            (true, false) => self.hover_color,
            (false, _) => self.color,
        }
    }
}

/// A hover-detectable region of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRegion {
    /// Stable identity matched against the hovered region index.
    pub index: usize,
    /// Bounds in document-local pixels.
    pub area: Rect,
    /// Navigation target. `None` marks a hover-only region (e.g. one that
    /// exists so an embedded image can react to the pointer).
    pub target: Option<String>,
    pub style: LinkStyle,
}

impl LinkRegion {
    /// True if the region has a target and should be recolored on hover.
    #[inline]
    pub fn is_navigable(&self) -> bool {
        self.target.is_some()
    }
}

/// An embedded image with optional pointer-state variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRegion<T> {
    /// Bounds in document-local pixels.
    pub area: Rect,
    pub texture: T,
    pub texture_over: Option<T>,
    pub texture_down: Option<T>,
    /// Link region whose hover state drives the variant choice.
    pub link_index: Option<usize>,
}

impl<T> ImageRegion<T> {
    pub fn new(area: Rect, texture: T) -> Self {
        Self {
            area,
            texture,
            texture_over: None,
            texture_down: None,
            link_index: None,
        }
    }

    pub fn with_over(mut self, texture: T) -> Self {
        self.texture_over = Some(texture);
        self
    }

    pub fn with_down(mut self, texture: T) -> Self {
        self.texture_down = Some(texture);
        self
    }

    pub fn linked_to(mut self, index: usize) -> Self {
        self.link_index = Some(index);
        self
    }

    /// True if the pointer is over this image's associated link region.
    #[inline]
    pub fn is_hovered(&self, hovered: Option<usize>) -> bool {
        self.link_index.is_some() && self.link_index == hovered
    }

    /// Select the variant to draw.
    ///
    /// Candidates are tried in order; the first present one wins:
    /// 1. pressed variant, if hovered and the pointer is down
    /// 2. hover variant, if hovered
    /// 3. default texture
    pub fn select_texture(&self, hovered: Option<usize>, pressed: bool) -> &T {
        let over = self.is_hovered(hovered);
        let candidates = [
            (over && pressed, self.texture_down.as_ref()),
            (over, self.texture_over.as_ref()),
        ];
        candidates
            .into_iter()
            .find_map(|(applies, texture)| if applies { texture } else { None })
            .unwrap_or(&self.texture)
    }
}
