//! Rendering configuration.

use serde::Deserialize;

use crate::raster::RasterSurface;
use crate::tint::Palette;

/// Wrap width used when a caller asks for zero or a negative width.
pub const DEFAULT_MAX_WIDTH: i32 = 200;

/// Defaults applied to newly created rendered text.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Substituted for non-positive max widths.
    pub default_max_width: i32,
    /// Ask the layout engine to collapse empty content.
    pub collapse_content: bool,
    /// Hue table handed to surfaces built with [`RenderConfig::surface`].
    /// Layout does not read it.
    pub palette: Palette,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            default_max_width: DEFAULT_MAX_WIDTH,
            collapse_content: false,
            palette: Palette::default(),
        }
    }
}

impl RenderConfig {
    /// Resolve a requested wrap width, substituting the default for
    /// non-positive values.
    #[inline]
    pub fn resolve_width(&self, requested: i32) -> i32 {
        if requested > 0 {
            requested
        } else if self.default_max_width > 0 {
            self.default_max_width
        } else {
            DEFAULT_MAX_WIDTH
        }
    }

    /// A transparent raster surface that resolves hues through this palette.
    pub fn surface(&self, width: u32, height: u32) -> RasterSurface {
        RasterSurface::new(width, height, self.palette.clone())
    }
}
