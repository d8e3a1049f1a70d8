//! Vellum: cached rendered text with windowed compositing
//!
//! Vellum keeps a laid-out, rasterized markup document per piece of text and
//! re-renders it only when its markup or wrap width changes. Drawing copies a
//! scrolled, clipped window of the cached texture onto a [`Surface`], then
//! overdraws links and embedded images according to the pointer state.
//!
//! # Architecture
//!
//! Markup parsing, font shaping and glyph rasterization belong to a layout
//! engine that implements [`Document`]. Vellum owns the cache policy
//! ([`RenderedText`]), the clipping math ([`clip_region`]) and the draw
//! orchestration.
//!
//! # Usage
//!
//! ```ignore
//! use vellum::{Point, Rect, RenderedText, SpriteBatch};
//!
//! let mut text = RenderedText::<MyDocument>::new("<b>hello</b>", 240, false);
//! let mut batch = SpriteBatch::new();
//! text.draw_window(&mut batch, Rect::new(10, 10, 240, 80), 0, scroll_y, None)?;
//! ```

// Core primitives
pub mod primitives;
pub mod tint;

// Layout engine interface
pub mod document;
pub mod error;

// Cache and compositing
pub mod clip;
pub mod compose;
pub mod rendered_text;

// Blit targets
pub mod raster;
pub mod surface;

pub mod config;

// Re-export core types
pub use primitives::{Color, Point, Rect, Size};
pub use tint::{Hue, Palette, Tint};
pub use document::{Document, ImageRegion, LinkRegion, LinkStyle, Texture};
pub use error::{LayoutError, Result};
pub use clip::{ClippedRegion, clip_region};
pub use compose::{fit_window, window_visible};
pub use rendered_text::{Interaction, RenderedText};
pub use raster::{RasterSurface, TexelSource};
pub use surface::{Sprite, SpriteBatch, Surface};
pub use config::{DEFAULT_MAX_WIDTH, RenderConfig};
