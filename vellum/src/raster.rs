//! Software compositing onto an RGBA image.
//!
//! Used for headless rendering and for checking composited output pixel by
//! pixel. Blits are unscaled: the copied extent is the smaller of `dest` and
//! `source`, further clamped to both the texture and the target bounds.

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::document::Texture;
use crate::error::Result;
use crate::primitives::{Color, Rect};
use crate::surface::Surface;
use crate::tint::{Palette, Tint};

/// Alpha multiplier applied by [`Tint::translucent`].
const TRANSLUCENT_ALPHA: f32 = 0.5;

/// Maximum channel spread for a texel to count as grey under a partial tint.
const GREY_TOLERANCE: u8 = 8;

/// An RGBA framebuffer with a palette for resolving hues.
pub struct RasterSurface {
    target: RgbaImage,
    palette: Palette,
}

impl RasterSurface {
    /// Create a transparent surface.
    pub fn new(width: u32, height: u32, palette: Palette) -> Self {
        Self {
            target: RgbaImage::new(width, height),
            palette,
        }
    }

    /// Fill the whole surface with one color.
    pub fn clear(&mut self, color: Color) {
        let px = Rgba(color.to_rgba8());
        for p in self.target.pixels_mut() {
            *p = px;
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.target
    }

    pub fn into_image(self) -> RgbaImage {
        self.target
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Pixel at (x, y), or `None` outside the surface.
    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        if x < 0 || y < 0 {
            return None;
        }
        self.target.get_pixel_checked(x as u32, y as u32).map(|p| p.0)
    }

    /// Encode the surface as PNG (format chosen by extension).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.target.save(path)?;
        Ok(())
    }

    /// Apply a tint to one texel.
    fn shade(&self, texel: [u8; 4], tint: Tint) -> Color {
        let mut color = Color::from_rgba8(texel);
        if !tint.keeps_native_colors() && (!tint.partial || is_grey(texel)) {
            let hue = self.palette.resolve(tint.hue);
            color = Color { a: color.a, ..color.multiply(hue) };
        }
        if tint.translucent {
            color.a *= TRANSLUCENT_ALPHA;
        }
        color
    }
}

#[inline]
fn is_grey([r, g, b, _]: [u8; 4]) -> bool {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    max - min <= GREY_TOLERANCE
}

/// Source-over blend of `src` onto `dst`.
#[inline]
fn blend(src: Color, dst: [u8; 4]) -> [u8; 4] {
    let dst = Color::from_rgba8(dst);
    let a = src.a + dst.a * (1.0 - src.a);
    if a <= 0.0 {
        return [0, 0, 0, 0];
    }
    let mix = |s: f32, d: f32| (s * src.a + d * dst.a * (1.0 - src.a)) / a;
    Color::rgba(mix(src.r, dst.r), mix(src.g, dst.g), mix(src.b, dst.b), a).to_rgba8()
}

/// Read access to texel data, for textures that carry CPU pixels.
pub trait TexelSource: Texture {
    /// RGBA texel at (x, y). Callers stay within `width()` x `height()`.
    fn texel(&self, x: u32, y: u32) -> [u8; 4];
}

impl TexelSource for RgbaImage {
    #[inline]
    fn texel(&self, x: u32, y: u32) -> [u8; 4] {
        self.get_pixel(x, y).0
    }
}

impl<T: TexelSource + ?Sized> TexelSource for std::sync::Arc<T> {
    #[inline]
    fn texel(&self, x: u32, y: u32) -> [u8; 4] {
        (**self).texel(x, y)
    }
}

impl<T: TexelSource + ?Sized> TexelSource for &T {
    #[inline]
    fn texel(&self, x: u32, y: u32) -> [u8; 4] {
        (**self).texel(x, y)
    }
}

impl<T: TexelSource + ?Sized> Surface<T> for RasterSurface {
    fn blit(&mut self, texture: &T, dest: Rect, source: Rect, tint: Tint) {
        let tex_w = texture.width();
        let tex_h = texture.height();
        let (target_w, target_h) = self.target.dimensions();

        let width = dest.width.min(source.width);
        let height = dest.height.min(source.height);

        for dy in 0..height.max(0) {
            let sy = source.y + dy;
            let ty = dest.y + dy;
            if sy < 0 || sy >= tex_h || ty < 0 || ty >= target_h as i32 {
                continue;
            }
            for dx in 0..width.max(0) {
                let sx = source.x + dx;
                let tx = dest.x + dx;
                if sx < 0 || sx >= tex_w || tx < 0 || tx >= target_w as i32 {
                    continue;
                }
                let src = self.shade(texture.texel(sx as u32, sy as u32), tint);
                let dst = self.target.get_pixel(tx as u32, ty as u32).0;
                self.target.put_pixel(tx as u32, ty as u32, Rgba(blend(src, dst)));
            }
        }
    }
}
