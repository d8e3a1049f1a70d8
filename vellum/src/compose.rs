//! Windowed drawing of rendered text.
//!
//! A draw copies a scrolled window of the document texture onto the surface,
//! then redraws every visible navigable link with its state hue and every
//! visible image with its state variant.

use tracing::trace;

use crate::clip::clip_region;
use crate::document::{Document, Texture};
use crate::error::Result;
use crate::primitives::{Point, Rect, Size};
use crate::rendered_text::RenderedText;
use crate::surface::Surface;
use crate::tint::Tint;

/// True if a window scrolled to `scroll` can show any of `content`.
///
/// Horizontally the window may sit up to `max_width` left of the content,
/// vertically up to one content height above it.
#[inline]
pub fn window_visible(scroll: Point, content: Size, max_width: i32) -> bool {
    !(scroll.x > content.width
        || scroll.x < -max_width
        || scroll.y > content.height
        || scroll.y < -content.height)
}

/// Source rectangle for a window of `dest`'s size anchored at `scroll`.
///
/// Where the window would run past the content's right or bottom edge, both
/// the source and `dest` shrink to the remaining extent. Returns the
/// possibly shrunk destination and the source.
#[inline]
pub fn fit_window(mut dest: Rect, scroll: Point, content: Size) -> (Rect, Rect) {
    let mut source = Rect::new(scroll.x, scroll.y, dest.width, dest.height);

    if source.right() > content.width {
        source.width = content.width - source.x;
        dest.width = source.width;
    }
    if source.bottom() > content.height {
        source.height = content.height - source.y;
        dest.height = source.height;
    }

    (dest, source)
}

impl<D: Document> RenderedText<D> {
    /// Draw the whole document with its top-left at `position`.
    pub fn draw<S>(&mut self, surface: &mut S, position: Point, tint: Option<Tint>) -> Result<()>
    where
        S: Surface<D::Texture> + ?Sized,
    {
        let dest = Rect::new(position.x, position.y, self.width()?, self.height()?);
        self.draw_window(surface, dest, 0, 0, tint)
    }

    /// Draw the part of the document visible through `dest` when scrolled
    /// by (`scroll_x`, `scroll_y`).
    pub fn draw_window<S>(
        &mut self,
        surface: &mut S,
        dest: Rect,
        scroll_x: i32,
        scroll_y: i32,
        tint: Option<Tint>,
    ) -> Result<()>
    where
        S: Surface<D::Texture> + ?Sized,
    {
        if self.text().is_none() {
            return Ok(());
        }

        let max_width = self.max_width();
        let interaction = self.interaction;
        let document = self.render_if_necessary()?;

        let scroll = Point::new(scroll_x, scroll_y);
        let content = Size::new(document.width(), document.height());
        if !window_visible(scroll, content, max_width) {
            trace!(?scroll, ?content, "window outside content");
            return Ok(());
        }

        let (dest, source) = fit_window(dest, scroll, content);
        let texture = document.texture();
        surface.blit(texture, dest, source, tint.unwrap_or(Tint::IDENTITY));

        for link in document.links() {
            if !link.is_navigable() {
                continue;
            }
            let Some(clipped) = clip_region(scroll, link.area, dest) else {
                trace!(index = link.index, "link culled");
                continue;
            };
            let hovered = interaction.hovered == Some(link.index);
            let hue = link.style.hue_for(hovered, interaction.pressed);
            surface.blit_at(texture, clipped.position, clipped.source, Tint::hue(hue));
        }

        for image in document.images() {
            let Some(clipped) = clip_region(scroll, image.area, dest) else {
                trace!(area = ?image.area, "image culled");
                continue;
            };
            let variant = image.select_texture(interaction.hovered, interaction.pressed);

            // Variants may not match the declared area; never read past the
            // chosen bitmap.
            let source = Rect::new(
                clipped.source.x - image.area.x,
                clipped.source.y - image.area.y,
                clipped.source.width.min(variant.width()),
                clipped.source.height.min(variant.height()),
            );
            surface.blit_at(variant, clipped.position, source, Tint::pass_through());
        }

        Ok(())
    }
}
