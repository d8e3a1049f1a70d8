//! Blit targets.
//!
//! [`Surface`] is the narrow draw interface the compositor submits to.
//! [`SpriteBatch`] records submissions in order so they can be replayed onto
//! a GPU pass later (or inspected in tests).

use crate::document::Texture;
use crate::primitives::{Point, Rect};
use crate::tint::Tint;

/// Something textures can be blitted onto.
pub trait Surface<T: Texture + ?Sized> {
    /// Copy `source` (texture pixels) into `dest` (surface pixels).
    fn blit(&mut self, texture: &T, dest: Rect, source: Rect, tint: Tint);

    /// Blit at `position` without scaling.
    #[inline]
    fn blit_at(&mut self, texture: &T, position: Point, source: Rect, tint: Tint) {
        let dest = Rect::from_origin_size(position, source.size());
        self.blit(texture, dest, source, tint);
    }
}

/// A single recorded blit.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite<T> {
    pub texture: T,
    pub dest: Rect,
    pub source: Rect,
    pub tint: Tint,
}

/// A batch of sprites in submission order.
///
/// Textures are stored by value, so `T` should be a handle type
/// (`Arc<RgbaImage>`, an atlas id, ...).
#[derive(Debug, Clone)]
pub struct SpriteBatch<T> {
    sprites: Vec<Sprite<T>>,
}

impl<T> Default for SpriteBatch<T> {
    fn default() -> Self {
        Self { sprites: Vec::new() }
    }
}

impl<T> SpriteBatch<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all sprites.
    pub fn clear(&mut self) {
        self.sprites.clear();
    }

    pub fn sprites(&self) -> &[Sprite<T>] {
        &self.sprites
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Replay every recorded sprite onto another surface, in order.
    pub fn replay<S>(&self, target: &mut S)
    where
        T: Texture,
        S: Surface<T>,
    {
        for sprite in &self.sprites {
            target.blit(&sprite.texture, sprite.dest, sprite.source, sprite.tint);
        }
    }
}

impl<T: Texture + Clone> Surface<T> for SpriteBatch<T> {
    #[inline]
    fn blit(&mut self, texture: &T, dest: Rect, source: Rect, tint: Tint) {
        self.sprites.push(Sprite {
            texture: texture.clone(),
            dest,
            source,
            tint,
        });
    }
}
