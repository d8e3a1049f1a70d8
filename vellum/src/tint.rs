//! Hue identifiers and per-blit tint instructions.
//!
//! Link styles name their colors by hue id rather than RGBA so that a theme
//! can be swapped without re-laying out documents. The surface resolves a
//! hue through a [`Palette`] at blit time.

use std::collections::HashMap;

use serde::Deserialize;

use crate::primitives::Color;

/// A palette color identifier. `Hue::NONE` means "no specific hue".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(transparent)]
pub struct Hue(pub u16);

impl Hue {
    pub const NONE: Self = Self(0);

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

/// Color instruction attached to every blit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tint {
    /// Palette hue to modulate with. Ignored when `pass_through` is set.
    pub hue: Hue,
    /// Only recolor grey texels, leaving saturated ones untouched.
    pub partial: bool,
    /// Draw at reduced opacity.
    pub translucent: bool,
    /// Keep the texture's native colors regardless of `hue`.
    pub pass_through: bool,
}

impl Tint {
    /// No recoloring. Used when a caller passes no tint.
    pub const IDENTITY: Self = Self {
        hue: Hue::NONE,
        partial: false,
        translucent: false,
        pass_through: false,
    };

    /// Recolor with a palette hue.
    #[inline]
    pub const fn hue(hue: Hue) -> Self {
        Self { hue, ..Self::IDENTITY }
    }

    /// Native colors, no hue shift (embedded images).
    #[inline]
    pub const fn pass_through() -> Self {
        Self {
            pass_through: true,
            ..Self::IDENTITY
        }
    }

    #[inline]
    pub const fn with_partial(self, partial: bool) -> Self {
        Self { partial, ..self }
    }

    #[inline]
    pub const fn with_translucent(self, translucent: bool) -> Self {
        Self { translucent, ..self }
    }

    /// True if this tint leaves texel colors unchanged.
    #[inline]
    pub const fn keeps_native_colors(&self) -> bool {
        self.pass_through || self.hue.is_none()
    }
}

/// Hue id → color lookup.
///
/// Deserializes from a JSON object keyed by hue id:
/// `{ "1": [255, 0, 0], "2": [0, 0, 255] }`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    colors: HashMap<u16, [u8; 3]>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace a hue.
    pub fn insert(&mut self, hue: Hue, rgb: [u8; 3]) -> &mut Self {
        self.colors.insert(hue.0, rgb);
        self
    }

    /// Resolve a hue. Unknown hues (and `Hue::NONE`) resolve to white,
    /// which is a no-op under modulation.
    pub fn resolve(&self, hue: Hue) -> Color {
        match self.colors.get(&hue.0) {
            Some(&[r, g, b]) if !hue.is_none() => Color::rgb8(r, g, b),
            _ => Color::WHITE,
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_keeps_native_colors() {
        assert!(Tint::IDENTITY.keeps_native_colors());
        assert!(Tint::pass_through().keeps_native_colors());
        let forced = Tint {
            pass_through: true,
            ..Tint::hue(Hue(5))
        };
        assert!(forced.keeps_native_colors());
        assert!(!Tint::hue(Hue(5)).keeps_native_colors());
    }

    #[test]
    fn default_tint_is_identity() {
        assert_eq!(Tint::default(), Tint::IDENTITY);
    }

    #[test]
    fn palette_resolves_known_and_unknown() {
        let mut palette = Palette::new();
        palette.insert(Hue(3), [255, 0, 0]);

        assert_eq!(palette.resolve(Hue(3)), Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(palette.resolve(Hue(4)), Color::WHITE);
        assert_eq!(palette.resolve(Hue::NONE), Color::WHITE);
    }

    #[test]
    fn palette_none_hue_is_never_remapped() {
        let mut palette = Palette::new();
        palette.insert(Hue::NONE, [0, 0, 0]);
        assert_eq!(palette.resolve(Hue::NONE), Color::WHITE);
    }
}
