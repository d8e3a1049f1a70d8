//! Rendered Text
//!
//! Owns one [`Document`] and re-lays it out lazily. Setters only mark the
//! cache dirty; the next query that needs layout results (width, height,
//! texture, draw) performs a single render pass.
//!
//! The document is created on the first render and then reused: later
//! renders reset it in place and feed it the new markup.

use tracing::debug;

use crate::config::RenderConfig;
use crate::document::{Document, ImageRegion, LinkRegion};
use crate::error::Result;
use crate::primitives::{Point, Rect};

/// Pointer state supplied by the input layer.
///
/// Not validated: the input layer keeps `hovered` in sync with the region
/// indices of the current document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Interaction {
    /// Index of the link region under the pointer.
    pub hovered: Option<usize>,
    /// Pointer button held.
    pub pressed: bool,
}

/// A lazily rendered markup document.
pub struct RenderedText<D: Document> {
    text: Option<String>,
    max_width: i32,
    default_max_width: i32,
    collapse_content: bool,
    must_render: bool,
    document: Option<D>,
    /// Hover/press state used to pick link hues and image variants.
    pub interaction: Interaction,
}

impl<D: Document> RenderedText<D> {
    /// Create rendered text with the default configuration.
    pub fn new(text: impl Into<String>, max_width: i32, collapse_content: bool) -> Self {
        let config = RenderConfig {
            collapse_content,
            ..RenderConfig::default()
        };
        Self::with_config(Some(text.into()), max_width, &config)
    }

    /// Create rendered text with no markup. Queries report zero size and
    /// drawing is a no-op until text is set.
    pub fn without_text(max_width: i32, collapse_content: bool) -> Self {
        let config = RenderConfig {
            collapse_content,
            ..RenderConfig::default()
        };
        Self::with_config(None, max_width, &config)
    }

    pub fn with_config(text: Option<String>, max_width: i32, config: &RenderConfig) -> Self {
        Self {
            text,
            max_width: config.resolve_width(max_width),
            default_max_width: config.resolve_width(0),
            collapse_content: config.collapse_content,
            must_render: true,
            document: None,
            interaction: Interaction::default(),
        }
    }

    // =====================================================================
    // Inputs
    // =====================================================================

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Replace the markup. Setting the current value is a no-op.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.text.as_deref() != Some(text.as_str()) {
            self.must_render = true;
            self.text = Some(text);
        }
    }

    /// Remove the markup.
    pub fn clear_text(&mut self) {
        if self.text.take().is_some() {
            self.must_render = true;
        }
    }

    pub fn max_width(&self) -> i32 {
        self.max_width
    }

    /// Set the wrap width. Zero or negative selects the default width.
    pub fn set_max_width(&mut self, max_width: i32) {
        let max_width = if max_width > 0 {
            max_width
        } else {
            self.default_max_width
        };
        if self.max_width != max_width {
            self.must_render = true;
            self.max_width = max_width;
        }
    }

    pub fn collapse_content(&self) -> bool {
        self.collapse_content
    }

    /// True if the next layout query will re-render.
    pub fn is_dirty(&self) -> bool {
        self.must_render || self.document.is_none()
    }

    // =====================================================================
    // Layout queries
    // =====================================================================

    /// Rendered width in pixels, or 0 without text.
    pub fn width(&mut self) -> Result<i32> {
        if self.text.is_none() {
            return Ok(0);
        }
        Ok(self.render_if_necessary()?.width())
    }

    /// Rendered height in pixels, or 0 without text.
    pub fn height(&mut self) -> Result<i32> {
        if self.text.is_none() {
            return Ok(0);
        }
        Ok(self.render_if_necessary()?.height())
    }

    /// The rasterized document.
    pub fn texture(&mut self) -> Result<&D::Texture> {
        Ok(self.render_if_necessary()?.texture())
    }

    /// Link regions from the last render; empty before the first one.
    pub fn links(&self) -> &[LinkRegion] {
        match &self.document {
            Some(doc) => doc.links(),
            None => &[],
        }
    }

    /// Image regions from the last render; empty before the first one.
    pub fn images(&self) -> &[ImageRegion<D::Texture>] {
        match &self.document {
            Some(doc) => doc.images(),
            None => &[],
        }
    }

    /// The owned document, if it has been created.
    pub fn document(&self) -> Option<&D> {
        self.document.as_ref()
    }

    /// Link region under a destination-space point for content drawn into
    /// `dest` scrolled by `scroll`. Uses the last rendered layout.
    pub fn region_at(&self, point: Point, dest: Rect, scroll: Point) -> Option<usize> {
        if !dest.contains(point) {
            return None;
        }
        let local = point - dest.origin() + scroll;
        self.links()
            .iter()
            .find(|link| link.area.contains(local))
            .map(|link| link.index)
    }

    /// Render now if anything changed since the last render.
    pub fn refresh(&mut self) -> Result<()> {
        self.render_if_necessary().map(|_| ())
    }

    pub(crate) fn render_if_necessary(&mut self) -> Result<&mut D> {
        let text = self.text.as_deref().unwrap_or_default();
        let document = match self.document.take() {
            Some(doc) if !self.must_render => return Ok(self.document.insert(doc)),
            Some(mut doc) => {
                doc.reset();
                doc.set_markup(text, self.max_width);
                doc
            }
            None => {
                debug!(max_width = self.max_width, "creating document");
                D::create(text, self.max_width, self.collapse_content)
            }
        };

        let document = self.document.insert(document);
        document.render()?;
        self.must_render = false;
        debug!(
            width = document.width(),
            height = document.height(),
            links = document.links().len(),
            images = document.images().len(),
            "rendered document"
        );
        Ok(document)
    }
}
