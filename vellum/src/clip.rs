//! Region clipping against a scrolled destination window.
//!
//! Maps a document-local region rectangle through a scroll offset into a
//! destination clip rectangle, producing where to draw and which part of the
//! source to read. Regions entirely outside the window are rejected before
//! any size adjustment is made.

use crate::primitives::{Point, Rect};

/// A region that survived clipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClippedRegion {
    /// Destination-space top-left to draw at.
    pub position: Point,
    /// Document-local source rectangle to read.
    pub source: Rect,
}

/// Clip `region` (document-local) against `clip_to` (destination space)
/// with the document scrolled by `offset`.
///
/// Edge checks run per axis in a fixed order: reject fully-before, clip the
/// leading edge, reject fully-after, then trim the trailing edge. Clipping
/// the leading edge before the fully-after test keeps regions that straddle
/// the top or left edge. Returns `None` when the region is not visible.
pub fn clip_region(offset: Point, region: Rect, clip_to: Rect) -> Option<ClippedRegion> {
    let shift = clip_to.origin() - offset;
    let mut position = region.origin() + shift;
    let mut source = region;
    let dest = region.translate(shift);

    // Vertical
    if dest.bottom() < clip_to.top() {
        return None;
    }
    if dest.top() < clip_to.top() {
        let overlap = clip_to.top() - dest.top();
        source.y += overlap;
        source.height -= overlap;
        position.y += overlap;
    }
    if dest.top() > clip_to.bottom() {
        return None;
    }
    if dest.bottom() > clip_to.bottom() {
        source.height += clip_to.bottom() - dest.bottom();
    }

    // Horizontal
    if dest.right() < clip_to.left() {
        return None;
    }
    if dest.left() < clip_to.left() {
        let overlap = clip_to.left() - dest.left();
        source.x += overlap;
        source.width -= overlap;
        position.x += overlap;
    }
    if dest.left() > clip_to.right() {
        return None;
    }
    if dest.right() > clip_to.right() {
        source.width += clip_to.right() - dest.right();
    }

    Some(ClippedRegion { position, source })
}
