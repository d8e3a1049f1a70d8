//! Cache behaviour of `RenderedText`: when it renders, how often, and what
//! the layout queries report.

mod common;

use common::{CELL_H, CELL_W, FAIL, ScriptedDocument, Stats, stats};
use vellum::{DEFAULT_MAX_WIDTH, LayoutError, Point, Rect, RenderConfig, RenderedText};

type Text = RenderedText<ScriptedDocument>;

// =========================================================================
// Construction and first render
// =========================================================================

#[test]
fn new_text_is_dirty_until_queried() {
    let mut text = Text::new("hello", 300, false);
    assert!(text.is_dirty());
    assert_eq!(stats(), Stats::default());

    assert_eq!(text.width().unwrap(), 5 * CELL_W);
    assert!(!text.is_dirty());
    assert_eq!(stats(), Stats { created: 1, resets: 0, renders: 1 });
}

#[test]
fn first_render_passes_inputs_to_engine() {
    let mut text = Text::new("abc", 120, true);
    text.refresh().unwrap();

    let doc = text.document().unwrap();
    assert_eq!(doc.text, "abc");
    assert_eq!(doc.max_width, 120);
    assert!(doc.collapse_content);
}

#[test]
fn repeated_queries_render_once() {
    let mut text = Text::new("hello world", 300, false);
    text.width().unwrap();
    text.height().unwrap();
    text.texture().unwrap();
    text.width().unwrap();

    assert_eq!(stats().renders, 1);
}

// =========================================================================
// Invalidation
// =========================================================================

#[test]
fn setting_same_text_is_noop() {
    let mut text = Text::new("same", 300, false);
    text.refresh().unwrap();

    text.set_text("same");
    assert!(!text.is_dirty());
    text.height().unwrap();
    assert_eq!(stats().renders, 1);
}

#[test]
fn text_change_rerenders_once_and_reuses_document() {
    let mut text = Text::new("short", 300, false);
    assert_eq!(text.width().unwrap(), 5 * CELL_W);

    text.set_text("a bit longer");
    assert!(text.is_dirty());
    assert_eq!(text.width().unwrap(), 12 * CELL_W);
    assert_eq!(text.height().unwrap(), CELL_H);

    assert_eq!(stats(), Stats { created: 1, resets: 1, renders: 2 });
    assert_eq!(text.document().unwrap().text, "a bit longer");
}

#[test]
fn width_change_rewraps() {
    // 20 chars at 6px: one line at 300px, two lines at 60px (10 per line).
    let mut text = Text::new("abcdefghijklmnopqrst", 300, false);
    assert_eq!(text.height().unwrap(), CELL_H);

    text.set_max_width(60);
    assert_eq!(text.max_width(), 60);
    assert_eq!(text.height().unwrap(), 2 * CELL_H);
    assert_eq!(text.width().unwrap(), 60);
    assert_eq!(stats().renders, 2);
    assert_eq!(text.document().unwrap().max_width, 60);
}

#[test]
fn non_positive_width_resolves_to_default() {
    let text = Text::new("x", 0, false);
    assert_eq!(text.max_width(), DEFAULT_MAX_WIDTH);

    let mut text = Text::new("x", 300, false);
    text.refresh().unwrap();
    text.set_max_width(-5);
    assert_eq!(text.max_width(), 200);
    assert!(text.is_dirty());
    text.refresh().unwrap();

    // Resolves to the same value again: nothing to do.
    text.set_max_width(0);
    assert!(!text.is_dirty());
    text.set_max_width(200);
    assert!(!text.is_dirty());
    assert_eq!(stats().renders, 2);
}

#[test]
fn configured_default_width_is_used() {
    let config = RenderConfig {
        default_max_width: 90,
        ..RenderConfig::default()
    };
    let mut text = Text::with_config(Some("x".into()), -1, &config);
    assert_eq!(text.max_width(), 90);
    text.set_max_width(400);
    text.set_max_width(0);
    assert_eq!(text.max_width(), 90);
}

// =========================================================================
// Absent text
// =========================================================================

#[test]
fn absent_text_reports_zero_without_layout() {
    let mut text = Text::without_text(300, false);
    assert_eq!(text.width().unwrap(), 0);
    assert_eq!(text.height().unwrap(), 0);
    assert!(text.links().is_empty());
    assert!(text.document().is_none());
    assert_eq!(stats(), Stats::default());
}

#[test]
fn clearing_text_marks_dirty_and_zeroes_size() {
    let mut text = Text::new("gone soon", 300, false);
    text.refresh().unwrap();

    text.clear_text();
    assert!(text.is_dirty());
    assert_eq!(text.text(), None);
    assert_eq!(text.width().unwrap(), 0);

    // Clearing again changes nothing.
    text.refresh().unwrap();
    text.clear_text();
    assert!(!text.is_dirty());
}

#[test]
fn texture_without_text_lays_out_empty_markup() {
    let mut text = Text::without_text(300, false);
    let texture = text.texture().unwrap();
    assert_eq!(texture.dimensions(), (0, 0));
    assert_eq!(text.document().unwrap().text, "");
}

// =========================================================================
// Failures
// =========================================================================

#[test]
fn engine_failure_propagates_and_retries() {
    let mut text = Text::new(FAIL, 300, false);
    assert!(matches!(text.width(), Err(LayoutError::Engine(_))));
    assert!(text.is_dirty());

    text.set_text("ok");
    assert_eq!(text.width().unwrap(), 2 * CELL_W);
    assert_eq!(stats(), Stats { created: 1, resets: 1, renders: 2 });
}

// =========================================================================
// Hit testing
// =========================================================================

#[test]
fn region_at_maps_through_scroll() {
    use vellum::{LinkRegion, LinkStyle, Size};

    common::script(
        Size::new(100, 100),
        vec![LinkRegion {
            index: 7,
            area: Rect::new(10, 60, 20, 10),
            target: Some("next".into()),
            style: LinkStyle::default(),
        }],
        Vec::new(),
    );
    let mut text = Text::new("scripted", 100, false);
    assert_eq!(text.region_at(Point::new(5, 5), Rect::new(0, 0, 50, 50), Point::ORIGIN), None);
    text.refresh().unwrap();

    let dest = Rect::new(100, 100, 50, 50);
    let scroll = Point::new(0, 50);
    // Window point (115, 115) is document point (15, 65).
    assert_eq!(text.region_at(Point::new(115, 115), dest, scroll), Some(7));
    assert_eq!(text.region_at(Point::new(145, 115), dest, scroll), None);
    // Outside the window entirely.
    assert_eq!(text.region_at(Point::new(15, 65), dest, scroll), None);
}
