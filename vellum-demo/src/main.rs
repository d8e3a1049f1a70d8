//! Vellum demo - renders a scrolled text window to a PNG.
//!
//! Usage: `vellum-demo [scene.json] [out.png]`
//!
//! Without a scene file a built-in paragraph is laid out with the block-glyph
//! engine, scrolled, and drawn with its first link hovered.

mod block_document;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;
use vellum::{Color, Interaction, Rect, RenderConfig, RenderedText};

use block_document::BlockDocument;

const SAMPLE_TEXT: &str = "Vellum caches the laid out page and only re-renders when the text \
or wrap width changes. Links such as https://example.com/docs light up under the pointer.\n\n\
Embedded images :icon: swap bitmaps on hover and press.\n\
Scroll the window to see the rest of the page.";

/// Scene description loaded from JSON.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct Scene {
    render: RenderConfig,
    text: String,
    max_width: i32,
    window: [i32; 4],
    scroll: [i32; 2],
    hovered: Option<usize>,
    pressed: bool,
    background: [u8; 3],
    output: PathBuf,
}

impl Default for Scene {
    fn default() -> Self {
        let mut render = RenderConfig::default();
        render
            .palette
            .insert(block_document::LINK_STYLE.color, [80, 140, 255])
            .insert(block_document::LINK_STYLE.hover_color, [255, 200, 60])
            .insert(block_document::LINK_STYLE.active_color, [255, 90, 90]);
        Self {
            render,
            text: SAMPLE_TEXT.to_string(),
            max_width: 0,
            window: [8, 8, 240, 48],
            scroll: [0, 12],
            hovered: Some(0),
            pressed: false,
            background: [24, 24, 32],
            output: PathBuf::from("vellum-demo.png"),
        }
    }
}

fn load_scene(path: &Path) -> anyhow::Result<Scene> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading scene {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing scene {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let mut scene = match args.next() {
        Some(path) => load_scene(Path::new(&path))?,
        None => Scene::default(),
    };
    if let Some(output) = args.next() {
        scene.output = PathBuf::from(output);
    }

    let [x, y, w, h] = scene.window;
    if w <= 0 || h <= 0 {
        bail!("window must have a positive size, got {w}x{h}");
    }

    tracing::info!(output = %scene.output.display(), "Starting vellum demo");

    let mut text: RenderedText<BlockDocument> =
        RenderedText::with_config(Some(scene.text.clone()), scene.max_width, &scene.render);
    text.interaction = Interaction {
        hovered: scene.hovered,
        pressed: scene.pressed,
    };

    let (width, height) = (text.width()?, text.height()?);
    tracing::info!(width, height, links = text.links().len(), "Laid out document");

    let canvas_w = (x + w + x).max(1) as u32;
    let canvas_h = (y + h + y).max(1) as u32;
    let mut surface = scene.render.surface(canvas_w, canvas_h);
    let [r, g, b] = scene.background;
    surface.clear(Color::rgb8(r, g, b));

    let [scroll_x, scroll_y] = scene.scroll;
    text.draw_window(&mut surface, Rect::new(x, y, w, h), scroll_x, scroll_y, None)?;

    surface
        .save(&scene.output)
        .with_context(|| format!("writing {}", scene.output.display()))?;
    tracing::info!(output = %scene.output.display(), "Wrote frame");
    Ok(())
}
