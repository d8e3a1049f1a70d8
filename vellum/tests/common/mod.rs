//! Scripted layout engine for integration tests.
//!
//! `ScriptedDocument` sizes plain text as fixed 6x10 cells wrapped at the
//! max width, or uses a layout installed with [`script`] for region tests.
//! Constructions, resets and render passes are counted per test thread.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::sync::Arc;

use image::{Rgba, RgbaImage};
use vellum::{Document, ImageRegion, LayoutError, LinkRegion, Result, Size};

pub type Tex = Arc<RgbaImage>;

pub const CELL_W: i32 = 6;
pub const CELL_H: i32 = 10;

/// Markup that makes the scripted engine fail.
pub const FAIL: &str = "!fail";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub created: usize,
    pub resets: usize,
    pub renders: usize,
}

#[derive(Clone)]
pub struct Script {
    pub size: Size,
    pub links: Vec<LinkRegion>,
    pub images: Vec<ImageRegion<Tex>>,
}

thread_local! {
    static STATS: Cell<Stats> = Cell::new(Stats::default());
    static SCRIPT: RefCell<Option<Script>> = const { RefCell::new(None) };
}

pub fn stats() -> Stats {
    STATS.with(|s| s.get())
}

fn bump(f: impl FnOnce(&mut Stats)) {
    STATS.with(|s| {
        let mut v = s.get();
        f(&mut v);
        s.set(v);
    });
}

/// Install a fixed layout for documents rendered on this thread.
pub fn script(size: Size, links: Vec<LinkRegion>, images: Vec<ImageRegion<Tex>>) {
    SCRIPT.with(|s| *s.borrow_mut() = Some(Script { size, links, images }));
}

/// Solid white-on-transparent texture.
pub fn solid(width: i32, height: i32, px: [u8; 4]) -> Tex {
    Arc::new(RgbaImage::from_pixel(width.max(0) as u32, height.max(0) as u32, Rgba(px)))
}

pub struct ScriptedDocument {
    pub text: String,
    pub max_width: i32,
    pub collapse_content: bool,
    size: Size,
    texture: Tex,
    links: Vec<LinkRegion>,
    images: Vec<ImageRegion<Tex>>,
}

impl Document for ScriptedDocument {
    type Texture = Tex;

    fn create(text: &str, max_width: i32, collapse_content: bool) -> Self {
        bump(|s| s.created += 1);
        Self {
            text: text.to_string(),
            max_width,
            collapse_content,
            size: Size::ZERO,
            texture: solid(0, 0, [0, 0, 0, 0]),
            links: Vec::new(),
            images: Vec::new(),
        }
    }

    fn reset(&mut self) {
        bump(|s| s.resets += 1);
        self.size = Size::ZERO;
        self.links.clear();
        self.images.clear();
    }

    fn set_markup(&mut self, text: &str, max_width: i32) {
        self.text = text.to_string();
        self.max_width = max_width;
    }

    fn render(&mut self) -> Result<()> {
        bump(|s| s.renders += 1);
        if self.text == FAIL {
            return Err(LayoutError::Engine("scripted failure".into()));
        }

        match SCRIPT.with(|s| s.borrow().clone()) {
            Some(script) => {
                self.size = script.size;
                self.links = script.links;
                self.images = script.images;
            }
            None => {
                let per_line = (self.max_width / CELL_W).max(1);
                let chars = self.text.chars().count() as i32;
                let lines = (chars + per_line - 1) / per_line;
                let width = if lines > 1 { per_line * CELL_W } else { chars * CELL_W };
                self.size = Size::new(width, lines * CELL_H);
            }
        }
        self.texture = solid(self.size.width, self.size.height, [255, 255, 255, 255]);
        Ok(())
    }

    fn width(&self) -> i32 {
        self.size.width
    }

    fn height(&self) -> i32 {
        self.size.height
    }

    fn texture(&self) -> &Tex {
        &self.texture
    }

    fn links(&self) -> &[LinkRegion] {
        &self.links
    }

    fn images(&self) -> &[ImageRegion<Tex>] {
        &self.images
    }
}
