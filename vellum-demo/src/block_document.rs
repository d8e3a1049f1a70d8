//! Block-glyph document engine.
//!
//! A stand-in layout engine: wraps words on display-column boundaries and
//! paints every visible character as a solid block. Words that look like
//! URLs become links; the token `:icon:` becomes an embedded image with
//! hover and pressed variants.

use std::sync::Arc;

use image::{Rgba, RgbaImage};
use unicode_width::UnicodeWidthChar;
use vellum::{Document, Hue, ImageRegion, LayoutError, LinkRegion, LinkStyle, Rect, Result};

/// Pixel size of one display column / line.
const CELL_W: i32 = 6;
const CELL_H: i32 = 12;

/// Largest texture the engine will allocate on either axis.
const MAX_TEXTURE_SIZE: i32 = 8192;

const ICON_TOKEN: &str = ":icon:";
const ICON_SIZE: i32 = 10;

const INK: Rgba<u8> = Rgba([230, 230, 230, 255]);

pub const LINK_STYLE: LinkStyle = LinkStyle {
    color: Hue(1),
    hover_color: Hue(2),
    active_color: Hue(3),
};

pub type Bitmap = Arc<RgbaImage>;

pub struct BlockDocument {
    text: String,
    max_width: i32,
    collapse_content: bool,
    width: i32,
    height: i32,
    texture: Bitmap,
    links: Vec<LinkRegion>,
    images: Vec<ImageRegion<Bitmap>>,
}

/// A word placed on the page.
struct Placed<'a> {
    word: &'a str,
    x: i32,
    y: i32,
    width: i32,
}

impl BlockDocument {
    fn layout(&self) -> Vec<Placed<'_>> {
        let columns = (self.max_width / CELL_W).max(1);
        let mut placed = Vec::new();
        let mut line = 0;
        let mut column = 0;
        let mut started = false;

        for paragraph in self.text.split('\n') {
            if self.collapse_content && paragraph.trim().is_empty() {
                continue;
            }
            if started {
                line += 1;
                column = 0;
            }
            started = true;
            for word in paragraph.split_whitespace() {
                let cols = word_columns(word);
                let needed = if column == 0 { cols } else { cols + 1 };
                if column > 0 && column + needed > columns {
                    line += 1;
                    column = 0;
                }
                if column > 0 {
                    column += 1;
                }
                placed.push(Placed {
                    word,
                    x: column * CELL_W,
                    y: line * CELL_H,
                    width: cols * CELL_W,
                });
                column += cols;
            }
        }
        placed
    }
}

fn word_columns(word: &str) -> i32 {
    if word == ICON_TOKEN {
        (ICON_SIZE + CELL_W - 1) / CELL_W
    } else {
        word.chars().map(char_columns).sum()
    }
}

/// Columns painted for one character. Words are measured with the same rule.
fn char_columns(ch: char) -> i32 {
    ch.width().unwrap_or(0) as i32
}

fn is_link(word: &str) -> bool {
    word.starts_with("http://") || word.starts_with("https://")
}

fn icon(rgb: [u8; 3]) -> Bitmap {
    let [r, g, b] = rgb;
    Arc::new(RgbaImage::from_pixel(
        ICON_SIZE as u32,
        ICON_SIZE as u32,
        Rgba([r, g, b, 255]),
    ))
}

fn paint_word(canvas: &mut RgbaImage, placed: &Placed<'_>) {
    let mut x = placed.x;
    for ch in placed.word.chars() {
        let cols = char_columns(ch);
        for py in placed.y + 2..placed.y + CELL_H - 2 {
            for px in x + 1..x + cols * CELL_W - 1 {
                canvas.put_pixel(px as u32, py as u32, INK);
            }
        }
        x += cols * CELL_W;
    }
}

impl Document for BlockDocument {
    type Texture = Bitmap;

    fn create(text: &str, max_width: i32, collapse_content: bool) -> Self {
        Self {
            text: text.to_string(),
            max_width,
            collapse_content,
            width: 0,
            height: 0,
            texture: Arc::new(RgbaImage::new(0, 0)),
            links: Vec::new(),
            images: Vec::new(),
        }
    }

    fn reset(&mut self) {
        self.width = 0;
        self.height = 0;
        self.links.clear();
        self.images.clear();
    }

    fn set_markup(&mut self, text: &str, max_width: i32) {
        self.text.clear();
        self.text.push_str(text);
        self.max_width = max_width;
    }

    fn render(&mut self) -> Result<()> {
        let placed = self.layout();
        let width = placed.iter().map(|p| p.x + p.width).max().unwrap_or(0);
        let height = placed.iter().map(|p| p.y + CELL_H).max().unwrap_or(0);
        if width > MAX_TEXTURE_SIZE || height > MAX_TEXTURE_SIZE {
            return Err(LayoutError::Texture { width, height });
        }

        let mut canvas = RgbaImage::new(width as u32, height as u32);
        let mut links = Vec::new();
        let mut images = Vec::new();

        for p in &placed {
            let area = Rect::new(p.x, p.y, p.width, CELL_H);
            if p.word == ICON_TOKEN {
                // Hover-only region so the icon can react to the pointer.
                let index = links.len();
                let icon_area = Rect::new(p.x, p.y + (CELL_H - ICON_SIZE) / 2, ICON_SIZE, ICON_SIZE);
                links.push(LinkRegion {
                    index,
                    area: icon_area,
                    target: None,
                    style: LINK_STYLE,
                });
                images.push(
                    ImageRegion::new(icon_area, icon([90, 140, 220]))
                        .with_over(icon([120, 180, 255]))
                        .with_down(icon([40, 80, 160]))
                        .linked_to(index),
                );
                continue;
            }

            paint_word(&mut canvas, p);
            if is_link(p.word) {
                links.push(LinkRegion {
                    index: links.len(),
                    area,
                    target: Some(p.word.to_string()),
                    style: LINK_STYLE,
                });
            }
        }

        self.width = width;
        self.height = height;
        self.texture = Arc::new(canvas);
        self.links = links;
        self.images = images;
        Ok(())
    }

    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn texture(&self) -> &Bitmap {
        &self.texture
    }

    fn links(&self) -> &[LinkRegion] {
        &self.links
    }

    fn images(&self) -> &[ImageRegion<Bitmap>] {
        &self.images
    }
}
