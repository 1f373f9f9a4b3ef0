use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use fontdue::{Font, FontSettings, Metrics};
use image::RgbImage;

use crate::color::Color;

/// Monospace fonts tried in order when no font is given explicitly.
const FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/SF-Mono-Regular.otf",
    "/System/Library/Fonts/Monaco.ttf",
    "/Library/Fonts/Consolas.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
    "C:\\Windows\\Fonts\\consola.ttf",
];

/// Font sizes (px) and spacing for a two-line name + hex label.
#[derive(Debug, Clone, Copy)]
pub struct LabelStyle {
    pub name_px: f32,
    pub hex_px: f32,
    pub gap: u32,
    pub shadow_offset: u32,
}

pub const SWATCH_LABEL: LabelStyle = LabelStyle {
    name_px: 24.0,
    hex_px: 20.0,
    gap: 8,
    shadow_offset: 2,
};

pub const PALETTE_LABEL: LabelStyle = LabelStyle {
    name_px: 20.0,
    hex_px: 18.0,
    gap: 6,
    shadow_offset: 2,
};

/// A font used to draw swatch labels.
pub struct LabelFont {
    font: Font,
    path: PathBuf,
}

impl std::fmt::Debug for LabelFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelFont").field("path", &self.path).finish()
    }
}

impl LabelFont {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("failed to read font: {}", path.display()))?;
        let font = Font::from_bytes(bytes, FontSettings::default())
            .map_err(|err| anyhow!("failed to load font {}: {err}", path.display()))?;
        Ok(Self {
            font,
            path: path.to_path_buf(),
        })
    }

    /// First loadable font from the platform candidates, if any.
    pub fn discover() -> Option<Self> {
        FONT_CANDIDATES
            .iter()
            .map(Path::new)
            .filter(|path| path.exists())
            .find_map(|path| match Self::load(path) {
                Ok(font) => Some(font),
                Err(err) => {
                    log::debug!("{err:#}");
                    None
                }
            })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn layout(&self, text: &str, px: f32) -> TextRun {
        let mut glyphs = Vec::new();
        let mut pen = 0.0f32;
        let mut top = 0i32;
        let mut bottom = 0i32;
        for ch in text.chars() {
            let (metrics, coverage) = self.font.rasterize(ch, px);
            top = top.max(metrics.ymin + metrics.height as i32);
            bottom = bottom.min(metrics.ymin);
            glyphs.push(PlacedGlyph {
                x: pen.round() as i32,
                metrics,
                coverage,
            });
            pen += metrics.advance_width;
        }
        TextRun {
            glyphs,
            width: pen.ceil() as u32,
            top,
            bottom,
        }
    }
}

struct PlacedGlyph {
    x: i32,
    metrics: Metrics,
    coverage: Vec<u8>,
}

/// A laid-out line of text. `top` and `bottom` are measured from the
/// baseline, positive upwards.
struct TextRun {
    glyphs: Vec<PlacedGlyph>,
    width: u32,
    top: i32,
    bottom: i32,
}

impl TextRun {
    fn height(&self) -> u32 {
        (self.top - self.bottom) as u32
    }

    /// Blend the run into `img` with its bounding box's top-left at (x, y).
    fn draw(&self, img: &mut RgbImage, x: i32, y: i32, color: Color) {
        let baseline = y + self.top;
        for glyph in &self.glyphs {
            let m = &glyph.metrics;
            let gx0 = x + glyph.x + m.xmin;
            let gy0 = baseline - (m.ymin + m.height as i32);
            for (i, &alpha) in glyph.coverage.iter().enumerate() {
                if alpha == 0 {
                    continue;
                }
                let px = gx0 + (i % m.width) as i32;
                let py = gy0 + (i / m.width) as i32;
                if px < 0 || py < 0 || px as u32 >= img.width() || py as u32 >= img.height() {
                    continue;
                }
                blend(img.get_pixel_mut(px as u32, py as u32), color, alpha);
            }
        }
    }
}

fn blend(dst: &mut image::Rgb<u8>, color: Color, alpha: u8) {
    let a = u16::from(alpha);
    for (c, v) in dst.0.iter_mut().zip([color.r, color.g, color.b]) {
        *c = ((u16::from(*c) * (255 - a) + u16::from(v) * a + 127) / 255) as u8;
    }
}

/// Draw the uppercase `name` above `hex`, centered in the cell at
/// (x, y, size, size), with a one-shade drop shadow. Text color is picked
/// against `fill`.
pub fn draw_label(
    img: &mut RgbImage,
    font: &LabelFont,
    cell: (u32, u32, u32),
    fill: Color,
    name: &str,
    hex: &str,
    style: LabelStyle,
) {
    let (x, y, size) = cell;
    let text = fill.text_color();
    let shadow = if text == Color::WHITE {
        Color::BLACK
    } else {
        Color::WHITE
    };

    let name = font.layout(&name.to_uppercase(), style.name_px);
    let hex = font.layout(&hex.to_uppercase(), style.hex_px);

    let total = name.height() + style.gap + hex.height();
    let top = y as i32 + (size as i32 - total as i32) / 2;
    let centered = |run: &TextRun| x as i32 + (size as i32 - run.width as i32) / 2;
    let offset = style.shadow_offset as i32;

    let lines = [
        (&name, centered(&name), top),
        (&hex, centered(&hex), top + (name.height() + style.gap) as i32),
    ];
    for (run, rx, ry) in lines {
        run.draw(img, rx + offset, ry + offset, shadow);
        run.draw(img, rx, ry, text);
    }
}
