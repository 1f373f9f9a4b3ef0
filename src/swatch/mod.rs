pub mod label;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::{Rgb, RgbImage};

use crate::color::Color;
use crate::pipeline::shades::Ramp;
use crate::theme::{Theme, ThemeColor};

use label::{draw_label, LabelFont, PALETTE_LABEL, SWATCH_LABEL};

/// Edge length of a base color swatch.
pub const SWATCH_SIZE: u32 = 200;
/// Edge length of each step in a shade strip.
pub const SHADE_SIZE: u32 = 100;
/// Maximum number of columns in the combined palette image.
pub const PALETTE_COLUMNS: u32 = 3;

fn rgb(color: Color) -> Rgb<u8> {
    Rgb([color.r, color.g, color.b])
}

/// A square filled with a single color.
pub fn render_swatch(color: Color) -> RgbImage {
    RgbImage::from_pixel(SWATCH_SIZE, SWATCH_SIZE, rgb(color))
}

/// The swatch for `entry`, labelled with its name and hex code when a font
/// is available.
pub fn render_color_image(entry: &ThemeColor, font: Option<&LabelFont>) -> RgbImage {
    let mut img = render_swatch(entry.color);
    if let Some(font) = font {
        draw_label(
            &mut img,
            font,
            (0, 0, SWATCH_SIZE),
            entry.color,
            &entry.name,
            &entry.color.to_string(),
            SWATCH_LABEL,
        );
    }
    img
}

/// All ten steps side by side, step 50 on the left.
pub fn render_shade_strip(ramp: &Ramp) -> RgbImage {
    let shades: Vec<Rgb<u8>> = ramp.iter().map(|shade| rgb(shade.color)).collect();
    let width = SHADE_SIZE * shades.len() as u32;
    RgbImage::from_fn(width, SHADE_SIZE, |x, _| shades[(x / SHADE_SIZE) as usize])
}

/// Base colors laid out row-major on a grid of at most [`PALETTE_COLUMNS`]
/// columns, each cell labelled when a font is available. Returns `None` for
/// an empty theme.
pub fn render_palette(theme: &Theme, font: Option<&LabelFont>) -> Option<RgbImage> {
    if theme.is_empty() {
        return None;
    }
    let count = theme.len() as u32;
    let cols = count.min(PALETTE_COLUMNS);
    let rows = count.div_ceil(cols);

    // Cells past the last color in a partial final row stay black.
    let mut img = RgbImage::from_fn(cols * SWATCH_SIZE, rows * SWATCH_SIZE, |x, y| {
        let index = (y / SWATCH_SIZE) * cols + x / SWATCH_SIZE;
        theme
            .colors
            .get(index as usize)
            .map(|entry| rgb(entry.color))
            .unwrap_or(rgb(Color::BLACK))
    });

    if let Some(font) = font {
        for (i, entry) in theme.colors.iter().enumerate() {
            let i = i as u32;
            let cell = ((i % cols) * SWATCH_SIZE, (i / cols) * SWATCH_SIZE, SWATCH_SIZE);
            draw_label(
                &mut img,
                font,
                cell,
                entry.color,
                &entry.name,
                &entry.color.to_string(),
                PALETTE_LABEL,
            );
        }
    }
    Some(img)
}

fn save(img: &RgbImage, path: &Path) -> Result<()> {
    img.save(path)
        .with_context(|| format!("failed to write image to {}", path.display()))
}

/// Write `<slug>.png` and `<slug>-shades.png` for one color.
pub fn write_color_images(
    entry: &ThemeColor,
    dir: &Path,
    font: Option<&LabelFont>,
) -> Result<Vec<PathBuf>> {
    let swatch_path = dir.join(format!("{}.png", entry.slug));
    save(&render_color_image(entry, font), &swatch_path)?;

    let strip_path = dir.join(format!("{}-shades.png", entry.slug));
    save(&render_shade_strip(&entry.ramp), &strip_path)?;

    Ok(vec![swatch_path, strip_path])
}

/// Write every per-color image plus `palette.png`.
pub fn write_all(theme: &Theme, dir: &Path, font: Option<&LabelFont>) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for entry in &theme.colors {
        written.extend(write_color_images(entry, dir, font)?);
    }
    if let Some(img) = render_palette(theme, font) {
        let path = dir.join("palette.png");
        save(&img, &path)?;
        written.push(path);
    }
    Ok(written)
}
