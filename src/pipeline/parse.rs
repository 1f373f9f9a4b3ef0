use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use regex::Regex;

use crate::color::Color;

/// A base color with the human-readable name it was given in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedColor {
    pub name: String,
    pub color: Color,
}

impl NamedColor {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }

    /// Identifier-safe form of the name, see [`slugify`].
    pub fn slug(&self) -> String {
        slugify(&self.name)
    }
}

/// Lowercase the name and turn spaces into hyphens. Path separators also
/// become hyphens so a slug is always a single file name component.
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|ch| match ch {
            ' ' | '/' | '\\' => '-',
            _ => ch,
        })
        .collect()
}

fn line_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([^#\s]+)\s*#\s*(.+)$").expect("line pattern is a valid regex")
    })
}

/// Parse a color list with one `hexcode # name` entry per line.
///
/// Blank lines and lines starting with `#` are ignored. Lines that do not
/// match, or carry a malformed hex code, are skipped with a warning.
pub fn parse_palette(input: &str) -> Vec<NamedColor> {
    let mut colors = Vec::new();

    for (index, raw) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some(caps) = line_pattern().captures(line) else {
            log::warn!("line {line_no}: expected `hexcode # name`, skipping {line:?}");
            continue;
        };

        let color = match Color::from_hex(&caps[1]) {
            Ok(color) => color,
            Err(err) => {
                log::warn!("line {line_no}: {err}, skipping");
                continue;
            }
        };

        let named = NamedColor::new(caps[2].trim(), color);
        log::debug!("line {line_no}: {} = {}", named.name, named.color);
        colors.push(named);
    }

    colors
}

/// Read and parse a color list from disk.
pub fn parse_palette_file(path: &Path) -> Result<Vec<NamedColor>> {
    let input = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read color list: {}", path.display()))?;
    Ok(parse_palette(&input))
}
