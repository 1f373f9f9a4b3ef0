use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::backends::css::CssBackend;
use crate::backends::guidelines::GuidelinesBackend;
use crate::backends::html::HtmlBackend;
use crate::backends::tailwind::TailwindBackend;
use crate::backends::ThemeBackend;
use crate::cli::Artifact;
use crate::pipeline::parse::parse_palette_file;
use crate::swatch;
use crate::swatch::label::LabelFont;
use crate::theme::Theme;

fn backend_for(artifact: Artifact) -> Option<Box<dyn ThemeBackend>> {
    match artifact {
        Artifact::Css => Some(Box::new(CssBackend)),
        Artifact::Tailwind => Some(Box::new(TailwindBackend)),
        Artifact::Guidelines => Some(Box::new(GuidelinesBackend)),
        Artifact::Html => Some(Box::new(HtmlBackend)),
        Artifact::Images => None,
    }
}

/// Read the color list and derive a ramp for every entry.
pub fn load_theme(input: &Path) -> Result<Theme> {
    let colors = parse_palette_file(input)?;
    if colors.is_empty() {
        bail!("no colors found in {}", input.display());
    }
    log::info!("found {} color(s) in {}", colors.len(), input.display());
    Ok(Theme::from_colors(&colors))
}

/// Font for swatch labels: `explicit` must load, otherwise the first system
/// monospace font found. `None` means images are written without labels.
pub fn label_font(explicit: Option<&Path>) -> Result<Option<LabelFont>> {
    if let Some(path) = explicit {
        return LabelFont::load(path).map(Some);
    }
    let font = LabelFont::discover();
    match &font {
        Some(font) => log::debug!("labelling swatches with {}", font.path().display()),
        None => log::warn!("no monospace font found, swatches will have no labels (use --font)"),
    }
    Ok(font)
}

/// Write the selected artifacts into `out_dir`, returning every file written.
pub fn generate(
    theme: &Theme,
    out_dir: &Path,
    artifacts: &[Artifact],
    font: Option<&Path>,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory: {}", out_dir.display()))?;

    let mut written = Vec::new();
    for &artifact in artifacts {
        match backend_for(artifact) {
            Some(backend) => {
                let path = backend.write_to(theme, out_dir)?;
                log::info!("wrote {} to {}", backend.name(), path.display());
                written.push(path);
            }
            None => {
                let font = label_font(font)?;
                let paths = swatch::write_all(theme, out_dir, font.as_ref())?;
                log::info!("wrote {} swatch image(s)", paths.len());
                written.extend(paths);
            }
        }
    }
    Ok(written)
}

/// Plain-text listing of every ramp, one line per step.
pub fn render_listing(theme: &Theme) -> String {
    let mut out = String::new();
    for entry in &theme.colors {
        out.push_str(&format!("{} ({})\n", entry.name, entry.slug));
        for shade in entry.ramp.iter() {
            out.push_str(&format!(
                "  {:>3}  {}  hsl({})\n",
                shade.step.label(),
                shade.color,
                shade.hsl
            ));
        }
    }
    out
}
