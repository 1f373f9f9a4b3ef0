pub mod css;
pub mod guidelines;
pub mod html;
pub mod tailwind;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::theme::Theme;

/// A text artifact generated from a theme.
pub trait ThemeBackend {
    /// Human-readable name, used in log output.
    fn name(&self) -> &str;

    /// File name the artifact is written under.
    fn file_name(&self) -> &str;

    /// Render the theme to the artifact's text format.
    fn serialize(&self, theme: &Theme) -> String;

    /// Write the rendered artifact into `dir`, returning the full path.
    fn write_to(&self, theme: &Theme, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(self.file_name());
        std::fs::write(&path, self.serialize(theme))
            .with_context(|| format!("failed to write {} to {}", self.name(), path.display()))?;
        Ok(path)
    }
}
