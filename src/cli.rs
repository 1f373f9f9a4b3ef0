use std::path::PathBuf;

use clap::Parser;

/// Generate 50-900 shade ramps, CSS, Tailwind config, guidelines and swatches
/// from a list of named hex colors.
#[derive(Parser, Debug)]
#[command(name = "shadegen", version, about)]
pub struct Args {
    /// Color list with one `hexcode # name` entry per line
    #[arg(default_value = "colors.txt")]
    pub input: PathBuf,

    /// Directory to write generated files into (created if missing)
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Only generate these artifacts (comma separated)
    #[arg(long, value_enum, value_delimiter = ',')]
    pub only: Vec<Artifact>,

    /// Skip PNG swatch images
    #[arg(long)]
    pub no_images: bool,

    /// TTF/OTF font for swatch labels (defaults to a system monospace font)
    #[arg(long, value_name = "PATH")]
    pub font: Option<PathBuf>,

    /// Print the ramps to stdout instead of writing files
    #[arg(long)]
    pub print: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Artifact {
    Css,
    Tailwind,
    Guidelines,
    Html,
    Images,
}

impl Artifact {
    pub const ALL: [Artifact; 5] = [
        Artifact::Css,
        Artifact::Tailwind,
        Artifact::Guidelines,
        Artifact::Html,
        Artifact::Images,
    ];
}

impl Args {
    /// Artifacts to generate, in a fixed order regardless of flag order.
    pub fn artifacts(&self) -> Vec<Artifact> {
        Artifact::ALL
            .into_iter()
            .filter(|a| self.only.is_empty() || self.only.contains(a))
            .filter(|a| !(self.no_images && *a == Artifact::Images))
            .collect()
    }

    /// Default `env_logger` filter for the given `-v` count.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
