use std::io::Write;

use anyhow::Result;
use clap::Parser;

use shadegen::cli::Args;
use shadegen::generate::{generate, load_theme, render_listing};

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level()))
        .init();

    let theme = load_theme(&args.input)?;

    if args.print {
        std::io::stdout().write_all(render_listing(&theme).as_bytes())?;
        return Ok(());
    }

    let written = generate(&theme, &args.out_dir, &args.artifacts(), args.font.as_deref())?;
    eprintln!(
        "shadegen: wrote {} file(s) for {} color(s) to {}",
        written.len(),
        theme.len(),
        args.out_dir.display()
    );
    Ok(())
}
