//! CLI definitions and dispatch into the autofix pipeline.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use noto_autofix_core::{AutofixOptions, autofix_fonts};
use noto_tool_utils::{Config, SystemRunner};

#[derive(Debug, Parser)]
#[command(name = "noto-autofix")]
#[command(about = "Fix up phase 3 font binaries for release, and autohint them")]
pub struct Cli {
    /// Directory into which to write swatted fonts
    #[arg(short, long, value_name = "dir", default_value = "swatted")]
    pub dest_dir: PathBuf,

    /// Directory containing release fonts (defaults to [fonts] when given bare)
    #[arg(short, long, value_name = "dir", num_args = 0..=1, default_missing_value = "[fonts]")]
    pub release_dir: Option<String>,

    /// Paths or globs of fonts to swat
    #[arg(short, long, value_name = "font", num_args = 1.., required = true)]
    pub fonts: Vec<String>,

    /// Version info string
    #[arg(short = 'i', long, value_name = "str")]
    pub version_info: Option<String>,

    /// Force version ("keep" when given bare)
    #[arg(short, long, value_name = "ver", num_args = 0..=1, default_missing_value = "keep")]
    pub version: Option<String>,

    /// Autohint fonts (script code, or hint untuned when given bare)
    #[arg(short, long, value_name = "code", num_args = 0..=1, default_missing_value = "no-script")]
    pub autohint: Option<String>,

    /// Run every check but write nothing
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let config = Config::load();
        let fonts = expand_fonts(&config, &self.fonts)?;
        let options = AutofixOptions {
            dest_dir: self.dest_dir,
            release_dir: self.release_dir,
            version: self.version,
            version_info: self.version_info,
            autohint: self.autohint,
            dry_run: self.dry_run,
        };
        autofix_fonts(&config, &SystemRunner, &fonts, &options)
    }
}

/// Resolve font arguments (shorthands allowed) and expand globs.
fn expand_fonts(config: &Config, patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut fonts = Vec::new();
    for pattern in patterns {
        let Some(resolved) = config.resolve_path(pattern)? else {
            bail!("font argument {pattern:?} resolves to nothing");
        };
        let before = fonts.len();
        for entry in glob::glob(&resolved.to_string_lossy())? {
            fonts.push(entry?);
        }
        if fonts.len() == before {
            bail!("no fonts match {pattern:?}");
        }
    }
    Ok(fonts)
}
