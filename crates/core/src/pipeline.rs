//! Batch driver: validate options up front, then fix fonts one at a time.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use anyhow::{Context, Result, bail};
use noto_font_patch::{FontView, apply_plan, plan_patches};
use noto_font_version::{VersionRequest, reconcile, validate_version_info};
use noto_tool_utils::{Config, ProcessRunner, check_dir_exists, ensure_dir_exists, git_head_commit};
use read_fonts::FontRef;
use regex::Regex;

use crate::{autohint, fontpath::is_ui_metrics, release::release_font_path};

/// Everything the batch needs beyond the font list.
#[derive(Debug, Clone)]
pub struct AutofixOptions {
    pub dest_dir: PathBuf,
    /// Release directory, possibly in `[fonts]` shorthand form.
    pub release_dir: Option<String>,
    /// Raw `--version` directive, validated up front.
    pub version: Option<String>,
    /// Version-info string; derived from the fonts repo when absent.
    pub version_info: Option<String>,
    /// Script identifier to autohint with, or None to skip hinting.
    pub autohint: Option<String>,
    pub dry_run: bool,
}

/// Fix a batch of fonts.
///
/// All option validation happens before the first font is read, so a bad
/// directive never leaves a half-processed batch behind. Fonts are handled
/// sequentially; the first per-font failure aborts the run. A dry run
/// executes every check and plan but writes nothing, not even directories.
pub fn autofix_fonts(
    config: &Config,
    runner: &dyn ProcessRunner,
    fonts: &[PathBuf],
    options: &AutofixOptions,
) -> Result<()> {
    let mut fonts = fonts.to_vec();
    fonts.sort();

    let listing: Vec<String> = fonts.iter().map(|f| f.display().to_string()).collect();
    println!("Processing\n  {}", listing.join("\n  "));
    println!("Dest dir: {}", options.dest_dir.display());

    let release_dir = match &options.release_dir {
        Some(dir) => {
            let resolved = config
                .resolve_path(dir)?
                .with_context(|| format!("release dir {dir:?} resolves to nothing"))?;
            check_dir_exists(&resolved)
                .with_context(|| format!("release dir {dir:?} does not exist"))?;
            Some(resolved)
        }
        None => None,
    };

    let version_info = match &options.version_info {
        Some(info) => {
            validate_version_info(info)?;
            info.clone()
        }
        None => {
            let Some(info) = derive_version_info(config, runner, &fonts)? else {
                bail!("could not compute version info from fonts");
            };
            println!("Computed version_info: {info}");
            info
        }
    };

    let version = options.version.as_deref().map(VersionRequest::parse).transpose()?;

    if let Some(script) = &options.autohint {
        autohint::check_script(script)?;
    }

    if options.dry_run {
        let hinting = if options.autohint.is_some() { "(autohint) " } else { "" };
        println!("*** dry run {hinting}***");
    }

    for font in &fonts {
        fix_font(runner, font, release_dir.as_deref(), version, &version_info, options)?;
    }
    Ok(())
}

static RELEASE_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").unwrap());

/// Build a version-info string from the fonts repo head commit.
///
/// Only applies when every font lives under the configured `[fonts]` root;
/// fonts from anywhere else return None and the caller must be told the info
/// explicitly.
fn derive_version_info(
    config: &Config,
    runner: &dyn ProcessRunner,
    fonts: &[PathBuf],
) -> Result<Option<String>> {
    let Ok(Some(prefix)) = config.resolve_path("[fonts]") else {
        return Ok(None);
    };
    for font in fonts {
        let resolved = std::path::absolute(font)?;
        let resolved = resolved.canonicalize().unwrap_or(resolved);
        if !resolved.starts_with(&prefix) {
            return Ok(None);
        }
    }

    let (commit, date) = git_head_commit(runner, &prefix)?;
    let Some(caps) = RELEASE_DATE_RE.captures(&date) else {
        bail!("could not parse commit date {date:?}");
    };
    let ymd = format!("{}{}{}", &caps[1], &caps[2], &caps[3]);
    if commit.len() < 12 {
        bail!("commit hash {commit:?} is too short");
    }
    Ok(Some(format!("GOOG;noto-fonts:{ymd}:{}", &commit[..12])))
}

fn fix_font(
    runner: &dyn ProcessRunner,
    font_path: &Path,
    release_dir: Option<&Path>,
    version: Option<VersionRequest>,
    version_info: &str,
    options: &AutofixOptions,
) -> Result<()> {
    println!("\n-----\nfont: {}", font_path.display());

    let data =
        fs::read(font_path).with_context(|| format!("could not read {}", font_path.display()))?;
    let font = FontRef::new(&data)
        .with_context(|| format!("could not parse {}", font_path.display()))?;
    let view = FontView::from_font(&font)?;
    let current = view.current_version()?;

    let released = match release_dir.and_then(|dir| release_font_path(font_path, dir)) {
        Some(release_path) => {
            let release_data = fs::read(&release_path)
                .with_context(|| format!("could not read {}", release_path.display()))?;
            let release_font = FontRef::new(&release_data)?;
            let released = FontView::from_font(&release_font)?.current_version()?;
            println!("Existing release version: {released}");
            Some(released)
        }
        None => None,
    };

    let new_version = reconcile(current, released, version)?;
    let plan = plan_patches(&view, new_version, version_info, is_ui_metrics(font_path))?;
    for patch in plan.iter() {
        println!("update {}\n  from: {}\n    to: {}", patch.field.name(), patch.old, patch.new);
    }

    let file_name = font_path
        .file_name()
        .with_context(|| format!("{} has no file name", font_path.display()))?;
    let unhinted_dir = options.dest_dir.join("unhinted");
    let unhinted_dst = unhinted_dir.join(file_name);

    if options.dry_run {
        println!("dry run would write:\n  \"{}\"", unhinted_dst.display());
    } else {
        ensure_dir_exists(&unhinted_dir)?;
        let fixed = apply_plan(&data, &plan)?;
        fs::write(&unhinted_dst, fixed)
            .with_context(|| format!("could not write {}", unhinted_dst.display()))?;
        println!("wrote {}", unhinted_dst.display());
    }

    if let Some(script) = &options.autohint {
        let hinted_dst = options.dest_dir.join("hinted").join(file_name);
        autohint::autohint_font(runner, &unhinted_dst, &hinted_dst, script, options.dry_run)?;
    }
    Ok(())
}
