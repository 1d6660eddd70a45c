//! A read-only snapshot of the font fields the fixer cares about.

use std::sync::LazyLock;

use anyhow::{Context, Result};
use noto_font_ops::{NAME_ID_VERSION, name_record, printable_revision};
use noto_font_version::Version;
use read_fonts::{FontRef, TableProvider};
use regex::Regex;

use crate::error::PlanError;

static NAME_VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Version (\d+\.\d{2,3})").unwrap());

/// Vertical metrics from the hhea and OS/2 tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerticalMetrics {
    pub ascent: i16,
    pub descent: i16,
    pub typo_ascender: i16,
    pub typo_descender: i16,
    pub win_ascent: u16,
    pub win_descent: u16,
}

/// Everything the planner reads from a font, captured up front.
///
/// Planning against a plain value keeps the planner testable without
/// synthesizing binaries, and keeps a dry run from holding font data open.
#[derive(Debug, Clone)]
pub struct FontView {
    /// head fontRevision rendered to three decimal places.
    pub revision: String,
    /// The name table's version string (name ID 5), if present.
    pub version_string: Option<String>,
    pub units_per_em: u16,
    /// None when the font lacks an hhea or OS/2 table.
    pub metrics: Option<VerticalMetrics>,
}

impl FontView {
    pub fn from_font(font: &FontRef) -> Result<FontView> {
        let head = font.head().context("font has no head table")?;
        let revision = printable_revision(font, 3)?;
        let version_string = name_record(font, NAME_ID_VERSION)?;

        let metrics = match (font.hhea(), font.os2()) {
            (Ok(hhea), Ok(os2)) => Some(VerticalMetrics {
                ascent: hhea.ascender().to_i16(),
                descent: hhea.descender().to_i16(),
                typo_ascender: os2.s_typo_ascender(),
                typo_descender: os2.s_typo_descender(),
                win_ascent: os2.us_win_ascent(),
                win_descent: os2.us_win_descent(),
            }),
            _ => None,
        };

        Ok(FontView { revision, version_string, units_per_em: head.units_per_em(), metrics })
    }

    /// The version parsed out of the version string, e.g. "1.23" from
    /// "Version 1.23;GOOG;noto-fonts:...".
    pub fn current_version(&self) -> Result<Version, PlanError> {
        let text = self.version_string.as_deref().ok_or(PlanError::MissingVersionString)?;
        let caps = NAME_VERSION_RE
            .captures(text)
            .ok_or_else(|| PlanError::BadVersionString(text.to_string()))?;
        Version::parse(&caps[1]).map_err(|_| PlanError::BadVersionString(text.to_string()))
    }
}
