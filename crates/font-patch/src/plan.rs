//! Computing the set of field updates a font needs.

use std::fmt;

use noto_font_version::Version;

use crate::{
    error::PlanError,
    view::{FontView, VerticalMetrics},
};

/// All phase 3 fonts are expected to use this em size.
pub const EXPECTED_UPEM: u16 = 2048;

/// Largest metric drift that is treated as rounding noise rather than a
/// broken font.
pub const MAX_METRIC_DRIFT: i32 = 2;

/// A font field the fixer may rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontField {
    Revision,
    VersionString,
    Ascent,
    TypoAscender,
    WinAscent,
    Descent,
    TypoDescender,
    WinDescent,
}

impl FontField {
    pub fn name(&self) -> &'static str {
        match self {
            FontField::Revision => "revision",
            FontField::VersionString => "version string",
            FontField::Ascent => "ascent",
            FontField::TypoAscender => "sTypoAscender",
            FontField::WinAscent => "usWinAscent",
            FontField::Descent => "descent",
            FontField::TypoDescender => "sTypoDescender",
            FontField::WinDescent => "usWinDescent",
        }
    }
}

/// An old or new field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchValue {
    Text(String),
    Num(i32),
}

impl fmt::Display for PatchValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatchValue::Text(s) => write!(f, "'{s}'"),
            PatchValue::Num(n) => write!(f, "{n}"),
        }
    }
}

/// A single proposed field update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPatch {
    pub field: FontField,
    pub old: PatchValue,
    pub new: PatchValue,
}

/// The ordered set of updates one font needs. Empty means the font is
/// already in release shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchPlan {
    patches: Vec<FieldPatch>,
}

impl PatchPlan {
    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldPatch> {
        self.patches.iter()
    }

    /// The replacement text for `field`, if this plan rewrites it.
    pub fn text(&self, field: FontField) -> Option<&str> {
        self.patches.iter().find(|p| p.field == field).and_then(|p| match &p.new {
            PatchValue::Text(s) => Some(s.as_str()),
            PatchValue::Num(_) => None,
        })
    }

    /// The replacement number for `field`, if this plan rewrites it.
    pub fn num(&self, field: FontField) -> Option<i32> {
        self.patches.iter().find(|p| p.field == field).and_then(|p| match p.new {
            PatchValue::Num(n) => Some(n),
            PatchValue::Text(_) => None,
        })
    }

    fn push_text(&mut self, field: FontField, old: &str, new: &str) {
        self.patches.push(FieldPatch {
            field,
            old: PatchValue::Text(old.to_string()),
            new: PatchValue::Text(new.to_string()),
        });
    }

    fn push_num(&mut self, field: FontField, old: i32, new: i32) {
        self.patches.push(FieldPatch { field, old: PatchValue::Num(old), new: PatchValue::Num(new) });
    }
}

/// Expected UI ascent and descent for an em size.
fn ui_metric_targets(upem: u16) -> Option<(i32, i32)> {
    match upem {
        2048 => Some((2163, -555)),
        1000 => Some((1069, -293)),
        _ => None,
    }
}

fn check_drift(field: &'static str, current: i32, expected: i32) -> Result<(), PlanError> {
    if (current - expected).abs() > MAX_METRIC_DRIFT {
        return Err(PlanError::Tolerance {
            field,
            current,
            expected,
            max_drift: MAX_METRIC_DRIFT,
        });
    }
    Ok(())
}

/// Compute the updates needed to bring a font to `new_version`.
///
/// Pure: reads the view, proposes patches, performs no I/O. The em size is
/// only warned about when off-standard; UI metric drift beyond
/// [`MAX_METRIC_DRIFT`] fails instead of being papered over, since a large
/// difference means the font itself is wrong, not its metadata.
pub fn plan_patches(
    view: &FontView,
    new_version: Version,
    version_info: &str,
    ui_metrics: bool,
) -> Result<PatchPlan, PlanError> {
    let mut plan = PatchPlan::default();

    let expected_revision = new_version.to_string();
    if view.revision != expected_revision {
        plan.push_text(FontField::Revision, &view.revision, &expected_revision);
    }

    let current_string = view.version_string.as_deref().unwrap_or_default();
    let expected_string = format!("Version {expected_revision};{version_info}");
    if current_string != expected_string {
        plan.push_text(FontField::VersionString, current_string, &expected_string);
    }

    if view.units_per_em != EXPECTED_UPEM {
        log::warn!("expected {} upem but got {} upem", EXPECTED_UPEM, view.units_per_em);
    }

    if ui_metrics {
        let (expected_ascent, expected_descent) = ui_metric_targets(view.units_per_em)
            .ok_or(PlanError::UnsupportedUpem { upem: view.units_per_em })?;
        let metrics = view.metrics.ok_or(PlanError::MissingMetrics)?;
        plan_ui_metrics(&mut plan, &metrics, expected_ascent, expected_descent)?;
    }

    Ok(plan)
}

fn plan_ui_metrics(
    plan: &mut PatchPlan,
    metrics: &VerticalMetrics,
    expected_ascent: i32,
    expected_descent: i32,
) -> Result<(), PlanError> {
    let ascent = i32::from(metrics.ascent);
    if ascent != expected_ascent {
        check_drift("ascent", ascent, expected_ascent)?;
        plan.push_num(FontField::Ascent, ascent, expected_ascent);
        plan.push_num(FontField::TypoAscender, i32::from(metrics.typo_ascender), expected_ascent);
        plan.push_num(FontField::WinAscent, i32::from(metrics.win_ascent), expected_ascent);
    }

    let descent = i32::from(metrics.descent);
    if descent != expected_descent {
        check_drift("descent", descent, expected_descent)?;
        plan.push_num(FontField::Descent, descent, expected_descent);
        plan.push_num(FontField::TypoDescender, i32::from(metrics.typo_descender), expected_descent);
        // usWinDescent stores the magnitude, so it gets the negated value
        plan.push_num(FontField::WinDescent, i32::from(metrics.win_descent), -expected_descent);
    }

    Ok(())
}
