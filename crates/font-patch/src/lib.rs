//! Plan and apply the phase 3 metadata fixes.
//!
//! Fixing a font is split into two halves so a dry run never touches bytes:
//! [`plan_patches`] inspects a [`FontView`] and produces a [`PatchPlan`]
//! describing every field that needs to change, and [`apply_plan`] rewrites
//! the binary accordingly.

mod apply;
mod error;
mod plan;
mod view;

pub use apply::apply_plan;
pub use error::PlanError;
pub use plan::{
    EXPECTED_UPEM, FieldPatch, FontField, MAX_METRIC_DRIFT, PatchPlan, PatchValue, plan_patches,
};
pub use view::{FontView, VerticalMetrics};

pub type Result<T> = std::result::Result<T, PlanError>;
