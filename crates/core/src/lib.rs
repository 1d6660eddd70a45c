//! The autofix pipeline: bring near-final font binaries into release shape
//! and optionally hand them to ttfautohint.

mod autohint;
mod fontpath;
mod pipeline;
mod release;

pub use autohint::{
    HINTED_SCRIPTS, HintDisposition, NO_SCRIPT, autohint_font, check_script, hint_disposition,
};
pub use fontpath::is_ui_metrics;
pub use pipeline::{AutofixOptions, autofix_fonts};
pub use release::release_font_path;
