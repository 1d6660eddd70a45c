//! Errors raised while planning a font fix.

#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("version string {0:?} does not start with \"Version <major>.<minor>\"")]
    BadVersionString(String),

    #[error("font has no version string name record")]
    MissingVersionString,

    #[error("UI font is missing its hhea or OS/2 table")]
    MissingMetrics,

    #[error("no metric expectations for {upem} units per em")]
    UnsupportedUpem { upem: u16 },

    #[error("{field} is {current}, but {expected} is expected and the difference exceeds {max_drift}")]
    Tolerance { field: &'static str, current: i32, expected: i32, max_drift: i32 },

    #[error(transparent)]
    Version(#[from] noto_font_version::Error),
}
