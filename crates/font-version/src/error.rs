//! Error types for version parsing and reconciliation.

use chrono::NaiveDate;

use crate::Version;

/// Errors raised while parsing, validating, or reconciling versions.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("version {0:?} does not match major.minor with a 2-3 digit minor")]
    BadVersion(String),

    #[error("version directive {0:?} is not \"keep\" or an explicit [12].ddd version")]
    BadVersionRequest(String),

    #[error("version info {text:?} does not match {pattern:?}")]
    BadVersionInfo { text: String, pattern: &'static str },

    #[error("{year:04}-{month:02}-{day:02} in {text:?} is not a valid date")]
    NoSuchDate { text: String, year: i32, month: u32, day: u32 },

    #[error("date {date} in {text:?} is after the current date")]
    DateInFuture { text: String, date: NaiveDate },

    #[error("date in {0:?} appears too far in the past")]
    DateTooOld(String),

    #[error("new version {requested} < release version {released}")]
    BelowReleased { requested: Version, released: Version },

    #[error("new version {requested} < old version {current}")]
    BelowCurrent { requested: Version, current: Version },

    #[error("cannot bump version {0}, minor component is saturated")]
    MinorOverflow(Version),

    #[error("old version {0} too high to derive a new one")]
    VersionTooHigh(Version),
}
