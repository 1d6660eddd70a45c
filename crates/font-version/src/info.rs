//! Build-identifier ("version info") validation.

use std::sync::LazyLock;

use chrono::{Local, NaiveDate};
use regex::Regex;

use crate::error::Error;

const VERSION_INFO_PATTERN: &str = r"^GOOG;noto-fonts:(\d{4})(\d{2})(\d{2}):([0-9a-f]{12})$";

static VERSION_INFO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(VERSION_INFO_PATTERN).unwrap());

/// Phase 3 work started in 2017; any earlier embedded year is rejected
/// outright, well-formed or not.
const MIN_YEAR: i32 = 2017;

/// Validate a version-info string against the clock `today`.
///
/// The grammar is `GOOG;noto-fonts:YYYYMMDD:<12 hex digit commit>`, for
/// example `GOOG;noto-fonts:20170220:a8a215d2e889`. The embedded date must
/// be a real calendar date no later than `today`.
pub fn validate_version_info_at(text: &str, today: NaiveDate) -> Result<(), Error> {
    let caps = VERSION_INFO_RE.captures(text).ok_or_else(|| Error::BadVersionInfo {
        text: text.to_string(),
        pattern: VERSION_INFO_PATTERN,
    })?;
    let bad = || Error::BadVersionInfo { text: text.to_string(), pattern: VERSION_INFO_PATTERN };
    let year: i32 = caps[1].parse().map_err(|_| bad())?;
    let month: u32 = caps[2].parse().map_err(|_| bad())?;
    let day: u32 = caps[3].parse().map_err(|_| bad())?;

    if year < MIN_YEAR {
        return Err(Error::DateTooOld(text.to_string()));
    }
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| Error::NoSuchDate {
        text: text.to_string(),
        year,
        month,
        day,
    })?;
    if date > today {
        return Err(Error::DateInFuture { text: text.to_string(), date });
    }
    Ok(())
}

/// Validate a version-info string against the local date.
pub fn validate_version_info(text: &str) -> Result<(), Error> {
    validate_version_info_at(text, Local::now().date_naive())
}
