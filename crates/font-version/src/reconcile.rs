//! Deciding the next release version for a font.

use crate::{
    error::Error,
    version::{MAX_MINOR, Version, VersionRequest},
};

/// Decide the authoritative next version.
///
/// `current` is the version in the binary being fixed, `released` the
/// version of the last published copy if one exists, `requested` the
/// operator directive. An explicit request wins unless it would regress
/// below the released version (or, with no release, below the current one).
/// `Keep` holds the released version. With no directive the released minor
/// is bumped, or a phase 2 version is upgraded: an already-2.x font maps to
/// 2.040 (e.g. Armenian was "2.30" in phase 2), anything older to 2.000.
pub fn reconcile(
    current: Version,
    released: Option<Version>,
    requested: Option<VersionRequest>,
) -> Result<Version, Error> {
    match requested {
        Some(VersionRequest::Explicit(requested)) => {
            if let Some(released) = released {
                if requested < released {
                    return Err(Error::BelowReleased { requested, released });
                }
            } else if requested < current {
                return Err(Error::BelowCurrent { requested, current });
            }
            return Ok(requested);
        }
        Some(VersionRequest::Keep) => {
            if let Some(released) = released {
                return Ok(released);
            }
            // nothing released to keep, derive one below
        }
        None => {}
    }

    if let Some(released) = released {
        if released.minor == MAX_MINOR {
            return Err(Error::MinorOverflow(released));
        }
        return Ok(Version::new(released.major, released.minor + 1));
    }

    match current.major {
        2 => Ok(Version::new(2, 40)),
        0 | 1 => Ok(Version::new(2, 0)),
        _ => Err(Error::VersionTooHigh(current)),
    }
}
