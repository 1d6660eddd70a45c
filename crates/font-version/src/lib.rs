//! Version parsing, validation, and release reconciliation for Noto fonts.
//!
//! The release tooling has three possibly-divergent sources of truth for a
//! font's version: the revision baked into the binary, the revision of the
//! last published copy, and an operator override. [`reconcile`] decides the
//! authoritative next version from those three, refusing anything that would
//! silently regress or silently wrap a release counter.

mod error;
mod info;
mod reconcile;
mod version;

pub use error::Error;
pub use info::{validate_version_info, validate_version_info_at};
pub use reconcile::reconcile;
pub use version::{MAX_MINOR, Version, VersionRequest};

pub type Result<T> = std::result::Result<T, Error>;
