//! Shared plumbing for the Noto release tools.

mod archive;
mod config;
mod paths;
mod process;
mod vcs;

pub use archive::{create_zip, extract_zip};
pub use config::Config;
pub use paths::{check_dir_exists, check_file_exists, ensure_dir_exists};
pub use process::{ProcessOutput, ProcessRunner, SystemRunner};
pub use vcs::{
    git_add_all, git_get_branch, git_head_commit, git_is_clean, svn_get_version, svn_update,
};
