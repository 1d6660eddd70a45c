//! Noto autofix CLI library.

pub mod cli;
