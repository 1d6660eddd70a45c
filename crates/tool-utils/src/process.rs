//! Subprocess invocation behind a trait, so pipelines can be exercised
//! without the external tools installed.

use std::process::Command;

use anyhow::{Context, Result, bail};

/// What a finished subprocess left behind.
#[derive(Debug, Clone, Default)]
pub struct ProcessOutput {
    /// Exit code, or None when killed by a signal.
    pub status: Option<i32>,
    pub stdout: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

pub trait ProcessRunner {
    /// Run `program` with `args`, capturing stdout.
    fn run(&self, program: &str, args: &[&str]) -> Result<ProcessOutput>;

    /// Run and fail unless the process exits zero.
    fn check_run(&self, program: &str, args: &[&str]) -> Result<ProcessOutput> {
        let output = self.run(program, args)?;
        if !output.success() {
            bail!("{program} {} exited with status {:?}", args.join(" "), output.status);
        }
        Ok(output)
    }
}

/// Runs real subprocesses.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<ProcessOutput> {
        log::debug!("running {program} {}", args.join(" "));
        let output = Command::new(program)
            .args(args)
            .output()
            .with_context(|| format!("failed to launch {program}"))?;
        if !output.stderr.is_empty() {
            log::debug!("{program} stderr: {}", String::from_utf8_lossy(&output.stderr).trim_end());
        }
        Ok(ProcessOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}
