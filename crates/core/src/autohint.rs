//! Per-script dispatch to ttfautohint.

use std::path::Path;

use anyhow::{Result, bail};
use noto_tool_utils::{ProcessRunner, ensure_dir_exists};

/// Hint without script-specific tuning.
pub const NO_SCRIPT: &str = "no-script";

/// Scripts we hint, mapped to their ttfautohint `-f` code. `None` marks a
/// script ttfautohint has no support for.
pub static HINTED_SCRIPTS: &[(&str, Option<&str>)] = &[
    ("Arab", Some("arab")),
    ("Armn", Some("armn")),
    ("Beng", Some("beng")),
    ("Cyrl", Some("cyrl")),
    ("Deva", Some("deva")),
    ("Ethi", Some("ethi")),
    ("Geor", Some("geor")),
    ("Grek", Some("grek")),
    ("Gujr", Some("gujr")),
    ("Guru", Some("guru")),
    ("Hebr", Some("hebr")),
    ("Khmr", Some("khmr")),
    ("Knda", Some("knda")),
    ("LGC", None),
    ("Laoo", Some("lao")),
    ("Latn", Some("latn")),
    ("MONO", None),
    ("Mlym", Some("mlym")),
    ("Mymr", Some("mymr")),
    ("Sinh", Some("sinh")),
    ("Taml", Some("taml")),
    ("Telu", Some("telu")),
    ("Thai", Some("thai")),
];

/// What to do for a script identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintDisposition {
    /// Hint with no `-f` flag.
    NoScript,
    /// Hint with this `-f` code.
    Code(&'static str),
    /// Known script that ttfautohint cannot handle; skip with a warning.
    Unsupported,
    /// No entry for this script; skip with a warning.
    NotHinted,
}

pub fn hint_disposition(script: &str) -> HintDisposition {
    if script == NO_SCRIPT {
        return HintDisposition::NoScript;
    }
    match HINTED_SCRIPTS.iter().find(|(key, _)| *key == script) {
        Some((_, Some(code))) => HintDisposition::Code(code),
        Some((_, None)) => HintDisposition::Unsupported,
        None => HintDisposition::NotHinted,
    }
}

/// Reject autohint directives for scripts we know nothing about, before any
/// font is touched.
pub fn check_script(script: &str) -> Result<()> {
    if script != NO_SCRIPT && !HINTED_SCRIPTS.iter().any(|(key, _)| *key == script) {
        bail!("not a hintable script: {script:?}");
    }
    Ok(())
}

/// Autohint `src` into `dst` for the given script.
///
/// Skips (with a warning) scripts that cannot be hinted. In dry-run mode the
/// command line is reported instead of executed.
pub fn autohint_font(
    runner: &dyn ProcessRunner,
    src: &Path,
    dst: &Path,
    script: &str,
    dry_run: bool,
) -> Result<()> {
    let code = match hint_disposition(script) {
        HintDisposition::NotHinted => {
            log::warn!("no hinting information for {}, script {script}", src.display());
            return Ok(());
        }
        HintDisposition::Unsupported => {
            log::warn!("unable to autohint {}", src.display());
            return Ok(());
        }
        HintDisposition::NoScript => None,
        HintDisposition::Code(code) => Some(code),
    };

    let src_arg = src.to_string_lossy();
    let dst_arg = dst.to_string_lossy();
    let mut args: Vec<&str> = vec!["-t", "-W"];
    if let Some(code) = code {
        args.push("-f");
        args.push(code);
    }
    args.push(&src_arg);
    args.push(&dst_arg);

    if dry_run {
        println!("dry run would autohint:\n  \"ttfautohint {}\"", args.join(" "));
        return Ok(());
    }

    if let Some(parent) = dst.parent() {
        ensure_dir_exists(parent)?;
    }
    runner.check_run("ttfautohint", &args)?;
    println!("wrote autohinted {} using {}", dst.display(), code.unwrap_or(NO_SCRIPT));
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use noto_tool_utils::ProcessOutput;

    use super::*;

    #[derive(Default)]
    struct RecordingRunner {
        calls: RefCell<Vec<String>>,
    }

    impl ProcessRunner for RecordingRunner {
        fn run(&self, program: &str, args: &[&str]) -> Result<ProcessOutput> {
            self.calls.borrow_mut().push(format!("{program} {}", args.join(" ")));
            Ok(ProcessOutput { status: Some(0), stdout: String::new() })
        }
    }

    #[test]
    fn test_dispositions() {
        assert_eq!(hint_disposition(NO_SCRIPT), HintDisposition::NoScript);
        assert_eq!(hint_disposition("Thai"), HintDisposition::Code("thai"));
        assert_eq!(hint_disposition("LGC"), HintDisposition::Unsupported);
        assert_eq!(hint_disposition("Xyzz"), HintDisposition::NotHinted);
    }

    #[test]
    fn test_check_script() {
        check_script(NO_SCRIPT).unwrap();
        check_script("Deva").unwrap();
        check_script("LGC").unwrap();
        assert!(check_script("Xyzz").is_err());
    }

    #[test]
    fn test_invocation_with_script_code() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("unhinted/NotoSansThai-Regular.ttf");
        let dst = tmp.path().join("hinted/NotoSansThai-Regular.ttf");
        let runner = RecordingRunner::default();
        autohint_font(&runner, &src, &dst, "Thai", false).unwrap();
        assert_eq!(
            runner.calls.borrow().as_slice(),
            [format!("ttfautohint -t -W -f thai {} {}", src.display(), dst.display())]
        );
        assert!(dst.parent().unwrap().is_dir());
    }

    #[test]
    fn test_invocation_without_script_code() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("a.ttf");
        let dst = tmp.path().join("hinted/a.ttf");
        let runner = RecordingRunner::default();
        autohint_font(&runner, &src, &dst, NO_SCRIPT, false).unwrap();
        assert_eq!(
            runner.calls.borrow().as_slice(),
            [format!("ttfautohint -t -W {} {}", src.display(), dst.display())]
        );
    }

    #[test]
    fn test_skipped_scripts_invoke_nothing() {
        let runner = RecordingRunner::default();
        autohint_font(&runner, Path::new("a.ttf"), Path::new("b.ttf"), "LGC", false).unwrap();
        autohint_font(&runner, Path::new("a.ttf"), Path::new("b.ttf"), "Xyzz", false).unwrap();
        assert!(runner.calls.borrow().is_empty());
    }

    #[test]
    fn test_dry_run_invokes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let dst = tmp.path().join("hinted/a.ttf");
        let runner = RecordingRunner::default();
        autohint_font(&runner, Path::new("a.ttf"), &dst, "Thai", true).unwrap();
        assert!(runner.calls.borrow().is_empty());
        assert!(!dst.parent().unwrap().exists());
    }
}
