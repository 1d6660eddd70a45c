//! The `.notoconfig` key/value file and path shorthand resolution.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use anyhow::{Context, Result, bail};
use regex::Regex;

static SHORTHAND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(tools|fonts|emoji|cjk)\]/?(.*)$").unwrap());

/// Key/value settings from the user's `.notoconfig` file.
///
/// The file is plain `key = value` lines; `#` starts a comment. The keys the
/// tools care about are the `noto_*` repo roots that back the `[tools]`,
/// `[fonts]`, `[emoji]`, and `[cjk]` path shorthands.
#[derive(Debug, Clone, Default)]
pub struct Config {
    values: HashMap<String, String>,
}

impl Config {
    /// Load `$HOME/.notoconfig`, or an empty config when it does not exist.
    pub fn load() -> Config {
        match std::env::var_os("HOME") {
            Some(home) => {
                Config::from_file(&Path::new(&home).join(".notoconfig")).unwrap_or_default()
            }
            None => Config::default(),
        }
    }

    pub fn from_file(path: &Path) -> Result<Config> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Ok(Config::parse(&text))
    }

    fn parse(text: &str) -> Config {
        let mut values = HashMap::new();
        for line in text.lines() {
            let line = line.split('#').next().unwrap_or_default().trim();
            if let Some((key, value)) = line.split_once('=') {
                values.insert(key.trim().to_string(), value.trim().to_string());
            }
        }
        Config { values }
    }

    /// Build a config from literal pairs, bypassing the filesystem.
    pub fn with_values(pairs: &[(&str, &str)]) -> Config {
        Config {
            values: pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Resolve a path argument to an absolute path.
    ///
    /// `-` and the empty string resolve to `None`. A leading `[tools]`,
    /// `[fonts]`, `[emoji]`, or `[cjk]` is replaced with the matching
    /// `noto_*` config value, and it is an error for that value to be
    /// missing. A leading `~` expands to the home directory. The result is
    /// absolute, with symlinks resolved when the path exists.
    pub fn resolve_path(&self, somepath: &str) -> Result<Option<PathBuf>> {
        if somepath.is_empty() || somepath == "-" {
            return Ok(None);
        }

        let expanded = match SHORTHAND_RE.captures(somepath) {
            Some(caps) => {
                let key = format!("noto_{}", &caps[1]);
                let Some(base) = self.get(&key) else {
                    bail!("config has no value for {key}, cannot resolve {somepath:?}");
                };
                Path::new(base).join(&caps[2])
            }
            None => expand_user(somepath),
        };

        let absolute = std::path::absolute(&expanded)
            .with_context(|| format!("cannot make {} absolute", expanded.display()))?;
        Ok(Some(absolute.canonicalize().unwrap_or(absolute)))
    }
}

fn expand_user(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return Path::new(&home).join(rest);
    }
    PathBuf::from(path)
}
