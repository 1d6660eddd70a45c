//! Deriving font traits from Noto file naming conventions.

use std::path::Path;

/// Whether a font is a UI variant with fixed vertical metric expectations.
///
/// UI variants carry a family name ending in "UI" before the style suffix,
/// e.g. `NotoSansThaiUI-Bold.ttf`.
pub fn is_ui_metrics(path: &Path) -> bool {
    let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
        return false;
    };
    let family = stem.split('-').next().unwrap_or(stem);
    family.ends_with("UI")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_detection() {
        assert!(is_ui_metrics(Path::new("fonts/NotoSansUI-Regular.ttf")));
        assert!(is_ui_metrics(Path::new("NotoSansThaiUI-Bold.ttf")));
        assert!(!is_ui_metrics(Path::new("NotoSansThai-Bold.ttf")));
        assert!(!is_ui_metrics(Path::new("NotoSans-UItalic.ttf")));
        assert!(!is_ui_metrics(Path::new("")));
    }
}
