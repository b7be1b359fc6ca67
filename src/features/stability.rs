//! Version stability classification for upgrade proposals.

use std::sync::LazyLock;

use regex::Regex;

/// Keywords that mark a release, matched case-insensitively anywhere in the
/// version.
const STABLE_KEYWORDS: [&str; 3] = ["RELEASE", "FINAL", "GA"];

/// Plain numeric versions, optionally with an `-r` release suffix.
static STABLE_VERSION: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[0-9,.v-]+(-r)?$").ok());

/// Whether a version string names a stable release.
pub fn is_stable(version: &str) -> bool {
    let upper = version.to_uppercase();
    let has_keyword = STABLE_KEYWORDS.iter().any(|k| upper.contains(k));

    has_keyword
        || STABLE_VERSION
            .as_ref()
            .is_some_and(|re| re.is_match(version))
}

/// Whether a version string is a pre-release, snapshot or milestone.
pub fn is_non_stable(version: &str) -> bool {
    !is_stable(version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_versions_are_stable() {
        assert!(is_stable("1.2.3"));
        assert!(is_stable("2.10"));
        assert!(is_stable("v1.0"));
        assert!(is_stable("1.0-r"));
    }

    #[test]
    fn test_keywords_are_stable() {
        assert!(is_stable("2.0.0-RELEASE"));
        assert!(is_stable("2.2.4.RELEASE"));
        assert!(is_stable("Hoxton.release"));
        assert!(is_stable("5.4.Final"));
        assert!(is_stable("1.0.0-GA"));
    }

    #[test]
    fn test_pre_releases_are_not_stable() {
        assert!(!is_stable("3.0.0-alpha-6"));
        assert!(!is_stable("4.0.0-beta"));
        assert!(!is_stable("1.0.0-rc1"));
        assert!(!is_stable("2.0.0-M1"));
        assert!(!is_stable("1.0-SNAPSHOT"));
    }

    #[test]
    fn test_non_stable_is_negation() {
        for v in ["1.2.3", "4.0.0-beta", "2.0.0-RELEASE", "1.0.0-rc1"] {
            assert_eq!(is_non_stable(v), !is_stable(v));
        }
    }
}
