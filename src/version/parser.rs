//! CMakeLists.txt version parser
//!
//! Extracts the project version from a CMake build configuration.
//! Two historical layouts are supported, tried in this order:
//!
//! - Modern: `project(name VERSION 2.1.0 LANGUAGES CXX)`
//! - Legacy:
//!   ```text
//!   SET(CMAKE_PROJECT_VERSION_MAJOR "2")
//!   SET(CMAKE_PROJECT_VERSION_MINOR "1")
//!   SET(CMAKE_PROJECT_VERSION_PATCH "0")
//!   ```
//!
//! The release candidate marker (`SET(RC_VERSION "1")`) and the released marker
//! (`SET(PACKAGE_VERSION "${PROJECT_VERSION}")`) are looked up independently.
//! The rc marker is ignored when a `#` precedes it on the same line. The
//! released marker is matched anywhere, comments included.

use std::path::Path;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::debug;

use crate::version::error::VersionError;
use crate::version::types::Version;

/// Canonical version literal: `MAJOR.MINOR.PATCH[-rcN][-SNAPSHOT]`
static LITERAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)\.([0-9]+)\.([0-9]+)(?:-rc([0-9]+))?(-SNAPSHOT)?$").unwrap()
});

/// Returns true if `text` has the shape of a version literal
///
/// Numbers are not range checked, so a matching label may still fail
/// [`parse_literal`].
pub fn is_version_literal(text: &str) -> bool {
    LITERAL_RE.is_match(text)
}

/// Parse an already rendered version such as a git tag or a directory name
pub fn parse_literal(text: &str) -> Result<Version, VersionError> {
    let caps = LITERAL_RE
        .captures(text)
        .ok_or_else(|| VersionError::Malformed(format!("'{text}' is not a version literal")))?;

    Ok(Version {
        major: number(&caps[1], text)?,
        minor: number(&caps[2], text)?,
        patch: number(&caps[3], text)?,
        rc: caps
            .get(4)
            .map(|rc| number(rc.as_str(), text))
            .transpose()?,
        is_snapshot: caps.get(5).is_some(),
    })
}

fn number(digits: &str, context: &str) -> Result<u32, VersionError> {
    digits.trim().parse().map_err(|_| {
        VersionError::Malformed(format!("'{digits}' is not a valid number in '{context}'"))
    })
}

/// Parser for CMake build configurations
pub struct VersionParser {
    /// Regex for `PROJECT(... VERSION x.y.z ...)`
    project_version_re: Regex,
    /// Regexes for `SET(CMAKE_PROJECT_VERSION_{MAJOR,MINOR,PATCH} "n")`
    legacy_res: [Regex; 3],
    /// Regex for an uncommented `SET(RC_VERSION "n")`
    rc_re: Regex,
    /// Regex for `SET(PACKAGE_VERSION "${PROJECT_VERSION}")`, commented or not
    released_re: Regex,
}

impl VersionParser {
    pub fn new() -> Self {
        let legacy = |key: &str| {
            Regex::new(&format!(r#"(?m)^[^#\n]*SET\({key}\s*"([^"]*)"\)"#)).unwrap()
        };

        Self {
            project_version_re: Regex::new(
                r"(?i)PROJECT\s*\([^)]*VERSION\s+([0-9]+)\.([0-9]+)\.([0-9]+)[^)]*\)",
            )
            .unwrap(),
            legacy_res: [
                legacy("CMAKE_PROJECT_VERSION_MAJOR"),
                legacy("CMAKE_PROJECT_VERSION_MINOR"),
                legacy("CMAKE_PROJECT_VERSION_PATCH"),
            ],
            rc_re: Regex::new(
                r#"(?m)^[^#\n]*SET\s*\((?:RC_VERSION|CMAKE_PROJECT_VERSION_RC)\s*"([0-9]+)"\s*\)"#,
            )
            .unwrap(),
            released_re: Regex::new(r#"SET\s*\(PACKAGE_VERSION\s*"\$\{PROJECT_VERSION\}"\s*\)"#)
                .unwrap(),
        }
    }

    /// Read and parse a build configuration file
    pub fn parse_file(&self, path: &Path) -> Result<Version, VersionError> {
        let content = std::fs::read_to_string(path).map_err(|source| VersionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Parsing version from {:?}", path);
        self.parse(&content)
    }

    /// Parse the version out of build configuration text
    pub fn parse(&self, content: &str) -> Result<Version, VersionError> {
        let (major, minor, patch) = self.base_version(content)?;

        let rc = self
            .rc_re
            .captures(content)
            .map(|caps| number(&caps[1], "RC_VERSION"))
            .transpose()?;

        let is_snapshot = !self.released_re.is_match(content);

        Ok(Version {
            major,
            minor,
            patch,
            rc,
            is_snapshot,
        })
    }

    fn base_version(&self, content: &str) -> Result<(u32, u32, u32), VersionError> {
        if let Some(caps) = self.project_version_re.captures(content) {
            return triple(&caps[1], &caps[2], &caps[3]);
        }

        debug!("No PROJECT VERSION found, falling back to CMAKE_PROJECT_VERSION_* fields");
        let [major, minor, patch] = &self.legacy_res;
        match (
            major.captures(content),
            minor.captures(content),
            patch.captures(content),
        ) {
            (Some(major), Some(minor), Some(patch)) => {
                triple(field(&major), field(&minor), field(&patch))
            }
            _ => Err(VersionError::Malformed(
                "could not extract version components".to_string(),
            )),
        }
    }
}

impl Default for VersionParser {
    fn default() -> Self {
        Self::new()
    }
}

fn field<'a>(caps: &Captures<'a>) -> &'a str {
    caps.get(1).map_or("", |m| m.as_str())
}

fn triple(major: &str, minor: &str, patch: &str) -> Result<(u32, u32, u32), VersionError> {
    let context = format!("{major}.{minor}.{patch}");
    Ok((
        number(major, &context)?,
        number(minor, &context)?,
        number(patch, &context)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const MODERN: &str = r#"
cmake_minimum_required(VERSION 3.16)
project(ocpp-stack VERSION 2.1.0 LANGUAGES CXX)
"#;

    const LEGACY: &str = r#"
SET(CMAKE_PROJECT_VERSION_MAJOR "1")
SET(CMAKE_PROJECT_VERSION_MINOR "8")
SET(CMAKE_PROJECT_VERSION_PATCH "3")
"#;

    #[test]
    fn parse_modern_project_version_defaults_to_snapshot() {
        let version = VersionParser::new().parse(MODERN).unwrap();

        assert_eq!(version, Version::new(2, 1, 0).snapshot());
    }

    #[test]
    fn parse_legacy_fields() {
        let version = VersionParser::new().parse(LEGACY).unwrap();

        assert_eq!(version, Version::new(1, 8, 3).snapshot());
    }

    #[test]
    fn parse_prefers_modern_pattern_over_legacy_fields() {
        let content = format!("{LEGACY}\n{MODERN}");

        let version = VersionParser::new().parse(&content).unwrap();

        assert_eq!(version.base(), (2, 1, 0));
    }

    #[test]
    fn parse_modern_pattern_is_case_insensitive() {
        let version = VersionParser::new()
            .parse("PROJECT(foo VERSION 4.5.6)")
            .unwrap();

        assert_eq!(version.base(), (4, 5, 6));
    }

    #[rstest]
    #[case("SET(RC_VERSION \"3\")", Some(3))]
    #[case("SET (RC_VERSION \"3\" )", Some(3))]
    #[case("  SET(CMAKE_PROJECT_VERSION_RC \"7\")", Some(7))]
    #[case("# SET(RC_VERSION \"3\")", None)]
    #[case("  #SET(RC_VERSION \"3\")", None)]
    #[case("", None)]
    fn parse_rc_marker_ignores_commented_lines(#[case] rc_line: &str, #[case] expected: Option<u32>) {
        let content = format!("{MODERN}\n{rc_line}\n");

        let version = VersionParser::new().parse(&content).unwrap();

        assert_eq!(version.rc, expected);
    }

    #[test]
    fn parse_rc_marker_inside_block_comment_is_still_recognized() {
        let content = format!("{MODERN}\n#[[\nSET(RC_VERSION \"2\")\n]]\n");

        let version = VersionParser::new().parse(&content).unwrap();

        assert_eq!(version.rc, Some(2));
    }

    #[rstest]
    #[case("SET(PACKAGE_VERSION \"${PROJECT_VERSION}\")", false)]
    #[case("SET( PACKAGE_VERSION \"${PROJECT_VERSION}\" )", true)]
    #[case("SET (PACKAGE_VERSION \"${PROJECT_VERSION}\")", false)]
    #[case("# SET(PACKAGE_VERSION \"${PROJECT_VERSION}\")", false)]
    #[case("SET(FOO \"1\") # SET(PACKAGE_VERSION \"${PROJECT_VERSION}\")", false)]
    #[case("", true)]
    fn parse_snapshot_unless_released_marker(#[case] marker: &str, #[case] snapshot: bool) {
        let content = format!("{MODERN}\n{marker}\n");

        let version = VersionParser::new().parse(&content).unwrap();

        assert_eq!(version.is_snapshot, snapshot);
    }

    #[test]
    fn parse_released_candidate() {
        let content = format!(
            "{MODERN}\nSET(RC_VERSION \"1\")\nSET(PACKAGE_VERSION \"${{PROJECT_VERSION}}\")\n"
        );

        let version = VersionParser::new().parse(&content).unwrap();

        assert_eq!(version.to_string(), "2.1.0-rc1");
    }

    #[rstest]
    #[case("")]
    #[case("project(foo LANGUAGES CXX)")]
    #[case("SET(CMAKE_PROJECT_VERSION_MAJOR \"1\")\nSET(CMAKE_PROJECT_VERSION_MINOR \"2\")")]
    #[case("SET(CMAKE_PROJECT_VERSION_MAJOR \"1\")\nSET(CMAKE_PROJECT_VERSION_MINOR \"x\")\nSET(CMAKE_PROJECT_VERSION_PATCH \"0\")")]
    #[case("# SET(CMAKE_PROJECT_VERSION_MAJOR \"1\")\nSET(CMAKE_PROJECT_VERSION_MINOR \"2\")\nSET(CMAKE_PROJECT_VERSION_PATCH \"0\")")]
    #[case("project(foo VERSION 99999999999.0.0)")]
    fn parse_without_complete_triple_is_malformed(#[case] content: &str) {
        let result = VersionParser::new().parse(content);

        assert!(matches!(result, Err(VersionError::Malformed(_))));
    }

    #[test]
    fn parse_file_reports_missing_file() {
        let result = VersionParser::new().parse_file(Path::new("/nonexistent/CMakeLists.txt"));

        assert!(matches!(result, Err(VersionError::Io { .. })));
    }

    #[rstest]
    #[case("2.1.0", Version::new(2, 1, 0))]
    #[case("2.1.0-rc2", Version::new(2, 1, 0).with_rc(2))]
    #[case("2.1.0-SNAPSHOT", Version::new(2, 1, 0).snapshot())]
    #[case("2.1.0-rc2-SNAPSHOT", Version::new(2, 1, 0).with_rc(2).snapshot())]
    #[case("02.01.00", Version::new(2, 1, 0))]
    fn parse_literal_accepts_grammar(#[case] text: &str, #[case] expected: Version) {
        assert_eq!(parse_literal(text).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("v2.1.0")]
    #[case("2.1")]
    #[case("2.1.0-SNAPSHOT-rc1")]
    #[case("2.1.0-rc")]
    #[case("2.1.0-beta1")]
    #[case("2.1.0 ")]
    #[case("latest")]
    #[case("4294967296.0.0")]
    fn parse_literal_rejects_anything_else(#[case] text: &str) {
        assert!(matches!(parse_literal(text), Err(VersionError::Malformed(_))));
    }

    #[test]
    fn is_version_literal_does_not_range_check() {
        assert!(is_version_literal("4294967296.0.0"));
        assert!(!is_version_literal("latest"));
    }
}
