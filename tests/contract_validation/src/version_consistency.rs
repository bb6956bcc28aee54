//! Version consistency validation
//!
//! The version the binding reports must be exactly the core's version marker.
//! Comparison is plain string equality; nothing is normalized or parsed.

use crate::common::{find_package, ValidationResult, Violation};
use crate::config::VersionRules;
use crate::errors::Result;
use cargo_metadata::Metadata;
use tracing::debug;
use yogi_core::{
    api, ConstantId, YOGI_HDR_VERSION, YOGI_HDR_VERSION_MAJOR, YOGI_HDR_VERSION_MINOR,
    YOGI_HDR_VERSION_PATCH, YOGI_HDR_VERSION_SUFFIX,
};

const RULE_VERSION_EQUALITY: &str = "binding-version-equals-marker";
const RULE_MARKER_COMPOSITION: &str = "marker-composed-from-components";
const RULE_CONSTANT_TABLE: &str = "constant-table-matches-marker";
const RULE_PACKAGE_VERSION: &str = "package-versions-in-lockstep";

/// Compare a reported version against the expected one
pub fn validate_version_equality(reported: &str, expected: &str) -> ValidationResult {
    let mut result = ValidationResult::new("Binding version equals core version marker");

    debug!(reported, expected, "Comparing versions");
    if reported != expected {
        result.add_violation(
            Violation::version_mismatch(
                RULE_VERSION_EQUALITY,
                "Binding reports a different version than the core marker",
                expected,
                reported,
            )
            .with_suggestion("Rebuild the binding against the core it is packaged with"),
        );
    }

    result
}

/// `yogi::get_version()` against `yogi_core::YOGI_HDR_VERSION`
pub fn validate_runtime_version() -> ValidationResult {
    validate_version_equality(yogi::get_version(), YOGI_HDR_VERSION)
}

/// Format version components the way the core marker is built
pub fn compose_version(major: i32, minor: i32, patch: i32, suffix: &str) -> String {
    if suffix.is_empty() {
        format!("{major}.{minor}.{patch}")
    } else {
        format!("{major}.{minor}.{patch}-{suffix}")
    }
}

/// The marker string agrees with its component markers
pub fn validate_marker_composition() -> ValidationResult {
    check_marker_composition(
        YOGI_HDR_VERSION,
        YOGI_HDR_VERSION_MAJOR,
        YOGI_HDR_VERSION_MINOR,
        YOGI_HDR_VERSION_PATCH,
        YOGI_HDR_VERSION_SUFFIX,
    )
}

pub fn check_marker_composition(
    marker: &str,
    major: i32,
    minor: i32,
    patch: i32,
    suffix: &str,
) -> ValidationResult {
    let mut result = ValidationResult::new("Version marker matches its components");

    let composed = compose_version(major, minor, patch, suffix);
    if composed != marker {
        result.add_violation(Violation::version_mismatch(
            RULE_MARKER_COMPOSITION,
            "Version marker disagrees with its components",
            &composed,
            marker,
        ));
    }

    result
}

/// The core's constants table and the binding's typed constants both report the marker
pub fn validate_constant_table() -> ValidationResult {
    let mut result = ValidationResult::new("Constant tables report the core version");

    let expected_str = [(ConstantId::VersionNumber, YOGI_HDR_VERSION.to_string())];
    let expected_int = [
        (ConstantId::VersionMajor, YOGI_HDR_VERSION_MAJOR),
        (ConstantId::VersionMinor, YOGI_HDR_VERSION_MINOR),
        (ConstantId::VersionPatch, YOGI_HDR_VERSION_PATCH),
    ];

    for (id, expected) in expected_str {
        let actual = describe_constant(id);
        if actual != expected {
            result.add_violation(constant_mismatch(id, &expected, &actual));
        }
    }
    for (id, expected) in expected_int {
        let expected = expected.to_string();
        let actual = describe_constant(id);
        if actual != expected {
            result.add_violation(constant_mismatch(id, &expected, &actual));
        }
    }

    match yogi::constants() {
        Ok(constants) if constants.version_number != YOGI_HDR_VERSION => {
            result.add_violation(Violation::version_mismatch(
                RULE_CONSTANT_TABLE,
                "Binding constants report a different version number",
                YOGI_HDR_VERSION,
                &constants.version_number,
            ));
        }
        Ok(_) => {}
        Err(err) => result.add_violation(Violation::version_mismatch(
            RULE_CONSTANT_TABLE,
            "Binding constants could not be loaded",
            YOGI_HDR_VERSION,
            &err.to_string(),
        )),
    }

    result
}

fn describe_constant(id: ConstantId) -> String {
    match api::get_constant(id as i32) {
        Ok(value) => value
            .as_str()
            .map(str::to_string)
            .or_else(|| value.as_int().map(|v| v.to_string()))
            .or_else(|| value.as_long_long().map(|v| v.to_string()))
            .unwrap_or_default(),
        Err(err) => format!("<{err}>"),
    }
}

fn constant_mismatch(id: ConstantId, expected: &str, actual: &str) -> Violation {
    Violation::version_mismatch(
        RULE_CONSTANT_TABLE,
        &format!("Core constant {id:?} disagrees with the version marker"),
        expected,
        actual,
    )
}

/// Binding and core packages carry the same version, equal to the marker
pub fn validate_package_versions(
    metadata: &Metadata,
    rules: &VersionRules,
) -> Result<ValidationResult> {
    check_package_versions(metadata, rules, YOGI_HDR_VERSION)
}

pub fn check_package_versions(
    metadata: &Metadata,
    rules: &VersionRules,
    marker: &str,
) -> Result<ValidationResult> {
    let mut result = ValidationResult::new("Binding and core are packaged with the same version");

    let binding = find_package(metadata, &rules.binding_package)?;
    let core = find_package(metadata, &rules.core_package)?;
    let binding_version = binding.version.to_string();
    let core_version = core.version.to_string();

    debug!(%binding_version, %core_version, marker, "Comparing package versions");

    if binding_version != core_version {
        result.add_violation(
            Violation::version_mismatch(
                RULE_PACKAGE_VERSION,
                &format!(
                    "Package '{}' is not versioned in lockstep with '{}'",
                    binding.name, core.name
                ),
                &core_version,
                &binding_version,
            )
            .with_file(binding.manifest_path.clone())
            .with_suggestion("Release the binding and the core with the same version"),
        );
    }

    if core_version != marker {
        result.add_violation(
            Violation::version_mismatch(
                RULE_PACKAGE_VERSION,
                &format!("Package '{}' version differs from its version marker", core.name),
                marker,
                &core_version,
            )
            .with_file(core.manifest_path.clone())
            .with_suggestion("Bump the marker and the package version together"),
        );
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ViolationKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_equal_versions_pass() {
        assert!(validate_version_equality("1.2.3", "1.2.3").passed);
    }

    #[test]
    fn test_no_normalization_is_applied() {
        for reported in ["1.2.3 ", "v1.2.3", "1.2", "1.2.3.0", "1.2.3-rc.1"] {
            let result = validate_version_equality(reported, "1.2.3");
            assert!(!result.passed, "'{reported}' must not equal '1.2.3'");
            assert!(result.has_violation(ViolationKind::VersionMismatch));
        }
    }

    #[test]
    fn test_mismatch_reports_expected_and_actual() {
        let result = validate_version_equality("0.0.3", "0.0.4");
        assert_eq!(
            result.violations[0].message,
            "Binding reports a different version than the core marker: expected '0.0.4', got '0.0.3'"
        );
    }

    #[test]
    fn test_compose_version() {
        assert_eq!(compose_version(1, 2, 3, ""), "1.2.3");
        assert_eq!(compose_version(1, 2, 3, "beta"), "1.2.3-beta");
    }

    #[test]
    fn test_marker_composition_detects_drift() {
        assert!(check_marker_composition("1.2.3", 1, 2, 3, "").passed);
        assert!(!check_marker_composition("1.2.4", 1, 2, 3, "").passed);
        assert!(!check_marker_composition("1.2.3", 1, 2, 3, "rc").passed);
    }

    #[test]
    fn test_live_checks_pass() {
        validate_runtime_version().assert_passed();
        validate_marker_composition().assert_passed();
        validate_constant_table().assert_passed();
    }
}
