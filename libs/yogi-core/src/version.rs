//! Version markers of the core library
//!
//! These constants are the core's equivalent of a header version macro: their
//! presence identifies the core, and their values are what the library was
//! built as. Consumers of the public `yogi` binding must never be able to reach
//! them through the binding's own paths.

/// Defines all version marker constants from a single set of components, so
/// the full version string can never disagree with its parts.
macro_rules! define_core_version {
    (@parts $major:literal, $minor:literal, $patch:literal, $suffix:literal) => {
        /// Major version number.
        pub const YOGI_HDR_VERSION_MAJOR: i32 = $major;

        /// Minor version number.
        pub const YOGI_HDR_VERSION_MINOR: i32 = $minor;

        /// Patch version number.
        pub const YOGI_HDR_VERSION_PATCH: i32 = $patch;

        /// Pre-release suffix, empty for release builds.
        pub const YOGI_HDR_VERSION_SUFFIX: &str = $suffix;
    };
    ($major:literal, $minor:literal, $patch:literal) => {
        /// Complete version string: `MAJOR.MINOR.PATCH`.
        pub const YOGI_HDR_VERSION: &str = concat!($major, ".", $minor, ".", $patch);

        /// NUL-terminated copy of [`YOGI_HDR_VERSION`] for C callers.
        pub const YOGI_HDR_VERSION_CSTR: &[u8] =
            concat!($major, ".", $minor, ".", $patch, "\0").as_bytes();

        define_core_version!(@parts $major, $minor, $patch, "");
    };
    ($major:literal, $minor:literal, $patch:literal, $suffix:literal) => {
        /// Complete version string: `MAJOR.MINOR.PATCH-SUFFIX`.
        pub const YOGI_HDR_VERSION: &str =
            concat!($major, ".", $minor, ".", $patch, "-", $suffix);

        /// NUL-terminated copy of [`YOGI_HDR_VERSION`] for C callers.
        pub const YOGI_HDR_VERSION_CSTR: &[u8] =
            concat!($major, ".", $minor, ".", $patch, "-", $suffix, "\0").as_bytes();

        define_core_version!(@parts $major, $minor, $patch, $suffix);
    };
}

// Keep in sync with the package version in Cargo.toml.
define_core_version!(0, 0, 3);

/// Names of every marker constant defined by this module.
pub const MARKER_NAMES: &[&str] = &[
    "YOGI_HDR_VERSION",
    "YOGI_HDR_VERSION_MAJOR",
    "YOGI_HDR_VERSION_MINOR",
    "YOGI_HDR_VERSION_PATCH",
    "YOGI_HDR_VERSION_SUFFIX",
    "YOGI_HDR_VERSION_CSTR",
];
