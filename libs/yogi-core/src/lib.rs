//! # Yogi Core
//!
//! Low-level core of the Yogi framework. Defines the version markers
//! (`YOGI_HDR_VERSION` and friends), the table of built-in constants and the
//! error codes shared with every language binding.
//!
//! This crate is an implementation dependency of the public `yogi` binding.
//! Applications should depend on `yogi`; the binding deliberately keeps this
//! crate and its markers out of its public surface.
//!
//! ```rust
//! assert_eq!(yogi_core::api::get_version(), yogi_core::YOGI_HDR_VERSION);
//! ```

pub mod api;
pub mod constants;
pub mod errors;
pub mod version;

pub use constants::{ConstantId, ConstantValue};
pub use errors::ErrorCode;
pub use version::{
    MARKER_NAMES, YOGI_HDR_VERSION, YOGI_HDR_VERSION_CSTR, YOGI_HDR_VERSION_MAJOR,
    YOGI_HDR_VERSION_MINOR, YOGI_HDR_VERSION_PATCH, YOGI_HDR_VERSION_SUFFIX,
};
