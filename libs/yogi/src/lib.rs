//! # Yogi
//!
//! High-level Rust binding for the Yogi core library.
//!
//! ```rust
//! let version = yogi::get_version();
//! assert!(!version.is_empty());
//! ```
//!
//! The core library is an implementation detail of this crate. None of its
//! items, in particular its version markers, are reachable through `yogi`;
//! consumers learn the core's version through [`get_version`] only.

mod constants;
mod errors;
mod library;
mod version;

pub use constants::{constants, Constants};
pub use errors::{Error, Result};
pub use version::get_version;
