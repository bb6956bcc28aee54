//! Access to the linked core library
//!
//! Every call into `yogi_core` goes through this module so that the rest of
//! the crate never names core items, and nothing here is visible outside the
//! crate.

use crate::errors::{Error, Result};
use tracing::debug;
use yogi_core::api;

pub(crate) use yogi_core::ConstantValue;

/// Version string of the linked core, queried at call time.
pub(crate) fn core_version() -> &'static str {
    let version = api::get_version();
    debug!(version, "Queried core library version");
    version
}

/// Description the core associates with a result code.
pub(crate) fn error_string(code: i32) -> &'static str {
    api::get_error_string(code)
}

/// Raw constant lookup; failures carry the core's error code.
pub(crate) fn constant(id: i32) -> Result<ConstantValue> {
    api::get_constant(id).map_err(|err| Error::from_code(err.as_raw()))
}
