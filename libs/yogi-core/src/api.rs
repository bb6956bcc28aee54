//! Entry points bindings call into
//!
//! These mirror the exported C functions one to one. Bindings should go
//! through this module instead of reading the version markers directly: the
//! markers describe the crate a binding was compiled against, whereas these
//! functions describe the library that is actually linked.

use crate::constants::{ConstantId, ConstantValue};
use crate::errors::{self, ErrorCode};
use crate::version::{YOGI_HDR_VERSION, YOGI_HDR_VERSION_CSTR};
use std::ffi::c_char;

/// Version string of this library.
pub fn get_version() -> &'static str {
    YOGI_HDR_VERSION
}

/// Description of a result code; never fails.
pub fn get_error_string(code: i32) -> &'static str {
    errors::describe(code)
}

/// Value of the constant with the given raw id.
///
/// Returns [`ErrorCode::InvalidParam`] for ids the library does not know.
pub fn get_constant(constant: i32) -> Result<ConstantValue, ErrorCode> {
    ConstantId::from_raw(constant).map(ConstantId::value)
}

/// C entry point returning a pointer to the NUL-terminated version string.
///
/// The pointer refers to static data and stays valid for the lifetime of the
/// process.
#[no_mangle]
#[allow(non_snake_case)]
pub extern "C" fn YOGI_GetVersion() -> *const c_char {
    YOGI_HDR_VERSION_CSTR.as_ptr().cast()
}
