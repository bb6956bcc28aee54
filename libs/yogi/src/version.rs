//! Version of the loaded core library

use crate::library;
use once_cell::sync::Lazy;

static VERSION: Lazy<String> = Lazy::new(|| library::core_version().to_string());

/// Returns the version string of the loaded Yogi core library.
///
/// The core is queried on the first call and the result is cached for the
/// lifetime of the process.
pub fn get_version() -> &'static str {
    VERSION.as_str()
}
