//! Constants built into the Yogi core library

use crate::errors::{Error, Result};
use crate::library::{self, ConstantValue};
use once_cell::sync::OnceCell;
use std::time::Duration;

// Raw ids understood by the core's constant lookup.
const VERSION_NUMBER: i32 = 1;
const VERSION_MAJOR: i32 = 2;
const VERSION_MINOR: i32 = 3;
const VERSION_PATCH: i32 = 4;
const DEFAULT_ADV_ADDRESS: i32 = 5;
const DEFAULT_ADV_PORT: i32 = 6;
const DEFAULT_ADV_INTERVAL: i32 = 7;
const DEFAULT_CONNECTION_TIMEOUT: i32 = 8;

// Result code the core uses for parameters of the wrong kind.
const ERR_INVALID_PARAM: i32 = -4;

static CONSTANTS: OnceCell<Constants> = OnceCell::new();

/// Constants built into the loaded core library
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constants {
    /// Complete core version number.
    pub version_number: String,
    /// Core major version number.
    pub version_major: i32,
    /// Core minor version number.
    pub version_minor: i32,
    /// Core patch version number.
    pub version_patch: i32,
    /// Default IP address for advertising.
    pub default_adv_address: String,
    /// Default UDP port for advertising.
    pub default_adv_port: u16,
    /// Default time between two advertising messages.
    pub default_adv_interval: Duration,
    /// Default timeout for connections between two branches.
    pub default_connection_timeout: Duration,
}

impl Constants {
    fn load() -> Result<Self> {
        Ok(Self {
            version_number: get_str(VERSION_NUMBER)?.to_string(),
            version_major: get_int(VERSION_MAJOR)?,
            version_minor: get_int(VERSION_MINOR)?,
            version_patch: get_int(VERSION_PATCH)?,
            default_adv_address: get_str(DEFAULT_ADV_ADDRESS)?.to_string(),
            default_adv_port: u16::try_from(get_int(DEFAULT_ADV_PORT)?)
                .map_err(|_| Error::from_code(ERR_INVALID_PARAM))?,
            default_adv_interval: get_duration(DEFAULT_ADV_INTERVAL)?,
            default_connection_timeout: get_duration(DEFAULT_CONNECTION_TIMEOUT)?,
        })
    }
}

/// Constants of the loaded core library, read once and cached.
pub fn constants() -> Result<&'static Constants> {
    CONSTANTS.get_or_try_init(Constants::load)
}

fn get_str(id: i32) -> Result<&'static str> {
    library::constant(id)?
        .as_str()
        .ok_or_else(|| Error::from_code(ERR_INVALID_PARAM))
}

fn get_int(id: i32) -> Result<i32> {
    library::constant(id)?
        .as_int()
        .ok_or_else(|| Error::from_code(ERR_INVALID_PARAM))
}

fn get_duration(id: i32) -> Result<Duration> {
    match library::constant(id)? {
        ConstantValue::LongLong(ns) if ns >= 0 => Ok(Duration::from_nanos(ns.unsigned_abs())),
        _ => Err(Error::from_code(ERR_INVALID_PARAM)),
    }
}
