//! Constants built into the core library
//!
//! Each constant is addressed by a stable integer id so that bindings written
//! in other languages can query them without knowing the Rust types.

use crate::errors::ErrorCode;
use crate::version::{
    YOGI_HDR_VERSION, YOGI_HDR_VERSION_MAJOR, YOGI_HDR_VERSION_MINOR, YOGI_HDR_VERSION_PATCH,
};
use num_enum::TryFromPrimitive;

/// Default IP address for advertising (IPv6 multicast group).
pub const DEFAULT_ADV_ADDRESS: &str = "ff31::8000:2439";

/// Default UDP port for advertising.
pub const DEFAULT_ADV_PORT: i32 = 13531;

/// Default time between two advertising messages, in nanoseconds.
pub const DEFAULT_ADV_INTERVAL_NS: i64 = 1_000_000_000;

/// Default timeout for connections between two branches, in nanoseconds.
pub const DEFAULT_CONNECTION_TIMEOUT_NS: i64 = 3_000_000_000;

/// Stable identifiers of the built-in constants
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum ConstantId {
    VersionNumber = 1,
    VersionMajor = 2,
    VersionMinor = 3,
    VersionPatch = 4,
    DefaultAdvAddress = 5,
    DefaultAdvPort = 6,
    DefaultAdvInterval = 7,
    DefaultConnectionTimeout = 8,
}

impl ConstantId {
    /// All constant ids in ascending order.
    pub const ALL: [ConstantId; 8] = [
        ConstantId::VersionNumber,
        ConstantId::VersionMajor,
        ConstantId::VersionMinor,
        ConstantId::VersionPatch,
        ConstantId::DefaultAdvAddress,
        ConstantId::DefaultAdvPort,
        ConstantId::DefaultAdvInterval,
        ConstantId::DefaultConnectionTimeout,
    ];

    /// Look up a constant by its raw id.
    pub fn from_raw(raw: i32) -> Result<Self, ErrorCode> {
        Self::try_from(raw).map_err(|_| ErrorCode::InvalidParam)
    }

    /// Value of this constant.
    pub fn value(self) -> ConstantValue {
        match self {
            ConstantId::VersionNumber => ConstantValue::Str(YOGI_HDR_VERSION),
            ConstantId::VersionMajor => ConstantValue::Int(YOGI_HDR_VERSION_MAJOR),
            ConstantId::VersionMinor => ConstantValue::Int(YOGI_HDR_VERSION_MINOR),
            ConstantId::VersionPatch => ConstantValue::Int(YOGI_HDR_VERSION_PATCH),
            ConstantId::DefaultAdvAddress => ConstantValue::Str(DEFAULT_ADV_ADDRESS),
            ConstantId::DefaultAdvPort => ConstantValue::Int(DEFAULT_ADV_PORT),
            ConstantId::DefaultAdvInterval => ConstantValue::LongLong(DEFAULT_ADV_INTERVAL_NS),
            ConstantId::DefaultConnectionTimeout => {
                ConstantValue::LongLong(DEFAULT_CONNECTION_TIMEOUT_NS)
            }
        }
    }
}

/// A constant's value, tagged with the C type it is exposed as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstantValue {
    /// `const char*`
    Str(&'static str),
    /// `int`
    Int(i32),
    /// `long long`
    LongLong(i64),
}

impl ConstantValue {
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            ConstantValue::Str(s) => Some(*s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            ConstantValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_long_long(&self) -> Option<i64> {
        match self {
            ConstantValue::LongLong(v) => Some(*v),
            _ => None,
        }
    }
}
