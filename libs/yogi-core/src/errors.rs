//! Error codes returned by the core API
//!
//! Codes are negative integers; any non-negative value denotes success. The
//! numeric values are part of the C-facing contract and must not be reordered.

use num_enum::TryFromPrimitive;
use std::fmt;
use thiserror::Error;

/// Description returned for non-negative (success) codes.
pub const SUCCESS_DESCRIPTION: &str = "Success";

/// Description returned for negative codes that are not in [`ErrorCode`].
pub const INVALID_ERROR_CODE_DESCRIPTION: &str = "Invalid error code";

/// Errors reported by the core library. `Display` renders [`ErrorCode::description`].
#[repr(i32)]
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum ErrorCode {
    Unknown = -1,
    ObjectStillUsed = -2,
    BadAlloc = -3,

    /// A parameter was out of range or otherwise unusable
    InvalidParam = -4,
    InvalidHandle = -5,
    WrongObjectType = -6,
    Canceled = -7,
    Busy = -8,
    Timeout = -9,
    TimerExpired = -10,
    BufferTooSmall = -11,
    OpenSocketFailed = -12,
    BindSocketFailed = -13,
    ListenSocketFailed = -14,
    SetSocketOptionFailed = -15,
    InvalidRegex = -16,
    OpenFileFailed = -17,
    RwSocketFailed = -18,
    ConnectSocketFailed = -19,
    InvalidMagicPrefix = -20,

    /// Raised during the branch handshake; the core never raises it on its own
    /// version accessors.
    IncompatibleVersion = -21,
    DeserializeMsgFailed = -22,
    AcceptSocketFailed = -23,
    LoopbackConnection = -24,
}

impl ErrorCode {
    /// Every defined error code, ordered from -1 downwards.
    pub const ALL: [ErrorCode; 24] = [
        ErrorCode::Unknown,
        ErrorCode::ObjectStillUsed,
        ErrorCode::BadAlloc,
        ErrorCode::InvalidParam,
        ErrorCode::InvalidHandle,
        ErrorCode::WrongObjectType,
        ErrorCode::Canceled,
        ErrorCode::Busy,
        ErrorCode::Timeout,
        ErrorCode::TimerExpired,
        ErrorCode::BufferTooSmall,
        ErrorCode::OpenSocketFailed,
        ErrorCode::BindSocketFailed,
        ErrorCode::ListenSocketFailed,
        ErrorCode::SetSocketOptionFailed,
        ErrorCode::InvalidRegex,
        ErrorCode::OpenFileFailed,
        ErrorCode::RwSocketFailed,
        ErrorCode::ConnectSocketFailed,
        ErrorCode::InvalidMagicPrefix,
        ErrorCode::IncompatibleVersion,
        ErrorCode::DeserializeMsgFailed,
        ErrorCode::AcceptSocketFailed,
        ErrorCode::LoopbackConnection,
    ];

    /// Numeric value as seen by C callers
    pub fn as_raw(self) -> i32 {
        self as i32
    }

    /// Static description of the error.
    pub fn description(self) -> &'static str {
        match self {
            ErrorCode::Unknown => "Unknown internal error",
            ErrorCode::ObjectStillUsed => "Object is still being used by another object",
            ErrorCode::BadAlloc => "Memory allocation failed",
            ErrorCode::InvalidParam => "Invalid parameter",
            ErrorCode::InvalidHandle => "Invalid handle",
            ErrorCode::WrongObjectType => "Wrong object type",
            ErrorCode::Canceled => "Operation has been canceled",
            ErrorCode::Busy => "Object is busy",
            ErrorCode::Timeout => "The operation timed out",
            ErrorCode::TimerExpired => "The timer has not been started or already expired",
            ErrorCode::BufferTooSmall => "The supplied buffer is too small",
            ErrorCode::OpenSocketFailed => "Could not open a socket",
            ErrorCode::BindSocketFailed => "Could not bind a socket",
            ErrorCode::ListenSocketFailed => "Could not listen on socket",
            ErrorCode::SetSocketOptionFailed => "Could not set a socket option",
            ErrorCode::InvalidRegex => "Invalid regular expression",
            ErrorCode::OpenFileFailed => "Could not open file",
            ErrorCode::RwSocketFailed => "Could not read from or write to socket",
            ErrorCode::ConnectSocketFailed => "Could not connect a socket",
            ErrorCode::InvalidMagicPrefix => {
                "The magic prefix sent when establishing a connection is wrong"
            }
            ErrorCode::IncompatibleVersion => {
                "The local and remote branches use incompatible Yogi versions"
            }
            ErrorCode::DeserializeMsgFailed => "Could not deserialize a message",
            ErrorCode::AcceptSocketFailed => "Could not accept a socket",
            ErrorCode::LoopbackConnection => "Attempting to connect branch to itself",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Describe any raw result code, including success and unknown values.
pub fn describe(code: i32) -> &'static str {
    if code >= 0 {
        return SUCCESS_DESCRIPTION;
    }

    ErrorCode::try_from(code)
        .map(ErrorCode::description)
        .unwrap_or(INVALID_ERROR_CODE_DESCRIPTION)
}
