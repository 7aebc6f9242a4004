//! Process exit codes (BSD sysexits.h compatible where applicable)

/// Successful termination
pub const OK: i32 = 0;

/// Generic failure: parse error, tag not found, connection failed during check
pub const FAILURE: i32 = 1;

/// Data format error (malformed replay file)
pub const DATAERR: i32 = 65;

/// Service unavailable (historian unreachable)
pub const UNAVAILABLE: i32 = 69;

/// Internal software error (historian query failed)
pub const SOFTWARE: i32 = 70;

/// Input/output error
pub const IOERR: i32 = 74;

/// Configuration error
pub const CONFIG: i32 = 78;
