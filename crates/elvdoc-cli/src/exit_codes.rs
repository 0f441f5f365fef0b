//! Exit codes for the elvdoc CLI.
//! These codes are part of the public contract so scripts can branch on validity.

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_INVALID: i32 = 1; // Archive is not a valid elv archive
pub const EXIT_INTERNAL_ERROR: i32 = 2; // Usage, config, or I/O error
