//! Exit codes for the `honeytrap` binary. Part of the public contract.

pub const SUCCESS: i32 = 0;
pub const CONFIG_ERROR: i32 = 2; // Missing secret, unreadable config or input
pub const REJECTED: i32 = 3; // Submission failed the honeypot check
