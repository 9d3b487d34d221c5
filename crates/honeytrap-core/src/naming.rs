//! Field-name scheme shared by generation and validation.
//!
//! Decoys are named `hp_<token>`, the control entry `hp_check_<epoch>`. The
//! control marker is itself decoy-prefixed, so one prefix scan of a submission
//! picks up both.

/// Prefix of every trap field name.
pub const DECOY_PREFIX: &str = "hp_";

/// Prefix of the control field name; the Unix epoch follows it.
pub const CONTROL_PREFIX: &str = "hp_check_";

/// Alphabet for random tokens.
pub const TOKEN_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Inclusive bounds on random token length.
pub const TOKEN_MIN_LEN: usize = 5;
pub const TOKEN_MAX_LEN: usize = 12;

/// Whether `name` belongs to the trap at all (decoy or control).
#[inline]
pub fn is_trap_name(name: &str) -> bool {
    name.starts_with(DECOY_PREFIX)
}

#[inline]
pub fn is_control_name(name: &str) -> bool {
    name.starts_with(CONTROL_PREFIX)
}

pub fn decoy_name(token: &str) -> String {
    format!("{DECOY_PREFIX}{token}")
}

pub fn control_name(epoch: i64) -> String {
    format!("{CONTROL_PREFIX}{epoch}")
}

/// Extract the epoch embedded in a control name.
///
/// Returns `None` if `name` is not a control name or the suffix is not a
/// decimal integer.
pub fn parse_control_epoch(name: &str) -> Option<i64> {
    name.strip_prefix(CONTROL_PREFIX)?.parse().ok()
}
