//! Submission parsing and the accept/reject decision.
//!
//! Callers only ever see a boolean; the `Rejection` reason is logged at
//! debug level and goes nowhere else.

use std::fmt;

use crate::clock::Clock;
use crate::entropy::EntropySource;
use crate::entry::make_entry;
use crate::form::FormSource;
use crate::generator::TrapGenerator;
use crate::naming::{is_trap_name, parse_control_epoch};
use crate::state::TrapState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Rejection {
    ControlCardinality { count: usize },
    EmptyData,
    DecoyFilled,
    BadEpoch,
    Expired { epoch: i64, now: i64 },
    DigestMismatch,
}

impl Rejection {
    pub(crate) fn reason(&self) -> &'static str {
        match self {
            Self::ControlCardinality { .. } => "E_TRAP_CONTROL_CARDINALITY",
            Self::EmptyData => "E_TRAP_EMPTY_DATA",
            Self::DecoyFilled => "E_TRAP_DECOY_FILLED",
            Self::BadEpoch => "E_TRAP_BAD_EPOCH",
            Self::Expired { .. } => "E_TRAP_EXPIRED",
            Self::DigestMismatch => "E_TRAP_DIGEST_MISMATCH",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ControlCardinality { count } => {
                write!(f, "expected exactly one control field, found {count}")
            }
            Self::EmptyData => f.write_str("submission carries no trap data"),
            Self::DecoyFilled => f.write_str("decoy field was filled in"),
            Self::BadEpoch => f.write_str("control timestamp is not an integer"),
            Self::Expired { epoch, now } => {
                write!(f, "trap issued at {epoch} expired (now {now})")
            }
            Self::DigestMismatch => f.write_str("control digest does not match"),
        }
    }
}

/// `epoch + timeout < now`. Future epochs never expire.
pub(crate) fn is_expired(epoch: i64, timeout_secs: u64, now: i64) -> bool {
    i128::from(epoch) + i128::from(timeout_secs) < i128::from(now)
}

pub struct TrapValidator<'a, E: ?Sized, C: ?Sized> {
    entropy: &'a mut E,
    clock: &'a C,
}

impl<'a, E, C> TrapValidator<'a, E, C>
where
    E: EntropySource + ?Sized,
    C: Clock + ?Sized,
{
    pub fn new(entropy: &'a mut E, clock: &'a C) -> Self {
        Self { entropy, clock }
    }

    /// Rebuild `state` from the trap fields of a submission, in sorted name
    /// order. Missing values read as empty.
    pub fn parse<F>(&mut self, state: &mut TrapState, form: &F)
    where
        F: FormSource + ?Sized,
    {
        let mut names: Vec<&str> = form
            .field_names()
            .into_iter()
            .filter(|name| is_trap_name(name))
            .collect();
        names.sort_unstable();
        names.dedup();

        state.clear();
        for name in names {
            let value = form.value(name).unwrap_or_default().to_string();
            let id = self.entropy.token();
            state.push(make_entry(name, id, Some(value)));
        }
    }

    /// Decide whether the parsed submission came from a human. On rejection
    /// the state is re-armed with a fresh trap.
    pub fn validate(&mut self, state: &mut TrapState) -> bool {
        match self.check(state) {
            Ok(()) => true,
            Err(rejection) => {
                tracing::debug!(
                    reason = rejection.reason(),
                    "honeypot rejected submission: {}",
                    rejection
                );
                TrapGenerator::new(&mut *self.entropy, self.clock).arm(state);
                false
            }
        }
    }

    pub(crate) fn check(&self, state: &TrapState) -> Result<(), Rejection> {
        let mut controls = state.control_entries();
        let control = match (controls.next(), controls.next()) {
            (Some(control), None) => control,
            _ => {
                return Err(Rejection::ControlCardinality {
                    count: state.control_entries().count(),
                })
            }
        };

        if state.data().is_empty() || !control.is_filled() {
            return Err(Rejection::EmptyData);
        }

        if state.decoy_entries().any(|e| e.is_filled()) {
            return Err(Rejection::DecoyFilled);
        }

        let epoch = parse_control_epoch(&control.name).ok_or(Rejection::BadEpoch)?;
        let now = self.clock.now_epoch();
        if is_expired(epoch, state.timeout_secs(), now) {
            return Err(Rejection::Expired { epoch, now });
        }

        if control.value() != state.control_hash(epoch) {
            return Err(Rejection::DigestMismatch);
        }

        Ok(())
    }
}
