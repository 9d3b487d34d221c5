//! Honeypot anti-automation trap for HTML forms.
//!
//! A trap is a handful of decoy inputs that humans never see, plus one
//! control input whose name carries the issue time and whose value is a
//! SHA-256 digest over the decoy names, that time and a server secret. A
//! submission passes when the decoys are still empty, the control digest
//! still matches and the trap is younger than the configured timeout.
//!
//! - [`TrapGenerator`] arms a fresh trap
//! - [`TrapValidator`] parses a submission and accepts or rejects it,
//!   re-arming on rejection
//! - [`HoneypotField`] ties both to one [`TrapState`] per request
//!
//! No server-side state is kept between render and submit; everything needed
//! for validation travels in the rendered field names and the control value.

pub mod clock;
pub mod config;
pub mod digest;
pub mod entropy;
pub mod entry;
pub mod error;
pub mod field;
pub mod form;
pub mod generator;
pub mod naming;
pub mod render;
pub mod state;
pub mod style;
pub mod validator;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::TrapConfig;
pub use digest::{compute_control_hash, HashScheme};
pub use entropy::{
    EntropySource, FixedEntropy, RngEntropy, SequentialEntropy, MAX_DECOYS, MIN_DECOYS,
};
pub use entry::{make_entry, Entry};
pub use error::{TrapError, TrapResult};
pub use field::HoneypotField;
pub use form::{FormData, FormSource};
pub use generator::TrapGenerator;
pub use naming::{CONTROL_PREFIX, DECOY_PREFIX};
pub use render::render_inputs;
pub use state::{TrapState, DEFAULT_TIMEOUT_SECS};
pub use style::{StyleHint, StylePolicy};
pub use validator::TrapValidator;
