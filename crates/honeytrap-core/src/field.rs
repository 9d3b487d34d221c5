//! The honeypot form field: one trap per render/submit cycle.

use rand::rngs::StdRng;

use crate::clock::{Clock, SystemClock};
use crate::config::TrapConfig;
use crate::entropy::{EntropySource, RngEntropy};
use crate::error::TrapResult;
use crate::form::FormSource;
use crate::generator::TrapGenerator;
use crate::render::render_inputs;
use crate::state::TrapState;
use crate::style::{StyleHint, StylePolicy};
use crate::validator::TrapValidator;

/// Owns a [`TrapState`] together with the randomness and clock used to arm
/// and check it.
///
/// ```
/// use honeytrap_core::{FormData, HoneypotField, TrapConfig};
///
/// # fn main() -> Result<(), honeytrap_core::TrapError> {
/// let mut field = HoneypotField::with_system(TrapConfig::new("server-secret"))?;
/// field.process::<FormData>(None);
/// let html = field.render_html();
///
/// // ... later, with the posted body:
/// let mut posted = FormData::new();
/// for entry in field.state() {
///     posted.insert(entry.name.clone(), entry.value());
/// }
/// let mut field = HoneypotField::with_system(TrapConfig::new("server-secret"))?;
/// field.process(Some(&posted));
/// assert!(field.validate());
/// # let _ = html;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct HoneypotField<E, C> {
    state: TrapState,
    entropy: E,
    clock: C,
    style_policy: StylePolicy,
    submitted: bool,
}

impl HoneypotField<RngEntropy<StdRng>, SystemClock> {
    pub fn with_system(config: TrapConfig) -> TrapResult<Self> {
        Self::new(config, RngEntropy::from_entropy(), SystemClock)
    }
}

impl<E: EntropySource, C: Clock> HoneypotField<E, C> {
    /// Build an unarmed field. Fails if the secret is missing or a pinned
    /// decoy count is out of range.
    pub fn new(config: TrapConfig, mut entropy: E, clock: C) -> TrapResult<Self> {
        let secret = config.require_secret()?.to_string();
        config.check_decoy_count()?;
        let decoy_count = match config.decoy_count {
            Some(count) => count,
            None => entropy.decoy_count(),
        };

        Ok(Self {
            state: TrapState::new(secret, decoy_count, config.timeout_secs, config.hash_scheme),
            entropy,
            clock,
            style_policy: config.style_policy,
            submitted: false,
        })
    }

    /// Arm a fresh trap when there is no submission, otherwise load the
    /// submitted trap fields.
    pub fn process<F>(&mut self, formdata: Option<&F>)
    where
        F: FormSource + ?Sized,
    {
        match formdata {
            Some(form) if !form.is_empty() => {
                TrapValidator::new(&mut self.entropy, &self.clock).parse(&mut self.state, form);
                self.submitted = true;
            }
            _ => self.arm(),
        }
    }

    pub fn arm(&mut self) {
        TrapGenerator::new(&mut self.entropy, &self.clock).arm(&mut self.state);
        self.submitted = false;
    }

    /// `true` if the loaded submission passes every check. A rejected
    /// submission leaves a freshly armed trap behind.
    ///
    /// A field that was armed rather than loaded from a submission never
    /// validates.
    pub fn validate(&mut self) -> bool {
        if !self.submitted {
            tracing::debug!(
                reason = "E_TRAP_NO_SUBMISSION",
                "honeypot rejected submission: nothing submitted"
            );
            self.arm();
            return false;
        }
        let accepted = TrapValidator::new(&mut self.entropy, &self.clock).validate(&mut self.state);
        if !accepted {
            self.submitted = false;
        }
        accepted
    }

    pub fn state(&self) -> &TrapState {
        &self.state
    }

    /// Draw a style hint. Every call draws again.
    pub fn next_style_hint(&mut self) -> StyleHint {
        self.entropy.style_hint()
    }

    pub fn render_html(&mut self) -> String {
        let entropy = &mut self.entropy;
        render_inputs(self.state.iter(), self.style_policy, || entropy.style_hint())
    }
}
