//! Randomness used by the trap: tokens, decoy count and style choice.
//!
//! Kept behind a trait so tests can substitute fixed values.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::naming::{TOKEN_ALPHABET, TOKEN_MAX_LEN, TOKEN_MIN_LEN};
use crate::style::StyleHint;

/// Inclusive bounds on the number of decoys per trap.
pub const MIN_DECOYS: u8 = 1;
pub const MAX_DECOYS: u8 = 5;

pub trait EntropySource {
    /// Lowercase alphanumeric token, length in `TOKEN_MIN_LEN..=TOKEN_MAX_LEN`.
    fn token(&mut self) -> String;

    /// Decoy count in `MIN_DECOYS..=MAX_DECOYS`.
    fn decoy_count(&mut self) -> u8;

    fn style_hint(&mut self) -> StyleHint;
}

/// [`EntropySource`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngEntropy<R> {
    rng: R,
}

impl<R: Rng> RngEntropy<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngEntropy<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> EntropySource for RngEntropy<R> {
    fn token(&mut self) -> String {
        let len = self.rng.gen_range(TOKEN_MIN_LEN..=TOKEN_MAX_LEN);
        (0..len)
            .map(|_| TOKEN_ALPHABET[self.rng.gen_range(0..TOKEN_ALPHABET.len())] as char)
            .collect()
    }

    fn decoy_count(&mut self) -> u8 {
        self.rng.gen_range(MIN_DECOYS..=MAX_DECOYS)
    }

    fn style_hint(&mut self) -> StyleHint {
        if self.rng.gen_bool(0.5) {
            StyleHint::Hidden
        } else {
            StyleHint::Collapsed
        }
    }
}

/// Deterministic source: every token is the same string.
#[derive(Debug, Clone)]
pub struct FixedEntropy {
    pub token: String,
    pub decoy_count: u8,
    pub style: StyleHint,
}

impl FixedEntropy {
    pub fn new(token: impl Into<String>, decoy_count: u8) -> Self {
        Self {
            token: token.into(),
            decoy_count,
            style: StyleHint::Hidden,
        }
    }
}

impl EntropySource for FixedEntropy {
    fn token(&mut self) -> String {
        self.token.clone()
    }

    fn decoy_count(&mut self) -> u8 {
        self.decoy_count
    }

    fn style_hint(&mut self) -> StyleHint {
        self.style
    }
}

/// Deterministic source that numbers its tokens (`t0`, `t1`, ...) so names
/// stay distinct.
#[derive(Debug, Clone, Default)]
pub struct SequentialEntropy {
    next: usize,
    pub decoy_count: u8,
}

impl SequentialEntropy {
    pub fn new(decoy_count: u8) -> Self {
        Self {
            next: 0,
            decoy_count,
        }
    }
}

impl EntropySource for SequentialEntropy {
    fn token(&mut self) -> String {
        let token = format!("t{:04}", self.next);
        self.next += 1;
        token
    }

    fn decoy_count(&mut self) -> u8 {
        self.decoy_count
    }

    fn style_hint(&mut self) -> StyleHint {
        if self.next % 2 == 0 {
            StyleHint::Hidden
        } else {
            StyleHint::Collapsed
        }
    }
}
