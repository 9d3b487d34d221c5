//! Arms a fresh trap: decoys without data plus one control entry.

use crate::clock::Clock;
use crate::entropy::EntropySource;
use crate::entry::make_entry;
use crate::naming::{control_name, decoy_name};
use crate::state::TrapState;

pub struct TrapGenerator<'a, E: ?Sized, C: ?Sized> {
    entropy: &'a mut E,
    clock: &'a C,
}

impl<'a, E, C> TrapGenerator<'a, E, C>
where
    E: EntropySource + ?Sized,
    C: Clock + ?Sized,
{
    pub fn new(entropy: &'a mut E, clock: &'a C) -> Self {
        Self { entropy, clock }
    }

    /// `hp_` followed by a random token. Collisions are possible and only
    /// shrink the effective decoy set.
    pub fn generate_decoy_name(&mut self) -> String {
        decoy_name(&self.entropy.token())
    }

    /// Replace whatever `state` held with a fresh trap stamped with the
    /// current time.
    pub fn arm<'s>(&mut self, state: &'s mut TrapState) -> &'s mut TrapState {
        state.clear();
        for _ in 0..state.decoy_count() {
            let name = self.generate_decoy_name();
            let id = self.entropy.token();
            state.push(make_entry(name, id, None));
        }

        let epoch = self.clock.now_epoch();
        let control = state.control_hash(epoch);
        let id = self.entropy.token();
        state.push(make_entry(control_name(epoch), id, Some(control)));

        tracing::trace!(decoys = state.decoy_count(), epoch, "armed honeypot");
        state
    }
}
