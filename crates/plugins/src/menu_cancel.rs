//! Battle command lock-in.
//!
//! Once an actor's command window is open the player cannot cancel back to a
//! previous actor or to the party command menu. The host still binds its
//! cancel handler; this policy only reports cancel as unavailable.

use game_core::CommandWindowPolicy;

#[derive(Clone, Copy, Debug, Default)]
pub struct NoBattleCancel;

impl NoBattleCancel {
    pub const NAME: &'static str = "no_battle_cancel";
}

impl CommandWindowPolicy for NoBattleCancel {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn is_cancel_enabled(&self, _base: bool) -> bool {
        false
    }
}
