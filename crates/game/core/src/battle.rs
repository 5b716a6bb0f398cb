//! Battle-action model consumed by action filters.
//!
//! The host's battle pipeline hands each pending action to the registered
//! [`crate::engine::ActionFilter`]s before executing it.

use crate::state::{ActorState, SkillId, StateId};

/// A combatant that can be affected by status effects.
pub trait Battler {
    fn is_state_affected(&self, state: StateId) -> bool;
}

impl Battler for ActorState {
    fn is_state_affected(&self, state: StateId) -> bool {
        ActorState::is_state_affected(self, state)
    }
}

/// What an action uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionItem {
    Skill(SkillId),
    Item(u32),
}

/// A pending battle action.
pub trait BattleAction {
    /// The battler performing the action, if still resolvable.
    fn subject(&self) -> Option<&dyn Battler>;

    /// What the action uses, if anything has been chosen yet.
    fn item(&self) -> Option<ActionItem>;

    fn is_skill(&self) -> bool {
        matches!(self.item(), Some(ActionItem::Skill(_)))
    }

    /// Replaces the action with the default attack.
    fn set_attack(&mut self);
}

/// Concrete action owned by the host's battle pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameAction<'a> {
    subject: Option<&'a ActorState>,
    item: Option<ActionItem>,
}

impl<'a> GameAction<'a> {
    pub fn new(subject: Option<&'a ActorState>, item: Option<ActionItem>) -> Self {
        Self { subject, item }
    }

    pub fn skill(subject: &'a ActorState, skill: SkillId) -> Self {
        Self::new(Some(subject), Some(ActionItem::Skill(skill)))
    }

    pub fn skill_id(&self) -> Option<SkillId> {
        match self.item? {
            ActionItem::Skill(id) => Some(id),
            ActionItem::Item(_) => None,
        }
    }
}

impl BattleAction for GameAction<'_> {
    fn subject(&self) -> Option<&dyn Battler> {
        self.subject.map(|actor| actor as &dyn Battler)
    }

    fn item(&self) -> Option<ActionItem> {
        self.item
    }

    fn set_attack(&mut self) {
        self.item = Some(ActionItem::Skill(SkillId::ATTACK));
    }
}
