//! State-gated skills.
//!
//! A skill note may carry `<requiredStates:ID,ID,...>`. When a battler is about
//! to use such a skill without being affected by any of the listed states, the
//! action is replaced by the default attack. Skills `1..=max_ignore_id` (attack
//! and, by default, guard) are never touched.
//!
//! Requirements are read from the skill database once, when the host signals
//! that skills finished loading.
mod config;
mod requirements;

pub use config::ActionCancelConfig;
pub use requirements::{REQUIRED_STATES_KEY, SkillRequirements, parse_state_ids};

use std::sync::OnceLock;

use game_core::{
    ActionFilter, ActionItem, BattleAction, DataCategory, HookContext, HookError, HostEvent,
    PostMutationHook, SkillId,
};
use tracing::debug;

#[derive(Debug, Default)]
pub struct ActionCancel {
    config: ActionCancelConfig,
    requirements: OnceLock<SkillRequirements>,
}

impl ActionCancel {
    pub const NAME: &'static str = "action_cancel";

    pub fn new(config: ActionCancelConfig) -> Self {
        Self {
            config,
            requirements: OnceLock::new(),
        }
    }

    pub fn config(&self) -> ActionCancelConfig {
        self.config
    }

    /// Requirements, once the skill database has been loaded.
    pub fn requirements(&self) -> Option<&SkillRequirements> {
        self.requirements.get()
    }

    /// Installs requirements unless they were already loaded. Returns true if installed.
    pub fn load_requirements(&self, requirements: SkillRequirements) -> bool {
        let count = requirements.len();
        let installed = self.requirements.set(requirements).is_ok();
        if installed {
            debug!(target: "plugins::action_cancel", skills = count, "loaded skill state requirements");
        }
        installed
    }

    fn is_exempt(&self, skill: SkillId) -> bool {
        skill.0 >= 1 && skill.0 <= self.config.max_ignore_id
    }

    /// Applies the requirement check to `action`. Returns true if it was replaced.
    pub fn check(&self, action: &mut dyn BattleAction) -> bool {
        let Some(ActionItem::Skill(skill)) = action.item() else {
            return false;
        };
        if !action.is_skill() || self.is_exempt(skill) {
            return false;
        }
        let Some(required) = self.requirements().and_then(|reqs| reqs.get(skill)) else {
            return false;
        };
        let Some(subject) = action.subject() else {
            return false;
        };

        if required.iter().any(|&state| subject.is_state_affected(state)) {
            return false;
        }

        debug!(
            target: "plugins::action_cancel",
            %skill,
            "required states missing, forcing default attack"
        );
        action.set_attack();
        true
    }
}

impl PostMutationHook for ActionCancel {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn should_trigger(&self, event: &HostEvent) -> bool {
        matches!(
            event,
            HostEvent::DataLoaded {
                category: DataCategory::Skills
            }
        ) && self.requirements.get().is_none()
    }

    fn apply(&self, ctx: &HookContext<'_>) -> Result<(), HookError> {
        let skills = ctx.env.skills()?;
        self.load_requirements(SkillRequirements::from_skills(skills.skills()));
        Ok(())
    }
}

impl ActionFilter for ActionCancel {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn filter(&self, action: &mut dyn BattleAction) {
        self.check(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{ActorId, ActorState, ExpCurve, GameAction, SkillData, StateId};

    fn plugin() -> ActionCancel {
        let plugin = ActionCancel::new(ActionCancelConfig::default());
        plugin.load_requirements(SkillRequirements::from_skills(&[
            SkillData::new(SkillId(2), "Guard", "<requiredStates:9>"),
            SkillData::new(SkillId(10), "Rage Strike", "<requiredStates:4,5>"),
        ]));
        plugin
    }

    fn actor() -> ActorState {
        ActorState::at_level(ActorId(1), "Reid", 5, &ExpCurve::default())
    }

    #[test]
    fn missing_state_forces_attack() {
        let plugin = plugin();
        let actor = actor();
        let mut action = GameAction::skill(&actor, SkillId(10));

        assert!(plugin.check(&mut action));
        assert_eq!(action.skill_id(), Some(SkillId::ATTACK));
    }

    #[test]
    fn any_required_state_keeps_the_skill() {
        let plugin = plugin();
        let actor = actor().with_state(StateId(5));
        let mut action = GameAction::skill(&actor, SkillId(10));

        assert!(!plugin.check(&mut action));
        assert_eq!(action.skill_id(), Some(SkillId(10)));
    }

    #[test]
    fn exempt_and_unlisted_skills_are_untouched() {
        let plugin = plugin();
        let actor = actor();

        let mut guard = GameAction::skill(&actor, SkillId::GUARD);
        assert!(!plugin.check(&mut guard));

        let mut plain = GameAction::skill(&actor, SkillId(11));
        assert!(!plugin.check(&mut plain));

        let mut item = GameAction::new(Some(&actor), Some(ActionItem::Item(3)));
        assert!(!plugin.check(&mut item));

        let mut no_subject = GameAction::new(None, Some(ActionItem::Skill(SkillId(10))));
        assert!(!plugin.check(&mut no_subject));
        assert_eq!(no_subject.skill_id(), Some(SkillId(10)));
    }

    #[test]
    fn raised_ignore_limit_exempts_more_skills() {
        let plugin = ActionCancel::new(ActionCancelConfig::new(10));
        plugin.load_requirements(SkillRequirements::from_skills(&[SkillData::new(
            SkillId(10),
            "Rage Strike",
            "<requiredStates:4>",
        )]));
        let actor = actor();
        let mut action = GameAction::skill(&actor, SkillId(10));

        assert!(!plugin.check(&mut action));
    }

    #[test]
    fn requirements_load_only_once() {
        let plugin = plugin();
        assert!(!plugin.load_requirements(SkillRequirements::default()));
        assert_eq!(plugin.requirements().map(SkillRequirements::len), Some(2));
        assert!(!plugin.should_trigger(&HostEvent::DataLoaded {
            category: DataCategory::Skills
        }));
    }
}
