use std::collections::HashMap;

use game_core::{SkillData, SkillId, StateId};

/// Note key listing the states a skill needs.
pub const REQUIRED_STATES_KEY: &str = "requiredStates";

/// Required states per skill, built once from the skill database.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkillRequirements {
    by_skill: HashMap<SkillId, Vec<StateId>>,
}

impl SkillRequirements {
    /// Collects `<requiredStates:ID,ID,...>` tags from every skill note.
    /// Skills whose list yields no usable id get no requirement.
    pub fn from_skills(skills: &[SkillData]) -> Self {
        let by_skill = skills
            .iter()
            .filter_map(|skill| {
                let meta = skill.meta();
                let states = parse_state_ids(meta.text(REQUIRED_STATES_KEY)?);
                (!states.is_empty()).then_some((skill.id, states))
            })
            .collect();
        Self { by_skill }
    }

    pub fn get(&self, skill: SkillId) -> Option<&[StateId]> {
        self.by_skill.get(&skill).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.by_skill.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_skill.is_empty()
    }
}

/// Parses a comma-separated id list. Each entry contributes its leading
/// decimal digits (after whitespace); entries without any are skipped.
pub fn parse_state_ids(text: &str) -> Vec<StateId> {
    text.split(',')
        .filter_map(|entry| {
            let entry = entry.trim_start();
            let digits = entry
                .find(|c: char| !c.is_ascii_digit())
                .map_or(entry, |end| &entry[..end]);
            digits.parse::<u32>().ok().map(StateId)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_ids_take_leading_digits() {
        assert_eq!(
            parse_state_ids("4, 5,x,12abc,,-3"),
            vec![StateId(4), StateId(5), StateId(12)]
        );
    }

    #[test]
    fn only_skills_with_usable_lists_get_requirements() {
        let skills = [
            SkillData::new(SkillId(10), "Berserk Slash", "<requiredStates:7>"),
            SkillData::new(SkillId(11), "Fizzle", "<requiredStates:none>"),
            SkillData::new(SkillId(12), "Heal", "restores hp"),
        ];
        let requirements = SkillRequirements::from_skills(&skills);

        assert_eq!(requirements.len(), 1);
        assert_eq!(requirements.get(SkillId(10)), Some(&[StateId(7)][..]));
        assert_eq!(requirements.get(SkillId(11)), None);
    }
}
