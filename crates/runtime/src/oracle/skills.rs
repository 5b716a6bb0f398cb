//! Skill database served through [`game_core::SkillOracle`].
use game_core::{SkillData, SkillOracle};

pub struct SkillOracleImpl {
    skills: Vec<SkillData>,
}

impl SkillOracleImpl {
    pub fn new(mut skills: Vec<SkillData>) -> Self {
        skills.sort_by_key(|skill| skill.id);
        Self { skills }
    }
}

impl SkillOracle for SkillOracleImpl {
    fn skills(&self) -> &[SkillData] {
        &self.skills
    }
}
