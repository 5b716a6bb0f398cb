use crate::state::SkillId;

use super::NoteMeta;

/// Skill database.
pub trait SkillOracle: Send + Sync {
    fn skills(&self) -> &[SkillData];

    fn skill(&self, id: SkillId) -> Option<&SkillData> {
        self.skills().iter().find(|skill| skill.id == id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillData {
    pub id: SkillId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub note: String,
}

impl SkillData {
    pub fn new(id: SkillId, name: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            note: note.into(),
        }
    }

    /// `<key:value>` metadata embedded in the note.
    pub fn meta(&self) -> NoteMeta {
        NoteMeta::extract(&self.note)
    }
}
