use serde::Deserialize;

use crate::config::ParamValue;

/// Parameters of the action-cancel plugin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "RawActionCancelConfig")]
pub struct ActionCancelConfig {
    /// Skills `1..=max_ignore_id` are never replaced. Always at least 1, so
    /// the default attack is exempt.
    pub max_ignore_id: u32,
}

impl ActionCancelConfig {
    pub const DEFAULT_MAX_IGNORE_ID: u32 = 2;
    pub const MIN_MAX_IGNORE_ID: u32 = 1;

    pub fn new(max_ignore_id: u32) -> Self {
        Self {
            max_ignore_id: max_ignore_id.max(Self::MIN_MAX_IGNORE_ID),
        }
    }

    /// Builds the config from a raw plugin-manager string.
    pub fn from_parameter(raw: &str) -> Self {
        Self::from_value(Some(ParamValue::Text(raw.to_string())))
    }

    fn from_value(value: Option<ParamValue>) -> Self {
        let max_ignore_id = value.map_or(Self::DEFAULT_MAX_IGNORE_ID, |value| {
            value.to_int(Self::DEFAULT_MAX_IGNORE_ID, Self::MIN_MAX_IGNORE_ID)
        });
        Self { max_ignore_id }
    }
}

impl Default for ActionCancelConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_IGNORE_ID)
    }
}

#[derive(Deserialize)]
struct RawActionCancelConfig {
    #[serde(default)]
    max_ignore_id: Option<ParamValue>,
}

impl From<RawActionCancelConfig> for ActionCancelConfig {
    fn from(raw: RawActionCancelConfig) -> Self {
        Self::from_value(raw.max_ignore_id)
    }
}
