//! Plugin parameters.
//!
//! Parameters arrive either as typed TOML values or as the raw strings a
//! plugin manager hands out; [`ParamValue`] accepts both.

use serde::Deserialize;

use crate::action_cancel::ActionCancelConfig;

/// Parameters for every plugin in this crate.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    pub action_cancel: ActionCancelConfig,
}

/// A parameter value as written by the user.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl ParamValue {
    /// Numeric reading of the value; text is parsed after trimming.
    /// Empty or non-numeric text yields `None`.
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            Self::Int(value) => *value as f64,
            Self::Float(value) => *value,
            Self::Text(text) => text.trim().parse::<f64>().ok()?,
        };
        (!value.is_nan()).then_some(value)
    }

    /// Integer parameter with a default for unusable input and a lower bound.
    /// Fractional values are truncated toward negative infinity.
    pub fn to_int(&self, default: u32, min: u32) -> u32 {
        match self.as_number() {
            Some(value) => value.max(f64::from(min)).floor().min(f64::from(u32::MAX)) as u32,
            None => default,
        }
    }
}
