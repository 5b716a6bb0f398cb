use std::collections::BTreeMap;

use game_core::{SwitchId, Switches};
use serde::Serialize;

/// Multiplier applied when the party's minimum level reaches `min_level`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LevelModifier {
    pub min_level: u32,
    pub rate: f64,
}

/// Encounter rule parsed from one map's note.
///
/// `level_modifiers` is sorted by descending `min_level` with one entry per
/// threshold; every rate is non-negative.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MapEncounterRule {
    pub switch_modifiers: BTreeMap<SwitchId, f64>,
    pub level_modifiers: Vec<LevelModifier>,
}

impl MapEncounterRule {
    pub fn is_empty(&self) -> bool {
        self.switch_modifiers.is_empty() && self.level_modifiers.is_empty()
    }

    /// Multiplier for the given switch table and party minimum level.
    ///
    /// Every ON switch with a modifier contributes its rate. Of the level
    /// modifiers, only the highest threshold not above `min_level` applies; an
    /// empty party (`None`) skips the level adjustment.
    pub fn evaluate(&self, switches: &Switches, min_level: Option<u32>) -> f64 {
        let mut rate = 1.0;

        for (&switch, &modifier) in &self.switch_modifiers {
            if switches.value(switch) {
                rate *= modifier;
            }
        }

        if let Some(level) = min_level.and_then(|min_level| self.level_rate(min_level)) {
            rate *= level;
        }

        rate
    }

    /// Rate of the highest threshold at or below `min_level`.
    pub fn level_rate(&self, min_level: u32) -> Option<f64> {
        self.level_modifiers
            .iter()
            .find(|modifier| modifier.min_level <= min_level)
            .map(|modifier| modifier.rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule() -> MapEncounterRule {
        MapEncounterRule {
            switch_modifiers: BTreeMap::from([(SwitchId(3), 0.3), (SwitchId(4), 2.0)]),
            level_modifiers: vec![
                LevelModifier {
                    min_level: 10,
                    rate: 0.0,
                },
                LevelModifier {
                    min_level: 8,
                    rate: 0.6,
                },
            ],
        }
    }

    #[test]
    fn highest_qualifying_threshold_wins() {
        let rule = rule();

        assert_eq!(rule.level_rate(7), None);
        assert_eq!(rule.level_rate(8), Some(0.6));
        assert_eq!(rule.level_rate(9), Some(0.6));
        assert_eq!(rule.level_rate(10), Some(0.0));
        assert_eq!(rule.level_rate(50), Some(0.0));
    }

    #[test]
    fn every_active_switch_multiplies() {
        let rule = rule();
        let mut switches = Switches::new(6);

        assert_eq!(rule.evaluate(&switches, Some(1)), 1.0);

        switches.set_value(SwitchId(3), true);
        switches.set_value(SwitchId(4), true);
        assert!((rule.evaluate(&switches, Some(1)) - 0.6).abs() < 1e-12);
        assert!((rule.evaluate(&switches, Some(9)) - 0.36).abs() < 1e-12);
    }

    #[test]
    fn empty_party_skips_level_adjustment() {
        let rule = rule();
        let switches = Switches::new(6);

        assert_eq!(rule.evaluate(&switches, None), 1.0);
    }
}
