//! Per-map rule memoization.
//!
//! Rules are kept until the number of insertions since the last reset passes
//! [`MAX_CACHED_RULES`]; the whole rule map is then cleared and the insertion
//! that overflowed it becomes the first entry of the new generation.
//!
//! "No rule" markers live in a separate set that is never cleared. A marker is
//! a bare map id while a rule holds two collections, so keeping every marker
//! costs little and saves re-scanning notes of untagged maps after a reset.

use std::collections::{HashMap, HashSet};

use game_core::MapId;
use tracing::debug;

use super::rule::MapEncounterRule;

/// Insertions allowed before the rule map is reset.
pub const MAX_CACHED_RULES: usize = 50;

#[derive(Clone, Debug, Default)]
pub struct RuleCache {
    rules: HashMap<MapId, MapEncounterRule>,
    no_rule: HashSet<MapId>,
    loaded: usize,
    resets: u64,
}

impl RuleCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, map: MapId) -> Option<&MapEncounterRule> {
        self.rules.get(&map)
    }

    /// Returns true once `map` has been confirmed to carry no usable tag.
    pub fn is_no_rule(&self, map: MapId) -> bool {
        self.no_rule.contains(&map)
    }

    pub fn mark_no_rule(&mut self, map: MapId) {
        if self.no_rule.insert(map) {
            debug!(target: "plugins::encounter", %map, "map marked as having no encounter rule");
        }
    }

    /// Stores `rule`, resetting the rule map first if it is full.
    pub fn insert(&mut self, map: MapId, rule: MapEncounterRule) -> &MapEncounterRule {
        self.loaded += 1;
        if self.loaded > MAX_CACHED_RULES {
            debug!(
                target: "plugins::encounter",
                evicted = self.rules.len(),
                "encounter rule cache full, resetting"
            );
            self.rules.clear();
            self.loaded = 1;
            self.resets += 1;
        }

        self.rules.entry(map).insert_entry(rule).into_mut()
    }

    /// Number of cached rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Number of maps marked as having no rule.
    pub fn no_rule_len(&self) -> usize {
        self.no_rule.len()
    }

    /// How many times the rule map has been reset.
    pub fn resets(&self) -> u64 {
        self.resets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encounter::rule::LevelModifier;

    fn rule(rate: f64) -> MapEncounterRule {
        MapEncounterRule {
            level_modifiers: vec![LevelModifier { min_level: 1, rate }],
            ..MapEncounterRule::default()
        }
    }

    #[test]
    fn overflow_clears_rules_and_keeps_the_newcomer() {
        let mut cache = RuleCache::new();
        for id in 1..=MAX_CACHED_RULES as i32 {
            cache.insert(MapId(id), rule(0.5));
        }
        assert_eq!(cache.len(), MAX_CACHED_RULES);
        assert_eq!(cache.resets(), 0);

        cache.insert(MapId(51), rule(0.25));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.resets(), 1);
        assert!(cache.get(MapId(1)).is_none());
        assert_eq!(cache.get(MapId(51)), Some(&rule(0.25)));
    }

    #[test]
    fn no_rule_markers_survive_resets() {
        let mut cache = RuleCache::new();
        cache.mark_no_rule(MapId(900));

        for id in 1..=(MAX_CACHED_RULES as i32 + 1) {
            cache.insert(MapId(id), rule(1.0));
        }

        assert_eq!(cache.resets(), 1);
        assert!(cache.is_no_rule(MapId(900)));
        assert_eq!(cache.no_rule_len(), 1);
    }
}
