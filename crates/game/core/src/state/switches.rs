use super::SwitchId;

/// Boolean global flags indexed by [`SwitchId`].
///
/// The table mirrors the declared switch list, so slot 0 exists but is never
/// addressable: valid ids are `1..len()`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Switches {
    values: Vec<bool>,
}

impl Switches {
    pub fn new(table_len: usize) -> Self {
        Self {
            values: vec![false; table_len],
        }
    }

    /// Length of the declared switch table (including the unused slot 0).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.len() <= 1
    }

    /// Returns true when `id` addresses a declared switch.
    pub fn contains(&self, id: SwitchId) -> bool {
        id.0 > 0 && (id.0 as usize) < self.values.len()
    }

    /// Current value; undeclared switches read as OFF.
    pub fn value(&self, id: SwitchId) -> bool {
        self.contains(id) && self.values[id.0 as usize]
    }

    /// Stores `value` and returns whether the id was in range.
    ///
    /// Out-of-range writes are ignored.
    pub fn set_value(&mut self, id: SwitchId, value: bool) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.values[id.0 as usize] = value;
        true
    }

    /// Iterates over the ids of every switch that is currently ON.
    pub fn active(&self) -> impl Iterator<Item = SwitchId> + '_ {
        self.values
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, on)| **on)
            .map(|(id, _)| SwitchId(id as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_zero_and_overflow_are_not_addressable() {
        let mut switches = Switches::new(4);

        assert!(!switches.set_value(SwitchId(0), true));
        assert!(!switches.set_value(SwitchId(4), true));
        assert!(!switches.value(SwitchId(0)));
        assert!(!switches.value(SwitchId(4)));

        assert!(switches.set_value(SwitchId(3), true));
        assert!(switches.value(SwitchId(3)));
        assert_eq!(switches.active().collect::<Vec<_>>(), vec![SwitchId(3)]);
    }
}
