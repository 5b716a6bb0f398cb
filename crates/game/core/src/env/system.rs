/// Global system database: declared switch names.
pub trait SystemOracle: Send + Sync {
    /// Length of the declared switch table, including the unused slot 0.
    fn switch_table_len(&self) -> usize;

    fn switch_name(&self, _id: u32) -> Option<&str> {
        None
    }
}

/// Serialized system database.
///
/// `switches[0]` is a placeholder so that indices line up with switch ids.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SystemData {
    pub switches: Vec<String>,
}

impl SystemData {
    /// Builds a table with `declared` named switches (`Switch 1..=declared`).
    pub fn with_switch_count(declared: usize) -> Self {
        let mut switches = Vec::with_capacity(declared + 1);
        switches.push(String::new());
        switches.extend((1..=declared).map(|id| format!("Switch {id}")));
        Self { switches }
    }
}

impl SystemOracle for SystemData {
    fn switch_table_len(&self) -> usize {
        self.switches.len()
    }

    fn switch_name(&self, id: u32) -> Option<&str> {
        if id == 0 {
            return None;
        }
        self.switches.get(id as usize).map(String::as_str)
    }
}
