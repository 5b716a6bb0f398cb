use core::fmt;

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident($inner:ty), $label:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(pub $inner);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, "#{}"), self.0)
            }
        }

        impl From<$inner> for $name {
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }
    };
}

id_type!(
    /// Map identifier. Ids `<= 0` mean "no map loaded".
    MapId(i32),
    "map"
);
id_type!(
    /// Global boolean flag identifier. Valid ids are `1..switch_table_len`.
    SwitchId(u32),
    "switch"
);
id_type!(ActorId(u32), "actor");
id_type!(SkillId(u32), "skill");
id_type!(
    /// Status-effect identifier.
    StateId(u32),
    "state"
);

impl MapId {
    pub const NONE: Self = Self(0);

    pub const fn is_valid(self) -> bool {
        self.0 > 0
    }
}

impl SkillId {
    /// Default attack every battler can fall back to.
    pub const ATTACK: Self = Self(1);
    /// Default guard.
    pub const GUARD: Self = Self(2);
}
