/// Host engine tunables that the plugins observe but never change.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Highest level an actor can reach through experience.
    pub max_level: u32,

    /// Experience curve used to derive levels from total experience.
    pub exp_curve: ExpCurve,

    /// Encounter progress gained per step before any modifier is applied.
    pub base_encounter_progress: f64,
}

impl GameConfig {
    pub const DEFAULT_MAX_LEVEL: u32 = 99;
    pub const DEFAULT_ENCOUNTER_PROGRESS: f64 = 1.0;

    /// Progress multiplier of the "encounter half" party ability.
    pub const ENCOUNTER_HALF_RATE: f64 = 0.5;

    pub fn new() -> Self {
        Self {
            max_level: Self::DEFAULT_MAX_LEVEL,
            exp_curve: ExpCurve::default(),
            base_encounter_progress: Self::DEFAULT_ENCOUNTER_PROGRESS,
        }
    }

    pub fn with_max_level(mut self, max_level: u32) -> Self {
        self.max_level = max_level.max(1);
        self
    }

    pub fn with_exp_curve(mut self, exp_curve: ExpCurve) -> Self {
        self.exp_curve = exp_curve;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Quadratic experience curve: reaching level `n` needs `base * (n - 1)^2` total exp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpCurve {
    pub base: u64,
}

impl ExpCurve {
    pub const DEFAULT_BASE: u64 = 30;

    pub const fn new(base: u64) -> Self {
        Self { base }
    }

    /// Total experience required to stand at `level`.
    pub fn exp_for_level(&self, level: u32) -> u64 {
        let steps = u64::from(level.saturating_sub(1));
        self.base.saturating_mul(steps.saturating_mul(steps))
    }
}

impl Default for ExpCurve {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE)
    }
}
