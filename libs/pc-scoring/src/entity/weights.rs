use serde::{Deserialize, Serialize};

/// Multipliers for the absolute scorer's four dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub cpu: f64,
    pub ram: f64,
    pub rom: f64,
    pub battery: f64,
}

impl ScoreWeights {
    pub const fn uniform(weight: f64) -> Self {
        Self {
            cpu: weight,
            ram: weight,
            rom: weight,
            battery: weight,
        }
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::uniform(1.0)
    }
}

/// Multipliers for the relative scorer's six dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RelativeScoreWeights {
    pub cpu: f64,
    pub ram: f64,
    pub rom: f64,
    pub battery: f64,
    pub screen: f64,
    /// Device weight (mass), not a multiplier
    pub weight: f64,
}

impl RelativeScoreWeights {
    pub const fn uniform(weight: f64) -> Self {
        Self {
            cpu: weight,
            ram: weight,
            rom: weight,
            battery: weight,
            screen: weight,
            weight,
        }
    }

    pub fn sum(&self) -> f64 {
        self.cpu + self.ram + self.rom + self.battery + self.screen + self.weight
    }
}

impl Default for RelativeScoreWeights {
    fn default() -> Self {
        Self::uniform(1.0)
    }
}
