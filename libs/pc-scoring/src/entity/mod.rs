// Scoring inputs
pub mod category;
pub mod hardware;
pub mod weights;

// Re-exports for convenience
pub use category::UsageCategory;
pub use hardware::HardwareSpec;
pub use weights::{RelativeScoreWeights, ScoreWeights};
