pub mod game;
pub mod rates;
pub mod types;

// Re-export core game logic (not runner-specific)
pub use game::*;
pub use rates::*;
pub use types::*;

// =============================================================================
// PointSampler trait - implemented by whatever supplies per-point randomness
// =============================================================================

/// Source of per-point outcomes.
///
/// Implementations return a uniformly distributed integer in `1..=100`.
/// The serving side wins a point when its serving percentage is at least
/// the drawn value, so a percentage of 100 always wins the point and a
/// percentage of 0 (or below) never does.
///
/// Keeping the draw behind a trait lets callers inject a seeded generator
/// for reproducible runs, or a scripted sequence in tests.
pub trait PointSampler {
    /// Draw the next uniform integer in `1..=100`.
    fn roll(&mut self) -> i32;
}
