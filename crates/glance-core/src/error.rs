//! Error taxonomy for the pacing core.

/// Result alias carrying [`PaceError`].
pub type Result<T> = core::result::Result<T, PaceError>;

/// Configuration errors surfaced by the pacing core.
///
/// Invalid pace parameters are raised at the point a delay is computed, not
/// at session construction; the session never clamps or substitutes a
/// default. Navigation calls made in the wrong state are not errors — they
/// are rejected with a `false` result flag at the boundary.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum PaceError {
    /// Words-per-minute must be a finite value greater than zero.
    #[error("words-per-minute must be positive, got {0}")]
    InvalidWordsPerMinute(f64),
}
