use thiserror::Error;

/// Errors raised while building game state.
///
/// The simulation systems themselves are total; only construction from
/// untyped input or user-supplied configuration can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A paddle side name other than `left` or `right`.
    #[error("parameter \"side\" must be \"left\" or \"right\", got {0:?}")]
    InvalidSide(String),

    /// Configuration values that cannot produce a playable arena.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
