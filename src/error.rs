use thiserror::Error;

/// Misuse of the construction API.
///
/// These signal a bug in the calling code, never a problem with the parsed
/// input. Parse failures are values (`Outcome::Failed`) and never show up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    #[error("you must provide a message")]
    EmptyMessage,
    #[error("position {position} is out of bounds for a source of length {len}")]
    PositionOutOfBounds { position: usize, len: usize },
}
