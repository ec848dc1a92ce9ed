use thiserror::Error;

/// A polarity collaborator could not score a text.
///
/// Never escapes the analyzer: the caller substitutes the neutral fallback.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CollaboratorFailure {
    #[error("{model}: {reason}")]
    Engine { model: &'static str, reason: String },
}
