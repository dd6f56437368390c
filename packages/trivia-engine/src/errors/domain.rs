//! Domain-level error type used across the engine.
//!
//! Lookups report a missing entity as `None`; this type is reserved for
//! mutations and flow methods, where a bad key or a rule violation must
//! fail fast instead of silently producing an unchanged game.

use thiserror::Error;

/// Entities a mutation or flow method can fail to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Category,
    Question,
    Answer,
    Bonus,
    Team,
    Player,
}

/// Rule violations rejected before a mutation is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// The question already carries a turn number.
    QuestionAlreadySelected,
    /// Another question is still open for the current turn.
    QuestionStillOpen,
    /// The targeted question is not the one open for the current turn.
    QuestionNotOpen,
    /// Bonus scoring requires all of the category's questions to be played.
    CategoryNotComplete,
    /// The category already has its full set of bonuses.
    BonusRoundComplete,
    Other(String),
}

/// Central domain error type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Business rule violation.
    #[error("validation error {0:?}: {1}")]
    Validation(ValidationKind, String),
    /// Missing resource in domain terms.
    #[error("not found {0:?}: {1}")]
    NotFound(NotFoundKind, String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
}
