//! Error handling for the trivia engine.

pub mod domain;

pub use domain::DomainError;
