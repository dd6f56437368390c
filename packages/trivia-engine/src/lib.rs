#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod domain;
pub mod errors;
pub mod services;

// Re-exports for public API
pub use domain::keys::{
    keys_equal, AnswerKey, BonusKey, CategoryKey, HasCategory, HasPlayer, HasQuestion, HasTeam,
    PlayerKey, QuestionKey, TeamKey,
};
pub use domain::model::{Answer, Bonus, Category, Game, Player, Question, Team};
pub use domain::snapshot::{snapshot, GameSnapshot};
pub use errors::domain::DomainError;
pub use services::game_flow::GameFlow;

// Prelude for caller convenience
pub mod prelude {
    pub use super::domain::keys::*;
    pub use super::domain::model::*;
    pub use super::domain::mutations::*;
    pub use super::domain::query::*;
    pub use super::domain::rules::*;
    pub use super::domain::scoring::*;
    pub use super::domain::snapshot::*;
    pub use super::errors::domain::*;
    pub use super::services::game_flow::*;
}

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    trivia_test_support::logging::init();
}
