//! Domain layer: pure game model types and helpers.

pub mod keys;
pub mod model;
pub mod mutations;
pub mod query;
pub mod rules;
pub mod scoring;
pub mod snapshot;

#[cfg(test)]
mod tests_keys;
#[cfg(test)]
mod tests_snapshot;

// Re-exports for ergonomics
pub use keys::{
    keys_equal, AnswerKey, BonusKey, CategoryKey, HasCategory, HasPlayer, HasQuestion, HasTeam,
    Key, KeyPath, PlayerKey, QuestionKey, TeamKey,
};
pub use model::{Answer, Bonus, Category, Game, Player, Question, Team};
pub use rules::{
    categories_needing_bonus, current_question_key, game_needs_category_choice,
    BONUSES_PER_CATEGORY, CATEGORY_COUNT, PLAYERS_PER_TEAM, QUESTIONS_PER_CATEGORY,
    QUESTION_VALUES, TEAM_COUNT,
};
pub use snapshot::{snapshot, GameSnapshot, PhaseSnapshot};
