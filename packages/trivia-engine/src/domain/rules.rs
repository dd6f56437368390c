//! Board shape constants and derived game-progress facts.

use crate::domain::keys::{CategoryKey, QuestionKey};
use crate::domain::model::{Category, Game};
use crate::domain::query::{keyed_categories, keyed_questions};

pub const TEAM_COUNT: usize = 2;
pub const PLAYERS_PER_TEAM: usize = 4;
pub const CATEGORY_COUNT: usize = 5;
pub const QUESTIONS_PER_CATEGORY: usize = 4;

/// Point schedule for the four question slots of every category.
pub const QUESTION_VALUES: [u32; QUESTIONS_PER_CATEGORY] = [10, 15, 15, 20];

/// One bonus slot per team; a category's bonus round is complete at exactly
/// this many recorded bonuses.
pub const BONUSES_PER_CATEGORY: usize = TEAM_COUNT;

/// Categories whose four questions have all been played but whose bonus
/// round is still incomplete.
pub fn categories_needing_bonus(game: &Game) -> Vec<(CategoryKey, &Category)> {
    keyed_categories(game)
        .into_iter()
        .filter(|(_, category)| category.bonuses.len() != BONUSES_PER_CATEGORY)
        .filter(|(_, category)| category.questions.iter().all(|q| q.number.is_some()))
        .collect()
}

/// Key of the question open for the current turn: the one whose stamped
/// number equals the game's counter. `None` until a question is selected.
pub fn current_question_key(game: &Game) -> Option<QuestionKey> {
    keyed_questions(game, None)
        .into_iter()
        .find(|(_, question)| question.number == Some(game.question_number))
        .map(|(key, _)| key)
}

/// True while no question is open for the current turn.
pub fn game_needs_category_choice(game: &Game) -> bool {
    current_question_key(game).is_none()
}
