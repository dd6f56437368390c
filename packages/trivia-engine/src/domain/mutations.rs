//! Pure state transitions. Each produces a new [`Game`]; the input is never
//! touched. An out-of-range key fails fast with `NotFound` naming the path.
//!
//! Rule-level preconditions (is the question open, is the bonus round due)
//! are the flow layer's job; these functions only require that the target
//! exists.

use std::sync::Arc;

use crate::domain::keys::{
    category_path, question_path, HasCategory, HasQuestion, PlayerKey, TeamKey,
};
use crate::domain::model::{Answer, Bonus, Category, Game, Question};
use crate::errors::domain::{DomainError, NotFoundKind};

fn category_mut<'a>(
    game: &'a mut Game,
    key: &impl HasCategory,
) -> Result<&'a mut Category, DomainError> {
    let slot = game.categories.get_mut(key.category_index()).ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::Category,
            format!("no category at {}", category_path(key)),
        )
    })?;
    Ok(Arc::make_mut(slot))
}

fn question_mut<'a>(
    game: &'a mut Game,
    key: &impl HasQuestion,
) -> Result<&'a mut Question, DomainError> {
    let path = question_path(key);
    let index = key.question_index();
    category_mut(game, key)?
        .questions
        .get_mut(index)
        .ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Question, format!("no question at {path}"))
        })
}

/// Append a bonus award to a category. Accepts any key carrying the
/// category prefix.
pub fn score_bonus(
    game: &Game,
    category: &impl HasCategory,
    team: TeamKey,
    value: u32,
) -> Result<Game, DomainError> {
    let mut next = game.clone();
    category_mut(&mut next, category)?
        .bonuses
        .push(Bonus::recorded(team, value));
    Ok(next)
}

/// Append a player's answer to a question. Accepts any key carrying the
/// question prefix.
pub fn score_answer(
    game: &Game,
    question: &impl HasQuestion,
    player: PlayerKey,
    is_correct: bool,
) -> Result<Game, DomainError> {
    let mut next = game.clone();
    question_mut(&mut next, question)?
        .answers
        .push(Answer::recorded(player, is_correct));
    Ok(next)
}

/// Advance the game's question counter by exactly one. Question `number`
/// fields are untouched.
pub fn next_question(game: &Game) -> Game {
    let mut next = game.clone();
    next.question_number += 1;
    next
}

/// Stamp the targeted question with the game's current counter. The counter
/// itself does not move; pair with [`next_question`] to finish the turn.
pub fn select_question(game: &Game, question: &impl HasQuestion) -> Result<Game, DomainError> {
    let mut next = game.clone();
    let number = next.question_number;
    question_mut(&mut next, question)?.number = Some(number);
    Ok(next)
}
