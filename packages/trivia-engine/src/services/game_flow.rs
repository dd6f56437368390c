//! Game flow orchestration - validated transitions over the pure mutations.
//!
//! An external driver (UI, transport layer) holds the current `Game` value
//! and calls these fine-grained methods to move play forward. Each method
//! checks its preconditions, applies the corresponding domain mutation, and
//! logs the transition. The raw mutations in `domain::mutations` stay
//! available for callers that manage sequencing themselves.

use tracing::{debug, info};

use crate::domain::keys::{
    category_path, question_path, CategoryKey, PlayerKey, QuestionKey, TeamKey,
};
use crate::domain::model::Game;
use crate::domain::mutations;
use crate::domain::query::{category_by_key, player_by_key, question_by_key, team_by_key};
use crate::domain::rules::{current_question_key, BONUSES_PER_CATEGORY};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

/// Game flow service. Stateless; every method threads a `Game` value.
pub struct GameFlow;

impl GameFlow {
    pub fn new() -> Self {
        Self
    }

    /// Open a question for the current turn.
    ///
    /// The question must exist, must not have been played already, and no
    /// other question may be open for this turn.
    pub fn select_question(&self, game: &Game, key: QuestionKey) -> Result<Game, DomainError> {
        let question = question_by_key(game, &key).ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Question,
                format!("no question at {}", question_path(&key)),
            )
        })?;
        if question.number.is_some() {
            return Err(DomainError::validation(
                ValidationKind::QuestionAlreadySelected,
                format!("{} was already played", question_path(&key)),
            ));
        }
        if current_question_key(game).is_some() {
            return Err(DomainError::validation(
                ValidationKind::QuestionStillOpen,
                "another question is open for this turn",
            ));
        }

        let next = mutations::select_question(game, &key)?;
        info!(
            category = key.category,
            question = key.question,
            number = game.question_number,
            "Question selected"
        );
        Ok(next)
    }

    /// Record a player's attempt at the currently open question.
    pub fn record_answer(
        &self,
        game: &Game,
        key: QuestionKey,
        player: PlayerKey,
        is_correct: bool,
    ) -> Result<Game, DomainError> {
        if player_by_key(game, player).is_none() {
            return Err(DomainError::not_found(
                NotFoundKind::Player,
                format!("no player at team {} seat {}", player.team, player.player),
            ));
        }
        if current_question_key(game) != Some(key) {
            return Err(DomainError::validation(
                ValidationKind::QuestionNotOpen,
                format!("{} is not open for the current turn", question_path(&key)),
            ));
        }

        let next = mutations::score_answer(game, &key, player, is_correct)?;
        info!(
            category = key.category,
            question = key.question,
            team = player.team,
            player = player.player,
            is_correct,
            "Answer recorded"
        );
        Ok(next)
    }

    /// Record a bonus award for a fully played category.
    pub fn record_bonus(
        &self,
        game: &Game,
        key: CategoryKey,
        team: TeamKey,
        value: u32,
    ) -> Result<Game, DomainError> {
        let category = category_by_key(game, &key).ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Category,
                format!("no category at {}", category_path(&key)),
            )
        })?;
        if team_by_key(game, &team).is_none() {
            return Err(DomainError::not_found(
                NotFoundKind::Team,
                format!("no team at index {}", team.team),
            ));
        }
        if category.questions.iter().any(|q| q.number.is_none()) {
            return Err(DomainError::validation(
                ValidationKind::CategoryNotComplete,
                format!("{} still has unplayed questions", category_path(&key)),
            ));
        }
        if category.bonuses.len() >= BONUSES_PER_CATEGORY {
            return Err(DomainError::validation(
                ValidationKind::BonusRoundComplete,
                format!("{} already has its full set of bonuses", category_path(&key)),
            ));
        }

        let next = mutations::score_bonus(game, &key, team, value)?;
        info!(category = key.category, team = team.team, value, "Bonus recorded");
        Ok(next)
    }

    /// Close the current turn and advance the question counter.
    ///
    /// Requires an open question; advancing past an unselected counter
    /// would leave a turn number no question can ever carry.
    pub fn advance(&self, game: &Game) -> Result<Game, DomainError> {
        if current_question_key(game).is_none() {
            return Err(DomainError::validation(
                ValidationKind::QuestionNotOpen,
                "no question is open for the current turn",
            ));
        }

        let next = mutations::next_question(game);
        debug!(question_number = next.question_number, "Transition: -> category choice");
        Ok(next)
    }
}

impl Default for GameFlow {
    fn default() -> Self {
        Self::new()
    }
}
