//! Public snapshot API for observing game state without exposing internals.

use serde::{Deserialize, Serialize};

use crate::domain::keys::{CategoryKey, QuestionKey, TeamKey};
use crate::domain::model::Game;
use crate::domain::query::{keyed_categories, keyed_questions, keyed_teams, question_by_key};
use crate::domain::rules::{categories_needing_bonus, current_question_key, BONUSES_PER_CATEGORY};
use crate::domain::scoring::score_for_team;

/// Per-team standing present in all snapshots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStanding {
    pub key: TeamKey,
    pub name: String,
    pub score: u32,
}

/// Per-category board status present in all snapshots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStatus {
    pub key: CategoryKey,
    pub name: String,
    pub questions_played: usize,
    pub bonuses_recorded: usize,
    pub needs_bonus: bool,
}

/// Game-level header present in all snapshots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameHeader {
    pub question_number: u32,
    pub standings: Vec<TeamStanding>,
    pub board: Vec<CategoryStatus>,
}

/// Top-level snapshot combining header and phase-specific data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub game: GameHeader,
    pub phase: PhaseSnapshot,
}

/// Adjacently tagged union of phase-specific snapshots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "data")]
pub enum PhaseSnapshot {
    QuestionOpen(QuestionOpenSnapshot),
    BonusRound(BonusRoundSnapshot),
    CategoryChoice(CategoryChoiceSnapshot),
    Complete,
}

/// A question is open for the current turn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionOpenSnapshot {
    pub key: QuestionKey,
    pub value: Option<u32>,
    pub answers_recorded: usize,
}

/// No question is open and at least one fully played category awaits its
/// bonus scoring.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BonusRoundSnapshot {
    pub categories: Vec<CategoryKey>,
}

/// The board still has unplayed questions and a category must be chosen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryChoiceSnapshot {
    pub open_questions: Vec<QuestionKey>,
}

/// Entry point: produce a snapshot of the current game state.
/// Never panics; derived entirely from the query and rules layers.
pub fn snapshot(game: &Game) -> GameSnapshot {
    let standings = keyed_teams(game)
        .into_iter()
        .map(|(key, team)| TeamStanding {
            key,
            name: team.name.clone(),
            score: score_for_team(game, key),
        })
        .collect();

    let board = keyed_categories(game)
        .into_iter()
        .map(|(key, category)| {
            let questions_played = category.questions.iter().filter(|q| q.number.is_some()).count();
            CategoryStatus {
                key,
                name: category.name.clone(),
                questions_played,
                bonuses_recorded: category.bonuses.len(),
                needs_bonus: questions_played == category.questions.len()
                    && category.bonuses.len() != BONUSES_PER_CATEGORY,
            }
        })
        .collect();

    let game_header = GameHeader {
        question_number: game.question_number,
        standings,
        board,
    };

    GameSnapshot {
        game: game_header,
        phase: build_phase(game),
    }
}

fn build_phase(game: &Game) -> PhaseSnapshot {
    if let Some(key) = current_question_key(game) {
        let question = question_by_key(game, &key);
        return PhaseSnapshot::QuestionOpen(QuestionOpenSnapshot {
            key,
            value: question.and_then(|q| q.value),
            answers_recorded: question.map(|q| q.answers.len()).unwrap_or(0),
        });
    }

    let pending: Vec<CategoryKey> = categories_needing_bonus(game)
        .into_iter()
        .map(|(key, _)| key)
        .collect();
    if !pending.is_empty() {
        return PhaseSnapshot::BonusRound(BonusRoundSnapshot { categories: pending });
    }

    let open_questions: Vec<QuestionKey> = keyed_questions(game, None)
        .into_iter()
        .filter(|(_, question)| question.number.is_none())
        .map(|(key, _)| key)
        .collect();
    if !open_questions.is_empty() {
        return PhaseSnapshot::CategoryChoice(CategoryChoiceSnapshot { open_questions });
    }

    PhaseSnapshot::Complete
}
