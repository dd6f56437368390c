//! Entity value tree for the trivia board.
//!
//! Every entity is an immutable value; "mutation" elsewhere in the crate
//! means producing a new root. `Game` keeps its categories and teams behind
//! `Arc` so a transition clones only the branch it touches and shares the
//! rest with its predecessor.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::keys::{PlayerKey, TeamKey};
use crate::domain::rules::{CATEGORY_COUNT, PLAYERS_PER_TEAM, QUESTION_VALUES, TEAM_COUNT};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub name: String,
}

impl Player {
    /// Positional name used when a team is assembled ("Player 1"..).
    pub fn numbered(n: usize) -> Self {
        Self {
            name: format!("Player {n}"),
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self {
            name: "Unknown Player".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub name: String,
    /// Fixed roster, `PLAYERS_PER_TEAM` entries at creation.
    pub players: Vec<Player>,
}

impl Team {
    /// Positional name used when a game is assembled ("Team 1"..).
    pub fn numbered(n: usize) -> Self {
        Self {
            name: format!("Team {n}"),
            ..Self::default()
        }
    }
}

impl Default for Team {
    fn default() -> Self {
        Self {
            name: "Unknown Team".to_string(),
            players: (1..=PLAYERS_PER_TEAM).map(Player::numbered).collect(),
        }
    }
}

/// One recorded attempt at a question. Appended by the scoring mutation,
/// never edited in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub player: Option<PlayerKey>,
    pub is_correct: Option<bool>,
}

impl Answer {
    pub const fn recorded(player: PlayerKey, is_correct: bool) -> Self {
        Self {
            player: Some(player),
            is_correct: Some(is_correct),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Turn number stamped when the question is selected during play;
    /// `None` until then.
    pub number: Option<u32>,
    /// Point value, fixed at creation from the per-category schedule.
    pub value: Option<u32>,
    pub answers: Vec<Answer>,
}

impl Question {
    pub fn worth(value: u32) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }
}

/// One recorded bonus award for a category. Appended by the bonus-scoring
/// mutation, never edited in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bonus {
    pub team: Option<TeamKey>,
    pub value: Option<u32>,
}

impl Bonus {
    pub const fn recorded(team: TeamKey, value: u32) -> Self {
        Self {
            team: Some(team),
            value: Some(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub name: String,
    /// Exactly `QUESTIONS_PER_CATEGORY` slots, values per `QUESTION_VALUES`.
    pub questions: Vec<Question>,
    /// Empty at creation; at most one bonus per team in normal play.
    pub bonuses: Vec<Bonus>,
}

impl Category {
    /// Positional name used when a game is assembled ("Category 1"..).
    pub fn numbered(n: usize) -> Self {
        Self {
            name: format!("Category {n}"),
            ..Self::default()
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Self {
            name: "Unknown Category".to_string(),
            questions: QUESTION_VALUES.iter().copied().map(Question::worth).collect(),
            bonuses: Vec::new(),
        }
    }
}

/// Entire game container, sufficient for all pure domain operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    /// Counter for the turn currently being played, 1-based. Advanced by
    /// the `next_question` mutation only.
    pub question_number: u32,
    /// Exactly `CATEGORY_COUNT` categories, fixed for the whole game.
    pub categories: Vec<Arc<Category>>,
    /// Exactly `TEAM_COUNT` teams, fixed for the whole game.
    pub teams: Vec<Arc<Team>>,
}

impl Game {
    pub fn new() -> Self {
        Self {
            question_number: 1,
            categories: (1..=CATEGORY_COUNT)
                .map(|n| Arc::new(Category::numbered(n)))
                .collect(),
            teams: (1..=TEAM_COUNT).map(|n| Arc::new(Team::numbered(n))).collect(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
