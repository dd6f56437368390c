//! Score computation for teams and players.

use crate::domain::keys::{PlayerKey, TeamKey};
use crate::domain::model::Game;
use crate::domain::query::{
    answers_for_player, answers_for_team, bonuses_for_team, question_by_key,
};

/// Sum of question values for every correct answer given by the team's
/// players, plus the team's recorded bonuses.
pub fn score_for_team(game: &Game, team: TeamKey) -> u32 {
    let answer_points: u32 = answers_for_team(game, team)
        .into_iter()
        .filter(|(_, answer)| answer.is_correct == Some(true))
        .filter_map(|(key, _)| question_by_key(game, &key))
        .filter_map(|question| question.value)
        .sum();
    let bonus_points: u32 = bonuses_for_team(game, team)
        .into_iter()
        .filter_map(|(_, bonus)| bonus.value)
        .sum();
    answer_points + bonus_points
}

/// Sum of question values for every correct answer given by exactly this
/// player. Bonuses are team-level and do not count here.
pub fn score_for_player(game: &Game, player: PlayerKey) -> u32 {
    answers_for_player(game, player)
        .into_iter()
        .filter(|(_, answer)| answer.is_correct == Some(true))
        .filter_map(|(key, _)| question_by_key(game, &key))
        .filter_map(|question| question.value)
        .sum()
}
