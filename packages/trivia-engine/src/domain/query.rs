//! Read-only traversal and lookup over a [`Game`].
//!
//! Enumerators return keyed collections: `(key, entity)` pairs in traversal
//! order. Lookups return `None` for any out-of-range index; a scoped
//! enumerator given a missing parent key yields an empty collection.

use crate::domain::keys::{
    keys_equal, AnswerKey, BonusKey, CategoryKey, HasCategory, HasQuestion, HasTeam, PlayerKey,
    QuestionKey, TeamKey,
};
use crate::domain::model::{Answer, Bonus, Category, Game, Player, Question, Team};

pub fn keyed_teams(game: &Game) -> Vec<(TeamKey, &Team)> {
    game.teams
        .iter()
        .enumerate()
        .map(|(t, team)| (TeamKey::new(t), &**team))
        .collect()
}

/// All players keyed `[team, player]`, team-major; restricted to one team
/// when `team` is given.
pub fn keyed_players(game: &Game, team: Option<TeamKey>) -> Vec<(PlayerKey, &Player)> {
    let teams = match team {
        Some(key) => team_by_key(game, &key)
            .map(|t| (key, t))
            .into_iter()
            .collect(),
        None => keyed_teams(game),
    };
    teams
        .into_iter()
        .flat_map(|(tkey, team)| {
            team.players
                .iter()
                .enumerate()
                .map(move |(p, player)| (PlayerKey::new(tkey.team, p), player))
        })
        .collect()
}

pub fn keyed_categories(game: &Game) -> Vec<(CategoryKey, &Category)> {
    game.categories
        .iter()
        .enumerate()
        .map(|(c, category)| (CategoryKey::new(c), &**category))
        .collect()
}

/// All questions keyed `[category, question]`, category-major; restricted
/// to one category when `category` is given.
pub fn keyed_questions(
    game: &Game,
    category: Option<CategoryKey>,
) -> Vec<(QuestionKey, &Question)> {
    let categories = match category {
        Some(key) => category_by_key(game, &key)
            .map(|c| (key, c))
            .into_iter()
            .collect(),
        None => keyed_categories(game),
    };
    categories
        .into_iter()
        .flat_map(|(ckey, category)| {
            category
                .questions
                .iter()
                .enumerate()
                .map(move |(q, question)| (QuestionKey::new(ckey.category, q), question))
        })
        .collect()
}

/// Questions already selected during play, ascending by turn number.
/// Unselected questions (null number) are excluded.
pub fn sorted_questions(game: &Game) -> Vec<(QuestionKey, &Question)> {
    let mut questions: Vec<(QuestionKey, &Question)> = keyed_questions(game, None)
        .into_iter()
        .filter(|(_, q)| q.number.is_some())
        .collect();
    questions.sort_by_key(|(_, q)| q.number);
    questions
}

pub fn keyed_answers(game: &Game) -> Vec<(AnswerKey, &Answer)> {
    keyed_questions(game, None)
        .into_iter()
        .flat_map(|(qkey, question)| {
            question
                .answers
                .iter()
                .enumerate()
                .map(move |(a, answer)| (AnswerKey::new(qkey.category, qkey.question, a), answer))
        })
        .collect()
}

pub fn keyed_bonuses(game: &Game) -> Vec<(BonusKey, &Bonus)> {
    keyed_categories(game)
        .into_iter()
        .flat_map(|(ckey, category)| {
            category
                .bonuses
                .iter()
                .enumerate()
                .map(move |(b, bonus)| (BonusKey::new(ckey.category, b), bonus))
        })
        .collect()
}

pub fn category_by_key<'a>(game: &'a Game, key: &impl HasCategory) -> Option<&'a Category> {
    game.categories.get(key.category_index()).map(|c| &**c)
}

pub fn question_by_key<'a>(game: &'a Game, key: &impl HasQuestion) -> Option<&'a Question> {
    category_by_key(game, key)?.questions.get(key.question_index())
}

pub fn answer_by_key(game: &Game, key: AnswerKey) -> Option<&Answer> {
    question_by_key(game, &key)?.answers.get(key.answer)
}

pub fn bonus_by_key(game: &Game, key: BonusKey) -> Option<&Bonus> {
    category_by_key(game, &key)?.bonuses.get(key.bonus)
}

pub fn team_by_key<'a>(game: &'a Game, key: &impl HasTeam) -> Option<&'a Team> {
    game.teams.get(key.team_index()).map(|t| &**t)
}

pub fn player_by_key(game: &Game, key: PlayerKey) -> Option<&Player> {
    team_by_key(game, &key)?.players.get(key.player)
}

/// Bonuses recorded for the given team, across all categories.
pub fn bonuses_for_team(game: &Game, team: TeamKey) -> Vec<(BonusKey, &Bonus)> {
    keyed_bonuses(game)
        .into_iter()
        .filter(|(_, bonus)| keys_equal(bonus.team.as_ref(), Some(&team)))
        .collect()
}

/// Answers given by any player of the given team (team-prefix match on the
/// answer's player key).
pub fn answers_for_team(game: &Game, team: TeamKey) -> Vec<(AnswerKey, &Answer)> {
    keyed_answers(game)
        .into_iter()
        .filter(|(_, answer)| keys_equal(answer.player.as_ref(), Some(&team)))
        .collect()
}

/// Answers given by exactly the given player.
pub fn answers_for_player(game: &Game, player: PlayerKey) -> Vec<(AnswerKey, &Answer)> {
    keyed_answers(game)
        .into_iter()
        .filter(|(_, answer)| keys_equal(answer.player.as_ref(), Some(&player)))
        .collect()
}
