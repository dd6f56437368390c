//! Key addressing: small ordered index tuples naming one entity inside a
//! [`Game`](crate::domain::model::Game).
//!
//! Every key family is a struct with named index fields. The "a longer key
//! of the same family stands in for a shorter one" contract is expressed
//! through the prefix traits ([`HasTeam`], [`HasCategory`], [`HasQuestion`],
//! [`HasPlayer`]) rather than structural overlap, so a `QuestionKey` is
//! accepted anywhere a category prefix is needed and the compiler rejects
//! keys from the wrong family.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Longest key family is three levels deep (category → question → answer).
const MAX_KEY_DEPTH: usize = 3;

/// Names a team: `teams[team]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamKey {
    pub team: usize,
}

/// Names a player within a team: `teams[team].players[player]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerKey {
    pub team: usize,
    pub player: usize,
}

/// Names a category: `categories[category]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryKey {
    pub category: usize,
}

/// Names a question slot within a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestionKey {
    pub category: usize,
    pub question: usize,
}

/// Names a recorded answer within a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnswerKey {
    pub category: usize,
    pub question: usize,
    pub answer: usize,
}

/// Names a recorded bonus within a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BonusKey {
    pub category: usize,
    pub bonus: usize,
}

impl TeamKey {
    pub const fn new(team: usize) -> Self {
        Self { team }
    }
}

impl PlayerKey {
    pub const fn new(team: usize, player: usize) -> Self {
        Self { team, player }
    }
}

impl CategoryKey {
    pub const fn new(category: usize) -> Self {
        Self { category }
    }
}

impl QuestionKey {
    pub const fn new(category: usize, question: usize) -> Self {
        Self { category, question }
    }
}

impl AnswerKey {
    pub const fn new(category: usize, question: usize, answer: usize) -> Self {
        Self {
            category,
            question,
            answer,
        }
    }
}

impl BonusKey {
    pub const fn new(category: usize, bonus: usize) -> Self {
        Self { category, bonus }
    }
}

/// Any key whose leading index names a team.
pub trait HasTeam {
    fn team_index(&self) -> usize;
}

/// Any key that names a player exactly.
pub trait HasPlayer: HasTeam {
    fn player_index(&self) -> usize;
}

/// Any key whose leading index names a category.
pub trait HasCategory {
    fn category_index(&self) -> usize;
}

/// Any key whose first two indices name a question.
pub trait HasQuestion: HasCategory {
    fn question_index(&self) -> usize;
}

impl HasTeam for TeamKey {
    fn team_index(&self) -> usize {
        self.team
    }
}

impl HasTeam for PlayerKey {
    fn team_index(&self) -> usize {
        self.team
    }
}

impl HasPlayer for PlayerKey {
    fn player_index(&self) -> usize {
        self.player
    }
}

impl HasCategory for CategoryKey {
    fn category_index(&self) -> usize {
        self.category
    }
}

impl HasCategory for QuestionKey {
    fn category_index(&self) -> usize {
        self.category
    }
}

impl HasCategory for AnswerKey {
    fn category_index(&self) -> usize {
        self.category
    }
}

impl HasCategory for BonusKey {
    fn category_index(&self) -> usize {
        self.category
    }
}

impl HasQuestion for QuestionKey {
    fn question_index(&self) -> usize {
        self.question
    }
}

impl HasQuestion for AnswerKey {
    fn question_index(&self) -> usize {
        self.question
    }
}

/// Flat index form of a key, used for relaxed cross-family comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyIndices {
    len: usize,
    idx: [usize; MAX_KEY_DEPTH],
}

impl KeyIndices {
    const fn one(a: usize) -> Self {
        Self {
            len: 1,
            idx: [a, 0, 0],
        }
    }

    const fn two(a: usize, b: usize) -> Self {
        Self {
            len: 2,
            idx: [a, b, 0],
        }
    }

    const fn three(a: usize, b: usize, c: usize) -> Self {
        Self {
            len: 3,
            idx: [a, b, c],
        }
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.idx[..self.len]
    }
}

/// A key addressable as an ordered tuple of indices from the `Game` root.
pub trait Key {
    fn indices(&self) -> KeyIndices;
}

impl Key for TeamKey {
    fn indices(&self) -> KeyIndices {
        KeyIndices::one(self.team)
    }
}

impl Key for PlayerKey {
    fn indices(&self) -> KeyIndices {
        KeyIndices::two(self.team, self.player)
    }
}

impl Key for CategoryKey {
    fn indices(&self) -> KeyIndices {
        KeyIndices::one(self.category)
    }
}

impl Key for QuestionKey {
    fn indices(&self) -> KeyIndices {
        KeyIndices::two(self.category, self.question)
    }
}

impl Key for AnswerKey {
    fn indices(&self) -> KeyIndices {
        KeyIndices::three(self.category, self.question, self.answer)
    }
}

impl Key for BonusKey {
    fn indices(&self) -> KeyIndices {
        KeyIndices::two(self.category, self.bonus)
    }
}

/// Relaxed key equality: compares element-wise over the shorter key's
/// length only. Lets a player key be tested against a team key for
/// "same team" while ignoring the player index. A missing key never
/// equals anything.
pub fn keys_equal<A: Key, B: Key>(a: Option<&A>, b: Option<&B>) -> bool {
    let (Some(a), Some(b)) = (a, b) else {
        return false;
    };
    let a = a.indices();
    let b = b.indices();
    let shared = a.as_slice().len().min(b.as_slice().len());
    a.as_slice()[..shared] == b.as_slice()[..shared]
}

/// One step of a traversal path from the `Game` root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Field(&'static str),
    Index(usize),
}

/// Alternating field/index steps locating an entity inside a `Game`.
///
/// Renders as `categories[1].questions[2]`; used in error details and
/// anywhere a key must be spelled out for a human.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyPath {
    steps: Vec<Step>,
}

impl KeyPath {
    fn from_pairs(pairs: &[(&'static str, usize)]) -> Self {
        let mut steps = Vec::with_capacity(pairs.len() * 2);
        for &(field, index) in pairs {
            steps.push(Step::Field(field));
            steps.push(Step::Index(index));
        }
        Self { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

impl Display for KeyPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for step in &self.steps {
            match step {
                Step::Field(name) => {
                    if !first {
                        write!(f, ".")?;
                    }
                    write!(f, "{name}")?;
                }
                Step::Index(index) => write!(f, "[{index}]")?,
            }
            first = false;
        }
        Ok(())
    }
}

/// Path to the category prefix of any category-family key.
pub fn category_path(key: &impl HasCategory) -> KeyPath {
    KeyPath::from_pairs(&[("categories", key.category_index())])
}

/// Path to the question prefix of any question-family key.
pub fn question_path(key: &impl HasQuestion) -> KeyPath {
    KeyPath::from_pairs(&[
        ("categories", key.category_index()),
        ("questions", key.question_index()),
    ])
}

pub fn answer_path(key: &AnswerKey) -> KeyPath {
    KeyPath::from_pairs(&[
        ("categories", key.category),
        ("questions", key.question),
        ("answers", key.answer),
    ])
}

pub fn bonus_path(key: &BonusKey) -> KeyPath {
    KeyPath::from_pairs(&[("categories", key.category), ("bonuses", key.bonus)])
}

/// Path to the team prefix of any team-family key.
pub fn team_path(key: &impl HasTeam) -> KeyPath {
    KeyPath::from_pairs(&[("teams", key.team_index())])
}

pub fn player_path(key: &PlayerKey) -> KeyPath {
    KeyPath::from_pairs(&[("teams", key.team), ("players", key.player)])
}
