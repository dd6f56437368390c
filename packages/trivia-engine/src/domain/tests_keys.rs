use crate::domain::keys::{
    answer_path, bonus_path, category_path, keys_equal, player_path, question_path, team_path,
    AnswerKey, BonusKey, CategoryKey, PlayerKey, QuestionKey, Step, TeamKey,
};

#[test]
fn category_path_from_each_family_member() {
    assert_eq!(category_path(&CategoryKey::new(1)).to_string(), "categories[1]");
    assert_eq!(category_path(&QuestionKey::new(1, 2)).to_string(), "categories[1]");
    assert_eq!(category_path(&AnswerKey::new(1, 2, 3)).to_string(), "categories[1]");
    assert_eq!(category_path(&BonusKey::new(1, 2)).to_string(), "categories[1]");
}

#[test]
fn question_path_truncates_to_the_question_prefix() {
    assert_eq!(
        question_path(&QuestionKey::new(1, 2)).to_string(),
        "categories[1].questions[2]"
    );
    assert_eq!(
        question_path(&AnswerKey::new(1, 2, 3)).to_string(),
        "categories[1].questions[2]"
    );
}

#[test]
fn answer_path_spells_the_full_traversal() {
    assert_eq!(
        answer_path(&AnswerKey::new(1, 2, 3)).to_string(),
        "categories[1].questions[2].answers[3]"
    );
}

#[test]
fn bonus_path_spells_the_full_traversal() {
    assert_eq!(bonus_path(&BonusKey::new(1, 2)).to_string(), "categories[1].bonuses[2]");
}

#[test]
fn team_path_from_each_family_member() {
    assert_eq!(team_path(&TeamKey::new(1)).to_string(), "teams[1]");
    assert_eq!(team_path(&PlayerKey::new(1, 2)).to_string(), "teams[1]");
}

#[test]
fn player_path_spells_the_full_traversal() {
    assert_eq!(player_path(&PlayerKey::new(1, 2)).to_string(), "teams[1].players[2]");
}

#[test]
fn paths_alternate_field_and_index_steps() {
    let path = question_path(&QuestionKey::new(1, 2));
    assert_eq!(
        path.steps(),
        &[
            Step::Field("categories"),
            Step::Index(1),
            Step::Field("questions"),
            Step::Index(2),
        ]
    );
}

#[test]
fn keys_equal_compares_equal_length_keys() {
    assert!(!keys_equal(
        Some(&PlayerKey::new(1, 0)),
        Some(&PlayerKey::new(1, 1))
    ));
    assert!(keys_equal(
        Some(&PlayerKey::new(1, 1)),
        Some(&PlayerKey::new(1, 1))
    ));
}

#[test]
fn keys_equal_treats_missing_keys_as_unequal() {
    assert!(!keys_equal(None::<&PlayerKey>, Some(&PlayerKey::new(1, 1))));
    assert!(!keys_equal(Some(&PlayerKey::new(1, 1)), None::<&PlayerKey>));
    assert!(!keys_equal(None::<&PlayerKey>, None::<&TeamKey>));
}

#[test]
fn keys_equal_compares_different_length_keys_to_min_length() {
    assert!(!keys_equal(
        Some(&QuestionKey::new(1, 0)),
        Some(&AnswerKey::new(1, 1, 0))
    ));
    assert!(keys_equal(
        Some(&QuestionKey::new(1, 1)),
        Some(&AnswerKey::new(1, 1, 0))
    ));
}

#[test]
fn keys_equal_lets_a_team_key_match_any_of_its_players() {
    assert!(keys_equal(Some(&TeamKey::new(1)), Some(&PlayerKey::new(1, 3))));
    assert!(!keys_equal(Some(&TeamKey::new(0)), Some(&PlayerKey::new(1, 3))));
}
