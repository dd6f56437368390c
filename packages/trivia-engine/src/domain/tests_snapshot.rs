use crate::domain::keys::{CategoryKey, PlayerKey, QuestionKey, TeamKey};
use crate::domain::model::Game;
use crate::domain::mutations::{next_question, score_answer, score_bonus, select_question};
use crate::domain::rules::{CATEGORY_COUNT, QUESTIONS_PER_CATEGORY};
use crate::domain::snapshot::{snapshot, PhaseSnapshot};

/// Play one category to completion: each question selected, answered
/// correctly by the given team's first player, counter advanced.
fn play_out_category(mut game: Game, category: usize, team: usize) -> Game {
    for q in 0..QUESTIONS_PER_CATEGORY {
        let key = QuestionKey::new(category, q);
        game = select_question(&game, &key).expect("fixture key");
        game = score_answer(&game, &key, PlayerKey::new(team, 0), true).expect("fixture key");
        game = next_question(&game);
    }
    game
}

#[test]
fn fresh_game_snapshots_as_category_choice() {
    let snap = snapshot(&Game::new());
    assert_eq!(snap.game.question_number, 1);
    assert_eq!(snap.game.standings.len(), 2);
    assert!(snap.game.standings.iter().all(|s| s.score == 0));
    assert_eq!(snap.game.board.len(), CATEGORY_COUNT);
    assert!(snap.game.board.iter().all(|c| c.questions_played == 0 && !c.needs_bonus));

    match snap.phase {
        PhaseSnapshot::CategoryChoice(choice) => {
            assert_eq!(choice.open_questions.len(), 20);
        }
        other => panic!("expected CategoryChoice, got {other:?}"),
    }
}

#[test]
fn open_question_snapshots_with_its_value_and_answer_count() {
    let key = QuestionKey::new(1, 3);
    let mut game = select_question(&Game::new(), &key).unwrap();

    match snapshot(&game).phase {
        PhaseSnapshot::QuestionOpen(open) => {
            assert_eq!(open.key, key);
            assert_eq!(open.value, Some(20));
            assert_eq!(open.answers_recorded, 0);
        }
        other => panic!("expected QuestionOpen, got {other:?}"),
    }

    game = score_answer(&game, &key, PlayerKey::new(0, 2), false).unwrap();
    match snapshot(&game).phase {
        PhaseSnapshot::QuestionOpen(open) => assert_eq!(open.answers_recorded, 1),
        other => panic!("expected QuestionOpen, got {other:?}"),
    }
}

#[test]
fn completed_category_snapshots_as_bonus_round() {
    let game = play_out_category(Game::new(), 0, 0);
    let snap = snapshot(&game);

    assert!(snap.game.board[0].needs_bonus);
    assert_eq!(snap.game.board[0].questions_played, QUESTIONS_PER_CATEGORY);
    match snap.phase {
        PhaseSnapshot::BonusRound(round) => {
            assert_eq!(round.categories, [CategoryKey::new(0)]);
        }
        other => panic!("expected BonusRound, got {other:?}"),
    }
}

#[test]
fn scored_bonus_round_returns_to_category_choice() {
    let mut game = play_out_category(Game::new(), 0, 0);
    game = score_bonus(&game, &CategoryKey::new(0), TeamKey::new(0), 10).unwrap();
    game = score_bonus(&game, &CategoryKey::new(0), TeamKey::new(1), 15).unwrap();

    let snap = snapshot(&game);
    assert!(!snap.game.board[0].needs_bonus);
    match snap.phase {
        PhaseSnapshot::CategoryChoice(choice) => {
            assert_eq!(choice.open_questions.len(), 16);
        }
        other => panic!("expected CategoryChoice, got {other:?}"),
    }
}

#[test]
fn finished_game_snapshots_as_complete() {
    let mut game = Game::new();
    for c in 0..CATEGORY_COUNT {
        game = play_out_category(game, c, c % 2);
        game = score_bonus(&game, &CategoryKey::new(c), TeamKey::new(0), 10).unwrap();
        game = score_bonus(&game, &CategoryKey::new(c), TeamKey::new(1), 15).unwrap();
    }

    let snap = snapshot(&game);
    assert_eq!(snap.phase, PhaseSnapshot::Complete);
    // 10+15+15+20 per category; categories alternate between the teams.
    let scores: Vec<u32> = snap.game.standings.iter().map(|s| s.score).collect();
    assert_eq!(scores, [3 * 60 + 5 * 10, 2 * 60 + 5 * 15]);
}

#[test]
fn snapshot_serializes_with_an_adjacent_phase_tag() {
    let game = select_question(&Game::new(), &QuestionKey::new(0, 0)).unwrap();
    let json = serde_json::to_value(snapshot(&game)).unwrap();

    assert_eq!(json["phase"]["phase"], "QuestionOpen");
    assert_eq!(json["phase"]["data"]["value"], 10);
    assert_eq!(json["game"]["questionNumber"], 1);
}
