// tests/engine_hand_tests.rs
//
// Хэнд: четыре игрока, восемь раундов, нзуль, таблица мест.

use tsjel_engine::domain::{get_game_config, HandType, Player, Points};
use tsjel_engine::engine::validation::{nzol_payout, parse_nzol};
use tsjel_engine::engine::{EngineError, HandEngine, HandSelection, PersistedScores, Scoreboard};

// -----------------------------
// ВСПОМОГАТЕЛЬНЫЕ КОНСТРУКТОРЫ
// -----------------------------

fn make_engine() -> HandEngine {
    HandEngine::new(8, Player::default_table())
}

fn scores(engine: &HandEngine) -> Vec<i64> {
    engine.players.iter().map(|p| p.score.value()).collect()
}

fn play_rounds(engine: &mut HandEngine, n: usize) {
    for i in 0..n {
        let mut selection = HandSelection::new(i % 4, HandType::Regular);
        engine.record_hand(&mut selection).unwrap();
    }
}

// -----------------------------
// начисление
// -----------------------------

#[test]
fn regular_round_without_nzol() {
    let mut engine = make_engine();
    let mut selection = HandSelection::new(0, HandType::Regular);

    let outcome = engine.record_hand(&mut selection).unwrap();

    assert_eq!(scores(&engine), vec![-60, 200, 200, 200]);
    assert_eq!(outcome.deltas, vec![Points(-60), Points(200), Points(200), Points(200)]);
    assert_eq!(outcome.round.round_number, 1);
    assert_eq!(outcome.round.winner_name, "Player 1");
    assert_eq!(outcome.round.scores, vec![Points(-60), Points(200), Points(200), Points(200)]);
    assert!(!outcome.game_over);
    assert_eq!(engine.current_round(), 2);
}

#[test]
fn nzol_replaces_the_fixed_penalty() {
    let mut engine = make_engine();
    let mut selection = HandSelection::new(2, HandType::Zat).with_nzol(1, "10");

    engine.record_hand(&mut selection).unwrap();

    assert_eq!(scores(&engine), vec![1600, 320, -480, 1600]);
}

#[test]
fn fractional_nzol_is_rounded() {
    let mut engine = make_engine();
    let mut selection = HandSelection::new(0, HandType::Regular)
        .with_nzol(1, "2.5")
        .with_nzol(2, "0.2");

    engine.record_hand(&mut selection).unwrap();

    assert_eq!(scores(&engine), vec![-60, 5, 0, 200]);
}

#[test]
fn winner_nzol_is_ignored() {
    let mut engine = make_engine();
    let mut selection = HandSelection::new(3, HandType::Finished).with_nzol(3, "not a number");

    engine.record_hand(&mut selection).unwrap();

    assert_eq!(scores(&engine), vec![100, 100, 100, -30]);
}

#[test]
fn non_numeric_nzol_pays_zero() {
    let mut engine = make_engine();
    let mut selection = HandSelection::new(0, HandType::Regular)
        .with_nzol(1, "abc")
        .with_nzol(2, "7x");

    engine.record_hand(&mut selection).unwrap();

    // нзуль введён, поэтому others_points не начисляются
    assert_eq!(scores(&engine), vec![-60, 0, 14, 200]);
    assert_eq!(engine.current_round(), 2);
}

#[test]
fn negative_nzol_gives_negative_payout() {
    let mut engine = make_engine();
    let mut selection = HandSelection::new(0, HandType::Regular).with_nzol(1, "-5");

    engine.record_hand(&mut selection).unwrap();

    assert_eq!(scores(&engine), vec![-60, -10, 200, 200]);
    assert!(selection.nzol.iter().all(String::is_empty));
}

#[test]
fn nzol_parsing() {
    assert_eq!(parse_nzol(""), None);
    assert_eq!(parse_nzol("   "), None);
    assert_eq!(parse_nzol(" 4 "), Some(4.0));
    assert_eq!(parse_nzol("-5"), Some(-5.0));
    assert_eq!(parse_nzol("2.5kg"), Some(2.5));
    assert_eq!(parse_nzol(".5"), Some(0.5));
    assert_eq!(parse_nzol("1e2"), Some(100.0));
    assert_eq!(parse_nzol("3e"), Some(3.0));
    assert_eq!(parse_nzol("abc"), Some(0.0));
    assert_eq!(parse_nzol("-"), Some(0.0));
    assert_eq!(parse_nzol("inf"), Some(0.0));
    assert_eq!(parse_nzol("NaN"), Some(0.0));
    assert_eq!(parse_nzol("1e400"), Some(0.0));
    assert_eq!(nzol_payout(10.0, 32), Points(320));
    assert_eq!(nzol_payout(1.25, 2), Points(3));
    assert_eq!(nzol_payout(-5.0, 2), Points(-10));
}

// -----------------------------
// проверки выбора
// -----------------------------

#[test]
fn incomplete_selection_is_rejected() {
    let mut engine = make_engine();

    let mut no_type = HandSelection {
        winner: Some(1),
        ..HandSelection::default()
    };
    assert_eq!(
        engine.record_hand(&mut no_type).unwrap_err(),
        EngineError::HandSelectionIncomplete
    );

    let mut no_winner = HandSelection {
        hand_type: Some(HandType::Zat),
        ..HandSelection::default()
    };
    assert_eq!(
        engine.record_hand(&mut no_winner).unwrap_err(),
        EngineError::HandSelectionIncomplete
    );
}

#[test]
fn winner_out_of_range_is_rejected() {
    let mut engine = make_engine();
    let mut selection = HandSelection::new(4, HandType::Regular);
    assert_eq!(
        engine.record_hand(&mut selection).unwrap_err(),
        EngineError::InvalidPlayerIndex(4)
    );
}

#[test]
fn selection_is_cleared_after_success() {
    let mut engine = make_engine();
    let mut selection = HandSelection::new(1, HandType::JokerColored).with_nzol(0, "3");

    engine.record_hand(&mut selection).unwrap();

    assert_eq!(selection, HandSelection::default());
}

// -----------------------------
// конец игры
// -----------------------------

#[test]
fn ninth_round_is_rejected() {
    let mut engine = make_engine();
    play_rounds(&mut engine, 7);
    assert!(!engine.is_finished());

    let mut last = HandSelection::new(0, HandType::Regular);
    let outcome = engine.record_hand(&mut last).unwrap();
    assert!(outcome.game_over);
    assert_eq!(outcome.round.round_number, 8);
    assert_eq!(engine.current_round(), 9);
    assert!(engine.is_finished());

    let before = scores(&engine);
    let mut extra = HandSelection::new(1, HandType::Regular);
    assert_eq!(engine.record_hand(&mut extra).unwrap_err(), EngineError::GameOver);
    assert_eq!(scores(&engine), before);
    assert_eq!(engine.rounds().len(), 8);
}

#[test]
fn selection_check_comes_before_game_over() {
    let mut engine = make_engine();
    play_rounds(&mut engine, 8);

    let mut empty = HandSelection::default();
    assert_eq!(
        engine.record_hand(&mut empty).unwrap_err(),
        EngineError::HandSelectionIncomplete
    );
}

#[test]
fn podium_only_after_last_round() {
    let mut engine = make_engine();
    play_rounds(&mut engine, 4);
    assert!(engine.podium().is_none());

    play_rounds(&mut engine, 4);
    let podium = engine.podium().expect("finished game has a podium");
    assert_eq!(podium.len(), 3);
    assert_eq!(podium[0].place, 1);
    assert!(podium[0].score <= podium[1].score);
    assert!(podium[1].score <= podium[2].score);
}

#[test]
fn lowest_score_leads_with_seat_order_tiebreak() {
    let mut engine = make_engine();
    play_rounds(&mut engine, 8);

    // каждый закрыл по два раза – счёт равный, лидер – первый за столом
    assert!(engine.players.iter().all(|p| p.score == Points(1080)));
    assert_eq!(engine.leader(), Some(0));

    let standings = engine.standings();
    let order: Vec<usize> = standings.iter().map(|s| s.player_index).collect();
    assert_eq!(order, vec![0, 1, 2, 3]);
}

#[test]
fn reset_returns_to_round_one_and_keeps_names() {
    let players = vec![
        Player::new("Ali"),
        Player::new("Badr"),
        Player::new("Fahad"),
        Player::new("Saad"),
    ];
    let mut engine = HandEngine::new(8, players);
    play_rounds(&mut engine, 8);

    engine.reset();

    assert_eq!(engine.current_round(), 1);
    assert!(engine.rounds().is_empty());
    assert_eq!(scores(&engine), vec![0, 0, 0, 0]);
    assert_eq!(engine.players[2].name, "Fahad");
}

// -----------------------------
// табло Хэнда
// -----------------------------

#[test]
fn hand_result_needs_a_finished_game() {
    let config = get_game_config("hand").unwrap();
    let mut board = Scoreboard::new(config);
    assert_eq!(
        board.winner_name().unwrap_err(),
        EngineError::GameNotFinished
    );

    if let Scoreboard::Hand(engine) = &mut board {
        for _ in 0..8 {
            let mut selection = HandSelection::new(3, HandType::Regular);
            engine.record_hand(&mut selection).unwrap();
        }
    } else {
        panic!("Expected Hand scoreboard");
    }

    let result = board.to_game_result("hand", 7).unwrap();
    assert_eq!(result.winner, "Player 4");
    assert_eq!(result.rounds, Some(8));
    assert_eq!(result.players.as_ref().map(Vec::len), Some(4));
    assert!(result.team1.is_none());
}

#[test]
fn restore_with_wrong_shape_falls_back_to_defaults() {
    let config = get_game_config("hand").unwrap();
    let saved = PersistedScores::Players {
        players: vec![Player::new("Only one")],
    };

    let board = Scoreboard::restore(config, saved);

    match board.persisted() {
        PersistedScores::Players { players } => assert_eq!(players, Player::default_table()),
        other => panic!("Expected players, got {other:?}"),
    }
}

#[test]
fn rename_is_mode_specific() {
    let config = get_game_config("hand").unwrap();
    let mut board = Scoreboard::new(config);

    board.rename_player(1, "Badr").unwrap();
    assert_eq!(
        board.rename_player(4, "Nobody").unwrap_err(),
        EngineError::InvalidPlayerIndex(4)
    );
    assert_eq!(
        board
            .rename_team(tsjel_engine::domain::TeamSlot::First, "Team")
            .unwrap_err(),
        EngineError::UnsupportedForMode
    );
}
