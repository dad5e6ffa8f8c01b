use tsjel_engine::domain::{get_game_config, GameResult, Player, Points, Team};
use tsjel_engine::engine::PersistedScores;
use tsjel_engine::infra::{
    format_timestamp, storage_key, Clock, DocumentId, DocumentIdGenerator, HistoryError,
    HistoryRecorder, HistoryStore, InMemoryHistoryStore, InMemoryKeyValueStore,
    InterstitialCadence, JsonFileHistoryStore, JsonFileStore, KeyValueStore, ManualClock,
    ScoreStorage, StorageError, StoredGame, UserId, DOCUMENT_ID_LEN,
};

/// Утилита: итог командной игры.
fn team_result(winner: &str, timestamp: i64) -> GameResult {
    GameResult {
        game_type: "kout".to_string(),
        team1: Some(Team::with_score(winner, Points(41))),
        team2: Some(Team::with_score("Others", Points(12))),
        players: None,
        winner: winner.to_string(),
        rounds: Some(4),
        timestamp,
    }
}

/// Хранилище, которое всегда недоступно.
struct OfflineStore;

impl KeyValueStore for OfflineStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("offline".to_string()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("offline".to_string()))
    }

    fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("offline".to_string()))
    }
}

/// История, которая всегда недоступна.
struct OfflineHistory;

impl HistoryStore for OfflineHistory {
    fn add_document(&mut self, _user: &UserId, _result: &GameResult) -> Result<DocumentId, HistoryError> {
        Err(HistoryError::Unavailable("offline".to_string()))
    }

    fn query_recent(&self, _user: &UserId, _limit: usize) -> Result<Vec<StoredGame>, HistoryError> {
        Err(HistoryError::Unavailable("offline".to_string()))
    }
}

// ----------------------
// хранение счёта
// ----------------------

#[test]
fn storage_key_scheme() {
    assert_eq!(storage_key("kout", "team1_score"), "scoreboard:kout:team1_score");
    assert_eq!(storage_key("hand", "player3_name"), "scoreboard:hand:player3_name");
}

#[test]
fn team_scores_round_trip_through_keys() {
    let config = get_game_config("baloot").unwrap();
    let mut storage = ScoreStorage::new(InMemoryKeyValueStore::new());

    let scores = PersistedScores::Teams {
        team1: Team::with_score("Us", Points(120)),
        team2: Team::with_score("Them", Points(80)),
    };
    storage.save("baloot", &scores);

    assert_eq!(
        storage.store().get("scoreboard:baloot:team1_score").unwrap(),
        Some("120".to_string())
    );
    assert_eq!(
        storage.store().get("scoreboard:baloot:team2_name").unwrap(),
        Some("Them".to_string())
    );
    assert_eq!(storage.load(config), scores);
}

#[test]
fn player_scores_round_trip_through_keys() {
    let config = get_game_config("hand").unwrap();
    let mut storage = ScoreStorage::new(InMemoryKeyValueStore::new());

    let players = vec![
        Player::with_score("Ali", Points(-60)),
        Player::with_score("Badr", Points(200)),
        Player::with_score("Fahad", Points(200)),
        Player::with_score("Saad", Points(200)),
    ];
    let scores = PersistedScores::Players { players };
    storage.save("hand", &scores);

    assert_eq!(storage.store().len(), 8);
    assert_eq!(
        storage.store().get("scoreboard:hand:player1_score").unwrap(),
        Some("-60".to_string())
    );
    assert_eq!(storage.load(config), scores);
}

#[test]
fn missing_values_load_as_defaults() {
    let config = get_game_config("kout").unwrap();
    let storage = ScoreStorage::new(InMemoryKeyValueStore::new());

    assert_eq!(storage.load(config), PersistedScores::defaults_for(config));
}

#[test]
fn corrupt_values_fall_back_to_defaults() {
    let config = get_game_config("kout").unwrap();
    let mut store = InMemoryKeyValueStore::new();
    store.set("scoreboard:kout:team1_score", "abc").unwrap();
    store.set("scoreboard:kout:team1_name", "   ").unwrap();
    store.set("scoreboard:kout:team2_score", "27").unwrap();

    let storage = ScoreStorage::new(store);

    match storage.load(config) {
        PersistedScores::Teams { team1, team2 } => {
            assert_eq!(team1, Team::with_score("Team 1", Points::ZERO));
            assert_eq!(team2, Team::with_score("Team 2", Points(27)));
        }
        other => panic!("Expected teams, got {other:?}"),
    }
}

#[test]
fn games_do_not_share_keys() {
    let kout = get_game_config("kout").unwrap();
    let baloot = get_game_config("baloot").unwrap();
    let mut storage = ScoreStorage::new(InMemoryKeyValueStore::new());

    storage.save(
        "kout",
        &PersistedScores::Teams {
            team1: Team::with_score("Team 1", Points(36)),
            team2: Team::with_score("Team 2", Points(18)),
        },
    );

    assert_eq!(storage.load(baloot), PersistedScores::defaults_for(baloot));
    assert_ne!(storage.load(kout), PersistedScores::defaults_for(kout));
}

#[test]
fn json_file_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("scores.json");

    {
        let mut store = JsonFileStore::open(&path).unwrap();
        store.set("scoreboard:kout:team1_score", "36").unwrap();
        store.set("scoreboard:kout:team2_score", "18").unwrap();
        store.remove("scoreboard:kout:team2_score").unwrap();
    }

    let store = JsonFileStore::open(&path).unwrap();
    assert_eq!(store.path(), path.as_path());
    assert_eq!(
        store.get("scoreboard:kout:team1_score").unwrap(),
        Some("36".to_string())
    );
    assert_eq!(store.get("scoreboard:kout:team2_score").unwrap(), None);
}

#[test]
fn corrupt_json_file_opens_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.json");
    std::fs::write(&path, "{ not json").unwrap();

    let store = JsonFileStore::open(&path).unwrap();
    assert_eq!(store.get("anything").unwrap(), None);
}

#[test]
fn unavailable_store_loads_defaults_and_save_is_silent() {
    let mut storage = ScoreStorage::new(OfflineStore);

    for id in ["kout", "baloot", "hand"] {
        let config = get_game_config(id).unwrap();
        assert_eq!(storage.load(config), PersistedScores::defaults_for(config));
    }

    storage.save(
        "kout",
        &PersistedScores::Teams {
            team1: Team::with_score("Us", Points(36)),
            team2: Team::with_score("Them", Points(0)),
        },
    );
    storage.save("hand", &PersistedScores::defaults_for(get_game_config("hand").unwrap()));
}

#[test]
fn failed_flush_keeps_memory_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.json");

    let mut store = JsonFileStore::open(&path).unwrap();
    store.set("scoreboard:kout:team1_score", "5").unwrap();

    // файл подменён каталогом – запись падает
    std::fs::remove_file(&path).unwrap();
    std::fs::create_dir(&path).unwrap();

    assert!(store.set("scoreboard:kout:team1_score", "36").is_err());
    assert!(store.set("scoreboard:kout:team2_score", "18").is_err());
    assert!(store.remove("scoreboard:kout:team1_score").is_err());

    assert_eq!(
        store.get("scoreboard:kout:team1_score").unwrap(),
        Some("5".to_string())
    );
    assert_eq!(store.get("scoreboard:kout:team2_score").unwrap(), None);
}

// ----------------------
// история
// ----------------------

#[test]
fn guest_append_is_a_no_op() {
    let mut recorder = HistoryRecorder::new(InMemoryHistoryStore::with_seed(1));

    assert_eq!(recorder.append(&team_result("Team 1", 10)), None);
    assert!(recorder.list(50).is_empty());

    let guest_view = recorder
        .store()
        .query_recent(&UserId::new("anyone"), 50)
        .unwrap();
    assert!(guest_view.is_empty());
}

#[test]
fn history_is_newest_first_and_capped() {
    let mut recorder = HistoryRecorder::new(InMemoryHistoryStore::with_seed(7));
    recorder.sign_in(UserId::new("user-1"));

    for ts in [100, 300, 200, 400] {
        let id = recorder.append(&team_result("Team 1", ts)).unwrap();
        assert_eq!(id.len(), DOCUMENT_ID_LEN);
    }

    let games = recorder.list(3);
    let stamps: Vec<i64> = games.iter().map(|g| g.result.timestamp).collect();
    assert_eq!(stamps, vec![400, 300, 200]);
}

#[test]
fn history_is_per_user() {
    let mut recorder = HistoryRecorder::new(InMemoryHistoryStore::with_seed(3));

    recorder.sign_in(UserId::new("a"));
    recorder.append(&team_result("A wins", 1)).unwrap();

    recorder.sign_in(UserId::new("b"));
    assert!(recorder.list(10).is_empty());

    recorder.sign_out();
    assert!(recorder.current_user().is_none());
    assert!(recorder.list(10).is_empty());
}

#[test]
fn json_file_history_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    let user = UserId::new("user-1");

    let id = {
        let mut store = JsonFileHistoryStore::open(&path).unwrap();
        store.add_document(&user, &team_result("Team 1", 5)).unwrap()
    };

    let store = JsonFileHistoryStore::open(&path).unwrap();
    let games = store.query_recent(&user, 10).unwrap();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].id, id);
    assert_eq!(games[0].result.winner, "Team 1");
}

#[test]
fn corrupt_history_file_opens_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    std::fs::write(&path, "{ not json").unwrap();
    let user = UserId::new("user-1");

    let mut store = JsonFileHistoryStore::open(&path).unwrap();
    assert!(store.query_recent(&user, 10).unwrap().is_empty());

    // первая запись переписывает битый файл
    store.add_document(&user, &team_result("Team 1", 5)).unwrap();
    let reopened = JsonFileHistoryStore::open(&path).unwrap();
    assert_eq!(reopened.query_recent(&user, 10).unwrap().len(), 1);
}

#[test]
fn unavailable_history_is_swallowed() {
    let mut recorder = HistoryRecorder::new(OfflineHistory);
    recorder.sign_in(UserId::new("user-1"));

    assert_eq!(recorder.append(&team_result("Team 1", 10)), None);
    assert!(recorder.list(50).is_empty());
}

#[test]
fn failed_history_flush_is_not_listed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    let user = UserId::new("user-1");

    let mut recorder = HistoryRecorder::new(JsonFileHistoryStore::open(&path).unwrap());
    recorder.sign_in(user.clone());
    assert!(recorder.append(&team_result("Team 1", 1)).is_some());

    std::fs::remove_file(&path).unwrap();
    std::fs::create_dir(&path).unwrap();

    assert_eq!(recorder.append(&team_result("Team 2", 2)), None);

    let games = recorder.list(10);
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].result.winner, "Team 1");
}

#[test]
fn document_ids_are_alphanumeric_and_seeded() {
    let mut a = DocumentIdGenerator::from_seed(42);
    let mut b = DocumentIdGenerator::from_seed(42);

    let id = a.next_id();
    assert_eq!(id.len(), DOCUMENT_ID_LEN);
    assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(id, b.next_id());
    assert_ne!(a.next_id(), id);
}

// ----------------------
// реклама и часы
// ----------------------

#[test]
fn interstitial_every_third_game() {
    let mut cadence = InterstitialCadence::default();
    let offers: Vec<bool> = (0..7).map(|_| cadence.record_completed_game()).collect();
    assert_eq!(offers, vec![false, false, true, false, false, true, false]);
    assert_eq!(cadence.completed_games(), 7);
}

#[test]
fn interstitial_disabled_with_zero() {
    let mut cadence = InterstitialCadence::new(0);
    assert!((0..5).all(|_| !cadence.record_completed_game()));
}

#[test]
fn manual_clock_advances_by_step() {
    let clock = ManualClock::new(1_000, 10);
    assert_eq!(clock.now_millis(), 1_000);
    assert_eq!(clock.now_millis(), 1_010);
}

#[test]
fn timestamps_format_as_rfc3339() {
    assert_eq!(format_timestamp(0), "1970-01-01T00:00:00Z");
    assert_eq!(format_timestamp(1_700_000_000_000), "2023-11-14T22:13:20Z");
}
