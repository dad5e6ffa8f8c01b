use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::{
    GameConfig, Player, Points, ScoringMode, Team, TeamSlot, DEFAULT_PLAYER_NAMES,
    DEFAULT_TEAM_NAMES, HAND_PLAYER_COUNT,
};
use crate::engine::PersistedScores;

/// Ошибки локального key-value хранилища.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),

    #[error("Ошибка сериализации: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Хранилище недоступно: {0}")]
    Unavailable(String),
}

/// Абстракция локального хранилища строк по строковым ключам.
///
/// На телефоне это AsyncStorage, здесь:
/// - in-memory для тестов,
/// - JSON-файл для CLI.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Простая in-memory реализация для тестов и локального запуска.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    entries: HashMap<String, String>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Хранилище в одном JSON-файле (объект `ключ -> строка`).
///
/// Файл переписывается целиком при каждой записи; память меняется
/// только если запись удалась.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Открыть файл. Отсутствующий файл – пустое хранилище,
    /// битый файл – тоже пустое хранилище (с предупреждением в лог).
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();

        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "corrupt store file, starting empty");
                    BTreeMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };

        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut next = self.entries.clone();
        next.insert(key.to_string(), value.to_string());
        self.flush(&next)?;
        self.entries = next;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if !self.entries.contains_key(key) {
            return Ok(());
        }
        let mut next = self.entries.clone();
        next.remove(key);
        self.flush(&next)?;
        self.entries = next;
        Ok(())
    }
}

/// Ключ поля: `scoreboard:<gameId>:<field>`.
pub fn storage_key(game_id: &str, field: &str) -> String {
    format!("scoreboard:{game_id}:{field}")
}

/// Адаптер сохранения счёта поверх key-value хранилища.
///
/// Одно поле – один ключ. Ошибки хранилища только логируются:
/// движок всегда получает счёт (в худшем случае – по умолчанию).
#[derive(Debug)]
pub struct ScoreStorage<S> {
    store: S,
}

impl<S: KeyValueStore> ScoreStorage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Загрузить счёт игры в форме, соответствующей её режиму.
    pub fn load(&self, config: &GameConfig) -> PersistedScores {
        let game_id = config.id;
        match config.mode {
            ScoringMode::Hand { .. } => {
                let players = (0..HAND_PLAYER_COUNT)
                    .map(|i| {
                        let n = i + 1;
                        Player::with_score(
                            self.read_name(game_id, &format!("player{n}_name"), DEFAULT_PLAYER_NAMES[i]),
                            self.read_score(game_id, &format!("player{n}_score")),
                        )
                    })
                    .collect();
                PersistedScores::Players { players }
            }
            _ => {
                let [team1, team2] = TeamSlot::BOTH.map(|slot| {
                    let n = slot.number();
                    Team::with_score(
                        self.read_name(game_id, &format!("team{n}_name"), DEFAULT_TEAM_NAMES[slot.index()]),
                        self.read_score(game_id, &format!("team{n}_score")),
                    )
                });
                PersistedScores::Teams { team1, team2 }
            }
        }
    }

    /// Сохранить счёт игры.
    pub fn save(&mut self, game_id: &str, scores: &PersistedScores) {
        match scores {
            PersistedScores::Teams { team1, team2 } => {
                for (n, team) in [(1, team1), (2, team2)] {
                    self.write(game_id, &format!("team{n}_name"), &team.name);
                    self.write(game_id, &format!("team{n}_score"), &team.score.to_string());
                }
            }
            PersistedScores::Players { players } => {
                for (i, player) in players.iter().enumerate() {
                    let n = i + 1;
                    self.write(game_id, &format!("player{n}_name"), &player.name);
                    self.write(game_id, &format!("player{n}_score"), &player.score.to_string());
                }
            }
        }
        debug!(game_id, "scores saved");
    }

    fn read_name(&self, game_id: &str, field: &str, default: &str) -> String {
        match self.store.get(&storage_key(game_id, field)) {
            Ok(Some(name)) if !name.trim().is_empty() => name,
            Ok(_) => default.to_string(),
            Err(err) => {
                warn!(game_id, field, error = %err, "failed to load name, using default");
                default.to_string()
            }
        }
    }

    fn read_score(&self, game_id: &str, field: &str) -> Points {
        match self.store.get(&storage_key(game_id, field)) {
            Ok(Some(raw)) => match raw.trim().parse::<i64>() {
                Ok(value) => Points(value),
                Err(_) => {
                    warn!(game_id, field, value = %raw, "corrupt score, using 0");
                    Points::ZERO
                }
            },
            Ok(None) => Points::ZERO,
            Err(err) => {
                warn!(game_id, field, error = %err, "failed to load score, using 0");
                Points::ZERO
            }
        }
    }

    fn write(&mut self, game_id: &str, field: &str, value: &str) {
        if let Err(err) = self.store.set(&storage_key(game_id, field), value) {
            warn!(game_id, field, error = %err, "failed to save score field");
        }
    }
}
