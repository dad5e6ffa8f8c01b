use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::GameResult;
use crate::infra::ids::{DocumentId, DocumentIdGenerator, UserId};

/// Сколько последних игр отдаёт история по умолчанию.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Ошибки удалённого хранилища истории.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("Ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),

    #[error("Ошибка сериализации: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Хранилище истории недоступно: {0}")]
    Unavailable(String),
}

/// Документ истории: итог игры и его id.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredGame {
    pub id: DocumentId,
    #[serde(flatten)]
    pub result: GameResult,
}

/// Хранилище документов истории: у каждого пользователя своя коллекция,
/// документы только добавляются.
pub trait HistoryStore {
    fn add_document(&mut self, user: &UserId, result: &GameResult) -> Result<DocumentId, HistoryError>;

    /// Последние `limit` документов, новые первыми.
    fn query_recent(&self, user: &UserId, limit: usize) -> Result<Vec<StoredGame>, HistoryError>;
}

/// Новые первыми; при равном времени – позже добавленный первым.
fn newest_first(games: &[StoredGame], limit: usize) -> Vec<StoredGame> {
    let mut out: Vec<StoredGame> = games.iter().rev().cloned().collect();
    out.sort_by(|a, b| b.result.timestamp.cmp(&a.result.timestamp));
    out.truncate(limit);
    out
}

/// In-memory коллекции по пользователям.
#[derive(Debug, Default)]
pub struct InMemoryHistoryStore {
    collections: BTreeMap<UserId, Vec<StoredGame>>,
    ids: DocumentIdGenerator,
}

impl InMemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Детерминированные id документов.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            collections: BTreeMap::new(),
            ids: DocumentIdGenerator::from_seed(seed),
        }
    }
}

impl HistoryStore for InMemoryHistoryStore {
    fn add_document(&mut self, user: &UserId, result: &GameResult) -> Result<DocumentId, HistoryError> {
        let id = self.ids.next_id();
        self.collections.entry(user.clone()).or_default().push(StoredGame {
            id: id.clone(),
            result: result.clone(),
        });
        Ok(id)
    }

    fn query_recent(&self, user: &UserId, limit: usize) -> Result<Vec<StoredGame>, HistoryError> {
        Ok(self
            .collections
            .get(user)
            .map(|games| newest_first(games, limit))
            .unwrap_or_default())
    }
}

/// История в одном JSON-файле (для CLI).
#[derive(Debug)]
pub struct JsonFileHistoryStore {
    path: PathBuf,
    collections: BTreeMap<UserId, Vec<StoredGame>>,
    ids: DocumentIdGenerator,
}

impl JsonFileHistoryStore {
    /// Открыть файл. Битый файл не мешает игре: история начинается заново.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, HistoryError> {
        let path = path.as_ref().to_path_buf();

        let collections = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(collections) => collections,
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "corrupt history file, starting empty");
                    BTreeMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };

        Ok(Self {
            path,
            collections,
            ids: DocumentIdGenerator::from_entropy(),
        })
    }

    fn flush(&self, collections: &BTreeMap<UserId, Vec<StoredGame>>) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(collections)?)?;
        Ok(())
    }
}

impl HistoryStore for JsonFileHistoryStore {
    fn add_document(&mut self, user: &UserId, result: &GameResult) -> Result<DocumentId, HistoryError> {
        let id = self.ids.next_id();

        // в память – только после успешной записи файла
        let mut next = self.collections.clone();
        next.entry(user.clone()).or_default().push(StoredGame {
            id: id.clone(),
            result: result.clone(),
        });
        self.flush(&next)?;

        self.collections = next;
        Ok(id)
    }

    fn query_recent(&self, user: &UserId, limit: usize) -> Result<Vec<StoredGame>, HistoryError> {
        Ok(self
            .collections
            .get(user)
            .map(|games| newest_first(games, limit))
            .unwrap_or_default())
    }
}

/// Запись истории от имени текущего пользователя.
///
/// Гость (нет пользователя) играет без истории: запись пропускается.
/// Ошибки хранилища логируются и не мешают игре.
#[derive(Debug)]
pub struct HistoryRecorder<H> {
    store: H,
    user: Option<UserId>,
}

impl<H: HistoryStore> HistoryRecorder<H> {
    pub fn new(store: H) -> Self {
        Self { store, user: None }
    }

    pub fn sign_in(&mut self, user: UserId) {
        info!(user = %user, "signed in");
        self.user = Some(user);
    }

    pub fn sign_out(&mut self) {
        if let Some(user) = self.user.take() {
            info!(user = %user, "signed out");
        }
    }

    pub fn current_user(&self) -> Option<&UserId> {
        self.user.as_ref()
    }

    pub fn store(&self) -> &H {
        &self.store
    }

    /// Добавить итог игры. Возвращает id документа, если запись состоялась.
    pub fn append(&mut self, result: &GameResult) -> Option<DocumentId> {
        let Some(user) = self.user.as_ref() else {
            debug!(game_type = %result.game_type, "guest play, history write skipped");
            return None;
        };

        match self.store.add_document(user, result) {
            Ok(id) => {
                info!(user = %user, game_type = %result.game_type, id = %id, "game saved to history");
                Some(id)
            }
            Err(err) => {
                warn!(user = %user, error = %err, "failed to save game to history");
                None
            }
        }
    }

    /// Последние игры текущего пользователя, новые первыми.
    pub fn list(&self, limit: usize) -> Vec<StoredGame> {
        let Some(user) = self.user.as_ref() else {
            return Vec::new();
        };

        match self.store.query_recent(user, limit) {
            Ok(games) => games,
            Err(err) => {
                warn!(user = %user, error = %err, "failed to load game history");
                Vec::new()
            }
        }
    }
}
