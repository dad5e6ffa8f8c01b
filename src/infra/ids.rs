use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Id пользователя, которого выдаёт внешний провайдер авторизации.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        UserId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Id документа в истории игр.
pub type DocumentId = String;

/// Длина автоматического id документа.
pub const DOCUMENT_ID_LEN: usize = 20;

/// Генератор случайных id документов (20 символов a-zA-Z0-9).
///
/// `from_seed` даёт воспроизводимую последовательность для тестов.
#[derive(Clone, Debug)]
pub struct DocumentIdGenerator {
    inner: StdRng,
}

impl DocumentIdGenerator {
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    pub fn next_id(&mut self) -> DocumentId {
        (&mut self.inner)
            .sample_iter(&Alphanumeric)
            .take(DOCUMENT_ID_LEN)
            .map(char::from)
            .collect()
    }
}

impl Default for DocumentIdGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}
