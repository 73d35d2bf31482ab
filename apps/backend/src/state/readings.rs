//! Reading sessions keyed by reader identity.
//!
//! The default reader's session is created with the store and lives for the
//! process lifetime. Sessions for explicit reader ids are created on first
//! use and kept in a bounded cache.

use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;
use parking_lot::{Mutex, RwLock};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::domain::{Deck, ReadingSession, ReadingView, SelectOutcome};

/// Upper bound on cached non-default readers.
pub const MAX_READERS: u64 = 1_024;

/// Readers idle for longer than this lose their reading.
pub const READER_IDLE_TTL: Duration = Duration::from_secs(60 * 60);

const DEFAULT_READER_LABEL: &str = "default";
const MAX_READER_ID_LEN: usize = 64;

/// Opaque identity of whoever is reading.
///
/// The shared default reader has no name, so no header value can parse
/// into it; `x-reader-id: default` is an ordinary named reader.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ReaderId(Option<String>);

impl ReaderId {
    /// Accepts 1-64 characters of `[A-Za-z0-9_-]`.
    pub fn parse(raw: &str) -> Option<Self> {
        let valid = !raw.is_empty()
            && raw.len() <= MAX_READER_ID_LEN
            && raw
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        valid.then(|| Self(Some(raw.to_string())))
    }

    /// Name of a named reader; `None` for the default reader.
    pub fn name(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_default(&self) -> bool {
        self.0.is_none()
    }
}

impl std::fmt::Display for ReaderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name().unwrap_or(DEFAULT_READER_LABEL))
    }
}

type SharedSession = Arc<RwLock<ReadingSession>>;

pub struct ReadingStore {
    deck: Arc<Deck>,
    default_session: SharedSession,
    readers: Cache<ReaderId, SharedSession>,
    seeds: Mutex<ChaCha8Rng>,
}

impl ReadingStore {
    /// Store whose sessions shuffle from operating-system entropy.
    pub fn new(deck: Arc<Deck>) -> Self {
        Self::with_seeds(deck, ChaCha8Rng::from_os_rng())
    }

    /// Store whose sessions shuffle reproducibly from `seed`.
    pub fn seeded(deck: Arc<Deck>, seed: u64) -> Self {
        Self::with_seeds(deck, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_seeds(deck: Arc<Deck>, mut seeds: ChaCha8Rng) -> Self {
        let default_session = ReadingSession::initialize_with_seed(Arc::clone(&deck), seeds.random());
        let readers = Cache::builder()
            .max_capacity(MAX_READERS)
            .time_to_idle(READER_IDLE_TTL)
            .build();

        Self {
            deck,
            default_session: Arc::new(RwLock::new(default_session)),
            readers,
            seeds: Mutex::new(seeds),
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    fn session(&self, reader: &ReaderId) -> SharedSession {
        if reader.is_default() {
            return Arc::clone(&self.default_session);
        }

        self.readers.get_with(reader.clone(), || {
            debug!(reader = %reader, "Creating reading session");
            let seed = self.seeds.lock().random();
            Arc::new(RwLock::new(ReadingSession::initialize_with_seed(
                Arc::clone(&self.deck),
                seed,
            )))
        })
    }

    /// `view` action: consistent snapshot under the read lock.
    pub fn view(&self, reader: &ReaderId) -> ReadingView {
        self.session(reader).read().current_view()
    }

    /// `newReading` action.
    pub fn new_reading(&self, reader: &ReaderId) -> ReadingView {
        let session = self.session(reader);
        let mut guard = session.write();
        guard.new_reading();
        guard.current_view()
    }

    /// `selectCard` action. The returned view is taken under the same lock
    /// as the mutation.
    pub fn select_card(&self, reader: &ReaderId, index: i64) -> (SelectOutcome, ReadingView) {
        let session = self.session(reader);
        let mut guard = session.write();
        let outcome = guard.select_card(index);
        (outcome, guard.current_view())
    }
}

impl std::fmt::Debug for ReadingStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReadingStore")
            .field("cards", &self.deck.len())
            .field("readers", &self.readers.entry_count())
            .finish()
    }
}
