mod backend;
mod seed;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};

use chrono::{DateTime, Utc};

use crate::error::{self, EngineError, StoreError};
use crate::polls::{CreatePollSettings, Id, Poll};

pub const STORAGE_KEY: &str = "vanish-vote-polls";

// The whole collection lives as one JSON array in one slot of the backend,
// and every write is a read-modify-write of that slot. Two stores pointed at
// the same slot can lose an update to each other; in scope the store is
// single-client and that race is accepted.
pub struct PollStore {
    backend: Box<dyn StorageBackend>,
}

impl PollStore {
    pub fn new(backend: Box<dyn StorageBackend>) -> PollStore {
        PollStore { backend }
    }

    // Seeds an empty slot with the example polls. Safe to call on every
    // start; an already-populated slot is left untouched.
    pub fn initialize(&self, now: DateTime<Utc>) -> Result<(), StoreError> {
        if self.backend.read(STORAGE_KEY)?.is_none() {
            self.save(&seed::example_polls(now))?;
        }
        Ok(())
    }

    pub fn list_all(&self) -> Result<Vec<Poll>, StoreError> {
        self.load()
    }

    pub fn get_by_id(&self, id: &Id) -> Result<Option<Poll>, StoreError> {
        let polls = self.load()?;
        Ok(polls.into_iter().find(|poll| poll.id == *id))
    }

    pub fn create(&self, settings: CreatePollSettings, now: DateTime<Utc>) -> Result<Poll, EngineError> {
        // validate before touching the slot, so a rejected poll leaves no trace
        let poll = Poll::new(settings, now)?;

        let mut polls = self.load()?;
        polls.push(poll.clone());
        self.save(&polls)?;
        Ok(poll)
    }

    // Overwrites the stored entity wholesale. An unknown id is a silent
    // no-op: callers hold ids they previously read from this store.
    pub fn replace(&self, poll: &Poll) -> Result<(), StoreError> {
        let mut polls = self.load()?;
        let Some(slot) = polls.iter_mut().find(|stored| stored.id == poll.id) else {
            return Ok(());
        };
        *slot = poll.clone();
        self.save(&polls)
    }

    pub fn remove(&self, id: &Id) -> Result<(), StoreError> {
        let polls = self.load()?;
        let remaining: Vec<Poll> = polls.into_iter()
            .filter(|poll| poll.id != *id)
            .collect();
        self.save(&remaining)
    }

    fn load(&self) -> Result<Vec<Poll>, StoreError> {
        match self.backend.read(STORAGE_KEY)? {
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|err| error::store_decode(STORAGE_KEY, err)),
            None => Ok(vec![]),
        }
    }

    fn save(&self, polls: &[Poll]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(polls)
            .map_err(error::store_encode)?;
        self.backend.write(STORAGE_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use crate::polls::{ExpirationChoice, PollType};
    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 12, 0, 0).unwrap()
    }

    fn memory_store() -> PollStore {
        PollStore::new(Box::new(MemoryBackend::new()))
    }

    fn settings(question: &str) -> CreatePollSettings {
        CreatePollSettings {
            question: String::from(question),
            options: vec![String::from("A"), String::from("B")],
            poll_type: PollType::MultipleChoice,
            expiration_time: ExpirationChoice::OneHour,
            hide_results: false,
            is_private: false,
        }
    }

    #[test]
    fn initialize_seeds_an_empty_slot_once() {
        let store = memory_store();
        store.initialize(now()).unwrap();

        let polls = store.list_all().unwrap();
        assert_eq!(polls.len(), 5);

        // repeated initialization must not clobber existing data
        let created = store.create(settings("A sixth poll?"), now()).unwrap();
        store.initialize(now()).unwrap();

        let polls = store.list_all().unwrap();
        assert_eq!(polls.len(), 6);
        assert!(polls.iter().any(|poll| poll.id == created.id));
    }

    #[test]
    fn created_polls_come_back_from_the_listing() {
        let store = memory_store();
        let created = store.create(settings("Round trip?"), now()).unwrap();

        let polls = store.list_all().unwrap();
        assert_eq!(polls, vec![created.clone()]);
        assert_eq!(store.get_by_id(&created.id).unwrap(), Some(created));
    }

    #[test]
    fn listing_preserves_insertion_order() {
        let store = memory_store();
        let first = store.create(settings("First?"), now()).unwrap();
        let second = store.create(settings("Second?"), now()).unwrap();
        let third = store.create(settings("Third?"), now()).unwrap();

        let ids: Vec<Id> = store.list_all().unwrap().into_iter().map(|poll| poll.id).collect();
        assert_eq!(ids, vec![first.id, second.id, third.id]);
    }

    #[test]
    fn rejected_creation_leaves_the_collection_untouched() {
        let store = memory_store();
        store.create(settings("Valid?"), now()).unwrap();

        let mut invalid = settings("Invalid?");
        invalid.options = vec![String::from("only one")];
        assert!(store.create(invalid, now()).is_err());

        assert_eq!(store.list_all().unwrap().len(), 1);
    }

    #[test]
    fn replace_swaps_the_whole_entity() {
        let store = memory_store();
        let mut poll = store.create(settings("Replace me?"), now()).unwrap();
        poll.options[0].votes = 7;
        poll.like_count = 2;

        store.replace(&poll).unwrap();
        assert_eq!(store.get_by_id(&poll.id).unwrap(), Some(poll));
    }

    #[test]
    fn replace_of_an_unknown_id_changes_nothing() {
        let store = memory_store();
        let existing = store.create(settings("Existing?"), now()).unwrap();

        let mut stranger = existing.clone();
        stranger.id = Id::new();
        stranger.question = String::from("Stranger?");
        store.replace(&stranger).unwrap();

        let polls = store.list_all().unwrap();
        assert_eq!(polls, vec![existing]);
    }

    #[test]
    fn remove_filters_the_poll_out() {
        let store = memory_store();
        let keep = store.create(settings("Keep?"), now()).unwrap();
        let drop = store.create(settings("Drop?"), now()).unwrap();

        store.remove(&drop.id).unwrap();
        let polls = store.list_all().unwrap();
        assert_eq!(polls, vec![keep]);
    }

    #[test]
    fn file_backend_persists_across_store_handles() {
        let dir = tempfile::tempdir().unwrap();

        let created = {
            let store = PollStore::new(Box::new(FileBackend::new(dir.path())));
            store.create(settings("Durable?"), now()).unwrap()
        };

        let reopened = PollStore::new(Box::new(FileBackend::new(dir.path())));
        assert_eq!(reopened.list_all().unwrap(), vec![created]);
    }

    #[test]
    fn file_backend_reads_nothing_from_a_missing_slot() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path());
        assert_eq!(backend.read(STORAGE_KEY).unwrap(), None);
    }

    struct BrokenBackend;

    impl StorageBackend for BrokenBackend {
        fn read(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Ok(Some(String::from("[]")))
        }
        fn write(&self, key: &str, _value: &str) -> Result<(), StoreError> {
            Err(error::store_write(key, std::io::Error::new(
                std::io::ErrorKind::Other,
                "quota exceeded",
            )))
        }
    }

    #[test]
    fn write_failures_surface_instead_of_vanishing() {
        let store = PollStore::new(Box::new(BrokenBackend));
        let result = store.create(settings("Doomed?"), now());
        assert!(matches!(result, Err(EngineError::Store(_))));
    }

    #[test]
    fn corrupt_slots_surface_as_decode_failures() {
        let store = memory_store();
        store.backend.write(STORAGE_KEY, "not json").unwrap();
        assert!(store.list_all().is_err());
    }
}
