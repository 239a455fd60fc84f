//! Persistent season cache.
//!
//! Each season is stored as three JSON blobs under deterministic keys:
//! - `races_{season}`
//! - `qualifying_{season}`
//! - `results_{season}`
//!
//! Entries never expire. A season counts as cached only when all three keys
//! are present, and a failed write removes whatever part of the triple made it
//! to storage.

use crate::config::{QUALIFYING_KEY_PREFIX, RACES_KEY_PREFIX, RESULTS_KEY_PREFIX};
use crate::error::{AppError, Result};
use crate::models::{Season, SeasonData};
use crate::storage::KeyValueStore;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// The three storage keys of one season.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonKeys {
    pub races: String,
    pub qualifying: String,
    pub results: String,
}

impl SeasonKeys {
    pub fn all(&self) -> [&str; 3] {
        [&self.races, &self.qualifying, &self.results]
    }
}

pub fn keys_for(season: Season) -> SeasonKeys {
    SeasonKeys {
        races: format!("{}_{}", RACES_KEY_PREFIX, season),
        qualifying: format!("{}_{}", QUALIFYING_KEY_PREFIX, season),
        results: format!("{}_{}", RESULTS_KEY_PREFIX, season),
    }
}

pub struct SeasonCache<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SeasonCache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// True when all three entries of the season are stored.
    pub fn has_season(&self, season: Season) -> bool {
        keys_for(season)
            .all()
            .iter()
            .all(|key| matches!(self.store.get(key), Ok(Some(_))))
    }

    pub fn read_season(&self, season: Season) -> Result<SeasonData> {
        let keys = keys_for(season);
        Ok(SeasonData {
            races: self.read_entry(&keys.races)?,
            qualifying: self.read_entry(&keys.qualifying)?,
            results: self.read_entry(&keys.results)?,
        })
    }

    /// Write all three entries or none. A failed overwrite of a cached
    /// season drops that season from the cache rather than mixing loads.
    pub fn write_season(&self, season: Season, data: &SeasonData) -> Result<()> {
        let keys = keys_for(season);
        // Serialize everything before touching storage.
        let blobs = [
            (&keys.races, to_json(&keys.races, &data.races)?),
            (&keys.qualifying, to_json(&keys.qualifying, &data.qualifying)?),
            (&keys.results, to_json(&keys.results, &data.results)?),
        ];

        let mut written: Vec<&str> = Vec::with_capacity(blobs.len());
        for (key, json) in &blobs {
            if let Err(e) = self.store.set(key, json) {
                for done in written {
                    if let Err(cleanup) = self.store.remove(done) {
                        log::warn!("Could not roll back '{}': {}", done, cleanup);
                    }
                }
                return Err(e.into());
            }
            written.push(key.as_str());
        }

        log::info!(
            "Cached season {} ({} races, {} qualifying, {} results)",
            season,
            data.races.len(),
            data.qualifying.len(),
            data.results.len()
        );
        Ok(())
    }

    fn read_entry<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let json = self
            .store
            .get(key)?
            .ok_or_else(|| AppError::NotFound(format!("Cache entry '{}'", key)))?;
        serde_json::from_str(&json).map_err(|e| AppError::CorruptEntry {
            key: key.to_string(),
            message: e.to_string(),
        })
    }
}

fn to_json<T: Serialize>(key: &str, value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| AppError::CorruptEntry {
        key: key.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Circuit, EntrantConstructor, EntrantDriver, Race, RaceRef, ResultEntry};
    use crate::storage::{MemoryStore, StorageError};
    use std::rc::Rc;

    fn season(year: u16) -> Season {
        Season::try_from(year).unwrap()
    }

    fn sample() -> SeasonData {
        SeasonData {
            races: vec![Race {
                round: 1,
                name: "Bahrain Grand Prix".into(),
                year: 2022,
                date: "2022-03-20".into(),
                circuit: Circuit {
                    name: "Bahrain International Circuit".into(),
                    location: "Sakhir".into(),
                    country: "Bahrain".into(),
                    url: "http://en.wikipedia.org/wiki/Bahrain_International_Circuit".into(),
                },
            }],
            qualifying: Vec::new(),
            results: vec![ResultEntry {
                race: RaceRef {
                    round: 1,
                    year: 2022,
                    name: "Bahrain Grand Prix".into(),
                },
                position: Some(1),
                driver: EntrantDriver {
                    reference: "leclerc".into(),
                    forename: "Charles".into(),
                    surname: "Leclerc".into(),
                },
                constructor: EntrantConstructor {
                    name: "Ferrari".into(),
                },
                laps: Some(57),
                points: Some(26.0),
            }],
        }
    }

    /// Store that rejects writes to one key, like a full localStorage.
    struct QuotaStore {
        inner: MemoryStore,
        reject: String,
    }

    impl KeyValueStore for QuotaStore {
        fn get(&self, key: &str) -> std::result::Result<Option<String>, StorageError> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> std::result::Result<(), StorageError> {
            if key == self.reject {
                return Err(StorageError::WriteFailed {
                    key: key.to_string(),
                    message: "QuotaExceededError".to_string(),
                });
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> std::result::Result<(), StorageError> {
            self.inner.remove(key)
        }
    }

    #[test]
    fn keys_follow_kind_underscore_season() {
        let keys = keys_for(season(2022));
        assert_eq!(keys.races, "races_2022");
        assert_eq!(keys.qualifying, "qualifying_2022");
        assert_eq!(keys.results, "results_2022");
    }

    #[test]
    fn written_season_reads_back_unchanged() {
        let store = Rc::new(MemoryStore::new());
        let cache = SeasonCache::new(store.clone());
        assert!(!cache.has_season(season(2021)));

        let data = sample();
        cache.write_season(season(2021), &data).unwrap();
        assert!(cache.has_season(season(2021)));
        assert!(!cache.has_season(season(2022)));
        assert_eq!(cache.read_season(season(2021)).unwrap(), data);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn last_write_wins() {
        let cache = SeasonCache::new(MemoryStore::new());
        cache.write_season(season(2023), &sample()).unwrap();
        let empty = SeasonData::default();
        cache.write_season(season(2023), &empty).unwrap();
        assert_eq!(cache.read_season(season(2023)).unwrap(), empty);
    }

    #[test]
    fn partial_triple_is_not_a_cached_season() {
        let store = Rc::new(MemoryStore::new());
        store.set("races_2020", "[]").unwrap();
        store.set("results_2020", "[]").unwrap();
        let cache = SeasonCache::new(store);
        assert!(!cache.has_season(season(2020)));
    }

    #[test]
    fn failed_write_rolls_back_the_triple() {
        let store = QuotaStore {
            inner: MemoryStore::new(),
            reject: "results_2022".to_string(),
        };
        let cache = SeasonCache::new(store);
        let err = cache.write_season(season(2022), &sample()).unwrap_err();
        assert!(matches!(err, AppError::Storage(StorageError::WriteFailed { .. })));
        assert!(!cache.has_season(season(2022)));
        assert!(cache.store.inner.is_empty());
    }

    #[test]
    fn failed_overwrite_drops_the_cached_season() {
        let store = QuotaStore {
            inner: MemoryStore::new(),
            reject: "results_2022".to_string(),
        };
        for key in keys_for(season(2022)).all() {
            store.inner.set(key, "[]").unwrap();
        }
        let cache = SeasonCache::new(store);
        assert!(cache.has_season(season(2022)));

        assert!(cache.write_season(season(2022), &sample()).is_err());
        assert!(!cache.has_season(season(2022)));
        assert!(!cache.store.inner.contains_key("races_2022"));
        assert!(!cache.store.inner.contains_key("qualifying_2022"));
        assert_eq!(cache.store.inner.get("results_2022").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn unreadable_entry_is_reported() {
        let store = Rc::new(MemoryStore::new());
        store.set("races_2022", "not json").unwrap();
        store.set("qualifying_2022", "[]").unwrap();
        store.set("results_2022", "[]").unwrap();
        let cache = SeasonCache::new(store);
        assert!(cache.has_season(season(2022)));
        let err = cache.read_season(season(2022)).unwrap_err();
        assert!(matches!(err, AppError::CorruptEntry { ref key, .. } if key == "races_2022"));
    }
}
