//! Season loading: cache first, network on a miss.

use crate::cache::SeasonCache;
use crate::error::Result;
use crate::gateway::{Gateway, Transport};
use crate::models::{Season, SeasonData};
use crate::storage::KeyValueStore;
use std::rc::Rc;

pub struct SeasonLoader<S: KeyValueStore, T: Transport> {
    cache: SeasonCache<S>,
    gateway: Rc<Gateway<T>>,
}

impl<S: KeyValueStore, T: Transport> SeasonLoader<S, T> {
    pub fn new(cache: SeasonCache<S>, gateway: Rc<Gateway<T>>) -> Self {
        Self { cache, gateway }
    }

    /// Return the season's data, fetching and caching it on a miss.
    ///
    /// Nothing is written when the fetch fails. A failed cache write is
    /// logged and the fetched data is still returned.
    pub async fn load(&self, season: Season) -> Result<SeasonData> {
        if self.cache.has_season(season) {
            match self.cache.read_season(season) {
                Ok(data) => {
                    log::debug!("Cache hit for season {}", season);
                    return Ok(data);
                }
                Err(e) => log::warn!("{}; refetching season {}", e, season),
            }
        } else {
            log::debug!("Cache miss for season {}", season);
        }

        let data = self
            .gateway
            .fetch_season_data(season)
            .await
            .map_err(|e| {
                log::error!("Data fetch failed: {}", e);
                e
            })?;

        if let Err(e) = self.cache.write_season(season, &data) {
            log::warn!("Could not cache season {}: {}", season, e);
        }
        Ok(data)
    }
}
