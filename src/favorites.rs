//! Favorite circuits, drivers and constructors.
//!
//! Favorites are identified by display name; two different teams that share
//! a name share one favorite entry.

use crate::config::FAVORITES_KEY;
use crate::error::{AppError, Result};
use crate::storage::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FavoriteKind {
    Circuits,
    Drivers,
    Constructors,
}

impl FavoriteKind {
    pub const ALL: [FavoriteKind; 3] = [
        FavoriteKind::Circuits,
        FavoriteKind::Drivers,
        FavoriteKind::Constructors,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FavoriteKind::Circuits => "circuits",
            FavoriteKind::Drivers => "drivers",
            FavoriteKind::Constructors => "constructors",
        }
    }

    /// Section heading in the favorites overlay.
    pub fn title(self) -> &'static str {
        match self {
            FavoriteKind::Circuits => "Circuits",
            FavoriteKind::Drivers => "Drivers",
            FavoriteKind::Constructors => "Constructors",
        }
    }
}

impl fmt::Display for FavoriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FavoriteKind {
    type Err = AppError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "circuits" => Ok(FavoriteKind::Circuits),
            "drivers" => Ok(FavoriteKind::Drivers),
            "constructors" => Ok(FavoriteKind::Constructors),
            other => Err(AppError::InvalidFavoriteKind(other.to_string())),
        }
    }
}

/// Persisted favorites, stored as one JSON object under `favorites`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FavoritesState {
    #[serde(default)]
    pub circuits: Vec<String>,
    #[serde(default)]
    pub drivers: Vec<String>,
    #[serde(default)]
    pub constructors: Vec<String>,
}

impl FavoritesState {
    pub fn list(&self, kind: FavoriteKind) -> &[String] {
        match kind {
            FavoriteKind::Circuits => &self.circuits,
            FavoriteKind::Drivers => &self.drivers,
            FavoriteKind::Constructors => &self.constructors,
        }
    }

    fn list_mut(&mut self, kind: FavoriteKind) -> &mut Vec<String> {
        match kind {
            FavoriteKind::Circuits => &mut self.circuits,
            FavoriteKind::Drivers => &mut self.drivers,
            FavoriteKind::Constructors => &mut self.constructors,
        }
    }

    pub fn contains(&self, name: &str, kind: FavoriteKind) -> bool {
        self.list(kind).iter().any(|n| n == name)
    }

    /// Flip membership of `name`; returns whether it is now a favorite.
    pub fn toggle(&mut self, name: &str, kind: FavoriteKind) -> bool {
        let list = self.list_mut(kind);
        if let Some(pos) = list.iter().position(|n| n == name) {
            list.remove(pos);
            false
        } else {
            list.push(name.to_string());
            true
        }
    }

    pub fn remove(&mut self, name: &str, kind: FavoriteKind) {
        self.list_mut(kind).retain(|n| n != name);
    }
}

pub struct FavoritesStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Current favorites; empty lists when nothing was stored yet or the
    /// stored entry is unreadable.
    pub fn load(&self) -> FavoritesState {
        let json = match self.store.get(FAVORITES_KEY) {
            Ok(Some(json)) => json,
            Ok(None) => return FavoritesState::default(),
            Err(e) => {
                log::warn!("Failed to read favorites: {}", e);
                return FavoritesState::default();
            }
        };

        match serde_json::from_str(&json) {
            Ok(state) => state,
            Err(e) => {
                log::warn!("Failed to parse favorites: {}", e);
                FavoritesState::default()
            }
        }
    }

    fn save(&self, state: &FavoritesState) -> Result<()> {
        let json = serde_json::to_string(state).map_err(|e| AppError::CorruptEntry {
            key: FAVORITES_KEY.to_string(),
            message: e.to_string(),
        })?;
        self.store.set(FAVORITES_KEY, &json)?;
        Ok(())
    }

    /// Add `name` if absent, remove it if present, and persist the result.
    pub fn toggle(&self, name: &str, kind: FavoriteKind) -> Result<FavoritesState> {
        let mut state = self.load();
        let added = state.toggle(name, kind);
        self.save(&state)?;
        log::debug!(
            "{} '{}' {} favorites",
            if added { "Added" } else { "Removed" },
            name,
            if added { "to" } else { "from" }
        );
        Ok(state)
    }

    /// Toggle using the stored category name (`circuits`, `drivers`,
    /// `constructors`). Any other kind is rejected without touching storage.
    pub fn toggle_raw(&self, name: &str, kind: &str) -> Result<FavoritesState> {
        let kind = kind.parse::<FavoriteKind>().map_err(|e| {
            log::error!("{}", e);
            e
        })?;
        self.toggle(name, kind)
    }

    pub fn is_favorite(&self, name: &str, kind: FavoriteKind) -> bool {
        self.load().contains(name, kind)
    }

    pub fn remove(&self, name: &str, kind: FavoriteKind) -> Result<FavoritesState> {
        let mut state = self.load();
        state.remove(name, kind);
        self.save(&state)?;
        Ok(state)
    }
}
