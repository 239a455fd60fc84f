use crate::favorites::{FavoriteKind, FavoritesState, FavoritesStore};
use crate::storage::KeyValueStore;
use std::rc::Rc;
use yew::prelude::*;

/// Holds the favorites state and the callbacks that change it.
#[derive(Clone, PartialEq)]
pub struct FavoritesHandle {
    /// Favorites as last read from (or written to) storage.
    pub state: FavoritesState,
    /// Add the name if absent, remove it if present.
    pub toggle: Callback<(FavoriteKind, String)>,
    /// Remove the name; no-op if it is not a favorite.
    pub remove: Callback<(FavoriteKind, String)>,
}

impl FavoritesHandle {
    pub fn is_favorite(&self, name: &str, kind: FavoriteKind) -> bool {
        self.state.contains(name, kind)
    }
}

/// Custom hook exposing the persisted favorites to components.
///
/// Every change is written through to `store` before the state handle is
/// updated, so a re-render always reflects what is stored.
#[hook]
pub fn use_favorites(store: Rc<dyn KeyValueStore>) -> FavoritesHandle {
    let state_handle = {
        let store = store.clone();
        use_state(move || FavoritesStore::new(store).load())
    };

    let toggle = {
        let state_setter = state_handle.clone();
        let store = store.clone();
        Callback::from(move |(kind, name): (FavoriteKind, String)| {
            match FavoritesStore::new(store.clone()).toggle(&name, kind) {
                Ok(updated) => state_setter.set(updated),
                Err(e) => log::error!("Could not update favorites: {}", e),
            }
        })
    };

    let remove = {
        let state_setter = state_handle.clone();
        Callback::from(move |(kind, name): (FavoriteKind, String)| {
            match FavoritesStore::new(store.clone()).remove(&name, kind) {
                Ok(updated) => state_setter.set(updated),
                Err(e) => log::error!("Could not remove favorite: {}", e),
            }
        })
    };

    FavoritesHandle {
        state: (*state_handle).clone(),
        toggle,
        remove,
    }
}
