//! Weekly class timetable.

use super::keys;
use crate::storage::{KeyValueStore, PersistedState, StoreResult};
use std::collections::BTreeMap;

pub const DAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];
pub const SLOTS: [&str; 5] = ["8:00", "10:00", "12:00", "14:00", "16:00"];

/// Cell key in the stored map, e.g. `Monday-8:00`.
pub fn cell_key(day: &str, slot: &str) -> String {
    format!("{day}-{slot}")
}

/// Timetable cells keyed by [`cell_key`]; values are stored uppercased.
pub struct Timetable<S> {
    state: PersistedState<BTreeMap<String, String>, S>,
}

impl<S: KeyValueStore> Timetable<S> {
    pub fn mount(store: S) -> Self {
        Self {
            state: PersistedState::mount(store, keys::TIMETABLE, BTreeMap::new()),
        }
    }

    pub fn cell(&self, day: &str, slot: &str) -> &str {
        self.state
            .get()
            .get(&cell_key(day, slot))
            .map_or("", String::as_str)
    }

    pub fn set_cell(&mut self, day: &str, slot: &str, value: &str) -> StoreResult<()> {
        let key = cell_key(day, slot);
        let value = value.to_uppercase();
        self.state.update(|cells| {
            cells.insert(key, value);
        })
    }

    pub fn unmount(self) -> S {
        self.state.unmount()
    }
}
