//! Tool state bound to one storage key.

use super::{clear, load, save, KeyValueStore, StoreResult};
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Typed state hydrated from, and written back to, one storage key.
///
/// # Invariants
/// - Hydration happens once, in [`PersistedState::mount`].
/// - Every mutation through `set`/`update` is followed by a write.
/// - A failed write leaves the in-memory value updated and reports the error.
pub struct PersistedState<T, S> {
    key: String,
    default: T,
    value: T,
    store: S,
}

impl<T, S> PersistedState<T, S>
where
    T: Serialize + DeserializeOwned + Clone,
    S: KeyValueStore,
{
    /// Hydrates state from `key`, falling back to `default`.
    pub fn mount(store: S, key: impl Into<String>, default: T) -> Self {
        let key = key.into();
        let value = load(&store, &key, default.clone());
        debug!("event=tool_state_mount module=storage status=ok key={key}");
        Self {
            key,
            default,
            value,
            store,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replaces the whole value and persists it.
    pub fn set(&mut self, value: T) -> StoreResult<()> {
        self.value = value;
        self.persist()
    }

    /// Mutates the value in place and persists it.
    ///
    /// Returns the closure's result once the write succeeded.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> StoreResult<R> {
        let result = f(&mut self.value);
        self.persist()?;
        Ok(result)
    }

    /// Removes the stored key and restores the default value.
    pub fn reset(&mut self) -> StoreResult<()> {
        self.value = self.default.clone();
        clear(&mut self.store, &self.key)?;
        debug!(
            "event=tool_state_reset module=storage status=ok key={}",
            self.key
        );
        Ok(())
    }

    /// Ends the tool session and hands the store back.
    pub fn unmount(self) -> S {
        self.store
    }

    fn persist(&mut self) -> StoreResult<()> {
        save(&mut self.store, &self.key, &self.value)
    }
}
