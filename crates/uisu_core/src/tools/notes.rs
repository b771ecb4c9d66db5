//! Notes editor draft.
//!
//! # Invariants
//! - The body is opaque editor JSON; it is stored and restored unchanged.
//! - Nothing is written until [`Notebook::save`] is called.
//! - Titles stored as plain text, before values were enveloped, are read
//!   back verbatim.

use super::keys;
use crate::storage::{decode_payload, load, save, KeyValueStore, PayloadError, StoreResult};
use log::{debug, warn};
use serde_json::{Map, Value};

pub const DEFAULT_NOTE_TITLE: &str = "Untitled Ledger";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteStatus {
    Ready,
    Modified,
    Serialized,
}

pub struct Notebook<S> {
    store: S,
    title: String,
    body: Value,
    status: NoteStatus,
}

impl<S: KeyValueStore> Notebook<S> {
    pub fn mount(store: S) -> Self {
        let title = load_note_title(&store);
        let body = load(&store, keys::EDITOR_NOTES, Value::Object(Map::new()));
        Self {
            store,
            title,
            body,
            status: NoteStatus::Ready,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    pub fn status(&self) -> NoteStatus {
        self.status
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.status = NoteStatus::Modified;
    }

    pub fn set_body(&mut self, body: Value) {
        self.body = body;
        self.status = NoteStatus::Modified;
    }

    /// Writes title and body.
    pub fn save(&mut self) -> StoreResult<()> {
        save(&mut self.store, keys::EDITOR_NOTES, &self.body)?;
        save(&mut self.store, keys::NOTE_TITLE, &self.title)?;
        self.status = NoteStatus::Serialized;
        debug!("event=note_save module=tools status=ok");
        Ok(())
    }

    /// Clears the transient "saved" marker.
    pub fn acknowledge(&mut self) {
        if self.status == NoteStatus::Serialized {
            self.status = NoteStatus::Ready;
        }
    }

    pub fn unmount(self) -> S {
        self.store
    }
}

/// Reads the stored note title, accepting both enveloped JSON and raw text.
///
/// Falls back to [`DEFAULT_NOTE_TITLE`] when nothing usable is stored.
pub fn load_note_title<S: KeyValueStore + ?Sized>(store: &S) -> String {
    let raw = match store.get_item(keys::NOTE_TITLE) {
        Ok(Some(raw)) => raw,
        Ok(None) => return DEFAULT_NOTE_TITLE.to_string(),
        Err(err) => {
            warn!(
                "event=note_title_load module=tools status=default reason=read_failed error={err}"
            );
            return DEFAULT_NOTE_TITLE.to_string();
        }
    };
    match decode_payload::<String>(&raw) {
        Ok(title) => title,
        Err(PayloadError::Malformed(_) | PayloadError::Shape(_)) if !raw.trim().is_empty() => {
            debug!("event=note_title_load module=tools status=ok format=plain_text");
            raw
        }
        Err(err) => {
            warn!(
                "event=note_title_load module=tools status=default reason={}",
                err.reason_code()
            );
            DEFAULT_NOTE_TITLE.to_string()
        }
    }
}
