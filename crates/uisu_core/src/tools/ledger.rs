//! Task and budget ledgers.
//!
//! # Invariants
//! - Entry ids are unique within a ledger and never reused while the entry
//!   with the highest id is present.
//! - Blank input is ignored rather than stored.

use super::keys;
use crate::storage::{KeyValueStore, PersistedState, StoreResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub text: String,
    pub done: bool,
}

pub struct TaskLedger<S> {
    state: PersistedState<Vec<Task>, S>,
}

impl<S: KeyValueStore> TaskLedger<S> {
    pub fn mount(store: S) -> Self {
        Self {
            state: PersistedState::mount(store, keys::TASKS, Vec::new()),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        self.state.get()
    }

    /// Appends a task; returns its id, or `None` when `text` is blank.
    pub fn add(&mut self, text: &str) -> StoreResult<Option<u64>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        let id = next_id(self.tasks().iter().map(|task| task.id));
        self.state.update(|tasks| {
            tasks.push(Task {
                id,
                text: text.to_string(),
                done: false,
            })
        })?;
        Ok(Some(id))
    }

    /// Flips completion for `id`; returns `false` for unknown ids.
    pub fn toggle(&mut self, id: u64) -> StoreResult<bool> {
        self.state.update(|tasks| {
            tasks
                .iter_mut()
                .find(|task| task.id == id)
                .map(|task| task.done = !task.done)
                .is_some()
        })
    }

    pub fn remove(&mut self, id: u64) -> StoreResult<bool> {
        self.state.update(|tasks| {
            let before = tasks.len();
            tasks.retain(|task| task.id != id);
            tasks.len() != before
        })
    }

    pub fn unmount(self) -> S {
        self.state.unmount()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetItem {
    pub id: u64,
    #[serde(rename = "desc")]
    pub label: String,
    #[serde(rename = "amt")]
    pub amount: f64,
}

pub struct BudgetLedger<S> {
    state: PersistedState<Vec<BudgetItem>, S>,
}

impl<S: KeyValueStore> BudgetLedger<S> {
    pub fn mount(store: S) -> Self {
        Self {
            state: PersistedState::mount(store, keys::BUDGET, Vec::new()),
        }
    }

    pub fn items(&self) -> &[BudgetItem] {
        self.state.get()
    }

    pub fn total(&self) -> f64 {
        self.items().iter().map(|item| item.amount).sum()
    }

    /// Records an expense.
    ///
    /// Returns `None` without writing when the label is blank or the amount
    /// is blank or not a finite number.
    pub fn add(&mut self, label: &str, amount: &str) -> StoreResult<Option<u64>> {
        let label = label.trim();
        let amount = match amount.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => value,
            _ => return Ok(None),
        };
        if label.is_empty() {
            return Ok(None);
        }
        let id = next_id(self.items().iter().map(|item| item.id));
        self.state.update(|items| {
            items.push(BudgetItem {
                id,
                label: label.to_string(),
                amount,
            })
        })?;
        Ok(Some(id))
    }

    pub fn remove(&mut self, id: u64) -> StoreResult<bool> {
        self.state.update(|items| {
            let before = items.len();
            items.retain(|item| item.id != id);
            items.len() != before
        })
    }

    /// Drops every entry and the stored key.
    pub fn wipe(&mut self) -> StoreResult<()> {
        self.state.reset()
    }

    pub fn unmount(self) -> S {
        self.state.unmount()
    }
}

fn next_id(ids: impl Iterator<Item = u64>) -> u64 {
    ids.max().map_or(1, |max| max.saturating_add(1))
}

#[cfg(test)]
mod tests {
    use super::{BudgetLedger, TaskLedger};
    use crate::storage::MemoryStore;

    #[test]
    fn task_ledger_ignores_blank_and_toggles() {
        let mut store = MemoryStore::new();
        let mut ledger = TaskLedger::mount(&mut store);
        assert_eq!(ledger.add("   ").unwrap(), None);
        let id = ledger.add(" Draft motion ").unwrap().unwrap();
        assert!(ledger.toggle(id).unwrap());
        assert!(!ledger.toggle(id + 100).unwrap());
        assert_eq!(ledger.tasks()[0].text, "Draft motion");
        assert!(ledger.tasks()[0].done);
        assert!(ledger.remove(id).unwrap());
        assert!(ledger.tasks().is_empty());
    }

    #[test]
    fn budget_rejects_blank_fields_and_sums() {
        let mut store = MemoryStore::new();
        let mut ledger = BudgetLedger::mount(&mut store);
        assert_eq!(ledger.add("", "200").unwrap(), None);
        assert_eq!(ledger.add("Books", "").unwrap(), None);
        assert_eq!(ledger.add("Books", "lots").unwrap(), None);
        ledger.add("Books", "1500").unwrap();
        ledger.add("Transport", "250.5").unwrap();
        assert_eq!(ledger.total(), 1750.5);
        ledger.wipe().unwrap();
        assert!(ledger.items().is_empty());
    }

    #[test]
    fn ids_continue_after_highest_entry() {
        let mut store = MemoryStore::new();
        let mut ledger = TaskLedger::mount(&mut store);
        let first = ledger.add("a").unwrap().unwrap();
        let second = ledger.add("b").unwrap().unwrap();
        ledger.remove(first).unwrap();
        let third = ledger.add("c").unwrap().unwrap();
        assert!(third > second);
    }
}
