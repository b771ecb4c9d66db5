//! Utility tools behind the tools page.
//!
//! # Responsibility
//! - Provide the pure transforms each calculator renders.
//! - Bind stateful tools to their storage keys through the persistence
//!   adapter.
//!
//! # Invariants
//! - Pure transforms never panic; invalid input yields [`ERROR_DISPLAY`] or a
//!   tool-specific message where the page shows one.
//! - Each persisted tool owns exactly one storage key listed in [`keys`].

pub mod academic;
pub mod calculators;
pub mod expression;
pub mod flashcards;
pub mod ledger;
pub mod notes;
pub mod pomodoro;
pub mod text;
pub mod timetable;

/// Display string shown when a calculation cannot be performed.
pub const ERROR_DISPLAY: &str = "Error";

/// Storage keys used by persisted tools.
pub mod keys {
    pub const GPA_COURSES: &str = "matrix_gpa_courses";
    pub const TASKS: &str = "matrix_tasks";
    pub const BUDGET: &str = "matrix_budget";
    pub const FLASHCARDS: &str = "matrix_cards";
    pub const TIMETABLE: &str = "matrix_timetable";
    pub const EDITOR_NOTES: &str = "uisu_editor_notes";
    pub const NOTE_TITLE: &str = "uisu_note_title";

    /// Every key a tool may write, for reset and FFI validation.
    pub const ALL: [&str; 7] = [
        GPA_COURSES,
        TASKS,
        BUDGET,
        FLASHCARDS,
        TIMETABLE,
        EDITOR_NOTES,
        NOTE_TITLE,
    ];

    pub fn is_known(key: &str) -> bool {
        ALL.contains(&key)
    }
}
