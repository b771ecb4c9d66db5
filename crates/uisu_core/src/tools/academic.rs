//! Grade point tools on the 5-point scale.
//!
//! # Invariants
//! - Grade points: A=5, B=4, C=3, D=2, E=1, F=0.
//! - A fresh or cleared course sheet holds one blank row.

use super::{keys, ERROR_DISPLAY};
use crate::storage::{KeyValueStore, PersistedState, StoreResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl Grade {
    pub fn points(self) -> u32 {
        match self {
            Self::A => 5,
            Self::B => 4,
            Self::C => 3,
            Self::D => 2,
            Self::E => 1,
            Self::F => 0,
        }
    }
}

/// One row of the GPA sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub units: u32,
    pub grade: Grade,
}

impl Default for Course {
    fn default() -> Self {
        Self {
            name: String::new(),
            units: 3,
            grade: Grade::A,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GpaSummary {
    pub total_units: u64,
    pub total_points: u64,
    /// GPA to two decimals, `"0.00"` when no units are registered.
    pub gpa: String,
}

/// Totals are accumulated in `u64`; stored sheets may carry any `u32` unit
/// count.
pub fn gpa_summary(courses: &[Course]) -> GpaSummary {
    let (total_units, total_points) = courses
        .iter()
        .fold((0u64, 0u64), |(units, points), course| {
            let course_units = u64::from(course.units);
            let course_points = u64::from(course.grade.points()) * course_units;
            (
                units.saturating_add(course_units),
                points.saturating_add(course_points),
            )
        });
    let gpa = if total_units > 0 {
        format!("{:.2}", total_points as f64 / total_units as f64)
    } else {
        "0.00".to_string()
    };
    GpaSummary {
        total_units,
        total_points,
        gpa,
    }
}

/// Projected CGPA after `planned_units` more units at `planned_gpa`.
///
/// Returns `None` when no units are involved at all.
pub fn cgpa_forecast(
    current_cgpa: f64,
    current_units: f64,
    planned_gpa: f64,
    planned_units: f64,
) -> Option<f64> {
    let units = current_units + planned_units;
    if units == 0.0 {
        return None;
    }
    Some((current_cgpa * current_units + planned_gpa * planned_units) / units)
}

pub fn degree_class(cgpa: f64) -> &'static str {
    if cgpa >= 4.5 {
        "First Class Honors"
    } else if cgpa >= 3.5 {
        "Second Class Upper"
    } else if cgpa >= 2.4 {
        "Second Class Lower"
    } else {
        "Third Class"
    }
}

/// Exam score needed to finish a course at `target`, to one decimal.
///
/// `exam_weight` is a percentage of the final mark.
pub fn exam_score_needed(current: f64, exam_weight: f64, target: f64) -> String {
    let weight = exam_weight / 100.0;
    if weight == 0.0 {
        return ERROR_DISPLAY.to_string();
    }
    let needed = (target - current * (1.0 - weight)) / weight;
    if !needed.is_finite() {
        return ERROR_DISPLAY.to_string();
    }
    format!("{needed:.1}")
}

/// Persisted GPA sheet.
pub struct CourseSheet<S> {
    state: PersistedState<Vec<Course>, S>,
}

impl<S: KeyValueStore> CourseSheet<S> {
    pub fn mount(store: S) -> Self {
        Self {
            state: PersistedState::mount(store, keys::GPA_COURSES, vec![Course::default()]),
        }
    }

    pub fn courses(&self) -> &[Course] {
        self.state.get()
    }

    pub fn summary(&self) -> GpaSummary {
        gpa_summary(self.courses())
    }

    pub fn append(&mut self) -> StoreResult<()> {
        self.state.update(|courses| courses.push(Course::default()))
    }

    /// Replaces row `index`; returns `false` when it does not exist.
    pub fn update_row(&mut self, index: usize, course: Course) -> StoreResult<bool> {
        if index >= self.courses().len() {
            return Ok(false);
        }
        self.state.update(|courses| courses[index] = course)?;
        Ok(true)
    }

    pub fn remove_row(&mut self, index: usize) -> StoreResult<bool> {
        if index >= self.courses().len() {
            return Ok(false);
        }
        self.state.update(|courses| {
            courses.remove(index);
        })?;
        Ok(true)
    }

    /// Clears the stored sheet back to a single blank row.
    pub fn clear(&mut self) -> StoreResult<()> {
        self.state.reset()
    }

    pub fn unmount(self) -> S {
        self.state.unmount()
    }
}
