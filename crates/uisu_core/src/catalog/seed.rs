//! Built-in catalogs loaded at startup.
//!
//! Seed ids are fixed literals and must stay unique.

use crate::catalog::Catalog;
use crate::model::document::{ArchiveDocument, DocumentType};
use crate::model::tool::{ToolCategory, ToolDefinition};

fn doc(
    id: &str,
    title: &str,
    year: i32,
    doc_type: DocumentType,
    size: &str,
    description: &str,
) -> ArchiveDocument {
    ArchiveDocument {
        id: id.to_string(),
        title: title.to_string(),
        year,
        doc_type,
        size: size.to_string(),
        description: description.to_string(),
    }
}

/// Documents shipped with the archive library, oldest first.
pub fn document_archive() -> Catalog<ArchiveDocument> {
    use DocumentType::*;

    Catalog::from_records([
        doc("1", "The 1952 Students Union Constitution", 1952, Constitution, "2.4 MB", "The founding legal document of the Union."),
        doc("2", "Gamaliel Onosode: The Mellamby Address", 1955, Speech, "450 KB", "Address delivered at the first hall dinner of Mellamby Hall."),
        doc("3", "Independence Day Union Memo", 1960, Report, "800 KB", "Official union stance on Nigerian Independence."),
        doc("4", "Kunle Adepeju Memorial Committee Report", 1971, Report, "1.2 MB", "Findings on the police brutality incident."),
        doc("5", "Ali Must Go: Charter of Demands", 1978, Manifesto, "1.5 MB", "The list of demands presented to the Federal Military Government."),
        doc("6", "Student Welfare Bill 1985", 1985, Bill, "600 KB", "Legislative bill for improving cafeteria services."),
        doc("7", "Anti-Cultism Decree", 1999, Bill, "900 KB", "Union regulations against secret cult activities on campus."),
        doc("8", "2001 Amended Constitution", 2001, Constitution, "3.1 MB", "Major amendments following the return to democracy."),
        doc("9", "The \"Book of Life\" Speech Transcript", 2017, Speech, "300 KB", "Transcript of Ojo Aderemi's budget speech."),
        doc("10", "Students Union Restoration Agreement", 2019, Report, "2.0 MB", "Agreement between the University Management and Student Leaders."),
        doc("11", "2023 Appropriation Bill", 2023, Bill, "1.8 MB", "Approved budget for the 2023/2024 academic session."),
        doc("12", "2024 Constitution (Digital Edition)", 2024, Constitution, "4.2 MB", "The current operating constitution of the Union."),
    ])
    .expect("seed document ids are unique")
}

/// Functional tools listed on the tools page.
pub fn tool_registry() -> Catalog<ToolDefinition> {
    use ToolCategory::*;

    Catalog::from_records([
        ToolDefinition::new("gpa", "GPA Calculator", Academic, "Semester GPA indexer."),
        ToolDefinition::new("notes", "Aluta Writer", Research, "Saved note document."),
        ToolDefinition::new("pomodoro", "Pomodoro Timer", Utility, "Concentration cycles."),
        ToolDefinition::new("timetable", "Class Timetable", Academic, "Weekly schedule grid."),
        ToolDefinition::new("todo", "Exam To-Do", Utility, "Task ledger."),
        ToolDefinition::new("dictionary", "Mini Dictionary", Research, "Campus lexicon lookup."),
        ToolDefinition::new("cgpa", "CGPA Forecaster", Academic, "Trajectory projection."),
        ToolDefinition::new("converter", "Unit Converter", Utility, "Centimetres to inches."),
        ToolDefinition::new("calculator", "Sci-Calculator", Utility, "Arithmetic expressions."),
        ToolDefinition::new("wordcount", "Word Counter", Research, "Lexical stats."),
        ToolDefinition::new("bmi", "Health (BMI)", Health, "Body mass index."),
        ToolDefinition::new("age", "Age Calculator", Utility, "Completed years."),
        ToolDefinition::new("timer", "Stopwatch", Utility, "Precision capture."),
        ToolDefinition::new("budget", "Pocket Budget", Utility, "Spending ledger."),
        ToolDefinition::new("tts", "Text-to-Speech", Utility, "Narration."),
        ToolDefinition::new("percentage", "Perc. Calculator", Utility, "Ratio shortcuts."),
        ToolDefinition::new("countdown", "Exam Countdown", Academic, "Time to exam."),
        ToolDefinition::new("caseconvert", "Case Converter", Research, "Text normalization."),
        ToolDefinition::new("listsorter", "List Sorter", Utility, "Line ordering."),
        ToolDefinition::new("lorem", "Lorem Ipsum", Research, "Filler text."),
        ToolDefinition::new("base64", "Base64 Tool", Utility, "Encoding logic."),
        ToolDefinition::new("gradeneed", "Exam Target", Academic, "Score goal module."),
        ToolDefinition::new("cite_gen", "Quick Citer", Research, "Scholarly citations."),
        ToolDefinition::new("flashcards", "Flashcards", Academic, "Recall training."),
        ToolDefinition::new("class_calc", "Degree Class", Academic, "Honors checker."),
        ToolDefinition::new("loan_calc", "Fin-Aid Calc", Logistics, "Repayment estimate."),
    ])
    .expect("seed tool ids are unique")
}

#[cfg(test)]
mod tests {
    use super::{document_archive, tool_registry};

    #[test]
    fn seeds_build_without_duplicates() {
        assert_eq!(document_archive().len(), 12);
        assert_eq!(tool_registry().len(), 26);
        assert!(tool_registry().contains("gpa"));
    }
}
