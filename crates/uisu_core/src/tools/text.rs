//! Text utilities: word statistics, encoding, citations and lookups.

use base64::{engine::general_purpose::STANDARD, Engine};
use once_cell::sync::Lazy;
use regex::Regex;

pub const INVALID_BASE64: &str = "Invalid Base64";
const WORDS_PER_MINUTE: usize = 200;
const LOREM_PARAGRAPH: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Aluta continua, victoria ascerta. Intellectualism and welfare for all uites. ";

static SENTENCE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordStats {
    pub words: usize,
    pub chars: usize,
    pub sentences: usize,
    pub reading_minutes: usize,
}

pub fn word_stats(text: &str) -> WordStats {
    let words = text.split_whitespace().count();
    WordStats {
        words,
        chars: text.chars().count(),
        sentences: SENTENCE_BREAK
            .split(text)
            .filter(|part| !part.is_empty())
            .count(),
        reading_minutes: words.div_ceil(WORDS_PER_MINUTE),
    }
}

pub fn encode_base64(input: &str) -> String {
    STANDARD.encode(input.as_bytes())
}

/// Decodes standard base64 into UTF-8 text, or [`INVALID_BASE64`].
pub fn decode_base64(input: &str) -> String {
    STANDARD
        .decode(input.trim())
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .unwrap_or_else(|| INVALID_BASE64.to_string())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CitationStyle {
    #[default]
    Apa,
    Mla,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CitationSource {
    pub author: String,
    pub title: String,
    pub year: String,
    pub publisher: String,
}

pub fn cite(source: &CitationSource, style: CitationStyle) -> String {
    let CitationSource {
        author,
        title,
        year,
        publisher,
    } = source;
    match style {
        CitationStyle::Apa => format!("{author} ({year}). {title}. {publisher}."),
        CitationStyle::Mla => format!("{author}. {title}. {publisher}, {year}."),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMode {
    Upper,
    Lower,
}

pub fn convert_case(text: &str, mode: CaseMode) -> String {
    match mode {
        CaseMode::Upper => text.to_uppercase(),
        CaseMode::Lower => text.to_lowercase(),
    }
}

/// Sorts newline-separated entries by code point, keeping blank lines.
pub fn sort_lines(list: &str) -> String {
    let mut lines: Vec<&str> = list.split('\n').collect();
    lines.sort_unstable();
    lines.join("\n")
}

/// Filler text made of `paragraphs` copies of the house paragraph.
pub fn lorem(paragraphs: usize) -> String {
    LOREM_PARAGRAPH.repeat(paragraphs)
}

/// Campus lexicon in display order.
pub const CAMPUS_LEXICON: [(&str, &str); 20] = [
    ("aluta", "The struggle; continuous activism for rights."),
    ("uite", "A proud student of the University of Ibadan."),
    ("tower", "The historic Clock Tower, symbol of UI excellence."),
    ("mellamby", "The premier hall of residence, Kenneth Mellamby Hall."),
    ("jambite", "A newly admitted student (freshman)."),
    ("aro", "Humorous public teasing or \"roasting\" common in Zik and Indy halls."),
    ("sub", "Students' Union Building; the political and social hub."),
    ("kdl", "Kenneth Dike Library; the central academic heart."),
    ("tech", "Short for the Faculty of Technology."),
    ("baluba", "Refers to residents of Nnamdi Azikiwe (Zik) Hall."),
    ("katangese", "Refers to residents of Independence (Indy) Hall."),
    ("amazons", "Refers to residents of Queen Idia Hall."),
    ("queens", "Refers to residents of Queen Elizabeth II Hall."),
    ("marathon", "Intense studying sessions usually before exams."),
    ("carryover", "Failing a course and needing to retake it."),
    ("gpa", "Grade Point Average."),
    ("cgpa", "Cumulative Grade Point Average."),
    ("tlds", "The Literary and Debating Society."),
    ("jaw war", "The massive inter-hall/faculty debating competition."),
    ("gyration", "Energetic singing and dancing, often at social gatherings."),
];

/// Exact, case-insensitive definition lookup.
pub fn define(term: &str) -> Option<&'static str> {
    let needle = term.to_lowercase();
    CAMPUS_LEXICON
        .iter()
        .find(|(word, _)| *word == needle)
        .map(|(_, definition)| *definition)
}

/// Terms containing `query`; empty for an empty query.
pub fn suggest_terms(query: &str) -> Vec<&'static str> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    CAMPUS_LEXICON
        .iter()
        .filter(|(word, _)| word.contains(needle.as_str()))
        .map(|(word, _)| *word)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_stats_counts_like_the_editor() {
        let stats = word_stats("Aluta continua! Victoria ascerta. ");
        assert_eq!(stats.words, 4);
        assert_eq!(stats.chars, 34);
        assert_eq!(stats.sentences, 3);
        assert_eq!(stats.reading_minutes, 1);
        assert_eq!(word_stats("   "), WordStats { chars: 3, sentences: 1, ..WordStats::default() });
    }

    #[test]
    fn base64_round_trip_and_invalid_input() {
        assert_eq!(encode_base64("UISU"), "VUlTVQ==");
        assert_eq!(decode_base64("VUlTVQ=="), "UISU");
        assert_eq!(decode_base64("@@@"), INVALID_BASE64);
    }

    #[test]
    fn citations_follow_style_templates() {
        let source = CitationSource {
            author: "Ajayi, J.".to_string(),
            title: "Union Histories".to_string(),
            year: "1999".to_string(),
            publisher: "Ibadan Press".to_string(),
        };
        assert_eq!(
            cite(&source, CitationStyle::Apa),
            "Ajayi, J. (1999). Union Histories. Ibadan Press."
        );
        assert_eq!(
            cite(&source, CitationStyle::Mla),
            "Ajayi, J.. Union Histories. Ibadan Press, 1999."
        );
    }

    #[test]
    fn sort_lines_orders_entries() {
        assert_eq!(sort_lines("zik\nbello\nIndy"), "Indy\nbello\nzik");
    }

    #[test]
    fn lexicon_lookup_and_suggestions() {
        assert_eq!(
            define("KDL"),
            Some("Kenneth Dike Library; the central academic heart.")
        );
        assert_eq!(define("unknown"), None);
        assert_eq!(suggest_terms("gpa"), vec!["gpa", "cgpa"]);
        assert!(suggest_terms("").is_empty());
    }

    #[test]
    fn lorem_repeats_paragraph() {
        assert_eq!(lorem(2).matches("Lorem ipsum").count(), 2);
        assert!(lorem(0).is_empty());
    }
}
