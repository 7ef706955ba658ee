use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const EXACT_SCORE: u8 = 100;
pub const PREFIX_SCORE: u8 = 90;
pub const WORD_SCORE: u8 = 80;
pub const PARTIAL_WORD_SCORE: u8 = 50;
const SUBSTRING_CEILING: f64 = 70.0;
const SUBSTRING_FLOOR: f64 = 60.0;
const FUZZY_CEILING: f64 = 30.0;

/// How the last-resort fuzzy tier is computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FuzzyMode {
    /// Share of query characters that occur anywhere in the name.
    #[default]
    CharOverlap,
    /// Jaro-Winkler similarity, scaled into the same 0-30 band.
    JaroWinkler,
}

impl FuzzyMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CharOverlap => "overlap",
            Self::JaroWinkler => "jaro-winkler",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overlap" | "char-overlap" => Some(Self::CharOverlap),
            "jaro-winkler" | "jaro_winkler" | "jw" => Some(Self::JaroWinkler),
            _ => None,
        }
    }
}

fn word_separator() -> &'static Regex {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    SEPARATOR.get_or_init(|| Regex::new(r"[\s_-]+").expect("word separator pattern is valid"))
}

/// Relevance of `name` for `query`, 0 to 100. Empty queries score 0.
pub fn score(name: &str, query: &str) -> u8 {
    score_with(name, query, FuzzyMode::CharOverlap)
}

pub fn score_with(name: &str, query: &str, fuzzy: FuzzyMode) -> u8 {
    if query.is_empty() {
        return 0;
    }

    let name_lower = name.to_lowercase();
    let query_lower = query.to_lowercase();

    if name_lower == query_lower {
        return EXACT_SCORE;
    }
    if name_lower.starts_with(&query_lower) {
        return PREFIX_SCORE;
    }

    let words: Vec<&str> = word_separator().split(&name_lower).collect();
    if words.iter().any(|w| *w == query_lower) {
        return WORD_SCORE;
    }

    if let Some(byte_idx) = name_lower.find(&query_lower) {
        return substring_score(&name_lower, byte_idx);
    }

    // Words are slices of the name, so this only fires if the name and
    // word splitting ever diverge.
    if words.iter().any(|w| w.contains(query_lower.as_str())) {
        return PARTIAL_WORD_SCORE;
    }

    fuzzy_score(&name_lower, &query_lower, fuzzy)
}

/// Earlier matches score closer to 70, never below 60.
fn substring_score(name_lower: &str, byte_idx: usize) -> u8 {
    let index = name_lower[..byte_idx].chars().count() as f64;
    let len = name_lower.chars().count().max(1) as f64;
    (SUBSTRING_CEILING - (index / len) * 10.0)
        .max(SUBSTRING_FLOOR)
        .round() as u8
}

fn fuzzy_score(name_lower: &str, query_lower: &str, fuzzy: FuzzyMode) -> u8 {
    match fuzzy {
        FuzzyMode::CharOverlap => {
            let query_len = query_lower.chars().count();
            if query_len == 0 {
                return 0;
            }
            let matched = query_lower
                .chars()
                .filter(|c| name_lower.contains(*c))
                .count();
            ((matched as f64 / query_len as f64) * FUZZY_CEILING).round() as u8
        }
        FuzzyMode::JaroWinkler => {
            (strsim::jaro_winkler(name_lower, query_lower) * FUZZY_CEILING).round() as u8
        }
    }
}
