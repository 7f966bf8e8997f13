//! Casing rules for the free-text fields in filings.
//!
//! Filings arrive mostly upper-cased (`JOHN Q PUBLIC`, `COINBASE INC`), so
//! every decision below is made on the lower-cased token. That keeps each
//! function idempotent: feeding its own output back in yields the same string.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;

const ROMAN_NUMERALS: &[&str] = &["ii", "iii", "iv", "vi", "vii", "viii", "ix"];
const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

static DEFAULT_RULES: LazyLock<TitlecaseRules> = LazyLock::new(TitlecaseRules::default);

/// Exception lists for the titlecase functions. Lower-case words are stored
/// lower-cased and acronyms upper-cased.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TitlecaseRules {
    /// Kept lower case unless they open the phrase.
    pub small_words: HashSet<String>,
    /// Name particles kept lower case between other name parts.
    pub particles: HashSet<String>,
    /// Always upper case in phrases and company names.
    pub acronyms: HashSet<String>,
    /// Upper case in occupations only.
    pub occupation_acronyms: HashSet<String>,
    /// Vowel-less words that are abbreviations rather than acronyms.
    pub abbreviations: HashSet<String>,
}

fn set_of(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl Default for TitlecaseRules {
    fn default() -> Self {
        Self {
            small_words: set_of(&[
                "a", "an", "and", "as", "at", "by", "for", "in", "of", "on", "or", "the", "to",
                "via", "with",
            ]),
            particles: set_of(&["da", "de", "del", "della", "der", "di", "du", "la", "le", "van", "von"]),
            acronyms: set_of(&[
                "LLC", "LLP", "LP", "PAC", "PC", "PLLC", "USA", "AI", "DAO", "NFT",
            ]),
            occupation_acronyms: set_of(&[
                "CEO", "CFO", "COO", "CTO", "CIO", "CMO", "CPA", "EVP", "SVP", "VP", "MD", "RN",
                "IT", "HR",
            ]),
            abbreviations: set_of(&["dr", "ft", "jr", "ltd", "mr", "mrs", "ms", "mt", "sr", "st"]),
        }
    }
}

impl TitlecaseRules {
    pub fn defaults() -> &'static TitlecaseRules {
        &DEFAULT_RULES
    }

    fn is_acronym(&self, core: &str) -> bool {
        self.acronyms.contains(&core.to_uppercase())
    }

    /// Title-cases a generic phrase.
    pub fn titlecase(&self, s: &str) -> String {
        map_words(s, |word, position| {
            let core = word_core(word);
            if self.is_acronym(core) {
                return word.to_uppercase();
            }
            let lower = word.to_lowercase();
            if position != Position::First && self.small_words.contains(word_core(&lower)) {
                return lower;
            }
            capitalize_parts(&lower, false)
        })
    }

    /// Title-cases a "LAST, FIRST MIDDLE" name into "First Middle Last".
    pub fn titlecase_last_first(&self, s: &str) -> String {
        match s.split_once(',') {
            Some((last, first)) => {
                let reordered = format!("{} {}", first.trim(), last.trim());
                self.titlecase_individual_name(&reordered)
            }
            None => self.titlecase_individual_name(s),
        }
    }

    /// Title-cases a person's name, handling particles, `Mc` and `O'` prefixes
    /// and generational numerals.
    pub fn titlecase_individual_name(&self, s: &str) -> String {
        map_words(s, |word, position| {
            let lower = word.to_lowercase();
            let core = word_core(&lower);
            if position != Position::First && ROMAN_NUMERALS.contains(&core) {
                return word.to_uppercase();
            }
            if position == Position::Middle && self.particles.contains(core) {
                return lower;
            }
            capitalize_parts(&lower, true)
        })
    }

    /// Title-cases a company name, keeping acronyms upper case.
    pub fn titlecase_company(&self, s: &str) -> String {
        map_words(s, |word, position| {
            let lower = word.to_lowercase();
            let core = word_core(&lower);
            if self.is_acronym(core) || looks_like_acronym(core, &self.abbreviations) {
                return word.to_uppercase();
            }
            if position != Position::First && self.small_words.contains(core) {
                return lower;
            }
            capitalize_parts(&lower, false)
        })
    }

    pub fn titlecase_occupation(&self, s: &str) -> String {
        map_words(s, |word, position| {
            let lower = word.to_lowercase();
            let parts: Vec<String> = lower
                .split('/')
                .map(|part| {
                    let core = word_core(part);
                    if self.occupation_acronyms.contains(&core.to_uppercase())
                        || self.is_acronym(core)
                    {
                        part.to_uppercase()
                    } else if position != Position::First && self.small_words.contains(core) {
                        part.to_string()
                    } else {
                        capitalize_parts(part, false)
                    }
                })
                .collect();
            parts.join("/")
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    First,
    Middle,
    Last,
}

/// Applies `f` to each whitespace-separated word and rejoins with single spaces.
fn map_words<F>(s: &str, mut f: F) -> String
where
    F: FnMut(&str, Position) -> String,
{
    let words: Vec<&str> = s.split_whitespace().collect();
    let last = words.len().saturating_sub(1);
    words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let position = if i == 0 {
                Position::First
            } else if i == last {
                Position::Last
            } else {
                Position::Middle
            };
            f(word, position)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The word without surrounding punctuation, so `"(LLC),"` is looked up as `LLC`.
fn word_core(word: &str) -> &str {
    word.trim_matches(|c: char| !c.is_alphanumeric() && c != '.')
        .trim_end_matches('.')
}

fn looks_like_acronym(core: &str, abbreviations: &HashSet<String>) -> bool {
    if core.is_empty() {
        return false;
    }
    if core.chars().any(|c| c.is_ascii_digit()) {
        return true;
    }
    // Dotted initialisms: a.b.c
    if core.contains('.') && core.split('.').all(|seg| seg.chars().count() == 1) {
        return true;
    }
    core.chars().count() >= 2
        && core.chars().all(|c| c.is_alphabetic())
        && !core.chars().any(|c| VOWELS.contains(&c))
        && !abbreviations.contains(core)
}

/// Upper-cases the first letter of `lower` and every letter following a
/// hyphen, slash or opening bracket. With `name_rules`, also the letter after
/// `Mc` and after a one-letter apostrophe prefix (`O'Brien`, `D'Angelo`).
fn capitalize_parts(lower: &str, name_rules: bool) -> String {
    let chars: Vec<char> = lower.chars().collect();
    let mut out = String::with_capacity(lower.len());
    let mut capitalize_next = true;
    let mut letters_seen = 0usize;

    for (i, &c) in chars.iter().enumerate() {
        if c.is_alphabetic() {
            if capitalize_next {
                out.extend(c.to_uppercase());
                capitalize_next = false;
            } else {
                out.push(c);
            }
            letters_seen += 1;

            if name_rules && letters_seen == 2 && i >= 1 && chars[i - 1] == 'm' && c == 'c' {
                let rest_is_word = chars.get(i + 1).is_some_and(|n| n.is_alphabetic());
                if rest_is_word && is_segment_start(&chars, i - 1) {
                    capitalize_next = true;
                }
            }
        } else {
            out.push(c);
            match c {
                '-' | '/' | '(' | '"' => {
                    capitalize_next = true;
                    letters_seen = 0;
                }
                '\'' | '\u{2019}' if name_rules && letters_seen == 1 => {
                    capitalize_next = true;
                    letters_seen = 0;
                }
                _ => {}
            }
        }
    }
    out
}

fn is_segment_start(chars: &[char], i: usize) -> bool {
    i == 0 || !chars[i - 1].is_alphabetic()
}

/// Which casing to apply to a free-text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Casing {
    Phrase,
    LastFirst,
    Individual,
    Company,
    Occupation,
    Suffix,
    Sentence,
}

impl TitlecaseRules {
    pub fn apply(&self, casing: Casing, s: &str) -> String {
        match casing {
            Casing::Phrase => self.titlecase(s),
            Casing::LastFirst => self.titlecase_last_first(s),
            Casing::Individual => self.titlecase_individual_name(s),
            Casing::Company => self.titlecase_company(s),
            Casing::Occupation => self.titlecase_occupation(s),
            Casing::Suffix => titlecase_suffix(s),
            Casing::Sentence => sentence_case(s),
        }
    }
}

/// Normalises a generational or professional suffix: `JR` -> `Jr.`, `iii` -> `III`.
pub fn titlecase_suffix(s: &str) -> String {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let key = trimmed.trim_end_matches('.').to_lowercase();
    match key.as_str() {
        "jr" => "Jr.".to_string(),
        "sr" => "Sr.".to_string(),
        "esq" => "Esq.".to_string(),
        "phd" => "PhD".to_string(),
        _ => trimmed.to_uppercase(),
    }
}

/// Capitalises the first letter only.
pub fn sentence_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
