//! Word lists for the sentiment engine.
//!
//! The built-in lexicon targets workplace survey answers written in English.
//! All the entries are lowercase and contain only the characters kept by the
//! tokenizer, so contracted negators are stored without their apostrophe.

use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::config::*;

const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "amazing",
    "awesome",
    "fantastic",
    "wonderful",
    "outstanding",
    "best",
    "better",
    "love",
    "loved",
    "enjoy",
    "enjoyed",
    "enjoying",
    "happy",
    "glad",
    "satisfied",
    "pleased",
    "proud",
    "grateful",
    "thankful",
    "appreciate",
    "appreciated",
    "supportive",
    "helpful",
    "friendly",
    "collaborative",
    "motivated",
    "motivating",
    "engaged",
    "inspiring",
    "inspired",
    "valued",
    "respected",
    "respectful",
    "fair",
    "flexible",
    "rewarding",
    "fulfilling",
    "positive",
    "productive",
    "efficient",
    "effective",
    "comfortable",
    "safe",
    "trust",
    "trusted",
    "transparent",
    "recognized",
    "empowered",
    "encouraging",
    "encouraged",
    "welcoming",
    "balanced",
    "growth",
    "opportunity",
    "opportunities",
    "improved",
    "easy",
    "fun",
    "exciting",
    "excited",
    "kind",
    "caring",
    "organized",
    "reliable",
    "stable",
    "secure",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "poor",
    "terrible",
    "awful",
    "horrible",
    "worst",
    "worse",
    "hate",
    "dislike",
    "unhappy",
    "sad",
    "angry",
    "frustrated",
    "frustrating",
    "stress",
    "stressed",
    "stressful",
    "overworked",
    "understaffed",
    "underpaid",
    "undervalued",
    "unappreciated",
    "burnout",
    "exhausted",
    "tired",
    "toxic",
    "unfair",
    "unclear",
    "disorganized",
    "chaotic",
    "micromanaged",
    "micromanagement",
    "ignored",
    "isolated",
    "overwhelmed",
    "overwhelming",
    "anxious",
    "worried",
    "difficult",
    "boring",
    "bored",
    "confusing",
    "confused",
    "disappointed",
    "disappointing",
    "disrespectful",
    "disrespected",
    "hostile",
    "rude",
    "unsafe",
    "unstable",
    "insecure",
    "inefficient",
    "ineffective",
    "lacking",
    "problem",
    "problems",
    "issue",
    "issues",
    "conflict",
    "pressure",
    "demotivated",
    "discouraged",
    "uncomfortable",
    "neglected",
    "harassment",
    "discrimination",
];

const INTENSIFIERS: &[&str] = &[
    "very",
    "really",
    "extremely",
    "so",
    "too",
    "incredibly",
    "highly",
    "totally",
    "absolutely",
    "completely",
    "super",
    "truly",
    "deeply",
    "particularly",
    "especially",
    "seriously",
];

const NEGATORS: &[&str] = &[
    "not",
    "no",
    "never",
    "none",
    "nobody",
    "nothing",
    "neither",
    "nor",
    "without",
    "hardly",
    "barely",
    "cannot",
    "dont",
    "doesnt",
    "didnt",
    "isnt",
    "arent",
    "wasnt",
    "werent",
    "cant",
    "couldnt",
    "wont",
    "wouldnt",
    "shouldnt",
    "havent",
    "hasnt",
    "hadnt",
    "aint",
    "lack",
];

static DEFAULT_LEXICON: Lazy<Lexicon> =
    Lazy::new(|| Lexicon::from_lists(POSITIVE_WORDS, NEGATIVE_WORDS, INTENSIFIERS, NEGATORS));

/// The four word sets used for scoring.
///
/// A lexicon is immutable once built. Use [`Lexicon::default_lexicon`] for the
/// built-in lists, or [`crate::builder::LexiconBuilder`] to assemble a custom one.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct Lexicon {
    pub(crate) positive: HashSet<String>,
    pub(crate) negative: HashSet<String>,
    pub(crate) intensifiers: HashSet<String>,
    pub(crate) negators: HashSet<String>,
}

impl Lexicon {
    /// The built-in lexicon, shared by every caller of the process.
    pub fn default_lexicon() -> &'static Lexicon {
        &DEFAULT_LEXICON
    }

    fn from_lists(
        positive: &[&str],
        negative: &[&str],
        intensifiers: &[&str],
        negators: &[&str],
    ) -> Lexicon {
        let to_set = |words: &[&str]| -> HashSet<String> {
            words.iter().map(|w| w.to_string()).collect()
        };
        Lexicon {
            positive: to_set(positive),
            negative: to_set(negative),
            intensifiers: to_set(intensifiers),
            negators: to_set(negators),
        }
    }

    pub fn positive_words(&self) -> &HashSet<String> {
        &self.positive
    }

    pub fn negative_words(&self) -> &HashSet<String> {
        &self.negative
    }

    pub fn intensifiers(&self) -> &HashSet<String> {
        &self.intensifiers
    }

    pub fn negators(&self) -> &HashSet<String> {
        &self.negators
    }

    pub fn words(&self, category: WordCategory) -> &HashSet<String> {
        match category {
            WordCategory::Positive => &self.positive,
            WordCategory::Negative => &self.negative,
            WordCategory::Intensifier => &self.intensifiers,
            WordCategory::Negator => &self.negators,
        }
    }

    pub fn is_positive(&self, token: &str) -> bool {
        self.positive.contains(token)
    }

    pub fn is_negative(&self, token: &str) -> bool {
        self.negative.contains(token)
    }

    pub fn is_intensifier(&self, token: &str) -> bool {
        self.intensifiers.contains(token)
    }

    pub fn is_negator(&self, token: &str) -> bool {
        self.negators.contains(token)
    }

    /// Scores a text against this lexicon. See [`crate::analyze_with`].
    pub fn analyze<'a>(&self, text: impl Into<Option<&'a str>>) -> SentimentResult {
        crate::analyze_with(self, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lists_are_disjoint() {
        let lexicon = Lexicon::default_lexicon();
        for (i, a) in WORD_CATEGORIES.iter().enumerate() {
            for b in WORD_CATEGORIES.iter().skip(i + 1) {
                let shared: Vec<&String> =
                    lexicon.words(*a).intersection(lexicon.words(*b)).collect();
                assert!(shared.is_empty(), "{} / {}: {:?}", a, b, shared);
            }
        }
    }

    #[test]
    fn default_lists_are_tokenizer_clean() {
        let lexicon = Lexicon::default_lexicon();
        for category in WORD_CATEGORIES {
            for w in lexicon.words(category) {
                assert!(w.len() >= 2, "{}", w);
                assert_eq!(crate::tokenize(w), vec![w.clone()]);
            }
        }
    }

    #[test]
    fn default_lists_are_loaded_once() {
        assert_eq!(POSITIVE_WORDS.len(), Lexicon::default_lexicon().positive.len());
        assert!(std::ptr::eq(
            Lexicon::default_lexicon(),
            Lexicon::default_lexicon()
        ));
    }

    #[test]
    fn membership() {
        let lexicon = Lexicon::default_lexicon();
        assert!(lexicon.is_positive("supportive"));
        assert!(lexicon.is_negative("understaffed"));
        assert!(lexicon.is_intensifier("very"));
        assert!(lexicon.is_negator("dont"));
        assert!(!lexicon.is_positive("nice"));
        // Lookups are done on lowercased tokens only.
        assert!(!lexicon.is_positive("Good"));
    }

    const WORD_CATEGORIES: [WordCategory; 4] = [
        WordCategory::Positive,
        WordCategory::Negative,
        WordCategory::Intensifier,
        WordCategory::Negator,
    ];
}
