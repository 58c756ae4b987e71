// ********* Output data structures ***********

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::Display;

/// The five sentiment buckets, from the most positive to the most negative.
///
/// The serialized form (and the `Display` form) is the lowercase label used in
/// structured data, for example `"very positive"`. The capitalized form used by
/// dashboards is available through [`SentimentLabel::display_name`].
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum SentimentLabel {
    #[serde(rename = "very positive")]
    VeryPositive,
    #[serde(rename = "positive")]
    Positive,
    #[serde(rename = "neutral")]
    Neutral,
    #[serde(rename = "negative")]
    Negative,
    #[serde(rename = "very negative")]
    VeryNegative,
}

impl SentimentLabel {
    pub const ALL: [SentimentLabel; 5] = [
        SentimentLabel::VeryPositive,
        SentimentLabel::Positive,
        SentimentLabel::Neutral,
        SentimentLabel::Negative,
        SentimentLabel::VeryNegative,
    ];

    /// The lowercase label, as returned in `SentimentResult::label`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::VeryPositive => "very positive",
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
            SentimentLabel::VeryNegative => "very negative",
        }
    }

    /// The capitalized label shown in user interfaces.
    pub fn display_name(&self) -> &'static str {
        match self {
            SentimentLabel::VeryPositive => "Very Positive",
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::VeryNegative => "Very Negative",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            SentimentLabel::VeryPositive => VERY_POSITIVE_COLOR,
            SentimentLabel::Positive => POSITIVE_COLOR,
            SentimentLabel::Neutral => NEUTRAL_COLOR,
            SentimentLabel::Negative => NEGATIVE_COLOR,
            SentimentLabel::VeryNegative => VERY_NEGATIVE_COLOR,
        }
    }
}

impl Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Word counts behind a score.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SentimentDetails {
    #[serde(rename = "positiveWords")]
    pub positive_words: u64,
    #[serde(rename = "negativeWords")]
    pub negative_words: u64,
    #[serde(rename = "totalWords")]
    pub total_words: u64,
}

/// The outcome of analyzing one piece of text.
#[derive(PartialEq, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Accumulated polarity divided by the number of counted words.
    pub score: f64,
    pub label: SentimentLabel,
    /// Fraction of the counted words that carried a polarity.
    pub confidence: f64,
    /// Absent when the input was missing or blank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<SentimentDetails>,
}

impl SentimentResult {
    /// The result returned for missing, empty or blank input.
    pub const NEUTRAL: SentimentResult = SentimentResult {
        score: 0.0,
        label: SentimentLabel::Neutral,
        confidence: 0.0,
        details: None,
    };
}

// ********* Thresholds **********

// Comparisons against these values are strict: a score equal to a threshold
// falls in the bucket closer to neutral.
pub const VERY_POSITIVE_THRESHOLD: f64 = 0.12;
pub const POSITIVE_THRESHOLD: f64 = 0.03;
pub const NEGATIVE_THRESHOLD: f64 = -0.03;
pub const VERY_NEGATIVE_THRESHOLD: f64 = -0.12;

pub const VERY_POSITIVE_COLOR: &str = "#2e7d32";
pub const POSITIVE_COLOR: &str = "#66bb6a";
pub const NEUTRAL_COLOR: &str = "#9e9e9e";
pub const NEGATIVE_COLOR: &str = "#ef5350";
pub const VERY_NEGATIVE_COLOR: &str = "#c62828";

// ********* Lexicon configuration **********

/// The category a lexicon word belongs to.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Ord, PartialOrd)]
pub enum WordCategory {
    Positive,
    Negative,
    /// Doubles the weight of the next sentiment word.
    Intensifier,
    /// Flips the polarity of the next sentiment word.
    Negator,
}

impl Display for WordCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            WordCategory::Positive => "positive",
            WordCategory::Negative => "negative",
            WordCategory::Intensifier => "intensifier",
            WordCategory::Negator => "negator",
        };
        write!(f, "{}", s)
    }
}

/// Errors that prevent a lexicon from being built.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum LexiconError {
    /// The word has fewer than 2 characters and would never be scored.
    WordTooShort(String),
    /// The word contains characters that are stripped before lookup.
    InvalidWord(String),
    /// The same word was registered in two categories.
    OverlappingCategories {
        word: String,
        first: WordCategory,
        second: WordCategory,
    },
}

impl Error for LexiconError {}

impl Display for LexiconError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LexiconError::WordTooShort(w) => {
                write!(f, "lexicon word {:?} is shorter than 2 characters", w)
            }
            LexiconError::InvalidWord(w) => write!(
                f,
                "lexicon word {:?} contains characters other than letters, digits or underscores",
                w
            ),
            LexiconError::OverlappingCategories {
                word,
                first,
                second,
            } => write!(
                f,
                "lexicon word {:?} is both a {} and a {} word",
                word, first, second
            ),
        }
    }
}
