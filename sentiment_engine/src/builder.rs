use log::debug;
use std::collections::HashMap;

pub use crate::config::*;
use crate::lexicon::Lexicon;

/// A builder for custom lexicons.
///
/// Words are lowercased when added. The checks are applied in [`LexiconBuilder::build`].
///
/// ```
/// use sentiment_engine::builder::LexiconBuilder;
/// # use sentiment_engine::LexiconError;
///
/// let lexicon = LexiconBuilder::from_default()
///     .positive(&["Kudos"])
///     .negative(&["layoffs"])
///     .build()?;
///
/// assert!(lexicon.is_positive("kudos"));
/// assert_eq!(lexicon.analyze("more layoffs").label.as_str(), "very negative");
///
/// # Ok::<(), LexiconError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct LexiconBuilder {
    pub(crate) _entries: Vec<(WordCategory, String)>,
}

impl LexiconBuilder {
    /// An empty lexicon: every text scores as neutral.
    pub fn new() -> LexiconBuilder {
        LexiconBuilder::default()
    }

    /// Starts from the built-in word lists.
    pub fn from_default() -> LexiconBuilder {
        let lexicon = Lexicon::default_lexicon();
        let mut builder = LexiconBuilder::new();
        for category in [
            WordCategory::Positive,
            WordCategory::Negative,
            WordCategory::Intensifier,
            WordCategory::Negator,
        ] {
            let mut words: Vec<&String> = lexicon.words(category).iter().collect();
            // Stable order, so that errors are reported deterministically.
            words.sort();
            for w in words {
                builder._entries.push((category, w.clone()));
            }
        }
        builder
    }

    pub fn positive<S: AsRef<str>>(self, words: &[S]) -> LexiconBuilder {
        self.words(WordCategory::Positive, words)
    }

    pub fn negative<S: AsRef<str>>(self, words: &[S]) -> LexiconBuilder {
        self.words(WordCategory::Negative, words)
    }

    pub fn intensifiers<S: AsRef<str>>(self, words: &[S]) -> LexiconBuilder {
        self.words(WordCategory::Intensifier, words)
    }

    pub fn negators<S: AsRef<str>>(self, words: &[S]) -> LexiconBuilder {
        self.words(WordCategory::Negator, words)
    }

    pub fn words<S: AsRef<str>>(mut self, category: WordCategory, words: &[S]) -> LexiconBuilder {
        for w in words {
            self.add_word(category, w.as_ref());
        }
        self
    }

    pub fn add_word(&mut self, category: WordCategory, word: &str) {
        self._entries.push((category, normalize_word(word)));
    }

    /// Removes the words from all the categories.
    pub fn remove<S: AsRef<str>>(mut self, words: &[S]) -> LexiconBuilder {
        for w in words {
            let w = normalize_word(w.as_ref());
            self._entries.retain(|(_, existing)| *existing != w);
        }
        self
    }

    pub fn build(self) -> Result<Lexicon, LexiconError> {
        let mut seen: HashMap<String, WordCategory> = HashMap::new();
        let mut lexicon = Lexicon::default();
        for (category, word) in self._entries {
            if !word.chars().all(crate::is_word_char) {
                return Err(LexiconError::InvalidWord(word));
            }
            if word.len() < 2 {
                return Err(LexiconError::WordTooShort(word));
            }
            match seen.get(&word) {
                Some(first) if *first != category => {
                    return Err(LexiconError::OverlappingCategories {
                        word,
                        first: *first,
                        second: category,
                    });
                }
                Some(_) => continue,
                None => {}
            }
            seen.insert(word.clone(), category);
            match category {
                WordCategory::Positive => lexicon.positive.insert(word),
                WordCategory::Negative => lexicon.negative.insert(word),
                WordCategory::Intensifier => lexicon.intensifiers.insert(word),
                WordCategory::Negator => lexicon.negators.insert(word),
            };
        }
        debug!(
            "build: lexicon with {} positive, {} negative, {} intensifiers, {} negators",
            lexicon.positive.len(),
            lexicon.negative.len(),
            lexicon.intensifiers.len(),
            lexicon.negators.len()
        );
        Ok(lexicon)
    }
}

fn normalize_word(word: &str) -> String {
    word.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lexicon_round_trips() {
        let lexicon = LexiconBuilder::from_default().build().unwrap();
        assert_eq!(&lexicon, Lexicon::default_lexicon());
    }

    #[test]
    fn empty_lexicon_is_neutral() {
        let lexicon = LexiconBuilder::new().build().unwrap();
        let res = lexicon.analyze("very good, not bad");
        assert_eq!(res.score, 0.0);
        assert_eq!(res.confidence, 0.0);
        assert_eq!(res.label, SentimentLabel::Neutral);
        assert_eq!(res.details.unwrap().total_words, 4);
    }

    #[test]
    fn words_are_lowercased() {
        let lexicon = LexiconBuilder::new()
            .positive(&[" Stellar "])
            .intensifiers(&["MEGA"])
            .build()
            .unwrap();
        assert!(lexicon.is_positive("stellar"));
        assert_eq!(lexicon.analyze("Mega stellar!").score, 1.0);
    }

    #[test]
    fn removed_words_are_not_scored() {
        let lexicon = LexiconBuilder::from_default()
            .remove(&["pressure"])
            .build()
            .unwrap();
        assert!(!lexicon.is_negative("pressure"));
        assert_eq!(lexicon.analyze("pressure").label, SentimentLabel::Neutral);
    }

    #[test]
    fn duplicates_in_one_category_are_accepted() {
        let lexicon = LexiconBuilder::from_default()
            .positive(&["good", "Good"])
            .build()
            .unwrap();
        assert!(lexicon.is_positive("good"));
    }

    #[test]
    fn overlapping_categories_are_rejected() {
        let res = LexiconBuilder::from_default().negators(&["good"]).build();
        assert_eq!(
            res,
            Err(LexiconError::OverlappingCategories {
                word: "good".to_string(),
                first: WordCategory::Positive,
                second: WordCategory::Negator,
            })
        );
    }

    #[test]
    fn short_words_are_rejected() {
        let res = LexiconBuilder::new().positive(&["a"]).build();
        assert_eq!(res, Err(LexiconError::WordTooShort("a".to_string())));
    }

    #[test]
    fn punctuated_words_are_rejected() {
        let res = LexiconBuilder::new().negators(&["don't"]).build();
        assert_eq!(res, Err(LexiconError::InvalidWord("don't".to_string())));
        let res = LexiconBuilder::new().positive(&["well done"]).build();
        assert_eq!(res, Err(LexiconError::InvalidWord("well done".to_string())));
    }
}
