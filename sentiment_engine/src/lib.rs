pub mod builder;
mod config;
mod lexicon;
pub mod manual;

use log::debug;

pub use crate::config::*;
pub use crate::lexicon::Lexicon;

// **** Private structures ****

// Running totals while walking the tokens of one text.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
struct Tally {
    score: i64,
    positive_count: u64,
    negative_count: u64,
    word_count: u64,
}

/// Scores a text with the built-in lexicon.
///
/// `None`, empty and blank inputs all return [`SentimentResult::NEUTRAL`], which
/// carries no `details`.
///
/// ```
/// use sentiment_engine::{analyze, SentimentLabel};
///
/// let res = analyze("not good");
/// assert_eq!(res.score, -0.5);
/// assert_eq!(res.label, SentimentLabel::VeryNegative);
///
/// assert_eq!(analyze(None).details, None);
/// ```
pub fn analyze<'a>(text: impl Into<Option<&'a str>>) -> SentimentResult {
    analyze_with(Lexicon::default_lexicon(), text)
}

/// Scores a text with the given lexicon.
///
/// Every token of at least 2 characters counts as a word. A sentiment word adds
/// (or removes) one point, two points if the token right before it is an
/// intensifier, and its polarity is flipped if that token is a negator. The
/// score is the sum divided by the number of words.
///
/// The result is not clamped. With a lexicon whose categories are disjoint (the
/// only kind the builder produces) it stays within `[-1, 1]`, since every doubled
/// word follows an intensifier that counts as a word but carries no polarity.
pub fn analyze_with<'a>(lexicon: &Lexicon, text: impl Into<Option<&'a str>>) -> SentimentResult {
    let text = match text.into() {
        Some(t) if !t.trim_matches(is_separator).is_empty() => t,
        x => {
            debug!("analyze: no content to analyze in {:?}", x);
            return SentimentResult::NEUTRAL;
        }
    };

    let tokens = tokenize(text);
    let tally = score_tokens(lexicon, &tokens);
    debug!("analyze: tokens: {:?} tally: {:?}", tokens, tally);

    let (score, confidence) = if tally.word_count > 0 {
        let words = tally.word_count as f64;
        (
            tally.score as f64 / words,
            (tally.positive_count + tally.negative_count) as f64 / words,
        )
    } else {
        (0.0, 0.0)
    };

    SentimentResult {
        score,
        label: classify(score),
        confidence,
        details: Some(SentimentDetails {
            positive_words: tally.positive_count,
            negative_words: tally.negative_count,
            total_words: tally.word_count,
        }),
    }
}

/// Splits a text into lowercase tokens.
///
/// Every character other than an ASCII letter, digit, underscore or whitespace is
/// dropped first, so `"don't"` becomes the single token `"dont"` and accented
/// letters disappear from their words.
///
/// ```
/// assert_eq!(sentiment_engine::tokenize("Not  BAD, isn't it?"), vec!["not", "bad", "isnt", "it"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| is_word_char(*c) || is_separator(*c))
        .collect();
    cleaned
        .split(is_separator)
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect()
}

/// The bucket of a score.
pub fn classify(score: f64) -> SentimentLabel {
    if score > VERY_POSITIVE_THRESHOLD {
        SentimentLabel::VeryPositive
    } else if score > POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if score < VERY_NEGATIVE_THRESHOLD {
        SentimentLabel::VeryNegative
    } else if score < NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// The display color of a score, as a hex RGB string.
pub fn color_for(score: f64) -> &'static str {
    classify(score).color()
}

/// The capitalized display label of a score, for example `"Very Positive"`.
///
/// Note that `analyze(..).label` uses the lowercase form instead.
pub fn label_for(score: f64) -> &'static str {
    classify(score).display_name()
}

fn score_tokens(lexicon: &Lexicon, tokens: &[String]) -> Tally {
    let mut tally = Tally::default();
    for (i, token) in tokens.iter().enumerate() {
        if token.len() < 2 {
            continue;
        }
        tally.word_count += 1;

        // Modifiers look at the raw previous token, even one too short to be counted.
        let previous: Option<&str> = if i > 0 {
            Some(tokens[i - 1].as_str())
        } else {
            None
        };
        let is_negated = previous.map_or(false, |p| lexicon.is_negator(p));
        let multiplier: i64 = if previous.map_or(false, |p| lexicon.is_intensifier(p)) {
            2
        } else {
            1
        };

        let polarity: i64 = if lexicon.is_positive(token) {
            1
        } else if lexicon.is_negative(token) {
            -1
        } else {
            continue;
        };
        let polarity = if is_negated { -polarity } else { polarity };

        tally.score += polarity * multiplier;
        if polarity > 0 {
            tally.positive_count += 1;
        } else {
            tally.negative_count += 1;
        }
    }
    tally
}

pub(crate) fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

// The whitespace class of ECMAScript regular expressions. It differs from
// `char::is_whitespace` on U+0085 (not a separator) and U+FEFF (a separator).
pub(crate) fn is_separator(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn details(text: &str) -> SentimentDetails {
        analyze(text).details.unwrap()
    }

    #[test]
    fn intensified_team_feedback() {
        init();
        let res = analyze("I really enjoy working with my team, they are very supportive.");
        assert!(matches!(
            res.label,
            SentimentLabel::Positive | SentimentLabel::VeryPositive
        ));
        let d = res.details.unwrap();
        assert!(d.positive_words >= 2);
        // "i" is too short to count.
        assert_eq!(d.total_words, 10);
        assert_eq!(res.score, 0.4);
        assert_eq!(res.confidence, 0.2);
    }

    #[test]
    fn workload_complaint() {
        init();
        let res = analyze("I feel overworked and understaffed in our department.");
        assert!(matches!(
            res.label,
            SentimentLabel::Negative | SentimentLabel::VeryNegative
        ));
        assert_eq!(res.score, -2.0 / 7.0);
        assert_eq!(details("I feel overworked and understaffed in our department.").negative_words, 2);
    }

    #[test]
    fn negated_positive() {
        init();
        let res = analyze("not good");
        assert_eq!(res.score, -0.5);
        assert_eq!(res.confidence, 0.5);
        assert_eq!(res.label, SentimentLabel::VeryNegative);
        assert_eq!(
            res.details,
            Some(SentimentDetails {
                positive_words: 0,
                negative_words: 1,
                total_words: 2
            })
        );
    }

    #[test]
    fn intensified_positive() {
        init();
        let res = analyze("very good");
        assert_eq!(res.score, 1.0);
        assert_eq!(res.label, SentimentLabel::VeryPositive);
        assert_eq!(res.details.unwrap().positive_words, 1);
    }

    #[test]
    fn no_lexicon_match() {
        init();
        let res = analyze("The weather is nice today.");
        assert_eq!(res.score, 0.0);
        assert_eq!(res.confidence, 0.0);
        assert_eq!(res.label, SentimentLabel::Neutral);
        assert_eq!(res.details.unwrap().total_words, 5);
    }

    #[test]
    fn degenerate_inputs() {
        init();
        for res in [
            analyze(""),
            analyze(None),
            analyze("   "),
            analyze("\t\n\u{00A0}\u{FEFF}"),
        ] {
            assert_eq!(res, SentimentResult::NEUTRAL);
            assert_eq!(res.details, None);
        }
    }

    #[test]
    fn punctuation_only_is_not_degenerate() {
        // Not blank, so it goes through the scoring path, with zero words.
        let res = analyze("?!...");
        assert_eq!(res.score, 0.0);
        assert_eq!(res.label, SentimentLabel::Neutral);
        assert_eq!(
            res.details,
            Some(SentimentDetails {
                positive_words: 0,
                negative_words: 0,
                total_words: 0
            })
        );
    }

    #[test]
    fn negated_negative() {
        let res = analyze("Not bad at all");
        assert_eq!(res.score, 0.25);
        let d = res.details.unwrap();
        assert_eq!(d.positive_words, 1);
        assert_eq!(d.negative_words, 0);
    }

    #[test]
    fn contraction_negates() {
        let res = analyze("I don't enjoy it");
        // i, dont, enjoy, it: "i" is skipped.
        assert_eq!(res.details.unwrap().total_words, 3);
        assert_eq!(res.score, -1.0 / 3.0);
    }

    #[test]
    fn short_tokens_are_not_counted_but_break_modifiers() {
        // "a" is not a word, but it still sits between "not" and "good".
        let res = analyze("not a good idea");
        let d = res.details.unwrap();
        assert_eq!(d.total_words, 3);
        assert_eq!(d.positive_words, 1);
        assert_eq!(res.score, 1.0 / 3.0);
        // Single letters are never sentiment words.
        assert_eq!(details("x y z").total_words, 0);
    }

    #[test]
    fn modifiers_only_reach_the_next_token() {
        let res = analyze("very much good");
        assert_eq!(res.score, 1.0 / 3.0);
        let res = analyze("not very good");
        // "good" follows "very" only: intensified, not negated.
        assert_eq!(res.score, 2.0 / 3.0);
        assert_eq!(res.details.unwrap().positive_words, 1);
    }

    #[test]
    fn negation_keeps_magnitude() {
        let plain = analyze("the team is very supportive");
        let negated = analyze("the team isnt very supportive");
        assert_eq!(plain.score, 2.0 / 5.0);
        assert_eq!(negated.score, 2.0 / 5.0);
        let negated = analyze("management is not supportive");
        assert_eq!(negated.score, -1.0 / 4.0);
    }

    #[test]
    fn score_stays_bounded() {
        for text in [
            "very good very great",
            "very good",
            "really terrible",
            "extremely bad so awful too stressful",
            "not bad not bad",
            "good great excellent",
        ] {
            let res = analyze(text);
            assert!(res.score.abs() <= 1.0, "{}: {:?}", text, res);
            assert!((0.0..=1.0).contains(&res.confidence), "{}: {:?}", text, res);
        }
        assert_eq!(analyze("very good very great").score, 1.0);
        assert_eq!(analyze("extremely bad so awful").score, -1.0);
    }

    #[test]
    fn case_and_punctuation_are_ignored() {
        assert_eq!(analyze("GREAT!!!"), analyze("great"));
        assert_eq!(analyze("Great, really GREAT."), analyze("great really great"));
    }

    #[test]
    fn non_ascii_letters_are_dropped() {
        // The accented letter is removed, leaving an unknown token.
        assert_eq!(tokenize("Très bien"), vec!["trs", "bien"]);
        assert_eq!(tokenize("naïve_user 42"), vec!["nave_user", "42"]);
    }

    #[test]
    fn tokenize_collapses_whitespace() {
        assert_eq!(tokenize("  not\t\tgood \n"), vec!["not", "good"]);
        assert_eq!(analyze("  not\t\tgood \n").score, -0.5);
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn label_thresholds() {
        assert_eq!(classify(0.5), SentimentLabel::VeryPositive);
        assert_eq!(classify(0.12), SentimentLabel::Positive);
        assert_eq!(classify(0.1), SentimentLabel::Positive);
        assert_eq!(classify(0.03), SentimentLabel::Neutral);
        assert_eq!(classify(0.0), SentimentLabel::Neutral);
        assert_eq!(classify(-0.03), SentimentLabel::Neutral);
        assert_eq!(classify(-0.05), SentimentLabel::Negative);
        assert_eq!(classify(-0.12), SentimentLabel::Negative);
        assert_eq!(classify(-0.13), SentimentLabel::VeryNegative);
        assert_eq!(classify(f64::NAN), SentimentLabel::Neutral);
    }

    #[test]
    fn display_helpers() {
        assert_eq!(label_for(0.5), "Very Positive");
        assert_eq!(color_for(0.5), VERY_POSITIVE_COLOR);
        assert_eq!(label_for(0.03), "Neutral");
        assert_eq!(color_for(0.03), NEUTRAL_COLOR);
        assert_eq!(label_for(0.05), "Positive");
        assert_eq!(label_for(-0.05), "Negative");
        assert_eq!(label_for(-0.12), "Negative");
        assert_eq!(color_for(-0.12), NEGATIVE_COLOR);
        assert_eq!(label_for(-2.0), "Very Negative");
        assert_eq!(color_for(f64::INFINITY), VERY_POSITIVE_COLOR);

        let colors: std::collections::HashSet<&str> =
            SentimentLabel::ALL.iter().map(|l| l.color()).collect();
        assert_eq!(colors.len(), 5);
    }

    #[test]
    fn two_label_forms() {
        let res = analyze("very good");
        assert_eq!(res.label.to_string(), "very positive");
        assert_eq!(label_for(res.score), "Very Positive");
    }

    #[test]
    fn result_json_shape() {
        let js = serde_json::to_value(analyze("not good")).unwrap();
        assert_eq!(
            js,
            serde_json::json!({
                "score": -0.5,
                "label": "very negative",
                "confidence": 0.5,
                "details": {"positiveWords": 0, "negativeWords": 1, "totalWords": 2}
            })
        );
        let js = serde_json::to_value(analyze("  ")).unwrap();
        assert_eq!(
            js,
            serde_json::json!({"score": 0.0, "label": "neutral", "confidence": 0.0})
        );
    }

    #[test]
    fn concurrent_calls() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| analyze("very supportive manager").score))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), 2.0 / 3.0);
        }
    }
}
