//! Lexicon-based sentiment scoring for post text.
//!
//! The analyzer sits behind a trait so the feature extractor never depends
//! on a concrete implementation; a model-backed analyzer can be swapped in
//! without touching the feature contract.

use std::collections::HashSet;
use std::sync::OnceLock;

use crate::errors::Result;

/// Polarity in [-1, 1], subjectivity in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sentiment {
    pub polarity: f64,
    pub subjectivity: f64,
}

impl Sentiment {
    /// Neutral default used when analysis cannot run.
    pub fn neutral() -> Self {
        Self {
            polarity: 0.0,
            subjectivity: 0.5,
        }
    }
}

pub trait SentimentAnalyzer {
    fn analyze(&self, text: &str) -> Result<Sentiment>;
}

const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "love", "amazing", "wonderful", "happy",
    "fantastic", "awesome", "best", "excited", "proud", "win", "success",
    "beautiful", "incredible", "perfect", "helpful", "free", "easy",
    "inspiring", "thrilled", "grateful", "brilliant", "powerful",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "hate", "horrible", "worst", "sad", "angry",
    "disappointed", "poor", "fail", "failure", "problem", "hard", "difficult",
    "wrong", "broken", "annoying", "waste", "scam", "boring", "useless",
    "painful", "ugly", "never",
];

fn positive_set() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| POSITIVE_WORDS.iter().copied().collect())
}

fn negative_set() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| NEGATIVE_WORDS.iter().copied().collect())
}

/// Word-list analyzer. Polarity is the signed ratio of positive to negative
/// hits; subjectivity is sentiment-word density, scaled so roughly a quarter
/// of the words being sentiment-laden saturates to 1.0.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconAnalyzer;

impl SentimentAnalyzer for LexiconAnalyzer {
    fn analyze(&self, text: &str) -> Result<Sentiment> {
        let lowercase = text.to_lowercase();
        let mut positive = 0usize;
        let mut negative = 0usize;
        let mut words = 0usize;

        for token in lowercase.split_whitespace() {
            let word: String = token
                .chars()
                .filter(|c| c.is_ascii_alphabetic())
                .collect();
            if word.is_empty() {
                continue;
            }
            words += 1;
            if positive_set().contains(word.as_str()) {
                positive += 1;
            } else if negative_set().contains(word.as_str()) {
                negative += 1;
            }
        }

        if words == 0 {
            return Ok(Sentiment::neutral());
        }

        let hits = positive + negative;
        let polarity = if hits == 0 {
            0.0
        } else {
            (positive as f64 - negative as f64) / hits as f64
        };
        let subjectivity = ((hits * 4) as f64 / words as f64).min(1.0);

        Ok(Sentiment {
            polarity,
            subjectivity,
        })
    }
}
