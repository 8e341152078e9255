//! Text feature extraction.
//!
//! Counts are approximations tuned for social post copy: words come from a
//! whitespace split, sentences from period-splitting, emoji from a curated
//! set rather than the full Unicode ranges.

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::sentiment::{Sentiment, SentimentAnalyzer};

/// Curated emoji set the extractor recognizes.
const EMOJIS: &str = "\u{1F680}\u{1F525}\u{1F4A1}\u{2728}\u{1F3AF}\u{1F4C8}\u{1F4CA}\u{1F4AA}\u{1F64C}\u{1F447}\u{1F449}\u{2705}\u{2764}\u{1F60A}\u{1F602}\u{1F914}\u{1F4AC}\u{1F4E2}\u{1F389}\u{2B50}\u{1F511}\u{1F4DD}\u{1F4F1}\u{1F3A5}\u{1F4F8}\u{1F517}\u{26A1}\u{1F44F}\u{1F929}\u{1F9E0}";

/// Subset that reads as a deliberate hook opener.
const HOOK_EMOJIS: &str = "\u{1F680}\u{1F525}\u{1F4A1}\u{2728}\u{1F3AF}\u{1F4E2}\u{26A1}\u{1F929}\u{1F9E0}\u{2B50}";

const CTA_KEYWORDS: [&str; 13] = [
    "comment", "share", "like", "follow", "click", "check", "learn", "read",
    "watch", "join", "dm", "thoughts", "agree",
];

const LIST_MARKERS: [&str; 7] = ["1.", "2.", "\u{2022}", "\u{25CF}", "\u{25AA}", "\u{2192}", "- "];

const HOOK_FALLBACK_CHARS: usize = 100;

fn emoji_set() -> &'static HashSet<char> {
    static SET: OnceLock<HashSet<char>> = OnceLock::new();
    SET.get_or_init(|| EMOJIS.chars().collect())
}

fn hook_emoji_set() -> &'static HashSet<char> {
    static SET: OnceLock<HashSet<char>> = OnceLock::new();
    SET.get_or_init(|| HOOK_EMOJIS.chars().collect())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextFeatures {
    pub word_count: usize,
    pub char_count: usize,
    pub line_breaks: usize,
    pub sentence_count: usize,
    pub hashtag_count: usize,
    pub mention_count: usize,
    pub url_count: usize,
    pub question_marks: usize,
    pub exclamation_marks: usize,
    pub emoji_count: usize,
    pub polarity: f64,
    pub subjectivity: f64,
    pub hook_length: usize,
    pub hook_has_number: bool,
    pub hook_has_emoji: bool,
    pub hook_has_question: bool,
    pub has_cta: bool,
    pub has_list: bool,
}

pub fn extract_text_features(text: &str, analyzer: &dyn SentimentAnalyzer) -> TextFeatures {
    let lowercase = text.to_lowercase();

    let mut question_marks = 0usize;
    let mut exclamation_marks = 0usize;
    let mut line_breaks = 0usize;
    let mut emoji_count = 0usize;

    for ch in text.chars() {
        match ch {
            '?' => question_marks += 1,
            '!' => exclamation_marks += 1,
            '\n' => line_breaks += 1,
            _ => {
                if emoji_set().contains(&ch) {
                    emoji_count += 1;
                }
            }
        }
    }

    let hashtag_count = count_tagged_words(text, '#');
    let mention_count = count_tagged_words(text, '@');
    let url_count = lowercase.matches("http://").count() + lowercase.matches("https://").count();

    let sentence_count = text
        .split('.')
        .filter(|segment| !segment.trim().is_empty())
        .count();

    let hook = extract_hook(text);
    let hook_length = hook.chars().count();
    let hook_has_number = hook.chars().any(|c| c.is_ascii_digit());
    let hook_has_emoji = hook.chars().any(|c| hook_emoji_set().contains(&c));
    let hook_has_question = hook.contains('?');

    let has_cta = CTA_KEYWORDS.iter().any(|word| lowercase.contains(word));
    let has_list = LIST_MARKERS.iter().any(|marker| text.contains(marker));

    let sentiment = analyzer.analyze(text).unwrap_or_else(|err| {
        warn!("sentiment analysis failed, using neutral defaults: {}", err);
        Sentiment::neutral()
    });

    TextFeatures {
        word_count: text.split_whitespace().count(),
        char_count: text.chars().count(),
        line_breaks,
        sentence_count,
        hashtag_count,
        mention_count,
        url_count,
        question_marks,
        exclamation_marks,
        emoji_count,
        polarity: sentiment.polarity,
        subjectivity: sentiment.subjectivity,
        hook_length,
        hook_has_number,
        hook_has_emoji,
        hook_has_question,
        has_cta,
        has_list,
    }
}

/// The hook is the first line when the text has one, otherwise the first
/// 100 characters.
fn extract_hook(text: &str) -> &str {
    if let Some((first_line, _)) = text.split_once('\n') {
        return first_line;
    }
    match text.char_indices().nth(HOOK_FALLBACK_CHARS) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

/// Counts `#word` / `@word` style tags: the sigil only counts when an
/// alphanumeric character follows it.
fn count_tagged_words(text: &str, sigil: char) -> usize {
    let mut count = 0usize;
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == sigil {
            if let Some(next) = chars.peek() {
                if next.is_alphanumeric() {
                    count += 1;
                }
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::LexiconAnalyzer;

    #[test]
    fn counts_tags_and_urls() {
        let features = extract_text_features(
            "Launch day! #rustlang #opensource ping @alice https://example.com",
            &LexiconAnalyzer,
        );
        assert_eq!(features.hashtag_count, 2);
        assert_eq!(features.mention_count, 1);
        assert_eq!(features.url_count, 1);
        assert_eq!(features.exclamation_marks, 1);
    }

    #[test]
    fn bare_sigils_do_not_count() {
        let features = extract_text_features("a # b @ c", &LexiconAnalyzer);
        assert_eq!(features.hashtag_count, 0);
        assert_eq!(features.mention_count, 0);
    }

    #[test]
    fn hook_is_first_line_when_multiline() {
        let features = extract_text_features("Why 3 tools changed my week?\nbody text", &LexiconAnalyzer);
        assert!(features.hook_has_number);
        assert!(features.hook_has_question);
        assert_eq!(features.hook_length, "Why 3 tools changed my week?".chars().count());
    }

    #[test]
    fn hook_falls_back_to_first_100_chars() {
        let text = "a".repeat(250);
        let features = extract_text_features(&text, &LexiconAnalyzer);
        assert_eq!(features.hook_length, 100);
    }

    #[test]
    fn detects_cta_and_list() {
        let features = extract_text_features(
            "What do you think? Drop a comment below\n1. first\n2. second",
            &LexiconAnalyzer,
        );
        assert!(features.has_cta);
        assert!(features.has_list);
        assert_eq!(features.line_breaks, 2);
    }

    #[test]
    fn sentences_split_on_periods() {
        let features = extract_text_features("One. Two. Three trailing", &LexiconAnalyzer);
        assert_eq!(features.sentence_count, 3);
        let features = extract_text_features("No periods here", &LexiconAnalyzer);
        assert_eq!(features.sentence_count, 1);
    }

    #[test]
    fn curated_emoji_only() {
        let features = extract_text_features("\u{1F680} shipping \u{00E9}", &LexiconAnalyzer);
        assert_eq!(features.emoji_count, 1);
    }
}
