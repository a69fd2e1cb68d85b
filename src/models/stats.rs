//! Derived text statistics
//!
//! Pure function of the rendered plain text. Never stored; recomputed from
//! the current [`EditorSnapshot`](super::snapshot::EditorSnapshot) on demand.

use serde::{Deserialize, Serialize};

/// Word, character and sentence counts for a piece of plain text
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextStatistics {
    pub words: usize,
    pub characters: usize,
    pub sentences: usize,
}

impl TextStatistics {
    pub fn from_text(text: &str) -> Self {
        Self {
            words: count_words(text),
            characters: count_characters(text),
            sentences: count_sentences(text),
        }
    }

    /// One-line summary for the stats pane
    pub fn summary(&self) -> String {
        format!(
            "{} · {} · {}",
            plural(self.words, "word"),
            plural(self.characters, "character"),
            plural(self.sentences, "sentence")
        )
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

/// Whitespace-delimited tokens
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Unicode scalar values in the untrimmed text
pub fn count_characters(text: &str) -> usize {
    text.chars().count()
}

/// Segments between runs of `.`, `!` and `?` that hold any non-whitespace.
///
/// Naive on purpose: abbreviations and decimals split sentences too.
pub fn count_sentences(text: &str) -> usize {
    text.split(|c: char| matches!(c, '.' | '!' | '?'))
        .filter(|segment| !segment.trim().is_empty())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        assert_eq!(TextStatistics::from_text(""), TextStatistics::default());
    }

    #[test]
    fn test_whitespace_only_has_no_words_but_counts_characters() {
        let stats = TextStatistics::from_text("  \n\t ");
        assert_eq!(stats.words, 0);
        assert_eq!(stats.characters, 5);
        assert_eq!(stats.sentences, 0);
    }

    #[test]
    fn test_words_split_on_whitespace_runs() {
        assert_eq!(count_words("one"), 1);
        assert_eq!(count_words("  one   two\nthree\t four  "), 4);
    }

    #[test]
    fn test_characters_are_not_trimmed() {
        assert_eq!(count_characters(" ab "), 4);
        assert_eq!(count_characters("héllo"), 5);
    }

    #[test]
    fn test_sentences() {
        assert_eq!(count_sentences(""), 0);
        assert_eq!(count_sentences("Hello."), 1);
        assert_eq!(count_sentences("Hi! Bye? Ok."), 3);
        assert_eq!(count_sentences("no punctuation"), 1);
        assert_eq!(count_sentences("Wait... what?!"), 2);
        assert_eq!(count_sentences("..."), 0);
    }

    #[test]
    fn test_decimals_split_sentences() {
        // Naive splitting: "3.5" is two segments
        assert_eq!(count_sentences("It costs 3.5 dollars"), 2);
    }

    #[test]
    fn test_summary_pluralizes() {
        let one = TextStatistics { words: 1, characters: 1, sentences: 1 };
        assert_eq!(one.summary(), "1 word · 1 character · 1 sentence");
        assert_eq!(
            TextStatistics::default().summary(),
            "0 words · 0 characters · 0 sentences"
        );
    }
}
