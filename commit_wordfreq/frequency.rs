use std::collections::HashMap;

/// Words shorter than this are dropped during tokenization.
pub const MIN_WORD_LEN: usize = 3;

/// A word and how many times it appeared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

impl WordCount {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Keywords that mark a commit message as bug-related, matched as substrings.
pub const BUG_KEYWORDS: [&str; 5] = ["bug", "fix", "error", "issue", "defect"];

/// Word separator: Unicode whitespace plus the ASCII information
/// separators U+001C..U+001F, which `char::is_whitespace` leaves out.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Strip everything but ASCII letters and separators, then lowercase.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|&c| c.is_ascii_alphabetic() || is_separator(c))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Split normalized text into words, skipping the short ones.
pub fn tokenize(normalized: &str) -> impl Iterator<Item = &str> {
    normalized
        .split(is_separator)
        .filter(|w| !w.is_empty() && w.len() >= MIN_WORD_LEN)
}

pub fn is_bug_related(message: &str) -> bool {
    let lower = message.to_lowercase();
    BUG_KEYWORDS.iter().any(|k| lower.contains(k))
}

/// Word counts that remember the order in which each word was first seen.
#[derive(Debug, Default, Clone)]
pub struct FrequencyTable {
    entries: Vec<WordCount>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tokens<'a, I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut table = Self::new();
        for token in tokens {
            table.add(token);
        }
        table
    }

    pub fn add(&mut self, word: &str) {
        match self.index.get(word) {
            Some(&slot) => self.entries[slot].count += 1,
            None => {
                self.index.insert(word.to_string(), self.entries.len());
                self.entries.push(WordCount::new(word, 1));
            }
        }
    }

    pub fn count(&self, word: &str) -> usize {
        self.index
            .get(word)
            .map_or(0, |&slot| self.entries[slot].count)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Top `n` words by count, descending. Equal counts keep first-seen order.
    pub fn most_common(&self, n: usize) -> Vec<WordCount> {
        let mut sorted = self.entries.clone();
        // stable sort: ties stay in insertion order
        sorted.sort_by(|a, b| b.count.cmp(&a.count));
        sorted.truncate(n);
        sorted
    }
}

/// Normalize, tokenize and count in one go.
pub fn count_words(text: &str) -> FrequencyTable {
    let normalized = normalize(text);
    FrequencyTable::from_tokens(tokenize(&normalized))
}
