use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Classification buckets for counted words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Positive,
    Negative,
    Neutral,
    Sexual,
}

impl Category {
    /// Membership is tested in this order and the first matching set wins,
    /// so a word configured into two sets only ever counts once.
    pub const PRIORITY: [Category; 4] = [
        Category::Positive,
        Category::Negative,
        Category::Neutral,
        Category::Sexual,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Positive => "positive",
            Category::Negative => "negative",
            Category::Neutral => "neutral",
            Category::Sexual => "sexual",
        }
    }
}

/// One word set per category. Entries are kept lowercase; membership tests
/// assume the token side is already lowercased by the tokenizer. Built once
/// at startup and shared read-only for the life of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicon {
    pub positive: BTreeSet<String>,
    pub negative: BTreeSet<String>,
    pub neutral: BTreeSet<String>,
    pub sexual: BTreeSet<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Lexicon {
            positive: word_set(&[
                "good",
                "great",
                "excellent",
                "positive",
                "fortunate",
                "correct",
                "superior",
            ]),
            negative: word_set(&["bad", "poor", "wrong", "negative", "unfortunate", "inferior"]),
            neutral: word_set(&["average", "normal", "standard", "mediocre", "neutral"]),
            sexual: word_set(&["sex", "sexual", "nude", "porn", "erotic"]),
        }
    }
}

impl Lexicon {
    pub fn words(&self, category: Category) -> &BTreeSet<String> {
        match category {
            Category::Positive => &self.positive,
            Category::Negative => &self.negative,
            Category::Neutral => &self.neutral,
            Category::Sexual => &self.sexual,
        }
    }

    /// The first category in priority order whose set contains `token`.
    pub fn classify(&self, token: &str) -> Option<Category> {
        Category::PRIORITY
            .into_iter()
            .find(|&category| self.words(category).contains(token))
    }

    /// Lowercases every entry. Hand-edited lexicon files may carry mixed
    /// case, and matching is defined on lowercase words only.
    pub fn normalized(self) -> Self {
        Lexicon {
            positive: lowercase_set(self.positive),
            negative: lowercase_set(self.negative),
            neutral: lowercase_set(self.neutral),
            sexual: lowercase_set(self.sexual),
        }
    }
}

fn word_set(words: &[&str]) -> BTreeSet<String> {
    words.iter().map(|word| (*word).to_owned()).collect()
}

fn lowercase_set(words: BTreeSet<String>) -> BTreeSet<String> {
    words.into_iter().map(|word| word.to_lowercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sets_cover_all_categories() {
        let lexicon = Lexicon::default();
        for category in Category::PRIORITY {
            assert!(!lexicon.words(category).is_empty());
        }
        assert_eq!(lexicon.classify("good"), Some(Category::Positive));
        assert_eq!(lexicon.classify("bad"), Some(Category::Negative));
        assert_eq!(lexicon.classify("average"), Some(Category::Neutral));
        assert_eq!(lexicon.classify("erotic"), Some(Category::Sexual));
        assert_eq!(lexicon.classify("sandwich"), None);
    }

    #[test]
    fn duplicated_word_resolves_to_higher_priority_set() {
        let mut lexicon = Lexicon::default();
        lexicon.negative.insert("good".to_owned());
        lexicon.sexual.insert("average".to_owned());
        assert_eq!(lexicon.classify("good"), Some(Category::Positive));
        assert_eq!(lexicon.classify("average"), Some(Category::Neutral));
    }

    #[test]
    fn normalized_lowercases_entries() {
        let mut lexicon = Lexicon::default();
        lexicon.positive.insert("Stellar".to_owned());
        let lexicon = lexicon.normalized();
        assert!(lexicon.positive.contains("stellar"));
        assert!(!lexicon.positive.contains("Stellar"));
        assert_eq!(lexicon.classify("stellar"), Some(Category::Positive));
    }

    #[test]
    fn priority_order_is_stable() {
        let names = Category::PRIORITY.map(|category| category.as_str());
        assert_eq!(names, ["positive", "negative", "neutral", "sexual"]);
    }
}
