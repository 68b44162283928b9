use crate::lexicon::{Category, Lexicon};

/// Tally of classified tokens. All four categories are always present, so
/// callers never see a partial mapping; tokens outside every lexicon count
/// toward none of them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CategoryCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub sexual: usize,
}

impl CategoryCounts {
    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Positive => self.positive,
            Category::Negative => self.negative,
            Category::Neutral => self.neutral,
            Category::Sexual => self.sexual,
        }
    }

    fn bump(&mut self, category: Category) {
        match category {
            Category::Positive => self.positive += 1,
            Category::Negative => self.negative += 1,
            Category::Neutral => self.neutral += 1,
            Category::Sexual => self.sexual += 1,
        }
    }

    /// The four counts in priority order, ready for chart labels.
    pub fn entries(&self) -> [(Category, usize); 4] {
        Category::PRIORITY.map(|category| (category, self.get(category)))
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral + self.sexual
    }
}

/// Counts each token under the first category whose lexicon contains it.
pub fn categorize(tokens: &[String], lexicon: &Lexicon) -> CategoryCounts {
    let mut counts = CategoryCounts::default();
    for token in tokens {
        if let Some(category) = lexicon.classify(token) {
            counts.bump(category);
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    #[test]
    fn counts_are_case_insensitive() {
        let lexicon = Lexicon::default();
        let counts = categorize(&tokenize("GOOD good GoOd"), &lexicon);
        assert_eq!(
            counts,
            CategoryCounts {
                positive: 3,
                negative: 0,
                neutral: 0,
                sexual: 0,
            }
        );
    }

    #[test]
    fn unmatched_tokens_count_nowhere() {
        let lexicon = Lexicon::default();
        let tokens = tokenize("a perfectly unremarkable sentence");
        let counts = categorize(&tokens, &lexicon);
        assert_eq!(counts, CategoryCounts::default());
    }

    #[test]
    fn total_never_exceeds_token_count() {
        let lexicon = Lexicon::default();
        let tokens = tokenize("good bad average erotic good plus some filler words");
        let counts = categorize(&tokens, &lexicon);
        assert!(counts.total() <= tokens.len());
        assert_eq!(counts.positive, 2);
        assert_eq!(counts.negative, 1);
        assert_eq!(counts.neutral, 1);
        assert_eq!(counts.sexual, 1);
    }

    #[test]
    fn entries_always_carry_four_keys() {
        let entries = CategoryCounts::default().entries();
        assert_eq!(entries.len(), 4);
        for (_, count) in entries {
            assert_eq!(count, 0);
        }
    }

    #[test]
    fn duplicate_lexicon_entries_respect_priority() {
        let mut lexicon = Lexicon::default();
        lexicon.neutral.insert("bad".to_owned());
        let counts = categorize(&tokenize("bad bad"), &lexicon);
        assert_eq!(counts.negative, 2);
        assert_eq!(counts.neutral, 0);
    }
}
