use crate::categorizer::{categorize, CategoryCounts};
use crate::lexicon::Lexicon;
use crate::tokenizer::tokenize;

/// The fixed page regions the analyzer understands, in the order their text
/// is concatenated for the combined category pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Title,
    Headings,
    Paragraphs,
}

impl SectionKind {
    pub const ORDER: [SectionKind; 3] = [
        SectionKind::Title,
        SectionKind::Headings,
        SectionKind::Paragraphs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Title => "title",
            SectionKind::Headings => "headings",
            SectionKind::Paragraphs => "paragraphs",
        }
    }
}

/// One extracted page region plus whether the request asked for it.
#[derive(Debug, Clone)]
pub struct TextSection {
    pub kind: SectionKind,
    pub included: bool,
    pub text: String,
}

impl TextSection {
    pub fn new(kind: SectionKind, included: bool, text: String) -> Self {
        Self {
            kind,
            included,
            text,
        }
    }
}

/// Classifies every token across the included sections, concatenated in the
/// fixed section order. Nothing included, or nothing but punctuation, comes
/// back as all zeroes rather than an error.
pub fn category_distribution(sections: &[TextSection], lexicon: &Lexicon) -> CategoryCounts {
    let combined = combined_text(sections);
    categorize(&tokenize(&combined), lexicon)
}

/// The included sections' text joined with single spaces, ordered by
/// `SectionKind::ORDER` regardless of how the slice was assembled.
pub fn combined_text(sections: &[TextSection]) -> String {
    SectionKind::ORDER
        .iter()
        .filter_map(|kind| {
            sections
                .iter()
                .find(|section| section.included && section.kind == *kind)
                .map(|section| section.text.as_str())
        })
        .collect::<Vec<&str>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(kind: SectionKind, included: bool, text: &str) -> TextSection {
        TextSection::new(kind, included, text.to_owned())
    }

    #[test]
    fn counts_only_included_sections() {
        let sections = vec![
            section(SectionKind::Title, true, "a good day"),
            section(SectionKind::Headings, false, "bad bad bad"),
            section(SectionKind::Paragraphs, true, "an average outcome"),
        ];
        let counts = category_distribution(&sections, &Lexicon::default());
        assert_eq!(counts.positive, 1);
        assert_eq!(counts.negative, 0);
        assert_eq!(counts.neutral, 1);
        assert_eq!(counts.sexual, 0);
    }

    #[test]
    fn concatenation_follows_fixed_order() {
        let sections = vec![
            section(SectionKind::Paragraphs, true, "third"),
            section(SectionKind::Title, true, "first"),
            section(SectionKind::Headings, true, "second"),
        ];
        assert_eq!(combined_text(&sections), "first second third");
    }

    #[test]
    fn nothing_included_yields_zero_counts() {
        let sections = vec![
            section(SectionKind::Title, false, "good"),
            section(SectionKind::Paragraphs, false, "bad"),
        ];
        let counts = category_distribution(&sections, &Lexicon::default());
        assert_eq!(counts, CategoryCounts::default());
    }

    #[test]
    fn empty_section_list_yields_zero_counts() {
        let counts = category_distribution(&[], &Lexicon::default());
        assert_eq!(counts, CategoryCounts::default());
    }

    #[test]
    fn word_split_across_sections_stays_two_tokens() {
        // the space join keeps "goo"+"d" from fusing into a lexicon word
        let sections = vec![
            section(SectionKind::Title, true, "goo"),
            section(SectionKind::Headings, true, "d"),
        ];
        let counts = category_distribution(&sections, &Lexicon::default());
        assert_eq!(counts.total(), 0);
    }
}
