pub mod categorizer;
pub mod frequency;
pub mod lexicon;
pub mod sections;
pub mod tokenizer;

pub use categorizer::{categorize, CategoryCounts};
pub use frequency::{top_k_frequencies, FrequencyTable};
pub use lexicon::{Category, Lexicon};
pub use sections::{category_distribution, SectionKind, TextSection};
pub use tokenizer::tokenize;
