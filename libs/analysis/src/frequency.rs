use std::collections::HashMap;

use crate::tokenizer::tokenize;

/// Ordered (token, count) pairs. Kept as a vector instead of a map so the
/// position of each entry still reflects where its token first appeared in
/// the source text.
pub type FrequencyTable = Vec<(String, usize)>;

/// Counts every distinct token in `text` and returns the `k` most frequent.
/// Ties between equal counts keep first-occurrence order, so the same text
/// always produces the same table. An empty or all-punctuation text gives an
/// empty table, and a `k` past the number of distinct tokens gives them all.
pub fn top_k_frequencies(text: &str, k: usize) -> FrequencyTable {
    let mut counts = count_tokens(&tokenize(text));
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(k);
    counts
}

/// First-occurrence-ordered tally of `tokens`.
fn count_tokens(tokens: &[String]) -> FrequencyTable {
    let mut table: FrequencyTable = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        match positions.get(token.as_str()) {
            Some(&idx) => table[idx].1 += 1,
            None => {
                positions.insert(token, table.len());
                table.push((token.clone(), 1));
            }
        }
    }
    table
}
