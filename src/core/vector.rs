use std::collections::BTreeMap;
use crate::core::stopwords::is_stop_word;

/// Split a skill document into lower-cased tokens, dropping stop words
///
/// Each skill may itself contain several words ("machine learning"); the
/// document is the skills joined with a single space, so every
/// whitespace-separated word becomes its own token.
pub fn tokenize<S: AsRef<str>>(skills: &[S]) -> Vec<String> {
    skills
        .iter()
        .flat_map(|skill| skill.as_ref().split_whitespace())
        .map(str::to_lowercase)
        .filter(|token| !is_stop_word(token))
        .collect()
}

/// Token-to-column mapping shared by every document in one scoring call
///
/// Columns are assigned in lexicographic token order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    columns: BTreeMap<String, usize>,
}

impl Vocabulary {
    /// Collect the distinct tokens of all documents
    pub fn build<'a, I>(documents: I) -> Self
    where
        I: IntoIterator<Item = &'a [String]>,
    {
        let mut columns: BTreeMap<String, usize> = documents
            .into_iter()
            .flatten()
            .map(|token| (token.clone(), 0))
            .collect();

        for (index, column) in columns.values_mut().enumerate() {
            *column = index;
        }

        Self { columns }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column index for a token, if it is part of the vocabulary
    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.columns.get(token).copied()
    }

    /// Count how often each vocabulary token occurs in a document
    ///
    /// Tokens outside the vocabulary are ignored.
    pub fn term_frequencies(&self, document: &[String]) -> Vec<u32> {
        let mut counts = vec![0u32; self.columns.len()];
        for token in document {
            if let Some(index) = self.index_of(token) {
                counts[index] += 1;
            }
        }
        counts
    }
}

/// Cosine of the angle between two term-frequency vectors (0-1)
///
/// Returns 0 when either vector has no non-zero entry.
pub fn cosine_similarity(a: &[u32], b: &[u32]) -> f64 {
    let dot: f64 = a
        .iter()
        .zip(b)
        .map(|(&x, &y)| x as f64 * y as f64)
        .sum();
    let norm_a = norm(a);
    let norm_b = norm(b);

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

#[inline]
fn norm(v: &[u32]) -> f64 {
    v.iter().map(|&x| (x as f64).powi(2)).sum::<f64>().sqrt()
}
