use std::cmp::Ordering;
use crate::core::vector::{cosine_similarity, tokenize, Vocabulary};
use crate::models::{Candidate, Recommendations, ScoredCandidate};

/// Rank candidates by how closely their skills match the student's
///
/// Pipeline:
/// 1. Tokenize the student document and every candidate document
/// 2. Build one vocabulary across all of them
/// 3. Turn each document into a term-frequency vector
/// 4. Score each candidate by cosine similarity against the student (0-100)
/// 5. Stable sort by score, descending
///
/// When no document contributes a single vocabulary token the candidates are
/// handed back unscored as [`Recommendations::Unranked`].
pub fn score<S: AsRef<str>>(student_skills: &[S], candidates: &[Candidate]) -> Recommendations {
    if candidates.is_empty() {
        return Recommendations::Ranked(Vec::new());
    }

    let student_doc = tokenize(student_skills);
    let candidate_docs: Vec<Vec<String>> = candidates
        .iter()
        .map(|candidate| tokenize(&candidate.skills))
        .collect();

    let vocabulary = Vocabulary::build(
        std::iter::once(student_doc.as_slice()).chain(candidate_docs.iter().map(Vec::as_slice)),
    );

    if vocabulary.is_empty() {
        return Recommendations::Unranked(candidates.to_vec());
    }

    let student_vector = vocabulary.term_frequencies(&student_doc);

    let mut scored: Vec<ScoredCandidate> = candidates
        .iter()
        .zip(&candidate_docs)
        .map(|(candidate, doc)| {
            let candidate_vector = vocabulary.term_frequencies(doc);
            let similarity = cosine_similarity(&student_vector, &candidate_vector);
            ScoredCandidate::new(candidate.clone(), to_percentage(similarity))
        })
        .collect();

    // sort_by is stable: ties keep input order
    scored.sort_by(|a, b| {
        b.match_score
            .partial_cmp(&a.match_score)
            .unwrap_or(Ordering::Equal)
    });

    Recommendations::Ranked(scored)
}

/// Convert a 0-1 similarity to a percentage rounded to two decimals
///
/// Exact ties round to the even hundredth (3.125 -> 3.12).
#[inline]
pub fn to_percentage(similarity: f64) -> f64 {
    let percent = (similarity * 100.0 * 100.0).round_ties_even() / 100.0;
    percent.clamp(0.0, 100.0)
}
