use std::collections::HashSet;

use crate::vectorizer::term::TermFrequency;

/// Number of keywords returned when the caller does not choose
pub const DEFAULT_TOP_N: usize = 10;

/// Terms shared by candidate and reference, ranked by salience in the reference
///
/// A term's score is its raw count in the reference. Higher counts come first;
/// equal counts are ordered by term text ascending so output never depends on
/// hash iteration order.
///
/// # Arguments
/// * `candidate` - candidate terms, duplicates ignored
/// * `reference` - reference term counts
/// * `top_n` - maximum number of terms to return
///
/// # Returns
/// * `Vec<(String, u64)>` - term and its count in the reference
pub fn rank_matching_terms(
    candidate: &HashSet<&str>,
    reference: &TermFrequency,
    top_n: usize,
) -> Vec<(String, u64)> {
    reference
        .sorted_frequency_vector()
        .into_iter()
        .filter(|(term, _)| candidate.contains(term.as_str()))
        .take(top_n)
        .collect()
}
