use std::collections::HashSet;

use indexmap::IndexMap;
use num::Float;

/// Sparse term vector
/// term -> weight, in first-seen order so iteration is deterministic
pub type TermVector<N> = IndexMap<String, N>;

/// TermFrequency struct
/// Manages the frequency of term occurrences within one document.
/// Counts the number of times each term appears and the total term count.
///
/// # Examples
/// ```
/// use lexical_fit::TermFrequency;
/// let mut term_freq = TermFrequency::new();
/// term_freq.add_term("rust");
/// term_freq.add_term("cargo");
/// term_freq.add_term("rust");
///
/// assert_eq!(term_freq.term_count("rust"), 2);
/// assert_eq!(term_freq.term_sum(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermFrequency {
    term_count: IndexMap<String, u64>,
    total_term_count: u64,
}

/// Implementation for adding terms
impl TermFrequency {
    /// Create a new TermFrequency
    pub fn new() -> Self {
        TermFrequency {
            term_count: IndexMap::new(),
            total_term_count: 0,
        }
    }

    /// Add a term
    ///
    /// # Arguments
    /// * `term` - term to add
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        let count = self.term_count.entry(term.to_string()).or_insert(0);
        *count += 1;
        self.total_term_count += 1;
        self
    }

    /// Add multiple terms
    ///
    /// # Arguments
    /// * `terms` - Slice of terms to add
    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }
}

impl<T> From<&[T]> for TermFrequency
where
    T: AsRef<str>,
{
    fn from(terms: &[T]) -> Self {
        let mut freq = TermFrequency::new();
        freq.add_terms(terms);
        freq
    }
}

/// TF calculation
impl TermFrequency {
    /// Relative frequency of every term: count / total
    ///
    /// Returns an empty vector when no term has been added,
    /// so an empty document never divides by zero.
    ///
    /// # Returns
    /// * `TermVector<N>` - term and its TF (0.0 ~ 1.0)
    #[inline]
    pub fn tf_map<N>(&self) -> TermVector<N>
    where
        N: Float,
    {
        if self.total_term_count == 0 {
            return TermVector::new();
        }
        let total = self.total_term_count as f64;
        self.term_count
            .iter()
            .filter_map(|(term, &count)| {
                N::from(count as f64 / total).map(|tf| (term.clone(), tf))
            })
            .collect()
    }
}

/// Information queries
impl TermFrequency {
    /// Get the occurrence count of a term
    ///
    /// # Returns
    /// * `u64` - 0 if the term never occurred
    #[inline]
    pub fn term_count(&self, term: &str) -> u64 {
        self.term_count.get(term).copied().unwrap_or(0)
    }

    /// Total number of terms added (with duplicates)
    #[inline]
    pub fn term_sum(&self) -> u64 {
        self.total_term_count
    }

    /// Number of distinct terms
    #[inline]
    pub fn term_num(&self) -> usize {
        self.term_count.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total_term_count == 0
    }

    /// Distinct terms as borrowed strings, in first-seen order
    #[inline]
    pub fn term_set_ref_str(&self) -> Vec<&str> {
        self.term_count.keys().map(|s| s.as_str()).collect()
    }

    /// Distinct terms as a set of borrowed strings
    #[inline]
    pub fn term_hashset_ref_str(&self) -> HashSet<&str> {
        self.term_count.keys().map(|s| s.as_str()).collect()
    }

    /// Terms sorted by count (descending), ties in dictionary order
    ///
    /// # Returns
    /// * `Vec<(String, u64)>` - term and its count
    #[inline]
    pub fn sorted_frequency_vector(&self) -> Vec<(String, u64)> {
        let mut term_list: Vec<(String, u64)> = self
            .term_count
            .iter()
            .map(|(term, &count)| (term.clone(), count))
            .collect();

        term_list.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        term_list
    }
}
