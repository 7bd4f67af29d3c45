use indexmap::IndexMap;

use crate::vectorizer::term::TermFrequency;

/// Every corpus holds exactly the reference and the candidate
pub const PAIR_DOC_NUM: u64 = 2;

/// Document frequencies of the two-document corpus {reference, candidate}
///
/// It does not store document text; it only keeps, for every term in the
/// union of both documents, the number of documents (1 or 2) containing it.
/// Built fresh for each scoring call and dropped afterwards.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    /// term -> number of documents containing it
    term_counts: IndexMap<String, u64>,
}

impl Corpus {
    /// Build the corpus for one (reference, candidate) pair
    ///
    /// Order only decides which document is counted first; the resulting
    /// document frequencies are symmetric.
    pub fn from_pair(reference: &TermFrequency, candidate: &TermFrequency) -> Self {
        let mut corpus = Self {
            term_counts: IndexMap::with_capacity(reference.term_num() + candidate.term_num()),
        };
        corpus.add_set(&reference.term_set_ref_str());
        corpus.add_set(&candidate.term_set_ref_str());
        corpus
    }

    /// Count one document's distinct terms
    fn add_set<T>(&mut self, terms: &[T])
    where
        T: AsRef<str>,
    {
        for term in terms {
            *self.term_counts.entry(term.as_ref().to_string()).or_insert(0) += 1;
        }
    }

    /// Number of documents in the corpus
    #[inline]
    pub fn get_doc_num(&self) -> u64 {
        PAIR_DOC_NUM
    }

    /// Number of documents containing `term` (0 if neither does)
    #[inline]
    pub fn get_term_count(&self, term: &str) -> u64 {
        self.term_counts.get(term).copied().unwrap_or(0)
    }

    /// Size of the term union
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_counts.len()
    }

    /// Iterate (term, document frequency) over the term union
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.term_counts.iter().map(|(term, &count)| (term.as_str(), count))
    }
}
