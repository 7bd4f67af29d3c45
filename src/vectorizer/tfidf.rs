use num::Float;

use crate::vectorizer::{corpus::Corpus, term::{TermFrequency, TermVector}};

/// TF-IDF calculation engine
///
/// The engine turns a two-document `Corpus` into an IDF vector and a
/// document's `TermFrequency` into its TF-IDF vector.
pub trait TFIDFEngine<N>
where
    N: Float,
{
    /// Build the IDF vector over the corpus term union
    /// # Arguments
    /// * `corpus` - document frequencies of the pair
    /// # Returns
    /// * `TermVector<N>` - term -> idf
    fn idf_map(corpus: &Corpus) -> TermVector<N>;

    /// Weight a document's TF by the IDF vector
    /// Terms missing from `idf` get weight 0
    fn tfidf_map(freq: &TermFrequency, idf: &TermVector<N>) -> TermVector<N>;
}

/// Default TF-IDF engine
/// tf = count / total, idf = ln(doc_num / (1 + df))
///
/// With two documents a term in both gets `ln(2/3)` and a term in one gets
/// `ln(1) = 0`, so only shared terms carry weight.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultTFIDFEngine;

impl DefaultTFIDFEngine {
    /// idf of a single term
    #[inline]
    pub fn idf_calc(doc_num: u64, doc_freq: u64) -> f64 {
        (doc_num as f64 / (1.0 + doc_freq as f64)).ln()
    }
}

impl<N> TFIDFEngine<N> for DefaultTFIDFEngine
where
    N: Float,
{
    fn idf_map(corpus: &Corpus) -> TermVector<N> {
        let doc_num = corpus.get_doc_num();
        corpus
            .iter()
            .filter_map(|(term, doc_freq)| {
                N::from(Self::idf_calc(doc_num, doc_freq)).map(|idf| (term.to_string(), idf))
            })
            .collect()
    }

    fn tfidf_map(freq: &TermFrequency, idf: &TermVector<N>) -> TermVector<N> {
        freq.tf_map::<N>()
            .into_iter()
            .map(|(term, tf)| {
                let weight = idf.get(&term).copied().unwrap_or_else(N::zero);
                (term, tf * weight)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> (TermFrequency, TermFrequency) {
        (
            TermFrequency::from(&["python", "developer", "golang"][..]),
            TermFrequency::from(&["python", "python", "rust"][..]),
        )
    }

    #[test]
    fn idf_values_for_two_documents() {
        let (reference, candidate) = pair();
        let corpus = Corpus::from_pair(&reference, &candidate);
        let idf: TermVector<f64> = DefaultTFIDFEngine::idf_map(&corpus);

        assert_eq!(idf.len(), 4);
        assert!((idf["python"] - (2.0f64 / 3.0).ln()).abs() < 1e-12);
        assert_eq!(idf["developer"], 0.0);
        assert_eq!(idf["golang"], 0.0);
        assert_eq!(idf["rust"], 0.0);
    }

    #[test]
    fn tfidf_multiplies_tf_by_idf() {
        let (reference, candidate) = pair();
        let corpus = Corpus::from_pair(&reference, &candidate);
        let idf: TermVector<f64> = DefaultTFIDFEngine::idf_map(&corpus);
        let tfidf = DefaultTFIDFEngine::tfidf_map(&candidate, &idf);

        let expected = (2.0 / 3.0) * (2.0f64 / 3.0).ln();
        assert!((tfidf["python"] - expected).abs() < 1e-12);
        assert_eq!(tfidf["rust"], 0.0);
    }

    #[test]
    fn missing_idf_defaults_to_zero() {
        let freq = TermFrequency::from(&["orphan", "orphan"][..]);
        let tfidf = DefaultTFIDFEngine::tfidf_map(&freq, &TermVector::<f64>::new());
        assert_eq!(tfidf["orphan"], 0.0);
    }

    #[test]
    fn engine_is_generic_over_float() {
        let (reference, candidate) = pair();
        let corpus = Corpus::from_pair(&reference, &candidate);
        let idf: TermVector<f32> = DefaultTFIDFEngine::idf_map(&corpus);
        assert!((idf["python"] - (2.0f32 / 3.0).ln()).abs() < 1e-6);
    }
}
