use std::marker::PhantomData;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    config::ScorerConfig,
    error::{ScoreError, ScoreResult},
    vectorizer::{
        compare::cosine_similarity,
        corpus::Corpus,
        keywords::{rank_matching_terms, DEFAULT_TOP_N},
        term::{TermFrequency, TermVector},
        tfidf::{DefaultTFIDFEngine, TFIDFEngine},
        tokenizer::tokenize,
    },
};

/// Slack allowed on a cosine before it is treated as an anomaly
const SIMILARITY_TOLERANCE: f64 = 1e-9;

/// Score and keywords for one (candidate, reference) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitReport {
    /// 0.0 ~ 100.0, two decimals
    pub fit_score: f64,
    /// shared terms, most salient in the reference first
    pub matching_keywords: Vec<String>,
}

/// Fit scorer
///
/// Stateless apart from its configuration: every call tokenizes both texts,
/// builds the two-document corpus, and drops it before returning.
/// Never fails; degenerate or anomalous input gives `0.0` / `[]`.
///
/// `E` is the TF-IDF engine, `DefaultTFIDFEngine` unless replaced.
#[derive(Debug, Clone)]
pub struct FitScorer<E = DefaultTFIDFEngine>
where
    E: TFIDFEngine<f64>,
{
    config: ScorerConfig,
    _marker: PhantomData<E>,
}

impl Default for FitScorer {
    fn default() -> Self {
        Self::new(ScorerConfig::default())
    }
}

impl<E> FitScorer<E>
where
    E: TFIDFEngine<f64>,
{
    pub fn new(config: ScorerConfig) -> Self {
        Self {
            config,
            _marker: PhantomData,
        }
    }

    /// Fit score of `candidate` against `reference`, 0.0 ~ 100.0
    pub fn fit_score(&self, candidate: &str, reference: &str) -> f64 {
        if candidate.is_empty() || reference.is_empty() {
            return 0.0;
        }
        let candidate_freq = TermFrequency::from(tokenize(candidate).as_slice());
        let reference_freq = TermFrequency::from(tokenize(reference).as_slice());
        self.fit_score_freq(&candidate_freq, &reference_freq)
    }

    /// Matching keywords, at most `config.top_n`
    pub fn matching_keywords(&self, candidate: &str, reference: &str) -> Vec<String> {
        self.matching_keywords_top_n(candidate, reference, self.config.top_n)
    }

    /// Matching keywords, at most `top_n`
    pub fn matching_keywords_top_n(&self, candidate: &str, reference: &str, top_n: usize) -> Vec<String> {
        if candidate.is_empty() || reference.is_empty() {
            return Vec::new();
        }
        let candidate_freq = TermFrequency::from(tokenize(candidate).as_slice());
        let reference_freq = TermFrequency::from(tokenize(reference).as_slice());
        rank_matching_terms(&candidate_freq.term_hashset_ref_str(), &reference_freq, top_n)
            .into_iter()
            .map(|(term, _)| term)
            .collect()
    }

    /// Score and keywords together; each is computed independently
    pub fn evaluate(&self, candidate: &str, reference: &str) -> FitReport {
        FitReport {
            fit_score: self.fit_score(candidate, reference),
            matching_keywords: self.matching_keywords(candidate, reference),
        }
    }

    /// Fit score from already counted documents
    pub fn fit_score_freq(&self, candidate: &TermFrequency, reference: &TermFrequency) -> f64 {
        if candidate.is_empty() || reference.is_empty() {
            debug!(
                candidate_terms = candidate.term_sum(),
                reference_terms = reference.term_sum(),
                "no usable terms, score is 0"
            );
            return 0.0;
        }
        match Self::try_fit_score(candidate, reference) {
            Ok(score) => score,
            Err(err) => {
                warn!(error = %err, "fit score degraded to 0");
                0.0
            }
        }
    }

    fn try_fit_score(candidate: &TermFrequency, reference: &TermFrequency) -> ScoreResult<f64> {
        let corpus = Corpus::from_pair(reference, candidate);
        let idf: TermVector<f64> = E::idf_map(&corpus);
        if let Some(&value) = idf.values().find(|v| !v.is_finite()) {
            return Err(ScoreError::NonFinite { stage: "idf", value });
        }

        let reference_vec = E::tfidf_map(reference, &idf);
        let candidate_vec = E::tfidf_map(candidate, &idf);
        let similarity = cosine_similarity(&reference_vec, &candidate_vec);
        debug!(
            vocab = corpus.vocab_size(),
            candidate_terms = candidate.term_sum(),
            reference_terms = reference.term_sum(),
            similarity,
            "scored pair"
        );

        if !similarity.is_finite() {
            return Err(ScoreError::NonFinite { stage: "similarity", value: similarity });
        }
        if !(-SIMILARITY_TOLERANCE..=1.0 + SIMILARITY_TOLERANCE).contains(&similarity) {
            return Err(ScoreError::OutOfRange(similarity));
        }
        Ok(round_score(similarity.clamp(0.0, 1.0) * 100.0))
    }
}

/// Round to two decimal places
#[inline]
pub fn round_score(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

/// Fit score of `candidate_text` against `reference_text`, 0.0 ~ 100.0
///
/// # Examples
/// ```
/// use lexical_fit::calculate_fit_score;
/// let text = "Senior Rust engineer, distributed systems";
/// assert_eq!(calculate_fit_score(text, text), 100.0);
/// assert_eq!(calculate_fit_score("", text), 0.0);
/// ```
pub fn calculate_fit_score(candidate_text: &str, reference_text: &str) -> f64 {
    <FitScorer>::default().fit_score(candidate_text, reference_text)
}

/// Up to `top_n` terms shared by both texts, most frequent in the reference first
///
/// Ties are ordered by term text ascending. Use [`DEFAULT_TOP_N`] for the
/// usual ten keywords.
pub fn extract_matching_keywords(candidate_text: &str, reference_text: &str, top_n: usize) -> Vec<String> {
    <FitScorer>::default().matching_keywords_top_n(candidate_text, reference_text, top_n)
}

/// `extract_matching_keywords` with `DEFAULT_TOP_N`
pub fn extract_matching_keywords_default(candidate_text: &str, reference_text: &str) -> Vec<String> {
    extract_matching_keywords(candidate_text, reference_text, DEFAULT_TOP_N)
}
