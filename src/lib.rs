/// This crate scores how well a candidate document (resume) fits a reference
/// document (job description) with a two-document TF-IDF model.
pub mod vectorizer;
pub mod scorer;
pub mod rank;
pub mod config;
pub mod error;

/// Fit score
/// Cosine similarity of the TF-IDF vectors of both texts, scaled to 0.0 ~ 100.0
/// and rounded to two decimals.
///
/// Never fails: empty input, input without usable terms, and internal
/// anomalies all give `0.0`.
pub use scorer::calculate_fit_score;

/// Matching keywords
/// Terms present in both texts, ordered by how often they occur in the
/// reference (descending), ties by term text (ascending), truncated to `top_n`.
///
/// Never fails: degenerate input gives an empty list.
pub use scorer::{extract_matching_keywords, extract_matching_keywords_default};

/// Fit Scorer
/// Holds a `ScorerConfig` and a TF-IDF engine type.
/// `evaluate` returns score and keywords together as a `FitReport`;
/// `rank` scores many candidates against one reference in parallel.
pub use scorer::{FitReport, FitScorer};

/// Batch ranking results
pub use rank::{rank_candidates, RankedCandidate, Ranking};

/// Tokenizer
/// Lowercases, keeps `[a-z0-9]` runs, drops words of two characters or less
/// and the fixed stop words.
pub use vectorizer::tokenizer::{tokenize, STOP_WORDS};

/// Term Frequency structure
/// Counts term occurrences within one document; base data for TF.
pub use vectorizer::term::{TermFrequency, TermVector};

/// Corpus of the (reference, candidate) pair; base data for IDF.
pub use vectorizer::corpus::Corpus;

/// TF IDF Calculation Engine Trait
/// By implementing this trait, a different weighting can be plugged into
/// `FitScorer<E>`. `DefaultTFIDFEngine` computes tf = count / total and
/// idf = ln(2 / (1 + df)).
pub use vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine};

/// Sparse vector comparison (dot product, cosine similarity)
pub use vectorizer::compare::{cosine_similarity, Compare, DefaultCompare};

pub use vectorizer::keywords::DEFAULT_TOP_N;
pub use config::ScorerConfig;
pub use error::{ConfigError, ScoreError};
