use std::fmt::{self, Debug, Display};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{scorer::FitScorer, vectorizer::tfidf::TFIDFEngine};

/// One row of a batch evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate<K> {
    /// caller's key for the candidate document
    pub key: K,
    pub fit_score: f64,
    pub matching_keywords: Vec<String>,
}

/// Batch evaluation result, best fit first
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ranking<K> {
    pub list: Vec<RankedCandidate<K>>,
}

impl<K> Ranking<K> {
    pub fn new(list: Vec<RankedCandidate<K>>) -> Self {
        Ranking { list }
    }

    /// Sort by descending score
    /// Stable: equal scores keep their input order
    pub fn sort_by_score_desc(&mut self) -> &mut Self {
        self.list.sort_by(|a, b| b.fit_score.total_cmp(&a.fit_score));
        self
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedCandidate<K>> {
        self.list.iter()
    }
}

impl<K> IntoIterator for Ranking<K> {
    type Item = RankedCandidate<K>;
    type IntoIter = std::vec::IntoIter<RankedCandidate<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl<K> Debug for Ranking<K>
where
    K: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "Ranking [")?;
            for entry in &self.list {
                writeln!(f, "    {:?}: {:.2} {:?}", entry.key, entry.fit_score, entry.matching_keywords)?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}

impl<K> Display for Ranking<K>
where
    K: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (rank, entry) in self.list.iter().enumerate() {
            writeln!(
                f,
                "{:>3}. {:>6.2}  {}  [{}]",
                rank + 1,
                entry.fit_score,
                entry.key,
                entry.matching_keywords.join(", ")
            )?;
        }
        Ok(())
    }
}

impl<E> FitScorer<E>
where
    E: TFIDFEngine<f64> + Send + Sync,
{
    /// Score every candidate against one reference, best fit first
    ///
    /// Candidates are scored in parallel; each pair is independent.
    ///
    /// # Arguments
    /// * `reference` - reference text (job description)
    /// * `candidates` - (key, text) pairs
    pub fn rank<K, S>(&self, reference: &str, candidates: &[(K, S)]) -> Ranking<K>
    where
        K: Clone + Send + Sync,
        S: AsRef<str> + Sync,
    {
        let list: Vec<RankedCandidate<K>> = candidates
            .par_iter()
            .map(|(key, text)| {
                let report = self.evaluate(text.as_ref(), reference);
                RankedCandidate {
                    key: key.clone(),
                    fit_score: report.fit_score,
                    matching_keywords: report.matching_keywords,
                }
            })
            .collect();

        let mut ranking = Ranking::new(list);
        ranking.sort_by_score_desc();
        info!(candidates = ranking.len(), "ranked candidates");
        ranking
    }
}

/// Rank candidates with the default scorer
pub fn rank_candidates<K, S>(reference: &str, candidates: &[(K, S)]) -> Ranking<K>
where
    K: Clone + Send + Sync,
    S: AsRef<str> + Sync,
{
    <FitScorer>::default().rank(reference, candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    const JOB: &str = "Backend engineer: Rust, PostgreSQL, Kubernetes. Rust experience required.";

    #[test]
    fn ranks_best_fit_first() {
        let candidates = vec![
            ("frontend", "React and TypeScript developer, CSS animations"),
            ("partial", "Python engineer with PostgreSQL and some Rust"),
            ("exact", "Backend engineer: Rust, PostgreSQL, Kubernetes. Rust experience required."),
        ];
        let ranking = rank_candidates(JOB, &candidates);

        let keys: Vec<&str> = ranking.iter().map(|c| c.key).collect();
        assert_eq!(keys, vec!["exact", "partial", "frontend"]);
        assert_eq!(ranking.list[0].fit_score, 100.0);
        assert_eq!(ranking.list[2].fit_score, 0.0);
        assert!(ranking.list[2].matching_keywords.is_empty());
        assert_eq!(ranking.list[0].matching_keywords[0], "rust");
    }

    #[test]
    fn ties_keep_input_order() {
        let candidates = vec![
            (3, "gardening"),
            (1, "cooking recipes"),
            (2, ""),
        ];
        let ranking = rank_candidates(JOB, &candidates);
        let keys: Vec<i32> = ranking.into_iter().map(|c| c.key).collect();
        assert_eq!(keys, vec![3, 1, 2]);
    }

    #[test]
    fn empty_batch() {
        let candidates: Vec<(String, String)> = Vec::new();
        assert!(rank_candidates(JOB, &candidates).is_empty());
    }

    #[test]
    fn display_lists_rank_score_and_keywords() {
        let candidates = vec![("cv.txt".to_string(), JOB.to_string())];
        let ranking = rank_candidates(JOB, &candidates);
        let text = ranking.to_string();
        assert!(text.starts_with("  1. 100.00  cv.txt  [rust, backend"), "{text}");
    }

    #[test]
    fn serializes_as_plain_list() {
        let candidates = vec![("a", "rust backend")];
        let json = serde_json::to_value(rank_candidates(JOB, &candidates)).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["key"], "a");
    }

    #[test]
    fn scorer_rank_uses_its_config() {
        let scorer: FitScorer = FitScorer::new(crate::config::ScorerConfig::default().with_top_n(1));
        let candidates = vec![("a".to_string(), "rust postgresql backend".to_string())];
        let ranking: Ranking<String> = scorer.rank(JOB, &candidates);
        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking.list[0].key, "a");
        assert_eq!(ranking.list[0].matching_keywords, vec!["rust"]);
    }
}
