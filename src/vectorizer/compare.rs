use num::Float;

use crate::vectorizer::term::TermVector;

pub trait Compare<N>
where
    N: Float,
{
    /// dot product over the key union
    /// d(a, b) = Σ(a_i * b_i), missing keys count as 0
    fn dot(vec: &TermVector<N>, other: &TermVector<N>) -> f64;
    /// cosine similarity
    /// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
    /// ||a|| = sqrt(Σ(a_i^2))
    /// 0 when either norm is 0
    fn cosine_similarity(vec: &TermVector<N>, other: &TermVector<N>) -> f64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultCompare;

impl DefaultCompare {
    #[inline]
    fn norm<N: Float>(vec: &TermVector<N>) -> f64 {
        vec.values()
            .map(|v| {
                let v = v.to_f64().unwrap_or(0.0);
                v * v
            })
            .sum::<f64>()
            .sqrt()
    }
}

impl<N> Compare<N> for DefaultCompare
where
    N: Float,
{
    #[inline]
    fn dot(vec: &TermVector<N>, other: &TermVector<N>) -> f64 {
        // keys on only one side contribute 0, so walking the smaller map is enough
        let (small, large) = if vec.len() <= other.len() { (vec, other) } else { (other, vec) };
        small
            .iter()
            .filter_map(|(term, &a)| large.get(term).map(|&b| a * b))
            .map(|v| v.to_f64().unwrap_or(0.0))
            .sum()
    }

    #[inline]
    fn cosine_similarity(vec: &TermVector<N>, other: &TermVector<N>) -> f64 {
        let norm_a = Self::norm(vec);
        let norm_b = Self::norm(other);
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }
        Self::dot(vec, other) / (norm_a * norm_b)
    }
}

/// Cosine similarity of two sparse term vectors with the default comparator
#[inline]
pub fn cosine_similarity<N: Float>(a: &TermVector<N>, b: &TermVector<N>) -> f64 {
    <DefaultCompare as Compare<N>>::cosine_similarity(a, b)
}

/// Dot product of two sparse term vectors with the default comparator
#[inline]
pub fn dot<N: Float>(a: &TermVector<N>, b: &TermVector<N>) -> f64 {
    <DefaultCompare as Compare<N>>::dot(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(pairs: &[(&str, f64)]) -> TermVector<f64> {
        pairs.iter().map(|(t, v)| (t.to_string(), *v)).collect()
    }

    #[test]
    fn zero_magnitude_gives_zero_either_side() {
        let a = vector(&[("rust", 0.4), ("cargo", 0.2)]);
        let empty = TermVector::<f64>::new();
        assert_eq!(cosine_similarity(&a, &empty), 0.0);
        assert_eq!(cosine_similarity(&empty, &a), 0.0);
        assert_eq!(cosine_similarity(&empty, &empty), 0.0);

        let zeros = vector(&[("rust", 0.0), ("cargo", 0.0)]);
        assert_eq!(cosine_similarity(&a, &zeros), 0.0);
    }

    #[test]
    fn identical_direction_is_one() {
        let a = vector(&[("rust", 0.4), ("cargo", 0.2)]);
        let b = vector(&[("rust", 0.8), ("cargo", 0.4)]);
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn orthogonal_is_zero() {
        let a = vector(&[("rust", 1.0)]);
        let b = vector(&[("golang", 1.0)]);
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn negative_weights_on_both_sides_stay_positive() {
        let a = vector(&[("python", -0.1), ("data", 0.0)]);
        let b = vector(&[("python", -0.3)]);
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn dot_uses_key_union() {
        let a = vector(&[("rust", 2.0), ("cargo", 3.0)]);
        let b = vector(&[("rust", 0.5), ("serde", 7.0)]);
        assert_eq!(dot(&a, &b), 1.0);
        assert_eq!(dot(&b, &a), 1.0);
    }

    #[test]
    fn partial_overlap() {
        let a = vector(&[("x", 1.0), ("y", 1.0)]);
        let b = vector(&[("x", 1.0)]);
        let expected = 1.0 / 2f64.sqrt();
        assert!((cosine_similarity(&a, &b) - expected).abs() < 1e-12);
    }
}
