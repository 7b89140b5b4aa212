//! Batch comparison of one query against many candidates.
//!
//! Inputs below [`PARALLEL_THRESHOLD`] are scored sequentially; larger
//! inputs fan out across the rayon thread pool. Every comparison allocates
//! its own buffers, so no synchronization is involved.

use rayon::prelude::*;

use crate::algorithms::{
    DamerauLevenshtein, EditDistance, Levenshtein, OptimalStringAlignment, Similarity,
};
use crate::Error;

/// Minimum input size for parallel processing.
///
/// For inputs smaller than this threshold, sequential processing is faster
/// due to the overhead of thread pool coordination.
const PARALLEL_THRESHOLD: usize = 100;

/// A scored candidate from a batch comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchMatch {
    /// Index of the candidate in the input list
    pub index: usize,
    /// The candidate text
    pub text: String,
    /// Edit distance to the query
    pub distance: usize,
}

/// Look up an edit distance metric by name.
///
/// Valid names: `levenshtein`, `osa` (or `optimal_string_alignment`),
/// `damerau_levenshtein` (or `damerau`).
///
/// # Errors
/// Returns [`Error::UnknownAlgorithm`] for any other name.
pub fn metric_by_name(name: &str) -> Result<Box<dyn EditDistance>, Error> {
    match name {
        "levenshtein" => Ok(Box::new(Levenshtein::new())),
        "osa" | "optimal_string_alignment" => Ok(Box::new(OptimalStringAlignment::new())),
        "damerau_levenshtein" | "damerau" => Ok(Box::new(DamerauLevenshtein::new())),
        _ => Err(Error::UnknownAlgorithm(name.to_string())),
    }
}

fn score_all(query: &str, candidates: &[String], metric: &dyn EditDistance) -> Vec<usize> {
    if candidates.len() >= PARALLEL_THRESHOLD {
        candidates
            .par_iter()
            .map(|c| metric.distance(query, c))
            .collect()
    } else {
        candidates
            .iter()
            .map(|c| metric.distance(query, c))
            .collect()
    }
}

/// Compute the distance from `query` to every candidate.
pub fn batch_distances(
    query: &str,
    candidates: &[String],
    metric: &dyn EditDistance,
) -> Vec<usize> {
    score_all(query, candidates, metric)
}

/// Return all candidates within `max_distance` of the query, closest first.
pub fn find_within(
    query: &str,
    candidates: &[String],
    metric: &dyn EditDistance,
    max_distance: usize,
) -> Vec<BatchMatch> {
    let mut matches: Vec<BatchMatch> = score_all(query, candidates, metric)
        .into_iter()
        .enumerate()
        .filter(|&(_, d)| d <= max_distance)
        .map(|(i, d)| BatchMatch {
            index: i,
            text: candidates[i].clone(),
            distance: d,
        })
        .collect();
    matches.sort_by_key(|m| m.distance);
    matches
}

/// Return all candidates whose normalized similarity to the query is at
/// least `min_similarity`, highest similarity first.
///
/// Similarity order is not distance order: when candidate lengths differ, a
/// candidate at a larger edit distance can still be the more similar one.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] if `min_similarity` is not a finite
/// value in [0.0, 1.0].
pub fn find_similar(
    query: &str,
    candidates: &[String],
    metric: &dyn EditDistance,
    min_similarity: f64,
) -> Result<Vec<BatchMatch>, Error> {
    if !min_similarity.is_finite() || !(0.0..=1.0).contains(&min_similarity) {
        return Err(Error::InvalidArgument(format!(
            "min_similarity must be in range [0.0, 1.0], got {min_similarity}"
        )));
    }

    let query_len = query.chars().count();
    let mut matches: Vec<(BatchMatch, f64)> = score_all(query, candidates, metric)
        .into_iter()
        .enumerate()
        .filter_map(|(i, d)| {
            let max_len = query_len.max(candidates[i].chars().count());
            let similarity = if max_len == 0 {
                1.0
            } else {
                1.0 - (d as f64 / max_len as f64)
            };
            (similarity >= min_similarity).then(|| {
                (
                    BatchMatch {
                        index: i,
                        text: candidates[i].clone(),
                        distance: d,
                    },
                    similarity,
                )
            })
        })
        .collect();
    matches.sort_by(|a, b| b.1.total_cmp(&a.1));
    Ok(matches.into_iter().map(|(m, _)| m).collect())
}

/// Return the single closest candidate, or `None` for an empty list.
///
/// Ties resolve to the earliest candidate.
pub fn best_match(
    query: &str,
    candidates: &[String],
    metric: &dyn EditDistance,
) -> Option<BatchMatch> {
    score_all(query, candidates, metric)
        .into_iter()
        .enumerate()
        .min_by_key(|&(i, d)| (d, i))
        .map(|(i, d)| BatchMatch {
            index: i,
            text: candidates[i].clone(),
            distance: d,
        })
}

/// Batch similarity scoring against a [`Similarity`] metric.
pub fn batch_similarities(
    query: &str,
    candidates: &[String],
    metric: &dyn Similarity,
) -> Vec<f64> {
    if candidates.len() >= PARALLEL_THRESHOLD {
        candidates
            .par_iter()
            .map(|c| metric.similarity(query, c))
            .collect()
    } else {
        candidates
            .iter()
            .map(|c| metric.similarity(query, c))
            .collect()
    }
}
