use itertools::Itertools;
use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::config::{NO_MAX_RESULTS, SearchConfig};

/// A candidate paired with its distance to the term and its input position.
///
/// Only lives for the duration of one ranking call.
#[derive(Debug)]
struct Scored<T> {
    candidate: T,
    distance: usize,
    index: usize,
}

/// Absolute distance cutoff: `floor(chars(term) * tolerance)`, truncated toward zero.
///
/// Negative tolerances give a negative threshold, which no distance can meet.
pub(crate) fn distance_threshold(term: &str, tolerance: f64) -> i64 {
    (term.chars().count() as f64 * tolerance) as i64
}

/// Rank `candidates` by edit distance to `term`.
///
/// Every candidate is scored with `distance`. Candidates whose distance exceeds
/// `floor(chars(term) * tolerance)` are dropped, survivors are ordered by
/// ascending distance (ties keep their input order) and at most `max_results`
/// are returned. [`NO_MAX_RESULTS`] returns every survivor.
///
/// The term length is counted in chars, not bytes, so a term with accented
/// letters gets the same threshold as its unaccented spelling.
///
/// Never fails: an empty candidate list or a threshold nothing can meet
/// yields an empty `Vec`. `tolerance` is not validated.
///
/// # Examples
///
/// ```rust
/// use concert_search::{NO_MAX_RESULTS, edit_distance, rank};
///
/// let names = ["Pink Floyd", "Floyd", "Flood"];
/// let ranked = rank("Floyd", names, NO_MAX_RESULTS, 0.4, |term, name| {
///     edit_distance(term, name)
/// });
/// assert_eq!(ranked, vec!["Floyd", "Flood"]);
/// ```
#[instrument(name = "Rank Candidates", level = "debug", skip(candidates, distance))]
pub fn rank<T, I, F>(
    term: &str,
    candidates: I,
    max_results: usize,
    tolerance: f64,
    distance: F,
) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    F: Fn(&str, &T) -> usize,
{
    let threshold = distance_threshold(term, tolerance);
    let scored = candidates
        .into_iter()
        .enumerate()
        .map(|(index, candidate)| Scored {
            distance: distance(term, &candidate),
            candidate,
            index,
        })
        .collect();
    select(scored, threshold, max_results)
}

/// [`rank`] driven by a [`SearchConfig`].
///
/// Candidate sets of at least `config.parallel_threshold` items are scored on
/// the rayon pool. Scores are collected in input order, so the output is the
/// same as the sequential path.
#[instrument(
    name = "Rank Candidates With Config",
    level = "debug",
    skip_all,
    fields(term = %term, num_candidates = candidates.len())
)]
pub fn rank_with_config<T, F>(
    term: &str,
    candidates: Vec<T>,
    config: &SearchConfig,
    distance: F,
) -> Vec<T>
where
    T: Send,
    F: Fn(&str, &T) -> usize + Sync,
{
    let tolerance = config.tolerance.value();
    if candidates.len() < config.parallel_threshold {
        return rank(term, candidates, config.max_results, tolerance, distance);
    }

    debug!(num_candidates = candidates.len(), "Scoring candidates in parallel");
    let threshold = distance_threshold(term, tolerance);
    let scored = candidates
        .into_par_iter()
        .enumerate()
        .map(|(index, candidate)| Scored {
            distance: distance(term, &candidate),
            candidate,
            index,
        })
        .collect();
    select(scored, threshold, config.max_results)
}

/// Filter, stable sort and truncate scored candidates.
fn select<T>(scored: Vec<Scored<T>>, threshold: i64, max_results: usize) -> Vec<T> {
    let num_candidates = scored.len();
    let take = if max_results == NO_MAX_RESULTS {
        usize::MAX
    } else {
        max_results
    };

    let results: Vec<T> = scored
        .into_iter()
        .filter(|s| i64::try_from(s.distance).is_ok_and(|d| d <= threshold))
        .sorted_by_key(|s| (s.distance, s.index))
        .take(take)
        .map(|s| s.candidate)
        .collect();

    debug!(
        num_candidates,
        threshold,
        num_results = results.len(),
        "Ranked candidates"
    );
    results
}
