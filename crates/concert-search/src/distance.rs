//! Levenshtein edit distance.
//!
//! Strings are compared per Unicode scalar value, so "Björk" and "Bjork" are one
//! substitution apart regardless of how many bytes the umlaut takes.

/// Minimum number of single character insertions, deletions and substitutions
/// needed to turn `a` into `b`.
///
/// Uses two rolling rows sized by the shorter input, so memory is
/// `O(min(m, n))` while time stays `O(m * n)`.
///
/// # Examples
///
/// ```rust
/// use concert_search::edit_distance;
///
/// assert_eq!(edit_distance("kitten", "sitting"), 3);
/// assert_eq!(edit_distance("", "abc"), 3);
/// assert_eq!(edit_distance("Floyd", "Flood"), 1);
/// ```
#[must_use]
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    // Distance is symmetric; iterate over the longer one so rows stay short.
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    if short.is_empty() {
        return long.len();
    }

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr = vec![0; short.len() + 1];

    for (i, lc) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            curr[j + 1] = if lc == sc {
                prev[j]
            } else {
                1 + prev[j].min(prev[j + 1]).min(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}
