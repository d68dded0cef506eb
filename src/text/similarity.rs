use std::collections::HashSet;
use std::hash::Hash;

/// Jaccard similarity `|a ∩ b| / |a ∪ b|`.
///
/// Two empty sets score `0.0`, never NaN. Symmetric in its arguments.
pub fn jaccard<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

/// Jaccard similarity over arbitrary token sequences, collapsed to sets first.
pub fn jaccard_iter<T, A, B>(a: A, b: B) -> f64
where
    T: Eq + Hash,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    let a: HashSet<T> = a.into_iter().collect();
    let b: HashSet<T> = b.into_iter().collect();
    jaccard(&a, &b)
}
