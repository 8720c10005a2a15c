//! Set similarity.

use crate::normalize::TokenSet;

/// Jaccard coefficient `|a ∩ b| / |a ∪ b|`, in `[0.0, 1.0]`.
///
/// Two empty sets have similarity 0.0, not 1.0.
pub fn jaccard(a: &TokenSet, b: &TokenSet) -> f64 {
    let union = a.union_len(b);
    if union == 0 {
        return 0.0;
    }
    a.intersection_len(b) as f64 / union as f64
}
