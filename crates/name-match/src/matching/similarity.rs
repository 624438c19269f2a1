use strsim::levenshtein;
use tracing::trace;

use super::normalizer::normalize;

/// Normalized Levenshtein similarity in `[0, 1]`, computed on the normalized
/// forms of both inputs. Two inputs that normalize to empty score `1.0`.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = normalize(a);
    let b = normalize(b);

    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    let distance = levenshtein(&a, &b);
    let score = 1.0 - distance as f64 / max_len as f64;
    trace!(lhs = %a, rhs = %b, distance, score, "edit-distance similarity");
    score
}
