/// `score >= threshold`. The `-1.0` one-empty sentinel is deliberately not
/// special-cased.
pub fn is_match(score: f64, threshold: f64) -> bool {
    score >= threshold
}
