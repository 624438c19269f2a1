use tracing::debug;

use super::phonetic::phonetic_code;
use super::similarity::similarity;

/// Weight of a first- or last-name anchor token in the aggregate name score.
pub const ANCHOR_WEIGHT: f64 = 0.4;
/// Minimum edit-distance similarity for a phonetic match to count.
pub const PHONETIC_FLOOR: f64 = 0.8;
/// Similarity assigned to a phonetically confirmed near-miss.
pub const PHONETIC_BOOST: f64 = 0.9;

/// Weighted similarity of one token pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenScore {
    /// Similarity scaled by [`ANCHOR_WEIGHT`], so always within `[0, 0.4]`.
    pub score: f64,
    /// Set when the phonetic codes agree and the edit distance is close enough.
    pub exact: bool,
}

/// Scores two tokens, boosting near-misses that also sound alike.
pub fn compare_token(lhs: &str, rhs: &str) -> TokenScore {
    let mut base = similarity(lhs, rhs);
    let lhs_code = phonetic_code(lhs);
    let rhs_code = phonetic_code(rhs);

    let exact = lhs_code.matches(&rhs_code) && base >= PHONETIC_FLOOR;
    if exact {
        base = PHONETIC_BOOST;
    }

    let score = base * ANCHOR_WEIGHT;
    debug!(
        lhs,
        rhs,
        lhs_primary = %lhs_code.primary,
        lhs_alternate = %lhs_code.alternate,
        rhs_primary = %rhs_code.primary,
        rhs_alternate = %rhs_code.alternate,
        score,
        exact,
        "token compared"
    );

    TokenScore { score, exact }
}
