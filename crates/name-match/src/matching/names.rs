use tracing::debug;

use super::similarity::similarity;
use super::token::{compare_token, TokenScore};
use super::tokenizer::tokenize;

/// Score when both names are empty strings.
pub const BOTH_EMPTY_SCORE: f64 = 1.0;
/// Score when exactly one name is empty. Negative so it never clears a
/// positive threshold; callers must not clamp it before thresholding.
pub const ONE_EMPTY_SCORE: f64 = -1.0;
/// Score when a non-empty name has no letters left after tokenization.
pub const NO_TOKENS_SCORE: f64 = 0.0;
/// Score when both anchor tokens are phonetically confirmed.
pub const ANCHORS_CONFIRMED_SCORE: f64 = 1.0;

/// Raw similarity score for two person names.
///
/// First and last tokens ("anchors") are always compared. When both anchors
/// are phonetically confirmed the names are treated as a full match. Otherwise
/// names carrying middle tokens add a greedy best-match alignment over all
/// tokens, so the result is a raw score rather than a probability and can
/// exceed `1.0`.
pub fn compare_names(name1: &str, name2: &str) -> f64 {
    if name1.is_empty() && name2.is_empty() {
        debug!("both names empty");
        return BOTH_EMPTY_SCORE;
    }
    if name1.is_empty() || name2.is_empty() {
        debug!("one name empty");
        return ONE_EMPTY_SCORE;
    }

    let tokens1 = tokenize(name1);
    let tokens2 = tokenize(name2);
    debug!(?tokens1, ?tokens2, "names tokenized");

    let (Some((first1, last1)), Some((first2, last2))) = (anchors(&tokens1), anchors(&tokens2))
    else {
        debug!("name without tokens");
        return NO_TOKENS_SCORE;
    };

    let first = compare_token(first1, first2);
    let last = compare_token(last1, last2);

    if first.exact && last.exact {
        debug!("both anchors confirmed");
        return ANCHORS_CONFIRMED_SCORE;
    }

    let full_token_score = if tokens1.len() > 2 || tokens2.len() > 2 {
        align_tokens(&tokens1, &tokens2)
    } else {
        0.0
    };

    let total = first.score + last.score + full_token_score;
    debug!(
        first = first.score,
        last = last.score,
        full_token_score,
        total,
        "name score"
    );
    total
}

/// Name-to-name score exposed to callers.
pub fn match_names(name1: &str, name2: &str) -> f64 {
    compare_names(name1, name2)
}

/// Email-to-email score: plain edit-distance similarity, no tokenization and
/// no phonetic step.
pub fn match_emails(email1: &str, email2: &str) -> f64 {
    similarity(email1, email2)
}

fn anchors(tokens: &[String]) -> Option<(&str, &str)> {
    let first = tokens.first()?;
    let last = tokens.last()?;
    Some((first.as_str(), last.as_str()))
}

// Many-to-one: a token of `rhs` may be the best match for several tokens of
// `lhs`.
fn align_tokens(lhs: &[String], rhs: &[String]) -> f64 {
    lhs.iter()
        .map(|token| {
            rhs.iter()
                .map(|candidate| compare_token(token, candidate))
                .map(|TokenScore { score, .. }| score)
                .fold(0.0, f64::max)
        })
        .sum()
}
