use super::normalizer::normalize;

/// Splits a raw name into its normalized word tokens.
///
/// Hyphens separate tokens, so `"Jean-Pierre"` and `"Jean Pierre"` produce the
/// same sequence. Never yields empty tokens.
pub fn tokenize(raw: &str) -> Vec<String> {
    normalize(raw)
        .replace(['-', '\''], " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
