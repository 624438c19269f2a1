use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

const APOSTROPHES: [char; 3] = ['\'', '\u{2019}', '\u{02bc}'];

/// Canonical form of a raw name: diacritics stripped, lowercased, apostrophes
/// joined, anything other than letters, whitespace and hyphens dropped, and
/// the result trimmed.
///
/// `normalize(&normalize(x)) == normalize(x)` for every input.
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());

    // Lowercasing can itself produce combining marks ('İ' -> "i\u{307}"), so
    // marks are filtered on both sides of it.
    let lowered = raw
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .flat_map(char::to_lowercase)
        .filter(|ch| !is_combining_mark(*ch));

    for ch in lowered {
        if APOSTROPHES.contains(&ch) {
            continue;
        }
        if ch.is_alphabetic() || ch.is_whitespace() || ch == '-' {
            out.push(ch);
        }
    }

    let trimmed = out.trim();
    if trimmed.len() == out.len() {
        out
    } else {
        trimmed.to_string()
    }
}
