use rphonetic::DoubleMetaphone;
use tracing::trace;

use super::normalizer::normalize;

/// Primary and alternate "sounds-alike" codes for one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneticCode {
    pub primary: String,
    pub alternate: String,
}

impl PhoneticCode {
    /// True when any of the four primary/alternate cross pairs are equal.
    pub fn matches(&self, other: &PhoneticCode) -> bool {
        self.primary == other.primary
            || self.alternate == other.alternate
            || self.primary == other.alternate
            || self.alternate == other.primary
    }
}

/// Double Metaphone codes for a token. Safe to call on already-normalized text.
///
/// Only ASCII letters reach the encoder; letters outside the Latin alphabet
/// that survive diacritic stripping are left to the edit-distance signal.
pub fn phonetic_code(token: &str) -> PhoneticCode {
    let normalized = normalize(token);
    let encodable: String = normalized
        .chars()
        .filter(char::is_ascii_alphabetic)
        .collect();

    let code = if encodable.is_empty() {
        PhoneticCode {
            primary: String::new(),
            alternate: String::new(),
        }
    } else {
        let result = DoubleMetaphone::default().double_metaphone(&encodable);
        PhoneticCode {
            primary: result.primary().to_string(),
            alternate: result.alternate().to_string(),
        }
    };

    trace!(
        token,
        primary = %code.primary,
        alternate = %code.alternate,
        "phonetic code"
    );
    code
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spelling_variants_share_a_code() {
        assert!(phonetic_code("Perez").matches(&phonetic_code("Peres")));
        assert!(phonetic_code("Jonathan").matches(&phonetic_code("Johnathan")));
        assert!(phonetic_code("Smith").matches(&phonetic_code("Smyth")));
    }

    #[test]
    fn different_sounds_do_not_match() {
        assert!(!phonetic_code("Alice").matches(&phonetic_code("Bob")));
        assert!(!phonetic_code("Doe").matches(&phonetic_code("Jonathan")));
    }

    #[test]
    fn encoding_ignores_case_and_accents() {
        assert_eq!(phonetic_code("PÉREZ"), phonetic_code("perez"));
    }

    #[test]
    fn cross_pairs_are_symmetric() {
        let lhs = PhoneticCode {
            primary: "XMT".to_string(),
            alternate: "SMT".to_string(),
        };
        let rhs = PhoneticCode {
            primary: "SMT".to_string(),
            alternate: "SMT".to_string(),
        };
        assert!(lhs.matches(&rhs));
        assert!(rhs.matches(&lhs));
    }
}
