//! Person-name and email similarity.
//!
//! Every function here is pure and total: raw strings go through
//! [`normalize`] and [`tokenize`], token pairs are scored by [`compare_token`]
//! using [`similarity`] and [`phonetic_code`], and [`compare_names`] folds the
//! token scores into one raw score for [`is_match`]. Intermediate values are
//! reported as `tracing` events, so the active subscriber decides where they go.

mod decision;
mod names;
mod normalizer;
mod phonetic;
mod similarity;
mod token;
mod tokenizer;

pub use decision::is_match;
pub use names::{
    compare_names, match_emails, match_names, ANCHORS_CONFIRMED_SCORE, BOTH_EMPTY_SCORE,
    NO_TOKENS_SCORE, ONE_EMPTY_SCORE,
};
pub use normalizer::normalize;
pub use phonetic::{phonetic_code, PhoneticCode};
pub use similarity::similarity;
pub use token::{compare_token, TokenScore, ANCHOR_WEIGHT, PHONETIC_BOOST, PHONETIC_FLOOR};
pub use tokenizer::tokenize;
