//! Affix rule sets and word lists for morphspell.
//!
//! This crate holds the two immutable data sources a dictionary is built
//! from, and the parsers that produce them from the usual pair of files:
//!
//! - [`aff`] -- [`AffixRuleSet`]: encoding, flag syntax, affix entries and
//!   compounding rules (the `.aff` file)
//! - [`dic`] -- [`WordSet`]: stems and their flags (the `.dic` file)
//! - [`affix`] -- single affix entries and stem candidate generation
//! - [`condition`] -- affix condition patterns
//! - [`compound`] -- compounding directives

pub mod aff;
pub mod affix;
pub mod compound;
pub mod condition;
pub mod dic;
mod lines;

pub use aff::AffixRuleSet;
pub use affix::{AffixKind, AffixRule};
pub use compound::CompoundRules;
pub use condition::Condition;
pub use dic::WordSet;

use morphspell_core::FlagError;

/// Error type for rule file and word list parsing.
///
/// Line numbers are 1-based.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("read error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: unknown encoding {name:?}")]
    UnknownEncoding { line: usize, name: String },
    #[error("line {line}: encoding {name:?} is neither a single-byte encoding nor UTF-8")]
    UnsupportedEncoding { line: usize, name: String },
    #[error("line {line}: {directive} is missing its value")]
    MissingValue { line: usize, directive: String },
    #[error("line {line}: invalid value {value:?} for {directive}")]
    InvalidValue {
        line: usize,
        directive: String,
        value: String,
    },
    #[error("line {line}: {source}")]
    InvalidFlag {
        line: usize,
        #[source]
        source: FlagError,
    },
    #[error("line {line}: malformed affix entry: {reason}")]
    MalformedAffix { line: usize, reason: String },
    #[error("line {line}: affix group declares {expected} entries but only {found} follow")]
    TruncatedAffixGroup {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: invalid condition {pattern:?}: {reason}")]
    InvalidCondition {
        line: usize,
        pattern: String,
        reason: String,
    },
    #[error("word list does not start with an entry count")]
    MissingWordCount,
    #[error("line {line}: text is not valid {encoding}")]
    InvalidText { line: usize, encoding: String },
}
