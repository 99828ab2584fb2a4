//! Shared types for the morphspell spell checker.
//!
//! - [`enums`] -- [`SpellResult`](enums::SpellResult) and compound roles
//! - [`flags`] -- affix flag syntaxes and flag sets
//! - [`encoding`] -- encoding families and lookup route selection
//! - [`units`] -- character iteration strategies (single-byte, UTF-8 decode)
//! - [`locale`] -- POSIX locale specifications

pub mod encoding;
pub mod enums;
pub mod flags;
pub mod locale;
pub mod units;

pub use encoding::{DictEncoding, EncodingFamily, Route};
pub use enums::{CompoundRole, SpellResult};
pub use flags::{Flag, FlagError, FlagSet, FlagType};
pub use locale::{Locale, is_ascii_codeset};
pub use units::{CharIterationStrategy, SingleByte, Utf8Decode};
