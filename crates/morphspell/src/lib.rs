//! Encoding-aware morphological spell checking.
//!
//! A [`Dictionary`] is loaded from a Hunspell-style rule file (`.aff`) and
//! word file (`.dic`) and classifies words as exact stems, affixed forms,
//! compounds, or unknown. Input may arrive in the dictionary's own
//! encoding, in a locale's encoding, as UTF-8, or as UTF-16/UTF-32 code
//! units.
//!
//! ```no_run
//! use morphspell::{Dictionary, SpellResult};
//!
//! let dict = Dictionary::load("/usr/share/hunspell/en_US")?;
//! assert_eq!(dict.check_utf8("cats"), SpellResult::Affixed);
//! # Ok::<(), morphspell::LoadError>(())
//! ```
//!
//! Modules:
//! - [`dictionary`] -- the facade and its lookup entry points
//! - [`matcher`] -- exact, affixed and compound matching
//! - [`normalizer`] -- conversion into the dictionary encoding
//! - [`service`] -- locale resolution and transcoding
//! - [`diagnostics`] -- recoverable lookup problems and their sinks
//! - [`config`] -- dictionary options

pub mod config;
pub mod diagnostics;
pub mod dictionary;
pub mod matcher;
pub mod normalizer;
pub mod service;

pub use config::DictionaryConfig;
pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, LogSink, SilentSink};
pub use dictionary::{Dictionary, LoadError, WideChar};
pub use matcher::Matcher;
pub use normalizer::EncodingNormalizer;
pub use service::{EncodingError, EncodingRs, EncodingService};

pub use morphspell_aff::{AffixRuleSet, ParseError, WordSet};
pub use morphspell_core::{DictEncoding, Locale, SpellResult};
