// Dictionary: the lookup facade.
//
// Owns one affix rule set and one word set, both immutable after loading,
// and exposes one lookup entry point per input representation. Every entry
// point ends up in one of two matching cores (single-byte or UTF-8 decode);
// pairs that fit neither are converted to the dictionary encoding first.
//
// Lookups are total: encoding problems become a diagnostic plus NotFound.

use std::ffi::OsString;
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use encoding_rs::Encoding;
use morphspell_aff::{AffixRuleSet, ParseError, WordSet};
use morphspell_core::{
    CharIterationStrategy, DictEncoding, EncodingFamily, Locale, Route, SingleByte, SpellResult,
    Utf8Decode, is_ascii_codeset,
};

use crate::config::DictionaryConfig;
use crate::diagnostics::Diagnostic;
use crate::matcher::Matcher;
use crate::normalizer::{EncodingNormalizer, utf16_to_string, utf32_to_string};
use crate::service::EncodingError;

/// Platform wide character: UTF-16 code unit on Windows, UTF-32 elsewhere.
#[cfg(windows)]
pub type WideChar = u16;
/// Platform wide character: UTF-16 code unit on Windows, UTF-32 elsewhere.
#[cfg(not(windows))]
pub type WideChar = u32;

/// Error type for dictionary construction.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// A dictionary file could not be opened or read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The rule file is malformed.
    #[error("invalid rule file: {0}")]
    Affix(#[source] ParseError),

    /// The word file is malformed.
    #[error("invalid word file: {0}")]
    Words(#[source] ParseError),
}

/// A loaded spelling dictionary.
///
/// Read-only after construction, so one instance may serve lookups from
/// any number of threads.
pub struct Dictionary {
    rules: AffixRuleSet,
    words: WordSet,
    config: DictionaryConfig,
}

impl Dictionary {
    /// An empty dictionary: every lookup returns `NotFound`.
    pub fn new() -> Self {
        Self::with_config(DictionaryConfig::default())
    }

    pub fn with_config(config: DictionaryConfig) -> Self {
        Self {
            rules: AffixRuleSet::default(),
            words: WordSet::default(),
            config,
        }
    }

    /// Load `<base>.aff` and `<base>.dic` with the default configuration.
    pub fn load(base: impl AsRef<Path>) -> Result<Self, LoadError> {
        Self::load_with(base, DictionaryConfig::default())
    }

    /// Load `<base>.aff` and `<base>.dic`.
    ///
    /// The rule file is parsed first: it declares the encoding and flag
    /// syntax the word file is read with.
    pub fn load_with(base: impl AsRef<Path>, config: DictionaryConfig) -> Result<Self, LoadError> {
        let base = base.as_ref();
        let aff_path = with_suffix(base, ".aff");
        let dic_path = with_suffix(base, ".dic");
        let aff = open(&aff_path)?;
        let dic = open(&dic_path)?;

        let rules = AffixRuleSet::parse(aff).map_err(|e| reading(e, &aff_path, LoadError::Affix))?;
        let words =
            WordSet::parse(dic, &rules).map_err(|e| reading(e, &dic_path, LoadError::Words))?;
        log::debug!(
            "loaded dictionary {}: {} words, {} affix entries, encoding {}",
            base.display(),
            words.len(),
            rules.rules().len(),
            rules.encoding().name()
        );
        Ok(Self {
            rules,
            words,
            config,
        })
    }

    /// Build from in-memory rule and word file contents.
    pub fn from_bytes(aff: &[u8], dic: &[u8], config: DictionaryConfig) -> Result<Self, LoadError> {
        let rules = AffixRuleSet::parse(aff).map_err(LoadError::Affix)?;
        let words = WordSet::parse(dic, &rules).map_err(LoadError::Words)?;
        Ok(Self {
            rules,
            words,
            config,
        })
    }

    pub fn encoding(&self) -> &DictEncoding {
        self.rules.encoding()
    }

    /// Number of distinct stems.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn affix_rules(&self) -> &AffixRuleSet {
        &self.rules
    }

    pub fn config(&self) -> &DictionaryConfig {
        &self.config
    }

    /// Check a word already in the dictionary encoding.
    pub fn check_dict_encoding(&self, word: &[u8]) -> SpellResult {
        if self.encoding().family() == EncodingFamily::Utf8 && std::str::from_utf8(word).is_err() {
            self.report(Diagnostic::InvalidInput {
                representation: "UTF-8",
            });
            return SpellResult::NotFound;
        }
        self.spell_native(word)
    }

    /// Check a word in the configured system locale's encoding.
    pub fn check_system_locale(&self, word: &[u8]) -> SpellResult {
        match self.locale_encoding(&self.config.system_locale, word) {
            Some(source) => self.check_encoded(word, source),
            None => SpellResult::NotFound,
        }
    }

    /// Check a word in the encoding named by `locale`.
    ///
    /// Only literal membership in the word list is tested here: no affix
    /// stripping and no compounding.
    pub fn check_with_locale(&self, word: &[u8], locale: &Locale) -> SpellResult {
        let Some(source) = self.locale_encoding(locale, word) else {
            return SpellResult::NotFound;
        };
        let normalizer = EncodingNormalizer::new(&*self.config.encoding_service, self.encoding());
        match normalizer.normalize(word, source) {
            Ok(native) if self.words.contains(&native) => SpellResult::Exact,
            Ok(_) => SpellResult::NotFound,
            Err(e) => {
                self.report_conversion(source, e);
                SpellResult::NotFound
            }
        }
    }

    /// Check a UTF-8 word.
    ///
    /// Against a UTF-8 dictionary the bytes are matched as they are. Against
    /// a single-byte dictionary the word is first transcoded into one owned
    /// buffer in the dictionary encoding, so the single-byte core can run
    /// on it; decoding on the fly is not attempted there.
    pub fn check_utf8(&self, word: &str) -> SpellResult {
        self.check_encoded(word.as_bytes(), encoding_rs::UTF_8)
    }

    pub fn check_utf16(&self, word: &[u16]) -> SpellResult {
        match utf16_to_string(word) {
            Some(text) => self.check_utf8(&text),
            None => self.invalid("UTF-16"),
        }
    }

    pub fn check_utf32(&self, word: &[u32]) -> SpellResult {
        match utf32_to_string(word) {
            Some(text) => self.check_utf8(&text),
            None => self.invalid("UTF-32"),
        }
    }

    /// Check a word of platform wide characters.
    pub fn check_wide(&self, word: &[WideChar]) -> SpellResult {
        #[cfg(windows)]
        {
            self.check_utf16(word)
        }
        #[cfg(not(windows))]
        {
            self.check_utf32(word)
        }
    }

    /// Route `word` from `source` to one of the matching cores.
    fn check_encoded(&self, word: &[u8], source: &'static Encoding) -> SpellResult {
        match Route::select(source, self.encoding()) {
            Route::SingleByte => self.spell_with(SingleByte, word),
            Route::Utf8 => match std::str::from_utf8(word) {
                Ok(_) => self.spell_with(Utf8Decode, word),
                Err(_) => self.invalid("UTF-8"),
            },
            Route::Normalize => {
                let normalizer =
                    EncodingNormalizer::new(&*self.config.encoding_service, self.encoding());
                match normalizer.normalize(word, source) {
                    Ok(native) => self.spell_native(&native),
                    Err(e) => {
                        self.report_conversion(source, e);
                        SpellResult::NotFound
                    }
                }
            }
        }
    }

    /// Match a word that is already in the dictionary encoding.
    fn spell_native(&self, word: &[u8]) -> SpellResult {
        match self.encoding().family() {
            EncodingFamily::SingleByte => self.spell_with(SingleByte, word),
            EncodingFamily::Utf8 => self.spell_with(Utf8Decode, word),
            EncodingFamily::MultiByte => SpellResult::NotFound,
        }
    }

    fn spell_with<S: CharIterationStrategy>(&self, strategy: S, word: &[u8]) -> SpellResult {
        Matcher::new(&self.rules, &self.words, strategy).spell(word)
    }

    /// Resolve the encoding `word` is in when it comes from `locale`,
    /// reporting why not. An ASCII codeset rejects bytes above 0x7F.
    fn locale_encoding(&self, locale: &Locale, word: &[u8]) -> Option<&'static Encoding> {
        let service = &self.config.encoding_service;
        let Some(name) = service.encoding_name_of(locale) else {
            self.report(Diagnostic::EncodingInfoMissing {
                locale: locale.name().to_string(),
            });
            return None;
        };
        let Some(encoding) = service.encoding_for(&name) else {
            self.report(Diagnostic::UnsupportedConversion {
                from: name.clone(),
                to: self.encoding().name().to_string(),
                reason: EncodingError::UnknownEncoding(name).to_string(),
            });
            return None;
        };
        if is_ascii_codeset(&name) && !word.is_ascii() {
            self.report(Diagnostic::InvalidInput {
                representation: "US-ASCII",
            });
            return None;
        }
        Some(encoding)
    }

    fn invalid(&self, representation: &'static str) -> SpellResult {
        self.report(Diagnostic::InvalidInput { representation });
        SpellResult::NotFound
    }

    fn report_conversion(&self, source: &'static Encoding, error: EncodingError) {
        self.report(Diagnostic::UnsupportedConversion {
            from: source.name().to_string(),
            to: self.encoding().name().to_string(),
            reason: error.to_string(),
        });
    }

    fn report(&self, diagnostic: Diagnostic) {
        self.config.diagnostics.report(&diagnostic);
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dictionary")
            .field("encoding", &self.encoding().name())
            .field("words", &self.words.len())
            .field("affix_rules", &self.rules.rules().len())
            .finish_non_exhaustive()
    }
}

fn with_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut path = OsString::from(base.as_os_str());
    path.push(suffix);
    PathBuf::from(path)
}

fn open(path: &Path) -> Result<BufReader<File>, LoadError> {
    File::open(path).map(BufReader::new).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read failures part way through a file still name the file.
fn reading(error: ParseError, path: &Path, wrap: fn(ParseError) -> LoadError) -> LoadError {
    match error {
        ParseError::Io(source) => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => wrap(other),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::diagnostics::CollectingSink;

    const AFF: &str = "SET UTF-8\nSFX S Y 1\nSFX S 0 s .\n";
    const DIC: &str = "2\ncat/S\ndog\n";

    fn collecting() -> (Arc<CollectingSink>, DictionaryConfig) {
        let sink = Arc::new(CollectingSink::new());
        let config = DictionaryConfig {
            diagnostics: sink.clone(),
            ..DictionaryConfig::default()
        };
        (sink, config)
    }

    fn utf8_dictionary(config: DictionaryConfig) -> Dictionary {
        Dictionary::from_bytes(AFF.as_bytes(), DIC.as_bytes(), config).unwrap()
    }

    #[test]
    fn empty_dictionary_finds_nothing() {
        let dict = Dictionary::new();
        assert_eq!(dict.word_count(), 0);
        assert_eq!(dict.check_utf8("cat"), SpellResult::NotFound);
        assert_eq!(dict.check_dict_encoding(b"cat"), SpellResult::NotFound);
        assert_eq!(dict.encoding().name(), "ISO8859-1");
    }

    #[test]
    fn utf8_scenario() {
        let dict = utf8_dictionary(DictionaryConfig::default());
        assert_eq!(dict.check_utf8("cat"), SpellResult::Exact);
        assert_eq!(dict.check_utf8("cats"), SpellResult::Affixed);
        assert_eq!(dict.check_utf8("bird"), SpellResult::NotFound);
        assert_eq!(dict.check_dict_encoding(b"cats"), SpellResult::Affixed);
    }

    #[test]
    fn invalid_dict_encoded_utf8_is_reported() {
        let (sink, config) = collecting();
        let dict = utf8_dictionary(config);
        assert_eq!(dict.check_dict_encoding(b"ca\xfft"), SpellResult::NotFound);
        assert_eq!(
            sink.take(),
            vec![Diagnostic::InvalidInput {
                representation: "UTF-8"
            }]
        );
    }

    #[test]
    fn wide_entry_points_agree_with_utf8() {
        let dict = utf8_dictionary(DictionaryConfig::default());
        for word in ["cat", "cats", "dog", "dogs", "bird"] {
            let utf16: Vec<u16> = word.encode_utf16().collect();
            let utf32: Vec<u32> = word.chars().map(u32::from).collect();
            let wide: Vec<WideChar> = word.chars().map(|c| c as WideChar).collect();
            let expected = dict.check_utf8(word);
            assert_eq!(dict.check_utf16(&utf16), expected, "{word}");
            assert_eq!(dict.check_utf32(&utf32), expected, "{word}");
            assert_eq!(dict.check_wide(&wide), expected, "{word}");
        }
    }

    #[test]
    fn invalid_wide_input_is_reported() {
        let (sink, config) = collecting();
        let dict = utf8_dictionary(config);
        assert_eq!(dict.check_utf16(&[0x63, 0xd800]), SpellResult::NotFound);
        assert_eq!(dict.check_utf32(&[0x11_0000]), SpellResult::NotFound);
        assert_eq!(
            sink.take(),
            vec![
                Diagnostic::InvalidInput {
                    representation: "UTF-16"
                },
                Diagnostic::InvalidInput {
                    representation: "UTF-32"
                },
            ]
        );
    }

    #[test]
    fn locale_without_codeset() {
        let (sink, config) = collecting();
        let dict = utf8_dictionary(config);
        let locale = Locale::parse("fr_FR");
        assert_eq!(dict.check_with_locale(b"cat", &locale), SpellResult::NotFound);
        assert_eq!(
            sink.take(),
            vec![Diagnostic::EncodingInfoMissing {
                locale: "fr_FR".to_string()
            }]
        );
    }

    #[test]
    fn locale_lookup_is_literal() {
        let dict = utf8_dictionary(DictionaryConfig::default());
        let locale = Locale::parse("en_US.UTF-8");
        assert_eq!(dict.check_with_locale(b"cat", &locale), SpellResult::Exact);
        assert_eq!(dict.check_with_locale(b"cats", &locale), SpellResult::NotFound);
    }

    #[test]
    fn unknown_locale_codeset_is_reported() {
        let (sink, config) = collecting();
        let dict = utf8_dictionary(config);
        let locale = Locale::parse("xx_XX.NOPE-42");
        assert_eq!(dict.check_with_locale(b"cat", &locale), SpellResult::NotFound);
        assert!(matches!(
            sink.take().as_slice(),
            [Diagnostic::UnsupportedConversion { from, .. }] if from == "NOPE-42"
        ));
    }

    #[test]
    fn system_locale_defaults_to_c() {
        let dict = utf8_dictionary(DictionaryConfig::default());
        assert_eq!(dict.check_system_locale(b"cats"), SpellResult::Affixed);
    }

    #[test]
    fn c_locale_rejects_non_ascii_bytes() {
        let (sink, config) = collecting();
        let dict = Dictionary::from_bytes(
            "SET UTF-8\n".as_bytes(),
            "2\ncafé\ncat\n".as_bytes(),
            config,
        )
        .unwrap();
        assert_eq!(dict.check_system_locale(b"caf\xe9"), SpellResult::NotFound);
        assert_eq!(dict.check_with_locale(b"caf\xe9", &Locale::c()), SpellResult::NotFound);
        assert_eq!(
            dict.check_with_locale(b"caf\xe9", &Locale::parse("POSIX")),
            SpellResult::NotFound
        );
        assert_eq!(
            sink.take(),
            vec![
                Diagnostic::InvalidInput {
                    representation: "US-ASCII"
                };
                3
            ]
        );
        assert_eq!(dict.check_system_locale(b"cat"), SpellResult::Exact);
        assert!(sink.is_empty());
    }

    #[test]
    fn latin1_locale_still_accepts_high_bytes() {
        let dict = Dictionary::from_bytes(
            "SET UTF-8\n".as_bytes(),
            "1\ncafé\n".as_bytes(),
            DictionaryConfig::default(),
        )
        .unwrap();
        let latin1 = Locale::parse("fr_FR.ISO-8859-1");
        assert_eq!(dict.check_with_locale(b"caf\xe9", &latin1), SpellResult::Exact);
    }

    #[test]
    fn debug_output_summarises() {
        let dict = utf8_dictionary(DictionaryConfig::default());
        let out = format!("{dict:?}");
        assert!(out.contains("UTF-8"));
        assert!(out.contains("words: 2"));
    }

    #[test]
    fn dictionary_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Dictionary>();
    }

    #[test]
    fn with_suffix_appends() {
        assert_eq!(
            with_suffix(Path::new("/tmp/en_US"), ".aff"),
            PathBuf::from("/tmp/en_US.aff")
        );
        assert_eq!(
            with_suffix(Path::new("dicts/v1.2"), ".dic"),
            PathBuf::from("dicts/v1.2.dic")
        );
    }
}
