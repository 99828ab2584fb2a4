// Encoding families and the choice between the two matching cores

use encoding_rs::Encoding;

/// Storage family of a text encoding, as far as matching is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncodingFamily {
    /// Every byte is one character (ISO-8859-x, KOI8-R, windows-125x, ...).
    SingleByte,
    /// UTF-8.
    Utf8,
    /// Anything else (UTF-16, Shift_JIS, GB18030, ...). Never matched
    /// directly; input in such an encoding is always converted first.
    MultiByte,
}

impl EncodingFamily {
    pub fn of(encoding: &'static Encoding) -> Self {
        if encoding == encoding_rs::UTF_8 {
            EncodingFamily::Utf8
        } else if encoding.is_single_byte() {
            EncodingFamily::SingleByte
        } else {
            EncodingFamily::MultiByte
        }
    }
}

/// The encoding a dictionary stores its words in.
///
/// Keeps the name as written in the rule file next to the resolved
/// encoding, because rule files use names such as `ISO8859-1` that
/// diagnostics should echo back verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictEncoding {
    name: String,
    encoding: &'static Encoding,
    family: EncodingFamily,
}

/// Encoding assumed when a rule file has no `SET` directive.
pub const DEFAULT_DICT_ENCODING: &str = "ISO8859-1";

impl DictEncoding {
    /// Resolve an encoding label. Returns `None` for labels the encoding
    /// tables do not know.
    pub fn from_label(name: &str) -> Option<Self> {
        let encoding = Encoding::for_label(name.trim().as_bytes())?;
        Some(Self {
            name: name.trim().to_string(),
            encoding,
            family: EncodingFamily::of(encoding),
        })
    }

    /// The name as declared.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    pub fn family(&self) -> EncodingFamily {
        self.family
    }

    /// Whether words in this encoding can be matched by one of the two
    /// matching cores.
    pub fn is_matchable(&self) -> bool {
        self.family != EncodingFamily::MultiByte
    }
}

impl Default for DictEncoding {
    fn default() -> Self {
        Self {
            name: DEFAULT_DICT_ENCODING.to_string(),
            encoding: encoding_rs::WINDOWS_1252,
            family: EncodingFamily::SingleByte,
        }
    }
}

/// Which path a lookup takes for a given source/dictionary encoding pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Source and dictionary share the same single-byte encoding.
    SingleByte,
    /// Source and dictionary are both UTF-8.
    Utf8,
    /// Anything else: convert to the dictionary encoding first.
    Normalize,
}

impl Route {
    pub fn select(source: &'static Encoding, dict: &DictEncoding) -> Self {
        match (EncodingFamily::of(source), dict.family()) {
            (EncodingFamily::Utf8, EncodingFamily::Utf8) => Route::Utf8,
            (EncodingFamily::SingleByte, EncodingFamily::SingleByte)
                if source == dict.encoding() =>
            {
                Route::SingleByte
            }
            _ => Route::Normalize,
        }
    }
}
