// Encoding service: locale-to-encoding resolution and transcoding.
//
// The facade resolves encoding names and converts text only through this
// trait, so embedders can supply their own tables. The default
// implementation is backed by encoding_rs.

use encoding_rs::Encoding;
use morphspell_core::Locale;

/// Error type for transcoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    /// The label names no known encoding.
    #[error("unknown encoding: {0}")]
    UnknownEncoding(String),

    /// The pair cannot be converted (the target has no encoder).
    #[error("conversion from {from} to {to} is not supported")]
    UnsupportedConversion { from: String, to: String },

    /// The input is not valid in the source encoding.
    #[error("input is not valid {0}")]
    Malformed(String),

    /// A character of the input has no mapping in the target encoding.
    #[error("input is not representable in {0}")]
    Unrepresentable(String),
}

/// Locale and conversion services used by the dictionary facade.
pub trait EncodingService: Send + Sync {
    /// The encoding name a locale's text is in, if the locale says.
    fn encoding_name_of(&self, locale: &Locale) -> Option<String>;

    /// Resolve an encoding name. `None` for names the service does not know.
    fn encoding_for(&self, name: &str) -> Option<&'static Encoding>;

    /// Convert `bytes` from encoding `from` to encoding `to`.
    fn transcode(&self, bytes: &[u8], from: &str, to: &str) -> Result<Vec<u8>, EncodingError>;
}

/// [`EncodingService`] backed by `encoding_rs`.
///
/// Labels are matched case-insensitively against the WHATWG label table, so
/// `UTF-8`, `utf8`, `ISO8859-1` and `koi8-r` all resolve.
#[derive(Debug, Clone, Copy, Default)]
pub struct EncodingRs;

impl EncodingRs {
    fn resolve(label: &str) -> Result<&'static Encoding, EncodingError> {
        Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| EncodingError::UnknownEncoding(label.to_string()))
    }
}

impl EncodingService for EncodingRs {
    fn encoding_name_of(&self, locale: &Locale) -> Option<String> {
        locale.encoding().map(str::to_string)
    }

    fn encoding_for(&self, name: &str) -> Option<&'static Encoding> {
        Self::resolve(name).ok()
    }

    fn transcode(&self, bytes: &[u8], from: &str, to: &str) -> Result<Vec<u8>, EncodingError> {
        let source = Self::resolve(from)?;
        let target = Self::resolve(to)?;
        if target.output_encoding() != target {
            return Err(EncodingError::UnsupportedConversion {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        let text = source
            .decode_without_bom_handling_and_without_replacement(bytes)
            .ok_or_else(|| EncodingError::Malformed(from.to_string()))?;
        let (encoded, _, unmappable) = target.encode(&text);
        if unmappable {
            return Err(EncodingError::Unrepresentable(to.to_string()));
        }
        Ok(encoded.into_owned())
    }
}
