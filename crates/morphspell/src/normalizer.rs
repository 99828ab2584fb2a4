// Bringing input into the dictionary encoding

use std::borrow::Cow;

use encoding_rs::Encoding;
use morphspell_core::DictEncoding;

use crate::service::{EncodingError, EncodingService};

/// Converts words from a source encoding into one dictionary's encoding.
pub struct EncodingNormalizer<'a> {
    service: &'a dyn EncodingService,
    target: &'a DictEncoding,
}

impl<'a> EncodingNormalizer<'a> {
    pub fn new(service: &'a dyn EncodingService, target: &'a DictEncoding) -> Self {
        Self { service, target }
    }

    /// `word` in the dictionary encoding. Borrowed when the source already
    /// is that encoding.
    pub fn normalize<'w>(
        &self,
        word: &'w [u8],
        source: &'static Encoding,
    ) -> Result<Cow<'w, [u8]>, EncodingError> {
        if source == self.target.encoding() {
            return Ok(Cow::Borrowed(word));
        }
        self.service
            .transcode(word, source.name(), self.target.name())
            .map(Cow::Owned)
    }
}

/// Decode UTF-16 code units. `None` on unpaired surrogates.
pub fn utf16_to_string(units: &[u16]) -> Option<String> {
    char::decode_utf16(units.iter().copied())
        .collect::<Result<String, _>>()
        .ok()
}

/// Decode UTF-32 code units. `None` on surrogates or values past U+10FFFF.
pub fn utf32_to_string(units: &[u32]) -> Option<String> {
    units.iter().map(|&u| char::from_u32(u)).collect()
}
