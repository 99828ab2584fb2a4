// Character iteration strategies over dictionary-encoded byte strings
//
// Words travel through the matcher as byte strings in the dictionary
// encoding. What counts as one "character" (for affix conditions and for
// compound part lengths) depends on that encoding, and is decided here by
// one of two strategies. Neither allocates: units are produced on the fly.

/// Yields the comparable units of a word stored in some encoding.
///
/// Units are plain `u32` values: the byte value for single-byte encodings,
/// the Unicode scalar value for UTF-8.
pub trait CharIterationStrategy: Copy {
    /// The units of `word`, front to back (reversible for suffix checks).
    fn units<'a>(self, word: &'a [u8]) -> impl DoubleEndedIterator<Item = u32> + 'a;

    /// Byte offsets at which a unit starts, followed by `word.len()`.
    ///
    /// An empty word yields just `0`.
    fn boundaries<'a>(self, word: &'a [u8]) -> impl Iterator<Item = usize> + 'a;

    /// Number of units in `word`.
    fn unit_count(self, word: &[u8]) -> usize {
        self.units(word).count()
    }
}

/// One byte, one unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SingleByte;

impl CharIterationStrategy for SingleByte {
    fn units<'a>(self, word: &'a [u8]) -> impl DoubleEndedIterator<Item = u32> + 'a {
        word.iter().map(|&b| u32::from(b))
    }

    fn boundaries<'a>(self, word: &'a [u8]) -> impl Iterator<Item = usize> + 'a {
        0..=word.len()
    }

    #[inline]
    fn unit_count(self, word: &[u8]) -> usize {
        word.len()
    }
}

/// UTF-8 bytes decoded to code points while iterating.
///
/// Callers hand in valid UTF-8 (input is validated at the facade, word
/// lists at parse time, and stems are built by joining valid pieces at
/// character boundaries). Should an invalid tail slip through anyway it is
/// treated as absent rather than panicking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf8Decode;

impl Utf8Decode {
    fn valid_prefix(word: &[u8]) -> &str {
        match std::str::from_utf8(word) {
            Ok(s) => s,
            Err(e) => std::str::from_utf8(&word[..e.valid_up_to()]).unwrap_or_default(),
        }
    }
}

impl CharIterationStrategy for Utf8Decode {
    fn units<'a>(self, word: &'a [u8]) -> impl DoubleEndedIterator<Item = u32> + 'a {
        Self::valid_prefix(word).chars().map(u32::from)
    }

    fn boundaries<'a>(self, word: &'a [u8]) -> impl Iterator<Item = usize> + 'a {
        let text = Self::valid_prefix(word);
        text.char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
    }
}
