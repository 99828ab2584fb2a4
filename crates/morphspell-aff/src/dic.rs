// Word set: the parsed `.dic` file

use std::io::BufRead;

use hashbrown::HashMap;
use morphspell_core::{EncodingFamily, FlagSet};

use crate::ParseError;
use crate::aff::AffixRuleSet;
use crate::lines::ByteLines;

/// Stems of a dictionary, keyed by their bytes in the dictionary encoding.
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    words: HashMap<Box<[u8]>, FlagSet>,
}

impl WordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a word list. The rule set supplies the encoding the words are
    /// validated against and the flag syntax.
    ///
    /// The first non-empty line must hold the entry count. The count is a
    /// capacity hint only; a list with more or fewer entries still loads.
    pub fn parse<R: BufRead>(reader: R, aff: &AffixRuleSet) -> Result<Self, ParseError> {
        let mut lines = ByteLines::new(reader);
        let utf8 = aff.encoding().family() == EncodingFamily::Utf8;

        let declared = loop {
            let Some((_, line)) = lines.next_line()? else {
                return Err(ParseError::MissingWordCount);
            };
            let line = line.trim_ascii();
            if line.is_empty() {
                continue;
            }
            break std::str::from_utf8(line)
                .ok()
                .and_then(|s| s.parse::<usize>().ok())
                .ok_or(ParseError::MissingWordCount)?;
        };

        let mut set = WordSet {
            words: HashMap::with_capacity(declared),
        };
        let mut entries = 0usize;

        while let Some((line_no, line)) = lines.next_line()? {
            if line.starts_with(b"\t") {
                continue;
            }
            let (word, flags) = split_entry(line);
            if word.is_empty() {
                continue;
            }
            if utf8 && std::str::from_utf8(&word).is_err() {
                return Err(ParseError::InvalidText {
                    line: line_no,
                    encoding: aff.encoding().name().to_string(),
                });
            }
            let flags = match flags {
                Some(raw) => aff
                    .flag_type()
                    .parse_flags(raw)
                    .map_err(|source| ParseError::InvalidFlag {
                        line: line_no,
                        source,
                    })?,
                None => FlagSet::new(),
            };
            set.insert(&word, flags);
            entries += 1;
        }

        if entries != declared {
            log::debug!("word list declares {declared} entries but holds {entries}");
        }
        log::debug!("parsed word list: {} distinct words", set.len());
        Ok(set)
    }

    /// Add a stem. A stem that is already present gets the union of both
    /// flag sets.
    pub fn insert(&mut self, word: &[u8], flags: FlagSet) {
        self.words
            .entry(Box::from(word))
            .and_modify(|existing| existing.union_with(&flags))
            .or_insert(flags);
    }

    #[inline]
    pub fn get(&self, word: &[u8]) -> Option<&FlagSet> {
        self.words.get(word)
    }

    #[inline]
    pub fn contains(&self, word: &[u8]) -> bool {
        self.words.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Split an entry line into the unescaped word and its raw flag string.
///
/// Morphological fields start at a tab or at a space followed by a
/// two-character `xx:` tag, and are dropped. `\/` stands for a slash
/// inside the word.
fn split_entry(line: &[u8]) -> (Vec<u8>, Option<&[u8]>) {
    let end = morph_start(line).unwrap_or(line.len());
    let entry = line[..end].trim_ascii_end();

    let mut word = Vec::with_capacity(entry.len());
    let mut i = 0;
    while i < entry.len() {
        match entry[i] {
            b'\\' if entry.get(i + 1) == Some(&b'/') => {
                word.push(b'/');
                i += 2;
            }
            b'/' => return (word, Some(&entry[i + 1..])),
            b => {
                word.push(b);
                i += 1;
            }
        }
    }
    (word, None)
}

fn morph_start(line: &[u8]) -> Option<usize> {
    if let Some(tab) = line.iter().position(|&b| b == b'\t') {
        return Some(tab);
    }
    line.windows(4).position(|w| {
        w[0] == b' ' && w[1].is_ascii_alphanumeric() && w[2].is_ascii_alphanumeric() && w[3] == b':'
    })
}
