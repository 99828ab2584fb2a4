// POSIX-style locale specifications

use std::fmt;

/// Codeset implied by the `C` and `POSIX` locales.
pub const C_LOCALE_CODESET: &str = "US-ASCII";

/// Names under which locales spell the 7-bit ASCII codeset.
const ASCII_CODESETS: &[&str] = &[
    "us-ascii",
    "ascii",
    "ansi_x3.4-1968",
    "ansi_x3.4-1986",
    "iso646-us",
    "iso_646.irv:1991",
    "iso-ir-6",
    "us",
    "cp367",
    "ibm367",
    "646",
];

/// Whether `name` names plain 7-bit ASCII.
///
/// Encoding tables usually map these names onto a Latin superset, so
/// callers must reject bytes above 0x7F themselves.
pub fn is_ascii_codeset(name: &str) -> bool {
    let name = name.trim();
    ASCII_CODESETS.iter().any(|a| a.eq_ignore_ascii_case(name))
}

/// A locale name of the form `language[_TERRITORY][.codeset][@modifier]`.
///
/// Only the codeset matters to spell checking: it names the encoding the
/// caller's text is in. A locale without one carries no encoding metadata.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    name: String,
    language: String,
    territory: Option<String>,
    codeset: Option<String>,
    modifier: Option<String>,
}

impl Locale {
    /// Split a locale name into its parts. Never fails: anything that is
    /// not a codeset or modifier is kept as the language/territory.
    pub fn parse(name: &str) -> Self {
        let name = name.trim();
        let (rest, modifier) = split_off(name, '@');
        let (rest, codeset) = split_off(rest, '.');
        let (language, territory) = split_off(rest, '_');
        Self {
            name: name.to_string(),
            language: language.to_string(),
            territory: territory.map(str::to_string),
            codeset: codeset.map(str::to_string),
            modifier: modifier.map(str::to_string),
        }
    }

    /// The `C` locale.
    pub fn c() -> Self {
        Self::parse("C")
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn territory(&self) -> Option<&str> {
        self.territory.as_deref()
    }

    pub fn modifier(&self) -> Option<&str> {
        self.modifier.as_deref()
    }

    /// The codeset as written after the `.`, if any.
    pub fn codeset(&self) -> Option<&str> {
        self.codeset.as_deref()
    }

    /// The encoding this locale's text is in: the explicit codeset, or
    /// US-ASCII for `C`/`POSIX`.
    pub fn encoding(&self) -> Option<&str> {
        match self.codeset() {
            Some(codeset) => Some(codeset),
            None if self.is_posix() => Some(C_LOCALE_CODESET),
            None => None,
        }
    }

    fn is_posix(&self) -> bool {
        self.territory.is_none() && (self.language == "C" || self.language == "POSIX")
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::c()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

fn split_off(s: &str, sep: char) -> (&str, Option<&str>) {
    match s.split_once(sep) {
        Some((head, tail)) if !tail.is_empty() => (head, Some(tail)),
        Some((head, _)) => (head, None),
        None => (s, None),
    }
}
