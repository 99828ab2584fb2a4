// Shared enums: SpellResult and the compound part roles

/// Classification returned by every lookup.
///
/// The variants are ordered from "no match" to the most derived kind of
/// match, so `result.is_correct()` is the only check most callers need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpellResult {
    /// The word is neither a stem, an affixed stem nor a valid compound.
    #[default]
    NotFound,
    /// The word is present verbatim in the word list.
    Exact,
    /// The word is a stem with a prefix and/or suffix applied.
    Affixed,
    /// The word is a concatenation of two or more permitted parts.
    Compound,
}

impl SpellResult {
    /// Returns `true` for every classification other than `NotFound`.
    #[inline]
    pub fn is_correct(self) -> bool {
        self != SpellResult::NotFound
    }
}

/// Position a part occupies inside a compound word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompoundRole {
    First,
    Middle,
    Last,
}
