// Morphological matching: exact, affixed and compound lookups
//
// One generic matcher serves every input encoding. It only ever sees words
// already in the dictionary encoding; the strategy parameter decides what a
// character is (a byte, or a decoded code point).

mod affix;
mod compound;

use morphspell_aff::{AffixRule, AffixRuleSet, WordSet};
use morphspell_core::{CharIterationStrategy, FlagSet, SpellResult};

/// Classifies words against one rule set and word set.
///
/// Cheap to build: it only borrows the data. Every call to [`spell`] is a
/// pure function of the word and the borrowed data.
///
/// [`spell`]: Matcher::spell
pub struct Matcher<'a, S> {
    rules: &'a AffixRuleSet,
    words: &'a WordSet,
    strategy: S,
}

impl<'a, S: CharIterationStrategy> Matcher<'a, S> {
    pub fn new(rules: &'a AffixRuleSet, words: &'a WordSet, strategy: S) -> Self {
        Self {
            rules,
            words,
            strategy,
        }
    }

    /// Classify `word`. Stages run in a fixed order and the first success
    /// wins: exact stem, affixed stem, compound.
    pub fn spell(&self, word: &[u8]) -> SpellResult {
        if word.is_empty() {
            return SpellResult::NotFound;
        }
        if self.is_exact(word) {
            return SpellResult::Exact;
        }
        if self.is_affixed(word) {
            return SpellResult::Affixed;
        }
        if self.rules.compound().is_enabled() && self.is_compound(word) {
            return SpellResult::Compound;
        }
        SpellResult::NotFound
    }

    fn is_exact(&self, word: &[u8]) -> bool {
        self.words
            .get(word)
            .is_some_and(|flags| self.is_bare_word(flags) && !self.is_compound_only(flags))
    }

    /// Not forbidden and usable without an affix.
    fn is_bare_word(&self, flags: &FlagSet) -> bool {
        !self.is_forbidden(flags) && !flags.contains_opt(self.rules.need_affix())
    }

    fn is_forbidden(&self, flags: &FlagSet) -> bool {
        flags.contains_opt(self.rules.forbidden())
    }

    fn is_compound_only(&self, flags: &FlagSet) -> bool {
        flags.contains_opt(self.rules.compound().only_in_compound)
    }

    /// Undo `rule` on `word` and return the stem's flags if the stem is
    /// known, carries the rule's flag and is not forbidden.
    fn affixed_stem(&self, rule: &AffixRule, word: &[u8]) -> Option<&'a FlagSet> {
        let stem = rule.stem_candidate(self.strategy, word)?;
        let flags = self.words.get(&stem)?;
        (flags.contains(rule.flag) && !self.is_forbidden(flags)).then_some(flags)
    }
}
