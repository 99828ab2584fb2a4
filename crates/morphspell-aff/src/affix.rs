// Affix entries and the stem candidates they produce

use morphspell_core::{CharIterationStrategy, Flag};

use crate::condition::Condition;

/// Which end of a word an affix attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AffixKind {
    Prefix,
    Suffix,
}

/// One `PFX`/`SFX` entry.
///
/// `add` is the text the affix contributes to the surface form and `strip`
/// the text it removed from the stem. Both are in the dictionary encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffixRule {
    pub kind: AffixKind,
    /// The flag a stem must carry for this entry to apply.
    pub flag: Flag,
    /// Whether the entry may combine with an entry of the other direction.
    pub cross_product: bool,
    pub strip: Vec<u8>,
    pub add: Vec<u8>,
    pub condition: Condition,
}

impl AffixRule {
    /// Undo this affix on `word`, returning the stem candidate if the word
    /// carries the affix text and the candidate satisfies the condition.
    ///
    /// The part of the word left after removing the affix text must be
    /// non-empty unless the entry restores stripped text.
    pub fn stem_candidate<S: CharIterationStrategy>(
        &self,
        strategy: S,
        word: &[u8],
    ) -> Option<Vec<u8>> {
        if word.len() < self.add.len() {
            return None;
        }
        let remainder_len = word.len() - self.add.len();
        if remainder_len == 0 && self.strip.is_empty() {
            return None;
        }

        let stem = match self.kind {
            AffixKind::Prefix => {
                let rest = word.strip_prefix(self.add.as_slice())?;
                let mut stem = Vec::with_capacity(self.strip.len() + rest.len());
                stem.extend_from_slice(&self.strip);
                stem.extend_from_slice(rest);
                stem
            }
            AffixKind::Suffix => {
                let rest = word.strip_suffix(self.add.as_slice())?;
                let mut stem = Vec::with_capacity(rest.len() + self.strip.len());
                stem.extend_from_slice(rest);
                stem.extend_from_slice(&self.strip);
                stem
            }
        };

        let satisfied = match self.kind {
            AffixKind::Prefix => self.condition.matches_start(strategy, &stem),
            AffixKind::Suffix => self.condition.matches_end(strategy, &stem),
        };
        satisfied.then_some(stem)
    }
}
