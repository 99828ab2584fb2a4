// Affix stage: single prefix/suffix strips, then combined strips

use morphspell_aff::AffixKind;
use morphspell_core::CharIterationStrategy;

use super::Matcher;

impl<S: CharIterationStrategy> Matcher<'_, S> {
    /// Is `word` a known stem with one affix, or with a combinable
    /// prefix and suffix?
    ///
    /// Entries are tried in declaration order; there is no ranking.
    pub(super) fn is_affixed(&self, word: &[u8]) -> bool {
        let single = self.rules.rules().iter().any(|rule| {
            self.affixed_stem(rule, word)
                .is_some_and(|flags| !self.is_compound_only(flags))
        });
        single || self.is_cross_affixed(word)
    }

    /// Prefix and suffix together. Both entries must belong to groups
    /// declared combinable (`Y`), and the stem must carry both flags.
    fn is_cross_affixed(&self, word: &[u8]) -> bool {
        let rules = self.rules.rules();
        let combinable = |kind: AffixKind| {
            rules
                .iter()
                .filter(move |r| r.kind == kind && r.cross_product)
        };

        for prefix in combinable(AffixKind::Prefix) {
            let Some(inner) = prefix.stem_candidate(self.strategy, word) else {
                continue;
            };
            for suffix in combinable(AffixKind::Suffix) {
                let accepted = self.affixed_stem(suffix, &inner).is_some_and(|flags| {
                    flags.contains(prefix.flag) && !self.is_compound_only(flags)
                });
                if accepted {
                    return true;
                }
            }
        }
        false
    }
}
