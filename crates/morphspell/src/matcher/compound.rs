// Compound stage: left-to-right segmentation into permitted parts

use morphspell_aff::AffixKind;
use morphspell_core::{CharIterationStrategy, CompoundRole};

use super::Matcher;

/// Split points already known not to lead to a segmentation.
///
/// Whether the rest of a word from a given cut can be segmented depends on
/// the cut and on how many parts came before it. Without a part limit only
/// "none" versus "some" matters, so the count is clamped to one. Each
/// state is explored once, so the search stays quadratic in word length.
struct FailedCuts {
    width: usize,
    seen: Vec<bool>,
}

impl FailedCuts {
    fn new(cuts: usize, max_parts: Option<usize>) -> Self {
        let width = match max_parts {
            Some(max) => max.min(cuts) + 1,
            None => 2,
        };
        Self {
            width,
            seen: vec![false; cuts * width],
        }
    }

    fn slot(&self, start: usize, parts: usize) -> usize {
        start * self.width + parts.min(self.width - 1)
    }

    fn contains(&self, start: usize, parts: usize) -> bool {
        self.seen[self.slot(start, parts)]
    }

    fn insert(&mut self, start: usize, parts: usize) {
        let slot = self.slot(start, parts);
        self.seen[slot] = true;
    }
}

impl<S: CharIterationStrategy> Matcher<'_, S> {
    /// Can `word` be split into two or more parts that each may play their
    /// role (first, middle, last)?
    pub(super) fn is_compound(&self, word: &[u8]) -> bool {
        let cuts: Vec<usize> = self.strategy.boundaries(word).collect();
        let mut failed = FailedCuts::new(cuts.len(), self.rules.compound().max_parts);
        self.compound_from(word, &cuts, &mut failed, 0, 0)
    }

    /// Segment `word` from unit index `start`, `parts` parts having been
    /// accepted before it. Longer parts are tried first.
    fn compound_from(
        &self,
        word: &[u8],
        cuts: &[usize],
        failed: &mut FailedCuts,
        start: usize,
        parts: usize,
    ) -> bool {
        if failed.contains(start, parts) {
            return false;
        }
        let rules = self.rules.compound();
        let min = rules.min_length.max(1);
        let end_of_word = cuts.len() - 1;

        for end in (start + min..=end_of_word).rev() {
            let part = &word[cuts[start]..cuts[end]];
            if end == end_of_word {
                if parts >= 1
                    && rules.allows_more_parts(parts)
                    && self.is_compound_part(part, CompoundRole::Last)
                {
                    return true;
                }
                continue;
            }
            if end_of_word - end < min || !rules.allows_more_parts(parts + 1) {
                continue;
            }
            let role = if parts == 0 {
                CompoundRole::First
            } else {
                CompoundRole::Middle
            };
            if self.is_compound_part(part, role)
                && self.compound_from(word, cuts, failed, end, parts + 1)
            {
                return true;
            }
        }
        failed.insert(start, parts);
        false
    }

    /// A part is a stem permitted in `role`. The first part may also carry
    /// a prefix and the last part a suffix, if the stem is permitted.
    fn is_compound_part(&self, part: &[u8], role: CompoundRole) -> bool {
        let rules = self.rules.compound();
        if let Some(flags) = self.words.get(part) {
            if self.is_bare_word(flags) && rules.permits(flags, role) {
                return true;
            }
        }

        let kind = match role {
            CompoundRole::First => AffixKind::Prefix,
            CompoundRole::Last => AffixKind::Suffix,
            CompoundRole::Middle => return false,
        };
        self.rules
            .rules()
            .iter()
            .filter(|rule| rule.kind == kind)
            .any(|rule| {
                self.affixed_stem(rule, part)
                    .is_some_and(|flags| rules.permits(flags, role))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{data, spell};
    use morphspell_core::SpellResult;

    const COMPOUND_AFF: &str = "SET UTF-8\n\
        COMPOUNDMIN 3\n\
        COMPOUNDBEGIN B\n\
        COMPOUNDMIDDLE M\n\
        COMPOUNDLAST L\n\
        ONLYINCOMPOUND O\n\
        PFX U Y 1\n\
        PFX U 0 un .\n\
        SFX S Y 1\n\
        SFX S 0 s .\n";

    const COMPOUND_DIC: &str = "6\nsun/BU\nflower/LS\npot/BML\nberry/OL\nsunny\nbig\n";

    #[test]
    fn begin_then_last() {
        let d = data(COMPOUND_AFF, COMPOUND_DIC);
        assert_eq!(spell(&d, "sunflower"), SpellResult::Compound);
        assert_eq!(spell(&d, "flowersun"), SpellResult::NotFound);
    }

    #[test]
    fn role_flags_are_required() {
        // "sun" may only begin a compound, "big" carries no compound flag
        let d = data(COMPOUND_AFF, COMPOUND_DIC);
        assert_eq!(spell(&d, "potsun"), SpellResult::NotFound);
        assert_eq!(spell(&d, "bigflower"), SpellResult::NotFound);
    }

    #[test]
    fn last_flag_missing_fails_even_if_parts_are_words() {
        let d = data(
            "SET UTF-8\nCOMPOUNDBEGIN X\nCOMPOUNDLAST Y\n",
            "2\nsun/X\nflower\n",
        );
        assert_eq!(spell(&d, "sun"), SpellResult::Exact);
        assert_eq!(spell(&d, "flower"), SpellResult::Exact);
        assert_eq!(spell(&d, "sunflower"), SpellResult::NotFound);

        let d = data(
            "SET UTF-8\nCOMPOUNDBEGIN X\nCOMPOUNDLAST Y\n",
            "2\nsun/X\nflower/Y\n",
        );
        assert_eq!(spell(&d, "sunflower"), SpellResult::Compound);
    }

    #[test]
    fn middle_parts() {
        let d = data(COMPOUND_AFF, COMPOUND_DIC);
        assert_eq!(spell(&d, "sunpotflower"), SpellResult::Compound);
        assert_eq!(spell(&d, "sunpotpotflower"), SpellResult::Compound);
    }

    #[test]
    fn compound_only_parts() {
        let d = data(COMPOUND_AFF, COMPOUND_DIC);
        assert_eq!(spell(&d, "berry"), SpellResult::NotFound);
        assert_eq!(spell(&d, "sunberry"), SpellResult::Compound);
    }

    #[test]
    fn affixes_on_outer_parts() {
        let d = data(COMPOUND_AFF, COMPOUND_DIC);
        assert_eq!(spell(&d, "sunflowers"), SpellResult::Compound);
        assert_eq!(spell(&d, "unsunflower"), SpellResult::Compound);
    }

    #[test]
    fn plain_stems_are_exact_with_compounding_on() {
        let d = data(COMPOUND_AFF, COMPOUND_DIC);
        assert_eq!(spell(&d, "sunny"), SpellResult::Exact);
    }

    #[test]
    fn minimum_part_length() {
        let d = data(
            "SET UTF-8\nCOMPOUNDFLAG C\nCOMPOUNDMIN 4\n",
            "2\nsun/C\nflower/C\n",
        );
        assert_eq!(spell(&d, "flowerflower"), SpellResult::Compound);
        assert_eq!(spell(&d, "sunflower"), SpellResult::NotFound);
        assert_eq!(spell(&d, "flowersun"), SpellResult::NotFound);
    }

    #[test]
    fn minimum_length_counts_characters() {
        // "öö" is four bytes but only two characters
        let d = data(
            "SET UTF-8\nCOMPOUNDFLAG C\nCOMPOUNDMIN 3\n",
            "3\nköö/C\nmaa/C\nöö/C\n",
        );
        assert_eq!(spell(&d, "köömaa"), SpellResult::Compound);
        assert_eq!(spell(&d, "maaköö"), SpellResult::Compound);
        assert_eq!(spell(&d, "öömaa"), SpellResult::NotFound);
        assert_eq!(spell(&d, "maaöö"), SpellResult::NotFound);
    }

    #[test]
    fn word_max_limits_parts() {
        let d = data(
            "SET UTF-8\nCOMPOUNDFLAG C\nCOMPOUNDWORDMAX 2\n",
            "1\ncat/C\n",
        );
        assert_eq!(spell(&d, "catcat"), SpellResult::Compound);
        assert_eq!(spell(&d, "catcatcat"), SpellResult::NotFound);
    }

    #[test]
    fn long_unsplittable_words_finish() {
        let d = data("SET UTF-8\nCOMPOUNDFLAG C\nCOMPOUNDMIN 1\n", "2\na/C\naa/C\n");
        let long = "a".repeat(200);
        assert_eq!(spell(&d, &long), SpellResult::Compound);
        assert_eq!(spell(&d, &format!("{long}b")), SpellResult::NotFound);
        assert_eq!(spell(&d, &format!("b{long}")), SpellResult::NotFound);
    }

    #[test]
    fn long_unsplittable_words_finish_under_a_part_limit() {
        let d = data(
            "SET UTF-8\nCOMPOUNDFLAG C\nCOMPOUNDMIN 1\nCOMPOUNDWORDMAX 60\n",
            "2\na/C\naa/C\n",
        );
        let long = "a".repeat(100);
        assert_eq!(spell(&d, &long), SpellResult::Compound);
        assert_eq!(spell(&d, &format!("{long}b")), SpellResult::NotFound);
        // at least 61 parts would be needed
        assert_eq!(spell(&d, &"a".repeat(121)), SpellResult::NotFound);
    }

    #[test]
    fn no_compounding_without_flags() {
        let d = data("SET UTF-8\n", "2\ncat\ndog\n");
        assert_eq!(spell(&d, "catdog"), SpellResult::NotFound);
    }
}
