// Compounding rules

use morphspell_core::{CompoundRole, Flag, FlagSet};

/// Default minimum part length, in units.
pub const DEFAULT_COMPOUND_MIN: usize = 3;

/// Compounding directives of a rule file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundRules {
    /// `COMPOUNDFLAG`: the part may appear in any position.
    pub flag: Option<Flag>,
    /// `COMPOUNDBEGIN`
    pub begin: Option<Flag>,
    /// `COMPOUNDMIDDLE`
    pub middle: Option<Flag>,
    /// `COMPOUNDLAST`
    pub last: Option<Flag>,
    /// `ONLYINCOMPOUND`: the stem is not a word on its own.
    pub only_in_compound: Option<Flag>,
    /// `COMPOUNDMIN`
    pub min_length: usize,
    /// `COMPOUNDWORDMAX`
    pub max_parts: Option<usize>,
}

impl Default for CompoundRules {
    fn default() -> Self {
        Self {
            flag: None,
            begin: None,
            middle: None,
            last: None,
            only_in_compound: None,
            min_length: DEFAULT_COMPOUND_MIN,
            max_parts: None,
        }
    }
}

impl CompoundRules {
    /// Compounding is on as soon as any positional flag is declared.
    pub fn is_enabled(&self) -> bool {
        self.flag.is_some() || self.begin.is_some() || self.middle.is_some() || self.last.is_some()
    }

    /// Whether a stem with `flags` may play `role` in a compound.
    pub fn permits(&self, flags: &FlagSet, role: CompoundRole) -> bool {
        if flags.contains_opt(self.flag) {
            return true;
        }
        let positional = match role {
            CompoundRole::First => self.begin,
            CompoundRole::Middle => self.middle,
            CompoundRole::Last => self.last,
        };
        flags.contains_opt(positional)
    }

    /// Whether a compound may have another part after `parts` parts.
    pub fn allows_more_parts(&self, parts: usize) -> bool {
        self.max_parts.is_none_or(|max| parts < max)
    }
}
