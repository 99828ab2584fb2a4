// Affix flags: flag syntaxes and sorted flag sets

/// A single affix flag. All flag syntaxes map into the same 16-bit space.
pub type Flag = u16;

/// Error produced when a flag string does not follow the declared syntax.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlagError {
    #[error("long flags come in pairs, got an odd number of bytes in {0:?}")]
    OddLongFlag(String),
    #[error("invalid numeric flag {0:?}")]
    InvalidNumber(String),
    #[error("numeric flag {0} is out of range (1..=65509)")]
    NumberOutOfRange(u32),
    #[error("flag string {0:?} is not valid UTF-8")]
    InvalidUtf8(String),
    #[error("flag character {0:?} is outside the Basic Multilingual Plane")]
    OutsideBmp(char),
    #[error("empty flag")]
    Empty,
    #[error("expected a single flag, got {0:?}")]
    NotSingle(String),
}

/// Largest value accepted by the numeric flag syntax.
const MAX_NUMERIC_FLAG: u32 = 65509;

/// How flags are written in the rule and word files (`FLAG` directive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlagType {
    /// One byte per flag (no `FLAG` directive).
    #[default]
    Single,
    /// Two bytes per flag (`FLAG long`).
    Long,
    /// Comma separated decimal numbers (`FLAG num`).
    Numeric,
    /// One UTF-8 character per flag (`FLAG UTF-8`).
    Utf8,
}

impl FlagType {
    /// Parse the argument of a `FLAG` directive. Returns `None` for
    /// unknown syntaxes.
    pub fn from_directive(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "long" => Some(FlagType::Long),
            "num" => Some(FlagType::Numeric),
            "utf-8" | "utf8" => Some(FlagType::Utf8),
            _ => None,
        }
    }

    /// Parse a whole flag string such as the part after `/` in a word
    /// list entry.
    pub fn parse_flags(self, raw: &[u8]) -> Result<FlagSet, FlagError> {
        self.parse_sequence(raw).map(FlagSet::from_vec)
    }

    /// Parse a flag string that must name exactly one flag (affix group
    /// names, `COMPOUNDFLAG` and friends).
    pub fn parse_flag(self, raw: &[u8]) -> Result<Flag, FlagError> {
        match self.parse_sequence(raw)?.as_slice() {
            [] => Err(FlagError::Empty),
            [flag] => Ok(*flag),
            _ => Err(FlagError::NotSingle(lossy(raw))),
        }
    }

    /// Flags in the order written.
    fn parse_sequence(self, raw: &[u8]) -> Result<Vec<Flag>, FlagError> {
        let flags = match self {
            FlagType::Single => raw.iter().map(|&b| Flag::from(b)).collect(),
            FlagType::Long => {
                if raw.len() % 2 != 0 {
                    return Err(FlagError::OddLongFlag(lossy(raw)));
                }
                raw.chunks_exact(2)
                    .map(|pair| (Flag::from(pair[0]) << 8) | Flag::from(pair[1]))
                    .collect()
            }
            FlagType::Numeric => {
                let text = std::str::from_utf8(raw)
                    .map_err(|_| FlagError::InvalidNumber(lossy(raw)))?;
                let mut flags = Vec::new();
                for part in text.split(',').filter(|p| !p.is_empty()) {
                    flags.push(parse_numeric(part)?);
                }
                flags
            }
            FlagType::Utf8 => {
                let text =
                    std::str::from_utf8(raw).map_err(|_| FlagError::InvalidUtf8(lossy(raw)))?;
                let mut flags = Vec::with_capacity(text.len());
                for ch in text.chars() {
                    flags.push(Flag::try_from(u32::from(ch)).map_err(|_| FlagError::OutsideBmp(ch))?);
                }
                flags
            }
        };
        Ok(flags)
    }
}

fn parse_numeric(part: &str) -> Result<Flag, FlagError> {
    let value: u32 = part
        .trim()
        .parse()
        .map_err(|_| FlagError::InvalidNumber(part.to_string()))?;
    if value == 0 || value > MAX_NUMERIC_FLAG {
        return Err(FlagError::NumberOutOfRange(value));
    }
    Ok(value as Flag)
}

fn lossy(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

/// A sorted, deduplicated set of flags attached to a word list entry.
///
/// Entries rarely carry more than a handful of flags, so a sorted vector
/// with binary search beats a hash set here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagSet(Vec<Flag>);

impl FlagSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn from_vec(mut flags: Vec<Flag>) -> Self {
        flags.sort_unstable();
        flags.dedup();
        Self(flags)
    }

    #[inline]
    pub fn contains(&self, flag: Flag) -> bool {
        self.0.binary_search(&flag).is_ok()
    }

    /// `true` when `flag` is declared and present in the set.
    #[inline]
    pub fn contains_opt(&self, flag: Option<Flag>) -> bool {
        flag.is_some_and(|f| self.contains(f))
    }

    /// Merge another set into this one (homonym entries in a word list).
    pub fn union_with(&mut self, other: &FlagSet) {
        self.0.extend_from_slice(&other.0);
        self.0.sort_unstable();
        self.0.dedup();
    }

    pub fn as_slice(&self) -> &[Flag] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Flag> for FlagSet {
    fn from_iter<I: IntoIterator<Item = Flag>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_flags_are_bytes() {
        let set = FlagType::Single.parse_flags(b"SDS").unwrap();
        assert_eq!(set.as_slice(), &[b'D' as Flag, b'S' as Flag]);
    }

    #[test]
    fn long_flags_are_pairs() {
        let set = FlagType::Long.parse_flags(b"AaBb").unwrap();
        assert!(set.contains((b'A' as Flag) << 8 | b'a' as Flag));
        assert!(set.contains((b'B' as Flag) << 8 | b'b' as Flag));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn odd_long_flag_is_rejected() {
        assert!(matches!(
            FlagType::Long.parse_flags(b"AaB"),
            Err(FlagError::OddLongFlag(_))
        ));
    }

    #[test]
    fn numeric_flags_are_comma_separated() {
        let set = FlagType::Numeric.parse_flags(b"501,3,77").unwrap();
        assert_eq!(set.as_slice(), &[3, 77, 501]);
    }

    #[test]
    fn numeric_flag_range_is_checked() {
        assert_eq!(
            FlagType::Numeric.parse_flags(b"70000"),
            Err(FlagError::NumberOutOfRange(70000))
        );
        assert!(matches!(
            FlagType::Numeric.parse_flags(b"1x"),
            Err(FlagError::InvalidNumber(_))
        ));
    }

    #[test]
    fn utf8_flags_are_code_points() {
        let set = FlagType::Utf8.parse_flags("äb".as_bytes()).unwrap();
        assert!(set.contains(0xE4));
        assert!(set.contains(b'b' as Flag));
    }

    #[test]
    fn utf8_flags_reject_astral_characters() {
        assert_eq!(
            FlagType::Utf8.parse_flags("😀".as_bytes()),
            Err(FlagError::OutsideBmp('😀'))
        );
    }

    #[test]
    fn parse_flag_requires_one_flag() {
        assert_eq!(FlagType::Single.parse_flag(b"X"), Ok(b'X' as Flag));
        assert_eq!(FlagType::Single.parse_flag(b""), Err(FlagError::Empty));
        assert_eq!(
            FlagType::Single.parse_flag(b"ZA"),
            Err(FlagError::NotSingle("ZA".to_string()))
        );
        assert_eq!(FlagType::Long.parse_flag(b"Aa"), Ok(0x4161));
        assert!(matches!(
            FlagType::Long.parse_flag(b"AaBb"),
            Err(FlagError::NotSingle(_))
        ));
        assert_eq!(FlagType::Numeric.parse_flag(b"12"), Ok(12));
        assert!(matches!(
            FlagType::Numeric.parse_flag(b"12,7"),
            Err(FlagError::NotSingle(_))
        ));
    }

    #[test]
    fn directive_values() {
        assert_eq!(FlagType::from_directive("long"), Some(FlagType::Long));
        assert_eq!(FlagType::from_directive("NUM"), Some(FlagType::Numeric));
        assert_eq!(FlagType::from_directive("UTF-8"), Some(FlagType::Utf8));
        assert_eq!(FlagType::from_directive("short"), None);
    }

    #[test]
    fn union_keeps_set_sorted() {
        let mut a = FlagSet::from_vec(vec![5, 1]);
        a.union_with(&FlagSet::from_vec(vec![3, 5]));
        assert_eq!(a.as_slice(), &[1, 3, 5]);
        assert!(a.contains_opt(Some(3)));
        assert!(!a.contains_opt(None));
    }
}
