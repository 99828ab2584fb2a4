// Affix conditions: `.`, literal units, `[...]` and `[^...]`

use morphspell_core::CharIterationStrategy;

const DOT: u32 = b'.' as u32;
const OPEN: u32 = b'[' as u32;
const CLOSE: u32 = b']' as u32;
const CARET: u32 = b'^' as u32;

/// One position of a condition pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Any,
    Unit(u32),
    OneOf(Vec<u32>),
    NoneOf(Vec<u32>),
}

impl Token {
    #[inline]
    fn accepts(&self, unit: u32) -> bool {
        match self {
            Token::Any => true,
            Token::Unit(u) => *u == unit,
            Token::OneOf(set) => set.contains(&unit),
            Token::NoneOf(set) => !set.contains(&unit),
        }
    }
}

/// A condition a stem must satisfy at its affixed end.
///
/// Units are in the same space as the strategy the condition was parsed
/// with, so a condition must be matched with that same strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Condition {
    tokens: Vec<Token>,
}

impl Condition {
    /// Parse a condition written in the dictionary encoding.
    ///
    /// A lone `.` is the empty condition. Returns a description of the
    /// problem for unterminated or empty brackets.
    pub fn parse<S: CharIterationStrategy>(strategy: S, pattern: &[u8]) -> Result<Self, String> {
        if pattern == b"." {
            return Ok(Self::default());
        }
        let mut tokens = Vec::new();
        let mut units = strategy.units(pattern);
        while let Some(unit) = units.next() {
            let token = match unit {
                DOT => Token::Any,
                OPEN => {
                    let mut set = Vec::new();
                    let mut negated = false;
                    let mut closed = false;
                    let mut first = true;
                    for u in units.by_ref() {
                        if u == CLOSE {
                            closed = true;
                            break;
                        }
                        if first && u == CARET {
                            negated = true;
                        } else {
                            set.push(u);
                        }
                        first = false;
                    }
                    if !closed {
                        return Err("unterminated '['".to_string());
                    }
                    if set.is_empty() {
                        return Err("empty character class".to_string());
                    }
                    if negated {
                        Token::NoneOf(set)
                    } else {
                        Token::OneOf(set)
                    }
                }
                CLOSE => return Err("unbalanced ']'".to_string()),
                u => Token::Unit(u),
            };
            tokens.push(token);
        }
        Ok(Self { tokens })
    }

    /// Number of units the condition spans.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Does the start of `stem` satisfy the condition (prefix entries)?
    pub fn matches_start<S: CharIterationStrategy>(&self, strategy: S, stem: &[u8]) -> bool {
        let mut units = strategy.units(stem);
        self.tokens
            .iter()
            .all(|token| units.next().is_some_and(|u| token.accepts(u)))
    }

    /// Does the end of `stem` satisfy the condition (suffix entries)?
    pub fn matches_end<S: CharIterationStrategy>(&self, strategy: S, stem: &[u8]) -> bool {
        let mut units = strategy.units(stem).rev();
        self.tokens
            .iter()
            .rev()
            .all(|token| units.next().is_some_and(|u| token.accepts(u)))
    }
}
