// Affix rule set: the parsed `.aff` file

use std::io::BufRead;

use morphspell_core::{DictEncoding, EncodingFamily, Flag, FlagType, SingleByte, Utf8Decode};

use crate::ParseError;
use crate::affix::{AffixKind, AffixRule};
use crate::compound::CompoundRules;
use crate::condition::Condition;
use crate::lines::{ByteLines, fields, text};

/// Everything the matcher needs from a rule file.
///
/// Affix entries keep their declaration order: matching tries them in that
/// order and the first success wins.
#[derive(Debug, Clone, Default)]
pub struct AffixRuleSet {
    encoding: DictEncoding,
    flag_type: FlagType,
    rules: Vec<AffixRule>,
    compound: CompoundRules,
    forbidden: Option<Flag>,
    need_affix: Option<Flag>,
}

/// An affix group header whose entries are still being read.
struct PendingGroup {
    kind: AffixKind,
    flag: Flag,
    cross_product: bool,
    expected: usize,
    found: usize,
    header_line: usize,
}

impl PendingGroup {
    fn is_open(&self) -> bool {
        self.found < self.expected
    }

    fn truncated(&self) -> ParseError {
        ParseError::TruncatedAffixGroup {
            line: self.header_line,
            expected: self.expected,
            found: self.found,
        }
    }
}

impl AffixRuleSet {
    /// Parse a rule file.
    ///
    /// `SET` and `FLAG` should come before the directives that depend on
    /// them; directives are interpreted with the encoding and flag syntax
    /// in effect when they are read.
    pub fn parse<R: BufRead>(reader: R) -> Result<Self, ParseError> {
        let mut set = AffixRuleSet::default();
        let mut lines = ByteLines::new(reader);
        let mut pending: Option<PendingGroup> = None;

        while let Some((line_no, line)) = lines.next_line()? {
            let mut parts = fields(line);
            let Some(directive) = parts.next() else {
                continue;
            };
            if directive.starts_with(b"#") {
                continue;
            }

            let kind = match directive {
                b"PFX" => Some(AffixKind::Prefix),
                b"SFX" => Some(AffixKind::Suffix),
                _ => None,
            };

            if let Some(group) = pending.as_ref().filter(|g| g.is_open()) {
                if kind.is_none() {
                    return Err(group.truncated());
                }
            }

            if let Some(kind) = kind {
                let args: Vec<&[u8]> = parts.collect();
                match pending.as_mut().filter(|g| g.is_open()) {
                    Some(group) => {
                        let rule = set.parse_entry(line_no, kind, group, &args)?;
                        group.found += 1;
                        set.rules.push(rule);
                    }
                    None => pending = Some(set.parse_header(line_no, kind, &args)?),
                }
                continue;
            }

            let value = parts.next();
            set.apply_directive(line_no, directive, value)?;
        }

        if let Some(group) = pending.filter(|g| g.is_open()) {
            return Err(group.truncated());
        }

        log::debug!(
            "parsed affix rules: encoding {}, {} affix entries, compounding {}",
            set.encoding.name(),
            set.rules.len(),
            if set.compound.is_enabled() { "on" } else { "off" },
        );
        Ok(set)
    }

    fn apply_directive(
        &mut self,
        line: usize,
        directive: &[u8],
        value: Option<&[u8]>,
    ) -> Result<(), ParseError> {
        let name = text(directive);
        let required = || {
            value.ok_or_else(|| ParseError::MissingValue {
                line,
                directive: name.clone(),
            })
        };

        match directive {
            b"SET" => {
                let label = text(required()?);
                let encoding =
                    DictEncoding::from_label(&label).ok_or_else(|| ParseError::UnknownEncoding {
                        line,
                        name: label.clone(),
                    })?;
                if !encoding.is_matchable() {
                    return Err(ParseError::UnsupportedEncoding { line, name: label });
                }
                self.encoding = encoding;
            }
            b"FLAG" => {
                let raw = text(required()?);
                self.flag_type =
                    FlagType::from_directive(&raw).ok_or_else(|| ParseError::InvalidValue {
                        line,
                        directive: name.clone(),
                        value: raw.clone(),
                    })?;
            }
            b"COMPOUNDFLAG" => self.compound.flag = Some(self.flag(line, required()?)?),
            b"COMPOUNDBEGIN" => self.compound.begin = Some(self.flag(line, required()?)?),
            b"COMPOUNDMIDDLE" => self.compound.middle = Some(self.flag(line, required()?)?),
            b"COMPOUNDLAST" | b"COMPOUNDEND" => {
                self.compound.last = Some(self.flag(line, required()?)?)
            }
            b"ONLYINCOMPOUND" => {
                self.compound.only_in_compound = Some(self.flag(line, required()?)?)
            }
            b"COMPOUNDMIN" => {
                self.compound.min_length = number(line, &name, required()?)?.max(1);
            }
            b"COMPOUNDWORDMAX" => {
                self.compound.max_parts = Some(number(line, &name, required()?)?);
            }
            b"FORBIDDENWORD" => self.forbidden = Some(self.flag(line, required()?)?),
            b"NEEDAFFIX" | b"PSEUDOROOT" => self.need_affix = Some(self.flag(line, required()?)?),
            _ => log::trace!("line {line}: ignoring directive {name}"),
        }
        Ok(())
    }

    fn parse_header(
        &self,
        line: usize,
        kind: AffixKind,
        args: &[&[u8]],
    ) -> Result<PendingGroup, ParseError> {
        let [flag, cross, count, ..] = args else {
            return Err(ParseError::MalformedAffix {
                line,
                reason: "header needs a flag, Y/N and an entry count".to_string(),
            });
        };
        let cross_product = match *cross {
            b"Y" => true,
            b"N" => false,
            other => {
                return Err(ParseError::MalformedAffix {
                    line,
                    reason: format!("expected Y or N, got {:?}", text(other)),
                });
            }
        };
        Ok(PendingGroup {
            kind,
            flag: self.flag(line, flag)?,
            cross_product,
            expected: number(line, "affix entry count", count)?,
            found: 0,
            header_line: line,
        })
    }

    fn parse_entry(
        &self,
        line: usize,
        kind: AffixKind,
        group: &PendingGroup,
        args: &[&[u8]],
    ) -> Result<AffixRule, ParseError> {
        let malformed = |reason: String| ParseError::MalformedAffix { line, reason };

        let [flag, strip, add, rest @ ..] = args else {
            return Err(malformed("entry needs a flag, strip text and affix text".to_string()));
        };
        if kind != group.kind {
            return Err(malformed("entry direction differs from its group header".to_string()));
        }
        if self.flag(line, flag)? != group.flag {
            return Err(malformed(format!(
                "entry flag {:?} differs from its group header",
                text(flag)
            )));
        }

        let (add, continuation) = match add.iter().position(|&b| b == b'/') {
            Some(slash) => (&add[..slash], Some(&add[slash + 1..])),
            None => (*add, None),
        };
        if let Some(raw) = continuation {
            // Continuation classes are validated but not used for matching.
            self.flag_type
                .parse_flags(raw)
                .map_err(|source| ParseError::InvalidFlag { line, source })?;
        }

        let strip = zero_is_empty(strip);
        let add = zero_is_empty(add);
        if self.encoding.family() == EncodingFamily::Utf8
            && (std::str::from_utf8(strip).is_err() || std::str::from_utf8(add).is_err())
        {
            return Err(ParseError::InvalidText {
                line,
                encoding: self.encoding.name().to_string(),
            });
        }

        let pattern: &[u8] = rest.first().copied().unwrap_or(b".");
        let condition = self
            .parse_condition(pattern)
            .map_err(|reason| ParseError::InvalidCondition {
                line,
                pattern: text(pattern),
                reason,
            })?;

        Ok(AffixRule {
            kind,
            flag: group.flag,
            cross_product: group.cross_product,
            strip: strip.to_vec(),
            add: add.to_vec(),
            condition,
        })
    }

    fn parse_condition(&self, pattern: &[u8]) -> Result<Condition, String> {
        match self.encoding.family() {
            EncodingFamily::Utf8 => Condition::parse(Utf8Decode, pattern),
            _ => Condition::parse(SingleByte, pattern),
        }
    }

    fn flag(&self, line: usize, raw: &[u8]) -> Result<Flag, ParseError> {
        self.flag_type
            .parse_flag(raw)
            .map_err(|source| ParseError::InvalidFlag { line, source })
    }

    // -- accessors ---------------------------------------------------------

    /// The dictionary encoding (`SET`, default ISO8859-1).
    pub fn encoding(&self) -> &DictEncoding {
        &self.encoding
    }

    pub fn flag_type(&self) -> FlagType {
        self.flag_type
    }

    /// Affix entries in declaration order.
    pub fn rules(&self) -> &[AffixRule] {
        &self.rules
    }

    pub fn compound(&self) -> &CompoundRules {
        &self.compound
    }

    pub fn forbidden(&self) -> Option<Flag> {
        self.forbidden
    }

    pub fn need_affix(&self) -> Option<Flag> {
        self.need_affix
    }
}

fn zero_is_empty(raw: &[u8]) -> &[u8] {
    if raw == b"0" { &[] } else { raw }
}

fn number(line: usize, directive: &str, raw: &[u8]) -> Result<usize, ParseError> {
    std::str::from_utf8(raw)
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| ParseError::InvalidValue {
            line,
            directive: directive.to_string(),
            value: text(raw),
        })
}
