//! Map note tag parser.
//!
//! A map opts into encounter adjustments with a single tag in its note:
//!
//! ```text
//! <Encounter Rates L10=0.0 L8=0.6 S3=0.3>
//! ```
//!
//! The tag name is case-insensitive and accepts `-`, `_` or a space between the
//! two words. Inside the tag, every `L<level>=<rate>` and `S<switch>=<rate>`
//! occurrence is a token, in any order and any case. Tokens need no particular
//! separator: `L5=0.5,L3=0.2` holds two of them, and a rate is read up to the
//! first character that cannot be part of a decimal number.
//!
//! Malformed input never fails the parse:
//! - an unparsable rate becomes `1.0`, a negative one `0.0`
//! - a zero or unparsable id drops the token
//! - a switch id outside the declared switch table drops the token
//! - a repeated level threshold keeps the last rate
//!
//! Multipliers are combined by multiplication when the rate is evaluated. A
//! product too large for an `f64` counts as an evaluation failure, so the map
//! falls back to the neutral rate instead of guaranteeing encounters.

use std::collections::BTreeMap;

use game_core::SwitchId;
use tracing::trace;

use super::error::TokenError;
use super::rule::{LevelModifier, MapEncounterRule};

const TAG_FIRST_WORD: &str = "encounter";
const TAG_SECOND_WORD: &str = "rates";

/// Result of parsing one map note.
#[derive(Clone, Debug, PartialEq)]
pub enum ParsedNote {
    /// The note carries no encounter tag.
    NoTag,

    /// A tag was found but none of its tokens survived validation.
    Empty { discarded: usize },

    /// At least one token was accepted.
    Rule(MapEncounterRule),
}

impl ParsedNote {
    pub fn into_rule(self) -> Option<MapEncounterRule> {
        match self {
            Self::Rule(rule) => Some(rule),
            Self::NoTag | Self::Empty { .. } => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TokenKind {
    Level,
    Switch,
}

/// A `<kind><id>=<rate>` occurrence, before validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct RawToken<'a> {
    kind: TokenKind,
    id: &'a str,
    rate: &'a str,
}

/// Iterator over the tokens of a tag body, scanning left to right and
/// resuming after the end of each match.
struct Tokens<'a> {
    body: &'a str,
    pos: usize,
}

impl<'a> Tokens<'a> {
    fn new(body: &'a str) -> Self {
        Self { body, pos: 0 }
    }

    /// Matches a token starting at `start`, returning it and the index just past it.
    fn match_at(&self, start: usize) -> Option<(RawToken<'a>, usize)> {
        let bytes = self.body.as_bytes();
        let kind = match bytes[start] {
            b'L' | b'l' => TokenKind::Level,
            b'S' | b's' => TokenKind::Switch,
            _ => return None,
        };

        let id_start = start + 1;
        let id_end = scan(bytes, id_start, |b| b.is_ascii_digit());
        if id_end == id_start || bytes.get(id_end) != Some(&b'=') {
            return None;
        }

        let rate_start = id_end + 1;
        let digits_start = match bytes.get(rate_start) {
            Some(b'-' | b'+') => rate_start + 1,
            _ => rate_start,
        };
        let rate_end = scan(bytes, digits_start, |b| b.is_ascii_digit() || b == b'.');
        // A lone sign is not part of the rate.
        let rate_end = if rate_end == digits_start { rate_start } else { rate_end };

        let token = RawToken {
            kind,
            id: &self.body[id_start..id_end],
            rate: &self.body[rate_start..rate_end],
        };
        Some((token, rate_end))
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = RawToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.body.len() {
            let start = self.pos;
            if let Some((token, end)) = self.match_at(start) {
                self.pos = end;
                return Some(token);
            }
            self.pos += 1;
        }
        None
    }
}

fn scan(bytes: &[u8], from: usize, accept: impl Fn(u8) -> bool) -> usize {
    bytes[from..]
        .iter()
        .position(|&b| !accept(b))
        .map_or(bytes.len(), |offset| from + offset)
}

/// Parses the encounter tag of `note` against a switch table of
/// `switch_table_len` slots (valid switch ids are `1..switch_table_len`).
pub fn parse_note(note: &str, switch_table_len: usize) -> ParsedNote {
    let Some(body) = find_tag_body(note) else {
        return ParsedNote::NoTag;
    };

    let mut switch_modifiers = BTreeMap::new();
    let mut levels = BTreeMap::new();
    let mut discarded = 0;

    for token in Tokens::new(body) {
        let rate = parse_rate(token.rate);
        let accepted = parse_id(token.id).and_then(|id| match token.kind {
            TokenKind::Level => {
                levels.insert(id, rate);
                Ok(())
            }
            TokenKind::Switch => {
                let switch = SwitchId(id);
                if (id as usize) < switch_table_len {
                    switch_modifiers.insert(switch, rate);
                    Ok(())
                } else {
                    Err(TokenError::SwitchOutOfRange {
                        switch,
                        table_len: switch_table_len,
                    })
                }
            }
        });

        if let Err(err) = accepted {
            trace!(target: "plugins::encounter", error = %err, "discarding tag token");
            discarded += 1;
        }
    }

    let rule = MapEncounterRule {
        switch_modifiers,
        level_modifiers: levels
            .into_iter()
            .rev()
            .map(|(min_level, rate)| LevelModifier { min_level, rate })
            .collect(),
    };

    if rule.is_empty() {
        ParsedNote::Empty { discarded }
    } else {
        ParsedNote::Rule(rule)
    }
}

/// Finds the first `<encounter rates ...>` tag and returns everything between
/// the tag name and the closing `>`.
fn find_tag_body(note: &str) -> Option<&str> {
    note.match_indices('<').find_map(|(start, _)| {
        let rest = strip_prefix_ignore_case(&note[start + 1..], TAG_FIRST_WORD)?;
        let rest = rest.strip_prefix(['-', '_', ' '])?;
        let rest = strip_prefix_ignore_case(rest, TAG_SECOND_WORD)?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let end = rest.find('>')?;
        Some(&rest[..end])
    })
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &text[prefix.len()..])
}

fn parse_id(text: &str) -> Result<u32, TokenError> {
    match text.parse::<u32>() {
        Ok(0) | Err(_) => Err(TokenError::InvalidId(text.to_string())),
        Ok(id) => Ok(id),
    }
}

/// Parses a rate: negative values clamp to `0.0`, anything unparsable is `1.0`.
///
/// Only the leading decimal number counts, so `0.5.1` reads as `0.5`.
fn parse_rate(text: &str) -> f64 {
    let number = match text.match_indices('.').nth(1) {
        Some((second_dot, _)) => &text[..second_dot],
        None => text,
    };

    match number.parse::<f64>() {
        Ok(rate) if rate <= 0.0 => 0.0,
        Ok(rate) if rate.is_finite() => rate,
        _ => {
            trace!(target: "plugins::encounter", rate = text, "unparsable rate, using 1.0");
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SWITCHES: usize = 11;

    fn rule(note: &str) -> MapEncounterRule {
        parse_note(note, SWITCHES)
            .into_rule()
            .unwrap_or_else(|| panic!("expected a rule for {note:?}"))
    }

    #[test]
    fn parses_mixed_tokens_sorted_by_descending_level() {
        let rule = rule("<Encounter Rates L8=0.6 S3=0.3 L10=0.0>");

        assert_eq!(
            rule.level_modifiers,
            vec![
                LevelModifier {
                    min_level: 10,
                    rate: 0.0
                },
                LevelModifier {
                    min_level: 8,
                    rate: 0.6
                },
            ]
        );
        assert_eq!(rule.switch_modifiers.get(&SwitchId(3)), Some(&0.3));
    }

    #[test]
    fn tag_name_is_flexible() {
        for note in [
            "<encounter rates L1=2>",
            "<ENCOUNTER-RATES l1=2>",
            "<Encounter_Rates\tL1=2>",
            "Forest path.\n<eNcOuNtEr RaTeS   L1=2   >\nMore text",
        ] {
            assert_eq!(rule(note).level_rate(1), Some(2.0), "{note:?}");
        }
    }

    #[test]
    fn missing_or_broken_tag_is_no_tag() {
        for note in [
            "",
            "A quiet village.",
            "<encounterrates L1=2>",
            "<encounter rates>",
            "<encounter ratesL1=2>",
            "<encounter rates L1=2",
            "<encounter  rates L1=2>",
        ] {
            assert_eq!(parse_note(note, SWITCHES), ParsedNote::NoTag, "{note:?}");
        }
    }

    #[test]
    fn first_tag_wins() {
        let rule = rule("<Encounter Rates L5=0.5> <Encounter Rates L5=0.1>");
        assert_eq!(rule.level_rate(5), Some(0.5));
    }

    #[test]
    fn rates_clamp_or_default() {
        let rule = rule("<Encounter Rates L1=-0.5 L2=abc L3= L4=1.5 L5=-0 L6=NaN L7=inf>");

        assert_eq!(rule.level_rate(1), Some(0.0));
        assert_eq!(rule.level_rate(2), Some(1.0));
        assert_eq!(rule.level_rate(3), Some(1.0));
        assert_eq!(rule.level_rate(4), Some(1.5));
        assert_eq!(rule.level_rate(5), Some(0.0));
        assert_eq!(rule.level_rate(6), Some(1.0));
        assert_eq!(rule.level_rate(7), Some(1.0));
    }

    #[test]
    fn last_declared_level_wins() {
        let rule = rule("<Encounter Rates L5=0.2 L5=0.7 L3=0.9>");

        assert_eq!(rule.level_modifiers.len(), 2);
        assert_eq!(rule.level_rate(5), Some(0.7));
    }

    #[test]
    fn invalid_ids_and_shapes_are_discarded() {
        assert_eq!(
            parse_note("<Encounter Rates L0=0.5 S0=0.5 L99999999999=0.5>", SWITCHES),
            ParsedNote::Empty { discarded: 3 }
        );
        assert_eq!(
            parse_note("<Encounter Rates L=0.5 X3=1 Lx5=1 hello>", SWITCHES),
            ParsedNote::Empty { discarded: 0 }
        );
    }

    #[test]
    fn tokens_need_no_whitespace_between_them() {
        let compact = rule("<Encounter Rates L5=0.5,L3=0.2>");
        assert_eq!(
            compact.level_modifiers,
            vec![
                LevelModifier {
                    min_level: 5,
                    rate: 0.5
                },
                LevelModifier {
                    min_level: 3,
                    rate: 0.2
                },
            ]
        );

        let rule = rule("<Encounter Rates L5=0.5, S3=0.3;S4=2>");
        assert_eq!(rule.level_rate(5), Some(0.5));
        assert_eq!(rule.switch_modifiers.get(&SwitchId(3)), Some(&0.3));
        assert_eq!(rule.switch_modifiers.get(&SwitchId(4)), Some(&2.0));
    }

    #[test]
    fn rate_stops_at_trailing_punctuation() {
        for note in [
            "<Encounter Rates L5=0.5;>",
            "<Encounter Rates L5=0.5,>",
            "<Encounter Rates (L5=0.5)>",
            "<Encounter Rates L5=0.5x>",
            "<Encounter Rates L5=0.5.9>",
        ] {
            assert_eq!(rule(note).level_rate(5), Some(0.5), "{note:?}");
        }
    }

    #[test]
    fn switches_outside_the_table_are_discarded() {
        assert_eq!(
            parse_note("<Encounter Rates S11=0.5 S12=0.5>", SWITCHES),
            ParsedNote::Empty { discarded: 2 }
        );

        let rule = rule("<Encounter Rates S10=0.5 S11=0.5>");
        assert_eq!(
            rule.switch_modifiers.keys().copied().collect::<Vec<_>>(),
            vec![SwitchId(10)]
        );
    }

    #[test]
    fn parse_is_idempotent() {
        let note = "<Encounter Rates L10=0.0 L8=0.6 S3=0.3>";
        assert_eq!(parse_note(note, SWITCHES), parse_note(note, SWITCHES));
    }
}
