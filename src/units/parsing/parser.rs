
use super::token::Token;
use super::trie::{token_trie, TokenTrie};
use crate::units::compound::CompoundUnit;
use crate::units::sequence::SequenceUnit;
use crate::units::single::SingleUnit;

use thiserror::Error;

/// Error produced while parsing a unit identifier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
  /// The identifier violates the lexical or grammatical rules, such
  /// as an unknown substring, a doubled power or prefix token, or a
  /// trailing operator.
  #[error("Malformed unit identifier {identifier:?} (at byte {position})")]
  MalformedIdentifier {
    identifier: String,
    position: usize,
  },
  /// An operation expecting exactly one single or compound unit found
  /// more input than that.
  #[error("Expected exactly one {expected} unit in {identifier:?}")]
  UnexpectedTokenCount {
    identifier: String,
    expected: &'static str,
  },
}

/// Per-single-unit parser state. A power token may only come first,
/// and an SI prefix token may only come after at most one power
/// token; a second of either is a syntax error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SingleUnitState {
  NoTokens,
  PowerSeen,
  PrefixSeen,
}

/// Recursive-descent parser over the unit-identifier grammar. Tokens
/// come from the process-wide [`TokenTrie`]; every grammar violation
/// is reported as an early-return [`ParseError`].
pub struct Parser<'a> {
  source: &'a str,
  index: usize,
  // Set once "-per-" has been seen; cleared by '+'. A second "-per-"
  // before the next '+' is a syntax error.
  after_per: bool,
  trie: &'static TokenTrie,
}

impl<'a> Parser<'a> {
  pub fn new(source: &'a str) -> Parser<'a> {
    Parser {
      source,
      index: 0,
      after_per: false,
      trie: token_trie(),
    }
  }

  pub fn has_next(&self) -> bool {
    self.index < self.source.len()
  }

  fn malformed(&self) -> ParseError {
    ParseError::MalformedIdentifier {
      identifier: self.source.to_owned(),
      position: self.index,
    }
  }

  fn unexpected(&self, expected: &'static str) -> ParseError {
    ParseError::UnexpectedTokenCount {
      identifier: self.source.to_owned(),
      expected,
    }
  }

  fn next_token(&mut self) -> Result<Token, ParseError> {
    match self.trie.longest_match(&self.source.as_bytes()[self.index..]) {
      Some((code, len)) => {
        self.index += len;
        Ok(Token::from_code(code))
      }
      None => Err(self.malformed()),
    }
  }

  /// Reads the next single unit into `result`. Returns whether a '+'
  /// operator was seen in front of the unit. At end of input the
  /// result is left untouched (an absent unit reads as "one").
  ///
  /// A bare "one" token mid-stream is transparent: parsing recurses
  /// to the next real unit without contributing anything itself.
  fn next_single_unit(&mut self, result: &mut SingleUnit) -> Result<bool, ParseError> {
    if !self.has_next() {
      return Ok(false);
    }

    let mut saw_plus = false;

    // Every unit except the very first of the whole string must be
    // introduced by a compound operator.
    if self.index != 0 {
      match self.next_token()? {
        Token::Per => {
          if self.after_per {
            return Err(self.malformed());
          }
          self.after_per = true;
          result.power = -1;
        }
        Token::Times => {
          // "-per-" distributes over every following term until a '+'.
          if self.after_per {
            result.power = -1;
          }
        }
        Token::Plus => {
          saw_plus = true;
          self.after_per = false;
        }
        _ => return Err(self.malformed()),
      }
    }

    let mut state = SingleUnitState::NoTokens;
    while self.has_next() {
      match self.next_token()? {
        Token::Power(power) => {
          if state != SingleUnitState::NoTokens {
            return Err(self.malformed());
          }
          result.power *= power;
          state = SingleUnitState::PowerSeen;
        }
        Token::SiPrefix(prefix) => {
          if state == SingleUnitState::PrefixSeen {
            return Err(self.malformed());
          }
          result.prefix = prefix;
          state = SingleUnitState::PrefixSeen;
        }
        Token::One => {
          return self.next_single_unit(result);
        }
        Token::SimpleUnit(id) => {
          result.simple_unit = id;
          return Ok(saw_plus);
        }
        Token::Per | Token::Times | Token::Plus => {
          return Err(self.malformed());
        }
      }
    }

    // The input ended on a dangling operator or power/prefix token.
    Err(self.malformed())
  }

  /// Reads single units into `result` until the input ends or a '+'
  /// closes the (non-empty) compound. The '+' is left for the next
  /// compound to consume.
  pub fn next_compound_unit(&mut self, result: &mut CompoundUnit) -> Result<(), ParseError> {
    while self.has_next() {
      let before = self.index;
      let mut single_unit = SingleUnit::neutral();
      let saw_plus = self.next_single_unit(&mut single_unit)?;
      if saw_plus && !result.is_empty() {
        self.index = before;
        break;
      }
      result.append(single_unit);
    }
    Ok(())
  }

  /// Parses the whole input as exactly one single unit.
  pub fn get_only_single_unit(&mut self) -> Result<SingleUnit, ParseError> {
    let mut result = SingleUnit::neutral();
    let saw_plus = self.next_single_unit(&mut result)?;
    if saw_plus || self.has_next() {
      return Err(self.unexpected("single"));
    }
    Ok(result)
  }

  /// Parses the whole input as exactly one compound unit.
  pub fn get_only_compound_unit(&mut self) -> Result<CompoundUnit, ParseError> {
    let mut result = CompoundUnit::new();
    self.next_compound_unit(&mut result)?;
    if self.has_next() {
      return Err(self.unexpected("compound"));
    }
    Ok(result)
  }

  /// Parses the whole input as a sequence of compound units.
  pub fn get_only_sequence_unit(&mut self) -> Result<SequenceUnit, ParseError> {
    let mut result = SequenceUnit::new();
    while self.has_next() {
      let mut compound_unit = CompoundUnit::new();
      self.next_compound_unit(&mut compound_unit)?;
      result.push(compound_unit);
    }
    Ok(result)
  }
}

/// Parses an identifier as exactly one single unit, e.g.
/// "square-kilometer". The empty string parses as the neutral unit.
pub fn parse_single_unit(identifier: &str) -> Result<SingleUnit, ParseError> {
  Parser::new(identifier).get_only_single_unit()
}

/// Parses an identifier as exactly one compound unit, e.g.
/// "meter-per-second". Fails if a '+' introduces a second slice.
pub fn parse_compound_unit(identifier: &str) -> Result<CompoundUnit, ParseError> {
  Parser::new(identifier).get_only_compound_unit()
}

/// Parses an identifier as a sequence unit, e.g. "foot+inch". Single
/// and compound units parse as a one-slice sequence.
pub fn parse_sequence_unit(identifier: &str) -> Result<SequenceUnit, ParseError> {
  Parser::new(identifier).get_only_sequence_unit()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::units::prefix::SiPrefix;
  use crate::units::simple::SimpleUnitId;

  fn unit(name: &str) -> SimpleUnitId {
    SimpleUnitId::from_name(name).unwrap()
  }

  #[test]
  fn test_parse_single_unit() {
    let parsed = parse_single_unit("kilometer").unwrap();
    assert_eq!(parsed, SingleUnit {
      power: 1,
      prefix: SiPrefix::Kilo,
      simple_unit: unit("meter"),
    });
  }

  #[test]
  fn test_longest_match_wins_over_shorter_prefix() {
    // "centimeter" must lex as centi + meter; there is no unit named
    // "centi".
    let parsed = parse_single_unit("centimeter").unwrap();
    assert_eq!(parsed.prefix, SiPrefix::Centi);
    assert_eq!(parsed.simple_unit, unit("meter"));
  }

  #[test]
  fn test_parse_single_unit_with_power() {
    let parsed = parse_single_unit("square-kilometer").unwrap();
    assert_eq!(parsed.power, 2);
    assert_eq!(parsed.prefix, SiPrefix::Kilo);
    let parsed = parse_single_unit("p10-meter").unwrap();
    assert_eq!(parsed.power, 10);
  }

  #[test]
  fn test_prefix_must_follow_power() {
    // The power token must precede the SI prefix.
    parse_single_unit("kilosquare-meter").unwrap_err();
    // Two powers or two prefixes are syntax errors.
    parse_single_unit("square-square-meter").unwrap_err();
    parse_single_unit("kilokilometer").unwrap_err();
  }

  #[test]
  fn test_parse_empty_as_one() {
    assert_eq!(parse_single_unit(""), Ok(SingleUnit::neutral()));
    assert_eq!(parse_compound_unit(""), Ok(CompoundUnit::new()));
    let sequence = parse_sequence_unit("").unwrap();
    assert!(sequence.is_empty());
  }

  #[test]
  fn test_parse_one() {
    assert_eq!(parse_single_unit("one"), Ok(SingleUnit::neutral()));
  }

  #[test]
  fn test_parse_compound_unit() {
    let parsed = parse_compound_unit("meter-per-second").unwrap();
    let singles = parsed.single_units();
    assert_eq!(singles.len(), 2);
    assert_eq!(singles[0].simple_unit, unit("meter"));
    assert_eq!(singles[0].power, 1);
    assert_eq!(singles[1].simple_unit, unit("second"));
    assert_eq!(singles[1].power, -1);
  }

  #[test]
  fn test_per_applies_to_all_following_terms() {
    let parsed = parse_compound_unit("joule-per-kilogram-kelvin");
    // "kilogram-kelvin" both sit under the "-per-".
    let parsed = parsed.unwrap();
    assert_eq!(parsed.numerator().len(), 1);
    assert_eq!(parsed.denominator().len(), 2);
    assert_eq!(parsed.denominator()[0].power, -1);
    assert_eq!(parsed.denominator()[1].power, -1);
  }

  #[test]
  fn test_per_with_power() {
    let parsed = parse_compound_unit("meter-per-square-second").unwrap();
    assert_eq!(parsed.denominator()[0].power, -2);
  }

  #[test]
  fn test_repeated_per_is_rejected() {
    parse_compound_unit("one-per-meter-per-second").unwrap_err();
    parse_compound_unit("meter-per-second-per-second").unwrap_err();
  }

  #[test]
  fn test_plus_clears_the_per_flag() {
    // Each slice of a sequence may carry its own "-per-".
    let parsed = parse_sequence_unit("foot-per-second+inch-per-second").unwrap();
    assert_eq!(parsed.len(), 2);
  }

  #[test]
  fn test_parse_sequence_unit() {
    let parsed = parse_sequence_unit("foot+inch").unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed.units()[0].identifier(), Ok("foot".to_owned()));
    assert_eq!(parsed.units()[1].identifier(), Ok("inch".to_owned()));
  }

  #[test]
  fn test_leading_plus_is_malformed() {
    parse_sequence_unit("+foot").unwrap_err();
  }

  #[test]
  fn test_trailing_operator_is_malformed() {
    parse_sequence_unit("foot+").unwrap_err();
    parse_compound_unit("meter-").unwrap_err();
    parse_compound_unit("meter-per-").unwrap_err();
  }

  #[test]
  fn test_unknown_unit_is_malformed() {
    let err = parse_single_unit("metre").unwrap_err();
    assert!(matches!(err, ParseError::MalformedIdentifier { .. }));
    parse_compound_unit("meter-per-parsnip").unwrap_err();
  }

  #[test]
  fn test_one_is_transparent_mid_stream() {
    // "one" contributes nothing; parsing recurses to the next unit.
    let parsed = parse_compound_unit("one-per-second").unwrap();
    assert_eq!(parsed.identifier(), Ok("one-per-second".to_owned()));
    assert_eq!(parsed.denominator().len(), 1);
  }

  #[test]
  fn test_only_single_rejects_compound_input() {
    let err = parse_single_unit("meter-per-second").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedTokenCount { .. }));
    parse_single_unit("foot+inch").unwrap_err();
  }

  #[test]
  fn test_only_compound_rejects_sequence_input() {
    let err = parse_compound_unit("foot+inch").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedTokenCount { .. }));
  }

  #[test]
  fn test_duplicate_terms_merge() {
    let parsed = parse_compound_unit("meter-meter").unwrap();
    assert_eq!(parsed.identifier(), Ok("square-meter".to_owned()));
    // Different prefixes never merge.
    let parsed = parse_compound_unit("meter-kilometer").unwrap();
    assert_eq!(parsed.numerator().len(), 2);
  }

  #[test]
  fn test_round_trip_canonical_identifiers() {
    let identifiers = [
      "one",
      "meter",
      "kilometer",
      "meter-per-second",
      "square-kilometer",
      "cubic-centimeter",
      "p4-meter",
      "one-per-second",
      "kilogram-meter-per-square-second",
      "foot+inch",
      "mile+foot+inch",
      "joule-per-kelvin",
    ];
    for identifier in identifiers {
      let parsed = parse_sequence_unit(identifier).unwrap();
      assert_eq!(parsed.identifier(), Ok(identifier.to_owned()), "round trip of {identifier}");
    }
  }
}
