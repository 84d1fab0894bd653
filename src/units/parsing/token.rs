
use crate::units::prefix::SiPrefix;
use crate::units::simple::SimpleUnitId;

// The trie stores plain integers. Each token category owns a disjoint
// code range, so a code alone identifies the category. The SI prefix
// offset keeps codes positive (the most negative prefix exponent is
// -24).
pub(crate) const SI_PREFIX_OFFSET: i32 = 64;
pub(crate) const COMPOUND_PART_OFFSET: i32 = 128;
pub(crate) const POWER_PART_OFFSET: i32 = 256;
pub(crate) const SIMPLE_UNIT_OFFSET: i32 = 512;

pub(crate) const COMPOUND_PART_PER: i32 = COMPOUND_PART_OFFSET;
pub(crate) const COMPOUND_PART_TIMES: i32 = COMPOUND_PART_OFFSET + 1;
pub(crate) const COMPOUND_PART_PLUS: i32 = COMPOUND_PART_OFFSET + 2;

/// A single lexed token of a unit identifier, decoded from its trie
/// code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
  /// An SI prefix such as "kilo".
  SiPrefix(SiPrefix),
  /// The "-per-" operator.
  Per,
  /// The "-" concatenation operator.
  Times,
  /// The "+" sequence operator.
  Plus,
  /// A power prefix such as "square-" or "p10-"; carries the power.
  Power(i32),
  /// The neutral unit "one".
  One,
  /// A sanctioned simple unit other than "one".
  SimpleUnit(SimpleUnitId),
}

impl Token {
  /// Decodes a trie code back into a token. Codes produced by the
  /// trie are always within one of the known ranges.
  pub(crate) fn from_code(code: i32) -> Token {
    debug_assert!(code > 0);
    if code < COMPOUND_PART_OFFSET {
      let prefix = SiPrefix::from_exponent(code - SI_PREFIX_OFFSET)
        .expect("trie only stores named prefix exponents");
      Token::SiPrefix(prefix)
    } else if code < POWER_PART_OFFSET {
      match code {
        COMPOUND_PART_PER => Token::Per,
        COMPOUND_PART_TIMES => Token::Times,
        _ => Token::Plus,
      }
    } else if code < SIMPLE_UNIT_OFFSET {
      Token::Power(code - POWER_PART_OFFSET)
    } else if code == SIMPLE_UNIT_OFFSET {
      Token::One
    } else {
      let id = SimpleUnitId::from_index((code - SIMPLE_UNIT_OFFSET) as usize)
        .expect("trie only stores sanctioned unit indices");
      Token::SimpleUnit(id)
    }
  }
}
