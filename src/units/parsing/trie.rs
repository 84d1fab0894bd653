
use super::token::{
  COMPOUND_PART_PER, COMPOUND_PART_PLUS, COMPOUND_PART_TIMES, POWER_PART_OFFSET, SIMPLE_UNIT_OFFSET,
  SI_PREFIX_OFFSET,
};
use crate::units::prefix::SiPrefix;
use crate::units::simple::SIMPLE_UNIT_NAMES;

use once_cell::sync::Lazy;

use std::collections::HashMap;

/// Longest-match dictionary over every substring the unit-identifier
/// grammar knows: SI prefixes, the compound operators, the power
/// prefixes, and the sanctioned simple units. All keys are ASCII.
#[derive(Debug)]
pub struct TokenTrie {
  root: TrieNode,
}

#[derive(Debug, Default)]
struct TrieNode {
  value: Option<i32>,
  children: HashMap<u8, TrieNode>,
}

impl TokenTrie {
  /// Builds the full token dictionary. This is only called once per
  /// process, through [`token_trie`].
  fn build() -> TokenTrie {
    let mut trie = TokenTrie { root: TrieNode::default() };

    for prefix in SiPrefix::ALL {
      trie.insert(prefix.name(), SI_PREFIX_OFFSET + prefix.exponent());
    }

    trie.insert("-per-", COMPOUND_PART_PER);
    trie.insert("-", COMPOUND_PART_TIMES);
    trie.insert("+", COMPOUND_PART_PLUS);

    trie.insert("square-", POWER_PART_OFFSET + 2);
    trie.insert("cubic-", POWER_PART_OFFSET + 3);
    for power in 2..=15 {
      trie.insert(&format!("p{}-", power), POWER_PART_OFFSET + power);
    }

    for (index, name) in SIMPLE_UNIT_NAMES.iter().enumerate() {
      trie.insert(name, SIMPLE_UNIT_OFFSET + index as i32);
    }

    trie
  }

  fn insert(&mut self, key: &str, value: i32) {
    let mut node = &mut self.root;
    for byte in key.bytes() {
      node = node.children.entry(byte).or_default();
    }
    debug_assert!(node.value.is_none(), "duplicate trie key {:?}", key);
    node.value = Some(value);
  }

  /// Scans `input` from the front for the longest known token,
  /// remembering the furthest complete match seen. Returns the
  /// matched code and the number of bytes consumed, or `None` if no
  /// token matches at all.
  pub fn longest_match(&self, input: &[u8]) -> Option<(i32, usize)> {
    let mut node = &self.root;
    let mut best: Option<(i32, usize)> = None;
    for (i, byte) in input.iter().enumerate() {
      match node.children.get(byte) {
        Some(child) => {
          node = child;
          if let Some(value) = node.value {
            best = Some((value, i + 1));
          }
        }
        None => break,
      }
    }
    best
  }
}

/// The process-wide token trie. Built on first use, read-only
/// afterwards, so concurrent readers need no locking; the backing
/// static is reclaimed at process exit.
pub fn token_trie() -> &'static TokenTrie {
  static TRIE: Lazy<TokenTrie> = Lazy::new(TokenTrie::build);
  Lazy::force(&TRIE)
}
