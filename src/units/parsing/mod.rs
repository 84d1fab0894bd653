
//! Lexer and recursive-descent parser for unit identifiers. The lexer
//! is a longest-match trie over every substring the grammar knows;
//! the parser assembles the resulting tokens into single, compound,
//! and sequence units.

mod parser;
mod token;
mod trie;

pub use parser::{parse_compound_unit, parse_sequence_unit, parse_single_unit, ParseError, Parser};
pub use token::Token;
pub use trie::{token_trie, TokenTrie};
