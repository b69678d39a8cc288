//! Character-class parsers built purely from the combinators.
//!
//! Each byte is classified as the code point of the same value, so bytes
//! `0x80..=0xFF` are read as Latin-1.

use crate::{
    parser::{Parser, Pred, pred},
    result::ResultSet,
};

/// Lift a code point predicate to a single-byte parser.
pub fn code_point<F>(f: F) -> Pred<impl Fn(u8) -> bool + Clone>
where
    F: Fn(char) -> bool + Clone,
{
    pred(move |next| f(char::from(next)))
}

/// One alphabetic byte.
pub fn letter(input: &[u8]) -> ResultSet<'_, u8> {
    code_point(char::is_alphabetic).parse(input)
}

/// One decimal digit.
///
/// Only `0-9` are decimal digits among the first 256 code points.
pub fn digit(input: &[u8]) -> ResultSet<'_, u8> {
    code_point(|c| c.is_ascii_digit()).parse(input)
}

/// One whitespace byte.
pub fn space(input: &[u8]) -> ResultSet<'_, u8> {
    code_point(char::is_whitespace).parse(input)
}

/// One or more whitespace bytes, every run length kept.
///
/// Like every repetition this needs at least one byte, so it does not match
/// the absence of whitespace.
pub fn whitespace(input: &[u8]) -> ResultSet<'_, Vec<u8>> {
    space.many().parse(input)
}

/// The longest run of letters.
pub fn word(input: &[u8]) -> ResultSet<'_, Vec<u8>> {
    letter.xmany().parse(input)
}

/// Every non-empty run of leading digits, shortest first.
pub fn integer(input: &[u8]) -> ResultSet<'_, Vec<u8>> {
    digit.many().parse(input)
}
