//! A backtracking, list-of-successes parser combinator engine over byte slices.
//!
//! A parser returns *every* way it matches at the start of its input, as a
//! [`ResultSet`] of [`Candidate`]s (value plus unconsumed remainder). An empty
//! set is failure. Grammars choose per call site between keeping all
//! interpretations ([`Parser::or`], [`Parser::many`]) and committing to the
//! first one ([`Parser::xor`], [`Parser::xmany`]).
//!
//! ```
//! use listparse::{Parser, digit, integer, literal, word};
//!
//! assert_eq!(word.run("ab3").into_pairs(), vec![(b"ab".to_vec(), b"3".as_slice())]);
//! assert_eq!(integer.run("123x").len(), 3);
//!
//! let list = digit.separate_by(literal(b','));
//! assert_eq!(list.complete("1,2,3"), Ok(b"123".to_vec()));
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod combinator;
pub mod errors;
pub mod input;
pub mod lexical;
pub mod parser;
pub mod recursive;
pub mod repeat;
pub mod result;
pub mod sequence;

pub use combinator::{and, and_all, fold, or, or_all, xor, xor_all};
pub use errors::{Result, SelectError};
pub use input::AsBytes;
pub use lexical::{code_point, digit, integer, letter, space, whitespace, word};
pub use parser::{
    BoxedParser, Parser, any_byte, bind, end, fail, keyword, literal, pred, take_until, unit, using,
};
pub use recursive::{Recursive, RecursiveRef, recursive};
pub use repeat::{Many, XMany, many, xmany};
pub use result::{Candidate, ResultSet};
pub use sequence::{ignore_then, separate_by, then_ignore, then_x, x_then, x_then_x};
