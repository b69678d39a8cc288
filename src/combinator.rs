//! Alternation and sequencing combinators.
//!
//! Two alternation policies live side by side: [`Or`] keeps every branch's
//! candidates (ambiguous), [`Xor`] commits to the first branch that matches
//! (deterministic). [`And`] threads the remainder from one parser into the next.

use crate::{
    parser::{BoxedParser, Parser, fail, unit},
    result::ResultSet,
};

/// Ambiguous alternation, see [`Parser::or`].
#[derive(Debug, Clone, Copy)]
pub struct Or<L, R>(pub(crate) L, pub(crate) R);

impl<'a, L, R, O> Parser<'a> for Or<L, R>
where
    L: Parser<'a, Output = O>,
    R: Parser<'a, Output = O>,
{
    type Output = O;

    fn parse(&self, input: &'a [u8]) -> ResultSet<'a, Self::Output> {
        let mut candidates = self.0.parse(input);
        candidates.extend(self.1.parse(input));
        candidates
    }
}

/// Deterministic alternation, see [`Parser::xor`].
#[derive(Debug, Clone, Copy)]
pub struct Xor<L, R>(pub(crate) L, pub(crate) R);

impl<'a, L, R, O> Parser<'a> for Xor<L, R>
where
    L: Parser<'a, Output = O>,
    R: Parser<'a, Output = O>,
{
    type Output = O;

    fn parse(&self, input: &'a [u8]) -> ResultSet<'a, Self::Output> {
        let candidates = self.0.parse(input);

        if !candidates.is_empty() {
            return candidates;
        }

        self.1.parse(input)
    }
}

/// Sequencing, see [`Parser::and`].
///
/// Every candidate of the left parser is continued by the right parser on its
/// remainder; the results are concatenated in the left parser's order.
#[derive(Debug, Clone, Copy)]
pub struct And<L, R>(pub(crate) L, pub(crate) R);

impl<'a, L, R> Parser<'a> for And<L, R>
where
    L: Parser<'a>,
    L::Output: Clone,
    R: Parser<'a>,
{
    type Output = (L::Output, R::Output);

    fn parse(&self, input: &'a [u8]) -> ResultSet<'a, Self::Output> {
        let mut candidates = ResultSet::empty();

        for left in self.0.parse(input) {
            for right in self.1.parse(left.rest) {
                candidates.push((left.value.clone(), right.value), right.rest);
            }
        }

        candidates
    }
}

/// Create an [`Or`] parser.
pub fn or<'a, L, R>(left: L, right: R) -> Or<L, R>
where
    L: Parser<'a>,
    R: Parser<'a, Output = L::Output>,
{
    left.or(right)
}

/// Create a [`Xor`] parser.
pub fn xor<'a, L, R>(left: L, right: R) -> Xor<L, R>
where
    L: Parser<'a>,
    R: Parser<'a, Output = L::Output>,
{
    left.xor(right)
}

/// Create an [`And`] parser.
pub fn and<'a, L, R>(left: L, right: R) -> And<L, R>
where
    L: Parser<'a>,
    L::Output: Clone,
    R: Parser<'a>,
{
    left.and(right)
}

/// Left fold: seeds with the first parser, then combines the running parser
/// with each next one.
///
/// Returns `None` when `parsers` is empty.
pub fn fold<P, I, C>(parsers: I, combine: C) -> Option<P>
where
    I: IntoIterator<Item = P>,
    C: FnMut(P, P) -> P,
{
    parsers.into_iter().reduce(combine)
}

/// Ambiguous alternation over any number of parsers. No parsers means [`fail`].
pub fn or_all<'a, O, I>(parsers: I) -> BoxedParser<'a, O>
where
    I: IntoIterator<Item = BoxedParser<'a, O>>,
    O: 'a,
{
    fold(parsers, |left, right| left.or(right).boxed()).unwrap_or_else(|| fail().boxed())
}

/// Deterministic alternation over any number of parsers. No parsers means [`fail`].
pub fn xor_all<'a, O, I>(parsers: I) -> BoxedParser<'a, O>
where
    I: IntoIterator<Item = BoxedParser<'a, O>>,
    O: 'a,
{
    fold(parsers, |left, right| left.xor(right).boxed()).unwrap_or_else(|| fail().boxed())
}

/// Sequence any number of parsers, collecting their values into one flat `Vec`.
///
/// No parsers means `unit(vec![])`.
pub fn and_all<'a, O, I>(parsers: I) -> BoxedParser<'a, Vec<O>>
where
    I: IntoIterator<Item = BoxedParser<'a, O>>,
    O: Clone + 'a,
{
    let parsers = parsers
        .into_iter()
        .map(|parser| parser.using(|value| vec![value]).boxed());

    fold(parsers, |left, right| {
        left.and(right)
            .using(|(mut values, tail): (Vec<O>, Vec<O>)| {
                values.extend(tail);
                values
            })
            .boxed()
    })
    .unwrap_or_else(|| unit(Vec::new()).boxed())
}

/// Ambiguous alternation over any number of parsers, folded at compile time.
///
/// `or!(a, b, c)` is `a.or(b).or(c)`.
#[macro_export]
macro_rules! or {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let parser = $first;
        $(
            let parser = $crate::Parser::or(parser, $rest);
        )+
        parser
    }};
}

/// Deterministic alternation over any number of parsers, folded at compile time.
///
/// `xor!(a, b, c)` is `a.xor(b).xor(c)`.
#[macro_export]
macro_rules! xor {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let parser = $first;
        $(
            let parser = $crate::Parser::xor(parser, $rest);
        )+
        parser
    }};
}

/// Sequence any number of parsers, folded at compile time.
///
/// `and!(a, b, c)` is `a.and(b).and(c)`, so the value is `((a, b), c)`.
#[macro_export]
macro_rules! and {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let parser = $first;
        $(
            let parser = $crate::Parser::and(parser, $rest);
        )+
        parser
    }};
}
