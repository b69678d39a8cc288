//! Sequencing helpers that keep one side of a sequence and drop the other.

use crate::{
    combinator::And,
    parser::{Parser, Using},
    repeat::cons,
    result::ResultSet,
};

pub(crate) fn first<A, B>((a, _): (A, B)) -> A {
    a
}

pub(crate) fn second<A, B>((_, b): (A, B)) -> B {
    b
}

/// Run `f` then `g`, keeping `f`'s value.
pub fn then_ignore<'a, F, G>(
    f: F,
    g: G,
) -> Using<And<F, G>, fn((F::Output, G::Output)) -> F::Output>
where
    F: Parser<'a>,
    F::Output: Clone,
    G: Parser<'a>,
{
    f.then_ignore(g)
}

/// Run `f` then `g`, keeping `g`'s value.
pub fn ignore_then<'a, F, G>(
    f: F,
    g: G,
) -> Using<And<F, G>, fn((F::Output, G::Output)) -> G::Output>
where
    F: Parser<'a>,
    F::Output: Clone,
    G: Parser<'a>,
{
    f.ignore_then(g)
}

/// `f`, optionally followed by `g`; `f`'s value is kept either way.
///
/// Same as `or(f, then_ignore(f, g))`: both the bare and the extended match
/// are returned when `g` matches.
#[derive(Debug, Clone, Copy)]
pub struct ThenX<F, G>(F, G);

impl<'a, F, G> Parser<'a> for ThenX<F, G>
where
    F: Parser<'a>,
    F::Output: Clone,
    G: Parser<'a>,
{
    type Output = F::Output;

    fn parse(&self, input: &'a [u8]) -> ResultSet<'a, Self::Output> {
        self.0
            .by_ref()
            .or(self.0.by_ref().then_ignore(self.1.by_ref()))
            .parse(input)
    }
}

/// Create a [`ThenX`] parser.
pub fn then_x<'a, F, G>(f: F, g: G) -> ThenX<F, G>
where
    F: Parser<'a>,
    F::Output: Clone,
    G: Parser<'a>,
{
    ThenX(f, g)
}

/// `g`, optionally preceded by `f`; `g`'s value is kept either way.
///
/// Same as `or(g, ignore_then(f, g))`.
#[derive(Debug, Clone, Copy)]
pub struct XThen<F, G>(F, G);

impl<'a, F, G> Parser<'a> for XThen<F, G>
where
    F: Parser<'a>,
    F::Output: Clone,
    G: Parser<'a>,
{
    type Output = G::Output;

    fn parse(&self, input: &'a [u8]) -> ResultSet<'a, Self::Output> {
        self.1
            .by_ref()
            .or(self.0.by_ref().ignore_then(self.1.by_ref()))
            .parse(input)
    }
}

/// Create a [`XThen`] parser.
pub fn x_then<'a, F, G>(f: F, g: G) -> XThen<F, G>
where
    F: Parser<'a>,
    F::Output: Clone,
    G: Parser<'a>,
{
    XThen(f, g)
}

/// `g` with optional leading `f` and optional trailing `h`, keeping `g`'s value.
///
/// Typical use is trimming surrounding whitespace off a token.
pub fn x_then_x<'a, F, G, H>(f: F, g: G, h: H) -> XThen<F, ThenX<G, H>>
where
    F: Parser<'a>,
    F::Output: Clone,
    G: Parser<'a>,
    G::Output: Clone,
    H: Parser<'a>,
{
    x_then(f, then_x(g, h))
}

/// `f` separated by `g`, keeping the values of `f` in one flat `Vec`.
///
/// Built as `and(f, xmany(ignore_then(g, f)))`, so at least one separator must
/// be present: `"1,2"` matches but a lone `"1"` does not. The separated tail is
/// greedy.
pub fn separate_by<'a, F, G>(f: F, g: G) -> impl Parser<'a, Output = Vec<F::Output>> + Clone
where
    F: Parser<'a> + Clone + 'a,
    F::Output: Clone + 'a,
    G: Parser<'a> + Clone + 'a,
    G::Output: Clone + 'a,
{
    f.clone()
        .and(g.ignore_then(f).xmany())
        .using(cons as fn(_) -> _)
}
