//! The `Parser` trait and the core algebra: `unit`, `fail`, `bind`, `using`,
//! `pred`, `literal` and the other atomic matchers.

use std::{marker::PhantomData, rc::Rc};

use memchr::memmem;

use crate::{
    combinator::{And, Or, Xor},
    errors::Result,
    input::AsBytes,
    repeat::{Many, XMany, many, xmany},
    result::ResultSet,
    sequence::{ThenX, XThen, first, second, separate_by, then_x, x_then},
};

/// A parsing combinator should implement this trait.
///
/// A parser maps an input slice to every way it can match at the start of
/// that slice. Parsers are immutable and may be invoked any number of times.
pub trait Parser<'a> {
    /// Value type of every candidate this parser produces.
    type Output;

    /// Returns all candidate parses of `input`, in order.
    fn parse(&self, input: &'a [u8]) -> ResultSet<'a, Self::Output>;

    /// Parse anything that can be viewed as bytes.
    fn run<B>(&self, input: &'a B) -> ResultSet<'a, Self::Output>
    where
        B: AsBytes + ?Sized,
        Self: Sized,
    {
        self.parse(B::as_bytes(input))
    }

    /// Parse `input` and return the first value that consumed all of it.
    fn complete<B>(&self, input: &'a B) -> Result<Self::Output>
    where
        B: AsBytes + ?Sized,
        Self: Sized,
    {
        self.run(input).into_complete()
    }

    /// Feed every value into `f` and continue with the parser it returns.
    fn bind<F, P>(self, f: F) -> Bind<Self, F>
    where
        F: Fn(Self::Output) -> P,
        P: Parser<'a>,
        Self: Sized,
    {
        Bind(self, f)
    }

    /// On success, use func `F` to convert every value to type `O`.
    fn using<F, O>(self, f: F) -> Using<Self, F>
    where
        F: Fn(Self::Output) -> O,
        Self: Sized,
    {
        Using(self, f)
    }

    /// Keep the candidates of both parsers.
    fn or<R>(self, parser: R) -> Or<Self, R>
    where
        R: Parser<'a, Output = Self::Output>,
        Self: Sized,
    {
        Or(self, parser)
    }

    /// Keep this parser's candidates, or `parser`'s if there are none.
    fn xor<R>(self, parser: R) -> Xor<Self, R>
    where
        R: Parser<'a, Output = Self::Output>,
        Self: Sized,
    {
        Xor(self, parser)
    }

    /// Run `parser` after this one and pair up the values.
    fn and<R>(self, parser: R) -> And<Self, R>
    where
        R: Parser<'a>,
        Self::Output: Clone,
        Self: Sized,
    {
        And(self, parser)
    }

    /// Run `parser` after this one, keeping only this parser's value.
    fn then_ignore<R>(
        self,
        parser: R,
    ) -> Using<And<Self, R>, fn((Self::Output, R::Output)) -> Self::Output>
    where
        R: Parser<'a>,
        Self::Output: Clone,
        Self: Sized,
    {
        self.and(parser).using(first as fn(_) -> _)
    }

    /// Run `parser` after this one, keeping only `parser`'s value.
    fn ignore_then<R>(
        self,
        parser: R,
    ) -> Using<And<Self, R>, fn((Self::Output, R::Output)) -> R::Output>
    where
        R: Parser<'a>,
        Self::Output: Clone,
        Self: Sized,
    {
        self.and(parser).using(second as fn(_) -> _)
    }

    /// This parser, optionally followed by `parser`.
    fn then_x<R>(self, parser: R) -> ThenX<Self, R>
    where
        R: Parser<'a>,
        Self::Output: Clone,
        Self: Sized,
    {
        then_x(self, parser)
    }

    /// `parser`, optionally preceded by this one.
    fn x_then<R>(self, parser: R) -> XThen<Self, R>
    where
        R: Parser<'a>,
        Self::Output: Clone,
        Self: Sized,
    {
        x_then(self, parser)
    }

    /// One or more `self` separated by `separator`, see [`separate_by`].
    fn separate_by<R>(self, separator: R) -> impl Parser<'a, Output = Vec<Self::Output>> + Clone
    where
        R: Parser<'a> + Clone + 'a,
        R::Output: Clone + 'a,
        Self::Output: Clone + 'a,
        Self: Clone + Sized + 'a,
    {
        separate_by(self, separator)
    }

    /// One or more repetitions, every repetition count kept.
    fn many(self) -> Many<Self>
    where
        Self::Output: Clone,
        Self: Sized,
    {
        many(self)
    }

    /// One or more repetitions, only the maximal count kept.
    fn xmany(self) -> XMany<Self>
    where
        Self::Output: Clone,
        Self: Sized,
    {
        xmany(self)
    }

    /// Borrow this parser as a parser, so it can be combined without moving it.
    fn by_ref(&self) -> ByRef<'_, Self>
    where
        Self: Sized,
    {
        ByRef(self)
    }

    /// Drop candidates that consumed no input.
    fn consuming(self) -> Consuming<Self>
    where
        Self: Sized,
    {
        Consuming(self)
    }

    /// Erase the parser type behind a cloneable handle.
    fn boxed(self) -> BoxedParser<'a, Self::Output>
    where
        Self: Sized + 'a,
    {
        BoxedParser::new(self)
    }
}

/// Implement [`Parser`] for all `Fn(&[u8]) -> ResultSet<O>`
impl<'a, O, F> Parser<'a> for F
where
    F: Fn(&'a [u8]) -> ResultSet<'a, O>,
{
    type Output = O;

    #[inline(always)]
    fn parse(&self, input: &'a [u8]) -> ResultSet<'a, Self::Output> {
        self(input)
    }
}

/// A parser that always succeeds with a clone of its value, consuming nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit<O>(O);

impl<'a, O> Parser<'a> for Unit<O>
where
    O: Clone,
{
    type Output = O;

    #[inline(always)]
    fn parse(&self, input: &'a [u8]) -> ResultSet<'a, Self::Output> {
        ResultSet::single(self.0.clone(), input)
    }
}

/// Create a [`Unit`] parser.
pub const fn unit<O>(value: O) -> Unit<O> {
    Unit(value)
}

/// A parser that never matches.
pub struct Fail<O>(PhantomData<fn() -> O>);

impl<O> Clone for Fail<O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O> Copy for Fail<O> {}

impl<'a, O> Parser<'a> for Fail<O> {
    type Output = O;

    #[inline(always)]
    fn parse(&self, _: &'a [u8]) -> ResultSet<'a, Self::Output> {
        ResultSet::empty()
    }
}

/// Create a [`Fail`] parser.
pub const fn fail<O>() -> Fail<O> {
    Fail(PhantomData)
}

/// Monadic sequencing, see [`Parser::bind`].
#[derive(Clone, Copy)]
pub struct Bind<P, F>(P, F);

impl<'a, P, F, Q> Parser<'a> for Bind<P, F>
where
    P: Parser<'a>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'a>,
{
    type Output = Q::Output;

    fn parse(&self, input: &'a [u8]) -> ResultSet<'a, Self::Output> {
        self.0
            .parse(input)
            .into_iter()
            .flat_map(|candidate| (self.1)(candidate.value).parse(candidate.rest))
            .collect()
    }
}

/// Create a [`Bind`] parser.
pub fn bind<'a, P, F, Q>(parser: P, f: F) -> Bind<P, F>
where
    P: Parser<'a>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'a>,
{
    parser.bind(f)
}

/// A parser that convert inner parser's values to another type.
///
/// Same candidates as `bind(p, |v| unit(g(v)))` without requiring a clonable value.
#[derive(Clone, Copy)]
pub struct Using<P, F>(P, F);

impl<'a, P, F, O> Parser<'a> for Using<P, F>
where
    P: Parser<'a>,
    F: Fn(P::Output) -> O,
{
    type Output = O;

    #[inline(always)]
    fn parse(&self, input: &'a [u8]) -> ResultSet<'a, Self::Output> {
        self.0.parse(input).map(&self.1)
    }
}

/// Create a [`Using`] parser.
pub fn using<'a, P, F, O>(parser: P, f: F) -> Using<P, F>
where
    P: Parser<'a>,
    F: Fn(P::Output) -> O,
{
    parser.using(f)
}

/// A parser that matches one byte accepted by its predicate.
///
/// This is the only combinator that looks at input bytes one at a time; all
/// character classes are built from it.
#[derive(Debug, Clone, Copy)]
pub struct Pred<F>(F);

impl<'a, F> Parser<'a> for Pred<F>
where
    F: Fn(u8) -> bool,
{
    type Output = u8;

    #[inline(always)]
    fn parse(&self, input: &'a [u8]) -> ResultSet<'a, Self::Output> {
        match input.split_first() {
            Some((&next, rest)) if (self.0)(next) => ResultSet::single(next, rest),
            _ => ResultSet::empty(),
        }
    }
}

/// Create a [`Pred`] parser.
pub const fn pred<F>(f: F) -> Pred<F>
where
    F: Fn(u8) -> bool,
{
    Pred(f)
}

/// A parser that matches exactly `byte`.
pub fn literal(byte: u8) -> Pred<impl Fn(u8) -> bool + Copy> {
    pred(move |next| next == byte)
}

/// A parser that matches any single byte.
pub fn any_byte() -> Pred<impl Fn(u8) -> bool + Copy> {
    pred(|_| true)
}

/// A parser that matches only the empty input.
#[derive(Debug, Clone, Copy, Default)]
pub struct End;

impl<'a> Parser<'a> for End {
    type Output = ();

    fn parse(&self, input: &'a [u8]) -> ResultSet<'a, Self::Output> {
        if input.is_empty() {
            ResultSet::single((), input)
        } else {
            ResultSet::empty()
        }
    }
}

/// Create an [`End`] parser.
pub const fn end() -> End {
    End
}

/// Recogonize a keyword, the value is the matched slice.
#[derive(Debug, Clone, Copy)]
pub struct Keyword<K>(K);

impl<'a, K> Parser<'a> for Keyword<K>
where
    K: AsBytes,
{
    type Output = &'a [u8];

    fn parse(&self, input: &'a [u8]) -> ResultSet<'a, Self::Output> {
        let keyword = self.0.as_bytes();

        if input.starts_with(keyword) {
            let (matched, rest) = input.split_at(keyword.len());
            ResultSet::single(matched, rest)
        } else {
            ResultSet::empty()
        }
    }
}

/// Create a [`Keyword`] parser.
pub const fn keyword<K>(keyword: K) -> Keyword<K>
where
    K: AsBytes,
{
    Keyword(keyword)
}

/// Returns the input slice up to the first occurrence of the needle.
///
/// If the needle is never found, the parser does not match.
#[derive(Debug, Clone, Copy)]
pub struct TakeUntil<K>(K);

impl<'a, K> Parser<'a> for TakeUntil<K>
where
    K: AsBytes,
{
    type Output = &'a [u8];

    fn parse(&self, input: &'a [u8]) -> ResultSet<'a, Self::Output> {
        match memmem::find(input, self.0.as_bytes()) {
            Some(offset) => {
                let (taken, rest) = input.split_at(offset);
                ResultSet::single(taken, rest)
            }
            None => ResultSet::empty(),
        }
    }
}

/// Create a [`TakeUntil`] parser.
pub const fn take_until<K>(needle: K) -> TakeUntil<K>
where
    K: AsBytes,
{
    TakeUntil(needle)
}

/// A parser that drops every candidate which did not advance the input.
#[derive(Debug, Clone, Copy)]
pub struct Consuming<P>(P);

impl<'a, P> Parser<'a> for Consuming<P>
where
    P: Parser<'a>,
{
    type Output = P::Output;

    fn parse(&self, input: &'a [u8]) -> ResultSet<'a, Self::Output> {
        let mut candidates = self.0.parse(input);

        candidates.retain(|candidate| {
            let advanced = candidate.rest.len() < input.len();
            if !advanced {
                log::trace!("dropped a candidate that consumed no input");
            }
            advanced
        });

        candidates
    }
}

/// A borrowed parser, see [`Parser::by_ref`].
#[derive(Debug)]
pub struct ByRef<'p, P>(&'p P);

impl<'p, P> Clone for ByRef<'p, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'p, P> Copy for ByRef<'p, P> {}

impl<'a, 'p, P> Parser<'a> for ByRef<'p, P>
where
    P: Parser<'a>,
{
    type Output = P::Output;

    #[inline(always)]
    fn parse(&self, input: &'a [u8]) -> ResultSet<'a, Self::Output> {
        self.0.parse(input)
    }
}

/// A type-erased, cheaply clonable parser.
pub struct BoxedParser<'a, O>(Rc<dyn Parser<'a, Output = O> + 'a>);

impl<'a, O> BoxedParser<'a, O> {
    /// Box `parser`.
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<'a, Output = O> + 'a,
    {
        Self(Rc::new(parser))
    }
}

impl<'a, O> Clone for BoxedParser<'a, O> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<'a, O> Parser<'a> for BoxedParser<'a, O> {
    type Output = O;

    #[inline(always)]
    fn parse(&self, input: &'a [u8]) -> ResultSet<'a, Self::Output> {
        self.0.parse(input)
    }
}
