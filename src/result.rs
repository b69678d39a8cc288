//! Candidate parses and the result sets parsers return.

use std::{borrow::Cow, slice, vec};

use crate::errors::{Result, SelectError};

/// One successful parse: a value and the input it left unconsumed.
///
/// With the `serde` feature this serializes as `{ "value": .., "rest": [..] }`.
/// There is no `Deserialize`: `rest` borrows from the parsed input, which a
/// serialized candidate no longer refers to.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Candidate<'a, O> {
    /// The parsed value.
    pub value: O,
    /// Suffix of the input not consumed by this parse.
    pub rest: &'a [u8],
}

impl<'a, O> Candidate<'a, O> {
    /// Create a new candidate.
    #[inline(always)]
    pub fn new(value: O, rest: &'a [u8]) -> Self {
        Self { value, rest }
    }

    /// Returns how many bytes of `input` this candidate consumed.
    ///
    /// `input` must be the slice the producing parser was given.
    pub fn consumed(&self, input: &[u8]) -> usize {
        input.len().saturating_sub(self.rest.len())
    }

    /// Convert the value with `f`, keeping the remainder.
    pub fn map<F, T>(self, f: F) -> Candidate<'a, T>
    where
        F: FnOnce(O) -> T,
    {
        Candidate {
            value: f(self.value),
            rest: self.rest,
        }
    }

    /// Split into a `(value, rest)` pair.
    pub fn into_pair(self) -> (O, &'a [u8]) {
        (self.value, self.rest)
    }
}

impl<'a> Candidate<'a, Vec<u8>> {
    /// The matched bytes as text, invalid UTF-8 replaced by `U+FFFD`.
    pub fn value_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.value)
    }
}

impl<'a, O> From<(O, &'a [u8])> for Candidate<'a, O> {
    fn from((value, rest): (O, &'a [u8])) -> Self {
        Self { value, rest }
    }
}

/// Every way a parser matched at one position, in production order.
///
/// An empty set is the only way a parser reports failure.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ResultSet<'a, O>(Vec<Candidate<'a, O>>);

impl<'a, O> ResultSet<'a, O> {
    /// The empty set (failure).
    #[inline(always)]
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// A set holding exactly one candidate.
    #[inline(always)]
    pub fn single(value: O, rest: &'a [u8]) -> Self {
        Self(vec![Candidate::new(value, rest)])
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the parser did not match.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the candidates in production order.
    pub fn iter(&self) -> slice::Iter<'_, Candidate<'a, O>> {
        self.0.iter()
    }

    /// The first produced candidate.
    pub fn first(&self) -> Option<&Candidate<'a, O>> {
        self.0.first()
    }

    /// Append one candidate.
    pub fn push(&mut self, value: O, rest: &'a [u8]) {
        self.0.push(Candidate::new(value, rest));
    }

    /// Convert every value with `f`, keeping remainders and order.
    pub fn map<F, T>(self, mut f: F) -> ResultSet<'a, T>
    where
        F: FnMut(O) -> T,
    {
        self.0.into_iter().map(|c| c.map(&mut f)).collect()
    }

    /// Drop the candidates `f` rejects.
    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&Candidate<'a, O>) -> bool,
    {
        self.0.retain(f);
    }

    /// Consume into the underlying candidates.
    pub fn into_vec(self) -> Vec<Candidate<'a, O>> {
        self.0
    }

    /// Consume into `(value, rest)` pairs.
    pub fn into_pairs(self) -> Vec<(O, &'a [u8])> {
        self.0.into_iter().map(Candidate::into_pair).collect()
    }

    /// Consume into the parsed values, dropping the remainders.
    pub fn values(self) -> Vec<O> {
        self.0.into_iter().map(|c| c.value).collect()
    }

    /// The candidate with the fewest leftover bytes; the earliest one wins ties.
    pub fn longest(&self) -> Option<&Candidate<'a, O>> {
        self.0.iter().min_by_key(|c| c.rest.len())
    }

    /// Owned variant of [`longest`](Self::longest).
    pub fn into_longest(self) -> Option<Candidate<'a, O>> {
        self.0.into_iter().min_by_key(|c| c.rest.len())
    }

    /// The value of the first candidate that consumed the whole input.
    pub fn into_complete(self) -> Result<O> {
        let mut remaining = None::<usize>;

        for candidate in self.0 {
            if candidate.rest.is_empty() {
                return Ok(candidate.value);
            }

            let len = candidate.rest.len();
            remaining = Some(remaining.map_or(len, |r| r.min(len)));
        }

        let err = match remaining {
            Some(remaining) => SelectError::Incomplete { remaining },
            None => SelectError::NoMatch,
        };

        log::debug!("no complete parse: {err}");

        Err(err)
    }

    /// The only candidate, when there is exactly one.
    pub fn into_unique(mut self) -> Result<Candidate<'a, O>> {
        match self.0.len() {
            0 => Err(SelectError::NoMatch),
            1 => self.0.pop().ok_or(SelectError::NoMatch),
            n => {
                log::debug!("expected one candidate, got {n}");
                Err(SelectError::Ambiguous(n))
            }
        }
    }
}

impl<'a, O> Default for ResultSet<'a, O> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, O> From<Vec<Candidate<'a, O>>> for ResultSet<'a, O> {
    fn from(value: Vec<Candidate<'a, O>>) -> Self {
        Self(value)
    }
}

impl<'a, O> From<Vec<(O, &'a [u8])>> for ResultSet<'a, O> {
    fn from(value: Vec<(O, &'a [u8])>) -> Self {
        value.into_iter().map(Candidate::from).collect()
    }
}

impl<'a, O> FromIterator<Candidate<'a, O>> for ResultSet<'a, O> {
    fn from_iter<T: IntoIterator<Item = Candidate<'a, O>>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a, O> Extend<Candidate<'a, O>> for ResultSet<'a, O> {
    fn extend<T: IntoIterator<Item = Candidate<'a, O>>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl<'a, O> IntoIterator for ResultSet<'a, O> {
    type Item = Candidate<'a, O>;
    type IntoIter = vec::IntoIter<Candidate<'a, O>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'r, 'a, O> IntoIterator for &'r ResultSet<'a, O> {
    type Item = &'r Candidate<'a, O>;
    type IntoIter = slice::Iter<'r, Candidate<'a, O>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
