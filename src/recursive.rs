//! Self-referential parsers.
//!
//! A grammar rule that mentions itself cannot be built eagerly. [`recursive`]
//! hands the definition a [`RecursiveRef`] standing for the parser being
//! defined; the reference resolves lazily at parse time.

use std::{
    cell::OnceCell,
    rc::{Rc, Weak},
};

use crate::{
    parser::{BoxedParser, Parser},
    result::ResultSet,
};

type Slot<'a, O> = OnceCell<BoxedParser<'a, O>>;

/// A parser defined in terms of itself, created by [`recursive`].
pub struct Recursive<'a, O> {
    slot: Rc<Slot<'a, O>>,
}

impl<'a, O> Clone for Recursive<'a, O> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<'a, O> Parser<'a> for Recursive<'a, O> {
    type Output = O;

    fn parse(&self, input: &'a [u8]) -> ResultSet<'a, Self::Output> {
        match self.slot.get() {
            Some(parser) => parser.parse(input),
            None => ResultSet::empty(),
        }
    }
}

/// The self reference handed to a [`recursive`] definition.
///
/// Holds a weak link so the definition does not keep itself alive.
pub struct RecursiveRef<'a, O> {
    slot: Weak<Slot<'a, O>>,
}

impl<'a, O> Clone for RecursiveRef<'a, O> {
    fn clone(&self) -> Self {
        Self {
            slot: Weak::clone(&self.slot),
        }
    }
}

impl<'a, O> Parser<'a> for RecursiveRef<'a, O> {
    type Output = O;

    fn parse(&self, input: &'a [u8]) -> ResultSet<'a, Self::Output> {
        let Some(slot) = self.slot.upgrade() else {
            log::warn!("recursive parser invoked after its definition was dropped");
            return ResultSet::empty();
        };

        let Some(parser) = slot.get() else {
            log::warn!("recursive parser invoked before its definition was installed");
            return ResultSet::empty();
        };

        parser.parse(input)
    }
}

/// Build a parser from a definition that may refer to the parser itself.
///
/// ```
/// use listparse::{Parser, literal, recursive};
///
/// // counts a run of one or more 'a'.
/// let a_run = recursive(|this| {
///     literal(b'a')
///         .and(this)
///         .using(|(_, n): (u8, usize)| n + 1)
///         .xor(literal(b'a').using(|_| 1))
/// });
///
/// assert_eq!(a_run.run("aaab").into_pairs(), vec![(3, b"b".as_slice())]);
/// ```
pub fn recursive<'a, O, F, P>(define: F) -> Recursive<'a, O>
where
    F: FnOnce(RecursiveRef<'a, O>) -> P,
    P: Parser<'a, Output = O> + 'a,
    O: 'a,
{
    let slot = Rc::new(OnceCell::new());

    let parser = define(RecursiveRef {
        slot: Rc::downgrade(&slot),
    });

    // the slot was created above and has not been filled yet.
    if slot.set(BoxedParser::new(parser)).is_err() {
        log::warn!("recursive parser defined twice, keeping the first definition");
    }

    Recursive { slot }
}
