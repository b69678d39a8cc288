//! Repetition combinators.
//!
//! Both combinators match **one or more** repetitions; neither matches zero.
//! [`many`] keeps every repetition count, [`xmany`] only the largest.
//!
//! A run only continues from candidates that consumed input, so a sub-parser
//! that can succeed without consuming still terminates: its zero-length
//! candidates count as a single repetition and are never repeated.
//!
//! Runs are walked with an explicit work stack instead of recursion, so the
//! length of a run is bounded by memory rather than by the call stack.

use crate::{parser::Parser, result::ResultSet};

/// Prepend `head` onto `tail`.
pub(crate) fn cons<T>((head, mut tail): (T, Vec<T>)) -> Vec<T> {
    tail.insert(0, head);
    tail
}

fn append<T>(prefix: &[T], value: T) -> Vec<T>
where
    T: Clone,
{
    let mut values = Vec::with_capacity(prefix.len() + 1);
    values.extend_from_slice(prefix);
    values.push(value);
    values
}

/// Ambiguous one-or-more repetition, see [`many`].
#[derive(Debug, Clone, Copy)]
pub struct Many<P>(P);

impl<'a, P> Parser<'a> for Many<P>
where
    P: Parser<'a>,
    P::Output: Clone,
{
    type Output = Vec<P::Output>;

    fn parse(&self, input: &'a [u8]) -> ResultSet<'a, Self::Output> {
        let mut found = ResultSet::empty();
        let mut pending = vec![(Vec::new(), input)];

        while let Some((prefix, input)) = pending.pop() {
            let candidates = self.0.parse(input);

            for candidate in &candidates {
                found.push(append(&prefix, candidate.value.clone()), candidate.rest);
            }

            // reversed, so the first candidate's runs are popped first.
            for candidate in candidates.into_iter().rev() {
                if candidate.rest.len() < input.len() {
                    pending.push((append(&prefix, candidate.value), candidate.rest));
                } else {
                    log::trace!("zero-length repetition closes the run");
                }
            }
        }

        found
    }
}

/// Ambiguous one-or-more repetition.
///
/// Defined as `or(using(p, single), using(and(p, many(p)), cons))`: where `p`
/// matches `k` times in a row the result holds `k` candidates, for counts
/// `1..=k` in that order. When `p` itself is ambiguous, every continuation of
/// its first candidate comes before those of the second, and so on.
pub fn many<'a, P>(parser: P) -> Many<P>
where
    P: Parser<'a>,
    P::Output: Clone,
{
    Many(parser)
}

/// Greedy one-or-more repetition, see [`xmany`].
#[derive(Debug, Clone, Copy)]
pub struct XMany<P>(P);

impl<'a, P> Parser<'a> for XMany<P>
where
    P: Parser<'a>,
    P::Output: Clone,
{
    type Output = Vec<P::Output>;

    fn parse(&self, input: &'a [u8]) -> ResultSet<'a, Self::Output> {
        let mut found = ResultSet::empty();
        let mut pending = vec![(Vec::new(), input, self.0.parse(input))];

        while let Some((prefix, input, candidates)) = pending.pop() {
            // a candidate extends the run only if `p` matches again after it.
            let mut longer = Vec::new();

            for candidate in &candidates {
                if candidate.rest.len() == input.len() {
                    continue;
                }

                let next = self.0.parse(candidate.rest);

                if !next.is_empty() {
                    longer.push((candidate.value.clone(), candidate.rest, next));
                }
            }

            if longer.is_empty() {
                for candidate in candidates {
                    found.push(append(&prefix, candidate.value), candidate.rest);
                }

                continue;
            }

            for (value, rest, next) in longer.into_iter().rev() {
                pending.push((append(&prefix, value), rest, next));
            }
        }

        found
    }
}

/// Greedy one-or-more repetition.
///
/// Defined as `xor(using(and(p, xmany(p)), cons), using(p, single))`: the
/// longer branch is tried first, so only the maximal repetition count
/// survives.
pub fn xmany<'a, P>(parser: P) -> XMany<P>
where
    P: Parser<'a>,
    P::Output: Clone,
{
    XMany(parser)
}

#[cfg(test)]
mod tests {
    use crate::{
        parser::{BoxedParser, any_byte, literal, pred, unit},
        recursive::{Recursive, recursive},
    };

    use super::*;

    type Chunk = BoxedParser<'static, Vec<u8>>;

    /// One or two bytes, or nothing at all.
    fn chunk() -> Chunk {
        any_byte()
            .using(|b| vec![b])
            .or(any_byte().and(any_byte()).using(|(a, b)| vec![a, b]))
            .or(unit(vec![]))
            .boxed()
    }

    fn many_by_definition(parser: Chunk) -> Recursive<'static, Vec<Vec<u8>>> {
        recursive(move |this| {
            parser
                .clone()
                .using(|v| vec![v])
                .or(parser.consuming().and(this).using(cons))
        })
    }

    fn xmany_by_definition(parser: Chunk) -> Recursive<'static, Vec<Vec<u8>>> {
        recursive(move |this| {
            parser
                .clone()
                .consuming()
                .and(this)
                .using(cons)
                .xor(parser.using(|v| vec![v]))
        })
    }

    #[test]
    fn test_matches_recursive_definition() {
        for input in ["", "a", "ab", "abc", "abcd"] {
            assert_eq!(
                many(chunk()).run(input),
                many_by_definition(chunk()).run(input),
                "{input:?}"
            );
            assert_eq!(
                xmany(chunk()).run(input),
                xmany_by_definition(chunk()).run(input),
                "{input:?}"
            );
        }
    }

    #[test]
    fn test_long_runs() {
        let input = format!("{};", "a".repeat(10_000));

        let all = many(literal(b'a')).run(&input);
        assert_eq!(all.len(), 10_000);
        assert_eq!(all.longest().map(|c| c.value.len()), Some(10_000));

        let greedy = xmany(literal(b'a')).run(&input).into_pairs();
        assert_eq!(greedy.len(), 1);
        assert_eq!(greedy[0].0.len(), 10_000);
        assert_eq!(greedy[0].1, b";");
    }

    #[test]
    fn test_many_every_count() {
        assert_eq!(
            many(literal(b'a')).run("aaab").into_pairs(),
            vec![
                (b"a".to_vec(), b"aab".as_slice()),
                (b"aa".to_vec(), b"ab".as_slice()),
                (b"aaa".to_vec(), b"b".as_slice()),
            ]
        );
    }

    #[test]
    fn test_many_needs_one() {
        assert!(many(literal(b'a')).run("bbb").is_empty());
        assert!(many(literal(b'a')).run("").is_empty());
    }

    #[test]
    fn test_xmany_maximal() {
        assert_eq!(
            xmany(literal(b'a')).run("aaab").into_pairs(),
            vec![(b"aaa".to_vec(), b"b".as_slice())]
        );
        assert_eq!(
            xmany(literal(b'a')).run("aaa").into_pairs(),
            vec![(b"aaa".to_vec(), b"".as_slice())]
        );
        assert!(xmany(literal(b'a')).run("b").is_empty());
        assert!(xmany(literal(b'a')).run("").is_empty());
    }

    #[test]
    fn test_zero_length_terminates() {
        assert_eq!(
            many(unit(b'-')).run("ab").into_pairs(),
            vec![(b"-".to_vec(), b"ab".as_slice())]
        );
        assert_eq!(
            xmany(unit(b'-')).run("ab").into_pairs(),
            vec![(b"-".to_vec(), b"ab".as_slice())]
        );

        // the zero-length alternative only ever closes the run.
        let maybe_a = literal(b'a').or(unit(b'-'));
        assert_eq!(
            xmany(maybe_a).run("aa").into_pairs(),
            vec![(b"aa-".to_vec(), b"".as_slice())]
        );
    }

    #[test]
    fn test_many_ambiguous_operand() {
        // one or two bytes per repetition.
        let chunk = any_byte()
            .using(|b| vec![b])
            .or(any_byte().and(any_byte()).using(|(a, b)| vec![a, b]));

        let counts = many(chunk)
            .run("abc")
            .into_iter()
            .filter(|c| c.rest.is_empty())
            .count();

        // "abc" splits into 1+1+1, 1+2 and 2+1.
        assert_eq!(counts, 3);
    }

    #[test]
    fn test_cons() {
        assert_eq!(cons((1, vec![2, 3])), vec![1, 2, 3]);
        assert_eq!(cons((1, vec![])), vec![1]);
    }

    #[test]
    fn test_many_predicate() {
        let lower = pred(|b: u8| b.is_ascii_lowercase());
        assert_eq!(many(lower).run("abC").len(), 2);
        assert_eq!(xmany(lower).run("abC").len(), 1);
    }
}
