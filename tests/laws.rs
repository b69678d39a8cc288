use listparse::{
    BoxedParser, Parser, any_byte, bind, fail, keyword, literal, many, or, separate_by, unit, xmany,
    xor,
};

fn init() {
    let _ = pretty_env_logger::try_init();
}

const INPUTS: [&str; 5] = ["", "a", "abc", "aab", "xyz"];

/// A handful of parsers with different shapes of result set.
fn samples() -> Vec<BoxedParser<'static, u8>> {
    vec![
        literal(b'a').boxed(),
        any_byte().boxed(),
        literal(b'a').or(unit(b'-')).boxed(),
        keyword("ab").using(|matched| matched[1]).boxed(),
        fail().boxed(),
    ]
}

#[test]
fn test_unit_consumes_nothing() {
    init();

    for input in INPUTS {
        assert_eq!(
            unit("v").run(input).into_pairs(),
            vec![("v", input.as_bytes())]
        );
    }
}

#[test]
fn test_fail_never_matches() {
    init();

    for input in INPUTS {
        assert!(fail::<()>().run(input).is_empty());
    }
}

#[test]
fn test_left_identity() {
    init();

    let f = |v: u8| literal(v);

    for input in INPUTS {
        for v in [b'a', b'b', b'x'] {
            assert_eq!(bind(unit(v), f).run(input), f(v).run(input));
        }
    }
}

#[test]
fn test_right_identity() {
    init();

    for p in samples() {
        for input in INPUTS {
            assert_eq!(p.clone().bind(unit).run(input), p.run(input));
        }
    }
}

#[test]
fn test_bind_fail() {
    init();

    for input in INPUTS {
        assert!(bind(fail::<u8>(), literal).run(input).is_empty());
    }
}

#[test]
fn test_or_identity() {
    init();

    for p in samples() {
        for input in INPUTS {
            assert_eq!(or(p.clone(), fail()).run(input), p.run(input));
            assert_eq!(or(fail(), p.clone()).run(input), p.run(input));
        }
    }
}

#[test]
fn test_xor_selects() {
    init();

    for p in samples() {
        for q in samples() {
            for input in INPUTS {
                let expected = if p.run(input).is_empty() {
                    q.run(input)
                } else {
                    p.run(input)
                };

                assert_eq!(xor(p.clone(), q.clone()).run(input), expected);
            }
        }
    }
}

#[test]
fn test_using_is_bind_unit() {
    init();

    let upper = |b: u8| b.to_ascii_uppercase();

    for p in samples() {
        for input in INPUTS {
            assert_eq!(
                p.clone().using(upper).run(input),
                p.clone().bind(move |v| unit(upper(v))).run(input)
            );
        }
    }
}

#[test]
fn test_remainders_are_suffixes() {
    init();

    for p in samples() {
        for input in INPUTS {
            for candidate in p.clone().and(p.clone()).run(input) {
                assert!(input.as_bytes().ends_with(candidate.rest));
            }
        }
    }
}

#[test]
fn test_repetition_counts() {
    init();

    for k in 1..8 {
        let input = format!("{}b", "a".repeat(k));

        let all = many(literal(b'a')).run(&input).into_pairs();
        assert_eq!(all.len(), k);

        for (n, (value, rest)) in all.into_iter().enumerate() {
            assert_eq!(value.len(), n + 1);
            assert_eq!(rest.len(), input.len() - n - 1);
        }

        let greedy = xmany(literal(b'a')).run(&input).into_pairs();
        assert_eq!(greedy, vec![("a".repeat(k).into_bytes(), b"b".as_slice())]);
    }
}

#[test]
fn test_empty_input_is_total() {
    init();

    let empty = "";

    assert!(literal(b'a').run(empty).is_empty());
    assert!(many(any_byte()).run(empty).is_empty());
    assert!(xmany(any_byte()).run(empty).is_empty());
    assert!(any_byte().and(any_byte()).run(empty).is_empty());
    assert!(separate_by(any_byte(), literal(b',')).run(empty).is_empty());
    assert_eq!(
        many(unit(0)).run(empty).into_pairs(),
        vec![(vec![0], b"".as_slice())]
    );
}
