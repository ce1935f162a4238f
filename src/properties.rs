use crate::chain::{Chain, chain};
use crate::count::{Count, CountExt};
use crate::error::{ErrorKind, ParseError};
use crate::first_of::Try;
use crate::map::{Map, MapExt};
use crate::parser::{
    BoxedExt, BoxedParser, BoxedValueParser, FromFn, ParseResult, Parser, from_fn, from_text_fn,
};
use crate::utf8::{
    any_of, char, exact, exact_case_insensitive, none_of, not_any_of, one_of, optional, take,
    take_to, take_until, take_while, take_while_between,
};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

/// One instance of every text primitive, each with a valid configuration
fn primitives() -> Vec<BoxedParser> {
    vec![
        take(3).boxed(),
        exact("ab").boxed(),
        exact_case_insensitive("aB").boxed(),
        char('a').boxed(),
        take_while(char::is_alphabetic).boxed(),
        take_until(char::is_whitespace).boxed(),
        take_while_between(1, 4, char::is_alphanumeric).boxed(),
        take_to(" ").boxed(),
        one_of("abc").boxed(),
        none_of("abc").boxed(),
        any_of("abc ").boxed(),
        not_any_of(" ").boxed(),
        optional("a").boxed(),
    ]
}

/// Checks that `pieces` followed by `rest` spell out `input` and that `rest`
/// points into `input` rather than at a copy
fn assert_reconstructs(input: &str, pieces: &[&str], rest: &str) -> Result<(), TestCaseError> {
    let mut rebuilt = pieces.concat();
    rebuilt.push_str(rest);
    prop_assert_eq!(rebuilt.as_str(), input);

    let offset = input.len() - rest.len();
    prop_assert_eq!(rest.as_ptr(), input.as_bytes()[offset..].as_ptr());
    Ok(())
}

/// Renders a result so runs can be compared, error messages included
fn outcome<T: std::fmt::Debug>(result: ParseResult<'_, T>) -> Result<String, String> {
    result
        .map(|(value, rest)| format!("{:?} | {:?}", value, rest))
        .map_err(|error| error.to_string())
}

fn text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[abcAB 日本ð1-]{0,16}",
        any::<String>(),
    ]
}

fn invalid_utf8() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>(), 1..24)
        .prop_filter("must be ill-formed utf-8", |bytes| std::str::from_utf8(bytes).is_err())
}

proptest! {
    #[test]
    fn primitives_reconstruct_input(input in text()) {
        for parser in primitives() {
            if let Ok((value, rest)) = parser.parse_str(&input) {
                assert_reconstructs(&input, &[value], rest)?;
            }
        }
    }

    #[test]
    fn primitives_are_deterministic(input in text()) {
        for parser in primitives() {
            let first = parser.parse_str(&input).map_err(|e| e.to_string());
            let second = parser.parse_str(&input).map_err(|e| e.to_string());
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn combinators_are_deterministic(input in text()) {
        let mapped = take(2).map(|pair: &str| pair.parse::<u8>());
        let alternatives = crate::first_of![exact("ab"), one_of("abc"), take(3)];
        let sequence = crate::chain![optional("a"), take_while(char::is_alphabetic), take(1)];
        let repeated = take(1).count(3);

        prop_assert_eq!(outcome(mapped.parse_str(&input)), outcome(mapped.parse_str(&input)));
        prop_assert_eq!(
            outcome(alternatives.parse_str(&input)),
            outcome(alternatives.parse_str(&input))
        );
        prop_assert_eq!(outcome(sequence.parse_str(&input)), outcome(sequence.parse_str(&input)));
        prop_assert_eq!(outcome(repeated.parse_str(&input)), outcome(repeated.parse_str(&input)));
    }

    #[test]
    fn malformed_input_is_rejected_by_every_primitive(bytes in invalid_utf8()) {
        for parser in primitives() {
            match parser.parse(&bytes) {
                Ok(_) => prop_assert!(false, "parsed ill-formed utf-8 {:?}", bytes),
                Err(error) => prop_assert_eq!(error.kind(), ErrorKind::InvalidEncoding),
            }
        }
    }

    #[test]
    fn take_counts_chars(input in any::<String>(), n in 1usize..12) {
        let chars = input.chars().count();
        match take(n).parse_str(&input) {
            Ok((value, rest)) => {
                prop_assert_eq!(value.chars().count(), n);
                assert_reconstructs(&input, &[value], rest)?;
            }
            Err(error) if input.is_empty() => prop_assert_eq!(error.kind(), ErrorKind::EmptyInput),
            Err(error) => {
                prop_assert!(chars < n);
                prop_assert_eq!(error.kind(), ErrorKind::BoundaryExceeded);
            }
        }
    }

    #[test]
    fn exact_matches_any_prefix(input in "\\PC{1,16}", split in 1usize..16) {
        let split = split.min(input.chars().count());
        let prefix: String = input.chars().take(split).collect();

        let (value, rest) = exact(prefix.clone()).parse_str(&input).map_err(|e| {
            TestCaseError::fail(e.to_string())
        })?;
        prop_assert_eq!(value, prefix.as_str());
        assert_reconstructs(&input, &[value], rest)?;
    }

    #[test]
    fn never_flipping_predicates_fail(input in "\\PC{1,32}") {
        let error = take_while(|_| true).parse_str(&input).unwrap_err();
        prop_assert_eq!(error.to_string(), "TakeWhile: predicate never returned false");

        let error = take_until(|_| false).parse_str(&input).unwrap_err();
        prop_assert_eq!(error.to_string(), "TakeUntil: predicate never returned true");
    }

    #[test]
    fn count_reconstructs_input(input in any::<String>(), n in 1usize..4, times in 1usize..5) {
        if let Ok((values, rest)) = take(n).count(times).parse_str(&input) {
            prop_assert_eq!(values.len(), times);
            assert_reconstructs(&input, &values, rest)?;
        }
    }

    #[test]
    fn chain_reconstructs_input(input in text()) {
        let parser = chain(vec![
            optional("a").boxed(),
            take_while(char::is_alphabetic).boxed(),
            take(1).boxed(),
        ]);
        if let Ok((values, rest)) = parser.parse_str(&input) {
            prop_assert_eq!(values.len(), 3);
            assert_reconstructs(&input, &values, rest)?;
        }
    }
}

#[test]
fn parsers_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    fn assert_value_send_sync<T: Send + Sync>(_: &T) {}

    assert_send_sync::<crate::utf8::Take>();
    assert_send_sync::<crate::utf8::Exact>();
    assert_send_sync::<crate::utf8::ExactCaseInsensitive>();
    assert_send_sync::<crate::utf8::Char>();
    assert_send_sync::<crate::utf8::TakeWhile<fn(char) -> bool>>();
    assert_send_sync::<crate::utf8::TakeWhileBetween<fn(char) -> bool>>();
    assert_send_sync::<crate::utf8::TakeUntil<fn(char) -> bool>>();
    assert_send_sync::<crate::utf8::TakeTo>();
    assert_send_sync::<crate::utf8::OneOf>();
    assert_send_sync::<crate::utf8::NoneOf>();
    assert_send_sync::<crate::utf8::AnyOf>();
    assert_send_sync::<crate::utf8::NotAnyOf>();
    assert_send_sync::<crate::utf8::Optional>();

    assert_send_sync::<BoxedParser>();
    assert_send_sync::<BoxedValueParser<u8>>();
    assert_send_sync::<Try<BoxedParser>>();
    assert_send_sync::<Chain<BoxedParser>>();
    assert_send_sync::<Count<BoxedParser>>();
    assert_send_sync::<Map<BoxedParser, fn(&str) -> Result<usize, ParseError>>>();
    assert_send_sync::<FromFn<for<'code> fn(&'code [u8]) -> ParseResult<'code, &'code str>>>();

    assert_value_send_sync(&take(2).map(|pair: &str| pair.parse::<u8>()));
    assert_value_send_sync(&from_fn(|input| take(1).count(2).parse(input).map(|(v, r)| (v.len(), r))));
    assert_value_send_sync(&from_text_fn(|input| take(1).parse(input)));
}

#[test]
fn shared_parsers_agree_across_threads() {
    let sequence = crate::chain![
        optional("v"),
        any_of("0123456789"),
        char('.'),
        take_while(|c: char| c.is_ascii_digit()),
    ];
    let alternatives = crate::first_of![exact("v"), take_to("."), take(2)];
    let inputs = ["v12.6-rc.2", "3.14 pi", "x.1", "", "1.22", "日本.語"];

    let run = || {
        inputs
            .iter()
            .map(|input| {
                (
                    outcome(sequence.parse_str(input)),
                    outcome(alternatives.parse_str(input)),
                )
            })
            .collect::<Vec<_>>()
    };
    let expected = run();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4).map(|_| scope.spawn(run)).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
