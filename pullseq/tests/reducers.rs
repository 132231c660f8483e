use insta::assert_debug_snapshot;
use rstest::rstest;

use pullseq::compare::DefaultEquality;
use pullseq::prelude::*;
use pullseq::{chars, empty, from_vec, range, Error};

#[test]
fn test_aggregate() {
    let numbers = range(1, 5).unwrap();
    assert_eq!(numbers.aggregate(0, |total, n| total + n), 15);
    assert_eq!(
        numbers.aggregate_with(String::new(), |text, n| format!("{text}{n}"), |text| text.len()),
        5
    );
    assert_eq!(empty::<i32>().aggregate(7, |total, n| total + n), 7);
}

#[test]
fn test_sum_and_average() {
    let numbers = from_vec(vec![2, 4, 9]);
    assert_eq!(numbers.sum(|n| *n), Ok(15));
    assert_eq!(numbers.average(|n| *n), Ok(5.0));
    assert_eq!(empty::<i32>().sum(|n| *n), Err(Error::EmptySequence));
    assert_eq!(empty::<i32>().average(|n| *n), Err(Error::EmptySequence));
}

#[test]
fn test_count() {
    let letters = chars("banana");
    assert_eq!(letters.count(), 6);
    assert_eq!(letters.count_where(|c| *c == 'a'), 3);
}

#[rstest]
#[case(vec![], Err(Error::EmptySequence), Err(Error::EmptySequence))]
#[case(vec![1, 3], Err(Error::NoMatch), Err(Error::NoMatch))]
#[case(vec![1, 2, 3, 4], Ok(2), Ok(4))]
fn test_first_last_where(
    #[case] numbers: Vec<i32>,
    #[case] first: Result<i32, Error>,
    #[case] last: Result<i32, Error>,
) {
    let numbers = from_vec(numbers);
    assert_eq!(numbers.first_where(|n| n % 2 == 0), first);
    assert_eq!(numbers.last_where(|n| n % 2 == 0), last);
}

#[test]
fn test_first_last_fallbacks() {
    let numbers = from_vec(vec![5, 6, 7]);
    assert_eq!(numbers.first(), Ok(5));
    assert_eq!(numbers.last(), Ok(7));
    assert_eq!(empty::<i32>().first(), Err(Error::EmptySequence));
    assert_eq!(empty::<i32>().last(), Err(Error::EmptySequence));
    assert_eq!(empty::<i32>().first_or(-1), -1);
    assert_eq!(empty::<i32>().last_or_default(), 0);
    assert_eq!(numbers.first_where_or(|n| *n > 10, 0), 0);
    assert_eq!(numbers.last_where_or(|n| *n < 7, 0), 6);
}

#[rstest]
#[case(vec![], Err(Error::EmptySequence))]
#[case(vec![4], Ok(4))]
#[case(vec![4, 5], Err(Error::AmbiguousMatch))]
fn test_single(#[case] numbers: Vec<i32>, #[case] expected: Result<i32, Error>) {
    assert_eq!(from_vec(numbers).single(), expected);
}

#[test]
fn test_single_or_default() {
    assert_eq!(empty::<i32>().single_or_default(), Ok(0));
    assert_eq!(from_vec(vec![3]).single_or(9), Ok(3));
    assert_eq!(from_vec(vec![3, 4]).single_or(9), Err(Error::AmbiguousMatch));
}

#[test]
fn test_element_at() {
    let letters = chars("abc");
    assert_eq!(letters.element_at(1), Ok('b'));
    assert!(matches!(
        letters.element_at(-1),
        Err(Error::InvalidArgument { name: "index", .. })
    ));
    assert!(matches!(
        letters.element_at(3),
        Err(Error::InvalidArgument { name: "index", .. })
    ));
    assert_eq!(letters.element_at_or_default(3), Ok('\0'));
    assert_eq!(letters.element_at_or(5, '?'), Ok('?'));
    assert!(letters.element_at_or_default(-2).is_err());
}

#[test]
fn test_contains_and_sequence_equal() {
    let words = from_vec(vec!["Alpha", "Beta"]);
    assert!(words.contains(&"Beta", DefaultEquality));
    assert!(!words.contains(&"beta", DefaultEquality));
    assert!(words.contains(&"beta", |a: &&str, b: &&str| a.eq_ignore_ascii_case(b)));

    let same = from_vec(vec!["Alpha", "Beta"]);
    let longer = from_vec(vec!["Alpha", "Beta", "Gamma"]);
    assert!(words.sequence_equal(&same, DefaultEquality));
    assert!(!words.sequence_equal(&longer, DefaultEquality));
    assert!(!longer.sequence_equal(&words, DefaultEquality));
}

#[test]
fn test_min_max() {
    let numbers = from_vec(vec![4, -2, 9, 9, 0]);
    assert_eq!(numbers.min(), Ok(-2));
    assert_eq!(numbers.max(), Ok(9));
    let pairs = from_vec(vec![(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')]);
    let by_number = |a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0);
    assert_eq!(pairs.min_by(by_number), Ok((0, 'b')));
    assert_eq!(pairs.max_by(by_number), Ok((1, 'a')));
}

#[test]
fn test_to_map() {
    let words = from_vec(vec!["one", "two", "three", "four", "five", "six"]);
    let by_length = words.to_map(|word| word.len());
    assert_debug_snapshot!(by_length, @r###"
    {
        3: [
            "one",
            "two",
            "six",
        ],
        5: [
            "three",
        ],
        4: [
            "four",
            "five",
        ],
    }
    "###);
}

#[test]
fn test_reducers_after_pipeline() {
    let total = range(1, 10)
        .unwrap()
        .filter(|n, _| n % 2 == 1)
        .map(|n, _| n * n)
        .reduce(|a, b| a + b);
    assert_eq!(total, Ok(1 + 9 + 25 + 49 + 81));
}
