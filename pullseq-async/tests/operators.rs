use std::cell::{Cell, RefCell};
use std::future::ready;
use std::rc::Rc;

use futures::executor::block_on;
use futures::stream::{self, StreamExt};
use insta::assert_debug_snapshot;
use rstest::rstest;

use pullseq_async::prelude::*;
use pullseq_async::{
    empty, from_enumerable, from_stream_fn, from_stream_once, from_vec, range, Error, Kind, Value,
};

#[rstest]
#[case(3, vec![4, 5])]
#[case(0, vec![1, 2, 3, 4, 5])]
#[case(-5, vec![1, 2, 3, 4, 5])]
fn test_skip(#[case] count: isize, #[case] expected: Vec<i32>) {
    let numbers = from_vec(vec![1, 2, 3, 4, 5]);
    assert_eq!(block_on(numbers.skip(count).to_vec()), expected);
}

#[test]
fn test_set_operators() {
    let numbers = from_vec(vec![1, 2, 3]);
    let other = from_vec(vec![3, 4, 5]);
    assert_eq!(block_on((&numbers).except(&other).to_vec()), vec![1, 2]);
    assert_eq!(block_on((&numbers).intersect(&other).to_vec()), vec![3]);
    assert_eq!(
        block_on((&numbers).union(&other).to_vec()),
        vec![1, 2, 3, 4, 5]
    );
}

fn suspending_eq(a: &i32, b: &i32) -> impl std::future::Future<Output = bool> {
    let equal = a == b;
    async move { equal }
}

#[test]
fn test_set_operators_drop_repeats() {
    let numbers = from_vec(vec![1, 1, 2, 2, 3]);
    let other = from_vec(vec![2, 6, 6]);
    assert_eq!(
        block_on((&numbers).except_with(&other, suspending_eq).to_vec()),
        vec![1, 3]
    );
    assert_eq!(
        block_on((&numbers).intersect_with(&other, suspending_eq).to_vec()),
        vec![2]
    );
    assert_eq!(
        block_on((&numbers).union_with(&other, suspending_eq).to_vec()),
        vec![1, 2, 3, 6]
    );
}

#[test]
fn test_intersect_matches_each_entry_once() {
    let numbers = from_vec(vec![2, 2, 2]);
    let other = from_vec(vec![2, 2]);
    assert_eq!(
        block_on(numbers.intersect_with(other, suspending_eq).to_vec()),
        vec![2, 2]
    );
}

#[test]
fn test_union_shares_one_seen_set() {
    let left = from_vec(vec![3, 1, 3]);
    let right = from_vec(vec![1, 4, 4, 3]);
    assert_eq!(
        block_on(left.union_with(right, suspending_eq).to_vec()),
        vec![3, 1, 4]
    );
}

#[test]
fn test_distinct_idempotent() {
    let numbers = from_vec(vec![5, 1, 5, 2, 1, 3]);
    let once = block_on((&numbers).distinct_with(suspending_eq).to_vec());
    let twice = block_on(
        (&numbers)
            .distinct_with(suspending_eq)
            .distinct_with(suspending_eq)
            .to_vec(),
    );
    assert_eq!(once, vec![5, 1, 2, 3]);
    assert_eq!(twice, once);
    assert_eq!(block_on(numbers.distinct_hashed().to_vec()), once);
}

#[test]
fn test_concat() {
    let pipeline = from_vec(vec![1, 2]).concat(range(10, 2).unwrap());
    assert_eq!(block_on(pipeline.to_vec()), vec![1, 2, 10, 11]);
    assert_eq!(block_on(empty::<i32>().concat(empty()).count()), 0);
}

#[test]
fn test_concat_is_lazy_on_second() {
    let started = Cell::new(false);
    let second = from_stream_fn(|| {
        started.set(true);
        stream::iter(vec![9])
    });
    let pipeline = from_vec(vec![1, 2]).concat(second);
    let mut cursor = pipeline.cursor();
    assert_eq!(block_on(cursor.next()), Some(1));
    assert_eq!(block_on(cursor.next()), Some(2));
    assert!(!started.get());
    assert_eq!(block_on(cursor.next()), Some(9));
    assert!(started.get());
}

#[test]
fn test_append_prepend() {
    let numbers = from_vec(vec![1, 2]);
    assert_eq!(block_on((&numbers).append(3).to_vec()), vec![1, 2, 3]);
    assert_eq!(block_on((&numbers).prepend(4).to_vec()), vec![4, 1, 2]);
}

#[test]
fn test_default_if_empty() {
    assert_eq!(block_on(empty::<i32>().default_if_empty(0).to_vec()), vec![0]);
    assert_eq!(
        block_on(from_vec(vec![1, 2]).default_if_empty(5).to_vec()),
        vec![1, 2]
    );
    assert_eq!(
        block_on(empty::<u8>().default_if_empty_or_default().to_vec()),
        vec![0]
    );
}

#[test]
fn test_zip_stops_with_shorter() {
    let numbers = range(0, 5).unwrap();
    let zipped = numbers.zip(from_vec(vec!['a', 'b', 'c']), |n, c| {
        ready(format!("{c}{n}"))
    });
    assert_eq!(block_on(zipped.to_vec()), vec!["a0", "b1", "c2"]);
}

#[test]
fn test_zip3() {
    let zipped = range(1, 3).unwrap().zip3(
        range(10, 3).unwrap(),
        range(100, 2).unwrap(),
        |a, b, c| ready(a + b + c),
    );
    assert_eq!(block_on(zipped.to_vec()), vec![111, 114]);
}

#[test]
fn test_reverse_twice() {
    let numbers = from_vec(vec![3, 1, 2]);
    assert_eq!(block_on((&numbers).reverse().to_vec()), vec![2, 1, 3]);
    assert_eq!(block_on((&numbers).reverse().reverse().to_vec()), vec![3, 1, 2]);
}

#[test]
fn test_skip_last_take_last() {
    let numbers = range(1, 5).unwrap();
    assert_eq!(block_on((&numbers).skip_last(2).to_vec()), vec![1, 2, 3]);
    assert_eq!(block_on((&numbers).take_last(2).to_vec()), vec![4, 5]);
    assert_eq!(block_on((&numbers).take_last(-2).count()), 0);
    assert_eq!(block_on((&numbers).skip_last(9).count()), 0);
}

#[rstest]
#[case(-3, vec![1, 2, 3])]
#[case(0, vec![1, 2, 3])]
#[case(isize::MAX, vec![])]
fn test_skip_last_counts(#[case] count: isize, #[case] expected: Vec<i32>) {
    let numbers = from_vec(vec![1, 2, 3]);
    assert_eq!(block_on(numbers.skip_last(count).to_vec()), expected);
}

#[rstest]
#[case(-3, vec![])]
#[case(0, vec![])]
#[case(isize::MAX, vec![1, 2, 3])]
fn test_take_last_counts(#[case] count: isize, #[case] expected: Vec<i32>) {
    let numbers = from_vec(vec![1, 2, 3]);
    assert_eq!(block_on(numbers.take_last(count).to_vec()), expected);
}

#[test]
fn test_chunk_larger_than_sequence() {
    let chunks = from_vec(vec![1, 2, 3]).chunk(isize::MAX).unwrap();
    assert_eq!(block_on(chunks.to_vec()), vec![vec![1, 2, 3]]);
}

#[test]
fn test_chunk() {
    let chunks = range(1, 5).unwrap().chunk(2);
    assert_debug_snapshot!(chunks.as_ref().map(|chunks| block_on(chunks.to_vec())), @r###"
    Ok(
        [
            [
                1,
                2,
            ],
            [
                3,
                4,
            ],
            [
                5,
            ],
        ],
    )
    "###);
    assert!(matches!(
        range(1, 5).unwrap().chunk(0).err(),
        Some(Error::InvalidArgument { name: "size", .. })
    ));
}

#[test]
fn test_of_type_and_kind() {
    let values = from_vec(vec![Value::from(1.5), Value::Null, Value::from(false), Value::from(2)]);
    let numbers: Vec<f64> = block_on((&values).of_type::<f64>().to_vec());
    assert_eq!(numbers, vec![1.5, 2.0]);
    assert_eq!(
        block_on((&values).of_kind(Kind::Boolean).to_vec()),
        vec![Value::Boolean(false)]
    );
}

#[test]
fn test_callbacks_interleave_with_pulls() {
    let log = &RefCell::new(Vec::new());
    let source = from_stream_fn(move || {
        stream::iter(1..=3).then(move |n| {
            log.borrow_mut().push(format!("pull {n}"));
            ready(n)
        })
    });
    let pipeline = source
        .filter(|n, _| {
            log.borrow_mut().push(format!("filter {n}"));
            ready(n % 2 == 1)
        })
        .map(|n, _| {
            log.borrow_mut().push(format!("map {n}"));
            async move { n * 10 }
        });
    assert!(log.borrow().is_empty());
    assert_eq!(block_on(pipeline.to_vec()), vec![10, 30]);
    assert_debug_snapshot!(log.borrow(), @r###"
    [
        "pull 1",
        "filter 1",
        "map 1",
        "pull 2",
        "filter 2",
        "pull 3",
        "filter 3",
        "map 3",
    ]
    "###);
}

#[test]
fn test_retraversal_is_idempotent() {
    let pipeline = from_vec(vec![5, 3, 5, 1])
        .distinct()
        .map(|n, index| ready(n * 10 + index as i32));
    let first = block_on(pipeline.to_vec());
    assert_eq!(first, vec![50, 31, 12]);
    assert_eq!(block_on(pipeline.to_vec()), first);
}

#[test]
fn test_single_use_stream() {
    let once = from_stream_once(stream::iter(vec![1, 2]));
    assert_eq!(block_on(once.to_vec()), vec![1, 2]);
    assert_eq!(block_on(once.count()), 0);
}

#[test]
fn test_from_enumerable() {
    let letters = from_enumerable(pullseq::chars("abc"));
    assert_eq!(block_on(letters.take(2).to_vec()), vec!['a', 'b']);
}

struct Release(Rc<Cell<bool>>);

impl Drop for Release {
    fn drop(&mut self) {
        self.0.set(true);
    }
}

#[test]
fn test_take_releases_upstream_early() {
    let released = Rc::new(Cell::new(false));
    let source = from_stream_fn(|| {
        let guard = Release(released.clone());
        stream::iter(0..).map(move |n| {
            let _ = &guard;
            n
        })
    });
    let first_two = source.take(2);
    let mut cursor = first_two.cursor();
    assert_eq!(block_on(cursor.next()), Some(0));
    assert!(!released.get());
    assert_eq!(block_on(cursor.next()), Some(1));
    assert!(released.get());
    assert_eq!(block_on(cursor.next()), None);
}

#[test]
fn test_take_zero_never_starts_upstream() {
    let started = Cell::new(false);
    let source = from_stream_fn(|| {
        started.set(true);
        stream::iter(0..3)
    });
    assert_eq!(block_on(source.take(0).count()), 0);
    assert!(!started.get());
}

#[test]
fn test_take_on_infinite_stream() {
    let naturals = from_stream_fn(|| stream::iter(0_u64..));
    let squares = naturals.map(|n, _| ready(n * n)).take(4);
    assert_eq!(block_on(squares.to_vec()), vec![0, 1, 4, 9]);
}

#[test]
fn test_for_each_is_lazy() {
    let visited = Cell::new(0);
    let pipeline = range(0, 3).unwrap().for_each(|_| {
        visited.set(visited.get() + 1);
        ready(())
    });
    assert_eq!(visited.get(), 0);
    assert_eq!(block_on(pipeline.count()), 3);
    assert_eq!(visited.get(), 3);
}

#[test]
fn test_distinct_hashed_matches_distinct() {
    let letters = from_enumerable(pullseq::chars("abracadabra"));
    let scanned = block_on((&letters).distinct().to_vec());
    let hashed = block_on((&letters).distinct_hashed().to_vec());
    assert_eq!(scanned, vec!['a', 'b', 'r', 'c', 'd']);
    assert_eq!(hashed, scanned);
}

#[test]
fn test_intersect_by_with_suspending_key() {
    let people = from_vec(vec![("ann", 31), ("bob", 42), ("cid", 31)]);
    let ages = from_vec(vec![("x", 31)]);
    let key = |person: &(&str, i32)| {
        let age = person.1;
        async move { age }
    };
    let matched = people.intersect_by(ages, key);
    assert_eq!(block_on(matched.to_vec()), vec![("ann", 31)]);
}
