//! Adapters turning raw producers into sequences.

use std::cell::RefCell;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::enumerable::Enumerable;
use crate::error::{Error, Result};

/// An owned, re-iterable list of elements. Cloning is cheap; clones share
/// the elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Items<T> {
    items: Rc<[T]>,
}

impl<T> Items<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> From<Vec<T>> for Items<T> {
    fn from(items: Vec<T>) -> Self {
        Items {
            items: items.into(),
        }
    }
}

impl<T> FromIterator<T> for Items<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Items {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Clone> Enumerable for Items<T> {
    type Item = T;
    type Cursor<'a>
        = std::iter::Cloned<std::slice::Iter<'a, T>>
    where
        Self: 'a;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        self.items.iter().cloned()
    }
}

/// Wrap a vector.
pub fn from_vec<T: Clone>(items: Vec<T>) -> Items<T> {
    items.into()
}

/// A re-iterable view over borrowed elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice<'s, T> {
    items: &'s [T],
}

impl<T: Clone> Enumerable for Slice<'_, T> {
    type Item = T;
    type Cursor<'a>
        = std::iter::Cloned<std::slice::Iter<'a, T>>
    where
        Self: 'a;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        self.items.iter().cloned()
    }
}

/// Borrow a slice.
pub fn from_slice<T: Clone>(items: &[T]) -> Slice<'_, T> {
    Slice { items }
}

/// The characters of a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chars<'s> {
    text: &'s str,
}

impl Enumerable for Chars<'_> {
    type Item = char;
    type Cursor<'a>
        = std::str::Chars<'a>
    where
        Self: 'a;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        self.text.chars()
    }
}

pub fn chars(text: &str) -> Chars<'_> {
    Chars { text }
}

/// `count` consecutive integers starting at `start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    values: std::ops::RangeInclusive<i64>,
}

impl Enumerable for Range {
    type Item = i64;
    type Cursor<'a> = std::ops::RangeInclusive<i64>;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        self.values.clone()
    }
}

/// Fails when the last of the `count` integers would not fit in an `i64`.
pub fn range(start: i64, count: usize) -> Result<Range> {
    if count == 0 {
        #[allow(clippy::reversed_empty_ranges)]
        return Ok(Range { values: 1..=0 });
    }
    let last = i128::from(start) + count as i128 - 1;
    let last = i64::try_from(last).map_err(|_| Error::InvalidArgument {
        name: "count",
        reason: "the range runs past the largest i64",
    })?;
    Ok(Range {
        values: start..=last,
    })
}

/// One element repeated `count` times.
#[derive(Debug, Clone, PartialEq)]
pub struct Repeat<T> {
    element: T,
    count: usize,
}

impl<T: Clone> Enumerable for Repeat<T> {
    type Item = T;
    type Cursor<'a>
        = std::iter::Take<std::iter::Repeat<T>>
    where
        Self: 'a;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        std::iter::repeat(self.element.clone()).take(self.count)
    }
}

pub fn repeat<T: Clone>(element: T, count: usize) -> Repeat<T> {
    Repeat { element, count }
}

/// The sequence without elements.
#[derive(Debug, Clone, Copy)]
pub struct Empty<T> {
    item: PhantomData<fn() -> T>,
}

impl<T> Enumerable for Empty<T> {
    type Item = T;
    type Cursor<'a>
        = std::iter::Empty<T>
    where
        Self: 'a;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        std::iter::empty()
    }
}

pub fn empty<T>() -> Empty<T> {
    Empty { item: PhantomData }
}

/// A re-iterable producer: every traversal calls the factory for a fresh
/// iterator. The iterator may be infinite.
#[derive(Debug, Clone, Copy)]
pub struct FromFn<F> {
    factory: F,
}

impl<F, I> Enumerable for FromFn<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    type Item = I::Item;
    type Cursor<'a>
        = I::IntoIter
    where
        Self: 'a;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        (self.factory)().into_iter()
    }
}

pub fn from_fn<F, I>(factory: F) -> FromFn<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    FromFn { factory }
}

/// A single-use producer. The first traversal consumes it; every later
/// traversal is empty.
#[derive(Debug)]
pub struct Once<I> {
    iter: RefCell<Option<I>>,
}

impl<I: Iterator> Enumerable for Once<I> {
    type Item = I::Item;
    type Cursor<'a>
        = std::iter::Flatten<std::option::IntoIter<I>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.iter.borrow_mut().take().into_iter().flatten()
    }
}

pub fn from_iter_once<I: IntoIterator>(iter: I) -> Once<I::IntoIter> {
    Once {
        iter: RefCell::new(Some(iter.into_iter())),
    }
}
