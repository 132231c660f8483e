//! Lazy query operators over pull-based sequences.
//!
//! A pipeline is built by decorating a source repeatedly; each builder
//! method returns a new decorator that owns the previous one. Nothing is
//! evaluated until a cursor is requested and pulled, either directly or by
//! one of the terminal reducers.
//!
//! ```
//! use pullseq::prelude::*;
//!
//! let numbers = pullseq::from_vec(vec![1, 2, 3, 4, 5, 6]);
//! let pipeline = numbers
//!     .filter(|n, _| n % 2 == 0)
//!     .map(|n, _| n * 10)
//!     .skip(1);
//! assert_eq!(pipeline.to_vec(), vec![40, 60]);
//! // traversing again starts from scratch
//! assert_eq!(pipeline.to_vec(), vec![40, 60]);
//! ```

pub mod buffer;
mod enumerable;
pub mod error;
pub mod operator;
pub mod prelude;
mod reduce;
mod source;
mod value;

pub use enumerable::{Enumerable, EnumerableExt};
pub use error::{Error, Result};
pub use reduce::Reduce;
pub use source::{
    chars, empty, from_fn, from_iter_once, from_slice, from_vec, range, repeat, Chars, Empty,
    FromFn, Items, Once, Range, Repeat, Slice,
};
pub use value::{Kind, TypeTest, Value};

pub use pullseq_compare as compare;
