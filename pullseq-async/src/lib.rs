//! Lazy query operators over suspending, pull-based sequences.
//!
//! This is the cooperative counterpart of [`pullseq`]: advancing a cursor
//! is a suspension point, and so is every callback the operators invoke.
//! Callbacks return futures; wrap an immediate value with
//! [`std::future::ready`] and an immediate comparer with
//! [`Immediate`](pullseq_compare::Immediate).
//!
//! The windowing and seen-set logic is the same as in the immediate world;
//! only the way elements are pulled differs.
//!
//! ```
//! use std::future::ready;
//!
//! use futures::executor::block_on;
//! use pullseq_async::prelude::*;
//!
//! let numbers = pullseq_async::from_vec(vec![1, 2, 3, 4, 5, 6]);
//! let pipeline = numbers
//!     .filter(|n, _| ready(n % 2 == 0))
//!     .map(|n, _| async move { n * 10 })
//!     .skip(1);
//! assert_eq!(block_on(pipeline.to_vec()), vec![40, 60]);
//! ```

mod enumerable;
pub mod operator;
pub mod prelude;
mod reduce;
mod source;

pub use enumerable::{AsyncEnumerable, AsyncEnumerableExt, InnerItem};
pub use reduce::AsyncReduce;
pub use source::{
    empty, from_enumerable, from_stream_fn, from_stream_once, from_vec, range, Empty,
    FromEnumerable, FromStreamFn, StreamOnce,
};

pub use pullseq::{Error, Kind, Result, TypeTest, Value};
pub use pullseq_compare as compare;
