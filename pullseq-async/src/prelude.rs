//! Brings the sequence traits and default contracts into scope.

pub use crate::{AsyncEnumerable, AsyncEnumerableExt, AsyncReduce};
pub use pullseq_compare::{
    AsyncComparer, AsyncEqualityComparer, AsyncKeySelector, DefaultEquality, DefaultOrder,
    Identity, Immediate,
};
