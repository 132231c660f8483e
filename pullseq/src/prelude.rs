//! Brings the sequence traits and default contracts into scope.

pub use crate::{Enumerable, EnumerableExt, Reduce};
pub use pullseq_compare::{
    Comparer, DefaultEquality, DefaultOrder, EqualityComparer, Identity, KeySelector,
};
