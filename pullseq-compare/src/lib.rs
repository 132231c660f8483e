//! Capability contracts consumed by the pullseq operators.
//!
//! Every contract comes in two flavours: an immediate one, used by the
//! synchronous pull world, and a suspending one whose operations return a
//! future, used by the cooperative world. Closures of the right shape
//! implement the contracts directly; [`Immediate`] lifts an immediate
//! contract into the suspending world.

mod equality;
mod key;
mod ordering;

pub use equality::{AsyncEqualityComparer, DefaultEquality, EqualityComparer};
pub use key::{AsyncKeySelector, Identity, KeySelector};
pub use ordering::{AsyncComparer, Comparer, DefaultOrder};

/// Adapts an immediate contract so it can be used where a suspending one
/// is required. The produced futures are always ready.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Immediate<C>(pub C);
