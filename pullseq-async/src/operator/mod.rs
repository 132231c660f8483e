//! The suspending operators. Each one is a lazy decorator that owns its
//! upstream sequence and builds a fresh stream per traversal.

mod attach;
mod chunk;
mod concat;
mod default_if_empty;
mod filter;
mod map;
mod of_type;
mod reverse;
mod select_many;
mod set;
mod skip;
mod take;
mod zip;

pub use attach::Attach;
pub use chunk::Chunk;
pub use concat::Concat;
pub use default_if_empty::DefaultIfEmpty;
pub use filter::Filter;
pub use map::{ForEach, Map};
pub use of_type::{OfKind, OfType};
pub use reverse::Reverse;
pub use select_many::SelectMany;
pub use set::{Distinct, DistinctHashed, Except, Intersect, Union};
pub use skip::{Skip, SkipLast};
pub use take::{Take, TakeLast};
pub use zip::{Zip, Zip3};
