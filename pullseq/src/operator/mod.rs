//! The operator decorators and their cursors.
//!
//! Every decorator owns exactly one upstream sequence plus its own
//! parameters. Cursors borrow the decorator's parameters and own the
//! upstream cursor and any per-traversal state.

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

pub use attach::{Attach, AttachCursor, Side};
pub use chunk::{Chunk, ChunkCursor};
pub use concat::Concat;
pub use default_if_empty::{DefaultIfEmpty, DefaultIfEmptyCursor};
pub use filter::{Filter, FilterCursor};
pub use map::{ForEach, Map, MapCursor};
pub use of_type::{OfKind, OfKindCursor, OfType, OfTypeCursor};
pub use reverse::{Reverse, ReverseCursor};
pub use select_many::{SelectMany, SelectManyCursor};
pub use set::{
    Distinct, DistinctHashed, DistinctHashedCursor, Except, Intersect, SetCursor, Union,
};
pub use skip::{Skip, SkipLast, SkipLastCursor};
pub use take::{Take, TakeCursor, TakeLast, TakeLastCursor};
pub use zip::{Zip, Zip3, Zip3Cursor, ZipCursor};
