//! Per-traversal working state shared by the synchronous and the
//! suspending operator families.
//!
//! Each cursor owns its own instance; nothing here outlives a traversal.
//! The state machines never call comparers or key selectors themselves
//! (apart from the immediate scan helper), so the suspending world can
//! drive them with awaited results.

mod seen;
mod window;

pub use seen::{Admit, SeenSet};
pub use window::{Batch, DelayWindow, TailWindow};

/// Normalizes a caller supplied count: negative counts behave as zero.
#[inline]
pub fn clamp_count(count: isize) -> usize {
    usize::try_from(count).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_count() {
        assert_eq!(clamp_count(-5), 0);
        assert_eq!(clamp_count(0), 0);
        assert_eq!(clamp_count(3), 3);
    }
}
