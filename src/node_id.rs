// SPDX-FileCopyrightText: The im-maptree authors
// SPDX-License-Identifier: MPL-2.0

use std::{
    num::NonZeroUsize,
    sync::atomic::{AtomicUsize, Ordering},
};

/// Counter of all identifiers minted so far.
static MINTED_COUNT: AtomicUsize = AtomicUsize::new(0);

/// Key of the nodes of a [`RefMapTree`](crate::RefMapTree).
///
/// Minted in increasing order and never reused within a process, so keys
/// of different trees never collide. Sorting identifiers restores the
/// order in which they were minted. Not stable across restarts.
///
/// ```
/// # use im_maptree::NodeId;
/// let minted = [NodeId::new(), NodeId::new(), NodeId::new()];
/// let mut sorted = minted;
/// sorted.reverse();
/// sorted.sort_unstable();
/// assert_eq!(minted, sorted);
/// assert!(minted[0] < minted[2]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub struct NodeId(NonZeroUsize);

impl NodeId {
    /// Mint the next identifier.
    ///
    /// After [`usize::MAX`] identifiers the counter wraps around and both
    /// uniqueness and ordering are lost.
    #[allow(clippy::new_without_default)] // Prevent unintended generation of new identifiers
    pub fn new() -> Self {
        loop {
            // Relaxed: the counter is not used to synchronize other memory.
            let minted = MINTED_COUNT
                .fetch_add(1, Ordering::Relaxed)
                .wrapping_add(1);
            if let Some(value) = NonZeroUsize::new(minted) {
                return Self(value);
            }
            // Skip zero after a wrap-around.
        }
    }
}
