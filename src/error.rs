// SPDX-FileCopyrightText: The im-maptree authors
// SPDX-License-Identifier: MPL-2.0

use thiserror::Error;

/// Violated precondition of a tree operation.
///
/// All preconditions are checked before the tree is modified. An operation
/// that fails leaves the tree exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("key not found")]
    KeyNotFound,
    #[error("parent not found")]
    ParentNotFound,
    #[error("duplicate key")]
    DuplicateKey,
    #[error("index {index} out of range for {len} children")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("range {start}..{end} out of bounds for {len} children")]
    RangeOutOfBounds { start: usize, end: usize, len: usize },
    #[error("subtree is not empty")]
    NonEmptySubtree,
    #[error("invalid root")]
    InvalidRoot,
    #[error("no node at depth {depth} of path")]
    InvalidPath { depth: usize },
}

pub type TreeResult<T> = Result<T, TreeError>;
