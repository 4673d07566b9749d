//! This crate exposes an ordered set built on an (unbalanced) Binary Search Tree.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a binary tree whose labels are kept in order. Every
//! node of a binary tree has a label and two children, each of which is itself
//! a (possibly empty) binary tree. The most important invariants of a BST are:
//!
//! 1. For every node in a BST, all the labels in its left subtree order before
//!    its own label.
//! 2. For every node in a BST, all the labels in its right subtree order after
//!    its own label.
//!
//! > Note that together these mean no label appears twice, which is exactly
//! > what a set needs.
//!
//! Searching for a label only has to look down one path, so it takes
//! `O(height)` (where `height` is the longest path from the root to a leaf).
//! This crate does no rebalancing, so adding elements in sorted order gives a
//! tree whose height is the number of elements. BSTs also naturally support
//! sorted iteration by visiting the left subtree, then the subtree root, then
//! the right subtree.
//!
//! ## Layout
//!
//! - [`tree`] is the plain binary tree: take a node apart, put it back together.
//! - [`bst`] holds the recursive search, insert, and delete functions that keep
//!   a tree in BST order.
//! - [`Set`] wraps one tree and exposes the set operations.
//!
//! # Examples
//!
//! ```
//! use bst_set::Set;
//!
//! let mut set = Set::new();
//! for x in [5, 2, 8, 1] {
//!     set.add(x).unwrap();
//! }
//!
//! assert_eq!(set.len(), 4);
//! assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1, 2, 5, 8]);
//!
//! assert_eq!(set.remove(&5), Ok(5));
//! assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1, 2, 8]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod bst;
mod error;
pub mod iter;
pub mod set;
pub mod tree;

pub use error::SetError;
pub use set::Set;
