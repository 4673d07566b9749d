//! Binary Search Tree operations on a [`BinaryTree`]. Each function takes a node apart with
//! [`BinaryTree::decompose`], recurses into the one child the ordering points at, and puts the
//! node back together with [`BinaryTree::recompose`] on the way out. The tree is only ever
//! touched through moves, so there is never more than one owner of a subtree.
//!
//! Every function expects (and preserves) the BST property: all labels in a node's left subtree
//! order before its label and all labels in its right subtree order after it. No rebalancing is
//! done, so recursion goes as deep as the tree is tall.
//!
//! # Examples
//!
//! ```
//! use bst_set::bst;
//! use bst_set::tree::BinaryTree;
//!
//! let mut tree = BinaryTree::new();
//! for x in [5, 2, 8, 1] {
//!     bst::insert(&mut tree, x).unwrap();
//! }
//!
//! assert!(bst::contains(&mut tree, &8));
//! assert_eq!(bst::remove_matching(&mut tree, &5), Some(5));
//!
//! // 5 had two children so its successor took its place.
//! assert_eq!(tree.root(), Some(&8));
//! assert_eq!(bst::remove_smallest(&mut tree), Some(1));
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;

use crate::error::SetError;
use crate::tree::BinaryTree;

/// Returns whether `x` is a label of `tree`. The tree is taken apart during the search but
/// handed back in its original shape.
///
/// [`Set::contains`][crate::Set::contains] doesn't call this: it only has `&self`, so it runs
/// the same descent through a shared borrow instead. Both follow the same single path.
pub fn contains<T, Q>(tree: &mut BinaryTree<T>, x: &Q) -> bool
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let Some((root, mut left, mut right)) = tree.decompose() else {
        return false;
    };

    let found = match x.cmp(root.borrow()) {
        Ordering::Less => contains(&mut left, x),
        Ordering::Equal => true,
        Ordering::Greater => contains(&mut right, x),
    };

    tree.recompose(root, left, right);
    found
}

/// Finds the label of `tree` equal to `x` without taking the tree apart.
pub(crate) fn find<'a, T, Q>(mut tree: &'a BinaryTree<T>, x: &Q) -> Option<&'a T>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    while let Some((label, left, right)) = tree.parts() {
        tree = match x.cmp(label.borrow()) {
            Ordering::Less => left,
            Ordering::Equal => return Some(label),
            Ordering::Greater => right,
        };
    }
    None
}

/// Inserts `x` into `tree` as a new leaf at the position its ordering dictates.
///
/// If `tree` already has a label equal to `x` the tree is left unchanged and `x` is handed back
/// in [`SetError::Duplicate`].
pub fn insert<T>(tree: &mut BinaryTree<T>, x: T) -> Result<(), SetError<T>>
where
    T: Ord,
{
    let Some((root, mut left, mut right)) = tree.decompose() else {
        tree.recompose(x, BinaryTree::new(), BinaryTree::new());
        return Ok(());
    };

    let inserted = match x.cmp(&root) {
        Ordering::Less => insert(&mut left, x),
        Ordering::Equal => Err(SetError::Duplicate(x)),
        Ordering::Greater => insert(&mut right, x),
    };

    if cfg!(debug_assertions) {
        if let Some(left) = left.root() {
            assert!(*left < root);
        }
        if let Some(right) = right.root() {
            assert!(root < *right);
        }
    }

    tree.recompose(root, left, right);
    inserted
}

/// Removes and returns the smallest (left-most) label in `tree`, or `None` if the tree is empty.
///
/// The node holding the smallest label has no left child, so its right subtree simply moves up
/// to take its place.
pub fn remove_smallest<T>(tree: &mut BinaryTree<T>) -> Option<T> {
    let (root, mut left, mut right) = tree.decompose()?;

    if left.is_empty() {
        tree.adopt(&mut right);
        return Some(root);
    }

    let smallest = remove_smallest(&mut left);
    tree.recompose(root, left, right);
    smallest
}

/// Removes the label equal to `x` from `tree` and returns it. If there is no such label, the
/// tree is left unchanged and `None` is returned.
///
/// A node with a right child is replaced by its in-order successor (the smallest label of its
/// right subtree). Otherwise its left subtree moves up to take its place.
pub fn remove_matching<T, Q>(tree: &mut BinaryTree<T>, x: &Q) -> Option<T>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let (root, mut left, mut right) = tree.decompose()?;

    match x.cmp(root.borrow()) {
        Ordering::Less => {
            let removed = remove_matching(&mut left, x);
            tree.recompose(root, left, right);
            removed
        }
        Ordering::Equal => {
            match remove_smallest(&mut right) {
                Some(successor) => tree.recompose(successor, left, right),
                None => tree.adopt(&mut left),
            }
            Some(root)
        }
        Ordering::Greater => {
            let removed = remove_matching(&mut right, x);
            tree.recompose(root, left, right);
            removed
        }
    }
}

/// Removes some label from `tree` and returns it, or `None` if the tree is empty.
///
/// This is always the smallest label, but callers should only rely on getting back a label that
/// was in the tree and no longer is.
pub fn remove_any<T>(tree: &mut BinaryTree<T>) -> Option<T> {
    remove_smallest(tree)
}
