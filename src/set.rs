//! An ordered set backed by an unbalanced Binary Search Tree.
//!
//! # Examples
//!
//! ```
//! use bst_set::{Set, SetError};
//!
//! let mut set = Set::new();
//!
//! // Nothing in here yet.
//! assert!(!set.contains(&1));
//!
//! set.add(1).unwrap();
//! assert!(set.contains(&1));
//!
//! // Adding the same element again is an error and hands it back.
//! assert_eq!(set.add(1), Err(SetError::Duplicate(1)));
//!
//! // Removing an element returns it.
//! assert_eq!(set.remove(&1), Ok(1));
//! assert_eq!(set.remove(&1), Err(SetError::NotFound));
//! ```

use std::borrow::Borrow;
use std::fmt;

use crate::bst;
use crate::error::SetError;
use crate::iter::{IntoIter, Iter};
use crate::tree::BinaryTree;

/// A set of distinct, totally ordered elements. The elements are the labels of a
/// [`BinaryTree`] kept in BST order: everything in a node's left subtree orders before it and
/// everything in its right subtree orders after it.
///
/// The tree is never rebalanced. Adding elements in sorted order builds a tree as tall as the
/// set is large, and `add`, `remove`, and `remove_any` recurse once per level.
///
/// The behavior of the set is unspecified if an element's ordering relative to the others
/// changes while it is in the set.
#[derive(Clone)]
pub struct Set<T> {
    tree: BinaryTree<T>,
}

impl<T> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Set<T> {
    /// Generates a new, empty `Set`.
    pub fn new() -> Self {
        Self {
            tree: BinaryTree::new(),
        }
    }

    /// The number of elements in the set.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the set has no elements.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// The height of the underlying tree. This is the number of elements compared on the
    /// longest search path through the set.
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Borrows the tree representing this set.
    pub fn tree(&self) -> &BinaryTree<T> {
        &self.tree
    }

    /// Removes every element from the set.
    pub fn clear(&mut self) {
        self.tree = BinaryTree::new();
        tracing::trace!("cleared set");
    }

    /// Moves every element of `source` into this set, leaving `source` empty. Whatever this set
    /// held before is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::Set;
    ///
    /// let mut a = Set::new();
    /// let mut b = Set::new();
    /// for x in [1, 2, 3] {
    ///     a.add(x).unwrap();
    /// }
    /// for x in [4, 5] {
    ///     b.add(x).unwrap();
    /// }
    ///
    /// a.transfer_from(&mut b);
    ///
    /// assert_eq!(a.iter().copied().collect::<Vec<_>>(), vec![4, 5]);
    /// assert!(b.is_empty());
    /// ```
    ///
    /// A set can't be transferred into itself:
    ///
    /// ```compile_fail
    /// use bst_set::Set;
    ///
    /// let mut set = Set::<i32>::new();
    /// set.transfer_from(&mut set);
    /// ```
    pub fn transfer_from(&mut self, source: &mut Self) {
        self.tree.adopt(&mut source.tree);
        tracing::trace!(len = self.len(), "transferred set");
    }

    /// Removes some element from the set and returns it.
    ///
    /// Which element is unspecified beyond it being one that was in the set. (It currently
    /// happens to be the smallest.)
    ///
    /// # Errors
    ///
    /// [`SetError::Empty`] if the set has no elements.
    pub fn remove_any(&mut self) -> Result<T, SetError<T>> {
        match bst::remove_any(&mut self.tree) {
            Some(x) => {
                tracing::trace!(len = self.len(), "removed any element");
                Ok(x)
            }
            None => {
                tracing::debug!("rejected remove_any on an empty set");
                Err(SetError::Empty)
            }
        }
    }

    /// Gets an iterator that visits the elements in ascending order. Each call starts a fresh
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::Set;
    ///
    /// let mut set = Set::new();
    /// for x in [5, 2, 8, 1] {
    ///     set.add(x).unwrap();
    /// }
    ///
    /// let mut it = set.iter();
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), Some(&5));
    /// assert_eq!(it.next(), Some(&8));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.tree)
    }
}

impl<T> Set<T>
where
    T: Ord,
{
    /// Adds `x` to the set.
    ///
    /// # Errors
    ///
    /// [`SetError::Duplicate`], carrying `x`, if the set already contains an equal element. The
    /// set is unchanged.
    pub fn add(&mut self, x: T) -> Result<(), SetError<T>> {
        bst::insert(&mut self.tree, x).map_err(|e| {
            tracing::debug!(len = self.len(), "rejected adding a duplicate element");
            e
        })?;

        tracing::trace!(len = self.len(), "added element");
        Ok(())
    }

    /// Removes the element equal to `x` from the set and returns it.
    ///
    /// # Errors
    ///
    /// [`SetError::NotFound`] if no element is equal to `x`. The set is unchanged.
    pub fn remove<Q>(&mut self, x: &Q) -> Result<T, SetError<T>>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match bst::remove_matching(&mut self.tree, x) {
            Some(removed) => {
                tracing::trace!(len = self.len(), "removed element");
                Ok(removed)
            }
            None => {
                tracing::debug!(len = self.len(), "rejected removing a missing element");
                Err(SetError::NotFound)
            }
        }
    }

    /// Returns `true` if the set contains an element equal to `x`.
    pub fn contains<Q>(&self, x: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        bst::find(&self.tree, x).is_some()
    }

    /// Gets the element equal to `x`, if there is one.
    pub fn get<Q>(&self, x: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        bst::find(&self.tree, x)
    }
}

/// Two sets are equal when they have the same elements, however their trees are shaped.
impl<T> PartialEq for Set<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> Eq for Set<T> where T: Eq {}

impl<T> fmt::Debug for Set<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Gets an iterator that takes the set apart, yielding its elements in ascending order.
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.tree)
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
