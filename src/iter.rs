//! In-order iteration over a [`BinaryTree`]. Because a [`Set`][crate::Set]'s tree is kept in
//! BST order, visiting the left subtree, then the root, then the right subtree yields its
//! elements in ascending order.
//!
//! Both iterators keep an explicit stack of the nodes still to visit instead of recursing, so
//! they work on trees of any height.

use std::iter::FusedIterator;

use crate::tree::BinaryTree;

/// An iterator over borrowed labels in ascending order. Created by
/// [`Set::iter`][crate::Set::iter].
pub struct Iter<'a, T> {
    /// Labels whose left subtree has been (or is being) visited, paired with their right
    /// subtree.
    stack: Vec<(&'a T, &'a BinaryTree<T>)>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(tree: &'a BinaryTree<T>) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: tree.len(),
        };
        iter.push_left_spine(tree);
        iter
    }

    fn push_left_spine(&mut self, mut tree: &'a BinaryTree<T>) {
        while let Some((label, left, right)) = tree.parts() {
            self.stack.push((label, right));
            tree = left;
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let (label, right) = self.stack.pop()?;
        self.push_left_spine(right);
        self.remaining -= 1;
        Some(label)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// An iterator that takes a tree apart and yields its labels in ascending order. Created by
/// [`Set::into_iter`][crate::Set::into_iter].
pub struct IntoIter<T> {
    stack: Vec<(T, BinaryTree<T>)>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(tree: BinaryTree<T>) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: tree.len(),
        };
        iter.push_left_spine(tree);
        iter
    }

    fn push_left_spine(&mut self, mut tree: BinaryTree<T>) {
        while let Some((label, left, right)) = tree.decompose() {
            self.stack.push((label, right));
            tree = left;
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let (label, right) = self.stack.pop()?;
        self.push_left_spine(right);
        self.remaining -= 1;
        Some(label)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
