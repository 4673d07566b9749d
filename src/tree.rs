//! An owned binary tree. This is the representation the [`Set`][crate::set::Set] is built on:
//! it knows nothing about ordering and only supports moving a node apart into its label and
//! children ([`BinaryTree::decompose`]) and putting one back together
//! ([`BinaryTree::recompose`]).
//!
//! # Examples
//!
//! ```
//! use bst_set::tree::BinaryTree;
//!
//! let mut tree = BinaryTree::new();
//! tree.recompose('b', BinaryTree::leaf('a'), BinaryTree::new());
//! assert_eq!(tree.len(), 2);
//! assert_eq!(tree.to_string(), "b(a(()())())");
//!
//! // Taking the tree apart leaves it empty and hands us the pieces.
//! let (label, left, right) = tree.decompose().unwrap();
//! assert!(tree.is_empty());
//! assert_eq!((label, left.len(), right.len()), ('b', 1, 0));
//! ```

use std::fmt;
use std::mem;

use crate::iter::Iter;

/// A binary tree: either empty, or a label with exactly two children (which are both
/// `BinaryTree`s, possibly empty).
///
/// Every tree value keeps a count of the labels it holds, so [`len`][BinaryTree::len] is `O(1)`.
///
/// Cloning, formatting, and dropping walk the tree with an explicit stack, so they work on trees
/// of any height.
pub struct BinaryTree<T> {
    root: Option<Box<Node<T>>>,
    len: usize,
}

struct Node<T> {
    label: T,
    left: BinaryTree<T>,
    right: BinaryTree<T>,
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for BinaryTree<T> {
    // Dropping the boxes recursively would use one stack frame per level, which a degenerate
    // tree (e.g. built from sorted input) turns into a stack overflow.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.root.take());
            stack.extend(node.right.root.take());
        }
    }
}

impl<T> Clone for BinaryTree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        enum Step<'a, T> {
            Copy(&'a BinaryTree<T>),
            Join(&'a T),
        }

        // Each subtree is copied before its parent is joined, so when a `Join` runs the two
        // copies on top of `built` are its left and right children.
        let mut steps = vec![Step::Copy(self)];
        let mut built: Vec<Self> = Vec::new();
        while let Some(step) = steps.pop() {
            match step {
                Step::Copy(tree) => match tree.parts() {
                    None => built.push(Self::new()),
                    Some((label, left, right)) => {
                        steps.push(Step::Join(label));
                        steps.push(Step::Copy(right));
                        steps.push(Step::Copy(left));
                    }
                },
                Step::Join(label) => {
                    let right = built.pop().expect("right child copied before its parent");
                    let left = built.pop().expect("left child copied before its parent");
                    let mut tree = Self::new();
                    tree.recompose(label.clone(), left, right);
                    built.push(tree);
                }
            }
        }

        built.pop().expect("the root is always copied")
    }
}

/// Lists the labels in order, e.g. `BinaryTree[1, 2, 5]`.
impl<T> fmt::Debug for BinaryTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BinaryTree")?;
        f.debug_list().entries(Iter::new(self)).finish()
    }
}

impl<T> BinaryTree<T> {
    /// Generates a new, empty `BinaryTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Generates a tree holding just `label`, with two empty children.
    pub fn leaf(label: T) -> Self {
        let mut tree = Self::new();
        tree.recompose(label, Self::new(), Self::new());
        tree
    }

    /// Returns `true` if the tree has no labels.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of labels in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Gets the height of this tree: the number of nodes on the longest path from the root down
    /// to a leaf. An empty tree has a height of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::tree::BinaryTree;
    ///
    /// let mut tree = BinaryTree::new();
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.recompose(2, BinaryTree::new(), BinaryTree::leaf(3));
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> usize {
        let mut tallest = 0;
        let mut stack: Vec<(&Node<T>, usize)> = self.root.iter().map(|n| (&**n, 1)).collect();
        while let Some((node, depth)) = stack.pop() {
            tallest = tallest.max(depth);
            stack.extend(node.left.root.iter().map(|n| (&**n, depth + 1)));
            stack.extend(node.right.root.iter().map(|n| (&**n, depth + 1)));
        }
        tallest
    }

    /// Borrows the label at the root of the tree, if there is one.
    pub fn root(&self) -> Option<&T> {
        self.root.as_ref().map(|n| &n.label)
    }

    /// Borrows the root's label and both of its children without taking the tree apart.
    pub(crate) fn parts(&self) -> Option<(&T, &Self, &Self)> {
        self.root.as_ref().map(|n| (&n.label, &n.left, &n.right))
    }

    /// Takes the root node apart, returning its label and both children. Afterwards this tree is
    /// empty and the caller owns the pieces until it hands them back with
    /// [`recompose`][BinaryTree::recompose] (or drops them).
    ///
    /// Returns `None`, leaving the tree untouched, if the tree is empty.
    pub fn decompose(&mut self) -> Option<(T, Self, Self)> {
        let node = self.root.take()?;
        self.len = 0;

        let Node { label, left, right } = *node;
        Some((label, left, right))
    }

    /// Rebuilds this tree as a node with the given label and children, consuming the children.
    ///
    /// # Panics
    ///
    /// When this tree is not empty. A tree is only ever recomposed after it was decomposed (or
    /// when it never held anything); overwriting live labels would silently drop them.
    pub fn recompose(&mut self, label: T, left: Self, right: Self) {
        assert!(self.is_empty(), "Cannot recompose a non-empty tree.");

        self.len = left.len + right.len + 1;
        self.root = Some(Box::new(Node { label, left, right }));
    }

    /// Makes this tree take over `source`'s content, leaving `source` empty. Anything this tree
    /// held before is dropped.
    pub fn adopt(&mut self, source: &mut Self) {
        *self = mem::take(source);
    }
}

/// Renders the tree in prefix form: an empty tree is `()` and a node is its label followed by
/// its two children in parentheses.
impl<T> fmt::Display for BinaryTree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        enum Step<'a, T> {
            Write(&'a BinaryTree<T>),
            Close,
        }

        let mut steps = vec![Step::Write(self)];
        while let Some(step) = steps.pop() {
            match step {
                Step::Write(tree) => match tree.parts() {
                    None => f.write_str("()")?,
                    Some((label, left, right)) => {
                        write!(f, "{}(", label)?;
                        steps.push(Step::Close);
                        steps.push(Step::Write(right));
                        steps.push(Step::Write(left));
                    }
                },
                Step::Close => f.write_str(")")?,
            }
        }
        Ok(())
    }
}
