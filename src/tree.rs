//! An owned, unbalanced BST. Every `Node` owns its children outright and keeps no
//! pointer back to its parent, so anything that needs a node's ancestry (successor and
//! predecessor) walks down from the root again to recover it.
//!
//! Nothing here recurses. Insertion and search loop down a single path, the traversals
//! keep an explicit stack, and dropping the tree unlinks nodes one at a time. Without
//! balancing the height can equal the number of keys, so recursion would put the call
//! stack at the mercy of the insertion order.
//!
//! # Examples
//!
//! ```
//! use bst_commands::tree::{Neighbor, Tree};
//!
//! let mut tree = Tree::new();
//! for key in [5, 3, 8] {
//!     tree.insert(key);
//! }
//!
//! assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [3, 5, 8]);
//! assert_eq!(tree.preorder().copied().collect::<Vec<_>>(), [5, 3, 8]);
//! assert_eq!(tree.postorder().copied().collect::<Vec<_>>(), [3, 8, 5]);
//!
//! assert_eq!(tree.successor(&5), Neighbor::Key(&8));
//! assert_eq!(tree.predecessor(&5), Neighbor::Key(&3));
//! assert_eq!(tree.successor(&8), Neighbor::None);
//! assert_eq!(tree.successor(&4), Neighbor::NotPresent);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::{FromIterator, FusedIterator};

type Link<K> = Option<Box<Node<K>>>;

/// A Binary Search Tree of unique keys. Keys are only ever added; inserting a key that
/// is already present leaves the tree untouched.
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        // Detach children before each node goes out of scope so `Box`'s own drop never
        // has to descend.
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inorder()).finish()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// How many keys are stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no keys at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root `Node`, if any.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Number of nodes on the longest path from the root to a leaf. An empty tree has a
    /// height of 0.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<K>, usize)> = self.root().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|n| (n, depth + 1)));
            stack.extend(node.right().map(|n| (n, depth + 1)));
        }
        height
    }

    /// Adds `key` to the tree. Returns `false`, and changes nothing, if the key was
    /// already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_commands::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            match key.cmp(&node.key) {
                Ordering::Less => link = &mut node.left,
                Ordering::Equal => return false,
                Ordering::Greater => link = &mut node.right,
            }
        }
        *link = Some(Node::new_boxed(key));
        self.len += 1;
        true
    }

    /// Finds the `Node` holding `key`, descending from the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_commands::tree::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.search(&3).map(|n| *n.key()), Some(3));
    /// assert!(tree.search(&42).is_none());
    /// ```
    pub fn search(&self, key: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            match key.cmp(&node.key) {
                Ordering::Less => current = node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => current = node.right(),
            }
        }
        None
    }

    /// Whether `key` has been inserted.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.search(key).is_some()
    }

    /// The smallest key, or `None` for an empty tree.
    pub fn minimum(&self) -> Option<&K> {
        self.root().map(|n| &n.leftmost().key)
    }

    /// The largest key, or `None` for an empty tree.
    pub fn maximum(&self) -> Option<&K> {
        self.root().map(|n| &n.rightmost().key)
    }

    /// Keys in ascending order (left subtree, node, right subtree).
    pub fn inorder(&self) -> Inorder<'_, K> {
        Inorder::new(self.root())
    }

    /// Keys with every node before its subtrees (node, left subtree, right subtree).
    pub fn preorder(&self) -> Preorder<'_, K> {
        Preorder {
            stack: self.root().into_iter().collect(),
        }
    }

    /// Keys with every node after its subtrees (left subtree, right subtree, node).
    pub fn postorder(&self) -> Postorder<'_, K> {
        Postorder {
            stack: self.root().map(|n| (n, false)).into_iter().collect(),
        }
    }

    /// The next larger key after `key`.
    ///
    /// If `key`'s node has a right subtree the answer is that subtree's minimum.
    /// Otherwise it is the lowest ancestor that `key` sits to the left of, which is found
    /// by searching from the root a second time and remembering the last node the path
    /// turned left at.
    pub fn successor(&self, key: &K) -> Neighbor<&K>
    where
        K: Ord,
    {
        let target = match self.search(key) {
            Some(target) => target,
            None => return Neighbor::NotPresent,
        };
        if let Some(right) = target.right() {
            return Neighbor::Key(&right.leftmost().key);
        }

        let mut candidate = None;
        let mut ancestor = self.root();
        while let Some(node) = ancestor {
            match target.key.cmp(&node.key) {
                Ordering::Less => {
                    candidate = Some(&node.key);
                    ancestor = node.left();
                }
                Ordering::Equal => break,
                Ordering::Greater => ancestor = node.right(),
            }
        }
        candidate.map_or(Neighbor::None, Neighbor::Key)
    }

    /// The next smaller key before `key`. Mirrors [`Tree::successor`]: the maximum of the
    /// left subtree if there is one, otherwise the last ancestor the path from the root
    /// turned right at.
    pub fn predecessor(&self, key: &K) -> Neighbor<&K>
    where
        K: Ord,
    {
        let target = match self.search(key) {
            Some(target) => target,
            None => return Neighbor::NotPresent,
        };
        if let Some(left) = target.left() {
            return Neighbor::Key(&left.rightmost().key);
        }

        let mut candidate = None;
        let mut ancestor = self.root();
        while let Some(node) = ancestor {
            match target.key.cmp(&node.key) {
                Ordering::Less => ancestor = node.left(),
                Ordering::Equal => break,
                Ordering::Greater => {
                    candidate = Some(&node.key);
                    ancestor = node.right();
                }
            }
        }
        candidate.map_or(Neighbor::None, Neighbor::Key)
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

/// A single key in a [`Tree`] along with the subtrees hanging off it.
pub struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of the subtree holding smaller keys.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the subtree holding larger keys.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    fn leftmost(&self) -> &Self {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        node
    }

    fn rightmost(&self) -> &Self {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        node
    }
}

/// The answer to a successor or predecessor query.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Neighbor<K> {
    /// The queried key isn't in the tree.
    NotPresent,
    /// The queried key is in the tree but is already the largest (successor) or
    /// smallest (predecessor) one.
    None,
    /// The neighboring key.
    Key(K),
}

impl<K> Neighbor<&K> {
    /// Copies the borrowed key out, so the tree can be mutated again.
    pub fn copied(self) -> Neighbor<K>
    where
        K: Copy,
    {
        match self {
            Self::NotPresent => Neighbor::NotPresent,
            Self::None => Neighbor::None,
            Self::Key(k) => Neighbor::Key(*k),
        }
    }
}

/// Ascending iterator returned by [`Tree::inorder`].
pub struct Inorder<'a, K> {
    /// Nodes whose left subtree has been pushed but which haven't been yielded yet.
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Inorder<'a, K> {
    fn new(root: Option<&'a Node<K>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, K> Iterator for Inorder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(&node.key)
    }
}

impl<K> FusedIterator for Inorder<'_, K> {}

/// Iterator returned by [`Tree::preorder`].
pub struct Preorder<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Iterator for Preorder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right first so the left subtree comes off the stack first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(&node.key)
    }
}

impl<K> FusedIterator for Preorder<'_, K> {}

/// Iterator returned by [`Tree::postorder`].
pub struct Postorder<'a, K> {
    /// Each node is pushed twice: once unexpanded, then again (flag set) beneath its
    /// children so it's only yielded once both subtrees are done.
    stack: Vec<(&'a Node<K>, bool)>,
}

impl<'a, K> Iterator for Postorder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(&node.key);
            }
            self.stack.push((node, true));
            self.stack.extend(node.right().map(|n| (n, false)));
            self.stack.extend(node.left().map(|n| (n, false)));
        }
    }
}

impl<K> FusedIterator for Postorder<'_, K> {}
