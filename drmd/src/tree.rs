// Copyright 2018 Google LLC
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! A Vec-based container for a tree structure.

use std::collections::TryReserveError;
use std::num::NonZeroUsize;

/// Handle to a node of a [`Tree`].
///
/// Handles are never reused within one tree. Where a node may be missing,
/// `Option<TreeIndex>` is used; the niche keeps it pointer sized.
#[derive(Debug, Eq, PartialEq, Copy, Clone, PartialOrd, Ord, Hash)]
pub struct TreeIndex(NonZeroUsize);

impl TreeIndex {
    pub fn get(self) -> usize {
        self.0.get()
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Node<T> {
    pub child: Option<TreeIndex>,
    pub last_child: Option<TreeIndex>,
    pub next: Option<TreeIndex>,
    pub item: T,
}

/// An append-only tree. Children are kept as a linked list with a tail
/// pointer so a child can be added to any node in constant time.
#[derive(Clone)]
pub(crate) struct Tree<T> {
    nodes: Vec<Node<T>>,
}

impl<T: Default> Tree<T> {
    // Indices start at one, so we place a dummy value at index zero.
    pub fn with_capacity(cap: usize) -> Result<Tree<T>, TryReserveError> {
        let mut nodes = Vec::new();
        nodes.try_reserve(cap.max(1))?;
        nodes.push(Node {
            child: None,
            last_child: None,
            next: None,
            item: T::default(),
        });
        Ok(Tree { nodes })
    }
}

impl<T> Tree<T> {
    /// Create an isolated node.
    pub fn create_node(&mut self, item: T) -> Result<TreeIndex, TryReserveError> {
        self.nodes.try_reserve(1)?;
        // the dummy at zero means the new index is never zero
        let ix = TreeIndex(NonZeroUsize::MIN.saturating_add(self.nodes.len() - 1));
        self.nodes.push(Node {
            child: None,
            last_child: None,
            next: None,
            item,
        });
        Ok(ix)
    }

    /// Create a node and make it the last child of `parent`.
    pub fn append_child(&mut self, parent: TreeIndex, item: T) -> Result<TreeIndex, TryReserveError> {
        let ix = self.create_node(item)?;
        match self[parent].last_child {
            Some(last) => self[last].next = Some(ix),
            None => self[parent].child = Some(ix),
        }
        self[parent].last_child = Some(ix);
        Ok(ix)
    }

    pub fn children(&self, parent: TreeIndex) -> Children<'_, T> {
        Children {
            tree: self,
            cur: self[parent].child,
        }
    }

    /// Number of nodes, not counting the dummy.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Returns true when there are no nodes in the tree, false otherwise.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }
}

/// Iterator over the children of a node, in insertion order.
#[derive(Debug)]
pub(crate) struct Children<'t, T> {
    tree: &'t Tree<T>,
    cur: Option<TreeIndex>,
}

impl<'t, T> Iterator for Children<'t, T> {
    type Item = TreeIndex;

    fn next(&mut self) -> Option<TreeIndex> {
        let ix = self.cur?;
        self.cur = self.tree[ix].next;
        Some(ix)
    }
}

impl<T> std::fmt::Debug for Tree<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "Empty tree");
        }
        // explicit stack, so long sibling chains don't recurse
        let mut stack = vec![(TreeIndex(NonZeroUsize::MIN), 0)];
        while let Some((cur, indent)) = stack.pop() {
            for _ in 0..indent {
                write!(f, "  ")?;
            }
            writeln!(f, "{:?}", &self[cur].item)?;
            if let Some(next) = self[cur].next {
                stack.push((next, indent));
            }
            if let Some(child) = self[cur].child {
                stack.push((child, indent + 1));
            }
        }
        Ok(())
    }
}

impl<T> std::ops::Index<TreeIndex> for Tree<T> {
    type Output = Node<T>;

    fn index(&self, ix: TreeIndex) -> &Self::Output {
        &self.nodes[ix.get()]
    }
}

impl<T> std::ops::IndexMut<TreeIndex> for Tree<T> {
    fn index_mut(&mut self, ix: TreeIndex) -> &mut Node<T> {
        &mut self.nodes[ix.get()]
    }
}
