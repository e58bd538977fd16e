use core::cmp::Ordering;

mod map;
mod render;

pub use map::BoxwoodMap;

type Link<K> = Option<Box<BoxwoodNode<K>>>;

#[derive(Debug)]
struct BoxwoodNode<K> {
    key: K,
    height: i32,
    left: Link<K>,
    right: Link<K>,
}

impl<K> BoxwoodNode<K> {
    fn leaf(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            height: 1,
            left: None,
            right: None,
        })
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// Positive when the left subtree is taller.
    fn balance_factor(&self) -> i32 {
        height(&self.left) - height(&self.right)
    }
}

fn height<K>(link: &Link<K>) -> i32 {
    link.as_ref().map_or(0, |node| node.height)
}

/// An ordered set of unique keys, backed by an AVL tree.
///
/// Every node caches the height of its subtree; insertions and removals
/// rebalance the whole path back to the root on unwind, so the tree height
/// stays within a constant factor of `log2(len)`.
#[derive(Debug)]
pub struct Boxwood<K: Ord> {
    root: Link<K>,
    length: usize,
}

impl<K: Ord> Boxwood<K> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: None,
            length: 0,
        }
    }

    #[cfg(test)]
    fn from_parts(root: Link<K>, length: usize) -> Self {
        Self { root, length }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.length
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn contains(&self, key: &K) -> bool {
        let mut current = self.root.as_deref();

        while let Some(node) = current {
            match key.cmp(&node.key) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => current = node.right.as_deref(),
            }
        }

        false
    }

    pub(crate) fn find(&self, key: &K) -> Option<&K> {
        let mut current = self.root.as_deref();

        while let Some(node) = current {
            match key.cmp(&node.key) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Equal => return Some(&node.key),
                Ordering::Greater => current = node.right.as_deref(),
            }
        }

        None
    }

    // Callers must not reorder the key relative to the rest of the tree,
    // which is why this stays crate-private.
    pub(crate) fn find_mut(&mut self, key: &K) -> Option<&mut K> {
        let mut current = self.root.as_deref_mut();

        while let Some(node) = current {
            match key.cmp(&node.key) {
                Ordering::Less => current = node.left.as_deref_mut(),
                Ordering::Equal => return Some(&mut node.key),
                Ordering::Greater => current = node.right.as_deref_mut(),
            }
        }

        None
    }

    /// Inserts `key` and returns the number of stored keys afterwards.
    ///
    /// A key already present is ignored: the tree keeps its shape and the
    /// length does not change.
    pub fn insert(&mut self, key: K) -> usize {
        let (root, inserted) = Self::insert_below(self.root.take(), key);
        self.root = Some(root);

        if inserted {
            self.length += 1;
        }

        self.length
    }

    fn insert_below(link: Link<K>, key: K) -> (Box<BoxwoodNode<K>>, bool) {
        let Some(mut node) = link else {
            return (BoxwoodNode::leaf(key), true);
        };

        let inserted = match key.cmp(&node.key) {
            Ordering::Less => {
                let (child, inserted) = Self::insert_below(node.left.take(), key);
                node.left = Some(child);
                inserted
            }
            Ordering::Equal => return (node, false),
            Ordering::Greater => {
                let (child, inserted) = Self::insert_below(node.right.take(), key);
                node.right = Some(child);
                inserted
            }
        };

        node.update_height();
        (Self::rebalance(node), inserted)
    }

    /// Removes `key`, reporting whether a node was actually unlinked.
    /// Removing from an empty tree or removing an absent key returns `false`
    /// and leaves the tree untouched.
    pub fn remove(&mut self, key: &K) -> bool {
        let (root, removed) = Self::remove_below(self.root.take(), key);
        self.root = root;

        if removed {
            self.length -= 1;
        }

        removed
    }

    fn remove_below(link: Link<K>, key: &K) -> (Link<K>, bool) {
        let Some(mut node) = link else {
            return (None, false);
        };

        let removed = match key.cmp(&node.key) {
            Ordering::Less => {
                let (child, removed) = Self::remove_below(node.left.take(), key);
                node.left = child;
                removed
            }
            Ordering::Greater => {
                let (child, removed) = Self::remove_below(node.right.take(), key);
                node.right = child;
                removed
            }
            Ordering::Equal => {
                match Self::splice(node) {
                    Some(replacement) => node = replacement,
                    None => return (None, true),
                }
                true
            }
        };

        node.update_height();
        (Some(Self::rebalance(node)), removed)
    }

    /// Replaces a matched node. With at most one child the node is dropped
    /// and its subtree handed up. With two children the node keeps its place
    /// but takes the key of its in-order predecessor, the rightmost node of
    /// the left subtree, which is detached in its stead.
    fn splice(mut node: Box<BoxwoodNode<K>>) -> Link<K> {
        match (node.left.take(), node.right.take()) {
            (None, right) => right,
            (left, None) => left,
            (Some(left), right) => {
                let (left, predecessor) = Self::detach_rightmost(left);
                node.key = predecessor;
                node.left = left;
                node.right = right;
                Some(node)
            }
        }
    }

    /// Unlinks the rightmost node of a subtree and hands its key up. The
    /// rightmost node has no right child, so its left child takes its slot.
    /// Every other node on the way down rebalances on unwind, exactly as a
    /// plain removal would.
    fn detach_rightmost(mut node: Box<BoxwoodNode<K>>) -> (Link<K>, K) {
        match node.right.take() {
            None => {
                let BoxwoodNode { key, left, .. } = *node;
                (left, key)
            }
            Some(right) => {
                let (right, key) = Self::detach_rightmost(right);
                node.right = right;
                node.update_height();
                (Some(Self::rebalance(node)), key)
            }
        }
    }

    /// Restores the AVL invariant at `node` after a mutation beneath it.
    /// The double-rotation cases straighten the heavy child first so a
    /// single outer rotation always suffices.
    fn rebalance(mut node: Box<BoxwoodNode<K>>) -> Box<BoxwoodNode<K>> {
        let factor = node.balance_factor();

        if factor > 1 {
            if node.left.as_deref().map_or(0, BoxwoodNode::balance_factor) < 0 {
                node.left = node.left.take().map(Self::rotate_left);
            }
            return Self::rotate_right(node);
        }

        if factor < -1 {
            if node.right.as_deref().map_or(0, BoxwoodNode::balance_factor) > 0 {
                node.right = node.right.take().map(Self::rotate_right);
            }
            return Self::rotate_left(node);
        }

        node
    }

    fn rotate_left(mut node: Box<BoxwoodNode<K>>) -> Box<BoxwoodNode<K>> {
        match node.right.take() {
            Some(mut pivot) => {
                node.right = pivot.left.take();
                // demoted node first, its new height feeds the pivot's
                node.update_height();
                pivot.left = Some(node);
                pivot.update_height();
                pivot
            }
            // rotations are only requested towards a non-empty side
            None => node,
        }
    }

    fn rotate_right(mut node: Box<BoxwoodNode<K>>) -> Box<BoxwoodNode<K>> {
        match node.left.take() {
            Some(mut pivot) => {
                node.left = pivot.right.take();
                node.update_height();
                pivot.right = Some(node);
                pivot.update_height();
                pivot
            }
            None => node,
        }
    }
}

impl<K: Ord> Default for Boxwood<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl<K: Ord> Boxwood<K> {
    fn check_invariants(&self) {
        fn walk<K: Ord>(node: &BoxwoodNode<K>, lo: Option<&K>, hi: Option<&K>) -> (i32, usize) {
            if let Some(lo) = lo {
                assert!(lo < &node.key, "BST order violated on the left bound");
            }
            if let Some(hi) = hi {
                assert!(&node.key < hi, "BST order violated on the right bound");
            }

            let (left_height, left_count) = node
                .left
                .as_deref()
                .map_or((0, 0), |left| walk(left, lo, Some(&node.key)));
            let (right_height, right_count) = node
                .right
                .as_deref()
                .map_or((0, 0), |right| walk(right, Some(&node.key), hi));

            assert!((left_height - right_height).abs() <= 1, "AVL balance violated");
            assert_eq!(node.height, 1 + left_height.max(right_height), "stale height");

            (node.height, 1 + left_count + right_count)
        }

        let count = self
            .root
            .as_deref()
            .map_or(0, |root| walk(root, None, None).1);
        assert_eq!(count, self.length);
    }
}
