use core::fmt;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ptr::{self, NonNull};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Red,
    Black,
}

impl Color {
    /// Returns `true` if the color is [`Red`](Color::Red).
    #[must_use]
    fn is_red(&self) -> bool {
        matches!(self, Self::Red)
    }

    #[must_use]
    fn is_black(&self) -> bool {
        matches!(self, Self::Black)
    }
}

struct Node<K, V> {
    // key and value are uninit only for the sentinel node, every reachable
    // node holds valid values
    key: MaybeUninit<K>,
    value: MaybeUninit<V>,
    color: Color,
    parent: NodeRef<K, V>,
    left: NodeRef<K, V>,
    right: NodeRef<K, V>,
}

/// Wrapper around `NonNull<Node<K, V>>` providing accessors so the tree
/// algorithms read close to their textbook form.
///
/// Links are never optional: "no child" and "no parent" are represented by
/// the tree's sentinel node, so absence checks are pointer comparisons.
#[repr(transparent)]
struct NodeRef<K, V> {
    ptr: NonNull<Node<K, V>>,
}

// Manual impls: the derived ones would bound K and V.
impl<K, V> Clone for NodeRef<K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for NodeRef<K, V> {}

impl<K, V> PartialEq for NodeRef<K, V> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.as_ptr(), other.as_ptr())
    }
}

impl<K, V> Eq for NodeRef<K, V> {}

impl<K, V> NodeRef<K, V> {
    fn dangling() -> Self {
        Self {
            ptr: NonNull::dangling(),
        }
    }

    fn from_node(node: Node<K, V>) -> Self {
        Self {
            ptr: unsafe { NonNull::new_unchecked(Box::into_raw(Box::new(node))) },
        }
    }

    #[inline]
    fn as_ptr(&self) -> *mut Node<K, V> {
        self.ptr.as_ptr()
    }

    #[inline]
    unsafe fn key<'a>(&self) -> &'a K {
        unsafe { (*self.as_ptr()).key.assume_init_ref() }
    }

    #[inline]
    unsafe fn value<'a>(&self) -> &'a V {
        unsafe { (*self.as_ptr()).value.assume_init_ref() }
    }

    #[inline]
    unsafe fn value_mut<'a>(&mut self) -> &'a mut V {
        unsafe { (*self.as_ptr()).value.assume_init_mut() }
    }

    #[inline]
    unsafe fn key_value<'a>(&self) -> (&'a K, &'a V) {
        let ptr = self.as_ptr();
        unsafe { ((*ptr).key.assume_init_ref(), (*ptr).value.assume_init_ref()) }
    }

    /// Overwrites the value in place, dropping the old one.
    #[inline]
    unsafe fn replace_value(&mut self, value: V) {
        unsafe {
            *(*self.as_ptr()).value.assume_init_mut() = value;
        }
    }

    #[inline]
    unsafe fn parent(&self) -> NodeRef<K, V> {
        unsafe { (*self.as_ptr()).parent }
    }

    #[inline]
    unsafe fn set_parent(&mut self, new_parent: NodeRef<K, V>) {
        unsafe {
            (*self.as_ptr()).parent = new_parent;
        }
    }

    #[inline]
    unsafe fn left(&self) -> NodeRef<K, V> {
        unsafe { (*self.as_ptr()).left }
    }

    #[inline]
    unsafe fn set_left(&mut self, new_left: NodeRef<K, V>) {
        unsafe {
            (*self.as_ptr()).left = new_left;
        }
    }

    #[inline]
    unsafe fn right(&self) -> NodeRef<K, V> {
        unsafe { (*self.as_ptr()).right }
    }

    #[inline]
    unsafe fn set_right(&mut self, new_right: NodeRef<K, V>) {
        unsafe {
            (*self.as_ptr()).right = new_right;
        }
    }

    #[inline]
    unsafe fn color(&self) -> Color {
        unsafe { (*self.as_ptr()).color }
    }

    #[inline]
    unsafe fn set_color(&mut self, new_color: Color) {
        unsafe { (*self.as_ptr()).color = new_color }
    }
}

/// An ordered map backed by a red-black tree.
///
/// Same interface as [`BinarySearchTree`](crate::BinarySearchTree), with the
/// tree height kept at O(log n) by recoloring and rotations:
///
/// * the root and the sentinel are black
/// * a red node never has a red parent
/// * every path from a node down to a sentinel leaf passes through the same
///   number of black nodes
pub struct RedBlackTree<K, V> {
    // INVARIANTS:
    //  * `root` is the sentinel iff `len == 0`, the root's parent is the sentinel
    //  * every reachable non-sentinel node holds initialized key/value
    //  * `len` equals the number of live (non-sentinel) nodes
    root: NodeRef<K, V>,
    // Shared stand-in for "no child"/"no parent", always black, never keyed.
    // Its parent link is used as scratch space during delete and reset after.
    sentinel: NodeRef<K, V>,
    len: usize,
    marker: PhantomData<Box<Node<K, V>>>,
}

impl<K, V> Drop for RedBlackTree<K, V> {
    fn drop(&mut self) {
        // Iterative for the same reason as the plain BST, although here the
        // balance invariants bound the depth anyway.
        let mut stack = Vec::new();
        if !self.is_sentinel(self.root) {
            stack.push(self.root);
        }
        while let Some(node) = stack.pop() {
            unsafe {
                let left = node.left();
                let right = node.right();
                if !self.is_sentinel(left) {
                    stack.push(left);
                }
                if !self.is_sentinel(right) {
                    stack.push(right);
                }

                let mut node = Box::from_raw(node.as_ptr());
                node.key.assume_init_drop();
                node.value.assume_init_drop();
            }
        }

        // The sentinel never holds a key or value.
        let _: Box<Node<K, V>> = unsafe { Box::from_raw(self.sentinel.as_ptr()) };
    }
}

impl<K, V> fmt::Debug for RedBlackTree<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Nodes<'a, K, V>(&'a RedBlackTree<K, V>);

        impl<K, V> fmt::Debug for Nodes<'_, K, V>
        where
            K: fmt::Debug,
            V: fmt::Debug,
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let mut list = f.debug_list();
                for node in self.0.raw_iter() {
                    let (key, value) = unsafe { node.key_value() };
                    list.entry(&(key, unsafe { node.color() }, value));
                }
                list.finish()
            }
        }

        f.debug_struct("RedBlackTree")
            .field("len", &self.len)
            .field("nodes", &Nodes(self))
            .finish()
    }
}

impl<K, V> RedBlackTree<K, V> {
    pub fn new() -> Self {
        let mut sentinel = NodeRef::from_node(Node {
            key: MaybeUninit::uninit(),
            value: MaybeUninit::uninit(),
            color: Color::Black,
            parent: NodeRef::dangling(),
            left: NodeRef::dangling(),
            right: NodeRef::dangling(),
        });
        unsafe {
            sentinel.set_parent(sentinel);
            sentinel.set_left(sentinel);
            sentinel.set_right(sentinel);
        }

        Self {
            root: sentinel,
            sentinel,
            len: 0,
            marker: PhantomData,
        }
    }

    /// Number of live entries, tracked separately so this is O(1).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    fn is_sentinel(&self, node: NodeRef<K, V>) -> bool {
        node == self.sentinel
    }

    /// Returns the value associated with `key`, or `None` if the key is not
    /// in the tree.
    pub fn lookup<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_node(key).map(|node| unsafe { node.value() })
    }

    pub fn lookup_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_node(key).map(|mut node| unsafe { node.value_mut() })
    }

    fn find_node<Q>(&self, key: &Q) -> Option<NodeRef<K, V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root;
        while !self.is_sentinel(current) {
            match key.cmp(unsafe { current.key().borrow() }) {
                Ordering::Less => current = unsafe { current.left() },
                Ordering::Equal => return Some(current),
                Ordering::Greater => current = unsafe { current.right() },
            }
        }

        None
    }

    /// Entry with the smallest key.
    pub fn min(&self) -> Option<(&K, &V)> {
        if self.is_empty() {
            return None;
        }
        let min = unsafe { self.min_of(self.root) };
        unsafe { Some(min.key_value()) }
    }

    /// Entry with the largest key.
    pub fn max(&self) -> Option<(&K, &V)> {
        if self.is_empty() {
            return None;
        }
        let mut node = self.root;
        while !self.is_sentinel(unsafe { node.right() }) {
            node = unsafe { node.right() };
        }
        unsafe { Some(node.key_value()) }
    }

    unsafe fn min_of(&self, root: NodeRef<K, V>) -> NodeRef<K, V> {
        let mut node = root;
        while !self.is_sentinel(unsafe { node.left() }) {
            node = unsafe { node.left() };
        }

        node
    }

    /// Inserts `key` with `value`, or overwrites the value in place if the
    /// key is already present (the count and the node colors stay unchanged).
    /// Returns a borrow of the value now stored in the tree.
    pub fn insert(&mut self, key: K, value: V) -> &V
    where
        K: Ord,
    {
        let mut parent = self.sentinel;
        let mut current = self.root;
        while !self.is_sentinel(current) {
            parent = current;
            match key.cmp(unsafe { current.key() }) {
                Ordering::Less => current = unsafe { current.left() },
                Ordering::Equal => unsafe {
                    current.replace_value(value);
                    return current.value();
                },
                Ordering::Greater => current = unsafe { current.right() },
            }
        }

        // New nodes start red: this can break "no red node has a red parent"
        // but never the black height, which the fixup below relies on.
        let new_node = NodeRef::from_node(Node {
            key: MaybeUninit::new(key),
            value: MaybeUninit::new(value),
            color: Color::Red,
            parent,
            left: self.sentinel,
            right: self.sentinel,
        });

        if self.is_sentinel(parent) {
            self.root = new_node;
        } else if unsafe { new_node.key() < parent.key() } {
            unsafe { parent.set_left(new_node) };
        } else {
            unsafe { parent.set_right(new_node) };
        }

        self.len += 1;
        self.insert_fixup(new_node);
        unsafe { new_node.value() }
    }

    /// Restores the red-black invariants after `node` was inserted red.
    ///
    /// The only possible violation is a red node with a red parent, and there
    /// is exactly one such pair at any point of the loop.
    fn insert_fixup(&mut self, node: NodeRef<K, V>) {
        let mut node = node;
        unsafe {
            while node.color().is_red() && node.parent().color().is_red() {
                let mut parent = node.parent();
                // The parent is red so it cannot be the root, hence the
                // grandparent is a real node, and it is black because the
                // red-red pair is the only violation.
                let mut grandparent = parent.parent();
                debug_assert!(!self.is_sentinel(grandparent));
                debug_assert!(grandparent.color().is_black());

                if parent == grandparent.left() {
                    let mut uncle = grandparent.right();
                    if uncle.color().is_red() {
                        //     ┌── gp:b ──┐             ┌── gp:r ──┐
                        //     │          │             │          │
                        //  ┌ p:r ┐    ┌ u:r ┐   ──►  ┌ p:b ┐    ┌ u:b ┐
                        //  │     │    │     │        │     │    │     │
                        // n:r    a    b     c       n:r    a    b     c
                        //
                        // Keeps the black height of every path, but the
                        // grandparent may now conflict with its own parent,
                        // so the loop continues from there.
                        parent.set_color(Color::Black);
                        uncle.set_color(Color::Black);
                        grandparent.set_color(Color::Red);
                        node = grandparent;
                    } else {
                        if node == parent.right() {
                            //     ┌── gp:b ──┐             ┌── gp:b ──┐
                            //     │          │             │          │
                            //  ┌ p:r ┐      u:b   ──►   ┌ n:r ┐      u:b
                            //  │     │                  │     │
                            //  a    n:r                p:r    b
                            //
                            // An inner grandchild first becomes an outer one
                            // so that a single rotation below can finish.
                            node = parent;
                            self.rotate_left(node);
                            parent = node.parent();
                        }

                        //        ┌── gp:b ──┐            ┌── p:b ──┐
                        //        │          │            │         │
                        //     ┌ p:r ┐      u:b   ──►   n:r      ┌ gp:r ┐
                        //     │     │                           │      │
                        //    n:r    c                           c     u:b
                        //
                        // Terminal: the subtree root is black again, no path
                        // changed its black count.
                        parent.set_color(Color::Black);
                        grandparent.set_color(Color::Red);
                        self.rotate_right(grandparent);
                    }
                } else {
                    // mirror image of the branch above
                    let mut uncle = grandparent.left();
                    if uncle.color().is_red() {
                        parent.set_color(Color::Black);
                        uncle.set_color(Color::Black);
                        grandparent.set_color(Color::Red);
                        node = grandparent;
                    } else {
                        if node == parent.left() {
                            node = parent;
                            self.rotate_right(node);
                            parent = node.parent();
                        }

                        parent.set_color(Color::Black);
                        grandparent.set_color(Color::Red);
                        self.rotate_left(grandparent);
                    }
                }
            }

            self.root.set_color(Color::Black);
        }
    }

    /// Removes `key` and returns its value, or `None` if the key is not in
    /// the tree (which is left unchanged).
    pub fn delete<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_node(key).map(|node| self.delete_node(node))
    }

    fn delete_node(&mut self, node: NodeRef<K, V>) -> V {
        unsafe {
            // `removed_color` is the color of the node that physically leaves
            // its position: `node` itself, or its successor when both
            // children exist. `replacement` is whatever ends up in that
            // position, possibly the sentinel.
            let removed_color;
            let replacement;

            if self.is_sentinel(node.left()) {
                removed_color = node.color();
                replacement = node.right();
                self.replace_subtree(node, node.right());
            } else if self.is_sentinel(node.right()) {
                removed_color = node.color();
                replacement = node.left();
                self.replace_subtree(node, node.left());
            } else {
                // Two children: the in-order successor (minimum of the right
                // subtree, it has no left child) is spliced into `node`'s
                // position and takes over its color, so the only deficit to
                // repair is at the successor's former place.
                let mut successor = self.min_of(node.right());
                removed_color = successor.color();
                let mut repl = successor.right();
                if successor.parent() == node {
                    // The replacement may be the sentinel, and the fixup
                    // still needs to walk up from it.
                    repl.set_parent(successor);
                } else {
                    self.replace_subtree(successor, successor.right());
                    successor.set_right(node.right());
                    successor.right().set_parent(successor);
                }
                self.replace_subtree(node, successor);
                successor.set_left(node.left());
                successor.left().set_parent(successor);
                successor.set_color(node.color());
                replacement = repl;
            }

            if removed_color.is_black() {
                // Removing a black node shorted every path through
                // `replacement` by one black node.
                self.delete_fixup(replacement);
            }

            // The fixup may have walked up from the sentinel through the
            // scratch parent link set above.
            self.sentinel.set_parent(self.sentinel);

            let node = Box::from_raw(node.as_ptr());
            self.len -= 1;
            drop(node.key.assume_init());
            node.value.assume_init()
        }
    }

    /// Restores the red-black invariants after a black node was removed and
    /// `x` took over its position.
    ///
    /// Every path through `x` is one black node short, which is tracked as
    /// `x` carrying an extra "black unit". The loop moves that unit upward or
    /// discharges it, driven by the color of `x`'s sibling and the sibling's
    /// children.
    fn delete_fixup(&mut self, x: NodeRef<K, V>) {
        let mut x = x;
        unsafe {
            while x != self.root && x.color().is_black() {
                let mut parent = x.parent();
                if x == parent.left() {
                    let mut sibling = parent.right();
                    // A sibling must exist: with `x` doubly black, a sentinel
                    // sibling would make the black heights unequal.
                    debug_assert!(!self.is_sentinel(sibling));

                    if sibling.color().is_red() {
                        // Red sibling: rotate it above the parent. `x` keeps
                        // its deficit but gains a black sibling, reducing to
                        // one of the cases below.
                        sibling.set_color(Color::Black);
                        parent.set_color(Color::Red);
                        self.rotate_left(parent);
                        sibling = parent.right();
                    }

                    debug_assert!(sibling.color().is_black());

                    if sibling.left().color().is_black() && sibling.right().color().is_black() {
                        // Both sibling children black: take one black unit
                        // off both subtrees and push the deficit up to the
                        // parent. If the parent is red the loop exits and the
                        // final recoloring below settles the account.
                        sibling.set_color(Color::Red);
                        x = parent;
                    } else {
                        if sibling.right().color().is_black() {
                            // Inner (left) red child: rotate it over the
                            // sibling so the red lands on the outside.
                            sibling.left().set_color(Color::Black);
                            sibling.set_color(Color::Red);
                            self.rotate_right(sibling);
                            sibling = parent.right();
                        }

                        // Outer red child: rotating the sibling above the
                        // parent adds one black node to every path through
                        // `x` and keeps all other counts, which settles the
                        // deficit.
                        sibling.set_color(parent.color());
                        parent.set_color(Color::Black);
                        sibling.right().set_color(Color::Black);
                        self.rotate_left(parent);
                        x = self.root;
                    }
                } else {
                    // mirror image of the branch above
                    let mut sibling = parent.left();
                    debug_assert!(!self.is_sentinel(sibling));

                    if sibling.color().is_red() {
                        sibling.set_color(Color::Black);
                        parent.set_color(Color::Red);
                        self.rotate_right(parent);
                        sibling = parent.left();
                    }

                    debug_assert!(sibling.color().is_black());

                    if sibling.right().color().is_black() && sibling.left().color().is_black() {
                        sibling.set_color(Color::Red);
                        x = parent;
                    } else {
                        if sibling.left().color().is_black() {
                            sibling.right().set_color(Color::Black);
                            sibling.set_color(Color::Red);
                            self.rotate_left(sibling);
                            sibling = parent.left();
                        }

                        sibling.set_color(parent.color());
                        parent.set_color(Color::Black);
                        sibling.left().set_color(Color::Black);
                        self.rotate_right(parent);
                        x = self.root;
                    }
                }
            }

            x.set_color(Color::Black);
        }
    }

    /// Replaces the subtree rooted at `old` with the subtree rooted at `new`.
    ///
    /// `new` may be the sentinel; its parent link is still updated so that
    /// the delete fixup can walk upward from an empty position.
    unsafe fn replace_subtree(&mut self, old: NodeRef<K, V>, mut new: NodeRef<K, V>) {
        unsafe {
            let mut parent = old.parent();
            if self.is_sentinel(parent) {
                self.root = new;
            } else if old == parent.left() {
                parent.set_left(new);
            } else {
                parent.set_right(new);
            }

            new.set_parent(parent);
        }
    }

    //    p                       p
    //    │                       │
    // ┌ node ┐               ┌ right ┐
    // │      │      ──►      │       │
    // a   ┌ right ┐      ┌ node ┐    c
    //     │       │      │      │
    //     b       c      a      b
    // where a, b, c can be any subtrees
    fn rotate_left(&mut self, mut node: NodeRef<K, V>) {
        assert!(
            !self.is_sentinel(node),
            "cannot rotate at the sentinel node"
        );
        let mut child = unsafe { node.right() };
        assert!(
            !self.is_sentinel(child),
            "cannot rotate left at a node with no right child"
        );

        unsafe {
            // b moves over to node
            let mut b = child.left();
            node.set_right(b);
            if !self.is_sentinel(b) {
                b.set_parent(node);
            }

            // child takes node's place under its parent
            let mut parent = node.parent();
            child.set_parent(parent);
            if self.is_sentinel(parent) {
                self.root = child;
            } else if node == parent.left() {
                parent.set_left(child);
            } else {
                parent.set_right(child);
            }

            // node becomes child's left child
            child.set_left(node);
            node.set_parent(child);
        }
    }

    //         p              p
    //         │              │
    //     ┌ node ┐       ┌ left ┐
    //     │      │       │      │
    // ┌ left ┐   c  ──►  a   ┌ node ┐
    // │      │               │      │
    // a      b               b      c
    // where a, b, c can be any subtrees
    fn rotate_right(&mut self, mut node: NodeRef<K, V>) {
        assert!(
            !self.is_sentinel(node),
            "cannot rotate at the sentinel node"
        );
        let mut child = unsafe { node.left() };
        assert!(
            !self.is_sentinel(child),
            "cannot rotate right at a node with no left child"
        );

        unsafe {
            // b moves over to node
            let mut b = child.right();
            node.set_left(b);
            if !self.is_sentinel(b) {
                b.set_parent(node);
            }

            // child takes node's place under its parent
            let mut parent = node.parent();
            child.set_parent(parent);
            if self.is_sentinel(parent) {
                self.root = child;
            } else if node == parent.right() {
                parent.set_right(child);
            } else {
                parent.set_left(child);
            }

            // node becomes child's right child
            child.set_right(node);
            node.set_parent(child);
        }
    }

    /// In-order iterator over the entries, ascending by key.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            raw: self.raw_iter(),
            remaining: self.len,
            marker: PhantomData,
        }
    }

    fn raw_iter(&self) -> RawIter<K, V> {
        let mut iter = RawIter {
            stack: Vec::new(),
            sentinel: self.sentinel,
        };
        iter.push_left_spine(self.root);
        iter
    }

    /// Calls `f` once per entry in ascending key order with the entry, its
    /// zero-based position in the traversal and a reference to the tree
    /// itself (for callbacks that want to re-query the map mid-walk).
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut((&K, &V), usize, &Self),
    {
        for (i, entry) in self.iter().enumerate() {
            f(entry, i, self);
        }
    }

    /// Plain BST insert that skips the fixup, for building exact tree shapes
    /// in the rotation tests. New nodes are black.
    #[cfg(test)]
    fn insert_unbalanced(&mut self, key: K, value: V)
    where
        K: Ord,
    {
        let mut parent = self.sentinel;
        let mut current = self.root;
        while !self.is_sentinel(current) {
            parent = current;
            match key.cmp(unsafe { current.key() }) {
                Ordering::Less => current = unsafe { current.left() },
                Ordering::Equal => unsafe {
                    current.replace_value(value);
                    return;
                },
                Ordering::Greater => current = unsafe { current.right() },
            }
        }

        let new_node = NodeRef::from_node(Node {
            key: MaybeUninit::new(key),
            value: MaybeUninit::new(value),
            color: Color::Black,
            parent,
            left: self.sentinel,
            right: self.sentinel,
        });

        if self.is_sentinel(parent) {
            self.root = new_node;
        } else if unsafe { new_node.key() < parent.key() } {
            unsafe { parent.set_left(new_node) };
        } else {
            unsafe { parent.set_right(new_node) };
        }

        self.len += 1;
    }
}

impl<'a, K, V> IntoIterator for &'a RedBlackTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// In-order walk over raw node handles, shared by `Iter` and the `Debug`
// impl. The stack holds the path down to the current node.
struct RawIter<K, V> {
    stack: Vec<NodeRef<K, V>>,
    sentinel: NodeRef<K, V>,
}

impl<K, V> RawIter<K, V> {
    fn push_left_spine(&mut self, mut node: NodeRef<K, V>) {
        while node != self.sentinel {
            self.stack.push(node);
            node = unsafe { node.left() };
        }
    }
}

impl<K, V> Iterator for RawIter<K, V> {
    type Item = NodeRef<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(unsafe { node.right() });
        Some(node)
    }
}

/// In-order iterator over the entries, ascending by key.
pub struct Iter<'a, K, V> {
    raw: RawIter<K, V>,
    remaining: usize,
    marker: PhantomData<&'a Node<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.raw.next()?;
        self.remaining -= 1;
        Some(unsafe { node.key_value() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
