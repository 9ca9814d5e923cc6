//! Rose trees, the tree effect for [`Input::traverse_tree`](crate::Input::traverse_tree).
//!
//! Traversals and dropping walk the tree with an explicit work stack, so a
//! tree may be as deep as memory allows. The derived `Clone`, `PartialEq`
//! and `Hash` impls still recurse.

use std::fmt;

use super::Effect;

/// A rose tree: a value with any number of ordered subtrees.
///
/// ```rust
/// use iteratee::Tree;
///
/// let tree = Tree::node(1, vec![Tree::leaf(2), Tree::node(3, vec![Tree::leaf(4)])]);
/// assert_eq!(tree.len(), 4);
/// assert_eq!(tree.flatten(), vec![1, 2, 3, 4]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tree<T> {
    root: T,
    children: Forest<T>,
}

/// The subtrees of a node. Owns the iterative drop.
#[derive(Clone, PartialEq, Eq, Hash)]
struct Forest<T>(Vec<Tree<T>>);

impl<T> Forest<T> {
    fn into_vec(mut self) -> Vec<Tree<T>> {
        std::mem::take(&mut self.0)
    }
}

impl<T> Drop for Forest<T> {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.0);
        while let Some(tree) = stack.pop() {
            stack.extend(tree.children.into_vec());
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Forest<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.0).finish()
    }
}

/// A node value with the number of subtrees it had.
type Slot<N> = (N, usize);

impl<T> Tree<T> {
    /// A tree with a single node.
    ///
    /// ```rust
    /// use iteratee::Tree;
    ///
    /// let leaf = Tree::leaf('a');
    /// assert_eq!(leaf.root(), &'a');
    /// assert!(leaf.children().is_empty());
    /// ```
    #[inline]
    pub fn leaf(root: T) -> Self {
        Tree::node(root, Vec::new())
    }

    /// A tree with `root` above the given subtrees, kept in order.
    #[inline]
    pub fn node(root: T, children: Vec<Tree<T>>) -> Self {
        Tree { root, children: Forest(children) }
    }

    /// Borrows the value at the root.
    #[inline]
    pub fn root(&self) -> &T {
        &self.root
    }

    /// Borrows the subtrees directly below the root.
    ///
    /// ```rust
    /// use iteratee::Tree;
    ///
    /// let tree = Tree::node(0, vec![Tree::leaf(1), Tree::leaf(2)]);
    /// let firsts: Vec<_> = tree.children().iter().map(Tree::root).collect();
    /// assert_eq!(firsts, vec![&1, &2]);
    /// ```
    #[inline]
    pub fn children(&self) -> &[Tree<T>] {
        &self.children.0
    }

    /// Number of nodes, the root included.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(tree) = stack.pop() {
            count += 1;
            stack.extend(tree.children());
        }
        count
    }

    /// Applies `f` to every node value, keeping the shape.
    ///
    /// Values are visited in pre-order.
    ///
    /// ```rust
    /// use iteratee::Tree;
    ///
    /// let tree = Tree::node("ab", vec![Tree::leaf("c")]).map(str::len);
    /// assert_eq!(tree, Tree::node(2, vec![Tree::leaf(1)]));
    /// ```
    pub fn map<U, F>(self, mut f: F) -> Tree<U>
    where
        F: FnMut(T) -> U,
    {
        let (head, rest) = self.into_preorder();
        let head = (f(head.0), head.1);
        let rest = rest.into_iter().map(|(value, arity)| (f(value), arity)).collect();
        assemble(head, rest, Tree::node)
    }

    /// Grafts the tree `f` produces at every node.
    ///
    /// The produced tree keeps its own children first; the bound subtrees
    /// of the original node follow them.
    ///
    /// ```rust
    /// use iteratee::Tree;
    ///
    /// let tree = Tree::node(1, vec![Tree::leaf(2)]);
    /// let bound = tree.and_then(|x| Tree::node(x, vec![Tree::leaf(x * 10)]));
    /// assert_eq!(
    ///     bound,
    ///     Tree::node(1, vec![Tree::leaf(10), Tree::node(2, vec![Tree::leaf(20)])])
    /// );
    /// ```
    pub fn and_then<U, F>(self, f: F) -> Tree<U>
    where
        F: FnMut(T) -> Tree<U>,
    {
        let produced = self.map(f);
        let (head, rest) = produced.into_preorder();
        assemble(head, rest, |grafted: Tree<U>, bound| {
            let Tree { root, children } = grafted;
            let mut children = children.into_vec();
            children.extend(bound);
            Tree::node(root, children)
        })
    }

    /// Node values in pre-order.
    pub fn flatten(self) -> Vec<T> {
        let (head, rest) = self.into_preorder();
        std::iter::once(head.0)
            .chain(rest.into_iter().map(|(value, _)| value))
            .collect()
    }

    /// Takes the tree apart into the root slot and the remaining slots in pre-order.
    fn into_preorder(self) -> (Slot<T>, Vec<Slot<T>>) {
        let Tree { root, children } = self;
        let mut stack = children.into_vec();
        let head = (root, stack.len());
        stack.reverse();

        let mut rest = Vec::new();
        while let Some(Tree { root, children }) = stack.pop() {
            let children = children.into_vec();
            rest.push((root, children.len()));
            stack.extend(children.into_iter().rev());
        }
        (head, rest)
    }
}

/// Rebuilds a tree from pre-order slots, bottom-up.
///
/// `build` receives each slot's value with its already rebuilt subtrees.
fn assemble<N, U, B>(head: Slot<N>, rest: Vec<Slot<N>>, mut build: B) -> Tree<U>
where
    B: FnMut(N, Vec<Tree<U>>) -> Tree<U>,
{
    let mut built = Vec::new();
    for (value, arity) in rest.into_iter().rev() {
        let children = take_children(&mut built, arity);
        built.push(build(value, children));
    }
    let children = take_children(&mut built, head.1);
    build(head.0, children)
}

// The first child of a node is the last one rebuilt, so it sits on top.
fn take_children<U>(built: &mut Vec<Tree<U>>, arity: usize) -> Vec<Tree<U>> {
    let mut children = built.split_off(built.len().saturating_sub(arity));
    children.reverse();
    children
}

impl<T, B> Effect<B> for Tree<T> {
    type Item = T;
    type Output = Tree<B>;

    fn pure(_: &(), make: fn() -> B) -> Tree<B> {
        Tree::leaf(make())
    }

    fn fmap(self, g: fn(T) -> B) -> Tree<B> {
        self.map(g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Input;

    fn sample() -> Tree<i32> {
        Tree::node(1, vec![Tree::node(2, vec![Tree::leaf(3)]), Tree::leaf(4)])
    }

    fn spine(depth: usize) -> Tree<usize> {
        (1..depth).fold(Tree::leaf(0), |tree, i| Tree::node(i, vec![tree]))
    }

    #[test]
    fn test_map_preserves_shape() {
        let mapped = sample().map(|x| x * 2);
        assert_eq!(
            mapped,
            Tree::node(2, vec![Tree::node(4, vec![Tree::leaf(6)]), Tree::leaf(8)])
        );
        assert_eq!(mapped.children().len(), 2);
        assert_eq!(mapped.root(), &2);
    }

    #[test]
    fn test_map_visits_in_preorder() {
        let mut seen = Vec::new();
        sample().map(|x| seen.push(x));
        assert_eq!(seen, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_and_then_identities() {
        assert_eq!(sample().and_then(Tree::leaf), sample());

        let f = |x: i32| Tree::node(x, vec![Tree::leaf(-x)]);
        assert_eq!(Tree::leaf(5).and_then(f), f(5));
    }

    #[test]
    fn test_and_then_grafts_before_bound_children() {
        let bound = sample().and_then(|x| Tree::node(x, vec![Tree::leaf(x * 10)]));
        assert_eq!(bound.flatten(), vec![1, 10, 2, 20, 3, 30, 4, 40]);
    }

    #[test]
    fn test_flatten_is_preorder() {
        assert_eq!(sample().flatten(), vec![1, 2, 3, 4]);
        assert_eq!(sample().len(), 4);
    }

    #[test]
    fn test_debug_shows_children_as_list() {
        let tree = Tree::node(1, vec![Tree::leaf(2)]);
        assert_eq!(
            format!("{tree:?}"),
            "Tree { root: 1, children: [Tree { root: 2, children: [] }] }"
        );
    }

    #[test]
    fn test_deep_tree_is_stack_safe() {
        let depth = 200_000;

        assert_eq!(spine(depth).len(), depth);

        let values = spine(depth).flatten();
        assert_eq!(values.len(), depth);
        assert_eq!(values.first(), Some(&(depth - 1)));
        assert_eq!(values.last(), Some(&0));

        let mapped = spine(depth).map(|x| x + 1);
        assert_eq!(mapped.root(), &depth);
        assert_eq!(mapped.len(), depth);

        let bound = spine(depth).and_then(|x| Tree::node(x, vec![Tree::leaf(x)]));
        assert_eq!(bound.len(), 2 * depth);
        assert_eq!(bound.children().len(), 2);

        let signals = Input::Element(()).traverse_tree(|_| spine(depth));
        assert_eq!(signals.root(), &Input::Element(depth - 1));
        assert_eq!(signals.len(), depth);
    }
}
