//! Lists with at least one element, the effect behind
//! [`Input::traverse_non_empty`](crate::Input::traverse_non_empty).

use super::Effect;

/// A list with at least one element.
///
/// ```rust
/// use iteratee::NonEmpty;
///
/// let list = NonEmpty::from_parts(1, vec![2, 3]);
/// assert_eq!(list.head(), &1);
/// assert_eq!(list.len(), 3);
/// assert_eq!(NonEmpty::<i32>::from_vec(vec![]), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmpty<T> {
    head: T,
    tail: Vec<T>,
}

impl<T> NonEmpty<T> {
    /// A list holding a single element.
    pub fn new(head: T) -> Self {
        NonEmpty { head, tail: Vec::new() }
    }

    /// A list made of `head` followed by `tail`.
    #[inline]
    pub fn from_parts(head: T, tail: Vec<T>) -> Self {
        NonEmpty { head, tail }
    }

    /// Returns `None` for an empty vector.
    pub fn from_vec(vec: Vec<T>) -> Option<Self> {
        let mut iter = vec.into_iter();
        let head = iter.next()?;
        Some(NonEmpty { head, tail: iter.collect() })
    }

    /// Borrows the first element, which always exists.
    #[inline]
    pub fn head(&self) -> &T {
        &self.head
    }

    /// Borrows every element after the first.
    ///
    /// ```rust
    /// use iteratee::NonEmpty;
    ///
    /// assert!(NonEmpty::new(1).tail().is_empty());
    /// assert_eq!(NonEmpty::from_parts(1, vec![2]).tail(), &[2]);
    /// ```
    #[inline]
    pub fn tail(&self) -> &[T] {
        &self.tail
    }

    /// Number of elements; never zero.
    #[allow(clippy::len_without_is_empty)]
    #[inline]
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Iterates over the elements by reference, head first.
    ///
    /// ```rust
    /// use iteratee::NonEmpty;
    ///
    /// let list = NonEmpty::from_parts(3, vec![4, 5]);
    /// assert_eq!(list.iter().sum::<i32>(), 12);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    /// Appends an element at the end.
    pub fn push(&mut self, value: T) {
        self.tail.push(value);
    }

    /// Applies `f` to every element, head first, keeping the order.
    ///
    /// ```rust
    /// use iteratee::NonEmpty;
    ///
    /// let list = NonEmpty::from_parts(1, vec![2]).map(|x| x * 10);
    /// assert_eq!(list, NonEmpty::from_parts(10, vec![20]));
    /// ```
    pub fn map<U, F>(self, mut f: F) -> NonEmpty<U>
    where
        F: FnMut(T) -> U,
    {
        let head = f(self.head);
        NonEmpty { head, tail: self.tail.into_iter().map(f).collect() }
    }

    /// Replaces every element by the list `f` produces, concatenating the results.
    ///
    /// ```rust
    /// use iteratee::NonEmpty;
    ///
    /// let list = NonEmpty::from_parts(1, vec![2]).and_then(|x| NonEmpty::from_parts(x, vec![x * 10]));
    /// assert_eq!(list.into_vec(), vec![1, 10, 2, 20]);
    /// ```
    pub fn and_then<U, F>(self, mut f: F) -> NonEmpty<U>
    where
        F: FnMut(T) -> NonEmpty<U>,
    {
        let mut out = f(self.head);
        for value in self.tail {
            let NonEmpty { head, tail } = f(value);
            out.tail.push(head);
            out.tail.extend(tail);
        }
        out
    }

    /// Converts into a plain vector, head first.
    pub fn into_vec(self) -> Vec<T> {
        let mut vec = Vec::with_capacity(self.len());
        vec.push(self.head);
        vec.extend(self.tail);
        vec
    }
}

impl<T> From<NonEmpty<T>> for Vec<T> {
    fn from(list: NonEmpty<T>) -> Self {
        list.into_vec()
    }
}

impl<T> IntoIterator for NonEmpty<T> {
    type Item = T;
    type IntoIter = std::iter::Chain<std::iter::Once<T>, std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

impl<T, B> Effect<B> for NonEmpty<T> {
    type Item = T;
    type Output = NonEmpty<B>;

    fn pure(_: &(), make: fn() -> B) -> NonEmpty<B> {
        NonEmpty::new(make())
    }

    fn fmap(self, g: fn(T) -> B) -> NonEmpty<B> {
        self.map(g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec() {
        let list = NonEmpty::from_vec(vec![1, 2, 3]).expect("non-empty input");
        assert_eq!(list.head(), &1);
        assert_eq!(list.tail(), &[2, 3]);
        assert!(NonEmpty::<u8>::from_vec(Vec::new()).is_none());
    }

    #[test]
    fn test_map_keeps_order() {
        let list = NonEmpty::from_parts("a", vec!["bb", "ccc"]).map(str::len);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_and_then_left_identity() {
        let f = |x: i32| NonEmpty::from_parts(x, vec![-x]);
        assert_eq!(NonEmpty::new(4).and_then(f), f(4));
    }

    #[test]
    fn test_push_and_into_iter() {
        let mut list = NonEmpty::new('x');
        list.push('y');
        assert_eq!(list.len(), 2);
        assert_eq!(list.into_iter().collect::<String>(), "xy");
    }
}
