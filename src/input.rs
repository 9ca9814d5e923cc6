//! Input signals delivered to an [`Iteratee`].
//!
//! An [`Input<E>`] is what a driver hands a waiting consumer on each step:
//! either nothing yet ([`Input::Empty`]), the end of the stream
//! ([`Input::Eof`]), or exactly one value ([`Input::Element`]).
//!
//! The combinators only ever look inside `Element`. `Empty` and `Eof` keep
//! their shape through [`map`](Input::map), [`and_then`](Input::and_then) and
//! friends, so a missing element and a finished stream both short-circuit.
//!
//! # Examples
//!
//! ```rust
//! use iteratee::Input;
//!
//! let chunk = Input::Element(21).map(|x| x * 2);
//! assert_eq!(chunk, Input::Element(42));
//!
//! let eof: Input<i32> = Input::Eof;
//! assert_eq!(eof.map(|x| x * 2), Input::Eof);
//! ```

use std::fmt;

use crate::{Iteratee, Semigroup};

/// A single signal delivered to a consumer.
///
/// # Examples
///
/// ```rust
/// use iteratee::Input;
///
/// let signals: [Input<u8>; 3] = [Input::Empty, Input::Eof, Input::Element(7)];
/// for signal in &signals {
///     let flags = [signal.is_empty(), signal.is_eof(), signal.is_element()];
///     assert_eq!(flags.iter().filter(|f| **f).count(), 1);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Input<E> {
    /// No element is available yet; the consumer should wait.
    Empty,
    /// The stream is exhausted; no further elements will arrive.
    Eof,
    /// Exactly one element.
    Element(E),
}

impl<E> Input<E> {
    /// Returns `true` if the signal is `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iteratee::Input;
    ///
    /// assert!(Input::<i32>::Empty.is_empty());
    /// assert!(!Input::Element(1).is_empty());
    /// ```
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Input::Empty)
    }

    /// Returns `true` if the signal is `Eof`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iteratee::Input;
    ///
    /// assert!(Input::<i32>::Eof.is_eof());
    /// assert!(!Input::<i32>::Empty.is_eof());
    /// ```
    #[inline]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Input::Eof)
    }

    /// Returns `true` if the signal carries an element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iteratee::Input;
    ///
    /// assert!(Input::Element("a").is_element());
    /// assert!(!Input::<&str>::Eof.is_element());
    /// ```
    #[inline]
    pub const fn is_element(&self) -> bool {
        matches!(self, Input::Element(_))
    }

    /// Converts from `&Input<E>` to `Input<&E>`.
    #[inline]
    pub const fn as_ref(&self) -> Input<&E> {
        match self {
            Input::Empty => Input::Empty,
            Input::Eof => Input::Eof,
            Input::Element(e) => Input::Element(e),
        }
    }

    /// Borrows the element, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iteratee::Input;
    ///
    /// assert_eq!(Input::Element(3).element(), Some(&3));
    /// assert_eq!(Input::<i32>::Empty.element(), None);
    /// ```
    #[inline]
    pub const fn element(&self) -> Option<&E> {
        match self {
            Input::Element(e) => Some(e),
            Input::Empty | Input::Eof => None,
        }
    }

    /// Converts the signal into its element, discarding `Empty` and `Eof`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iteratee::Input;
    ///
    /// assert_eq!(Input::Element(3).into_element(), Some(3));
    /// assert_eq!(Input::<i32>::Eof.into_element(), None);
    /// assert_eq!(Input::<i32>::Empty.into_element(), None);
    /// ```
    #[inline]
    pub fn into_element(self) -> Option<E> {
        match self {
            Input::Element(e) => Some(e),
            Input::Empty | Input::Eof => None,
        }
    }

    /// Returns the element or a default.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iteratee::Input;
    ///
    /// assert_eq!(Input::Element(3).element_or(0), 3);
    /// assert_eq!(Input::Eof.element_or(0), 0);
    /// ```
    #[inline]
    pub fn element_or(self, default: E) -> E {
        match self {
            Input::Element(e) => e,
            Input::Empty | Input::Eof => default,
        }
    }

    /// Returns the element or computes one from a closure.
    #[inline]
    pub fn element_or_else<F>(self, f: F) -> E
    where
        F: FnOnce() -> E,
    {
        match self {
            Input::Element(e) => e,
            Input::Empty | Input::Eof => f(),
        }
    }

    /// Returns `self` if it carries an element, otherwise the signal produced by `f`.
    ///
    /// `f` is only called when needed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iteratee::Input;
    ///
    /// assert_eq!(Input::Element(1).or_else(|| unreachable!()), Input::Element(1));
    /// assert_eq!(Input::Eof.or_else(|| Input::Element(2)), Input::Element(2));
    /// assert_eq!(Input::Empty.or_else(|| Input::<i32>::Eof), Input::Eof);
    /// ```
    #[inline]
    pub fn or_else<F>(self, f: F) -> Input<E>
    where
        F: FnOnce() -> Input<E>,
    {
        match self {
            Input::Element(e) => Input::Element(e),
            Input::Empty | Input::Eof => f(),
        }
    }

    /// Keeps an element only if it satisfies `predicate`; a rejected element becomes `Empty`.
    ///
    /// `Eof` and `Empty` pass through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iteratee::Input;
    ///
    /// assert_eq!(Input::Element(4).filter(|x| x % 2 == 0), Input::Element(4));
    /// assert_eq!(Input::Element(3).filter(|x| x % 2 == 0), Input::Empty);
    /// assert_eq!(Input::<i32>::Eof.filter(|_| false), Input::Eof);
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Input<E>
    where
        P: FnOnce(&E) -> bool,
    {
        match self {
            Input::Element(e) => {
                if predicate(&e) {
                    Input::Element(e)
                } else {
                    Input::Empty
                }
            }
            Input::Empty => Input::Empty,
            Input::Eof => Input::Eof,
        }
    }

    /// Combines two signals with a caller-supplied merge rule.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iteratee::{Input, semigroup};
    ///
    /// // Prefer the left element, fall back to the right one.
    /// let first = semigroup(|a: Input<i32>, b: Input<i32>| a.or_else(|| b));
    /// assert_eq!(Input::Empty.append(Input::Element(2), &first), Input::Element(2));
    /// assert_eq!(Input::Element(1).append(Input::Element(2), &first), Input::Element(1));
    /// ```
    #[inline]
    pub fn append<S>(self, other: Input<E>, rule: &S) -> Input<E>
    where
        S: Semigroup<Input<E>> + ?Sized,
    {
        rule.op(self, other)
    }

    /// Finishes an iteratee with `a`, leaving this signal as its leftover.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iteratee::Input;
    ///
    /// let done = Input::Element('x').done(3);
    /// assert_eq!(done.done_a(), Some(&3));
    /// assert_eq!(done.input_element(), Some(&'x'));
    /// ```
    #[inline]
    pub fn done<A>(self, a: A) -> Iteratee<E, A> {
        Iteratee::done(a, self)
    }

    /// Maps the element with `f`, leaving `Empty` and `Eof` untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iteratee::Input;
    ///
    /// assert_eq!(Input::Element(2).map(|x| x + 1), Input::Element(3));
    /// assert_eq!(Input::<i32>::Empty.map(|x| x + 1), Input::Empty);
    /// ```
    #[inline]
    pub fn map<B, F>(self, f: F) -> Input<B>
    where
        F: FnOnce(E) -> B,
    {
        match self {
            Input::Empty => Input::Empty,
            Input::Eof => Input::Eof,
            Input::Element(e) => Input::Element(f(e)),
        }
    }

    /// Feeds the element to `f`; `Empty` and `Eof` short-circuit without calling it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iteratee::Input;
    ///
    /// let half = |x: i32| if x % 2 == 0 { Input::Element(x / 2) } else { Input::Empty };
    /// assert_eq!(Input::Element(8).and_then(half), Input::Element(4));
    /// assert_eq!(Input::Element(7).and_then(half), Input::Empty);
    /// assert_eq!(Input::Eof.and_then(half), Input::Eof);
    /// ```
    #[inline]
    pub fn and_then<B, F>(self, f: F) -> Input<B>
    where
        F: FnOnce(E) -> Input<B>,
    {
        match self {
            Input::Empty => Input::Empty,
            Input::Eof => Input::Eof,
            Input::Element(e) => f(e),
        }
    }

    /// Binds with `p`, then combines the original element with the result using `f`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iteratee::Input;
    ///
    /// let sum = Input::Element(2).and_then_with(|a| Input::Element(a * 10), |a, b| a + b);
    /// assert_eq!(sum, Input::Element(22));
    /// ```
    #[inline]
    pub fn and_then_with<B, C, P, F>(self, p: P, f: F) -> Input<C>
    where
        E: Clone,
        P: FnOnce(E) -> Input<B>,
        F: FnOnce(E, B) -> C,
    {
        self.and_then(|a| p(a.clone()).map(|b| f(a, b)))
    }

    /// Pairs two elements positionally; the result is `Element` only if both are.
    ///
    /// The left operand decides first: `Eof.zip(Empty)` is `Eof` and
    /// `Element(_).zip(Empty)` is `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iteratee::Input;
    ///
    /// assert_eq!(Input::Element(1).zip(Input::Element('a')), Input::Element((1, 'a')));
    /// assert_eq!(Input::Element(1).zip(Input::<char>::Eof), Input::Eof);
    /// ```
    #[inline]
    pub fn zip<B>(self, other: Input<B>) -> Input<(E, B)> {
        self.zip_with(other, |a, b| (a, b))
    }

    /// Combines two elements positionally with `f`.
    #[inline]
    pub fn zip_with<B, C, F>(self, other: Input<B>, f: F) -> Input<C>
    where
        F: FnOnce(E, B) -> C,
    {
        self.and_then(|a| other.map(|b| f(a, b)))
    }

    /// Wraps the signal in its own context: `Element(e)` becomes `Element(Element(e))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iteratee::Input;
    ///
    /// assert_eq!(Input::Element(5).duplicate(), Input::Element(Input::Element(5)));
    /// assert_eq!(Input::<i32>::Eof.duplicate(), Input::Eof);
    /// ```
    #[inline]
    pub fn duplicate(self) -> Input<Input<E>> {
        self.map(Input::Element)
    }

    /// Maps with a function that sees the whole wrapped signal rather than the bare element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iteratee::Input;
    ///
    /// let described = Input::Element(5).extend(|i| format!("{i:?}"));
    /// assert_eq!(described, Input::Element("Element(5)".to_string()));
    /// ```
    #[inline]
    pub fn extend<B, F>(self, f: F) -> Input<B>
    where
        F: FnOnce(Input<E>) -> B,
    {
        self.map(|e| f(Input::Element(e)))
    }

    /// Returns `true` if there is an element and it satisfies `predicate`.
    #[inline]
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&E) -> bool,
    {
        match self {
            Input::Element(e) => predicate(e),
            Input::Empty | Input::Eof => false,
        }
    }

    /// Returns `true` unless there is an element that fails `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iteratee::Input;
    ///
    /// assert!(Input::<i32>::Empty.all(|_| false));
    /// assert!(!Input::Element(1).all(|x| *x > 1));
    /// ```
    #[inline]
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&E) -> bool,
    {
        match self {
            Input::Element(e) => predicate(e),
            Input::Empty | Input::Eof => true,
        }
    }

    /// Iterates over the element, if any.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&E> {
        self.element().into_iter()
    }
}

impl<F> Input<F> {
    /// Applies a wrapped function to a wrapped argument.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iteratee::Input;
    ///
    /// let f = Input::Element(|x: i32| x * 3);
    /// assert_eq!(f.apply(Input::Element(4)), Input::Element(12));
    /// ```
    #[inline]
    pub fn apply<A, B>(self, arg: Input<A>) -> Input<B>
    where
        F: FnOnce(A) -> B,
    {
        self.and_then(|g| arg.map(g))
    }
}

impl<E> Input<Input<E>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iteratee::Input;
    ///
    /// assert_eq!(Input::Element(Input::Element(1)).flatten(), Input::Element(1));
    /// assert_eq!(Input::Element(Input::<i32>::Eof).flatten(), Input::Eof);
    /// assert_eq!(Input::<Input<i32>>::Empty.flatten(), Input::Empty);
    /// ```
    #[inline]
    pub fn flatten(self) -> Input<E> {
        self.and_then(|inner| inner)
    }
}

impl<E> From<Option<E>> for Input<E> {
    /// `Some(e)` becomes `Element(e)` and `None` becomes `Empty`.
    fn from(value: Option<E>) -> Self {
        match value {
            Some(e) => Input::Element(e),
            None => Input::Empty,
        }
    }
}

impl<E> IntoIterator for Input<E> {
    type Item = E;
    type IntoIter = std::option::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_element().into_iter()
    }
}

impl<'a, E> IntoIterator for &'a Input<E> {
    type Item = &'a E;
    type IntoIter = std::option::IntoIter<&'a E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E: fmt::Display> fmt::Display for Input<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Empty => write!(f, "<empty>"),
            Input::Eof => write!(f, "<eof>"),
            Input::Element(e) => write!(f, "{e}"),
        }
    }
}
