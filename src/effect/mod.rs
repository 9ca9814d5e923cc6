//! Traversing an [`Input`] through an effect.
//!
//! An input signal holds at most one element, so threading an effect
//! through it only takes two things from the effect: a way to lift a plain
//! value into it (its unit) and a way to map over its contents. The
//! [`Effect`] trait captures exactly that, and [`Input::traverse`] is written
//! once against it.
//!
//! | Effect | Type | Traversal |
//! |---|---|---|
//! | optional value | [`Option<B>`] | [`Input::traverse_option`] |
//! | disjoint union | [`Either<X, B>`] | [`Input::traverse_either`] |
//! | list | [`Vec<B>`] | [`Input::traverse_vec`] |
//! | non-empty list | [`NonEmpty<B>`] | [`Input::traverse_non_empty`] |
//! | pair with a monoid | `(X, B)` | [`Input::traverse_pair`] |
//! | function space | [`Func<X, B>`] | [`Input::traverse_func`] |
//! | tree | [`Tree<B>`] | [`Input::traverse_tree`] |
//!
//! `Empty` and `Eof` traverse to the effect's unit without calling the
//! function; `Element(e)` maps `Element` over `f(e)`.
//!
//! ```rust
//! use iteratee::Input;
//!
//! let parse = |s: &str| s.parse::<u8>().ok();
//! assert_eq!(Input::Element("7").traverse_option(parse), Some(Input::Element(7)));
//! assert_eq!(Input::Element("x").traverse_option(parse), None);
//! assert_eq!(Input::Eof.traverse_option(parse), Some(Input::Eof));
//! ```

use std::rc::Rc;

use either::Either;

use crate::{Input, Monoid};

mod non_empty;
mod tree;

pub use non_empty::NonEmpty;
pub use tree::Tree;

/// A function value, used as the "reader" effect.
pub type Func<X, B> = Rc<dyn Fn(X) -> B>;

/// Wrap a closure as a [`Func`].
///
/// ```rust
/// use iteratee::func;
///
/// let add = func(|x: i32| x + 1);
/// assert_eq!(add(1), 2);
/// ```
pub fn func<X, B, F>(f: F) -> Func<X, B>
where
    F: Fn(X) -> B + 'static,
{
    Rc::new(f)
}

/// An effect value `F<T>` that can be rebuilt around a `B`.
///
/// `Cx` is whatever the unit needs besides the value; it is `()` for every
/// effect except the pair, which needs a [`Monoid`] for its first half.
///
/// The unit receives a constructor instead of a value, so an effect that
/// hands the value out more than once (a [`Func`]) rebuilds it on each call
/// and `B` never has to be `Clone`.
///
/// Implementations must be lawful: `fmap` with identity changes nothing, and
/// `fmap(pure(|| x), g) == pure(|| g(x))`.
pub trait Effect<B, Cx: ?Sized = ()>: Sized {
    /// The value type inside the effect.
    type Item;
    /// The same effect around `B`.
    type Output;

    /// Lift the value `make` builds into the effect.
    fn pure(cx: &Cx, make: fn() -> B) -> Self::Output;

    /// Map the contents of the effect.
    fn fmap(self, g: fn(Self::Item) -> B) -> Self::Output;
}

impl<T, B> Effect<B> for Option<T> {
    type Item = T;
    type Output = Option<B>;

    fn pure(_: &(), make: fn() -> B) -> Option<B> {
        Some(make())
    }

    fn fmap(self, g: fn(T) -> B) -> Option<B> {
        self.map(g)
    }
}

impl<X, T, B> Effect<B> for Either<X, T> {
    type Item = T;
    type Output = Either<X, B>;

    fn pure(_: &(), make: fn() -> B) -> Either<X, B> {
        Either::Right(make())
    }

    fn fmap(self, g: fn(T) -> B) -> Either<X, B> {
        self.map_right(g)
    }
}

impl<T, B> Effect<B> for Vec<T> {
    type Item = T;
    type Output = Vec<B>;

    fn pure(_: &(), make: fn() -> B) -> Vec<B> {
        vec![make()]
    }

    fn fmap(self, g: fn(T) -> B) -> Vec<B> {
        self.into_iter().map(g).collect()
    }
}

impl<X, T, B, M> Effect<B, M> for (X, T)
where
    M: Monoid<X> + ?Sized,
{
    type Item = T;
    type Output = (X, B);

    fn pure(monoid: &M, make: fn() -> B) -> (X, B) {
        (monoid.empty(), make())
    }

    fn fmap(self, g: fn(T) -> B) -> (X, B) {
        (self.0, g(self.1))
    }
}

impl<X, T, B> Effect<B> for Func<X, T>
where
    X: 'static,
    T: 'static,
    B: 'static,
{
    type Item = T;
    type Output = Func<X, B>;

    fn pure(_: &(), make: fn() -> B) -> Func<X, B> {
        Rc::new(move |_: X| make())
    }

    fn fmap(self, g: fn(T) -> B) -> Func<X, B> {
        Rc::new(move |x: X| g(self(x)))
    }
}

impl<E> Input<E> {
    /// Threads the effect produced by `f` through the element.
    ///
    /// `Empty` and `Eof` become the effect's unit around themselves without
    /// calling `f`. The named `traverse_*` methods fix the effect and the
    /// context for the common cases.
    ///
    /// ```rust
    /// use iteratee::Input;
    ///
    /// let out: Vec<Input<char>> = Input::Element("ab").traverse(&(), |s: &str| s.chars().collect::<Vec<_>>());
    /// assert_eq!(out, vec![Input::Element('a'), Input::Element('b')]);
    /// ```
    pub fn traverse<T, B, Cx, F>(self, cx: &Cx, f: F) -> T::Output
    where
        Cx: ?Sized,
        T: Effect<Input<B>, Cx, Item = B>,
        F: FnOnce(E) -> T,
    {
        match self {
            Input::Empty => T::pure(cx, || Input::Empty),
            Input::Eof => T::pure(cx, || Input::Eof),
            Input::Element(e) => f(e).fmap(Input::Element),
        }
    }

    /// Traverses through an optional value.
    pub fn traverse_option<B, F>(self, f: F) -> Option<Input<B>>
    where
        F: FnOnce(E) -> Option<B>,
    {
        self.traverse(&(), f)
    }

    /// Traverses through a disjoint union, stopping at the first `Left`.
    ///
    /// ```rust
    /// use either::Either;
    /// use iteratee::Input;
    ///
    /// let check = |x: i32| if x > 0 { Either::Right(x) } else { Either::Left("not positive") };
    /// assert_eq!(Input::Element(3).traverse_either(check), Either::Right(Input::Element(3)));
    /// assert_eq!(Input::Element(0).traverse_either(check), Either::Left("not positive"));
    /// assert_eq!(Input::Empty.traverse_either(check), Either::Right(Input::Empty));
    /// ```
    pub fn traverse_either<X, B, F>(self, f: F) -> Either<X, Input<B>>
    where
        F: FnOnce(E) -> Either<X, B>,
    {
        self.traverse(&(), f)
    }

    /// Traverses through a list: one signal per alternative.
    pub fn traverse_vec<B, F>(self, f: F) -> Vec<Input<B>>
    where
        F: FnOnce(E) -> Vec<B>,
    {
        self.traverse(&(), f)
    }

    /// Traverses through a non-empty list.
    pub fn traverse_non_empty<B, F>(self, f: F) -> NonEmpty<Input<B>>
    where
        F: FnOnce(E) -> NonEmpty<B>,
    {
        self.traverse(&(), f)
    }

    /// Traverses through a pair whose first half accumulates with `monoid`.
    ///
    /// `Empty` and `Eof` pair with the monoid's identity.
    ///
    /// ```rust
    /// use iteratee::{Input, monoid};
    ///
    /// let count = monoid(|| 0_usize, |a: usize, b: usize| a + b);
    /// let tag = |s: &str| (s.len(), s.to_uppercase());
    /// assert_eq!(Input::Element("abc").traverse_pair(&count, tag), (3, Input::Element("ABC".to_string())));
    /// assert_eq!(Input::Eof.traverse_pair(&count, tag), (0, Input::Eof));
    /// ```
    pub fn traverse_pair<X, B, M, F>(self, monoid: &M, f: F) -> (X, Input<B>)
    where
        M: Monoid<X> + ?Sized,
        F: FnOnce(E) -> (X, B),
    {
        self.traverse(monoid, f)
    }

    /// Traverses through the function space: the result reads the same
    /// environment the produced function does.
    ///
    /// ```rust
    /// use iteratee::{Input, func};
    ///
    /// let scaled = Input::Element(2).traverse_func(|x: i32| func(move |k: i32| x * k));
    /// assert_eq!(scaled(10), Input::Element(20));
    ///
    /// let eof = Input::Eof.traverse_func(|x: i32| func(move |k: i32| x * k));
    /// assert_eq!(eof(10), Input::Eof);
    /// ```
    pub fn traverse_func<X, B, F>(self, f: F) -> Func<X, Input<B>>
    where
        X: 'static,
        B: 'static,
        F: FnOnce(E) -> Func<X, B>,
    {
        self.traverse(&(), f)
    }

    /// Traverses through a tree, wrapping every node of the produced tree.
    pub fn traverse_tree<B, F>(self, f: F) -> Tree<Input<B>>
    where
        F: FnOnce(E) -> Tree<B>,
    {
        self.traverse(&(), f)
    }
}
