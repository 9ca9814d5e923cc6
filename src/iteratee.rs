//! Consumer states.
//!
//! An [`Iteratee<E, A>`] is either finished, holding its result and whatever
//! input it did not consume, or waiting on a pure function that turns the
//! next [`Input`] into the following state.
//!
//! Nothing here drives an iteratee. A driver calls
//! [`apply_cont`](Iteratee::apply_cont) with signals from its source until
//! [`is_done`](Iteratee::is_done) holds; see [`feed()`](crate::feed()) for an
//! in-memory version.
//!
//! # Examples
//!
//! ```rust
//! use iteratee::{Input, Iteratee};
//!
//! fn head() -> Iteratee<char, Option<char>> {
//!     Iteratee::cont(|input| match input {
//!         Input::Element(c) => Iteratee::done(Some(c), Input::Empty),
//!         Input::Eof => Iteratee::done(None, Input::Eof),
//!         Input::Empty => head(),
//!     })
//! }
//!
//! let next = head().apply_cont(Input::Element('h')).unwrap();
//! assert_eq!(next.done_a(), Some(&Some('h')));
//! ```

use std::{fmt, rc::Rc};

use either::Either;

use crate::Input;

/// The function a waiting iteratee advances with.
pub type Advance<E, A> = Rc<dyn Fn(Input<E>) -> Iteratee<E, A>>;

/// A consumer that is either finished or waiting for input.
pub enum Iteratee<E, A> {
    /// Finished with a result and the leftover input.
    Done(A, Input<E>),
    /// Waiting for the next signal.
    Cont(Advance<E, A>),
}

impl<E, A> Iteratee<E, A> {
    /// Create a finished iteratee.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iteratee::{Input, Iteratee};
    ///
    /// let it: Iteratee<u8, &str> = Iteratee::done("ok", Input::Eof);
    /// assert!(it.is_done_eof());
    /// ```
    #[inline]
    pub fn done(a: A, leftover: Input<E>) -> Self {
        Iteratee::Done(a, leftover)
    }

    /// Create a waiting iteratee from its advance function.
    ///
    /// `advance` should be pure; the same signal must always lead to the same state.
    #[inline]
    pub fn cont<F>(advance: F) -> Self
    where
        F: Fn(Input<E>) -> Iteratee<E, A> + 'static,
    {
        Iteratee::Cont(Rc::new(advance))
    }

    /// Returns `true` if the iteratee is `Done`.
    #[inline]
    pub const fn is_done(&self) -> bool {
        matches!(self, Iteratee::Done(..))
    }

    /// Returns `true` if the iteratee is `Cont`.
    #[inline]
    pub const fn is_cont(&self) -> bool {
        matches!(self, Iteratee::Cont(_))
    }

    /// Returns `true` if the iteratee is `Done` with an `Empty` leftover.
    #[inline]
    pub const fn is_done_empty(&self) -> bool {
        matches!(self, Iteratee::Done(_, Input::Empty))
    }

    /// Returns `true` if the iteratee is `Done` with an `Eof` leftover.
    #[inline]
    pub const fn is_done_eof(&self) -> bool {
        matches!(self, Iteratee::Done(_, Input::Eof))
    }

    /// Returns `true` if the iteratee is `Done` and left an element unconsumed.
    #[inline]
    pub const fn is_done_element(&self) -> bool {
        matches!(self, Iteratee::Done(_, Input::Element(_)))
    }

    /// Borrows the result and the leftover input of a finished iteratee.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iteratee::{Input, Iteratee};
    ///
    /// let it: Iteratee<i32, i32> = Iteratee::done(6, Input::Eof);
    /// assert_eq!(it.done_t(), Some((&6, &Input::Eof)));
    ///
    /// let waiting: Iteratee<i32, i32> = Iteratee::cont(|_| Iteratee::done(0, Input::Eof));
    /// assert_eq!(waiting.done_t(), None);
    /// ```
    #[inline]
    pub fn done_t(&self) -> Option<(&A, &Input<E>)> {
        match self {
            Iteratee::Done(a, i) => Some((a, i)),
            Iteratee::Cont(_) => None,
        }
    }

    /// Borrows the result of a finished iteratee.
    #[inline]
    pub fn done_a(&self) -> Option<&A> {
        self.done_t().map(|(a, _)| a)
    }

    /// Borrows the leftover input of a finished iteratee.
    #[inline]
    pub fn done_i(&self) -> Option<&Input<E>> {
        self.done_t().map(|(_, i)| i)
    }

    /// Borrows the unconsumed element left by a finished iteratee, if any.
    #[inline]
    pub fn input_element(&self) -> Option<&E> {
        self.done_i().and_then(Input::element)
    }

    /// Converts a finished iteratee into its result and leftover input.
    #[inline]
    pub fn into_done(self) -> Option<(A, Input<E>)> {
        match self {
            Iteratee::Done(a, i) => Some((a, i)),
            Iteratee::Cont(_) => None,
        }
    }

    /// Returns the advance function of a waiting iteratee.
    #[inline]
    pub fn cont_t(&self) -> Option<Advance<E, A>> {
        match self {
            Iteratee::Done(..) => None,
            Iteratee::Cont(k) => Some(Rc::clone(k)),
        }
    }

    /// Advances a waiting iteratee with `input`.
    ///
    /// Returns `None` if the iteratee is already `Done`; there is nothing to advance.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iteratee::{Input, Iteratee};
    ///
    /// let count: Iteratee<u8, usize> = Iteratee::cont(|i| Iteratee::done(i.iter().count(), Input::Empty));
    /// let done = count.apply_cont(Input::Element(1)).unwrap();
    /// assert_eq!(done.done_a(), Some(&1));
    /// assert!(done.apply_cont(Input::Eof).is_none());
    /// ```
    #[inline]
    pub fn apply_cont(&self, input: Input<E>) -> Option<Iteratee<E, A>> {
        match self {
            Iteratee::Done(..) => None,
            Iteratee::Cont(k) => Some(k(input)),
        }
    }

    /// Views the iteratee as a plain sum: `Left` when done, `Right` when waiting.
    #[inline]
    pub fn into_either(self) -> Either<(A, Input<E>), Advance<E, A>> {
        match self {
            Iteratee::Done(a, i) => Either::Left((a, i)),
            Iteratee::Cont(k) => Either::Right(k),
        }
    }
}

impl<E, A> From<Either<(A, Input<E>), Advance<E, A>>> for Iteratee<E, A> {
    fn from(value: Either<(A, Input<E>), Advance<E, A>>) -> Self {
        match value {
            Either::Left((a, i)) => Iteratee::Done(a, i),
            Either::Right(k) => Iteratee::Cont(k),
        }
    }
}

impl<E: Clone, A: Clone> Clone for Iteratee<E, A> {
    fn clone(&self) -> Self {
        match self {
            Iteratee::Done(a, i) => Iteratee::Done(a.clone(), i.clone()),
            Iteratee::Cont(k) => Iteratee::Cont(Rc::clone(k)),
        }
    }
}

impl<E: fmt::Debug, A: fmt::Debug> fmt::Debug for Iteratee<E, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Iteratee::Done(a, i) => f.debug_tuple("Done").field(a).field(i).finish(),
            Iteratee::Cont(_) => f.write_str("Cont(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum_from(total: i64) -> Iteratee<i64, i64> {
        Iteratee::cont(move |input| match input {
            Input::Element(x) => sum_from(total + x),
            Input::Empty => sum_from(total),
            Input::Eof => Iteratee::done(total, Input::Eof),
        })
    }

    #[test]
    fn test_done_introspection() {
        let it: Iteratee<char, u32> = Iteratee::done(7, Input::Element('z'));

        assert!(it.is_done());
        assert!(!it.is_cont());
        assert_eq!(it.done_a(), Some(&7));
        assert_eq!(it.done_i(), Some(&Input::Element('z')));
        assert_eq!(it.input_element(), Some(&'z'));
        assert!(it.cont_t().is_none());
        assert!(it.apply_cont(Input::Eof).is_none());
    }

    #[test]
    fn test_done_leftover_refinements() {
        let empty: Iteratee<u8, ()> = Iteratee::done((), Input::Empty);
        let eof: Iteratee<u8, ()> = Iteratee::done((), Input::Eof);
        let element: Iteratee<u8, ()> = Iteratee::done((), Input::Element(1));
        let waiting: Iteratee<u8, ()> = Iteratee::cont(|i| Iteratee::done((), i));

        assert!(empty.is_done_empty() && !empty.is_done_eof() && !empty.is_done_element());
        assert!(eof.is_done_eof() && !eof.is_done_empty() && !eof.is_done_element());
        assert!(element.is_done_element() && !element.is_done_empty() && !element.is_done_eof());
        assert!(!waiting.is_done_empty() && !waiting.is_done_eof() && !waiting.is_done_element());
        assert_eq!(waiting.input_element(), None);
    }

    #[test]
    fn test_cont_introspection() {
        let it: Iteratee<u8, u8> = Iteratee::cont(|i| Iteratee::done(i.element_or(0), Input::Empty));

        assert!(it.is_cont());
        assert!(!it.is_done());
        assert_eq!(it.done_t(), None);
        assert_eq!(it.done_a(), None);
        assert_eq!(it.done_i(), None);

        let k = it.cont_t().expect("waiting iteratee has an advance function");
        let via_k = k(Input::Element(4));
        let via_apply = it.apply_cont(Input::Element(4)).expect("waiting iteratee advances");
        assert_eq!(via_k.done_t(), via_apply.done_t());
    }

    #[test]
    fn test_apply_cont_is_repeatable() {
        let it = sum_from(10);
        let a = it.apply_cont(Input::Element(5)).and_then(|n| n.apply_cont(Input::Eof));
        let b = it.apply_cont(Input::Element(5)).and_then(|n| n.apply_cont(Input::Eof));
        assert_eq!(a.and_then(Iteratee::into_done), Some((15, Input::Eof)));
        assert_eq!(b.and_then(Iteratee::into_done), Some((15, Input::Eof)));
    }

    #[test]
    fn test_either_view_round_trips_state() {
        let done: Iteratee<u8, &str> = Iteratee::done("x", Input::Eof);
        assert!(matches!(done.into_either(), Either::Left(("x", Input::Eof))));

        let waiting = sum_from(0);
        let back = Iteratee::from(waiting.into_either());
        assert!(back.is_cont());
        let finished = back.apply_cont(Input::Eof).expect("still waiting");
        assert_eq!(finished.into_done(), Some((0, Input::Eof)));
    }

    #[test]
    fn test_input_done_builds_finished_state() {
        let it = Input::Element(3_u8).done("three");
        assert_eq!(it.into_done(), Some(("three", Input::Element(3))));
    }

    #[test]
    fn test_debug() {
        let done: Iteratee<u8, i32> = Iteratee::done(1, Input::Empty);
        assert_eq!(format!("{done:?}"), "Done(1, Empty)");
        assert_eq!(format!("{:?}", sum_from(0)), "Cont(..)");
    }
}
