//! Associative merge capabilities.
//!
//! [`Semigroup`] and [`Monoid`] are passed around as values rather than
//! implemented on the merged type, so the same type can be combined in
//! several ways and every call site has to pick one explicitly. In
//! particular there is no built-in instance for [`Input`](crate::Input):
//! [`Input::append`](crate::Input::append) always takes the rule from the
//! caller.
//!
//! ```rust
//! use iteratee::{Monoid, Semigroup, monoid, semigroup};
//!
//! let max = semigroup(|a: i32, b: i32| a.max(b));
//! assert_eq!(max.op(3, 7), 7);
//!
//! let concat = monoid(String::new, |a: String, b: String| a + &b);
//! assert_eq!(concat.op(concat.empty(), "x".to_string()), "x");
//! ```

/// An associative binary operation on `T`.
///
/// Implementations must satisfy `op(op(a, b), c) == op(a, op(b, c))`.
pub trait Semigroup<T> {
    /// Combine two values.
    fn op(&self, a: T, b: T) -> T;
}

/// A [`Semigroup`] with an identity element.
///
/// Implementations must satisfy `op(empty(), a) == a == op(a, empty())`.
pub trait Monoid<T>: Semigroup<T> {
    /// The identity element.
    fn empty(&self) -> T;
}

impl<T, S> Semigroup<T> for &S
where
    S: Semigroup<T> + ?Sized,
{
    fn op(&self, a: T, b: T) -> T {
        (**self).op(a, b)
    }
}

impl<T, M> Monoid<T> for &M
where
    M: Monoid<T> + ?Sized,
{
    fn empty(&self) -> T {
        (**self).empty()
    }
}

/// A semigroup built from a closure.
#[derive(Clone, Copy)]
pub struct FromFn<F>(F);

impl<T, F> Semigroup<T> for FromFn<F>
where
    F: Fn(T, T) -> T,
{
    fn op(&self, a: T, b: T) -> T {
        (self.0)(a, b)
    }
}

/// Create a semigroup from an associative closure.
///
/// ```rust
/// use iteratee::{Semigroup, semigroup};
///
/// let sum = semigroup(|a: u32, b: u32| a + b);
/// assert_eq!(sum.op(2, 3), 5);
/// ```
pub fn semigroup<T, F>(f: F) -> FromFn<F>
where
    F: Fn(T, T) -> T,
{
    FromFn(f)
}

/// A monoid built from an identity-producing closure and a combining closure.
#[derive(Clone, Copy)]
pub struct MonoidFn<Z, F> {
    empty: Z,
    op: F,
}

impl<T, Z, F> Semigroup<T> for MonoidFn<Z, F>
where
    F: Fn(T, T) -> T,
{
    fn op(&self, a: T, b: T) -> T {
        (self.op)(a, b)
    }
}

impl<T, Z, F> Monoid<T> for MonoidFn<Z, F>
where
    Z: Fn() -> T,
    F: Fn(T, T) -> T,
{
    fn empty(&self) -> T {
        (self.empty)()
    }
}

/// Create a monoid from its identity and its associative operation.
///
/// ```rust
/// use iteratee::{Monoid, Semigroup, monoid};
///
/// let log = monoid(Vec::new, |mut a: Vec<u32>, b: Vec<u32>| {
///     a.extend(b);
///     a
/// });
/// assert_eq!(log.op(vec![1], log.empty()), vec![1]);
/// ```
pub fn monoid<T, Z, F>(empty: Z, op: F) -> MonoidFn<Z, F>
where
    Z: Fn() -> T,
    F: Fn(T, T) -> T,
{
    MonoidFn { empty, op }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    #[test]
    fn test_semigroup_from_closure() {
        let product = semigroup(|a: i64, b: i64| a * b);
        assert_eq!(product.op(6, 7), 42);
    }

    #[test]
    fn test_monoid_identity() {
        let sum = monoid(|| 0_i64, |a: i64, b: i64| a + b);
        assert_eq!(sum.op(sum.empty(), 5), 5);
        assert_eq!(sum.op(5, sum.empty()), 5);
    }

    #[test]
    fn test_reference_forwards() {
        let concat = monoid(String::new, |a: String, b: String| a + &b);
        let by_ref: &dyn Monoid<String> = &concat;
        assert_eq!(by_ref.op("ab".into(), "cd".into()), "abcd");
        assert_eq!(by_ref.empty(), "");
    }

    #[test]
    fn test_concat_is_associative() {
        fn p(a: String, b: String, c: String) -> bool {
            let concat = semigroup(|a: String, b: String| a + &b);
            concat.op(concat.op(a.clone(), b.clone()), c.clone()) == concat.op(a, concat.op(b, c))
        }
        quickcheck(p as fn(String, String, String) -> bool);
    }
}
