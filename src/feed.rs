//! Applying a known sequence of signals to an iteratee.
//!
//! These helpers are the in-memory counterpart of an enumerator: they take
//! signals that already exist instead of reading them from a source. A real
//! driver would do the same loop, producing each signal as data arrives.

use tracing::{debug, trace};

use crate::{Input, Iteratee};

fn kind<E>(input: &Input<E>) -> &'static str {
    match input {
        Input::Empty => "empty",
        Input::Eof => "eof",
        Input::Element(_) => "element",
    }
}

/// Apply `signals` one by one until the iteratee is done.
///
/// Signals after the one that finished the iteratee are left in the
/// iterator. An iteratee that is already done is returned unchanged.
///
/// ```rust
/// use iteratee::{Input, Iteratee, feed};
///
/// fn first() -> Iteratee<u8, Option<u8>> {
///     Iteratee::cont(|input| match input {
///         Input::Element(x) => Iteratee::done(Some(x), Input::Empty),
///         Input::Eof => Iteratee::done(None, Input::Eof),
///         Input::Empty => first(),
///     })
/// }
///
/// let mut signals = vec![Input::Empty, Input::Element(4), Input::Element(5)].into_iter();
/// let it = feed(first(), &mut signals);
/// assert_eq!(it.into_done(), Some((Some(4), Input::Empty)));
/// assert_eq!(signals.next(), Some(Input::Element(5)));
/// ```
pub fn feed<E, A, I>(mut iteratee: Iteratee<E, A>, signals: I) -> Iteratee<E, A>
where
    I: IntoIterator<Item = Input<E>>,
{
    let mut signals = signals.into_iter();
    let mut applied = 0_usize;
    while let Iteratee::Cont(k) = &iteratee {
        let Some(input) = signals.next() else {
            trace!(applied, "signals exhausted while waiting");
            return iteratee;
        };
        trace!(applied, kind = kind(&input), "applying signal");
        let next = k(input);
        iteratee = next;
        applied += 1;
    }
    debug!(applied, leftover = iteratee.done_i().map(kind), "iteratee done");
    iteratee
}

/// Apply `signals`, then `Eof` if the iteratee is still waiting, and return its result.
///
/// Returns `None` when the iteratee does not finish even after `Eof`.
///
/// ```rust
/// use iteratee::{Input, Iteratee, run};
///
/// fn count(n: usize) -> Iteratee<char, usize> {
///     Iteratee::cont(move |input| match input {
///         Input::Element(_) => count(n + 1),
///         Input::Empty => count(n),
///         Input::Eof => Iteratee::done(n, Input::Eof),
///     })
/// }
///
/// assert_eq!(run(count(0), "abc".chars().map(Input::Element)), Some((3, Input::Eof)));
/// ```
pub fn run<E, A, I>(iteratee: Iteratee<E, A>, signals: I) -> Option<(A, Input<E>)>
where
    I: IntoIterator<Item = Input<E>>,
{
    let iteratee = feed(iteratee, signals);
    match iteratee {
        Iteratee::Done(a, i) => Some((a, i)),
        Iteratee::Cont(k) => {
            trace!("sending eof to finish");
            let finished = k(Input::Eof);
            if finished.is_cont() {
                debug!("iteratee still waiting after eof");
            }
            finished.into_done()
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

    fn sum() -> Iteratee<i64, i64> {
        sum_from(0)
    }

    fn take(n: usize) -> Iteratee<u8, Vec<u8>> {
        fn step(n: usize, acc: Vec<u8>) -> Iteratee<u8, Vec<u8>> {
            if acc.len() == n {
                return Iteratee::done(acc, Input::Empty);
            }
            Iteratee::cont(move |input| match input {
                Input::Element(x) => {
                    let mut acc = acc.clone();
                    acc.push(x);
                    step(n, acc)
                }
                Input::Empty => step(n, acc.clone()),
                Input::Eof => Iteratee::done(acc.clone(), Input::Eof),
            })
        }
        step(n, Vec::new())
    }

    #[test]
    fn test_sum_to_eof() {
        let signals = [Input::Element(1), Input::Element(2), Input::Element(3), Input::Eof];
        let it = feed(sum(), signals);
        assert!(it.is_done_eof());
        assert_eq!(it.into_done(), Some((6, Input::Eof)));
    }

    #[test]
    fn test_sum_of_nothing() {
        let it = feed(sum(), [Input::Eof]);
        assert_eq!(it.into_done(), Some((0, Input::Eof)));
    }

    #[test]
    fn test_empty_makes_no_progress() {
        let waiting = feed(sum_from(5), [Input::Empty, Input::Empty]);
        assert!(waiting.is_cont());

        let finished = waiting.apply_cont(Input::Eof).expect("still waiting");
        assert_eq!(finished.into_done(), Some((5, Input::Eof)));
    }

    #[test]
    fn test_feed_stops_at_done() {
        let mut signals = vec![
            Input::Element(1),
            Input::Element(2),
            Input::Element(3),
            Input::Element(4),
        ]
        .into_iter();
        let it = feed(take(2), &mut signals);
        assert_eq!(it.done_a(), Some(&vec![1, 2]));
        assert!(it.is_done_empty());
        assert_eq!(signals.collect::<Vec<_>>(), vec![Input::Element(3), Input::Element(4)]);
    }

    #[test]
    fn test_feed_done_is_unchanged() {
        let done: Iteratee<u8, &str> = Iteratee::done("early", Input::Element(9));
        let mut signals = vec![Input::Element(1)].into_iter();
        let it = feed(done, &mut signals);
        assert_eq!(it.into_done(), Some(("early", Input::Element(9))));
        assert_eq!(signals.len(), 1);
    }

    #[test]
    fn test_feed_without_signals_keeps_waiting() {
        let it = feed(sum(), std::iter::empty());
        assert!(it.is_cont());
    }

    #[test]
    fn test_run_sends_eof() {
        assert_eq!(run(sum(), [Input::Element(4), Input::Empty]), Some((4, Input::Eof)));
        assert_eq!(run(take(3), [Input::Element(7)]), Some((vec![7], Input::Eof)));
    }

    #[test]
    fn test_run_refusing_eof() {
        fn stubborn() -> Iteratee<u8, ()> {
            Iteratee::cont(|_| stubborn())
        }
        assert_eq!(run(stubborn(), [Input::Element(1), Input::Eof]), None);
    }

    #[test]
    fn test_replay_is_deterministic() {
        let signals = [Input::Element(10), Input::Empty, Input::Element(-3), Input::Eof];
        let start = sum();
        let a = feed(start.clone(), signals);
        let b = feed(start, signals);
        assert_eq!(a.into_done(), b.into_done());
    }
}
