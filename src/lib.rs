//! # Iteratee: value-based incremental stream consumers
//!
//! Describe how to consume a stream one signal at a time, as plain values
//! that an external driver advances.
//!
//! ## Core Types
//!
//! - **[`Input<E>`]**: what a consumer receives on each step: `Empty` (nothing yet),
//!   `Eof` (stream over) or `Element(e)`
//! - **[`Iteratee<E, A>`]**: a consumer that is either `Done` with a result and
//!   leftover input, or `Cont`, waiting on a function of the next signal
//!
//! ## Key Features
//!
//! - **Lawful combinators**: `map`, `and_then`, `zip`, `duplicate`/`extend` on [`Input`]
//! - **Traversals**: thread an [`Option`], [`Either`](either::Either), [`Vec`], [`NonEmpty`],
//!   pair, [`Func`] or [`Tree`] effect through a signal via one [`Effect`] capability
//! - **Explicit merging**: [`Input::append`] always takes a caller-supplied [`Semigroup`]
//! - **No hidden state**: an iteratee only moves when someone calls [`Iteratee::apply_cont`]
//!
//! ## Example
//!
//! ```
//! use iteratee::*;
//!
//! // Sum integers until the stream ends
//! fn sum(total: i64) -> Iteratee<i64, i64> {
//!     Iteratee::cont(move |input| match input {
//!         Input::Element(x) => sum(total + x),
//!         Input::Empty => sum(total),
//!         Input::Eof => Iteratee::done(total, Input::Eof),
//!     })
//! }
//!
//! let signals = [Input::Element(1), Input::Element(2), Input::Element(3), Input::Eof];
//! let it = feed(sum(0), signals);
//! assert_eq!(it.into_done(), Some((6, Input::Eof)));
//! ```
//!
//! ## Common Functions
//!
//! **Building consumers:**
//! - [`Iteratee::done(a, leftover)`](Iteratee::done) - A finished consumer
//! - [`Iteratee::cont(f)`](Iteratee::cont) - A consumer waiting on `f`
//!
//! **Advancing:**
//! - [`Iteratee::apply_cont(input)`](Iteratee::apply_cont) - One step, `None` when already done
//! - [`feed(iteratee, signals)`](feed()) - Apply signals until done
//! - [`run(iteratee, signals)`](run()) - Apply signals, then `Eof`, and return the result

mod algebra;
mod effect;
mod feed;
mod input;
mod iteratee;
pub mod prelude;

pub use algebra::*;
pub use effect::*;
pub use feed::*;
pub use input::*;
pub use iteratee::*;
