//! Commonly used imports
//!
//! Use `use iteratee::prelude::*;` for quick access to the most common types and functions.
//!
//! ```rust
//! use iteratee::prelude::*;
//!
//! let last = semigroup(|_: Input<u8>, b: Input<u8>| b);
//! assert_eq!(Input::Element(1).append(Input::Eof, &last), Input::Eof);
//! ```

// Core types
pub use crate::{Input, Iteratee};

// Capabilities
pub use crate::{Effect, Monoid, Semigroup};

// Most common constructors
pub use crate::{func, monoid, semigroup};

// Driving
pub use crate::{feed, run};
