//! Owned, clonable, type-erased callables.
//!
//! This crate provides [`Function`], a value that holds any callable matching a
//! fixed call signature and exposes a single way to invoke it:
//!
//! - [`Function`] — the owning box, empty or holding exactly one callable
//! - [`Signature`] — the call signature, written as a function pointer type
//!   such as `fn(i32, i32) -> i32`
//! - [`Callable`] — implemented for every closure or function pointer that
//!   can be stored under a given signature
//! - [`Invoke`] — the object-safe contract every stored callable satisfies
//! - [`FunctionError`] — returned when an empty box is called
//!
//! # Example
//!
//! ```
//! use callbox::{Function, FunctionError};
//!
//! fn add_one(x: i32) -> i32 {
//!     x + 1
//! }
//!
//! let mut f: Function<fn(i32) -> i32> = Function::new(add_one);
//! assert_eq!(f.call(5), Ok(6));
//!
//! let offset = 10;
//! f.set(move |x: i32| x + offset);
//! assert_eq!(f.call(5), Ok(15));
//!
//! f.reset();
//! assert!(matches!(f.call(5), Err(FunctionError::EmptyInvocation { .. })));
//! ```

#[macro_use]
mod macros;

mod adapter;
mod error;
mod function;
mod invoke;
mod signature;

pub use error::FunctionError;
pub use function::Function;
pub use invoke::{Callable, Invoke};
pub use signature::Signature;

#[cfg(doctest)]
#[doc = include_str!("../../../README.md")]
struct ReadmeDoctests;
