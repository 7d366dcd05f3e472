use thiserror::Error;

/// Errors returned when calling a [`Function`](crate::Function).
///
/// Failures raised by the wrapped callable are not represented here. A
/// callable returning a `Result` hands it back inside `Ok`, untouched, and a
/// panic unwinds through the call as if the callable had been called directly.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum FunctionError {
    /// The function holds no callable.
    #[error("called an unset function of type `{signature}`")]
    EmptyInvocation {
        /// The signature of the empty function, e.g. `fn(i32) -> i32`.
        signature: &'static str,
    },
}
