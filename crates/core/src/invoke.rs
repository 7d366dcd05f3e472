use crate::Signature;

/// The contract every callable stored in a [`Function`](crate::Function)
/// satisfies.
///
/// `Args` is the argument tuple and `R` the return type of the signature.
/// The trait is object safe so a [`Function`](crate::Function) can hold any
/// implementor behind a `Box<dyn Invoke<Args, R>>`.
///
/// Closures and function pointers never need to implement this directly;
/// [`Callable`] wraps them in an implementation automatically. Implementing
/// `Invoke` by hand is useful for callables with a non-closure shape, which
/// can then be installed with [`Function::from_invoke`](crate::Function::from_invoke).
pub trait Invoke<Args, R> {
    /// Calls the wrapped value with `args` and returns its result.
    ///
    /// Whatever the wrapped value returns is passed through unchanged.
    fn invoke(&mut self, args: Args) -> R;

    /// Returns an independently owned copy with the same behavior.
    ///
    /// The copy must not share mutable state with `self`.
    fn duplicate(&self) -> Box<dyn Invoke<Args, R>>;
}

/// A value that can be stored in a [`Function`](crate::Function) with
/// signature `S`.
///
/// Implemented for every closure and function pointer that is
/// `FnMut(A1, .., An) -> R + Clone + 'static` when `S` is
/// `fn(A1, .., An) -> R`. `Clone` is required because copying a
/// [`Function`](crate::Function) copies the wrapped value.
///
/// # Example
///
/// ```
/// use callbox::{Callable, Invoke};
///
/// let mut boxed = Callable::<fn(i32, i32) -> i32>::into_invoke(|a: i32, b: i32| a * b);
/// assert_eq!(boxed.invoke((6, 7)), 42);
///
/// let mut copy = boxed.duplicate();
/// assert_eq!(copy.invoke((2, 3)), 6);
/// ```
pub trait Callable<S: Signature> {
    /// Moves `self` to the heap behind the [`Invoke`] contract.
    fn into_invoke(self) -> Box<dyn Invoke<S::Args, S::Output>>;
}
