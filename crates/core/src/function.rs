use std::{any::type_name, fmt, mem};

use crate::{Callable, FunctionError, Invoke, Signature};

type Erased<S> = Box<dyn Invoke<<S as Signature>::Args, <S as Signature>::Output>>;

/// An owned, clonable, type-erased callable with signature `S`.
///
/// A `Function` is either empty or holds exactly one callable on the heap.
/// Any closure or function pointer matching `S` can be stored, and every
/// stored callable is called the same way:
///
/// - [`Function::call()`] – Call with the signature's arguments.
/// - [`Function::call_with()`] – Call with the arguments packed in a tuple.
///
/// ## Ownership
///
/// - Cloning duplicates the wrapped callable, so the clone never shares
///   mutable state with the original.
/// - [`Function::take()`] and [`Function::assign_from()`] move the content out
///   of another box, leaving it empty but still usable.
/// - Replacing content ([`Function::set()`], [`Clone::clone_from()`]) builds
///   the new callable before releasing the old one, so a panic while building
///   leaves the previous content in place.
///
/// A `Function` is neither `Send` nor `Sync`.
///
/// # Example
///
/// ```
/// use callbox::Function;
///
/// let mut total = 0;
/// let mut accumulate: Function<fn(i32) -> i32> = Function::new(move |x: i32| {
///     total += x;
///     total
/// });
///
/// assert_eq!(accumulate.call(2), Ok(2));
/// assert_eq!(accumulate.call(3), Ok(5));
///
/// let mut copy = accumulate.clone();
/// assert_eq!(copy.call(10), Ok(15));
/// assert_eq!(accumulate.call(1), Ok(6));
/// ```
pub struct Function<S: Signature> {
    callable: Option<Erased<S>>,
}

impl<S: Signature> Function<S> {
    /// Creates a function that holds nothing.
    #[must_use]
    pub const fn empty() -> Self {
        Self { callable: None }
    }

    /// Creates a function that owns `callable`.
    pub fn new<F: Callable<S>>(callable: F) -> Self {
        Self::from_invoke(callable.into_invoke())
    }

    /// Creates a function from an already erased callable.
    ///
    /// This is the way to store a hand-written [`Invoke`] implementation.
    pub fn from_invoke(callable: Erased<S>) -> Self {
        trace_event!(signature = type_name::<S>(), "installed callable");
        Self {
            callable: Some(callable),
        }
    }

    /// Creates a function from an optional function pointer.
    ///
    /// `None` yields an empty function.
    ///
    /// # Example
    ///
    /// ```
    /// use callbox::Function;
    ///
    /// fn add_one(x: i32) -> i32 {
    ///     x + 1
    /// }
    ///
    /// let f = Function::<fn(i32) -> i32>::from_ptr(Some(add_one));
    /// assert!(f.is_set());
    ///
    /// let g = Function::<fn(i32) -> i32>::from_ptr(None);
    /// assert!(g.is_empty());
    /// ```
    pub fn from_ptr(pointer: Option<S>) -> Self
    where
        S: Callable<S>,
    {
        pointer.map_or_else(Self::empty, Self::new)
    }

    /// Replaces the content with `callable`.
    ///
    /// The previous content, if any, is released after the new callable has
    /// been stored.
    pub fn set<F: Callable<S>>(&mut self, callable: F) {
        let incoming = callable.into_invoke();
        self.install(Some(incoming));
    }

    /// Replaces the content with an optional function pointer.
    ///
    /// `None` leaves the function empty.
    pub fn set_ptr(&mut self, pointer: Option<S>)
    where
        S: Callable<S>,
    {
        let incoming = pointer.map(<S as Callable<S>>::into_invoke);
        self.install(incoming);
    }

    /// Stores `callable` and returns the previous content as its own function.
    #[must_use = "use `set` to discard the previous content"]
    pub fn replace<F: Callable<S>>(&mut self, callable: F) -> Self {
        let incoming = callable.into_invoke();
        trace_event!(signature = type_name::<S>(), "replaced callable");
        Self {
            callable: self.callable.replace(incoming),
        }
    }

    /// Moves the content out, leaving this function empty.
    #[must_use = "use `reset` to discard the content"]
    pub fn take(&mut self) -> Self {
        Self {
            callable: self.callable.take(),
        }
    }

    /// Moves the content of `source` into this function.
    ///
    /// The previous content is released and `source` is left empty.
    pub fn assign_from(&mut self, source: &mut Self) {
        let incoming = source.callable.take();
        self.install(incoming);
    }

    /// Releases the content, leaving this function empty.
    pub fn reset(&mut self) {
        self.install(None);
    }

    /// Returns `true` if this function holds a callable.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.callable.is_some()
    }

    /// Returns `true` if this function holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callable.is_none()
    }

    /// Calls the wrapped callable with its arguments packed in a tuple.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionError::EmptyInvocation`] if this function is empty.
    /// The callable is not touched in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use callbox::Function;
    ///
    /// let mut join: Function<fn(String, char) -> String> =
    ///     Function::new(|mut s: String, c: char| {
    ///         s.push(c);
    ///         s
    ///     });
    ///
    /// assert_eq!(join.call_with(("ab".to_string(), 'c')).unwrap(), "abc");
    /// ```
    pub fn call_with(&mut self, args: S::Args) -> Result<S::Output, FunctionError> {
        let Some(callable) = self.callable.as_mut() else {
            debug_event!(signature = type_name::<S>(), "called an empty function");
            return Err(FunctionError::EmptyInvocation {
                signature: type_name::<S>(),
            });
        };
        Ok(callable.invoke(args))
    }

    /// Swaps in `incoming`, then drops whatever was held before.
    fn install(&mut self, incoming: Option<Erased<S>>) {
        if incoming.is_some() {
            trace_event!(signature = type_name::<S>(), "installed callable");
        }
        let previous = mem::replace(&mut self.callable, incoming);
        if previous.is_some() {
            trace_event!(signature = type_name::<S>(), "released callable");
        }
    }
}

macro_rules! impl_call {
    ($($arg:ident $binding:ident),*) => {
        impl<R: 'static, $($arg: 'static),*> Function<fn($($arg),*) -> R> {
            /// Calls the wrapped callable with the given arguments.
            ///
            /// # Errors
            ///
            /// Returns [`FunctionError::EmptyInvocation`] if this function is empty.
            pub fn call(&mut self, $($binding: $arg),*) -> Result<R, FunctionError> {
                self.call_with(($($binding,)*))
            }
        }
    };
}

for_each_arity!(impl_call);

impl<S: Signature> Default for Function<S> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<S: Signature> Clone for Function<S> {
    fn clone(&self) -> Self {
        Self {
            callable: self.callable.as_ref().map(|callable| {
                trace_event!(signature = type_name::<S>(), "duplicated callable");
                callable.duplicate()
            }),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        let incoming = source.callable.as_ref().map(|callable| callable.duplicate());
        self.install(incoming);
    }
}

impl<S: Signature> Drop for Function<S> {
    fn drop(&mut self) {
        if self.callable.is_some() {
            trace_event!(signature = type_name::<S>(), "released callable");
        }
    }
}

impl<S: Signature> fmt::Debug for Function<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("signature", &type_name::<S>())
            .field("is_set", &self.is_set())
            .finish()
    }
}

impl<S: Signature> From<&Function<S>> for bool {
    fn from(function: &Function<S>) -> Self {
        function.is_set()
    }
}
