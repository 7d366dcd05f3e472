use crate::{Callable, Invoke};

/// Holds one callable by value and forwards the [`Invoke`] contract to it.
///
/// This struct is used internally by [`Callable::into_invoke`].
pub(crate) struct Adapter<F> {
    callable: F,
}

impl<F> Adapter<F> {
    pub(crate) const fn new(callable: F) -> Self {
        Self { callable }
    }
}

macro_rules! impl_adapter {
    ($($arg:ident $binding:ident),*) => {
        impl<F, R, $($arg),*> Invoke<($($arg,)*), R> for Adapter<F>
        where
            F: FnMut($($arg),*) -> R + Clone + 'static,
        {
            fn invoke(&mut self, ($($binding,)*): ($($arg,)*)) -> R {
                (self.callable)($($binding),*)
            }

            fn duplicate(&self) -> Box<dyn Invoke<($($arg,)*), R>> {
                Box::new(Adapter::new(self.callable.clone()))
            }
        }

        impl<F, R, $($arg),*> Callable<fn($($arg),*) -> R> for F
        where
            F: FnMut($($arg),*) -> R + Clone + 'static,
            R: 'static,
            $($arg: 'static,)*
        {
            fn into_invoke(self) -> Box<dyn Invoke<($($arg,)*), R>> {
                Box::new(Adapter::new(self))
            }
        }
    };
}

for_each_arity!(impl_adapter);
