mod sealed {
    pub trait Sealed {}
}

/// A fixed call signature, written as a function pointer type.
///
/// `Signature` is implemented for `fn(A1, .., An) -> R` with up to eight
/// parameters. The pointer type is only a marker that names the argument
/// list and return type; [`Function`](crate::Function) never stores it
/// unless a function pointer is the wrapped callable.
///
/// Argument and return types must be `'static`. Borrowed arguments need a
/// concrete lifetime (`fn(&'static str) -> usize`), since higher-ranked
/// signatures such as `fn(&str) -> usize` are not covered.
///
/// This trait is sealed.
pub trait Signature: sealed::Sealed + Copy + 'static {
    /// The arguments packed as a tuple, `()` for a nullary signature.
    type Args;

    /// The value produced by a call.
    type Output;
}

macro_rules! impl_signature {
    ($($arg:ident $binding:ident),*) => {
        impl<R: 'static, $($arg: 'static),*> sealed::Sealed for fn($($arg),*) -> R {}

        impl<R: 'static, $($arg: 'static),*> Signature for fn($($arg),*) -> R {
            type Args = ($($arg,)*);
            type Output = R;
        }
    };
}

for_each_arity!(impl_signature);

#[cfg(test)]
mod tests {
    use std::any::TypeId;

    use super::*;

    fn args_of<S: Signature>() -> TypeId
    where
        S::Args: 'static,
    {
        TypeId::of::<S::Args>()
    }

    fn output_of<S: Signature>() -> TypeId
    where
        S::Output: 'static,
    {
        TypeId::of::<S::Output>()
    }

    #[test]
    fn nullary_signature_has_unit_args() {
        assert_eq!(args_of::<fn() -> bool>(), TypeId::of::<()>());
        assert_eq!(output_of::<fn() -> bool>(), TypeId::of::<bool>());
    }

    #[test]
    fn arguments_pack_into_a_tuple() {
        assert_eq!(args_of::<fn(i32) -> i32>(), TypeId::of::<(i32,)>());
        assert_eq!(
            args_of::<fn(u8, String, f64)>(),
            TypeId::of::<(u8, String, f64)>()
        );
        assert_eq!(output_of::<fn(u8, String, f64)>(), TypeId::of::<()>());
    }

    #[test]
    fn widest_signature() {
        type Wide = fn(u8, u16, u32, u64, i8, i16, i32, i64) -> String;

        assert_eq!(
            args_of::<Wide>(),
            TypeId::of::<(u8, u16, u32, u64, i8, i16, i32, i64)>()
        );
        assert_eq!(output_of::<Wide>(), TypeId::of::<String>());
    }
}
