/// Invokes `$generator` once per supported arity.
///
/// Each invocation receives a comma-separated list of `Type binding` pairs,
/// from the empty list up to eight parameters.
macro_rules! for_each_arity {
    ($generator:ident) => {
        $generator!();
        $generator!(A1 a1);
        $generator!(A1 a1, A2 a2);
        $generator!(A1 a1, A2 a2, A3 a3);
        $generator!(A1 a1, A2 a2, A3 a3, A4 a4);
        $generator!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5);
        $generator!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6);
        $generator!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7);
        $generator!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7, A8 a8);
    };
}

#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($($arg:tt)*) => {
        ::tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! debug_event {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug_event {
    ($($arg:tt)*) => {};
}
