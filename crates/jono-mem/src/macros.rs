#[macro_export]
macro_rules! const_assert {
    ($check:expr $(,$msg:tt)*) => {
        const _: () = assert!($check $(,$msg)*);
    };
}

#[macro_export]
macro_rules! dyn_array {
    ($value:expr; $n:expr) => (
        ::core::iter::repeat_n($value, $n).collect::<$crate::DynArray<_>>()
    );
    [$($elem:expr),* $(,)?] => {
        $crate::DynArray::from([$($elem),*])
    };
}
