//! Numeric detection for numbers and numeric text.

/// Types that either are numbers or may spell one.
pub trait Numeric {
    /// Returns true when the value is, or fully parses as, a number.
    fn is_numeric(&self) -> bool;
}

impl Numeric for str {
    fn is_numeric(&self) -> bool {
        self.parse::<f64>().is_ok()
    }
}

impl Numeric for String {
    fn is_numeric(&self) -> bool {
        self.as_str().is_numeric()
    }
}

impl<T: Numeric + ?Sized> Numeric for &T {
    fn is_numeric(&self) -> bool {
        (**self).is_numeric()
    }
}

impl<T: Numeric + ?Sized> Numeric for Box<T> {
    fn is_numeric(&self) -> bool {
        (**self).is_numeric()
    }
}

macro_rules! impl_numeric_primitive {
    ($($ty:ty),*) => {
        $(
            impl Numeric for $ty {
                fn is_numeric(&self) -> bool {
                    true
                }
            }
        )*
    };
}

impl_numeric_primitive!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);
