//! Bounded - macro for creating range-constrained numeric types
//!
//! Construction in const contexts panics on out-of-range values, so bad
//! constants fail at compile time.

/// Creates a bounded f32 type with min/max constraints.
///
/// # Example
/// ```ignore
/// bounded_f32!(Opacity, 0.0, 1.0);
/// const HALF: Opacity = Opacity::new(0.5);
/// ```
macro_rules! bounded_f32 {
    ($name:ident, $min:expr, $max:expr) => {
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
        pub struct $name(f32);

        impl $name {
            pub const MIN: f32 = $min;
            pub const MAX: f32 = $max;

            #[track_caller]
            pub const fn new(value: f32) -> Self {
                if value < Self::MIN || value > Self::MAX {
                    panic!(concat!(
                        stringify!($name),
                        " value out of bounds [",
                        stringify!($min),
                        ", ",
                        stringify!($max),
                        "]"
                    ));
                }
                Self(value)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self(Self::MAX)
            }
        }
    };
}

pub(crate) use bounded_f32;

#[cfg(test)]
mod tests {
    use super::*;

    bounded_f32!(TestPercent, 0.0, 100.0);

    const FIFTY: TestPercent = TestPercent::new(50.0);

    #[test]
    fn bounded_const_valid() {
        assert_eq!(FIFTY, TestPercent::new(50.0));
        assert!(FIFTY < TestPercent::new(TestPercent::MAX));
    }

    #[test]
    fn bounded_default_is_max() {
        assert_eq!(TestPercent::default(), TestPercent::new(100.0));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn bounded_rejects_invalid() {
        let _ = TestPercent::new(101.0);
    }
}
