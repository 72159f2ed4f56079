use super::Float;

/// A trait unifying the methods for comparing two floating point numbers. This
/// is implemented for [`NearlyEqualStrategy`] and for `Fn(T, T) -> bool`
/// closures (custom comparison methods).
///
/// <div class="warning">
///
/// **Warning**
///
/// This is an implementation detail and *should not* be called directly! Use
/// [`is_fp_eq`] or [`assert_fp_eq`] instead.
///
/// </div>
#[doc(hidden)]
pub trait NearlyEqualMethod<T> {
    fn nearly_equal_float(&self, a: T, b: T) -> bool;
}

/// The provided floating point comparison methods.
#[doc(hidden)]
pub enum NearlyEqualStrategy<T> {
    /// Compare using relative error with a tolerance of `eps`
    Relative { eps: T },
    /// Compare using absolute error with a tolerance of `eps`
    Absolute { eps: T },
}

impl<T: Float> NearlyEqualMethod<T> for NearlyEqualStrategy<T> {
    /// Relative error port courtesy of
    /// <https://floating-point-gui.de/errors/comparison/>
    fn nearly_equal_float(&self, a: T, b: T) -> bool {
        match self {
            NearlyEqualStrategy::Relative { eps } => {
                let abs_a = a.abs();
                let abs_b = b.abs();
                let diff = (a - b).abs();

                if a == b {
                    // handles infinities, including the semiring zero of log
                    // space
                    true
                } else if a == T::ZERO || b == T::ZERO || (abs_a + abs_b < T::MIN_POSITIVE) {
                    diff < *eps * T::MIN_POSITIVE
                } else {
                    diff / (abs_a + abs_b).min(T::MAX) < *eps
                }
            }
            NearlyEqualStrategy::Absolute { eps } => a == b || (a - b).abs() < *eps,
        }
    }
}

impl<T: Float, F: Fn(T, T) -> bool> NearlyEqualMethod<T> for F {
    fn nearly_equal_float(&self, a: T, b: T) -> bool {
        self(a, b)
    }
}

/// Equality comparisons for types containing floating point numbers. `T` is
/// the underlying float (and the type of the tolerance).
///
/// The second value of the returned tuple holds the first pair of floats that
/// differed, or `None` if the two values differ structurally (such as vectors
/// of different length).
#[doc(hidden)]
pub trait NearlyEqual<T> {
    fn nearly_equal<M: NearlyEqualMethod<T>>(&self, b: &Self, method: &M) -> (bool, Option<(T, T)>);
}

macro_rules! impl_float_nearly_equal {
    {$($ty:ty),* } => {
        $(
            impl NearlyEqual<$ty> for $ty {
                #[inline]
                fn nearly_equal<M: NearlyEqualMethod<$ty>>(&self, b: &Self, strategy: &M) -> (bool, Option<($ty, $ty)>) {
                    if strategy.nearly_equal_float(*self, *b) {
                        (true, None)
                    } else {
                        (false, Some((*self, *b)))
                    }
                }
            }
        )*
    }
}

impl_float_nearly_equal!(f32, f64);

impl<T, S: NearlyEqual<T>> NearlyEqual<T> for Option<S> {
    #[inline]
    fn nearly_equal<M: NearlyEqualMethod<T>>(&self, b: &Self, strategy: &M) -> (bool, Option<(T, T)>) {
        match (self, b) {
            (Some(x), Some(y)) => x.nearly_equal(y, strategy),
            (None, None) => (true, None),
            _ => (false, None),
        }
    }
}

impl<T, S: NearlyEqual<T>> NearlyEqual<T> for [S] {
    #[inline]
    fn nearly_equal<M: NearlyEqualMethod<T>>(&self, b: &Self, strategy: &M) -> (bool, Option<(T, T)>) {
        if self.len() != b.len() {
            return (false, None);
        }
        for (x, y) in self.iter().zip(b) {
            let (eq, vals) = x.nearly_equal(y, strategy);
            if !eq {
                return (false, vals);
            }
        }
        (true, None)
    }
}

impl<T, S: NearlyEqual<T>, const N: usize> NearlyEqual<T> for [S; N] {
    #[inline]
    fn nearly_equal<M: NearlyEqualMethod<T>>(&self, b: &Self, strategy: &M) -> (bool, Option<(T, T)>) {
        self.as_slice().nearly_equal(b.as_slice(), strategy)
    }
}

impl<T, S: NearlyEqual<T>> NearlyEqual<T> for Vec<S> {
    #[inline]
    fn nearly_equal<M: NearlyEqualMethod<T>>(&self, b: &Self, strategy: &M) -> (bool, Option<(T, T)>) {
        self.as_slice().nearly_equal(b.as_slice(), strategy)
    }
}

/// Assert that two floating point values (or semiring values, or collections
/// of either) are approximately equal.
///
/// ## Comparison Options
///
/// The default tolerance is $\epsilon=10^{-8}$ using relative error (see
/// <https://floating-point-gui.de/errors/comparison/>). A third argument sets
/// the tolerance:
/// ```
/// # use scanalign::assert_fp_eq;
/// assert_fp_eq!(3.0, 2.99999, 1e-4);
/// ```
///
/// The method can be changed to absolute error (`@absolute`) or a custom
/// closure (`@custom`):
/// ```
/// # use scanalign::assert_fp_eq;
/// assert_fp_eq!(@absolute, 1e-10, 2e-10, 1e-8);
/// assert_fp_eq!(@custom, 3.0, 1.0 + 2.0, |x: f64, y: f64| (x - y).abs() < 1e-12);
/// ```
///
/// ## Allowed Arguments
///
/// `f32` and `f64`, along with `Option<T>`, `[T; N]`, and `Vec<T>` of
/// comparable types. All of the semirings in
/// [`semiring`](crate::semiring) can be compared as well.
#[macro_export]
macro_rules! assert_fp_eq {
    ($(@$method:tt,)? $a:expr, $b:expr) => {
        $crate::assert_fp_eq!($(@$method,)? $a, $b, 1e-8);
    };
    ($(@relative,)? $a:expr, $b:expr, $epsilon:expr) => {
        $crate::assert_fp_eq!(@strategy, $a, $b, $epsilon, $crate::math::NearlyEqualStrategy::Relative { eps: $epsilon });
    };
    (@absolute, $a:expr, $b:expr, $epsilon:expr) => {
        $crate::assert_fp_eq!(@strategy, $a, $b, $epsilon, $crate::math::NearlyEqualStrategy::Absolute { eps: $epsilon });
    };
    (@custom, $a:expr, $b:expr, $closure:expr) => {
        $crate::assert_fp_eq!(@strategy, $a, $b, "custom", $closure);
    };
    (@strategy, $a:expr, $b:expr, $epsilon:expr, $strategy:expr) => {
        let (eq, vals) = $crate::math::NearlyEqual::nearly_equal(&$a, &$b, &$strategy);
        if !eq {
            if let Some((a, b)) = vals {
                panic!("assertion failed: `(found ≈ expected)`\n left:\t`{:?}`,\n right:\t`{:?}`,\n eps:\t`{}`,\n\n Caused by the comparison of:\n left:\t`{:?}`,\n right:\t`{:?}`", $a, $b, $epsilon, a, b)
            } else {
                panic!("assertion failed: `(found ≈ expected)`\n left:\t`{:?}`,\n right:\t`{:?}`,\n eps:\t`{}`", $a, $b, $epsilon)
            }
        }
    };
}

/// Check whether two floating point values are approximately equal.
///
/// Similar to [`assert_fp_eq`], but returns a boolean rather than performing an
/// assertion.
#[macro_export]
macro_rules! is_fp_eq {
    ($(@$method:tt,)? $a:expr, $b:expr) => {
        $crate::is_fp_eq!($(@$method,)? $a, $b, 1e-8)
    };
    ($(@relative,)? $a:expr, $b:expr, $epsilon:expr) => {
        $crate::math::NearlyEqual::nearly_equal(
            &$a,
            &$b,
            &$crate::math::NearlyEqualStrategy::Relative { eps: $epsilon }
        ).0
    };
    (@absolute, $a:expr, $b:expr, $epsilon:expr) => {
        $crate::math::NearlyEqual::nearly_equal(
            &$a,
            &$b,
            &$crate::math::NearlyEqualStrategy::Absolute { eps: $epsilon }
        ).0
    };
    (@custom, $a:expr, $b:expr, $closure:expr) => {
        $crate::math::NearlyEqual::nearly_equal(&$a, &$b, &$closure).0
    };
}
