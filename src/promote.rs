//! Conversion and promotion rules between plain reals and [`Dual`].
//!
//! Mixed arithmetic such as `5.0 + Dual::new(3.0, 2.0)` resolves in two
//! steps: [`Promote`] names the common type of the operand pair, and the
//! plain operand is converted into it with `From` before the `Dual` operator
//! runs. The rule table is closed and resolved entirely at compile time.
//!
//! Conversion only widens. A `Dual` never turns back into a plain real
//! implicitly: there is no `From<Dual>` for any primitive, and the
//! `TryFrom<Dual>` impls exist only to reject the request with
//! [`Error::UnsupportedConversion`]:
//!
//! ```compile_fail
//! use dualnum::Dual;
//!
//! let r: f64 = Dual::new(1.0, 1.0).into();
//! ```
//!
//! An unsuffixed float literal has two candidate types in a mixed expression
//! (`f64` and `f32`). Standing alone it falls back to `f64`, but a method
//! called directly on the result needs the literal suffixed:
//!
//! ```
//! use dualnum::Dual;
//!
//! let x = Dual::variable(1.0);
//! assert_eq!(x + 2.0, Dual::new(3.0, 1.0));
//! let y = (x + 2.0_f64).ln();
//! assert_eq!(y.tangent(), 1.0 / 3.0);
//! ```

use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Rem, Sub};

use crate::error::Error;
use crate::forwards::Dual;

/// Resolves the common type of `Self` and `Rhs`.
///
/// Implemented symmetrically: `<A as Promote<B>>::Output` and
/// `<B as Promote<A>>::Output` name the same type for every supported pair.
pub trait Promote<Rhs> {
    type Output;
}

/// The common type of `A` and `B`.
pub type Promoted<A, B> = <A as Promote<B>>::Output;

/// Converts both operands into their common type.
///
/// ```
/// use dualnum::{promote, Dual};
///
/// let (a, b) = promote(5.0_f64, Dual::new(3.0, 2.0));
/// assert_eq!(a, Dual::new(5.0, 0.0));
/// assert_eq!(a + b, Dual::new(8.0, 2.0));
///
/// let (i, f) = promote(3i64, 0.5f32);
/// assert_eq!((i, f), (3.0f32, 0.5f32));
/// ```
pub fn promote<A, B>(a: A, b: B) -> (Promoted<A, B>, Promoted<A, B>)
where
    A: Promote<B> + Convert<Promoted<A, B>>,
    B: Convert<Promoted<A, B>>,
{
    (a.convert(), b.convert())
}

/// Widening conversion along the promotion table.
///
/// Covers every row [`Promote`] declares, including the integer-to-float
/// rows (`i64 → f64`, `i32 → f32`, `i64 → f32`) that std has no `From` for
/// because they may round.
pub trait Convert<Target> {
    fn convert(self) -> Target;
}

impl<T> Convert<T> for T {
    #[inline]
    fn convert(self) -> T {
        self
    }
}

macro_rules! cast_rules {
    ($($from:ty => $to:ty),*) => {
        $(
            impl Convert<$to> for $from {
                #[inline]
                fn convert(self) -> $to {
                    self as $to
                }
            }
        )*
    };
}

cast_rules!(f32 => f64, i64 => f64, i32 => f64, i64 => f32, i32 => f32, i32 => i64);

macro_rules! lift_rules {
    ($($from:ty),*) => {
        $(
            impl Convert<Dual> for $from {
                #[inline]
                fn convert(self) -> Dual {
                    Dual::from(self)
                }
            }
        )*
    };
}

lift_rules!(f64, f32, i64, i32);

macro_rules! promotion_rules {
    ($($a:ty, $b:ty => $out:ty;)*) => {
        $(
            impl Promote<$b> for $a {
                type Output = $out;
            }
            impl Promote<$a> for $b {
                type Output = $out;
            }
        )*
    };
}

macro_rules! identity_rules {
    ($($t:ty),*) => {
        $(
            impl Promote<$t> for $t {
                type Output = $t;
            }
        )*
    };
}

identity_rules!(Dual, f64, f32, i64, i32);

promotion_rules! {
    f64, Dual => Dual;
    f32, Dual => Dual;
    i64, Dual => Dual;
    i32, Dual => Dual;
    f32, f64 => f64;
    i64, f64 => f64;
    i32, f64 => f64;
    i64, f32 => f32;
    i32, f32 => f32;
    i32, i64 => i64;
}

// constants carry no sensitivity
impl From<f64> for Dual {
    #[inline]
    fn from(value: f64) -> Self {
        Dual::constant(value)
    }
}

impl From<f32> for Dual {
    #[inline]
    fn from(value: f32) -> Self {
        Dual::constant(f64::from(value))
    }
}

impl From<i32> for Dual {
    #[inline]
    fn from(value: i32) -> Self {
        Dual::constant(f64::from(value))
    }
}

impl From<i64> for Dual {
    /// Rounds to the nearest `f64` above 2^53, like `value as f64`.
    #[inline]
    fn from(value: i64) -> Self {
        Dual::constant(value as f64)
    }
}

impl TryFrom<Dual> for f64 {
    type Error = Error;

    fn try_from(_: Dual) -> Result<Self, Self::Error> {
        Err(Error::UnsupportedConversion {
            from: "Dual",
            to: "f64",
        })
    }
}

impl TryFrom<Dual> for f32 {
    type Error = Error;

    fn try_from(_: Dual) -> Result<Self, Self::Error> {
        Err(Error::UnsupportedConversion {
            from: "Dual",
            to: "f32",
        })
    }
}

// Mixed operators reduce to the Dual-Dual form: convert the plain operand,
// then dispatch to the Dual implementation.
macro_rules! mixed_ops {
    (@op $real:ty, $trait:ident, $method:ident) => {
        impl $trait<$real> for Dual {
            type Output = Promoted<Dual, $real>;

            #[inline]
            fn $method(self, rhs: $real) -> Self::Output {
                $trait::$method(self, Dual::from(rhs))
            }
        }

        impl $trait<Dual> for $real {
            type Output = Promoted<$real, Dual>;

            #[inline]
            fn $method(self, rhs: Dual) -> Self::Output {
                $trait::$method(Dual::from(self), rhs)
            }
        }
    };
    ($($real:ty),*) => {
        $(
            mixed_ops!(@op $real, Add, add);
            mixed_ops!(@op $real, Sub, sub);
            mixed_ops!(@op $real, Mul, mul);
            mixed_ops!(@op $real, Div, div);
            mixed_ops!(@op $real, Rem, rem);

            impl PartialEq<$real> for Dual {
                #[inline]
                fn eq(&self, other: &$real) -> bool {
                    *self == Dual::from(*other)
                }
            }

            impl PartialEq<Dual> for $real {
                #[inline]
                fn eq(&self, other: &Dual) -> bool {
                    Dual::from(*self) == *other
                }
            }

            impl PartialOrd<$real> for Dual {
                #[inline]
                fn partial_cmp(&self, other: &$real) -> Option<Ordering> {
                    self.partial_cmp(&Dual::from(*other))
                }
            }

            impl PartialOrd<Dual> for $real {
                #[inline]
                fn partial_cmp(&self, other: &Dual) -> Option<Ordering> {
                    Dual::from(*self).partial_cmp(other)
                }
            }
        )*
    };
}

mixed_ops!(f64, f32, i64, i32);
