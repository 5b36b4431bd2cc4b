//! Forward-mode automatic differentiation with dual numbers.
//!
//! A [`Dual`] carries a value together with its derivative (tangent) with
//! respect to one scalar input. Every operation returns a fresh `Dual` whose
//! tangent follows the chain rule, so code written once against plain reals
//! computes a result and its exact derivative in the same pass.

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

/// A value and its first derivative.
///
/// Plain reals lift into `Dual` with a zero tangent (see [`crate::promote`]);
/// there is deliberately no conversion back. Read [`Dual::value`] when the
/// derivative should be discarded.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dual {
    value: f64,
    tangent: f64,
}

impl Dual {
    /// Constructs a new `Dual` from a value and its tangent.
    #[inline]
    pub const fn new(value: f64, tangent: f64) -> Self {
        Dual { value, tangent }
    }

    /// A constant: no sensitivity to the differentiated input.
    #[inline]
    pub const fn constant(value: f64) -> Self {
        Dual::new(value, 0.0)
    }

    /// The differentiated input itself (tangent seeded with 1).
    #[inline]
    pub const fn variable(value: f64) -> Self {
        Dual::new(value, 1.0)
    }

    #[inline]
    pub const fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub const fn tangent(&self) -> f64 {
        self.tangent
    }

    /// Absolute value.
    ///
    /// Passes `self` through when the value is positive and negates it
    /// otherwise, so the tangent picks up the sign of the value. At exactly
    /// zero the derivative is undefined and the negated branch is taken.
    #[inline]
    pub fn abs(self) -> Self {
        if self.value > 0.0 {
            self
        } else {
            -self
        }
    }

    /// Natural logarithm: d/dx ln(x) = 1/x.
    ///
    /// Non-positive values produce NaN (or -inf at zero) exactly as `f64::ln`.
    #[inline]
    pub fn ln(self) -> Self {
        Dual::new(self.value.ln(), self.tangent / self.value)
    }
}

/// Evaluates `f` at `x` with `x` as the differentiated input.
///
/// The returned dual holds `f(x)` and `f'(x)`.
pub fn differentiate<F>(f: F, x: f64) -> Dual
where
    F: FnOnce(Dual) -> Dual,
{
    f(Dual::variable(x))
}

/// The derivative of `f` at `x`.
pub fn derivative<F>(f: F, x: f64) -> f64
where
    F: FnOnce(Dual) -> Dual,
{
    differentiate(f, x).tangent()
}

impl Display for Dual {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*} + {:.*}ϵ", p, self.value, p, self.tangent),
            None => write!(f, "{} + {}ϵ", self.value, self.tangent),
        }
    }
}

impl PartialEq for Dual {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.tangent == other.tangent
    }
}

// value first, tangent breaks ties
impl PartialOrd for Dual {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.value.partial_cmp(&other.value)? {
            Ordering::Equal => self.tangent.partial_cmp(&other.tangent),
            ord => Some(ord),
        }
    }
}

impl Add for Dual {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Dual {
            value: self.value + other.value,
            tangent: self.tangent + other.tangent,
        }
    }
}

impl Neg for Dual {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Dual {
            value: -self.value,
            tangent: -self.tangent,
        }
    }
}

impl Sub for Dual {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        self + (-other)
    }
}

// product rule
impl Mul for Dual {
    type Output = Self;

    #[inline]
    fn mul(self, other: Self) -> Self {
        Dual {
            value: self.value * other.value,
            tangent: self.value * other.tangent + self.tangent * other.value,
        }
    }
}

// quotient rule; a zero divisor propagates inf/NaN like plain division
impl Div for Dual {
    type Output = Self;

    #[inline]
    fn div(self, other: Self) -> Self {
        Dual {
            value: self.value / other.value,
            tangent: self.tangent / other.value
                - self.value * other.tangent / (other.value * other.value),
        }
    }
}

impl Rem for Dual {
    type Output = Self;

    #[inline]
    fn rem(self, other: Self) -> Self {
        Dual {
            value: self.value % other.value,
            tangent: self.tangent - other.tangent * (self.value / other.value).trunc(),
        }
    }
}

macro_rules! impl_assign_op {
    ($($trait:ident, $method:ident, $op:tt;)*) => {
        $(
            impl $trait for Dual {
                #[inline]
                fn $method(&mut self, other: Self) {
                    *self = *self $op other;
                }
            }
        )*
    };
}

impl_assign_op! {
    AddAssign, add_assign, +;
    SubAssign, sub_assign, -;
    MulAssign, mul_assign, *;
    DivAssign, div_assign, /;
    RemAssign, rem_assign, %;
}

impl Sum for Dual {
    fn sum<I: Iterator<Item = Dual>>(iter: I) -> Self {
        iter.fold(Dual::constant(0.0), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Dual> for Dual {
    fn sum<I: Iterator<Item = &'a Dual>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Product for Dual {
    fn product<I: Iterator<Item = Dual>>(iter: I) -> Self {
        iter.fold(Dual::constant(1.0), |acc, x| acc * x)
    }
}

impl<'a> Product<&'a Dual> for Dual {
    fn product<I: Iterator<Item = &'a Dual>>(iter: I) -> Self {
        iter.copied().product()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::{prelude::*, test_runner::Config};

    const NUM_CASES: u32 = 500;
    const TEST_RANGE: f64 = 100.0;

    fn dual() -> impl Strategy<Value = Dual> {
        (-TEST_RANGE..TEST_RANGE, -TEST_RANGE..TEST_RANGE).prop_map(|(v, t)| Dual::new(v, t))
    }

    // small integers are exact in f64, so sums can be compared for equality
    fn integral_dual() -> impl Strategy<Value = Dual> {
        (-1000i32..1000, -1000i32..1000).prop_map(|(v, t)| Dual::new(v as f64, t as f64))
    }

    #[test]
    fn test_accessors_and_seeds() {
        let x = Dual::new(3.0, 2.0);
        assert_eq!(x.value(), 3.0);
        assert_eq!(x.tangent(), 2.0);
        assert_eq!(Dual::constant(4.0), Dual::new(4.0, 0.0));
        assert_eq!(Dual::variable(4.0), Dual::new(4.0, 1.0));
        assert_eq!(Dual::default(), Dual::new(0.0, 0.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Dual::new(1.5, 2.0).to_string(), "1.5 + 2ϵ");
        assert_eq!(
            format!("{:.4}", Dual::new(5.0, 2.0) / Dual::new(3.0, 1.0)),
            "1.6667 + 0.1111ϵ"
        );
    }

    #[test]
    fn test_sub_worked_example() {
        assert_eq!(Dual::new(5.0, 2.0) - Dual::new(3.0, 1.0), Dual::new(2.0, 1.0));
    }

    #[test]
    fn test_div_worked_example() {
        let q = Dual::new(5.0, 2.0) / Dual::new(3.0, 1.0);
        assert_eq!(q, Dual::new(5.0 / 3.0, 2.0 / 3.0 - 5.0 / 9.0));
        assert_relative_eq!(q.value(), 1.6667, epsilon = 1e-4);
        assert_relative_eq!(q.tangent(), 0.1111, epsilon = 1e-4);
    }

    #[test]
    fn test_div_by_zero_propagates() {
        let q = Dual::new(1.0, 1.0) / Dual::new(0.0, 0.0);
        assert!(q.value().is_infinite());
        assert!(q.tangent().is_nan() || q.tangent().is_infinite());

        let q = Dual::new(0.0, 1.0) / Dual::new(0.0, 1.0);
        assert!(q.value().is_nan());
        assert!(q.tangent().is_nan());
    }

    #[test]
    fn test_ln_end_to_end() {
        // f(x) = ln(x + 2) - 2, f'(x) = 1 / (x + 2)
        let f = |x: Dual| (x + Dual::constant(2.0)).ln() - Dual::constant(2.0);
        let y = differentiate(f, 1.0);
        assert_relative_eq!(y.value(), 3.0f64.ln() - 2.0, epsilon = 1e-15);
        assert_relative_eq!(y.value(), -0.9013877, epsilon = 1e-7);
        assert_relative_eq!(y.tangent(), 1.0 / 3.0, epsilon = 1e-15);
        assert_relative_eq!(derivative(f, 1.0), 0.33333, epsilon = 1e-5);
    }

    #[test]
    fn test_ln_domain() {
        assert!(Dual::new(-1.0, 1.0).ln().value().is_nan());
        let at_zero = Dual::new(0.0, 1.0).ln();
        assert_eq!(at_zero.value(), f64::NEG_INFINITY);
        assert_eq!(at_zero.tangent(), f64::INFINITY);
    }

    #[test]
    fn test_abs_branches() {
        assert_eq!(Dual::new(2.0, 3.0).abs(), Dual::new(2.0, 3.0));
        assert_eq!(Dual::new(-2.0, 3.0).abs(), Dual::new(2.0, -3.0));
        // zero takes the negated branch
        let z = Dual::new(0.0, 3.0).abs();
        assert_eq!(z.value(), 0.0);
        assert_eq!(z.tangent(), -3.0);
    }

    #[test]
    fn test_rem() {
        let r = Dual::new(7.5, 1.0) % Dual::new(2.0, 1.0);
        assert_eq!(r, Dual::new(1.5, 1.0 - 3.0));
    }

    #[test]
    fn test_assign_ops_rebind() {
        let mut x = Dual::new(2.0, 1.0);
        let before = x;
        x += Dual::new(1.0, 0.0);
        x *= Dual::new(2.0, 0.0);
        x -= Dual::new(1.0, 1.0);
        x /= Dual::new(5.0, 0.0);
        assert_eq!(before, Dual::new(2.0, 1.0));
        assert_eq!(x, Dual::new(1.0, 0.2));
    }

    #[test]
    fn test_sum_and_product() {
        let xs = [Dual::new(1.0, 1.0), Dual::new(2.0, 0.0), Dual::new(3.0, 2.0)];
        assert_eq!(xs.iter().sum::<Dual>(), Dual::new(6.0, 3.0));
        // d/dx (x * 2 * 3) with tangents 1, 0, 2: 1*6 + 0 + 2*2
        assert_eq!(xs.iter().product::<Dual>(), Dual::new(6.0, 10.0));
        assert_eq!(Vec::<Dual>::new().into_iter().sum::<Dual>(), Dual::constant(0.0));
    }

    #[test]
    fn test_derivative_of_polynomial() {
        // f(x) = 3x^3 - x / 2, f'(x) = 9x^2 - 1/2
        let f = |x: Dual| Dual::constant(3.0) * x * x * x - x / Dual::constant(2.0);
        assert_relative_eq!(derivative(f, 2.0), 35.5, epsilon = 1e-12);
    }

    proptest! {
        #![proptest_config(Config {
            cases: NUM_CASES,
            ..Config::default()
        })]

        #[test]
        fn test_constants_add_without_sensitivity(a in -TEST_RANGE..TEST_RANGE, b in -TEST_RANGE..TEST_RANGE) {
            prop_assert_eq!(Dual::constant(a) + Dual::constant(b), Dual::constant(a + b));
        }

        #[test]
        fn test_add_tangent(x in dual(), y in dual()) {
            prop_assert_eq!((x + y).tangent(), x.tangent() + y.tangent());
            prop_assert_eq!(x + y, y + x);
        }

        #[test]
        fn test_add_associative(x in integral_dual(), y in integral_dual(), z in integral_dual()) {
            prop_assert_eq!((x + y) + z, x + (y + z));
        }

        #[test]
        fn test_sub_is_add_negate(x in dual(), y in dual()) {
            prop_assert_eq!(x - y, x + (-y));
            prop_assert_eq!(-(-x), x);
        }

        #[test]
        fn test_product_rule(v1 in -TEST_RANGE..TEST_RANGE, t1 in -TEST_RANGE..TEST_RANGE,
                             v2 in -TEST_RANGE..TEST_RANGE, t2 in -TEST_RANGE..TEST_RANGE) {
            let product = Dual::new(v1, t1) * Dual::new(v2, t2);
            prop_assert_eq!(product, Dual::new(v1 * v2, v1 * t2 + t1 * v2));
        }

        #[test]
        fn test_quotient_rule(v1 in -TEST_RANGE..TEST_RANGE, t1 in -TEST_RANGE..TEST_RANGE,
                              v2 in -TEST_RANGE..TEST_RANGE, t2 in -TEST_RANGE..TEST_RANGE) {
            prop_assume!(v2 != 0.0);
            let quotient = Dual::new(v1, t1) / Dual::new(v2, t2);
            prop_assert_eq!(quotient.value(), v1 / v2);
            prop_assert_eq!(quotient.tangent(), t1 / v2 - v1 * t2 / (v2 * v2));
        }

        #[test]
        fn test_ln_chain_rule(v in 1e-3..TEST_RANGE, t in -TEST_RANGE..TEST_RANGE) {
            let x = Dual::new(v, t);
            prop_assert_eq!(x.ln().tangent(), x.tangent() / x.value());
        }

        #[test]
        fn test_abs_matches_sign(x in dual()) {
            prop_assume!(x.value() != 0.0);
            let y = x.abs();
            prop_assert_eq!(y.value(), x.value().abs());
            prop_assert_eq!(y.tangent(), x.tangent() * x.value().signum());
        }

        #[test]
        fn test_ordering_consistent(x in integral_dual(), y in integral_dual()) {
            // exactly one of <, ==, > holds for non-NaN duals
            let relations = [x < y, x == y, x > y];
            prop_assert_eq!(relations.iter().filter(|&&r| r).count(), 1);
            prop_assert_eq!(x <= y, x < y || x == y);
            if x.value() != y.value() {
                prop_assert_eq!(x < y, x.value() < y.value());
            }
        }

        #[test]
        fn test_ordering_transitive(x in integral_dual(), y in integral_dual(), z in integral_dual()) {
            if x <= y && y <= z {
                prop_assert!(x <= z);
            }
            if x < y && y < z {
                prop_assert!(x < z);
            }
            if x <= y && y <= x {
                prop_assert_eq!(x, y);
            }
        }
    }

    #[test]
    fn test_ordering_ties_on_tangent() {
        assert!(Dual::new(1.0, 0.0) < Dual::new(1.0, 1.0));
        assert!(Dual::new(1.0, 5.0) < Dual::new(2.0, 0.0));
        assert!(Dual::new(1.0, 1.0) <= Dual::new(1.0, 1.0));
        assert!(!(Dual::new(f64::NAN, 0.0) < Dual::new(1.0, 0.0)));
        assert_ne!(Dual::new(f64::NAN, 0.0), Dual::new(f64::NAN, 0.0));
    }
}
