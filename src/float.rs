//! `num_traits` integration for [`Dual`].
//!
//! Every function here follows the same pattern: apply the `f64` function to
//! the value, and scale the incoming tangent by the analytic derivative at
//! that value. Generic code bounded on [`Float`] therefore differentiates
//! without modification.
//!
//! Narrowing through [`ToPrimitive`] / [`NumCast`] always answers `None`: a
//! dual number does not silently become a plain real.

use std::f64::consts::{LN_10, LN_2};
use std::num::FpCategory;

use num_traits::{Float, Num, NumCast, One, ToPrimitive, Zero};

use crate::forwards::Dual;

impl Zero for Dual {
    fn zero() -> Self {
        Dual::constant(0.0)
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl One for Dual {
    fn one() -> Self {
        Dual::constant(1.0)
    }
}

impl Num for Dual {
    type FromStrRadixErr = <f64 as Num>::FromStrRadixErr;

    fn from_str_radix(str: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        f64::from_str_radix(str, radix).map(Dual::constant)
    }
}

impl NumCast for Dual {
    fn from<T: ToPrimitive>(n: T) -> Option<Self> {
        n.to_f64().map(Dual::constant)
    }
}

// narrowing drops the tangent, so it is refused
impl ToPrimitive for Dual {
    fn to_i64(&self) -> Option<i64> {
        None
    }

    fn to_u64(&self) -> Option<u64> {
        None
    }

    fn to_f32(&self) -> Option<f32> {
        None
    }

    fn to_f64(&self) -> Option<f64> {
        None
    }
}

impl Float for Dual {
    fn nan() -> Self {
        Dual::constant(f64::NAN)
    }

    fn infinity() -> Self {
        Dual::constant(f64::INFINITY)
    }

    fn neg_infinity() -> Self {
        Dual::constant(f64::NEG_INFINITY)
    }

    fn neg_zero() -> Self {
        Dual::constant(-0.0)
    }

    fn is_nan(self) -> bool {
        self.value().is_nan()
    }

    fn is_infinite(self) -> bool {
        self.value().is_infinite()
    }

    fn is_finite(self) -> bool {
        self.value().is_finite()
    }

    fn is_normal(self) -> bool {
        self.value().is_normal()
    }

    fn classify(self) -> FpCategory {
        self.value().classify()
    }

    // piecewise constant: zero derivative almost everywhere
    fn floor(self) -> Self {
        Dual::constant(self.value().floor())
    }

    fn ceil(self) -> Self {
        Dual::constant(self.value().ceil())
    }

    fn round(self) -> Self {
        Dual::constant(self.value().round())
    }

    fn trunc(self) -> Self {
        Dual::constant(self.value().trunc())
    }

    fn fract(self) -> Self {
        Dual::new(self.value().fract(), self.tangent())
    }

    fn abs(self) -> Self {
        Dual::abs(self)
    }

    fn signum(self) -> Self {
        Dual::constant(self.value().signum())
    }

    fn is_sign_positive(self) -> bool {
        self.value().is_sign_positive()
    }

    fn is_sign_negative(self) -> bool {
        self.value().is_sign_negative()
    }

    fn mul_add(self, a: Self, b: Self) -> Self {
        Dual::new(
            self.value().mul_add(a.value(), b.value()),
            self.tangent() * a.value() + self.value() * a.tangent() + b.tangent(),
        )
    }

    fn recip(self) -> Self {
        let v = self.value();
        Dual::new(v.recip(), -self.tangent() / (v * v))
    }

    fn powi(self, n: i32) -> Self {
        if n == 0 {
            return Dual::one();
        }
        let v = self.value();
        let slope = match n.checked_sub(1) {
            Some(m) => v.powi(m),
            None => v.powf(<f64 as From<i32>>::from(n) - 1.0),
        };
        Dual::new(v.powi(n), <f64 as From<i32>>::from(n) * slope * self.tangent())
    }

    fn powf(self, n: Self) -> Self {
        let (v, e) = (self.value(), n.value());
        let value = v.powf(e);
        // each term only when its operand varies, so a constant exponent never
        // evaluates ln(v) for v <= 0
        let mut tangent = 0.0;
        if self.tangent() != 0.0 {
            tangent += e * v.powf(e - 1.0) * self.tangent();
        }
        if n.tangent() != 0.0 {
            tangent += value * v.ln() * n.tangent();
        }
        Dual::new(value, tangent)
    }

    fn sqrt(self) -> Self {
        let s = self.value().sqrt();
        Dual::new(s, self.tangent() / (2.0 * s))
    }

    fn exp(self) -> Self {
        let e = self.value().exp();
        Dual::new(e, self.tangent() * e)
    }

    fn exp2(self) -> Self {
        let e = self.value().exp2();
        Dual::new(e, self.tangent() * e * LN_2)
    }

    fn ln(self) -> Self {
        Dual::ln(self)
    }

    fn log(self, base: Self) -> Self {
        Dual::ln(self) / Dual::ln(base)
    }

    fn log2(self) -> Self {
        let v = self.value();
        Dual::new(v.log2(), self.tangent() / (v * LN_2))
    }

    fn log10(self) -> Self {
        let v = self.value();
        Dual::new(v.log10(), self.tangent() / (v * LN_10))
    }

    /// Picks the winner under the dual ordering (value, then tangent), the
    /// same order `Matrix::max_element` reduces with. NaN values lose.
    fn max(self, other: Self) -> Self {
        if self.is_nan() || other > self {
            other
        } else {
            self
        }
    }

    fn min(self, other: Self) -> Self {
        if self.is_nan() || other < self {
            other
        } else {
            self
        }
    }

    fn abs_sub(self, other: Self) -> Self {
        if self.value() <= other.value() {
            Dual::zero()
        } else {
            self - other
        }
    }

    fn cbrt(self) -> Self {
        let c = self.value().cbrt();
        Dual::new(c, self.tangent() / (3.0 * c * c))
    }

    fn hypot(self, other: Self) -> Self {
        let h = self.value().hypot(other.value());
        Dual::new(
            h,
            (self.value() * self.tangent() + other.value() * other.tangent()) / h,
        )
    }

    fn sin(self) -> Self {
        let (s, c) = self.value().sin_cos();
        Dual::new(s, self.tangent() * c)
    }

    fn cos(self) -> Self {
        let (s, c) = self.value().sin_cos();
        Dual::new(c, -self.tangent() * s)
    }

    fn tan(self) -> Self {
        let v = self.value();
        let c = v.cos();
        Dual::new(v.tan(), self.tangent() / (c * c))
    }

    fn asin(self) -> Self {
        let v = self.value();
        Dual::new(v.asin(), self.tangent() / (1.0 - v * v).sqrt())
    }

    fn acos(self) -> Self {
        let v = self.value();
        Dual::new(v.acos(), -self.tangent() / (1.0 - v * v).sqrt())
    }

    fn atan(self) -> Self {
        let v = self.value();
        Dual::new(v.atan(), self.tangent() / (1.0 + v * v))
    }

    fn atan2(self, other: Self) -> Self {
        let (y, x) = (self.value(), other.value());
        Dual::new(
            y.atan2(x),
            (x * self.tangent() - y * other.tangent()) / (y * y + x * x),
        )
    }

    fn sin_cos(self) -> (Self, Self) {
        let (s, c) = self.value().sin_cos();
        (
            Dual::new(s, self.tangent() * c),
            Dual::new(c, -self.tangent() * s),
        )
    }

    fn exp_m1(self) -> Self {
        let v = self.value();
        Dual::new(v.exp_m1(), self.tangent() * v.exp())
    }

    fn ln_1p(self) -> Self {
        let v = self.value();
        Dual::new(v.ln_1p(), self.tangent() / (1.0 + v))
    }

    fn sinh(self) -> Self {
        let v = self.value();
        Dual::new(v.sinh(), self.tangent() * v.cosh())
    }

    fn cosh(self) -> Self {
        let v = self.value();
        Dual::new(v.cosh(), self.tangent() * v.sinh())
    }

    fn tanh(self) -> Self {
        let t = self.value().tanh();
        Dual::new(t, self.tangent() * (1.0 - t * t))
    }

    fn asinh(self) -> Self {
        let v = self.value();
        Dual::new(v.asinh(), self.tangent() / (v * v + 1.0).sqrt())
    }

    fn acosh(self) -> Self {
        let v = self.value();
        Dual::new(v.acosh(), self.tangent() / (v * v - 1.0).sqrt())
    }

    fn atanh(self) -> Self {
        let v = self.value();
        Dual::new(v.atanh(), self.tangent() / (1.0 - v * v))
    }

    fn integer_decode(self) -> (u64, i16, i8) {
        Float::integer_decode(self.value())
    }

    fn to_degrees(self) -> Self {
        Dual::new(self.value().to_degrees(), self.tangent().to_degrees())
    }

    fn to_radians(self) -> Self {
        Dual::new(self.value().to_radians(), self.tangent().to_radians())
    }

    fn max_value() -> Self {
        Dual::constant(f64::MAX)
    }

    fn min_value() -> Self {
        Dual::constant(f64::MIN)
    }

    fn epsilon() -> Self {
        Dual::constant(f64::EPSILON)
    }

    fn min_positive_value() -> Self {
        Dual::constant(f64::MIN_POSITIVE)
    }
}
