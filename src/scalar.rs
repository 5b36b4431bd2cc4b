//! [`Scalar`] trait: the capability set generic numeric code is written
//! against, implemented by the plain floats and by [`Dual`].
//!
//! Code bounded on `Scalar` evaluates with `f64` and differentiates with
//! `Dual` without being touched.

use std::fmt::{Debug, Display};
use std::iter::{Product, Sum};

use num_traits::Float;

use crate::forwards::Dual;

/// A real-like scalar: full [`Float`] arithmetic plus lifting of `f64`
/// constants.
pub trait Scalar: Float + Sum + Product + Debug + Display + 'static {
    /// Lift an `f64` constant (zero tangent for dual numbers).
    fn from_f64(v: f64) -> Self;

    /// The primal value, with any derivative information dropped.
    fn primal(&self) -> f64;
}

impl Scalar for f64 {
    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }

    #[inline]
    fn primal(&self) -> f64 {
        *self
    }
}

impl Scalar for f32 {
    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn primal(&self) -> f64 {
        f64::from(*self)
    }
}

impl Scalar for Dual {
    #[inline]
    fn from_f64(v: f64) -> Self {
        Dual::constant(v)
    }

    #[inline]
    fn primal(&self) -> f64 {
        self.value()
    }
}
