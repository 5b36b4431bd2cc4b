//! # dualnum
//!
//! Forward-mode automatic differentiation with dual numbers.
//!
//! A [`Dual`] pairs a value with its derivative. Replace the input of any
//! numeric code with [`Dual::variable`] and the result carries the exact
//! derivative alongside the value:
//!
//! ```
//! use dualnum::Dual;
//!
//! // f(x) = ln(x + 2) - 2, f'(x) = 1 / (x + 2)
//! let y: Dual = (Dual::variable(1.0) + 2.0_f64).ln() - 2.0;
//! assert!((y.tangent() - 1.0 / 3.0).abs() < 1e-15);
//! ```
//!
//! Provides:
//! - [`forwards`]: the `Dual` type and its differentiation rules
//! - [`promote`]: conversion/promotion so plain reals mix with duals
//! - [`float`]: `num_traits` integration, including every `Float` function
//! - [`Scalar`]: the capability generic numeric code is written against
//! - [`matrix`]: a fixed-size matrix generic over `Scalar`, with linear solve

pub mod error;
pub mod float;
pub mod forwards;
pub mod matrix;
pub mod matrix_dual;
pub mod promote;
pub mod scalar;

pub use error::{Error, Result};
pub use forwards::{derivative, differentiate, Dual};
pub use matrix::Matrix;
pub use promote::{promote, Convert, Promote, Promoted};
pub use scalar::Scalar;
