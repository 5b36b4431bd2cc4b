use std::fmt::{self, Display, Formatter};
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, Neg, Sub, SubAssign};

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::scalar::Scalar;

/// Fixed-size dense matrix over any [`Scalar`].
///
/// Every operation is written against the scalar capability alone, so the
/// same code runs on `f64` and on `Dual` (where it also carries derivatives).
/// Column vectors are `Matrix<T, N, 1>`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix<T: Scalar, const ROWS: usize, const COLS: usize> {
    pub data: [[T; COLS]; ROWS],
}

impl<T: Scalar, const ROWS: usize, const COLS: usize> Default for Matrix<T, ROWS, COLS> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Scalar, const ROWS: usize, const COLS: usize> Display for Matrix<T, ROWS, COLS> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for i in 0..ROWS {
            for j in 0..COLS {
                write!(f, "{:.2} ", self.data[i][j])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: Scalar, const ROWS: usize, const COLS: usize> Matrix<T, ROWS, COLS> {
    pub fn new(data: [[T; COLS]; ROWS]) -> Self {
        Self { data }
    }

    pub fn transpose(&self) -> Matrix<T, COLS, ROWS> {
        let mut result = Matrix::zeros();
        for i in 0..ROWS {
            for j in 0..COLS {
                result.data[j][i] = self.data[i][j];
            }
        }
        result
    }

    pub fn zeros() -> Self {
        Self {
            data: [[T::zero(); COLS]; ROWS],
        }
    }

    pub fn flatten(&self) -> Vec<T> {
        self.data.iter().flatten().copied().collect()
    }

    /// Builds a matrix from row-major `data`.
    ///
    /// # Panics
    /// If `data` holds fewer than `ROWS * COLS` elements.
    pub fn from_slice(data: &[T]) -> Self {
        let mut result = Self::zeros();
        for i in 0..ROWS {
            for j in 0..COLS {
                result.data[i][j] = data[i * COLS + j];
            }
        }
        result
    }

    pub fn map<U: Scalar, F: Fn(T) -> U>(&self, f: F) -> Matrix<U, ROWS, COLS> {
        let mut result = Matrix::zeros();
        for i in 0..ROWS {
            for j in 0..COLS {
                result.data[i][j] = f(self.data[i][j]);
            }
        }
        result
    }

    pub fn sum(&self) -> T {
        self.data.iter().flatten().copied().sum()
    }

    /// Largest element under `T`'s ordering, `None` for an empty matrix.
    ///
    /// For `Dual` that ordering is value then tangent, which is also how
    /// `Float::max` breaks ties.
    pub fn max_element(&self) -> Option<T> {
        self.data
            .iter()
            .flatten()
            .copied()
            .reduce(|best, x| if x > best { x } else { best })
    }

    /// Smallest element under `T`'s ordering, `None` for an empty matrix.
    pub fn min_element(&self) -> Option<T> {
        self.data
            .iter()
            .flatten()
            .copied()
            .reduce(|best, x| if x < best { x } else { best })
    }

    pub fn frobenius_norm(&self) -> T {
        let mut result = T::zero();
        for i in 0..ROWS {
            for j in 0..COLS {
                result = result + self.data[i][j] * self.data[i][j];
            }
        }
        result.sqrt()
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    pub fn from_diag(diag: [T; N]) -> Self {
        let mut result = Self::zeros();
        for i in 0..N {
            result.data[i][i] = diag[i];
        }
        result
    }

    pub fn identity() -> Self {
        Self::from_diag([T::one(); N])
    }

    /// Solves `self * x = rhs` by Gaussian elimination with partial pivoting.
    ///
    /// Over `Dual` the solution's tangent is the derivative of `x` with
    /// respect to whatever input seeded the tangents of `self` and `rhs`.
    pub fn solve<const K: usize>(&self, rhs: &Matrix<T, N, K>) -> Result<Matrix<T, N, K>> {
        let mut a = *self;
        let mut b = *rhs;
        a.eliminate(&mut b)?;

        // back substitution on the upper triangle
        let mut x = Matrix::<T, N, K>::zeros();
        for row in (0..N).rev() {
            for j in 0..K {
                let mut sum = b[row][j];
                for k in row + 1..N {
                    sum = sum - a[row][k] * x[k][j];
                }
                x[row][j] = sum / a[row][row];
            }
        }
        Ok(x)
    }

    pub fn inverse(&self) -> Result<Self> {
        self.solve(&Self::identity())
    }

    /// Zero when elimination meets a pivot whose value is exactly zero.
    pub fn determinant(&self) -> T {
        let mut a = *self;
        let mut none = Matrix::<T, N, 0>::zeros();
        match a.eliminate(&mut none) {
            Ok(sign) => (0..N).fold(sign, |det, i| det * a[i][i]),
            Err(_) => T::zero(),
        }
    }

    /// Reduces `self` to upper-triangular form in place, applying the same
    /// row operations to `rhs`. Returns the sign of the row permutation.
    fn eliminate<const K: usize>(&mut self, rhs: &mut Matrix<T, N, K>) -> Result<T> {
        let mut sign = T::one();
        for col in 0..N {
            let mut pivot_row = col;
            for row in col + 1..N {
                if self[row][col].abs() > self[pivot_row][col].abs() {
                    pivot_row = row;
                }
            }
            if self[pivot_row][col].primal() == 0.0 {
                debug!("matrix is singular: no nonzero pivot in column {}", col);
                return Err(Error::Singular { column: col });
            }
            if pivot_row != col {
                trace!("pivot: swapping rows {} and {}", col, pivot_row);
                self.data.swap(col, pivot_row);
                rhs.data.swap(col, pivot_row);
                sign = -sign;
            }

            let pivot = self[col][col];
            for row in col + 1..N {
                let factor = self[row][col] / pivot;
                for j in col..N {
                    self[row][j] = self[row][j] - factor * self[col][j];
                }
                for j in 0..K {
                    rhs[row][j] = rhs[row][j] - factor * rhs[col][j];
                }
            }
        }
        Ok(sign)
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, 1> {
    pub fn dot(&self, rhs: Matrix<T, N, 1>) -> T {
        let mut result = T::zero();
        for i in 0..N {
            result = result + self.data[i][0] * rhs.data[i][0];
        }
        result
    }
}

impl<T: Scalar, const ROWS: usize, const COLS: usize> Index<usize> for Matrix<T, ROWS, COLS> {
    type Output = [T; COLS];

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T: Scalar, const ROWS: usize, const COLS: usize> IndexMut<usize> for Matrix<T, ROWS, COLS> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<T: Scalar, const ROWS: usize, const INNER: usize, const COLS: usize>
    Mul<Matrix<T, INNER, COLS>> for Matrix<T, ROWS, INNER>
{
    type Output = Matrix<T, ROWS, COLS>;

    fn mul(self, rhs: Matrix<T, INNER, COLS>) -> Matrix<T, ROWS, COLS> {
        let mut result = Matrix::zeros();

        for i in 0..ROWS {
            for j in 0..COLS {
                let mut sum = T::zero();
                for k in 0..INNER {
                    sum = sum + self[i][k] * rhs[k][j];
                }
                result.data[i][j] = sum;
            }
        }

        result
    }
}

impl<T: Scalar, const ROWS: usize, const COLS: usize> Add for Matrix<T, ROWS, COLS> {
    type Output = Matrix<T, ROWS, COLS>;
    fn add(self, rhs: Matrix<T, ROWS, COLS>) -> Matrix<T, ROWS, COLS> {
        let mut result = Matrix::zeros();
        for i in 0..ROWS {
            for j in 0..COLS {
                result.data[i][j] = self.data[i][j] + rhs.data[i][j];
            }
        }
        result
    }
}

impl<T: Scalar, const ROWS: usize, const COLS: usize> AddAssign<Matrix<T, ROWS, COLS>>
    for Matrix<T, ROWS, COLS>
{
    fn add_assign(&mut self, rhs: Matrix<T, ROWS, COLS>) {
        *self = *self + rhs;
    }
}

impl<T: Scalar, const ROWS: usize, const COLS: usize> Sub for Matrix<T, ROWS, COLS> {
    type Output = Matrix<T, ROWS, COLS>;
    fn sub(self, rhs: Matrix<T, ROWS, COLS>) -> Matrix<T, ROWS, COLS> {
        let mut result = Matrix::zeros();
        for i in 0..ROWS {
            for j in 0..COLS {
                result.data[i][j] = self.data[i][j] - rhs.data[i][j];
            }
        }
        result
    }
}

impl<T: Scalar, const ROWS: usize, const COLS: usize> SubAssign<Matrix<T, ROWS, COLS>>
    for Matrix<T, ROWS, COLS>
{
    fn sub_assign(&mut self, rhs: Matrix<T, ROWS, COLS>) {
        *self = *self - rhs;
    }
}

// unary minus
impl<T: Scalar, const ROWS: usize, const COLS: usize> Neg for Matrix<T, ROWS, COLS> {
    type Output = Matrix<T, ROWS, COLS>;
    fn neg(self) -> Matrix<T, ROWS, COLS> {
        self.map(|x| -x)
    }
}

impl<T: Scalar, const ROWS: usize, const COLS: usize> Mul<T> for Matrix<T, ROWS, COLS> {
    type Output = Matrix<T, ROWS, COLS>;
    fn mul(self, rhs: T) -> Matrix<T, ROWS, COLS> {
        self.map(|x| x * rhs)
    }
}
