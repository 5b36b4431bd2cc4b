use std::ops::{Add, Mul, Sub};

use crate::{forwards::Dual, matrix::Matrix};

impl<const ROWS: usize, const COLS: usize> Mul<Matrix<Dual, ROWS, COLS>> for Dual {
    type Output = Matrix<Dual, ROWS, COLS>;
    fn mul(self, rhs: Matrix<Dual, ROWS, COLS>) -> Matrix<Dual, ROWS, COLS> {
        rhs.map(|x| self * x)
    }
}

impl<const ROWS: usize, const COLS: usize> Mul<Matrix<Dual, ROWS, COLS>> for f64 {
    type Output = Matrix<Dual, ROWS, COLS>;
    fn mul(self, rhs: Matrix<Dual, ROWS, COLS>) -> Matrix<Dual, ROWS, COLS> {
        rhs.map(|x| self * x)
    }
}

impl<const ROWS: usize, const COLS: usize> Mul<f64> for Matrix<Dual, ROWS, COLS> {
    type Output = Matrix<Dual, ROWS, COLS>;
    fn mul(self, rhs: f64) -> Matrix<Dual, ROWS, COLS> {
        rhs * self
    }
}

impl<const ROWS: usize, const COLS: usize> Mul<Matrix<f64, ROWS, COLS>> for Dual {
    type Output = Matrix<Dual, ROWS, COLS>;
    fn mul(self, rhs: Matrix<f64, ROWS, COLS>) -> Matrix<Dual, ROWS, COLS> {
        rhs.map(|x| self * x)
    }
}

impl<const ROWS: usize, const COLS: usize> Mul<Dual> for Matrix<f64, ROWS, COLS> {
    type Output = Matrix<Dual, ROWS, COLS>;
    fn mul(self, rhs: Dual) -> Matrix<Dual, ROWS, COLS> {
        rhs * self
    }
}

impl<const ROWS: usize, const COLS: usize> From<Matrix<f64, ROWS, COLS>>
    for Matrix<Dual, ROWS, COLS>
{
    fn from(m: Matrix<f64, ROWS, COLS>) -> Self {
        m.map(Dual::constant)
    }
}

impl<const ROWS: usize, const INNER: usize, const COLS: usize> Mul<Matrix<Dual, INNER, COLS>>
    for Matrix<f64, ROWS, INNER>
{
    type Output = Matrix<Dual, ROWS, COLS>;
    fn mul(self, rhs: Matrix<Dual, INNER, COLS>) -> Matrix<Dual, ROWS, COLS> {
        Matrix::<Dual, ROWS, INNER>::from(self) * rhs
    }
}

impl<const ROWS: usize, const INNER: usize, const COLS: usize> Mul<Matrix<f64, INNER, COLS>>
    for Matrix<Dual, ROWS, INNER>
{
    type Output = Matrix<Dual, ROWS, COLS>;
    fn mul(self, rhs: Matrix<f64, INNER, COLS>) -> Matrix<Dual, ROWS, COLS> {
        self * Matrix::<Dual, INNER, COLS>::from(rhs)
    }
}

impl<const ROWS: usize, const COLS: usize> Add<Matrix<f64, ROWS, COLS>>
    for Matrix<Dual, ROWS, COLS>
{
    type Output = Matrix<Dual, ROWS, COLS>;
    fn add(self, rhs: Matrix<f64, ROWS, COLS>) -> Matrix<Dual, ROWS, COLS> {
        self + Matrix::<Dual, ROWS, COLS>::from(rhs)
    }
}

impl<const ROWS: usize, const COLS: usize> Add<Matrix<Dual, ROWS, COLS>>
    for Matrix<f64, ROWS, COLS>
{
    type Output = Matrix<Dual, ROWS, COLS>;
    fn add(self, rhs: Matrix<Dual, ROWS, COLS>) -> Matrix<Dual, ROWS, COLS> {
        Matrix::<Dual, ROWS, COLS>::from(self) + rhs
    }
}

impl<const ROWS: usize, const COLS: usize> Sub<Matrix<f64, ROWS, COLS>>
    for Matrix<Dual, ROWS, COLS>
{
    type Output = Matrix<Dual, ROWS, COLS>;
    fn sub(self, rhs: Matrix<f64, ROWS, COLS>) -> Matrix<Dual, ROWS, COLS> {
        self - Matrix::<Dual, ROWS, COLS>::from(rhs)
    }
}

impl<const ROWS: usize, const COLS: usize> Sub<Matrix<Dual, ROWS, COLS>>
    for Matrix<f64, ROWS, COLS>
{
    type Output = Matrix<Dual, ROWS, COLS>;
    fn sub(self, rhs: Matrix<Dual, ROWS, COLS>) -> Matrix<Dual, ROWS, COLS> {
        Matrix::<Dual, ROWS, COLS>::from(self) - rhs
    }
}

impl<const ROWS: usize, const COLS: usize> Matrix<Dual, ROWS, COLS> {
    /// Pairs a value matrix with a matrix of tangents.
    pub fn from_parts(values: Matrix<f64, ROWS, COLS>, tangents: Matrix<f64, ROWS, COLS>) -> Self {
        let mut result = Matrix::zeros();
        for i in 0..ROWS {
            for j in 0..COLS {
                result.data[i][j] = Dual::new(values.data[i][j], tangents.data[i][j]);
            }
        }
        result
    }

    pub fn values(&self) -> Matrix<f64, ROWS, COLS> {
        self.map(|x| x.value())
    }

    /// Elementwise derivatives.
    pub fn tangents(&self) -> Matrix<f64, ROWS, COLS> {
        self.map(|x| x.tangent())
    }
}
