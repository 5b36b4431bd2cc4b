use dualnum::{Dual, Matrix};

fn main() {
    let a0: Matrix<f64, 3, 3> = Matrix::new([[4.0, 1.0, 0.0], [1.0, 3.0, 1.0], [0.0, 1.0, 2.0]]);
    let a1: Matrix<f64, 3, 3> = Matrix::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
    let b: Matrix<f64, 3, 1> = Matrix::new([[1.0], [2.0], [3.0]]);

    // A(c) = A0 + c I, solve A(c) x = b and differentiate x with respect to c
    let c = Dual::variable(0.5);
    let a = a0 + c * a1;
    let x = match a.solve(&Matrix::from(b)) {
        Ok(x) => x,
        Err(e) => {
            eprintln!("solve failed: {}", e);
            return;
        }
    };

    println!("x =\n{}", x.values());
    println!("∂x/∂c =\n{}", x.tangents());

    // finite difference check
    let eps = 1e-6;
    let solve_at = |c: f64| (a0 + a1 * c).solve(&b);
    if let (Ok(plus), Ok(minus)) = (solve_at(0.5 + eps), solve_at(0.5 - eps)) {
        let fd = (plus - minus) * (0.5 / eps);
        println!("∂x/∂c (finite difference) =\n{}", fd);
    }
}
