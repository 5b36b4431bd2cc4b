use dualnum::{derivative, Dual};
use num_traits::Float;

fn main() {
    let x = Dual::variable(3.0); // x = 3.0
    let y = Dual::constant(4.0); // y = 4.0

    let z = x * y; // z = x * y = 12.0
    println!("z = {}", z.value()); // 12.0
    println!("dz/dx = {}", z.tangent()); // 4.0

    // plain reals mix in directly
    // a method call on the sum needs the literal's type spelled out
    let f = |x: Dual| -> Dual { (x + 2.0_f64).ln() - 2.0 };
    println!("f(1) = {:.6}", f(Dual::variable(1.0))); // -0.901388 + 0.333333ϵ

    println!("{}", Dual::new(5.0, 2.0) - Dual::new(3.0, 1.0)); // 2 + 1ϵ
    println!("{:.4}", Dual::new(5.0, 2.0) / Dual::new(3.0, 1.0)); // 1.6667 + 0.1111ϵ

    let g = |x: Dual| x.sin() * x.exp();
    println!("d/dx sin(x) e^x at 0 = {}", derivative(g, 0.0)); // 1
}
