// Regularized incomplete beta I_x(a, b) for a few shape pairs.
// Prints JSON with 200 evaluation points on [0, 1] and one curve per pair:
//   {"x":[...], "curves":[{"a":..,"b":..,"y":[...]}, ...]}
// Pipe into a plotting script to chart the curves.

use betacf::special::regularized_beta;

fn fmt_arr(v: &[f64]) -> String {
    let inner: Vec<String> = v.iter().map(|x| format!("{x:.6}")).collect();
    format!("[{}]", inner.join(","))
}

fn main() {
    let shapes = [(0.5, 0.5), (1.0, 3.0), (2.0, 2.0), (2.0, 5.0), (5.0, 1.0), (30.0, 20.0)];

    const N: usize = 200;
    let x_vals: Vec<f64> = (0..N).map(|i| i as f64 / (N - 1) as f64).collect();

    let curves: Vec<String> = shapes
        .iter()
        .map(|&(a, b)| {
            let y: Vec<f64> = x_vals
                .iter()
                .map(|&x| regularized_beta(x, a, b).unwrap_or(f64::NAN))
                .collect();
            format!("{{\"a\":{a},\"b\":{b},\"y\":{}}}", fmt_arr(&y))
        })
        .collect();

    println!(
        "{{\"x\":{},\"curves\":[{}]}}",
        fmt_arr(&x_vals),
        curves.join(",")
    );
}
