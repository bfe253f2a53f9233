//! Run the default error-probability sweep and print the success curve.
//!
//! The curve shows the code's protection regime: near-certain recovery at
//! low p, decaying toward coin-flip territory as multi-qubit errors
//! overwhelm the distance-3 code.

use five_qubit_code_sim::prelude::*;

fn main() {
    let config = SweepConfig::default();
    let (x1, x2) = config.basis.flags();

    println!("Five-qubit code under random single-qubit Pauli noise");
    println!(
        "logical state (x1, x2) = ({}, {}), {} grid points on [{}, {}], {} trials x {} shots",
        x1 as u8, x2 as u8, config.grid_points, config.p_min, config.p_max,
        config.trials, config.shots
    );
    println!();

    let curve = run_sweep(&config);
    for point in &curve.points {
        println!(
            "error rate = {:.2} --> success probability = {:.3}",
            point.p, point.success_probability
        );
    }
}
