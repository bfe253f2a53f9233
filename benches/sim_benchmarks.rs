use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use five_qubit_code_sim::prelude::*;

fn bench_encoder(c: &mut Criterion) {
    c.bench_function("encode_logical_zero", |b| {
        let data = QubitRegister::range("data", 0, 5);
        b.iter(|| {
            let mut state = QuantumState::new(5);
            apply_encoder(&mut state, &data);
            black_box(state.norm_sqr())
        });
    });
}

fn bench_syndrome_extraction(c: &mut Criterion) {
    c.bench_function("extract_syndrome_clean_codeword", |b| {
        let data = QubitRegister::range("data", 0, 5);
        let ancilla = QubitRegister::range("ancilla", 5, 4);
        let mut encoded = QuantumState::new(5);
        apply_encoder(&mut encoded, &data);
        let mut rng = StdRng::seed_from_u64(99);

        b.iter(|| {
            let mut state = encoded.clone();
            state.add_qubits(4);
            black_box(extract_syndrome(&mut state, &data, &ancilla, &mut rng).to_index())
        });
    });
}

fn bench_full_trial(c: &mut Criterion) {
    c.bench_function("trial_p_0_1_ten_shots", |b| {
        let table = CorrectionTable::derive();
        let mut rng = StdRng::seed_from_u64(7);
        b.iter(|| {
            black_box(run_trial(LogicalBasis::Zero, 0.1, 10, &table, &mut rng).bit)
        });
    });
}

criterion_group!(
    benches,
    bench_encoder,
    bench_syndrome_extraction,
    bench_full_trial
);
criterion_main!(benches);
