use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use ladder_bode::elliptic::SeventhOrderElliptic;
use ladder_bode::ladder::LadderNetwork;
use ladder_bode::sweep::{BodePoint, SweepPlan};

fn build_reference_ladder() -> LadderNetwork {
    SeventhOrderElliptic::dds_reference().ladder()
}

fn bench_transfer_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("transfer_sweep");
    let plan = SweepPlan::new(1.0e3, 1.0e12, 1000).expect("valid plan");

    group.bench_function(BenchmarkId::new("dds_reference", plan.points()), |b| {
        b.iter_batched(
            build_reference_ladder,
            |ladder| {
                let _: Vec<BodePoint> = plan.bode(|s| ladder.transfer_function(s)).collect();
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_transfer_sweep);
criterion_main!(benches);
