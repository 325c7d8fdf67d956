use beginner_dsa::linked_list::{node, odd_even};
use beginner_dsa::stack::{candidates::CandidateMinStack, paired::PairedMinStack, prelude::*};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;

const LIST_SIZES: [usize; 3] = [1_000, 10_000, 100_000];
const STACK_OPS: usize = 10_000;

// Enum to define the stack workload mix
enum Workload {
    PushHeavy, // 70% pushes, 30% pops
    Balanced,  // 50% pushes, 50% pops
}

impl Workload {
    fn push_ratio(&self) -> u32 {
        match self {
            Workload::PushHeavy => 70,
            Workload::Balanced => 50,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Workload::PushHeavy => "push_heavy",
            Workload::Balanced => "balanced",
        }
    }
}

// --- Benchmark for odd/even partitioning ---

fn partition_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("odd_even_partition");

    for size in LIST_SIZES {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter_with_setup(
                || node::from_values(0..size as i32),
                |head| black_box(odd_even::partition(head)),
            );
        });
    }

    group.finish();
}

// --- Benchmark for min-tracking stacks ---

enum Op {
    Push(i32),
    Pop,
}

fn generate_ops(workload: &Workload) -> Vec<Op> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..STACK_OPS)
        .map(|_| {
            if rng.random_range(0..100) < workload.push_ratio() {
                Op::Push(rng.random_range(-1_000..1_000))
            } else {
                Op::Pop
            }
        })
        .collect()
}

fn stack_benchmark<S: MinTracking + Default>(c: &mut Criterion, stack_name: &str, workload: Workload) {
    let mut group = c.benchmark_group(format!("{}_stack", stack_name));
    let ops = generate_ops(&workload);

    group.throughput(Throughput::Elements(STACK_OPS as u64));
    group.bench_function(BenchmarkId::new(workload.name(), STACK_OPS), |b| {
        b.iter(|| {
            let mut stack = S::default();
            for op in &ops {
                match op {
                    Op::Push(value) => stack.push(*value),
                    Op::Pop => stack.pop(),
                }
                black_box(stack.get_min().ok());
            }
            stack
        });
    });

    group.finish();
}

fn all_benchmarks(c: &mut Criterion) {
    partition_benchmark(c);

    stack_benchmark::<CandidateMinStack>(c, "candidate", Workload::PushHeavy);
    stack_benchmark::<CandidateMinStack>(c, "candidate", Workload::Balanced);
    stack_benchmark::<PairedMinStack>(c, "paired", Workload::PushHeavy);
    stack_benchmark::<PairedMinStack>(c, "paired", Workload::Balanced);
}

criterion_group!(benches, all_benchmarks);
criterion_main!(benches);
