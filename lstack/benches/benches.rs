use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use lstack::Stack;

const SIZE: u64 = 10_000;

fn push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");
    group.bench_function("stack", |b| {
        b.iter(|| {
            let mut stack = Stack::new();
            for i in 0..SIZE {
                stack.push(black_box(i));
            }
            while let Some(value) = stack.pop() {
                black_box(value);
            }
        })
    });
    group.bench_function("vec", |b| {
        b.iter(|| {
            let mut vec = Vec::new();
            for i in 0..SIZE {
                vec.push(black_box(i));
            }
            while let Some(value) = vec.pop() {
                black_box(value);
            }
        })
    });
    group.finish();
}

fn reverse(c: &mut Criterion) {
    let mut stack: Stack<u64> = (0..SIZE).collect();
    c.bench_function("reverse", |b| b.iter(|| stack.reverse()));
}

fn clone(c: &mut Criterion) {
    let stack: Stack<u64> = (0..SIZE).collect();
    c.bench_function("clone", |b| b.iter(|| black_box(stack.clone())));
}

fn pop_all(c: &mut Criterion) {
    c.bench_function("pop_all", |b| {
        b.iter_batched(
            || (0..SIZE).collect::<Stack<u64>>(),
            |mut stack| stack.pop_all(),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, push_pop, reverse, clone, pop_all);
criterion_main!(benches);
