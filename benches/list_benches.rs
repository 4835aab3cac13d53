use intrusive_dll::linked_list::{
    indexed::{IndexLink, IndexLinked, IndexList},
    intrusive::{link::Link, list::CircularList, traits::Linked},
};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::seq::SliceRandom;
use std::hint::black_box;
use std::ptr::NonNull;

const SIZES: [usize; 3] = [64, 1_024, 16_384];

#[derive(Linked)]
struct Record {
    _payload: u64,
    link: Link,
}

#[derive(IndexLinked)]
struct Slot {
    _payload: u64,
    link: IndexLink,
}

fn records(n: usize) -> Vec<Record> {
    (0..n as u64)
        .map(|i| Record {
            _payload: i,
            link: Link::new(),
        })
        .collect()
}

// --- Benchmark for push/pop on the pointer list ---

fn queue_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("circular_list_queue");

    for size in SIZES {
        let items = records(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(BenchmarkId::new("push_tail_pop_head", size), |b| {
            b.iter(|| {
                let mut list = CircularList::<Record>::new();
                for item in &items {
                    unsafe { list.push_tail(NonNull::from(item)) };
                }
                while let Some(item) = list.pop_head() {
                    black_box(item);
                }
            });
        });

        group.bench_function(BenchmarkId::new("push_head_pop_tail", size), |b| {
            b.iter(|| {
                let mut list = CircularList::<Record>::new();
                for item in &items {
                    unsafe { list.push_head(NonNull::from(item)) };
                }
                while let Some(item) = list.pop_tail() {
                    black_box(item);
                }
            });
        });
    }

    group.finish();
}

// --- Benchmark for removal in random order ---

fn random_remove_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_remove");

    for size in SIZES {
        let items = records(size);
        let mut slots: Vec<Slot> = (0..size as u64)
            .map(|i| Slot {
                _payload: i,
                link: IndexLink::new(),
            })
            .collect();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(BenchmarkId::new("circular_list", size), |b| {
            b.iter_with_setup(
                || {
                    let mut order: Vec<usize> = (0..size).collect();
                    order.shuffle(&mut rand::rng());
                    let mut list = CircularList::<Record>::new();
                    for item in &items {
                        unsafe { list.push_tail(NonNull::from(item)) };
                    }
                    (list, order)
                },
                |(mut list, order)| {
                    for i in order {
                        black_box(unsafe { list.remove(NonNull::from(&items[i])) });
                    }
                },
            );
        });

        group.bench_function(BenchmarkId::new("index_list", size), |b| {
            b.iter_with_setup(
                || {
                    let mut order: Vec<usize> = (0..size).collect();
                    order.shuffle(&mut rand::rng());
                    order
                },
                |order| {
                    let mut list = IndexList::new();
                    for i in 0..size {
                        list.push_tail(&mut slots, i);
                    }
                    for i in order {
                        black_box(list.remove(&mut slots, i));
                    }
                },
            );
        });

        debug_assert!(slots.iter().all(|slot| slot.index_link().is_detached()));
    }

    group.finish();
}

criterion_group!(benches, queue_benchmark, random_remove_benchmark);
criterion_main!(benches);
