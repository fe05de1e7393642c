//! Benchmarks for mapped vs hand-written projections
//!
//! Run with: `cargo bench --bench mapping`

// `#[derive(Reflect)]` expands to paths under `::transcribe`.
extern crate transcribe_core as transcribe;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use transcribe::Mapper;
use transcribe_macros::Reflect;

#[derive(Clone, Default, Reflect)]
struct Product {
    name: String,
    country: String,
    price: f32,
}

#[derive(Clone, Default, Reflect)]
struct ShoppingCart {
    products: Vec<Product>,
}

#[derive(Clone, Default, Reflect)]
struct NameOnly {
    name: String,
}

#[derive(Clone, Default, Reflect)]
struct NamedCart {
    products: Vec<NameOnly>,
}

fn make_cart(size: usize) -> ShoppingCart {
    let names = ["Shirt", "Shoes", "Hat", "Bowtie"];
    ShoppingCart {
        products: (0..size)
            .map(|i| Product {
                name: names[i % names.len()].to_string(),
                country: "US".to_string(),
                price: i as f32,
            })
            .collect(),
    }
}

fn bench_cart_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("cart_projection");

    for size in [10, 100, 1000] {
        let cart = make_cart(size);

        group.bench_with_input(BenchmarkId::new("hand_written", size), &cart, |b, cart| {
            b.iter(|| {
                let out = NamedCart {
                    products: cart
                        .products
                        .iter()
                        .map(|p| NameOnly {
                            name: p.name.clone(),
                        })
                        .collect(),
                };
                black_box(out);
            });
        });

        let mapper = Mapper::new();
        group.bench_with_input(BenchmarkId::new("mapped", size), &cart, |b, cart| {
            b.iter(|| {
                let mut out = NamedCart::default();
                mapper.map(&mut out, black_box(cart)).unwrap();
                black_box(out);
            });
        });

        let mut hooked = Mapper::new();
        hooked.register_inspection(|_: &mut NameOnly| {});
        group.bench_with_input(BenchmarkId::new("mapped_with_hook", size), &cart, |b, cart| {
            b.iter(|| {
                let mut out = NamedCart::default();
                hooked.map(&mut out, black_box(cart)).unwrap();
                black_box(out);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_cart_projection);
criterion_main!(benches);
