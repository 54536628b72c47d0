#![allow(dead_code)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use packed_ecs::{define_registry, ComponentStore, EntityHandle, RegistryBase};

#[derive(Debug, Clone, Copy, Default)]
pub struct P {
    x: f32,
    y: f32,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Speed {
    x: f32,
    y: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct CollisionBox {
    origin_x: f32,
    origin_y: f32,
    w: f32,
    h: f32,
    is_static: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct Contact {
    other: EntityHandle,
}

define_registry! {
    pub struct BenchRegistry {
        positions: ComponentStore<P>,
        speeds: ComponentStore<Speed>,
        boxes: ComponentStore<CollisionBox>,
        contacts: MultiStore<Contact>,
    }
}

// Every entity gets a position, one in two a speed, one in ten a collision box.
fn generate_registry(size: u32) -> (BenchRegistry, Vec<EntityHandle>) {
    let mut registry = BenchRegistry::with_capacity(size as usize);
    let mut entities = Vec::with_capacity(size as usize);
    for i in 0..size {
        let e = registry.create_entity();
        registry.positions.emplace(e, P { x: i as f32, y: -(i as f32) });
        if i % 2 == 0 {
            registry.speeds.emplace(e, Speed { x: 1.0, y: 2.0 });
        }
        if i % 10 == 0 {
            registry.boxes.emplace(e, CollisionBox { origin_x: 0.0, origin_y: 0.0, w: 1.0, h: 1.0, is_static: i % 20 == 0 });
        }
        entities.push(e);
    }
    (registry, entities)
}

// Dense walk over one store, looking up the other store by entity.
fn update_positions(registry: &mut BenchRegistry) {
    let BenchRegistry { positions, speeds, .. } = registry;
    for (e, speed) in speeds.iter() {
        let p = positions.get_mut(e);
        p.x += speed.x;
        p.y += speed.y;
    }
}

fn update_positions_packed(store: &mut ComponentStore<P>) {
    for p in store.components_mut() {
        p.x += 1.0;
        p.y += 1.0;
    }
}

fn bench_iter(c: &mut Criterion) {
    let mut group = c.benchmark_group("iter");
    for size in [1_000u32, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        let (mut registry, _) = generate_registry(size);
        group.bench_with_input(BenchmarkId::new("joined_by_lookup", size), &size, |b, _| {
            b.iter(|| update_positions(black_box(&mut registry)))
        });
        group.bench_with_input(BenchmarkId::new("dense_slice", size), &size, |b, _| {
            b.iter(|| update_positions_packed(black_box(&mut registry.positions)))
        });
    }
    group.finish();
}

fn bench_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("churn");
    for size in [1_000u32, 10_000] {
        group.bench_with_input(BenchmarkId::new("remove_all_components_of", size), &size, |b, &size| {
            b.iter_batched(
                || generate_registry(size),
                |(mut registry, entities)| {
                    for e in entities.into_iter().rev() {
                        registry.remove_all_components_of(e);
                    }
                    registry
                },
                criterion::BatchSize::LargeInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("contacts_per_frame", size), &size, |b, &size| {
            let (mut registry, entities) = generate_registry(size);
            b.iter(|| {
                for pair in entities.windows(2) {
                    registry.contacts.emplace_with_duplicates(pair[0], Contact { other: pair[1] });
                    registry.contacts.emplace_with_duplicates(pair[1], Contact { other: pair[0] });
                }
                let n = registry.contacts.size();
                registry.contacts.clear();
                n
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_iter, bench_churn);
criterion_main!(benches);
