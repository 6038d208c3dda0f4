use std::sync::Arc;

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use tumble_blocks::{BlockUri, FaceMaterialTransformer, FamilyRegistry};
use tumble_geom::{Face, Vec3i};
use tumble_runtime::{ReorientationPolicy, Runtime};
use tumble_world::EditStore;

fn load_registry() -> FamilyRegistry {
    let root = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let assets = root.join("../../assets");
    FamilyRegistry::load_from_paths(
        assets.join("materials.toml"),
        assets.join("families.toml"),
        &FaceMaterialTransformer,
    )
    .unwrap()
}

fn bench_policy_pick(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorient_pick");
    let reg = load_registry();
    let id = reg.id_by_uri(&BlockUri::family("tutorial:dice")).unwrap();
    let family = reg.get(id).unwrap();
    let mut policy = ReorientationPolicy::seeded(0xC0FFEE);
    group.bench_function("dice_24", |b| {
        let mut current = family.archetype();
        b.iter(|| {
            current = policy.reorient(family, current).unwrap();
            black_box(current.index());
        })
    });
    group.finish();
}

fn bench_activation_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("activation_step");
    let reg = Arc::new(load_registry());
    let id = reg.id_by_uri(&BlockUri::family("tutorial:dice")).unwrap();
    let mut rt = Runtime::new(reg, EditStore::default(), ReorientationPolicy::seeded(1337));
    let entities: Vec<_> = (0..64)
        .map(|i| {
            rt.place(id, Vec3i::new(i % 8, 0, i / 8), Face::Top, Face::Front)
                .unwrap()
        })
        .collect();
    group.bench_function("64_dice", |b| {
        b.iter(|| {
            for &e in &entities {
                rt.activate(e);
            }
            black_box(rt.step());
        })
    });
    group.finish();
}

criterion_group!(benches, bench_policy_pick, bench_activation_step);
criterion_main!(benches);
