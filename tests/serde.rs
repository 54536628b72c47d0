#![cfg(feature = "use_serde")]

use serde::{
    Deserialize,
    Serialize,
};
use packed_ecs::components::{Collision, Motion};
use packed_ecs::{ComponentStore, EntityHandle, MultiStore};

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct ComponentA {
    alpha: f32,
}

fn are_equal<T: PartialEq>(a: &ComponentStore<T>, b: &ComponentStore<T>) -> bool {
    a.entities() == b.entities()
        && a.components() == b.components()
        && a.entities().iter().all(|&e| b.index_of(e) == a.index_of(e))
}

#[test]
fn store_round_trip_keeps_dense_order() {
    let mut store = ComponentStore::new();
    let e: Vec<_> = (0..5).map(|_| EntityHandle::new()).collect();
    for (i, &entity) in e.iter().enumerate() {
        store.emplace(entity, ComponentA { alpha: i as f32 });
    }
    store.remove(e[1]);

    let bytes = bincode::serialize(&store).unwrap();
    let loaded: ComponentStore<ComponentA> = bincode::deserialize(&bytes).unwrap();

    assert!(are_equal(&store, &loaded));
    assert!(!loaded.has(e[1]));
    assert_eq!(loaded.get(e[4]).alpha, 4.0);
}

#[test]
fn game_components_round_trip() {
    let mut motions = ComponentStore::new();
    let e = EntityHandle::new();
    motions.emplace(e, Motion { angle: 0.25, ..Default::default() });

    let bytes = bincode::serialize(&motions).unwrap();
    let loaded: ComponentStore<Motion> = bincode::deserialize(&bytes).unwrap();
    assert_eq!(loaded.get(e), motions.get(e));
}

#[test]
fn multi_store_round_trip_rebuilds_counts() {
    let mut store = MultiStore::new();
    let [a, b] = [EntityHandle::new(), EntityHandle::new()];
    store.emplace_with_duplicates(a, Collision::new(b));
    store.emplace_with_duplicates(a, Collision::new(a));
    store.emplace_with_duplicates(b, Collision::new(a));

    let bytes = bincode::serialize(&store).unwrap();
    let loaded: MultiStore<Collision> = bincode::deserialize(&bytes).unwrap();
    assert_eq!(loaded.count_of(a), 2);
    assert_eq!(loaded.count_of(b), 1);
    assert_eq!(loaded.components(), store.components());
}

#[derive(Serialize)]
struct RawStore {
    entities: Vec<EntityHandle>,
    components: Vec<ComponentA>,
}

#[test]
fn duplicate_owner_is_rejected() {
    let e = EntityHandle::new();
    let raw = RawStore {
        entities: vec![e, e],
        components: vec![ComponentA { alpha: 1.0 }, ComponentA { alpha: 2.0 }],
    };
    let bytes = bincode::serialize(&raw).unwrap();
    let err = bincode::deserialize::<ComponentStore<ComponentA>>(&bytes).unwrap_err();
    assert!(err.to_string().contains("more than one"), "{err}");
}

#[test]
fn mismatched_lengths_are_rejected() {
    let raw = RawStore {
        entities: vec![EntityHandle::new()],
        components: vec![],
    };
    let bytes = bincode::serialize(&raw).unwrap();
    assert!(bincode::deserialize::<ComponentStore<ComponentA>>(&bytes).is_err());
    assert!(bincode::deserialize::<MultiStore<ComponentA>>(&bytes).is_err());
}

#[derive(Serialize)]
struct RawIds {
    entities: Vec<u32>,
    components: Vec<u32>,
}

#[test]
fn loading_moves_handle_counter_past_loaded_ids() {
    let base = EntityHandle::new().id() + 1_000;
    let raw = RawIds {
        entities: vec![base, base + 1, base + 2],
        components: vec![1, 2, 3],
    };
    let bytes = bincode::serialize(&raw).unwrap();
    let mut loaded: ComponentStore<u32> = bincode::deserialize(&bytes).unwrap();

    let fresh = EntityHandle::new();
    assert!(loaded.entities().iter().all(|&owner| fresh > owner), "{fresh} {:?}", loaded.entities());
    assert!(loaded.try_emplace(fresh, 4).is_ok());
    assert_eq!(loaded.size(), 4);
}
