use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use phonebook::prelude::{ContactStore, NewContact, store::MemStore};

// Helper to create a MemStore prepopulated with `n` contacts.
fn make_store_with_n(n: usize) -> (MemStore, Vec<String>) {
    let store = MemStore::new();
    let ids = (0..n)
        .map(|i| {
            store
                .insert(NewContact {
                    name: format!("User{i}"),
                    number: format!("0888549{i:04}"),
                })
                .expect("insert contact")
                .id
        })
        .collect();
    (store, ids)
}

fn bench_insert(c: &mut Criterion) {
    c.bench_function("Adding one contact to 5k store", |b| {
        b.iter_batched(
            || make_store_with_n(5_000).0,
            |store| {
                let added = store.insert(NewContact {
                    name: "Zoe".to_string(),
                    number: "08885499529".to_string(),
                });
                black_box(added)
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_find_by_id(c: &mut Criterion) {
    let (store, ids) = make_store_with_n(5_000);
    let last = ids.last().cloned().expect("non-empty store");

    c.bench_function("Finding the last of 5k contacts by id", |b| {
        b.iter(|| black_box(store.find_by_id(black_box(&last))))
    });
}

fn bench_update(c: &mut Criterion) {
    let (store, ids) = make_store_with_n(5_000);
    let middle = ids[ids.len() / 2].clone();

    c.bench_function("Updating a contact in a 5k store", |b| {
        b.iter(|| {
            black_box(store.update_by_id(
                &middle,
                NewContact {
                    name: "User2500".to_string(),
                    number: "08885499529".to_string(),
                },
            ))
        })
    });
}

criterion_group!(benches, bench_insert, bench_find_by_id, bench_update);
criterion_main!(benches);
