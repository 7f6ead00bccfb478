use rand::seq::SliceRandom;
use test::Bencher;
use zbench::fixture;
use zbench::neighbor;
use zbench::store::{ListStore, OrderedCollection, SortedSetStore, Store};

const SEED: u64 = 0x0123_4567_89ab_cdef;

fn loaded_list(n: usize) -> ListStore<i64> {
    let mut list = ListStore::new();
    list.bulk_insert(&fixture::shuffled_records(n, SEED)).unwrap();
    list
}

fn lookup_sequential(b: &mut Bencher, n: usize) {
    let list = loaded_list(n);

    b.iter(|| {
        for i in 0..n {
            neighbor::lookup(&list, i).unwrap();
        }
    })
}

#[bench]
fn bench_lookup_sequential_10k(b: &mut Bencher) {
    lookup_sequential(b, 10_000);
}

#[bench]
fn bench_lookup_sequential_100k(b: &mut Bencher) {
    lookup_sequential(b, 100_000);
}

fn lookup_random(b: &mut Bencher, n: usize) {
    let list = loaded_list(n);
    let mut order: Vec<usize> = (0..n).collect();
    let mut rng = crate::bench_rng();
    order.shuffle(&mut rng);

    b.iter(|| {
        for &i in order.iter() {
            neighbor::lookup(&list, i).unwrap();
        }
    })
}

#[bench]
fn bench_lookup_random_10k(b: &mut Bencher) {
    lookup_random(b, 10_000);
}

#[bench]
fn bench_lookup_random_100k(b: &mut Bencher) {
    lookup_random(b, 100_000);
}

fn insert_list(b: &mut Bencher, n: usize) {
    let records = fixture::shuffled_records(n, SEED);

    b.iter(|| {
        let mut list = ListStore::new();
        list.bulk_insert(&records).unwrap();
        assert_eq!(list.len().unwrap(), n);
    })
}

#[bench]
fn bench_insert_list_10k(b: &mut Bencher) {
    insert_list(b, 10_000);
}

#[bench]
fn bench_insert_list_100k(b: &mut Bencher) {
    insert_list(b, 100_000);
}

fn insert_sorted_set(b: &mut Bencher, n: usize) {
    let records = fixture::shuffled_records(n, SEED);

    b.iter(|| {
        let mut set = SortedSetStore::new();
        set.bulk_insert(&records).unwrap();
        assert_eq!(set.len().unwrap(), n);
    })
}

#[bench]
fn bench_insert_sorted_set_10k(b: &mut Bencher) {
    insert_sorted_set(b, 10_000);
}

#[bench]
fn bench_insert_sorted_set_100k(b: &mut Bencher) {
    insert_sorted_set(b, 100_000);
}
