use anyhow::Context;
use std::path::Path;

use zbench::config::Config;
use zbench::fixture;
use zbench::neighbor;
use zbench::store::{ListStore, OrderedCollection, SortedSetStore, Store};
use zbench::timing::time_operation;

const SETTINGS_FILE: &str = "zbench.json";

fn main() -> anyhow::Result<()> {
    let config = Config::load_or_default(Path::new(SETTINGS_FILE))
        .with_context(|| format!("loading {}", SETTINGS_FILE))?;
    let records = fixture::shuffled_records(config.records, config.seed);

    println!("List Testing");
    let mut list = ListStore::new();
    // flush before load, as a shared server would need
    list.clear()?;
    let (result, _) = time_operation("Insert all data into a list", || {
        list.bulk_insert(&records)
    });
    result?;
    let (result, _) = time_operation("Lookup neighbors of all records sequentially", || {
        lookup_sequentially(&list)
    });
    result?;

    println!("++++++++++============================================++++++++++");

    println!("Sorted Set Testing");
    let mut set = SortedSetStore::new();
    set.clear()?;
    let (result, _) = time_operation("Insert all data into a sorted set", || {
        set.bulk_insert(&records)
    });
    result?;

    Ok(())
}

fn lookup_sequentially<C: OrderedCollection>(collection: &C) -> anyhow::Result<()> {
    let len = collection.len()?;
    for i in 0..len {
        neighbor::lookup(collection, i)?;
    }
    Ok(())
}
