//! Shop record commands (add, display, select)

use anyhow::Result;

use super::output::Output;
use super::table;
use crate::domain::ShopRecord;
use crate::storage::{Config, RecordStore};

/// Opens the configured store; a missing file starts empty
pub fn open_store(output: &Output, config: &Config) -> Result<RecordStore> {
    let store = RecordStore::open(&config.data_file)?;
    output.verbose_ctx(
        "load",
        &format!(
            "Loaded {} record(s) from {}",
            store.len(),
            store.path().display()
        ),
    );
    if store.path().exists() {
        output.verbose_ctx("load", "Validation passed");
    }
    Ok(store)
}

/// Appends a new record; the caller persists the dirty store
pub fn add(output: &Output, store: &mut RecordStore, name: String, product: String, price: i64) {
    let record = ShopRecord::new(name, product, price);
    output.verbose_ctx(
        "add",
        &format!(
            "Adding {} / {} / {} after {} record(s)",
            record.name,
            record.product,
            record.price,
            store.len()
        ),
    );
    store.add(record);
}

/// Prints all records as a table
pub fn display(output: &Output, store: &RecordStore) {
    output.verbose_ctx("display", &format!("Displaying {} record(s)", store.len()));

    if output.is_json() {
        output.data(&store.records());
    } else if store.is_empty() {
        println!("No shops found.");
    } else {
        println!("{}", table::render(store.records()));
    }
}

/// Prints the products of one shop, or a notice if the shop is unknown
pub fn select(output: &Output, store: &RecordStore, name: &str) {
    let matches = store.find_by_shop(name);
    output.verbose_ctx(
        "select",
        &format!("Found {} record(s) for shop '{}'", matches.len(), name),
    );

    if output.is_json() {
        output.data(&matches);
    } else if matches.is_empty() {
        output.notice(&format!("Shop '{}' not found", name));
    } else {
        for record in matches {
            println!("{} | {}", record.product, record.price);
        }
    }
}
