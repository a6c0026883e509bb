//! Guided tour of `ValueArray`, logged through the workspace tracing setup.

use anyhow::{Context, ensure};
use valuearrays_core::{ValueArray, ValueObject};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Line {
    points: ValueArray<String>,
}

impl ValueObject for Line {}

fn words(values: &[&str]) -> ValueArray<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn main() -> anyhow::Result<()> {
    valuearrays_observability::init();

    let array = words(&["one", "two", "three"]);
    let copy = ValueArray::from(array.to_vec());
    let other = words(&["two", "one", "three"]);

    // Equality is determined by the items and their order.
    ensure!(array == copy, "copies must be equal");
    ensure!(array != other, "permutations must differ");
    tracing::info!(
        array = %array,
        other = %other,
        same_hash = array.hash_code() == copy.hash_code(),
        "compared arrays"
    );

    for item in &array {
        tracing::info!(%item, "iterating");
    }
    ensure!(array.iter().any(|x| x == "two"), "iterator adapters see every element");

    let third = array.at(2).context("reading the third element")?;
    tracing::info!(%third, length = array.len(), "indexed access");

    if let Err(err) = array.at(-1) {
        tracing::warn!(%err, "negative index rejected");
    }
    if let Err(err) = ValueArray::<String>::try_new(None) {
        tracing::warn!(%err, "absent source rejected");
    }

    // Changing the source data has no side effects.
    let mut data = vec![1, 2, 3];
    let snapshot = ValueArray::from_slice(&data);
    data[1] = 4;
    ensure!(snapshot[1] == 2, "snapshot must keep its own copy");
    tracing::info!(?data, %snapshot, "source mutated after construction");

    let line1 = Line { points: array };
    let line2 = Line { points: copy };
    ensure!(line1 == line2, "records compare through their arrays");
    tracing::info!(
        hash = line1.value_hash(),
        json = %serde_json::to_string(&line1.points)?,
        "records with equal arrays are equal"
    );

    Ok(())
}
