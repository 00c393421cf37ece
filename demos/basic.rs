use anyhow::{Context, Result};
use dynarray::DynamicArray;

fn main() -> Result<()> {
    println!("--- Basic Usage Example ---");
    let mut arr = DynamicArray::new();

    for i in 1..=5 {
        arr.append(i * 10);
        println!("Appended: {}, len: {}, cap: {}", i * 10, arr.len(), arr.capacity());
    }

    arr.insert(2, 99).context("insert into the middle")?;
    println!("After insert(2, 99): {:?}", arr);

    let removed = arr.delete(0).context("delete the front element")?;
    println!("Deleted {}: {:?}", removed, arr);

    println!("max = {}, min = {}, sum = {}", arr.max()?, arr.min()?, arr.sum()?);
    println!("linear_search(99) = {:?}", arr.linear_search(&99));

    println!("Iterating elements:");
    for (i, val) in arr.iter().enumerate() {
        println!("Index {}: {}", i, val);
    }

    while let Ok(val) = arr.pop() {
        println!("Popped: {}, len: {}", val, arr.len());
    }

    match arr.get(0) {
        Ok(v) => println!("Unexpected element {}", v),
        Err(e) => println!("get(0) on empty array: {}", e),
    }

    Ok(())
}
