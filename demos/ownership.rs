use dynarray::DynamicArray;
use std::sync::{Arc, Mutex};
use std::thread;

fn main() -> anyhow::Result<()> {
    println!("--- Cross-thread Ownership Transfer Example ---");
    let mut arr = DynamicArray::new();
    for i in 0..10 {
        arr.append(i);
    }

    println!("Original array (thread main): {:?}", arr);

    // Move ownership to another thread
    let handle = thread::spawn(move || {
        println!("Array in new thread: {:?}", arr);
        arr.append(100);
        arr // Return ownership back
    });

    let arr = handle
        .join()
        .map_err(|_| anyhow::anyhow!("worker thread panicked"))?;
    println!("Array back in main thread: {:?} (cap {})", arr, arr.capacity());

    println!("--- Shared Mutation Behind a Mutex ---");
    let shared = Arc::new(Mutex::new(arr));
    let workers: Vec<_> = (0..4)
        .map(|t| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                for i in 0..5 {
                    if let Ok(mut guard) = shared.lock() {
                        guard.append(1000 * (t + 1) + i);
                    }
                }
            })
        })
        .collect();
    for worker in workers {
        worker
            .join()
            .map_err(|_| anyhow::anyhow!("worker thread panicked"))?;
    }

    let guard = shared
        .lock()
        .map_err(|_| anyhow::anyhow!("mutex poisoned"))?;
    println!("len = {}, cap = {}, sum = {}", guard.len(), guard.capacity(), guard.sum()?);
    Ok(())
}
