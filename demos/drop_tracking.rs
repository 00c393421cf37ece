use dynarray::DynamicArray;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

struct Tracked(usize, Arc<AtomicUsize>);

impl Drop for Tracked {
    fn drop(&mut self) {
        println!("Dropping element {}", self.0);
        self.1.fetch_add(1, Ordering::SeqCst);
    }
}

fn main() -> anyhow::Result<()> {
    println!("--- RAII & Element Ownership Example ---");
    let drop_count = Arc::new(AtomicUsize::new(0));

    {
        let mut arr = DynamicArray::new();
        for i in 0..12 {
            arr.append(Tracked(i, drop_count.clone()));
        }
        println!("Array created with {} elements (cap {}).", arr.len(), arr.capacity());

        let popped = arr.pop()?;
        println!("Popped element {}; caller owns it now.", popped.0);
        drop(popped);

        let deleted = arr.delete(0)?;
        println!("Deleted element {}.", deleted.0);
        drop(deleted);

        let mut rest = arr.into_iter();
        if let Some(first) = rest.next() {
            println!("Took element {} from the owning iterator.", first.0);
        }
        println!("{} elements left unconsumed.", rest.len());
        // Scope ends here, the iterator drops what remains
    }

    println!("Total elements dropped: {}", drop_count.load(Ordering::SeqCst));
    anyhow::ensure!(drop_count.load(Ordering::SeqCst) == 12, "every element must drop exactly once");
    Ok(())
}
