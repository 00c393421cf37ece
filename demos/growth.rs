use anyhow::{Result, ensure};
use clap::Parser;
use dynarray::{DynamicArray, INITIAL_CAPACITY};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "growth")]
#[command(version, about = "Trace capacity doubling over a run of appends", long_about = None)]
struct Cli {
    /// Number of elements to append
    #[arg(short = 'n', long, default_value_t = 100)]
    count: usize,

    /// Clear the array at the end and show the reset capacity
    #[arg(long)]
    clear: bool,

    /// Set verbose level (-v shows growth events, -vv shows everything)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let mut arr = DynamicArray::new();
    let mut last_cap = arr.capacity();
    println!("start: len = 0, cap = {}", last_cap);

    for i in 0..cli.count {
        arr.append(i);
        if arr.capacity() != last_cap {
            println!("len = {:>6}: cap {:>6} -> {:>6}", arr.len(), last_cap, arr.capacity());
            last_cap = arr.capacity();
        }
    }

    let mut expected = INITIAL_CAPACITY;
    while expected < cli.count {
        expected *= 2;
    }
    ensure!(
        arr.capacity() == expected,
        "capacity {} does not match the doubling sequence (expected {})",
        arr.capacity(),
        expected
    );
    println!("end: len = {}, cap = {}", arr.len(), arr.capacity());

    if cli.clear {
        arr.clear();
        println!("after clear: len = {}, cap = {}", arr.len(), arr.capacity());
    }

    Ok(())
}
