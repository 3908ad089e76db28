use clap::Parser;
use rangemerge::{Interval, IntervalError, Intervals, merge, parse_collection, try_merge};
use std::process::ExitCode;

/// Merges collections of closed integer intervals and prints the result, one line per collection.
#[derive(Parser)]
struct Cli {
    /// Whitespace-separated intervals, e.g. "[94200,94299] [94133,94133]". Each argument is merged
    /// separately. Runs a few built-in samples if omitted.
    collections: Vec<String>,
}

// Deliberately out of order
const SAMPLES: [&[Interval]; 3] = [
    &[
        Interval::new(94200, 94299),
        Interval::new(94133, 94133),
        Interval::new(94600, 94699),
    ],
    &[
        Interval::new(94226, 94399),
        Interval::new(94133, 94133),
        Interval::new(94200, 94299),
    ],
    // Overlapping and disjoint intervals on both sides
    &[
        Interval::new(94226, 94399),
        Interval::new(94133, 94133),
        Interval::new(94200, 94299),
        Interval::new(94250, 94450),
        Interval::new(94480, 94500),
        Interval::new(94490, 94600),
        Interval::new(93520, 93580),
        Interval::new(93590, 93600),
        Interval::new(93595, 93680),
    ],
];

fn merge_arguments(collections: &[String]) -> Result<(), IntervalError> {
    for collection in collections {
        let mut intervals = parse_collection(collection)?;
        log::debug!("parsed {} intervals from {collection:?}", intervals.len());
        try_merge(&mut intervals)?;
        println!("{}", Intervals(&intervals));
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    if cli.collections.is_empty() {
        for sample in SAMPLES {
            let mut intervals = sample.to_vec();
            merge(&mut intervals);
            println!("{}", Intervals(&intervals));
        }
        return ExitCode::SUCCESS;
    }

    if let Err(e) = merge_arguments(&cli.collections) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
