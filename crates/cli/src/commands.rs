use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sort::{Record, SortAlgorithm, algorithm_name, sort_records};
use tracing::{debug, info, warn};
use vector::Vector;

use crate::Result;
use crate::cli::{BenchArgs, Command, GenerateArgs, SortArgs};
use crate::input::read_records;
use crate::output::{format_elapsed, write_record, write_records};

pub fn run(command: Command) -> Result<()> {
    let stdin = io::stdin().lock();
    let mut stdout = BufWriter::new(io::stdout().lock());

    match command {
        Command::Bench(args) => run_bench(&args, stdin, &mut stdout)?,
        Command::Sort(args) => run_sort(&args, stdin, &mut stdout)?,
        Command::Generate(args) => run_generate(&args, &mut stdout)?,
    }
    stdout.flush()?;
    Ok(())
}

/// Sorts one copy of the input with each algorithm and reports wall times.
pub fn run_bench<R: BufRead, W: Write>(args: &BenchArgs, input: R, out: &mut W) -> Result<()> {
    let mut counting = read_records(input, 0, args.strict)?;
    let mut baseline = Vector::new();
    baseline.clone_from(&counting);

    writeln!(out, "Count of lines is {}", counting.len())?;

    let start = Instant::now();
    sort_records(SortAlgorithm::CountingSort, &mut counting);
    let counting_elapsed = start.elapsed();

    let start = Instant::now();
    sort_records(SortAlgorithm::StdStableSort, &mut baseline);
    let baseline_elapsed = start.elapsed();

    debug!(
        algorithm = algorithm_name(SortAlgorithm::CountingSort),
        elapsed = ?counting_elapsed,
        "sorted"
    );
    debug!(
        algorithm = algorithm_name(SortAlgorithm::StdStableSort),
        elapsed = ?baseline_elapsed,
        "sorted"
    );
    if counting != baseline {
        warn!("counting sort and stable sort produced different orders");
    }

    writeln!(
        out,
        "Counting sort time: {}",
        format_elapsed(counting_elapsed, args.unit)
    )?;
    writeln!(
        out,
        "STL stable sort time: {}",
        format_elapsed(baseline_elapsed, args.unit)
    )?;
    Ok(())
}

/// Reads, counting-sorts, and prints records in `KEY\tPAYLOAD` form.
pub fn run_sort<R: BufRead, W: Write>(args: &SortArgs, input: R, out: &mut W) -> Result<()> {
    let mut records = read_records(input, args.reserve, args.strict)?;
    debug!(records = records.len(), capacity = records.capacity(), "read input");

    sort_records(SortAlgorithm::CountingSort, &mut records);
    write_records(out, &records, args.width)?;
    Ok(())
}

/// Writes `args.count` random records to `args.output` and reports on `out`.
pub fn run_generate<W: Write>(args: &GenerateArgs, out: &mut W) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut file = BufWriter::new(File::create(&args.output)?);
    write_random_records(&mut file, &mut rng, args.count, args.max_key, args.width)?;
    file.flush()?;

    info!(count = args.count, path = %args.output.display(), "generated records");
    writeln!(
        out,
        "Generated {} lines in {}",
        args.count,
        args.output.display()
    )?;
    Ok(())
}

pub fn write_random_records<W: Write, G: Rng + ?Sized>(
    out: &mut W,
    rng: &mut G,
    count: usize,
    max_key: u32,
    width: usize,
) -> io::Result<()> {
    for _ in 0..count {
        let record = Record::new(rng.random_range(0..=max_key), rng.random::<u64>());
        write_record(out, &record, width)?;
    }
    Ok(())
}
