//! zerocsv - zero-copy CSV inspector
//!
//! Counts rows, columns and cells of a CSV file, optionally sums one numeric
//! column or dumps every cell, and measures scan throughput.

use clap::{Parser, ValueEnum};
use std::num::NonZeroUsize;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{debug, info, Level};
use zerocsv::{Dialect, Reader, Trim, TrimPolicy};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TrimArg {
    None,
    Leading,
    Trailing,
    Both,
}

impl From<TrimArg> for Trim {
    fn from(arg: TrimArg) -> Self {
        match arg {
            TrimArg::None => Trim::None,
            TrimArg::Leading => Trim::Leading,
            TrimArg::Trailing => Trim::Trailing,
            TrimArg::Both => Trim::LeadingAndTrailing,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "zerocsv")]
#[command(about = "A zero-copy CSV reader", long_about = None)]
struct Args {
    /// CSV file to read, or `-` for stdin
    #[arg(value_name = "FILE")]
    file: String,

    /// Field delimiter
    #[arg(short, long, default_value = ",", value_parser = single_byte)]
    delimiter: u8,

    /// Quote character
    #[arg(short, long, default_value = "\"", value_parser = single_byte)]
    quote: u8,

    /// Treat the first line as data instead of a header
    #[arg(long)]
    no_header: bool,

    /// Which ends of each cell to trim
    #[arg(long, value_enum, default_value = "both")]
    trim: TrimArg,

    /// Bytes removed by trimming
    #[arg(long, default_value = " \t")]
    trim_chars: String,

    /// Do not count or visit blank lines
    #[arg(long)]
    skip_empty_rows: bool,

    /// Drop spaces right after a delimiter
    #[arg(long)]
    skip_initial_space: bool,

    /// Column names left out of the column count
    #[arg(long, value_delimiter = ',')]
    ignore: Vec<String>,

    /// Sum the values of this 1-based column
    #[arg(short, long)]
    column: Option<NonZeroUsize>,

    /// Print every cell value
    #[arg(long)]
    dump: bool,

    /// Number of full scans for throughput measurement
    #[arg(short, long, default_value = "1")]
    iterations: usize,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn single_byte(s: &str) -> Result<u8, String> {
    match s.as_bytes() {
        [b] => Ok(*b),
        b"\\t" => Ok(b'\t'),
        _ => Err(format!("expected a single byte, got {:?}", s)),
    }
}

impl Args {
    fn dialect(&self) -> Dialect {
        Dialect::default()
            .delimiter(self.delimiter)
            .quote(self.quote)
            .header(!self.no_header)
            .trim(TrimPolicy::new(self.trim.into(), self.trim_chars.as_bytes()))
            .skip_empty_rows(self.skip_empty_rows)
            .skip_initial_space(self.skip_initial_space)
            .ignore_columns(self.ignore.iter().cloned())
    }

    fn open(&self) -> zerocsv::Result<Reader<'static>> {
        if self.file == "-" {
            Reader::read_from(std::io::stdin().lock(), self.dialect())
        } else {
            Reader::open(&self.file, self.dialect())
        }
    }
}

/// One full pass touching every cell; returns the number of cells seen.
fn scan(reader: &Reader<'_>) -> usize {
    reader.rows().map(|row| row.cells().count()).sum()
}

/// Sum of the integer cells in a 1-based column, or `None` on overflow.
fn sum_column(reader: &Reader<'_>, column: NonZeroUsize) -> Option<i64> {
    let mut sum = 0i64;
    for row in reader.rows() {
        let Some(cell) = row.cells().nth(column.get() - 1) else {
            continue;
        };
        let value = cell.value();
        match value.parse::<i64>() {
            Ok(n) => sum = sum.checked_add(n)?,
            Err(_) => debug!(value = %value, "skipping non-numeric cell"),
        }
    }
    Some(sum)
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    info!(file = %args.file, "loading");

    let reader = match args.open() {
        Ok(reader) => reader,
        Err(e) => {
            eprintln!("Could not load the file {}: {}", args.file, e);
            return ExitCode::FAILURE;
        }
    };

    info!(file = %args.file, bytes = reader.buffer().len(), "loaded");

    if args.dump {
        for (i, row) in reader.rows().enumerate() {
            for cell in row.cells() {
                println!("{}: {}", i, cell.value());
            }
        }
    }

    if let Some(column) = args.column {
        match sum_column(&reader, column) {
            Some(sum) => println!("{}", sum),
            None => {
                eprintln!("Sum of column {} overflows a 64-bit integer", column);
                return ExitCode::FAILURE;
            }
        }
    }

    let mut total_time = 0.0;
    let mut cells = 0;
    for _ in 0..args.iterations {
        let start = Instant::now();
        cells = scan(&reader);
        total_time += start.elapsed().as_secs_f64();
    }

    println!("Rows: {}", reader.row_count());
    println!("Cols: {}", reader.col_count());
    println!("Cells: {}", cells);

    if args.verbose {
        println!("Total time in (s)          = {:.6}", total_time);
        println!("Number of iterations       = {}", args.iterations);
    }

    if total_time > 0.0 {
        let volume = args.iterations as f64 * reader.buffer().len() as f64;
        let gb_per_s = volume / total_time / (1024.0 * 1024.0 * 1024.0);
        println!(" GB/s: {:.5}", gb_per_s);
    }

    info!("done");
    ExitCode::SUCCESS
}
