//! Sort whitespace-separated integers read from stdin and print them one per line.
//!
//! e.g.
//! ```text
//! echo "300 1 200 2 100" | cargo run --features cli --bin radix-sort -- --radix 10
//! ```

use anyhow::Context;
use clap::Parser;
use keyed_radix::{RadixSort, DEFAULT_RADIX};
use std::io::{self, BufRead, BufWriter, Write};

/// Radix sort integers from stdin.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Buckets per pass (>= 2)
    #[arg(short, long, default_value_t = DEFAULT_RADIX)]
    radix: usize,

    /// Fixed number of digits per key, instead of deriving it from the largest key
    #[arg(short, long)]
    digits: Option<usize>,

    /// Shift keys by the smallest key, allowing negative input
    #[arg(long, default_value_t = false)]
    rebase: bool,

    /// Disable multi-threading
    #[arg(long, default_value_t = false)]
    single_threaded: bool,
}

fn read_values(input: impl BufRead) -> anyhow::Result<Vec<i64>> {
    let mut values = Vec::new();

    for (line_no, line) in input.lines().enumerate() {
        let line = line.context("failed to read stdin")?;
        for token in line.split_whitespace() {
            let v = token
                .parse::<i64>()
                .with_context(|| format!("line {}: `{}` is not an integer", line_no + 1, token))?;
            values.push(v);
        }
    }

    Ok(values)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut values = read_values(io::stdin().lock())?;

    let mut builder = values.radix_sort_builder(|v| *v).with_radix(args.radix);

    if let Some(digits) = args.digits {
        builder = builder.with_digit_width(digits);
    }
    if args.rebase {
        builder = builder.with_rebase();
    }
    if args.single_threaded {
        builder = builder.with_parallel(false).with_single_threaded_tuner();
    }

    builder.sort().context("sort rejected")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for v in values.iter() {
        writeln!(out, "{}", v)?;
    }
    out.flush()?;

    Ok(())
}
