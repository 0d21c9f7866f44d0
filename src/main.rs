use std::collections::BTreeSet;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use serde::Serialize;

mod index;
mod io;
mod search;
mod util;

use index::{PartialSuffixArray, RankIndex, DEFAULT_CHECKPOINT_INTERVAL};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser, Debug)]
#[command(
    name = "bwtmatch",
    author,
    version,
    about = "BWT indexing and approximate pattern matching",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Checkpoint interval for rank queries
    #[arg(long, global = true, default_value_t = DEFAULT_CHECKPOINT_INTERVAL)]
    checkpoint: usize,

    /// Emit results as JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the Burrows-Wheeler transform of a text (line 1: text)
    Transform {
        /// Input dataset file
        input: String,
    },
    /// Invert a transform back to the original text (line 1: transform)
    Invert {
        /// Input dataset file
        input: String,
    },
    /// Count exact pattern matches (line 1: transform; line 2: patterns)
    Count {
        /// Input dataset file
        input: String,
    },
    /// Approximate matching with bounded mismatches
    /// (line 1: text; line 2: patterns; line 3: max mismatches)
    Approx {
        /// Input dataset file
        input: String,
        /// Partial suffix array sampling step
        #[arg(long = "sa-step", default_value_t = 5)]
        sa_step: usize,
        /// Worker threads for the per-pattern loop
        #[arg(short = 't', long = "threads", default_value_t = 1)]
        threads: usize,
    },
    /// Build a partial suffix array (line 1: text; line 2: step K)
    Psa {
        /// Input dataset file
        input: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (checkpoint, json) = (cli.checkpoint, cli.json);
    match cli.command {
        Commands::Transform { input } => run_transform(&input, json),
        Commands::Invert { input } => run_invert(&input, json),
        Commands::Count { input } => run_count(&input, checkpoint, json),
        Commands::Approx {
            input,
            sa_step,
            threads,
        } => run_approx(&input, checkpoint, sa_step, threads, json),
        Commands::Psa { input } => run_psa(&input, json),
    }
}

fn read_dataset(path: &str) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("cannot read dataset '{}'", path))
}

#[derive(Serialize)]
struct TextReport {
    result: String,
}

#[derive(Serialize)]
struct CountReport {
    pattern: String,
    count: usize,
}

#[derive(Serialize)]
struct ApproxReport {
    pattern: String,
    offsets: Vec<usize>,
}

#[derive(Serialize)]
struct PsaReport {
    rank: usize,
    offset: usize,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

fn run_transform(input: &str, json: bool) -> Result<()> {
    let text = io::dataset::parse_text(&read_dataset(input)?)?;
    let augmented = util::alphabet::with_sentinel(&text);
    let transform = index::bwt::transform(&augmented);
    let result = String::from_utf8_lossy(&transform).into_owned();
    if json {
        print_json(&TextReport { result })?;
    } else {
        println!("{result}");
    }
    Ok(())
}

fn run_invert(input: &str, json: bool) -> Result<()> {
    let transform = io::dataset::parse_transform(&read_dataset(input)?)?;
    let text = index::bwt::invert(&transform);
    let result = String::from_utf8_lossy(&text).into_owned();
    if json {
        print_json(&TextReport { result })?;
    } else {
        println!("{result}");
    }
    Ok(())
}

fn run_count(input: &str, checkpoint: usize, json: bool) -> Result<()> {
    let ds = io::dataset::parse_count(&read_dataset(input)?)?;
    let rank_index = RankIndex::from_transform(&ds.transform, checkpoint);
    let counts: Vec<usize> = ds
        .patterns
        .iter()
        .map(|p| search::count_matches(&rank_index, p))
        .collect();

    if json {
        let reports: Vec<CountReport> = ds
            .patterns
            .iter()
            .zip(&counts)
            .map(|(p, &count)| CountReport {
                pattern: String::from_utf8_lossy(p).into_owned(),
                count,
            })
            .collect();
        print_json(&reports)?;
    } else {
        let line: Vec<String> = counts.iter().map(ToString::to_string).collect();
        println!("{}", line.join(" "));
    }
    Ok(())
}

fn run_approx(
    input: &str,
    checkpoint: usize,
    sa_step: usize,
    threads: usize,
    json: bool,
) -> Result<()> {
    let ds = io::dataset::parse_approx(&read_dataset(input)?)?;
    let rank_index = RankIndex::from_text(&ds.text, checkpoint);
    let psa = PartialSuffixArray::from_text(&ds.text, sa_step);

    // 各模式只读共享同一索引，模式级并行是纯 scale-out
    let match_one = |pattern: &Vec<u8>| {
        search::approximate_match(&ds.text, &rank_index, &psa, pattern, ds.max_mismatches)
    };
    let per_pattern: Vec<Vec<usize>> = if threads > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("cannot build worker thread pool")?;
        pool.install(|| ds.patterns.par_iter().map(match_one).collect())
    } else {
        ds.patterns.iter().map(match_one).collect()
    };

    if json {
        let reports: Vec<ApproxReport> = ds
            .patterns
            .iter()
            .zip(per_pattern)
            .map(|(p, offsets)| ApproxReport {
                pattern: String::from_utf8_lossy(p).into_owned(),
                offsets,
            })
            .collect();
        print_json(&reports)?;
    } else {
        let merged: BTreeSet<usize> = per_pattern.into_iter().flatten().collect();
        let line: Vec<String> = merged.iter().map(ToString::to_string).collect();
        println!("{}", line.join(" "));
    }
    Ok(())
}

fn run_psa(input: &str, json: bool) -> Result<()> {
    let ds = io::dataset::parse_psa(&read_dataset(input)?)?;
    let psa = PartialSuffixArray::from_text(&ds.text, ds.step);
    let entries = psa.entries();

    if json {
        let reports: Vec<PsaReport> = entries
            .iter()
            .map(|&(rank, offset)| PsaReport { rank, offset })
            .collect();
        print_json(&reports)?;
    } else {
        for (rank, offset) in entries {
            println!("{rank},{offset}");
        }
    }
    Ok(())
}
