use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use unionfind::filter::ConnectivityFilter;
use unionfind::forest::Variant;
use unionfind::input::PairReader;
use unionfind::report;
use unionfind::simulate::{self, SimulationConfig, TrialSummary};

/// Union-find toolkit: filter redundant connections, simulate random graphs,
/// compare forest variants
#[derive(Parser)]
#[command(name = "uf", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print only the pairs that connect new components, then the count.
    Filter {
        /// Input file (site count, then pairs); stdin when omitted
        input: Option<PathBuf>,
        /// Forest variant
        #[arg(long, default_value = "weighted-rank-halving")]
        variant: String,
        /// Do not list accepted pairs
        #[arg(short, long)]
        quiet: bool,
    },
    /// Count random edges needed to connect every site.
    Simulate {
        /// Number of sites
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        sites: u64,
        /// Number of independent trials
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        trials: u64,
        /// Master seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
        /// Forest variant
        #[arg(long, default_value = "weighted-rank-halving")]
        variant: String,
        /// Output format: terminal, json
        #[arg(long, default_value = "terminal")]
        format: String,
    },
    /// Replay one input through several variants and time them.
    Compare {
        /// Input file (site count, then pairs); stdin when omitted
        input: Option<PathBuf>,
        /// Comma-separated variants; all when omitted
        #[arg(long)]
        variants: Option<String>,
        /// Output format: terminal, json
        #[arg(long, default_value = "terminal")]
        format: String,
    },
}

fn main() -> Result<()> {
    let env = env_logger::Env::new()
        .filter("UF_LOG")
        .write_style("UF_LOG_STYLE");
    env_logger::init_from_env(env);

    let cli = Cli::parse();

    match cli.command {
        Command::Filter {
            input,
            variant,
            quiet,
        } => cmd_filter(input.as_deref(), &variant, quiet),
        Command::Simulate {
            sites,
            trials,
            seed,
            variant,
            format,
        } => cmd_simulate(sites, trials, seed, &variant, &format),
        Command::Compare {
            input,
            variants,
            format,
        } => cmd_compare(input.as_deref(), variants.as_deref(), &format),
    }
}

fn parse_variant(name: &str) -> Result<Variant> {
    Variant::from_name(name.trim()).with_context(|| {
        let known: Vec<&str> = Variant::ALL.iter().map(|v| v.name()).collect();
        format!("unknown variant: {name} (expected one of {})", known.join(", "))
    })
}

fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open input: {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

fn cmd_filter(input: Option<&Path>, variant: &str, quiet: bool) -> Result<()> {
    let start = Instant::now();
    let variant = parse_variant(variant)?;
    let reader = PairReader::new(open_input(input)?).context("failed to read site count")?;
    log::info!("filtering {} sites with {variant}", reader.sites());

    let mut forest = variant.build(reader.sites());
    let mut filter = ConnectivityFilter::new(forest.as_mut());
    let mut out = BufWriter::new(io::stdout().lock());

    for pair in filter.accepted(reader) {
        let (p, q) = pair.context("failed to process input")?;
        if !quiet {
            writeln!(out, "{p} {q}")?;
        }
    }

    let summary = filter.summary();
    log::debug!("{} of {} pairs accepted", summary.accepted, summary.read);
    writeln!(out, "{} components", summary.components)?;
    writeln!(out, "elapsed time = {} ms", start.elapsed().as_millis())?;
    out.flush()?;
    Ok(())
}

fn cmd_simulate(
    sites: u64,
    trials: u64,
    seed: Option<u64>,
    variant: &str,
    format: &str,
) -> Result<()> {
    let config = SimulationConfig {
        sites: usize::try_from(sites).context("site count does not fit in memory")?,
        trials: usize::try_from(trials).context("trial count too large")?,
        seed,
        variant: parse_variant(variant)?,
    };

    let start = Instant::now();
    let summary = simulate::run(&config).context("simulation failed")?;
    log::info!(
        "{} trials on {} sites in {:?}",
        summary.trials,
        summary.sites,
        start.elapsed()
    );

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&summary)?),
        _ => print_summary(&summary),
    }
    Ok(())
}

fn print_summary(summary: &TrialSummary) {
    println!("1/2 n ln n = {}", summary.estimate);
    println!("mean = {}", summary.mean);
    match summary.stddev {
        Some(stddev) => println!("stddev = {stddev}"),
        None => println!("stddev = n/a (one trial)"),
    }
    println!("seed = {}", summary.seed);
}

fn cmd_compare(input: Option<&Path>, variants: Option<&str>, format: &str) -> Result<()> {
    let variants = match variants {
        Some(list) => list
            .split(',')
            .map(parse_variant)
            .collect::<Result<Vec<_>>>()?,
        None => Variant::ALL.to_vec(),
    };

    let reader = PairReader::new(open_input(input)?).context("failed to read site count")?;
    let sites = reader.sites();
    let pairs = reader
        .collect::<Result<Vec<_>, _>>()
        .context("failed to read pairs")?;
    log::info!("comparing {} variants on {} pairs", variants.len(), pairs.len());

    let full = report::compare(sites, &pairs, &variants).context("comparison failed")?;

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&full)?),
        _ => report::print_terminal(&full),
    }

    if !full.agreed {
        std::process::exit(1);
    }
    Ok(())
}
