use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ancestral_coloring::export::{load_coloring, save_coloring};
use ancestral_coloring::sequence::for_each_feasible;
use ancestral_coloring::verify::verify;
use ancestral_coloring::{
    exhaustive_check, AncestralColorer, ColorSequence, ColoringConfig, MAX_HEIGHT, MIN_HEIGHT,
};

#[derive(Parser, Debug)]
#[command(
    name = "ancestral-coloring",
    about = "Ancestral colorings of perfect binary trees via the Color-Splitting Algorithm"
)]
struct Cli {
    /// Log at debug level (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Write the coloring to this file (height line, then one class per line).
    #[arg(long)]
    export: Option<PathBuf>,
    /// Check coverage, sizes and the Ancestral Property of the result.
    #[arg(long)]
    verify: bool,
    /// Do not print the color classes.
    #[arg(long)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Balanced ancestral coloring of T(h).
    Balanced {
        /// Tree height h (>= 2; every node is stored, so memory caps it in practice).
        #[arg(long, value_parser = clap::value_parser!(u32).range(i64::from(MIN_HEIGHT)..=i64::from(MAX_HEIGHT)))]
        height: u32,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Ancestral coloring for a manual feasible color sequence (e.g. `4 4 6`).
    Manual {
        /// Class sizes, one per color, in any order.
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        sizes: Vec<String>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// List every feasible color sequence for a height.
    List {
        /// Tree height h (>= 2).
        #[arg(long, value_parser = clap::value_parser!(u32).range(i64::from(MIN_HEIGHT)..=i64::from(MAX_HEIGHT)))]
        height: u32,
    },
    /// Color and verify every feasible color sequence for a height.
    Exhaustive {
        /// Tree height h (>= 2).
        #[arg(long, value_parser = clap::value_parser!(u32).range(i64::from(MIN_HEIGHT)..=i64::from(MAX_HEIGHT)))]
        height: u32,
    },
    /// Verify a previously exported coloring.
    Check {
        /// Exported coloring file.
        file: PathBuf,
        /// Also require class sizes to be balanced.
        #[arg(long)]
        balanced: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Balanced { height, output } => {
            run_coloring(ColoringConfig::balanced(height), &output)?
        }
        Commands::Manual { sizes, output } => {
            let sequence: ColorSequence = sizes
                .join(" ")
                .parse()
                .context("invalid manual color sequence")?;
            run_coloring(ColoringConfig::from_sequence(sequence), &output)?
        }
        Commands::List { height } => run_list(height)?,
        Commands::Exhaustive { height } => run_exhaustive(height)?,
        Commands::Check { file, balanced } => run_check(file, balanced)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_coloring(config: ColoringConfig, output: &OutputArgs) -> Result<()> {
    let config = config.with_verification(output.verify);
    let run = AncestralColorer::new(config)
        .run()
        .context("color sequence rejected")?;

    println!("*** Input:");
    println!("    Tree height: h = {}", run.sequence.height());
    println!("    c = {}", run.sequence);
    println!("*** Output:");
    println!(
        "    Execution time in milliseconds: {}",
        run.elapsed.as_millis()
    );

    if !output.quiet {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for class in run.coloring.classes() {
            writeln!(out, "    Color {}: {}", class.color(), class)?;
        }
    }
    println!("    Fingerprint: {}", run.coloring.fingerprint());

    if let Some(path) = &output.export {
        save_coloring(path, &run.coloring)?;
        println!("    Exported to {}", path.display());
    }

    if let Some(report) = &run.report {
        print!("{}", report);
        if !report.passed() {
            bail!("coloring failed verification");
        }
    }

    Ok(())
}

fn run_list(height: u32) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut result: io::Result<()> = Ok(());
    let mut count = 0u64;

    for_each_feasible(height, |sizes| {
        if result.is_err() {
            return;
        }
        count += 1;
        let line = sizes
            .iter()
            .map(|size| size.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        result = writeln!(out, "{}", line);
    });
    result.context("failed to write feasible sequences")?;

    eprintln!("{} feasible sequences for h = {}", count, height);
    Ok(())
}

fn run_exhaustive(height: u32) -> Result<()> {
    let report = exhaustive_check(height)?;

    for (sequence, err) in &report.failures {
        println!("    c = {}: FAILED ({})", sequence, err);
    }
    if !report.passed() {
        bail!(
            "{} of {} feasible sequences failed for h = {}",
            report.failures.len(),
            report.checked,
            height
        );
    }

    println!(
        "h = {}: {} feasible sequences, ALL PASSED",
        report.height, report.checked
    );
    Ok(())
}

fn run_check(file: PathBuf, balanced: bool) -> Result<()> {
    let coloring = load_coloring(&file)?;
    let report = verify(&coloring, balanced);

    print!("{}", report);
    if !report.passed() {
        bail!("{} is not a valid ancestral coloring", file.display());
    }
    Ok(())
}
