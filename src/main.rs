use std::error::Error;
use std::process::ExitCode;
use clap::Parser;
use log::{info, LevelFilter};
use rand::rngs::StdRng;
use rand::SeedableRng;

use algosort::{generate, lookup, names, Algorithm, Distribution, Harness, DEFAULT_SEED, DEFAULT_SIZE, REGISTRY};

/// Times every sorting algorithm on the same generated records and checks the results.
#[derive(Parser, Debug)]
#[command(name = "algosort", version, about)]
struct Args {
    /// Number of records to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Seed of the record generator
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Shape of the generated records
    #[arg(short, long, value_enum, default_value_t = Distribution::Uniform)]
    distribution: Distribution,

    /// Algorithm to run, may be repeated (default: all)
    #[arg(short, long = "algorithm", value_parser = parse_algorithm)]
    algorithms: Vec<&'static Algorithm>,

    /// Print the algorithm names and exit
    #[arg(long)]
    list: bool,

    /// Log level, RUST_LOG takes precedence
    #[arg(long, default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,
}

fn parse_algorithm(name: &str) -> Result<&'static Algorithm, String> {
    lookup(name).ok_or_else(|| {
        format!("unknown algorithm '{}', expected one of: {}", name, names().collect::<Vec<_>>().join(", "))
    })
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    let args = Args::parse();

    env_logger::builder()
        .filter_level(args.log_level)
        .parse_default_env()
        .try_init()?;

    if args.list {
        for name in names() {
            println!("{}", name);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let mut rng = StdRng::seed_from_u64(args.seed);
    let dataset = generate(&mut rng, args.size, args.distribution);
    info!("Generated {} records ({:?}, seed {})", dataset.len(), args.distribution, args.seed);
    let harness = Harness::new(dataset);

    let selected: Vec<&Algorithm> = if args.algorithms.is_empty() {
        REGISTRY.iter().collect()
    } else {
        args.algorithms
    };

    let mut failed = 0;
    for algorithm in selected {
        let outcome = harness.run(algorithm);
        let status = if outcome.verdict.is_ok() {
            ""
        } else {
            failed += 1;
            " FAILED"
        };
        println!("{:>20} {:8.3}s{}", outcome.name, outcome.elapsed.as_secs_f64(), status);
    }

    if failed > 0 {
        eprintln!("{} algorithm(s) produced wrong output", failed);
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
