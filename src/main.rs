//! Stable Match - Binary Entry Point
//!
//! Runs the matcher on the built-in dating-site sample and prints the input
//! tables, an unstable naive pairing with its blocking pairs, and the
//! stable result.

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use stable_match::engine::{blocking_pairs, Matcher, MatcherConfig, Selection};
use stable_match::{render, sample};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum SelectionArg {
    Lowest,
    Highest,
    Fifo,
    Lifo,
    Random,
}

/// Command line options
#[derive(Parser, Debug)]
#[command(name = "stable-match")]
#[command(version)]
#[command(
    about = "Gale-Shapley stable matching on the sample dating-site instance",
    long_about = None
)]
struct Cli {
    /// Order in which free proposers are picked
    #[arg(short, long, value_enum, default_value_t = SelectionArg::Lowest)]
    selection: SelectionArg,

    /// Seed for `--selection random`
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Print every proposal
    #[arg(short, long, default_value_t = false)]
    trace: bool,

    /// Log level (overridden by RUST_LOG)
    #[arg(
        short = 'l',
        long,
        default_value = "warn",
        value_parser = ["trace", "debug", "info", "warn", "error"]
    )]
    log_level: String,
}

impl Cli {
    fn matcher_config(&self) -> MatcherConfig {
        let selection = match self.selection {
            SelectionArg::Lowest => Selection::LowestIndex,
            SelectionArg::Highest => Selection::HighestIndex,
            SelectionArg::Fifo => Selection::Fifo,
            SelectionArg::Lifo => Selection::Lifo,
            SelectionArg::Random => Selection::Random { seed: self.seed },
        };
        MatcherConfig::new()
            .with_selection(selection)
            .with_events(self.trace)
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);
    tracing::info!(?cli, "starting");

    let proposers = sample::proposer_preferences();
    let receivers = sample::receiver_preferences();

    println!("===========================================");
    println!("  Stable Match - Gale-Shapley");
    println!("===========================================");
    println!();
    print!("{}", render::preferences("Men's preferences:", &proposers));
    println!();
    print!("{}", render::preferences("Women's preferences:", &receivers));
    println!();

    let naive = sample::naive_assignment();
    print!(
        "{}",
        render::pairs("Naive assignment:", naive.iter().map(|(p, r)| (p, r)))
    );
    match blocking_pairs(&proposers, &receivers, &naive) {
        Ok(blocking) if blocking.is_empty() => println!("  stable"),
        Ok(blocking) => {
            for (p, r) in &blocking {
                println!("  unstable: {p} and {r} prefer each other");
            }
        }
        Err(e) => {
            eprintln!("ERROR: {e}");
            std::process::exit(1);
        }
    }
    println!();

    let matcher = Matcher::with_config(cli.matcher_config());
    let matching = match matcher.run(&proposers, &receivers) {
        Ok(matching) => matching,
        Err(e) => {
            eprintln!("ERROR: {e}");
            std::process::exit(1);
        }
    };

    if cli.trace {
        println!("Proposals:");
        print!("{}", render::events(matching.events()));
        println!();
    }

    print!("{}", render::matching("Stable matching:", &matching));
    println!();

    let receipt = matching.receipt();
    let stats = matching.stats();
    println!("Receipt:");
    println!("  Pairs:       {}", receipt.size);
    println!("  Proposals:   {}", stats.proposals);
    println!("  Rejections:  {}", stats.rejections);
    println!("  Breakups:    {}", stats.breakups);
    println!("  Root:        {}", receipt.root_hex());
    match ssz_rs::serialize(&receipt) {
        Ok(bytes) => println!("  Encoded:     {} bytes", bytes.len()),
        Err(e) => println!("  ERROR: failed to encode receipt: {e:?}"),
    }
}
