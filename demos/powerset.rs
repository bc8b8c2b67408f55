//! Power set of the command-line arguments.
//!
//! Run with: `cargo run --example powerset -- a b c`
//! With options: `cargo run --example powerset -- --lazy --max-len 4 a b c d`

use clap::Parser;
use powerset_rs::powerset::{subset_count, try_power_set, PowerSetConfig};
use powerset_rs::subsets::try_subsets;

#[derive(Parser, Debug)]
#[command(name = "powerset")]
#[command(about = "Print all subsets of the given elements in canonical order")]
struct Args {
    /// Elements of the input sequence
    elements: Vec<String>,

    /// Refuse inputs with more elements than this
    #[arg(short, long)]
    max_len: Option<usize>,

    /// Stream subsets instead of building the whole family
    #[arg(short, long)]
    lazy: bool,

    /// Log level
    #[arg(long, default_value_t = simplelog::LevelFilter::Info)]
    log_level: simplelog::LevelFilter,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    simplelog::TermLogger::init(
        args.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    println!("n = {}, subsets = {}", args.elements.len(), subset_count(args.elements.len()));

    let config = PowerSetConfig {
        max_len: args.max_len,
    };

    if args.lazy {
        for (i, subset) in try_subsets(&args.elements, &config)?.enumerate() {
            println!("{:>4}: {:?}", i, subset);
        }
    } else {
        let family = try_power_set(&args.elements, &config)?;
        for (i, subset) in family.iter().enumerate() {
            println!("{:>4}: {:?}", i, subset);
        }
    }

    Ok(())
}
