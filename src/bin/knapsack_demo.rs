//! Solve one small instance with every strategy and print the results.
//!
//! Run with:
//! `cargo run --bin knapsack_demo -- --capacity 4`

use std::env;

use knapsack_dp::{Item, KnapsackProblem};

const DEFAULT_ITEMS: [Item; 3] = [Item::new(4, 1), Item::new(5, 2), Item::new(1, 3)];
const DEFAULT_CAPACITY: i64 = 4;

fn main() {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let options = match Options::parse(env::args().skip(1)) {
        Ok(Parsed::Run(opts)) => opts,
        Ok(Parsed::Help) => {
            Options::print_help();
            return;
        }
        Err(err) => {
            eprintln!("knapsack_demo: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    let problem = KnapsackProblem::new(&options.items);
    let comparison = match problem.compare(options.capacity) {
        Ok(cmp) => cmp,
        Err(err) => {
            eprintln!("knapsack_demo: {err}");
            std::process::exit(1);
        }
    };

    for (strategy, solution) in &comparison.results {
        if let Some(snapshot) = solution.snapshot.as_ref().filter(|_| !options.quiet) {
            println!("{}: {snapshot}", snapshot.label());
        }
        println!("{strategy}: {}", solution.value);
    }

    if comparison.agreed_value().is_none() {
        eprintln!("knapsack_demo: strategies disagree");
        std::process::exit(1);
    }
}

#[derive(Debug, PartialEq)]
struct Options {
    items: Vec<Item>,
    capacity: i64,
    quiet: bool,
}

#[derive(Debug, PartialEq)]
enum Parsed {
    Run(Options),
    Help,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Parsed, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut items = Vec::new();
        let mut capacity = DEFAULT_CAPACITY;
        let mut quiet = false;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                return Ok(Parsed::Help);
            } else if arg == "--quiet" || arg == "-q" {
                quiet = true;
            } else if let Some(value) = arg.strip_prefix("--capacity=") {
                capacity = parse_capacity(value)?;
            } else if arg == "--capacity" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --capacity".to_string())?
                    .into();
                capacity = parse_capacity(&value)?;
            } else if let Some(value) = arg.strip_prefix("--item=") {
                items.push(parse_item(value)?);
            } else if arg == "--item" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --item".to_string())?
                    .into();
                items.push(parse_item(&value)?);
            } else {
                return Err(format!("unknown argument `{arg}`"));
            }
        }

        if items.is_empty() {
            items.extend_from_slice(&DEFAULT_ITEMS);
        }

        Ok(Parsed::Run(Options {
            items,
            capacity,
            quiet,
        }))
    }

    fn print_help() {
        eprintln!(
            "Usage: knapsack_demo [--capacity N] [--item WEIGHT:VALUE]... [--quiet]\n\n\
             Without --item the instance is (4:1) (5:2) (1:3); the default capacity is {DEFAULT_CAPACITY}.\n\
             --quiet suppresses the memo/dp table dumps."
        );
    }
}

fn parse_capacity(value: &str) -> Result<i64, String> {
    value
        .parse::<i64>()
        .map_err(|_| format!("capacity must be an integer, got `{value}`"))
}

fn parse_item(value: &str) -> Result<Item, String> {
    let (weight, val) = value
        .split_once(':')
        .ok_or_else(|| format!("item must look like WEIGHT:VALUE, got `{value}`"))?;
    let weight = weight
        .trim()
        .parse::<i64>()
        .map_err(|_| format!("bad item weight `{weight}`"))?;
    let val = val
        .trim()
        .parse::<i64>()
        .map_err(|_| format!("bad item value `{val}`"))?;
    Ok(Item::new(weight, val))
}
