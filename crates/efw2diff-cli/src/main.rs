//! efw2diff CLI
//!
//! Compares two EFW2 wage-report files record by record.

use clap::Parser;
use efw2diff_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "efw2diff-cli")]
#[command(about = "Compare two EFW2 wage-report files field by field", long_about = None)]
struct Cli {
    #[command(flatten)]
    compare: commands::compare::CompareArgs,
}

fn main() {
    let cli = Cli::parse();
    init(Profile::Development);

    if let Err(e) = commands::compare::execute(cli.compare) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
