//! SellerDesk CLI
//!
//! Command-line interface over the seller/department store

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Debug, Parser)]
#[command(name = "sellerdesk")]
#[command(about = "SellerDesk - Seller and department records", long_about = None)]
struct Cli {
    #[command(flatten)]
    config: config::Config,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Department operations
    Department(commands::department::DepartmentArgs),
    /// Seller operations
    Seller(commands::seller::SellerArgs),
}

fn main() {
    let cli = Cli::parse();
    cli.config.init_logging();

    let result = cli.config.open_store().and_then(|conn| match cli.command {
        Commands::Department(args) => commands::department::execute(args, &conn),
        Commands::Seller(args) => commands::seller::execute(args, &conn),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
