//! SodaDB CLI Client
//!
//! Command-line interface for interacting with SodaDB.

use clap::{Parser, Subcommand};
use reqwest::blocking::{Client, Response};
use serde_json::json;

/// SodaDB CLI
#[derive(Parser, Debug)]
#[command(name = "sodadb-cli")]
#[command(about = "CLI for the SodaDB record store")]
struct Args {
    /// Server base URL
    #[arg(short, long, default_value = "http://127.0.0.1:8080")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create or replace a record
    Put {
        /// Record id
        id: u64,

        #[arg(long, default_value = "")]
        brand: String,

        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        revenue: i64,

        #[arg(long, default_value = "")]
        soda_formula: String,
    },

    /// List all record ids
    List,

    /// Get a record by id
    Get {
        /// Record id
        id: u64,
    },

    /// Delete a record by id
    Del {
        /// Record id
        id: u64,
    },
}

fn main() {
    let args = Args::parse();
    let base = args.server.trim_end_matches('/');
    let client = Client::new();

    let request = match args.command {
        Commands::Put {
            id,
            brand,
            revenue,
            soda_formula,
        } => client.post(format!("{}/", base)).json(&json!({
            "id": id,
            "brand": brand,
            "revenue": revenue,
            "soda_formula": soda_formula,
        })),
        Commands::List => client.get(format!("{}/", base)),
        Commands::Get { id } => client.get(format!("{}/{}", base, id)),
        Commands::Del { id } => client.delete(format!("{}/{}", base, id)),
    };

    match request.send() {
        Ok(response) => std::process::exit(print_response(response)),
        Err(e) => {
            eprintln!("Request failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// Print the body and map the status to an exit code
fn print_response(response: Response) -> i32 {
    let status = response.status();
    let body = response.text().unwrap_or_default();

    if status.is_success() {
        if !body.is_empty() {
            println!("{}", body.trim_end());
        }
        0
    } else {
        eprintln!("{}: {}", status, body.trim_end());
        1
    }
}
