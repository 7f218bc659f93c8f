mod output;
mod reference;

use clap::{Parser, Subcommand};
use models::Standard;

#[derive(Debug, Parser)]
#[command(name = "udichk", about = "UDI device identifier validator", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Run in verbose mode with detailed output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Detect the issuing standard of a device identifier and validate it
    Validate {
        /// The UDI-DI to validate, e.g. 00614141007349 or +A12B
        code: String,

        /// Print the result as JSON instead of a result card
        #[arg(long)]
        json: bool,
    },
    /// Show reference information about an issuing standard
    Info {
        /// Standard name: gs1, hibcc or iccbba
        standard: String,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::set_verbose(cli.verbose);

    let exit_code = match cli.command {
        Commands::Validate { code, json } => run_validate(&code, json),
        Commands::Info { standard } => run_info(&standard),
    };

    std::process::exit(exit_code);
}

fn run_validate(code: &str, json: bool) -> i32 {
    logging::debug(&format!("validating input: {:?}", code));

    match evaluator::evaluate_code(code) {
        Some(result) => {
            if json {
                output::print_result_json(&result);
            } else {
                output::print_result(&result);
            }
            if result.valid {
                0
            } else {
                1
            }
        }
        None => {
            // Empty input produces no result card at all.
            logging::debug("input is empty after trimming, nothing to validate");
            0
        }
    }
}

fn run_info(standard: &str) -> i32 {
    match standard.parse::<Standard>() {
        Ok(standard) => {
            println!("{}", reference::describe(standard));
            0
        }
        Err(message) => {
            logging::error(&message);
            2
        }
    }
}
