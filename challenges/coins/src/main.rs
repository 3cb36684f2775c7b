use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use log::error;

use coins::RunConfig;

#[derive(Parser)]
#[command(name = "coins")]
#[command(about = "Brute force coin combination solver", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve every problem in a problem file
    Solve {
        /// Problem file, one `<label> <target> <coin>...` per line
        #[arg(short, long, default_value = "4test.txt")]
        input: PathBuf,
        /// Satisfiable/Unsatisfiable per problem
        #[arg(long, default_value = "4SATresults.txt")]
        sat_out: PathBuf,
        /// Search time in microseconds per problem
        #[arg(long, default_value = "4Timeresults.txt")]
        time_out: PathBuf,
        /// Human readable report
        #[arg(long, default_value = "4results.txt")]
        report_out: PathBuf,
        /// Time budget per problem, in seconds
        #[arg(short, long, default_value_t = coins::DEFAULT_TIME_BUDGET.as_secs())]
        budget_secs: u64,
    },
    /// Check the fixtures under data/<category> against their expected output
    Verify {
        /// Fixture category to run
        category: String,
    },
}

fn main() -> ExitCode {
    // install global collector configured based on RUST_LOG env var.
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            input,
            sat_out,
            time_out,
            report_out,
            budget_secs,
        } => {
            let config = RunConfig {
                input,
                status_output: sat_out,
                timing_output: time_out,
                report_output: report_out,
                time_budget: Duration::from_secs(budget_secs),
            };
            match coins::run(&config) {
                Ok(_) => ExitCode::SUCCESS,
                Err(err) => {
                    error!("{}", err);
                    ExitCode::FAILURE
                }
            }
        }
        Commands::Verify { category } => {
            if coins::testing::run_all_tests(&category) > 0 {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
    }
}
