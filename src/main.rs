//! Evaluate the Church-encoded boolean demonstration and print the report to
//! standard output.
//!
//! Example usage:
//!
//!     cargo run -- --show-constants
//!     cargo run -- --scenario "NOT TRUE"

use church_lambda_calc::demo::{run_demo, DemoConfig};
use clap::Parser;

fn main() {
    let demo_config = DemoConfig::parse();

    let demo_result = run_demo(&demo_config);

    match demo_result {
        Ok(report) => {
            println!("{}", report);
        }

        Err(run_error) => {
            println!("{}", run_error);
        }
    }
}
