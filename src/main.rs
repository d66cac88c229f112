//! Shops CLI - shop and product inventory backed by a JSON file

use std::process::ExitCode;

fn main() -> ExitCode {
    shops_cli::cli::run()
}
