mod cli_util;

use clap::Parser;

use autoclose::error::DemoError;

fn main() -> Result<(), DemoError> {
    cli_util::Args::parse().execute()
}
