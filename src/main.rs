use std::process::ExitCode;

use clap::Parser;
use climatetree_auth::cli::{self, Cli, Command};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let issuer = cli::bootstrap()?;

    match cli.command {
        Command::Issue(args) => cli::issue::run(&issuer, args),
        Command::Validate(args) => cli::validate::run(&issuer, args),
        Command::Inspect(args) => cli::inspect::run(&issuer, args),
    }
}
