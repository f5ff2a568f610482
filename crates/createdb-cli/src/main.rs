//! spanner-createdb binary entry point.
//!
//! Parses the command line, captures the `SPANNER_*` environment defaults,
//! and runs the provisioning workflow. Any failure prints the cause followed
//! by the usage block and exits non-zero.

mod args;
mod gcp;
mod run;
mod usage;

use args::Args;
use clap::Parser;
use createdb_core::EnvDefaults;
use env_logger::Env;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let Args { path } = Args::parse();
    let defaults = EnvDefaults::from_env();

    if let Err(err) = run::create(&path, &defaults).await {
        println!("Error:");
        println!("  {err}");
        println!();
        println!("{}", usage::USAGE);
        println!();
        std::process::exit(1);
    }
}
