// SPDX-FileCopyrightText: 2026 The Written Hug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Written Hug - commissioned-letter service.
//!
//! Binary entry point: loads configuration, then dispatches to the
//! `serve` or `config` subcommand.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use clap::{Parser, Subcommand};

mod config_cmd;
mod serve;

/// Written Hug - commissioned-letter service.
#[derive(Parser, Debug)]
#[command(name = "written-hug", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the API server.
    Serve,
    /// Print the resolved configuration with secrets redacted.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match hug_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            hug_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Serve) => {
            if let Err(err) = serve::run_serve(config).await {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }
        Some(Commands::Config) => {
            config_cmd::run_config(&config);
        }
        None => {
            println!("written-hug: use --help for available commands");
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    #[cfg(not(target_env = "msvc"))]
    fn jemalloc_is_active() {
        // Verify jemalloc is the global allocator by advancing the epoch.
        // Only jemalloc supports this -- the system allocator would fail.
        use tikv_jemalloc_ctl::{epoch, stats};
        epoch::advance().unwrap();
        let allocated = stats::allocated::read().unwrap();
        assert!(allocated > 0, "jemalloc should report non-zero allocation");
    }
}
