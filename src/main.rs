//! Reverb Estimator - Octave-band reverberation time estimation
//!
//! A CLI tool that estimates T60 per octave band for rectangular rooms
//! using Sabine's formula.

mod cli;
mod commands;
mod config;
mod constants;
mod domain;
mod error;
mod export;
mod output;
mod store;
mod types;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
