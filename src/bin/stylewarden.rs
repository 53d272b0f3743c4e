// src/bin/stylewarden.rs
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use stylewarden_core::cli::{self, Cli};

fn main() {
    match run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            process::exit(2);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    cli::dispatch(&cli)
}
