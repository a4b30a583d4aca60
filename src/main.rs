use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::Parser;
use colored::*;

use taskline::commands::{CmdResult, MessageLevel};
use taskline::config::Config;
use taskline::error::Result;
use taskline::session::Session;
use taskline::store::fs::FileStore;

mod args;
use args::Cli;

const DIVIDER: &str = "----------------------------------------";

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let data_file = resolve_data_file(&cli)?;

    let mut session = Session::new(FileStore::new(data_file));
    if let Err(e) = session.load() {
        // A broken data file should not block the session; start empty.
        print_error(&e.to_string());
    }

    print_result(&session.welcome());

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match session.handle(&line) {
            Ok(result) => {
                let exit = result.exit;
                print_result(&result);
                if exit {
                    break;
                }
            }
            Err(e) => print_error(&e.to_string()),
        }
    }

    Ok(())
}

fn resolve_data_file(cli: &Cli) -> Result<PathBuf> {
    if let Some(file) = &cli.file {
        return Ok(file.clone());
    }
    let config = Config::load(".")?;
    Ok(config.data_file)
}

fn print_result(result: &CmdResult) {
    println!("{}", DIVIDER);
    for message in &result.messages {
        match message.level {
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Error => println!("{}", message.content.red()),
            MessageLevel::Info => println!("{}", message.content),
        }
    }
    for entry in &result.listed {
        println!("{}", entry.render());
    }
    println!("{}", DIVIDER);
}

fn print_error(message: &str) {
    println!("{}", DIVIDER);
    println!("{}", message.red());
    println!("{}", DIVIDER);
}
