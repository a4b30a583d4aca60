use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "taskline")]
#[command(about = "A line-command personal task tracker", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the task data file (overrides taskline.json)
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,
}
