//! Command-line surface: global flags plus the interactive menu.

pub mod menu;
pub mod render;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "payroll",
    version,
    about = "Manage employee payroll records from an interactive menu"
)]
pub struct Cli {
    /// Config file path (default: <config_dir>/payroll/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding the payroll data file (default: <data_dir>/payroll)
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable logging entirely
    #[arg(short, long)]
    pub quiet: bool,
}
