pub mod export;
pub mod init;
pub mod month;
pub mod overview;
pub mod sum;
pub mod week;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Show the days of a calendar week")]
    Week(week::WeekArgs),
    #[command(about = "Show the range and weeks of a month")]
    Month(month::MonthArgs),
    #[command(about = "Show the table and summary of one work week", arg_required_else_help = true)]
    Overview(overview::OverviewArgs),
    #[command(about = "Get the monthly summary", arg_required_else_help = true)]
    Sum(sum::SumArgs),
    #[command(about = "Export a week or month table", arg_required_else_help = true)]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Week(args) => week::cmd(args),
            Commands::Month(args) => month::cmd(args),
            Commands::Overview(args) => overview::cmd(args),
            Commands::Sum(args) => sum::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}
