use anyhow::Result;
use clap::Parser;
use terrako_report::cli::{Cli, Commands};
use terrako_report::{dashboard, run_report};

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Dashboard { tab }) => dashboard::run_dashboard(tab.into()),
        Some(Commands::Show(args)) => run_report(args),
        None => run_report(Default::default()),
    }
}
