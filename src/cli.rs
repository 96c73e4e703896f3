use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

fn parse_top_count(s: &str) -> Result<usize, String> {
    s.parse::<usize>()
        .map_err(|_| "Invalid campaign count".to_string())
        .and_then(|v| {
            if v >= 1 {
                Ok(v)
            } else {
                Err("Top count must be at least 1".to_string())
            }
        })
}

#[derive(Parser, Debug)]
#[command(name = "terrako-report")]
#[command(about = "Marketing performance insights and ROI analysis for Terrako campaigns")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the campaign report (default)
    #[command(visible_alias = "report")]
    Show(Args),

    /// Launch interactive dashboard
    #[command(visible_aliases = &["dash", "d"])]
    Dashboard {
        /// Tab to open first
        #[arg(short, long, value_enum, default_value = "overview")]
        tab: TabName,
    },
}

#[derive(Parser, Debug)]
pub struct Args {
    /// Group results by
    #[arg(short, long, value_enum, default_value = "campaign")]
    pub group_by: GroupBy,

    /// Filter by platform label (substring match, e.g. "Instagram")
    #[arg(short, long)]
    pub platform: Option<String>,

    /// Only the top N campaigns by engagement
    #[arg(short, long, value_parser = parse_top_count)]
    pub top: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Show clicks and cost-per-result columns
    #[arg(short, long)]
    pub detailed: bool,

    /// Show summary statistics
    #[arg(long)]
    pub summary: bool,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            group_by: GroupBy::Campaign,
            platform: None,
            top: None,
            format: OutputFormat::Table,
            detailed: false,
            summary: false,
            output: None,
        }
    }
}

#[derive(Debug, Clone, ValueEnum)]
pub enum GroupBy {
    Campaign,
    Platform,
    None,
}

#[derive(Debug, Clone, ValueEnum, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TabName {
    Overview,
    Campaigns,
    Platforms,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_top_count() {
        assert_eq!(parse_top_count("5"), Ok(5));
        assert!(parse_top_count("0").is_err());
        assert!(parse_top_count("five").is_err());
    }
}
