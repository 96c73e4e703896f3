pub mod aggregates;
pub mod cli;
pub mod dashboard;
pub mod dataset;
pub mod formatters;
pub mod models;
pub mod platform;

use anyhow::{Context, Result};
use cli::{GroupBy, OutputFormat};
use models::{Campaign, Metrics, ReportRow};

pub fn run_report(args: cli::Args) -> Result<()> {
    let mut campaigns = dataset::campaign_data();

    // Apply platform filter if specified
    if let Some(filter) = &args.platform {
        let needle = filter.to_lowercase();
        campaigns.retain(|c| c.platform.label().to_lowercase().contains(&needle));
    }

    if campaigns.is_empty() {
        println!("No campaigns match the specified platform filter.");
        return Ok(());
    }

    if let Some(n) = args.top {
        campaigns = aggregates::top_by_engagement(&campaigns, n);
    }

    let rows = build_rows(&campaigns, &args.group_by);

    // Format and write output
    let rendered = match args.format {
        OutputFormat::Table => formatters::format_table(&rows, args.detailed, args.summary),
        OutputFormat::Csv => formatters::format_csv(&rows, args.detailed)?,
        OutputFormat::Json => formatters::format_json(&rows)?,
        OutputFormat::Markdown => formatters::format_markdown(&rows, args.detailed, args.summary),
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            println!("Report written to {}", path.display());
        }
        None => println!("{}", rendered),
    }

    // Print summary if requested
    if args.summary && args.format != OutputFormat::Table {
        formatters::print_summary(&campaigns);
    }

    Ok(())
}

pub fn build_rows(campaigns: &[Campaign], group_by: &GroupBy) -> Vec<ReportRow> {
    match group_by {
        // One row per campaign in input order; cpr is the supplied literal
        GroupBy::Campaign => campaigns
            .iter()
            .map(|campaign| {
                let mut metrics = Metrics::default();
                metrics.add(campaign);
                ReportRow {
                    label: campaign.name.clone(),
                    platform: Some(campaign.platform.label()),
                    campaigns: 1,
                    metrics,
                    cpr: Some(campaign.cpr),
                }
            })
            .collect(),

        // One row per fixed bucket; cpr is derived from the summed metrics
        GroupBy::Platform => aggregates::platform_breakdown(campaigns)
            .into_iter()
            .map(|stats| ReportRow {
                label: stats.bucket.name().to_string(),
                platform: None,
                campaigns: stats.campaigns,
                cpr: stats.metrics.cost_per_result(),
                metrics: stats.metrics,
            })
            .collect(),

        GroupBy::None => {
            let metrics = aggregates::totals(campaigns);
            vec![ReportRow {
                label: "All campaigns".to_string(),
                platform: None,
                campaigns: campaigns.len(),
                cpr: metrics.cost_per_result(),
                metrics,
            }]
        }
    }
}
