use crate::aggregates;
use crate::dataset::campaign_period_label;
use crate::models::{Campaign, Metrics, ReportRow};
use anyhow::Result;
use colored::Colorize;
use prettytable::{format, Cell, Row, Table};

pub fn format_table(rows: &[ReportRow], detailed: bool, show_summary: bool) -> String {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);

    // Set headers based on detail level
    if detailed {
        table.set_titles(Row::new(vec![
            Cell::new("Campaign").style_spec("bFc"),
            Cell::new("Platform").style_spec("bFc"),
            Cell::new("Reach").style_spec("bFc"),
            Cell::new("Engagement").style_spec("bFc"),
            Cell::new("Clicks").style_spec("bFc"),
            Cell::new("Spent (EUR)").style_spec("bFc"),
            Cell::new("CPR (EUR)").style_spec("bFc"),
        ]));
    } else {
        table.set_titles(Row::new(vec![
            Cell::new("Campaign").style_spec("bFc"),
            Cell::new("Platform").style_spec("bFc"),
            Cell::new("Reach").style_spec("bFc"),
            Cell::new("Engagement").style_spec("bFc"),
            Cell::new("Spent (EUR)").style_spec("bFc"),
        ]));
    }

    let mut total = Metrics::default();
    for row in rows {
        total.reach += row.metrics.reach;
        total.engagement += row.metrics.engagement;
        total.clicks += row.metrics.clicks;
        total.spent += row.metrics.spent;

        if detailed {
            table.add_row(Row::new(vec![
                Cell::new(&row.label),
                Cell::new(&platform_cell(row)),
                Cell::new(&format_number(row.metrics.reach)),
                Cell::new(&format_number(row.metrics.engagement)),
                Cell::new(&format_number(row.metrics.clicks)),
                Cell::new(&format!("{:.2}", row.metrics.spent)).style_spec("Fg"),
                Cell::new(&format_cpr(row.cpr)),
            ]));
        } else {
            table.add_row(Row::new(vec![
                Cell::new(&row.label),
                Cell::new(&platform_cell(row)),
                Cell::new(&format_number(row.metrics.reach)),
                Cell::new(&format_number(row.metrics.engagement)),
                Cell::new(&format!("{:.2}", row.metrics.spent)).style_spec("Fg"),
            ]));
        }
    }

    // Add summary row if requested
    if show_summary {
        table.add_empty_row();
        if detailed {
            table.add_row(Row::new(vec![
                Cell::new("TOTAL").style_spec("bFy"),
                Cell::new("").style_spec("bFy"),
                Cell::new(&format_number(total.reach)).style_spec("bFy"),
                Cell::new(&format_number(total.engagement)).style_spec("bFy"),
                Cell::new(&format_number(total.clicks)).style_spec("bFy"),
                Cell::new(&format!("{:.2}", total.spent)).style_spec("bFgY"),
                Cell::new(&format_cpr(total.cost_per_result())).style_spec("bFy"),
            ]));
        } else {
            table.add_row(Row::new(vec![
                Cell::new("TOTAL").style_spec("bFy"),
                Cell::new("").style_spec("bFy"),
                Cell::new(&format_number(total.reach)).style_spec("bFy"),
                Cell::new(&format_number(total.engagement)).style_spec("bFy"),
                Cell::new(&format!("{:.2}", total.spent)).style_spec("bFgY"),
            ]));
        }
    }

    table.to_string()
}

pub fn format_csv(rows: &[ReportRow], detailed: bool) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);

    if detailed {
        writer.write_record([
            "Campaign",
            "Platform",
            "Reach",
            "Engagement",
            "Clicks",
            "Spent EUR",
            "CPR EUR",
        ])?;
    } else {
        writer.write_record(["Campaign", "Platform", "Reach", "Engagement", "Spent EUR"])?;
    }

    for row in rows {
        if detailed {
            writer.write_record([
                row.label.clone(),
                platform_cell(row),
                row.metrics.reach.to_string(),
                row.metrics.engagement.to_string(),
                row.metrics.clicks.to_string(),
                format!("{:.2}", row.metrics.spent),
                row.cpr.map(|v| format!("{:.3}", v)).unwrap_or_default(),
            ])?;
        } else {
            writer.write_record([
                row.label.clone(),
                platform_cell(row),
                row.metrics.reach.to_string(),
                row.metrics.engagement.to_string(),
                format!("{:.2}", row.metrics.spent),
            ])?;
        }
    }

    let bytes = writer.into_inner()?;
    Ok(String::from_utf8(bytes)?)
}

pub fn format_json(rows: &[ReportRow]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(rows)
}

pub fn format_markdown(rows: &[ReportRow], detailed: bool, show_summary: bool) -> String {
    let mut md = String::new();

    // Headers
    if detailed {
        md.push_str("| Campaign | Platform | Reach | Engagement | Clicks | Spent (EUR) | CPR (EUR) |\n");
        md.push_str("|----------|----------|-------|------------|--------|-------------|-----------|\n");
    } else {
        md.push_str("| Campaign | Platform | Reach | Engagement | Spent (EUR) |\n");
        md.push_str("|----------|----------|-------|------------|-------------|\n");
    }

    let mut total = Metrics::default();

    // Data rows
    for row in rows {
        total.reach += row.metrics.reach;
        total.engagement += row.metrics.engagement;
        total.clicks += row.metrics.clicks;
        total.spent += row.metrics.spent;

        if detailed {
            md.push_str(&format!(
                "| {} | {} | {} | {} | {} | {:.2} | {} |\n",
                row.label,
                platform_cell(row),
                format_number(row.metrics.reach),
                format_number(row.metrics.engagement),
                format_number(row.metrics.clicks),
                row.metrics.spent,
                format_cpr(row.cpr),
            ));
        } else {
            md.push_str(&format!(
                "| {} | {} | {} | {} | {:.2} |\n",
                row.label,
                platform_cell(row),
                format_number(row.metrics.reach),
                format_number(row.metrics.engagement),
                row.metrics.spent,
            ));
        }
    }

    // Summary row
    if show_summary {
        if detailed {
            md.push_str(&format!(
                "| **TOTAL** | | **{}** | **{}** | **{}** | **{:.2}** | **{}** |\n",
                format_number(total.reach),
                format_number(total.engagement),
                format_number(total.clicks),
                total.spent,
                format_cpr(total.cost_per_result()),
            ));
        } else {
            md.push_str(&format!(
                "| **TOTAL** | | **{}** | **{}** | **{:.2}** |\n",
                format_number(total.reach),
                format_number(total.engagement),
                total.spent,
            ));
        }
    }

    md
}

fn platform_cell(row: &ReportRow) -> String {
    match &row.platform {
        Some(platform) => platform.clone(),
        None => format!("{} campaigns", row.campaigns),
    }
}

pub fn format_number(num: u64) -> String {
    let num_str = num.to_string();
    let mut result = String::new();
    let mut count = 0;

    for ch in num_str.chars().rev() {
        if count == 3 {
            result.push(',');
            count = 0;
        }
        result.push(ch);
        count += 1;
    }

    result.chars().rev().collect()
}

pub fn format_euros(value: f64) -> String {
    format!("€{:.2}", value)
}

/// CPR with three decimals, N/A when there is no denominator.
pub fn format_cpr(cpr: Option<f64>) -> String {
    match cpr {
        Some(value) => format!("€{:.3}", value),
        None => "N/A".to_string(),
    }
}

pub fn print_summary(campaigns: &[Campaign]) {
    println!("\n{}", "=== Campaign Summary ===".bright_cyan().bold());
    println!("Campaign Period: {}", campaign_period_label());

    let total = aggregates::totals(campaigns);

    println!("\n{}", "Overall Performance:".yellow());
    println!("  Campaigns: {}", campaigns.len());
    println!("  Total Reach: {}", format_number(total.reach).green());
    println!(
        "  Total Engagement: {}",
        format_number(total.engagement).green()
    );
    println!("  Link Clicks: {}", format_number(total.clicks).green());
    println!(
        "  Total Spend: {}",
        format_euros(total.spent).green().bold()
    );
    println!("  Avg CPR: {}", format_cpr(total.cost_per_result()).cyan());
    println!(
        "  Cost per Click: {}",
        format_cpr(total.cost_per_click()).cyan()
    );

    println!("\n{}", "By Platform:".yellow());
    for stats in aggregates::platform_breakdown(campaigns) {
        println!("\n  {}:", stats.bucket.name().bright_blue());
        println!("    Campaigns: {}", stats.campaigns);
        println!("    Reach: {}", format_number(stats.metrics.reach));
        println!("    Engagement: {}", format_number(stats.metrics.engagement));
        println!("    Spent: {}", format_euros(stats.metrics.spent).green());
        println!("    Avg CPR: {}", format_cpr(stats.metrics.cost_per_result()));
    }

    println!("\n{}", "Highlights:".yellow());
    if let Some(campaign) = aggregates::best_engagement(campaigns) {
        println!(
            "  Best Engagement: {} ({} engagements)",
            campaign.name.bright_blue(),
            format_number(campaign.engagement)
        );
    }
    if let Some(campaign) = aggregates::best_reach(campaigns) {
        println!(
            "  Best Reach: {} ({} people reached)",
            campaign.name.bright_blue(),
            format_number(campaign.reach)
        );
    }
    if let Some(campaign) = aggregates::most_clicks(campaigns) {
        println!(
            "  Most Clicks: {} ({} link clicks)",
            campaign.name.bright_blue(),
            format_number(campaign.clicks)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<ReportRow> {
        vec![
            ReportRow {
                label: "Kubota Parts Search".to_string(),
                platform: Some("Facebook".to_string()),
                campaigns: 1,
                metrics: Metrics {
                    reach: 738,
                    engagement: 203,
                    clicks: 5,
                    spent: 20.94,
                },
                cpr: Some(0.10),
            },
            ReportRow {
                label: "Instagram".to_string(),
                platform: None,
                campaigns: 3,
                metrics: Metrics {
                    reach: 19_820,
                    engagement: 2_149,
                    clicks: 81,
                    spent: 36.27,
                },
                cpr: None,
            },
        ]
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(738), "738");
        assert_eq!(format_number(19_820), "19,820");
        assert_eq!(format_number(1_234_567), "1,234,567");
    }

    #[test]
    fn test_format_cpr_na() {
        assert_eq!(format_cpr(Some(0.001)), "€0.001");
        assert_eq!(format_cpr(None), "N/A");
    }

    #[test]
    fn test_format_csv_basic() {
        let csv = format_csv(&sample_rows(), false).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Campaign,Platform,Reach,Engagement,Spent EUR"
        );
        assert_eq!(
            lines.next().unwrap(),
            "Kubota Parts Search,Facebook,738,203,20.94"
        );
        assert_eq!(lines.next().unwrap(), "Instagram,3 campaigns,19820,2149,36.27");
    }

    #[test]
    fn test_format_markdown_total_row() {
        let md = format_markdown(&sample_rows(), true, true);
        assert!(md.contains("| Kubota Parts Search | Facebook | 738 | 203 | 5 | 20.94 | €0.100 |"));
        assert!(md.ends_with("| **TOTAL** | | **20,558** | **2,352** | **86** | **57.21** | **€0.024** |\n"));
    }

    #[test]
    fn test_format_json_shape() {
        let json = format_json(&sample_rows()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["label"], "Kubota Parts Search");
        assert_eq!(parsed[0]["reach"], 738);
        assert_eq!(parsed[1]["cpr"], serde_json::Value::Null);
    }
}
