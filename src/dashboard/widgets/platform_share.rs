use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Gauge},
    Frame,
};

use crate::aggregates;
use crate::dashboard::app::App;
use crate::formatters::format_number;
use crate::platform::PlatformBucket;

/// Reach share per platform bucket, one gauge each. Shares are relative to
/// the overall reach, so overlapping bucket labels may not sum to 100%.
pub fn draw_platform_share(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Reach by Platform ")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
            ]
            .as_ref(),
        )
        .split(inner);

    let total_reach = aggregates::totals(&app.campaigns).reach;
    let breakdown = aggregates::platform_breakdown(&app.campaigns);

    for (stats, chunk) in breakdown.iter().zip(chunks.iter()) {
        let share = if total_reach == 0 {
            0.0
        } else {
            stats.metrics.reach as f64 / total_reach as f64
        };

        let color = match stats.bucket {
            PlatformBucket::Instagram => Color::Magenta,
            PlatformBucket::Facebook => Color::Blue,
            PlatformBucket::Campaign => Color::Green,
        };

        let gauge = Gauge::default()
            .block(Block::default().title(stats.bucket.name()))
            .gauge_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .ratio(share.clamp(0.0, 1.0))
            .label(format!(
                "{} reached ({:.0}%)",
                format_number(stats.metrics.reach),
                share * 100.0
            ));

        f.render_widget(gauge, *chunk);
    }
}
