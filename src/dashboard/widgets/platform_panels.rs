use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::aggregates::{self, PlatformStats};
use crate::dashboard::app::App;
use crate::formatters::{format_cpr, format_euros, format_number};
use crate::platform::PlatformBucket;

pub fn draw_platform_panels(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage(33),
                Constraint::Percentage(33),
                Constraint::Percentage(34),
            ]
            .as_ref(),
        )
        .split(area);

    let breakdown = aggregates::platform_breakdown(&app.campaigns);
    for (stats, chunk) in breakdown.iter().zip(chunks.iter()) {
        draw_panel(f, *chunk, stats);
    }
}

fn draw_panel(f: &mut Frame, area: Rect, stats: &PlatformStats) {
    let color = match stats.bucket {
        PlatformBucket::Instagram => Color::Magenta,
        PlatformBucket::Facebook => Color::Blue,
        PlatformBucket::Campaign => Color::Green,
    };

    let lines = vec![
        Line::from(vec![
            Span::raw("Campaigns: "),
            Span::styled(
                stats.campaigns.to_string(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("Reach: "),
            Span::styled(
                format_number(stats.metrics.reach),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("Engagement: "),
            Span::styled(
                format_number(stats.metrics.engagement),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("Clicks: "),
            Span::styled(
                format_number(stats.metrics.clicks),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("Spent: "),
            Span::styled(
                format_euros(stats.metrics.spent),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("Avg CPR: "),
            Span::styled(
                format_cpr(stats.metrics.cost_per_result()),
                Style::default().fg(Color::Green),
            ),
        ]),
    ];

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .title(format!(" {} ", stats.bucket.name()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );

    f.render_widget(panel, area);
}
