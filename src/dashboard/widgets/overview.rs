use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::aggregates;
use crate::dashboard::app::App;
use crate::formatters::{format_cpr, format_euros, format_number};

use super::platform_share::draw_platform_share;
use super::top_chart::draw_top_chart;

pub fn draw_overview(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(5), // Metric cards
                Constraint::Min(8),    // Charts
                Constraint::Length(5), // Key insights
            ]
            .as_ref(),
        )
        .split(area);

    draw_metric_cards(f, chunks[0], app);
    draw_charts(f, chunks[1], app);
    draw_insights(f, chunks[2], app);
}

fn draw_metric_cards(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
            ]
            .as_ref(),
        )
        .split(area);

    let total = aggregates::totals(&app.campaigns);

    let per_click = match total.cost_per_click() {
        Some(cost) => format!("{} per click", format_euros(cost)),
        None => "N/A".to_string(),
    };

    draw_card(
        f,
        chunks[0],
        "Total Spend",
        format_euros(total.spent),
        "Across all campaigns",
    );
    draw_card(
        f,
        chunks[1],
        "Total Reach",
        format_number(total.reach),
        "Unique users reached",
    );
    draw_card(
        f,
        chunks[2],
        "Total Engagement",
        format_number(total.engagement),
        "Actions taken",
    );
    draw_card(f, chunks[3], "Link Clicks", format_number(total.clicks), &per_click);
}

fn draw_card(f: &mut Frame, area: Rect, title: &str, value: String, subtitle: &str) {
    let lines = vec![
        Line::from(Span::styled(title, Style::default().fg(Color::Gray))),
        Line::from(Span::styled(
            value,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            subtitle,
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );

    f.render_widget(card, area);
}

fn draw_charts(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(area);

    draw_platform_share(f, chunks[0], app);
    draw_top_chart(f, chunks[1], app);
}

fn draw_insights(f: &mut Frame, area: Rect, app: &App) {
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

    let engagement = aggregates::best_engagement(&app.campaigns).map(|c| {
        (
            c.name.clone(),
            format!(
                "{} engagements at {} CPR",
                format_number(c.engagement),
                format_cpr(Some(c.cpr))
            ),
        )
    });
    let reach = aggregates::best_reach(&app.campaigns)
        .map(|c| (c.name.clone(), format!("{} people reached", format_number(c.reach))));
    let clicks = aggregates::most_clicks(&app.campaigns)
        .map(|c| (c.name.clone(), format!("{} link clicks", format_number(c.clicks))));

    draw_insight(f, chunks[0], "Best Engagement", engagement);
    draw_insight(f, chunks[1], "Best Reach", reach);
    draw_insight(f, chunks[2], "Most Clicks", clicks);
}

fn draw_insight(f: &mut Frame, area: Rect, title: &str, insight: Option<(String, String)>) {
    let lines = match insight {
        Some((name, detail)) => vec![
            Line::from(Span::styled(
                name,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(detail, Style::default().fg(Color::DarkGray))),
        ],
        None => vec![Line::from(Span::styled(
            "N/A",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" {} ", title))
                .title_style(Style::default().fg(Color::Green))
                .borders(Borders::ALL),
        );

    f.render_widget(panel, area);
}
