use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use super::app::{App, Tab};
use super::widgets::{
    campaign_table::draw_campaign_table, overview::draw_overview,
    platform_panels::draw_platform_panels,
};
use crate::dataset::campaign_period_label;

pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(4), // Header
                Constraint::Length(3), // Tabs
                Constraint::Min(14),   // Main content
                Constraint::Length(3), // Help
            ]
            .as_ref(),
        )
        .split(f.size());

    draw_header(f, chunks[0]);
    draw_tabs(f, chunks[1], app);
    draw_content(f, chunks[2], app);
    draw_help(f, chunks[3]);
}

fn draw_header(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled(
                "TERRAKO",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Social Media Performance"),
        ]),
        Line::from(Span::styled(
            format!("Campaign Period: {}", campaign_period_label()),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let header = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        );

    f.render_widget(header, area);
}

fn draw_tabs(f: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = Tab::ALL.iter().map(|tab| Line::from(tab.title())).collect();

    let tabs = Tabs::new(titles)
        .select(app.tab.index())
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .divider(" | ");

    f.render_widget(tabs, area);
}

fn draw_content(f: &mut Frame, area: Rect, app: &mut App) {
    match app.tab {
        Tab::Overview => draw_overview(f, area, app),
        Tab::Campaigns => draw_campaign_table(f, area, app),
        Tab::Platforms => draw_platform_panels(f, area, app),
    }
}

fn draw_help(f: &mut Frame, area: Rect) {
    let help_text = vec![
        Span::raw("["),
        Span::styled(
            "q",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("]uit ["),
        Span::styled(
            "1-3",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("] jump to tab ["),
        Span::styled(
            "tab/←→",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("] switch ["),
        Span::styled(
            "↑↓",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("] scroll"),
    ];

    let help = Paragraph::new(Line::from(help_text))
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP))
        .alignment(Alignment::Center);

    f.render_widget(help, area);
}
