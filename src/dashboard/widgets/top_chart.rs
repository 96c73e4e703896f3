use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{BarChart, Block, Borders},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::aggregates;
use crate::dashboard::app::App;

const BAR_WIDTH: u16 = 14;

pub fn draw_top_chart(f: &mut Frame, area: Rect, app: &App) {
    let top = aggregates::top_by_engagement(&app.campaigns, 5);

    let labels: Vec<String> = top
        .iter()
        .map(|c| truncate_label(&c.name, BAR_WIDTH as usize))
        .collect();

    let bar_data: Vec<(&str, u64)> = labels
        .iter()
        .zip(top.iter())
        .map(|(label, campaign)| (label.as_str(), campaign.engagement))
        .collect();

    let bar_chart = BarChart::default()
        .block(
            Block::default()
                .title(" Top 5 Campaigns by Engagement ")
                .borders(Borders::ALL),
        )
        .data(&bar_data)
        .bar_width(BAR_WIDTH)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Green))
        .value_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        );

    f.render_widget(bar_chart, area);
}

// Bar labels render in a fixed column; cut on display width, not char count.
fn truncate_label(name: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut result = String::new();
    for ch in name.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width {
            break;
        }
        width += ch_width;
        result.push(ch);
    }
    result
}
