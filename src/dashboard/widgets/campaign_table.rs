use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::dashboard::app::App;
use crate::formatters::format_number;
use crate::platform::{Platform, PlatformBucket};

const NAME_WIDTH: usize = 22;

pub fn draw_campaign_table(f: &mut Frame, area: Rect, app: &App) {
    let header = Line::from(Span::styled(
        format!(
            "{:<name$} {:<15} {:>9} {:>11} {:>7} {:>10} {:>8}",
            "Campaign",
            "Platform",
            "Reach",
            "Engagement",
            "Clicks",
            "Spent",
            "CPR",
            name = NAME_WIDTH
        ),
        Style::default()
            .add_modifier(Modifier::BOLD)
            .add_modifier(Modifier::UNDERLINED),
    ));

    let mut items = vec![ListItem::new(header)];

    items.extend(
        app.campaigns
            .iter()
            .skip(app.table_scroll)
            .take((area.height as usize).saturating_sub(3)) // Account for borders and header
            .map(|campaign| {
                let line = vec![
                    Span::raw(format!(
                        "{:<name$} ",
                        fit_name(&campaign.name),
                        name = NAME_WIDTH
                    )),
                    Span::styled(
                        format!("{:<15} ", campaign.platform.label()),
                        Style::default().fg(platform_color(&campaign.platform)),
                    ),
                    Span::raw(format!("{:>9} ", format_number(campaign.reach))),
                    Span::styled(
                        format!("{:>11} ", format_number(campaign.engagement)),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!("{:>7} ", format_number(campaign.clicks))),
                    Span::styled(
                        format!("{:>10} ", format!("€{:.2}", campaign.spent)),
                        Style::default().fg(Color::Green),
                    ),
                    Span::raw(format!("{:>8}", format!("€{:.3}", campaign.cpr))),
                ];

                ListItem::new(Line::from(line))
            }),
    );

    let table = List::new(items).block(
        Block::default()
            .title(format!(" Campaigns ({}) ", app.campaigns.len()))
            .borders(Borders::ALL),
    );

    f.render_widget(table, area);
}

fn platform_color(platform: &Platform) -> Color {
    if PlatformBucket::Instagram.matches(platform) {
        Color::Magenta
    } else if PlatformBucket::Facebook.matches(platform) {
        Color::Blue
    } else if PlatformBucket::Campaign.matches(platform) {
        Color::Green
    } else {
        Color::White
    }
}

fn fit_name(name: &str) -> String {
    if name.width() <= NAME_WIDTH {
        return name.to_string();
    }

    let mut width = 0;
    let mut result = String::new();
    for ch in name.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + ch_width > NAME_WIDTH - 1 {
            break;
        }
        width += ch_width;
        result.push(ch);
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_name() {
        assert_eq!(fit_name("Bale Chopper"), "Bale Chopper");
        assert_eq!(
            fit_name("A very long campaign name indeed"),
            "A very long campaign …"
        );
    }

    #[test]
    fn test_platform_colors() {
        assert_eq!(platform_color(&Platform::InstagramReel), Color::Magenta);
        assert_eq!(platform_color(&Platform::Facebook), Color::Blue);
        assert_eq!(
            platform_color(&Platform::Other("TikTok".to_string())),
            Color::White
        );
    }
}
