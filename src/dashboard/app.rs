use crate::cli::TabName;
use crate::dataset::campaign_data;
use crate::models::Campaign;

/// The three dashboard views. A closed set so the per-tab dispatch in ui.rs
/// stays exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Overview,
    Campaigns,
    Platforms,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Overview, Tab::Campaigns, Tab::Platforms];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Campaigns => "Campaigns",
            Tab::Platforms => "Platforms",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Overview => 0,
            Tab::Campaigns => 1,
            Tab::Platforms => 2,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Tab::Overview => Tab::Campaigns,
            Tab::Campaigns => Tab::Platforms,
            Tab::Platforms => Tab::Overview,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Tab::Overview => Tab::Platforms,
            Tab::Campaigns => Tab::Overview,
            Tab::Platforms => Tab::Campaigns,
        }
    }
}

impl From<TabName> for Tab {
    fn from(name: TabName) -> Self {
        match name {
            TabName::Overview => Tab::Overview,
            TabName::Campaigns => Tab::Campaigns,
            TabName::Platforms => Tab::Platforms,
        }
    }
}

pub struct App {
    pub tab: Tab,
    pub campaigns: Vec<Campaign>,
    pub table_scroll: usize,
}

impl App {
    pub fn new(initial_tab: Tab) -> Self {
        Self {
            tab: initial_tab,
            campaigns: campaign_data(),
            table_scroll: 0,
        }
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn next_tab(&mut self) {
        self.tab = self.tab.next();
    }

    pub fn prev_tab(&mut self) {
        self.tab = self.tab.prev();
    }

    pub fn scroll_up(&mut self) {
        if self.table_scroll > 0 {
            self.table_scroll -= 1;
        }
    }

    pub fn scroll_down(&mut self) {
        if self.table_scroll < self.campaigns.len().saturating_sub(1) {
            self.table_scroll += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregates;

    #[test]
    fn test_tab_cycle() {
        let mut tab = Tab::Overview;
        for _ in 0..Tab::ALL.len() {
            tab = tab.next();
        }
        assert_eq!(tab, Tab::Overview);
        assert_eq!(Tab::Overview.prev(), Tab::Platforms);
    }

    #[test]
    fn test_tab_switches_do_not_change_aggregates() {
        let mut app = App::new(Tab::Overview);
        let before = aggregates::totals(&app.campaigns);
        let top_before = aggregates::top_by_engagement(&app.campaigns, 5);

        app.next_tab();
        app.select_tab(Tab::Platforms);
        app.prev_tab();
        app.next_tab();

        let after = aggregates::totals(&app.campaigns);
        assert_eq!(before.reach, after.reach);
        assert_eq!(before.engagement, after.engagement);
        assert_eq!(before.clicks, after.clicks);
        assert_eq!(before.spent, after.spent);

        let top_after = aggregates::top_by_engagement(&app.campaigns, 5);
        let names =
            |top: &[Campaign]| top.iter().map(|c| c.name.clone()).collect::<Vec<_>>();
        assert_eq!(names(&top_before), names(&top_after));
    }

    #[test]
    fn test_scroll_bounds() {
        let mut app = App::new(Tab::Campaigns);
        app.scroll_up();
        assert_eq!(app.table_scroll, 0);
        for _ in 0..100 {
            app.scroll_down();
        }
        assert_eq!(app.table_scroll, app.campaigns.len() - 1);
    }
}
