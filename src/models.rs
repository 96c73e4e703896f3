use crate::platform::Platform;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Campaign {
    pub name: String,
    pub platform: Platform,
    pub reach: u64,
    pub engagement: u64,
    pub clicks: u64,
    pub spent: f64,
    // Supplied by the ad platform; not derivable from spent / engagement
    pub cpr: f64,
}

impl Campaign {
    pub fn new(
        name: &str,
        platform: Platform,
        reach: u64,
        engagement: u64,
        clicks: u64,
        spent: f64,
        cpr: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            platform,
            reach,
            engagement,
            clicks,
            spent,
            cpr,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Metrics {
    pub reach: u64,
    pub engagement: u64,
    pub clicks: u64,
    pub spent: f64,
}

impl Metrics {
    pub fn add(&mut self, campaign: &Campaign) {
        self.reach += campaign.reach;
        self.engagement += campaign.engagement;
        self.clicks += campaign.clicks;
        self.spent += campaign.spent;
    }

    /// Average cost per result (spend / engagement). None when there is
    /// nothing to divide by, rendered as N/A downstream.
    pub fn cost_per_result(&self) -> Option<f64> {
        if self.engagement == 0 {
            None
        } else {
            Some(self.spent / self.engagement as f64)
        }
    }

    pub fn cost_per_click(&self) -> Option<f64> {
        if self.clicks == 0 {
            None
        } else {
            Some(self.spent / self.clicks as f64)
        }
    }
}

/// One row of a rendered report: a single campaign, a platform bucket, or the
/// all-campaigns total depending on the grouping.
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub label: String,
    pub platform: Option<String>,
    pub campaigns: usize,
    #[serde(flatten)]
    pub metrics: Metrics,
    pub cpr: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_add() {
        let mut metrics = Metrics::default();
        metrics.add(&Campaign::new(
            "Kubota Parts Search",
            Platform::Facebook,
            738,
            203,
            5,
            20.94,
            0.10,
        ));
        metrics.add(&Campaign::new(
            "Expert Hands",
            Platform::Instagram,
            1370,
            30,
            22,
            13.93,
            0.46,
        ));

        assert_eq!(metrics.reach, 2108);
        assert_eq!(metrics.engagement, 233);
        assert_eq!(metrics.clicks, 27);
        assert!((metrics.spent - 34.87).abs() < 1e-9);
    }

    #[test]
    fn test_zero_denominators_are_none() {
        let metrics = Metrics::default();
        assert_eq!(metrics.cost_per_result(), None);
        assert_eq!(metrics.cost_per_click(), None);
    }

    #[test]
    fn test_cost_per_result() {
        let metrics = Metrics {
            reach: 0,
            engagement: 200,
            clicks: 0,
            spent: 20.0,
        };
        assert_eq!(metrics.cost_per_result(), Some(0.1));
    }
}
