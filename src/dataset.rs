use crate::models::Campaign;
use crate::platform::Platform;
use chrono::NaiveDate;

// Exported from the Terrako ads account, campaign period Sep 24 2025 - Jan 09 2026.
// The cpr column is the value reported by the ad platform and does not always
// equal spent / engagement; keep it verbatim.
pub fn campaign_data() -> Vec<Campaign> {
    vec![
        Campaign::new(
            "Kubota Parts Search",
            Platform::Facebook,
            738,
            203,
            5,
            20.94,
            0.10,
        ),
        Campaign::new("Expert Hands", Platform::Instagram, 1370, 30, 22, 13.93, 0.46),
        Campaign::new(
            "Kverneland Parts",
            Platform::Instagram,
            3226,
            64,
            59,
            20.9,
            0.33,
        ),
        Campaign::new(
            "Easy Parts Finding",
            Platform::Facebook,
            11885,
            52,
            51,
            20.92,
            0.40,
        ),
        Campaign::new(
            "Welcome to Terrako",
            Platform::InstagramReel,
            15224,
            2055,
            0,
            1.44,
            0.001,
        ),
        Campaign::new(
            "Chopping Season",
            Platform::Facebook,
            1739,
            106,
            2,
            11.88,
            0.11,
        ),
        Campaign::new("Bale Chopper", Platform::Campaign, 10848, 154, 173, 34.94, 0.23),
    ]
}

pub fn campaign_period() -> (NaiveDate, NaiveDate) {
    (
        NaiveDate::from_ymd_opt(2025, 9, 24).unwrap(),
        NaiveDate::from_ymd_opt(2026, 1, 9).unwrap(),
    )
}

/// Campaign period formatted for headers, e.g. "Sep 24, 2025 - Jan 09, 2026".
pub fn campaign_period_label() -> String {
    let (start, end) = campaign_period();
    format!(
        "{} - {}",
        start.format("%b %d, %Y"),
        end.format("%b %d, %Y")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_shape() {
        let campaigns = campaign_data();
        assert_eq!(campaigns.len(), 7);
        assert_eq!(campaigns[0].name, "Kubota Parts Search");
        assert_eq!(campaigns[4].platform, Platform::InstagramReel);
    }

    #[test]
    fn test_period_label() {
        assert_eq!(campaign_period_label(), "Sep 24, 2025 - Jan 09, 2026");
    }
}
