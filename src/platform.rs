use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Platform {
    Facebook,
    Instagram,
    InstagramReel,
    Campaign,

    // Forward compatibility
    Other(String),
}

impl Platform {
    /// Parse a platform label into a Platform
    pub fn from_label(s: &str) -> Self {
        match s {
            "Facebook" => Platform::Facebook,
            "Instagram" => Platform::Instagram,
            "Instagram Reel" => Platform::InstagramReel,
            "Campaign" => Platform::Campaign,
            _ => Platform::Other(s.to_string()),
        }
    }

    /// Get the label exactly as it appears in the exported data
    pub fn label(&self) -> String {
        match self {
            Platform::Facebook => "Facebook".to_string(),
            Platform::Instagram => "Instagram".to_string(),
            Platform::InstagramReel => "Instagram Reel".to_string(),
            Platform::Campaign => "Campaign".to_string(),
            Platform::Other(s) => s.clone(),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Platform {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Platform::from_label(s))
    }
}

impl TryFrom<String> for Platform {
    type Error = std::convert::Infallible;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Ok(Platform::from_label(&s))
    }
}

impl From<Platform> for String {
    fn from(platform: Platform) -> String {
        platform.label()
    }
}

/// The three fixed reporting buckets. Grouping is by label containment, so
/// "Instagram Reel" counts toward Instagram; the buckets are independent
/// filters, not a strict partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformBucket {
    Instagram,
    Facebook,
    Campaign,
}

impl PlatformBucket {
    pub const ALL: [PlatformBucket; 3] = [
        PlatformBucket::Instagram,
        PlatformBucket::Facebook,
        PlatformBucket::Campaign,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PlatformBucket::Instagram => "Instagram",
            PlatformBucket::Facebook => "Facebook",
            PlatformBucket::Campaign => "Campaign",
        }
    }

    pub fn matches(&self, platform: &Platform) -> bool {
        platform.label().contains(self.name())
    }
}

impl fmt::Display for PlatformBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_parsing() {
        assert_eq!(Platform::from_label("Facebook"), Platform::Facebook);
        assert_eq!(Platform::from_label("Instagram Reel"), Platform::InstagramReel);
        assert_eq!(
            Platform::from_label("TikTok"),
            Platform::Other("TikTok".to_string())
        );
    }

    #[test]
    fn test_reel_counts_as_instagram() {
        assert!(PlatformBucket::Instagram.matches(&Platform::InstagramReel));
        assert!(PlatformBucket::Instagram.matches(&Platform::Instagram));
        assert!(!PlatformBucket::Facebook.matches(&Platform::InstagramReel));
    }

    #[test]
    fn test_serde_roundtrip() {
        let platform = Platform::InstagramReel;
        let json = serde_json::to_string(&platform).unwrap();
        assert_eq!(json, "\"Instagram Reel\"");
        let parsed: Platform = serde_json::from_str(&json).unwrap();
        assert_eq!(platform, parsed);
    }
}
