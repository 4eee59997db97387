//! Tab kinds
//!
//! Every tab refers to an entity from one family of ad platforms. The kind
//! only drives presentation (label, icon), so an unrecognised tag degrades to
//! [`TabKind::Unknown`] instead of failing, but stays detectable through
//! [`TabKind::is_recognized`].

use serde::{Deserialize, Serialize};

use crate::error::TabError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TabKind {
    GoogleAds,
    MetaAds,
    TiktokAds,
    LinkedinAds,
    MicrosoftAds,
    /// Fallback for tags this build does not know about
    #[default]
    Unknown,
}

impl TabKind {
    pub const ALL: [TabKind; 6] = [
        TabKind::GoogleAds,
        TabKind::MetaAds,
        TabKind::TiktokAds,
        TabKind::LinkedinAds,
        TabKind::MicrosoftAds,
        TabKind::Unknown,
    ];

    /// Parse a tag, falling back to `Unknown` for anything unrecognised
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or(TabKind::Unknown)
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, TabKind::Unknown)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TabKind::GoogleAds => "google_ads",
            TabKind::MetaAds => "meta_ads",
            TabKind::TiktokAds => "tiktok_ads",
            TabKind::LinkedinAds => "linkedin_ads",
            TabKind::MicrosoftAds => "microsoft_ads",
            TabKind::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TabKind::GoogleAds => "Google Ads",
            TabKind::MetaAds => "Meta Ads",
            TabKind::TiktokAds => "TikTok Ads",
            TabKind::LinkedinAds => "LinkedIn Ads",
            TabKind::MicrosoftAds => "Microsoft Ads",
            TabKind::Unknown => "Account",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TabKind::GoogleAds => "google",
            TabKind::MetaAds => "meta",
            TabKind::TiktokAds => "tiktok",
            TabKind::LinkedinAds => "linkedin",
            TabKind::MicrosoftAds => "microsoft",
            TabKind::Unknown => "generic",
        }
    }
}

impl std::fmt::Display for TabKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TabKind {
    type Err = TabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "google_ads" => Ok(TabKind::GoogleAds),
            "meta_ads" => Ok(TabKind::MetaAds),
            "tiktok_ads" => Ok(TabKind::TiktokAds),
            "linkedin_ads" => Ok(TabKind::LinkedinAds),
            "microsoft_ads" => Ok(TabKind::MicrosoftAds),
            "unknown" => Ok(TabKind::Unknown),
            _ => Err(TabError::UnknownKind(s.to_string())),
        }
    }
}

impl From<String> for TabKind {
    fn from(tag: String) -> Self {
        TabKind::from_tag(&tag)
    }
}

impl From<TabKind> for String {
    fn from(kind: TabKind) -> Self {
        kind.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_round_trip() {
        for kind in TabKind::ALL {
            assert_eq!(kind.as_str().parse::<TabKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_parse_is_lenient_about_case_and_dashes() {
        assert_eq!("Google-Ads".parse::<TabKind>().unwrap(), TabKind::GoogleAds);
        assert_eq!(" META_ADS ".parse::<TabKind>().unwrap(), TabKind::MetaAds);
    }

    #[test]
    fn test_unknown_tag() {
        // Strict parsing reports the tag
        assert_eq!(
            "snapchat_ads".parse::<TabKind>(),
            Err(TabError::UnknownKind("snapchat_ads".to_string()))
        );

        // Lenient parsing falls back, and the fallback is detectable
        let kind = TabKind::from_tag("snapchat_ads");
        assert_eq!(kind, TabKind::Unknown);
        assert!(!kind.is_recognized());
        assert!(TabKind::TiktokAds.is_recognized());
    }

    #[test]
    fn test_serde_uses_tags() {
        let json = serde_json::to_string(&TabKind::LinkedinAds).unwrap();
        assert_eq!(json, "\"linkedin_ads\"");

        let kind: TabKind = serde_json::from_str("\"pinterest_ads\"").unwrap();
        assert_eq!(kind, TabKind::Unknown);
    }
}
