//! Tab data structure

use serde::{Deserialize, Serialize};

use crate::error::TabError;
use crate::kind::TabKind;
use crate::Result;

/// Opaque identifier of the entity a tab refers to
pub type TabId = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    /// Stable identifier, unique within the open set
    pub id: TabId,
    /// Label shown in the tab strip
    pub display_name: String,
    /// Identifier of the entity in the owning backend. Not unique across tabs.
    #[serde(default)]
    pub external_ref: String,
    /// Entity family, for icon selection
    #[serde(default)]
    pub kind: TabKind,
}

impl Tab {
    pub fn new(
        id: impl Into<TabId>,
        display_name: impl Into<String>,
        external_ref: impl Into<String>,
        kind: TabKind,
    ) -> Result<Self> {
        let tab = Self {
            id: id.into(),
            display_name: display_name.into(),
            external_ref: external_ref.into(),
            kind,
        };
        tab.validate()?;
        Ok(tab)
    }

    /// Check the structural contract. Fields are public, so values built
    /// without [`Tab::new`] must be validated before they enter a session.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(TabError::InvalidArgument(
                "Tab id cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Get display label (falls back to the external reference, then the id)
    pub fn display_label(&self) -> &str {
        if !self.display_name.trim().is_empty() {
            &self.display_name
        } else if !self.external_ref.trim().is_empty() {
            &self.external_ref
        } else {
            &self.id
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tab() {
        let tab = Tab::new("acct-1", "Acme Retail", "123-456-7890", TabKind::GoogleAds).unwrap();
        assert_eq!(tab.id, "acct-1");
        assert_eq!(tab.display_label(), "Acme Retail");
        assert_eq!(tab.kind.icon(), "google");
    }

    #[test]
    fn test_empty_id_rejected() {
        assert!(matches!(
            Tab::new("", "Acme", "ref", TabKind::MetaAds),
            Err(TabError::InvalidArgument(_))
        ));
        assert!(Tab::new("   ", "Acme", "ref", TabKind::MetaAds).is_err());
    }

    #[test]
    fn test_display_label_fallbacks() {
        let mut tab = Tab::new("acct-1", "", "act_998", TabKind::MetaAds).unwrap();
        assert_eq!(tab.display_label(), "act_998");

        tab.external_ref.clear();
        assert_eq!(tab.display_label(), "acct-1");
    }

    #[test]
    fn test_serde_layout() {
        let tab = Tab::new("acct-1", "Acme", "act_1", TabKind::MetaAds).unwrap();
        let value = serde_json::to_value(&tab).unwrap();

        assert_eq!(value["id"], "acct-1");
        assert_eq!(value["displayName"], "Acme");
        assert_eq!(value["externalRef"], "act_1");
        assert_eq!(value["kind"], "meta_ads");
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let tab: Tab = serde_json::from_str(r#"{"id":"a","displayName":"A"}"#).unwrap();
        assert_eq!(tab.external_ref, "");
        assert_eq!(tab.kind, TabKind::Unknown);
    }
}
