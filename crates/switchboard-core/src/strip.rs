//! Tab strip model
//!
//! What a horizontal tab bar draws, built from a session snapshot. The
//! scroll offset belongs to the consumer; these helpers only clamp and page
//! it against the current tab list.

use serde::Serialize;

use switchboard_session::SessionSnapshot;
use switchboard_tabs::{TabId, TabKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabStripItem {
    pub id: TabId,
    pub label: String,
    pub kind: TabKind,
    pub icon: &'static str,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TabStrip {
    items: Vec<TabStripItem>,
}

impl TabStrip {
    pub fn from_snapshot(snapshot: &SessionSnapshot) -> Self {
        let items = snapshot
            .tabs()
            .iter()
            .map(|tab| TabStripItem {
                id: tab.id.clone(),
                label: tab.display_label().to_string(),
                kind: tab.kind,
                icon: tab.kind.icon(),
                is_active: snapshot.is_active(&tab.id),
            })
            .collect();

        Self { items }
    }

    pub fn items(&self) -> &[TabStripItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.items.iter().position(|item| item.is_active)
    }

    /// Largest offset that still fills the window
    fn max_offset(&self, visible: usize) -> usize {
        self.items.len().saturating_sub(visible)
    }

    pub fn clamp_offset(&self, offset: usize, visible: usize) -> usize {
        offset.min(self.max_offset(visible))
    }

    /// Items inside the window starting at `offset`
    pub fn page(&self, offset: usize, visible: usize) -> &[TabStripItem] {
        let start = self.clamp_offset(offset, visible);
        let end = (start + visible).min(self.items.len());
        &self.items[start..end]
    }

    pub fn can_page_left(&self, offset: usize, visible: usize) -> bool {
        visible > 0 && self.clamp_offset(offset, visible) > 0
    }

    pub fn can_page_right(&self, offset: usize, visible: usize) -> bool {
        visible > 0 && self.clamp_offset(offset, visible) + visible < self.items.len()
    }

    pub fn page_left(&self, offset: usize, visible: usize) -> usize {
        self.clamp_offset(offset, visible).saturating_sub(visible)
    }

    pub fn page_right(&self, offset: usize, visible: usize) -> usize {
        self.clamp_offset(offset.saturating_add(visible), visible)
    }

    /// Smallest scroll that brings `id` into the window. Unknown ids keep
    /// the (clamped) current offset.
    pub fn offset_revealing(&self, id: &str, offset: usize, visible: usize) -> usize {
        let offset = self.clamp_offset(offset, visible);
        let Some(index) = self.items.iter().position(|item| item.id == id) else {
            return offset;
        };

        if visible == 0 || index < offset {
            self.clamp_offset(index, visible)
        } else if index >= offset + visible {
            self.clamp_offset(index + 1 - visible, visible)
        } else {
            offset
        }
    }
}
