/// Data structures for the tab strip
use uuid::Uuid;

use crate::address::display_label;

/// A browser tab: just the URL it points at
#[derive(Debug, Clone, PartialEq)]
pub struct Tab {
    pub url: String,
}

/// A tab paired with the state of its label in the tab bar
#[derive(Debug, Clone, PartialEq)]
pub struct TabEntry {
    /// Render key for the label element
    pub id: Uuid,
    pub tab: Tab,
    pub label: String,
}

impl TabEntry {
    pub fn new(url: String, label: String) -> TabEntry {
        TabEntry {
            id: Uuid::new_v4(),
            tab: Tab { url },
            label,
        }
    }

    /// Point the tab at a new URL and relabel it
    pub fn navigate(&mut self, url: String) {
        self.label = display_label(&url);
        self.tab.url = url;
    }
}
