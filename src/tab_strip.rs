/// Tab bar controller: owns the tabs, the active index and the URL field

use crate::address::resolve_input;
use crate::config::BrowserConfig;
use crate::errors::TabError;
use crate::tab_data::TabEntry;

/// Target window hint passed to the host when opening a URL
pub const NEW_WINDOW_TARGET: &str = "_blank";

/// A toolbar action, triggered by a button or a keyboard shortcut
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Go,
    Back,
    Forward,
    Reload,
    NewTab,
    CopyLink,
    ShareLink,
    ToggleFullscreen,
}

/// Work the host environment has to carry out after an operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    OpenWindow { url: String, target: &'static str },
    Notice(String),
    Reload,
    CopyToClipboard { text: String, toast: String },
    Fullscreen(bool),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TabStrip {
    config: BrowserConfig,
    entries: Vec<TabEntry>,
    active: usize,
    url_field: String,
    fullscreen: bool,
}

impl TabStrip {
    /// Start with a single active tab on the home URL
    pub fn new(config: BrowserConfig) -> TabStrip {
        let mut strip = TabStrip {
            config,
            entries: Vec::new(),
            active: 0,
            url_field: String::new(),
            fullscreen: false,
        };
        strip.create_tab(None);
        strip
    }

    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }

    pub fn entries(&self) -> &[TabEntry] {
        &self.entries
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_entry(&self) -> &TabEntry {
        &self.entries[self.active]
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.active
    }

    pub fn url_field(&self) -> &str {
        &self.url_field
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Document title for the active tab
    pub fn window_title(&self) -> String {
        format!("{} - {}", self.active_entry().label, self.config.app_name)
    }

    /// Append a tab (home URL when none is given) and make it active.
    /// Returns the new tab's index.
    pub fn create_tab(&mut self, url: Option<String>) -> usize {
        let url = url.unwrap_or_else(|| self.config.home_url.clone());
        let index = self.entries.len();

        log::debug!("Creating tab {} at {}", index, url);
        let label = self.config.new_tab_label.clone();
        self.entries.push(TabEntry::new(url, label));

        self.activate(index);
        index
    }

    /// Make the tab at `index` active and show its URL in the URL field
    pub fn switch_tab(&mut self, index: usize) -> Result<(), TabError> {
        if index >= self.entries.len() {
            return Err(TabError::InvalidIndex(index));
        }

        self.activate(index);
        Ok(())
    }

    fn activate(&mut self, index: usize) {
        self.active = index;
        self.url_field = self.entries[index].tab.url.clone();
    }

    /// Record what the user typed into the URL bar
    pub fn set_url_field(&mut self, text: String) {
        self.url_field = text;
    }

    /// Navigate the active tab to whatever is in the URL field.
    /// Empty input is ignored.
    pub fn open_url(&mut self) -> Option<Effect> {
        let url = resolve_input(&self.url_field, &self.config)?;

        log::debug!("Opening {} in tab {}", url, self.active);
        self.entries[self.active].navigate(url.clone());

        Some(Effect::OpenWindow {
            url,
            target: NEW_WINDOW_TARGET,
        })
    }

    /// Run a toolbar command, returning what the host must do
    pub fn execute(&mut self, command: Command) -> Vec<Effect> {
        match command {
            Command::Go => self.open_url().into_iter().collect(),
            Command::Back => vec![Effect::Notice(self.config.back_notice.clone())],
            Command::Forward => vec![Effect::Notice(self.config.forward_notice.clone())],
            Command::Reload => vec![Effect::Reload],
            Command::NewTab => {
                self.create_tab(None);
                Vec::new()
            }
            Command::CopyLink => vec![Effect::CopyToClipboard {
                text: self.active_entry().tab.url.clone(),
                toast: "✔ Link copied".to_string(),
            }],
            Command::ShareLink => vec![Effect::CopyToClipboard {
                text: self.active_entry().tab.url.clone(),
                toast: "✔ Link ready to share".to_string(),
            }],
            Command::ToggleFullscreen => {
                self.fullscreen = !self.fullscreen;
                vec![Effect::Fullscreen(self.fullscreen)]
            }
        }
    }
}

impl Default for TabStrip {
    fn default() -> Self {
        Self::new(BrowserConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navigate(strip: &mut TabStrip, input: &str) -> Option<Effect> {
        strip.set_url_field(input.to_string());
        strip.open_url()
    }

    fn active_count(strip: &TabStrip) -> usize {
        (0..strip.entries().len())
            .filter(|i| strip.is_active(*i))
            .count()
    }

    #[test]
    fn test_startup_state() {
        let strip = TabStrip::default();

        assert_eq!(strip.entries().len(), 1);
        assert_eq!(strip.active_index(), 0);
        assert_eq!(strip.url_field(), "https://duckduckgo.com");
        assert_eq!(strip.active_entry().label, "New Tab");
        assert!(!strip.is_fullscreen());
    }

    #[test]
    fn test_open_domain() {
        let mut strip = TabStrip::default();

        let effect = navigate(&mut strip, "example.com");

        assert_eq!(
            effect,
            Some(Effect::OpenWindow {
                url: "https://example.com".to_string(),
                target: "_blank",
            })
        );
        assert_eq!(strip.active_entry().tab.url, "https://example.com");
        assert_eq!(strip.active_entry().label, "example.com");
    }

    #[test]
    fn test_open_search_query() {
        let mut strip = TabStrip::default();

        navigate(&mut strip, "hello world");

        assert_eq!(
            strip.active_entry().tab.url,
            "https://duckduckgo.com/?q=hello%20world"
        );
        assert_eq!(strip.active_entry().label, "duckduckgo.com/?q=hello%20world");
    }

    #[test]
    fn test_open_direct_url_unchanged() {
        let mut strip = TabStrip::default();

        navigate(&mut strip, "  http://example.com/a b  ");

        assert_eq!(strip.active_entry().tab.url, "http://example.com/a b");
    }

    #[test]
    fn test_empty_input_is_ignored() {
        let mut strip = TabStrip::default();
        navigate(&mut strip, "example.com");

        assert_eq!(navigate(&mut strip, ""), None);
        assert_eq!(navigate(&mut strip, "   "), None);

        assert_eq!(strip.active_entry().tab.url, "https://example.com");
        assert_eq!(strip.active_entry().label, "example.com");
    }

    #[test]
    fn test_create_tab_becomes_active() {
        let mut strip = TabStrip::default();
        navigate(&mut strip, "example.com");

        let index = strip.create_tab(None);

        assert_eq!(index, 1);
        assert_eq!(strip.active_index(), 1);
        assert_eq!(strip.active_entry().label, "New Tab");
        assert_eq!(strip.url_field(), "https://duckduckgo.com");
        assert_eq!(active_count(&strip), 1);
    }

    #[test]
    fn test_create_tab_with_url() {
        let mut strip = TabStrip::default();

        strip.create_tab(Some("https://rust-lang.org".to_string()));

        assert_eq!(strip.url_field(), "https://rust-lang.org");
        assert_eq!(strip.active_entry().label, "New Tab");
    }

    #[test]
    fn test_navigation_only_touches_active_tab() {
        let mut strip = TabStrip::default();
        strip.create_tab(None);
        strip.create_tab(None);
        strip.switch_tab(1).unwrap();

        navigate(&mut strip, "github.com");

        let labels: Vec<&str> = strip.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["New Tab", "github.com", "New Tab"]);
    }

    #[test]
    fn test_switch_tab_loads_url() {
        let mut strip = TabStrip::default();
        navigate(&mut strip, "example.com");
        strip.create_tab(None);
        strip.set_url_field("half typed".to_string());

        strip.switch_tab(0).unwrap();

        assert_eq!(strip.active_index(), 0);
        assert_eq!(strip.url_field(), "https://example.com");
        assert_eq!(active_count(&strip), 1);
        assert!(strip.is_active(0));
        assert!(!strip.is_active(1));
    }

    #[test]
    fn test_switch_tab_out_of_range() {
        let mut strip = TabStrip::default();
        strip.create_tab(None);
        strip.set_url_field("draft".to_string());
        let before = strip.clone();

        assert_eq!(strip.switch_tab(2), Err(TabError::InvalidIndex(2)));
        assert_eq!(strip, before);
    }

    #[test]
    fn test_back_and_forward_are_notices() {
        let mut strip = TabStrip::default();
        let before = strip.clone();

        assert_eq!(
            strip.execute(Command::Back),
            vec![Effect::Notice("Use device back button".to_string())]
        );
        assert_eq!(
            strip.execute(Command::Forward),
            vec![Effect::Notice("Use device forward".to_string())]
        );
        assert_eq!(strip, before);
    }

    #[test]
    fn test_reload_and_new_tab_commands() {
        let mut strip = TabStrip::default();

        assert_eq!(strip.execute(Command::Reload), vec![Effect::Reload]);
        assert!(strip.execute(Command::NewTab).is_empty());
        assert_eq!(strip.entries().len(), 2);
        assert_eq!(strip.active_index(), 1);
    }

    #[test]
    fn test_go_command() {
        let mut strip = TabStrip::default();
        strip.set_url_field("example.com".to_string());

        let effects = strip.execute(Command::Go);

        assert_eq!(effects.len(), 1);
        strip.set_url_field(String::new());
        assert!(strip.execute(Command::Go).is_empty());
    }

    #[test]
    fn test_copy_and_share_use_active_url() {
        let mut strip = TabStrip::default();
        navigate(&mut strip, "example.com");

        assert_eq!(
            strip.execute(Command::CopyLink),
            vec![Effect::CopyToClipboard {
                text: "https://example.com".to_string(),
                toast: "✔ Link copied".to_string(),
            }]
        );
        assert_eq!(
            strip.execute(Command::ShareLink),
            vec![Effect::CopyToClipboard {
                text: "https://example.com".to_string(),
                toast: "✔ Link ready to share".to_string(),
            }]
        );
    }

    #[test]
    fn test_fullscreen_toggles() {
        let mut strip = TabStrip::default();

        assert_eq!(strip.execute(Command::ToggleFullscreen), vec![Effect::Fullscreen(true)]);
        assert!(strip.is_fullscreen());
        assert_eq!(strip.execute(Command::ToggleFullscreen), vec![Effect::Fullscreen(false)]);
        assert!(!strip.is_fullscreen());
    }

    #[test]
    fn test_window_title() {
        let mut strip = TabStrip::default();
        assert_eq!(strip.window_title(), "New Tab - Tab Strip");

        navigate(&mut strip, "example.com");
        assert_eq!(strip.window_title(), "example.com - Tab Strip");
    }
}
