/// URL bar input classification for the tab strip
use std::sync::LazyLock;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;

use crate::config::BrowserConfig;

/// Characters escaped in a search query: everything except
/// A-Z a-z 0-9 - _ . ! ~ * ' ( ), the set encodeURIComponent leaves alone
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

static SCHEME_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://").expect("scheme prefix pattern is valid"));

/// How a piece of URL bar input is interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressInput {
    /// Already has an http(s) scheme, used verbatim
    Direct(String),
    /// Looks like a host name, gets an https:// prefix
    Domain(String),
    /// Anything else goes to the search engine
    Search(String),
}

impl AddressInput {
    /// Classify trimmed input. Returns None for empty or whitespace-only input.
    ///
    /// Rules, first match wins:
    /// 1. Starts with "http://" or "https://" → Direct
    /// 2. Contains a "." → Domain
    /// 3. Otherwise → Search
    pub fn classify(input: &str) -> Option<AddressInput> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        let classified = if input.starts_with("http://") || input.starts_with("https://") {
            AddressInput::Direct(input.to_string())
        } else if input.contains('.') {
            AddressInput::Domain(input.to_string())
        } else {
            AddressInput::Search(input.to_string())
        };

        Some(classified)
    }

    /// Build the URL to load for this input
    pub fn to_url(&self, config: &BrowserConfig) -> String {
        match self {
            AddressInput::Direct(url) => url.clone(),
            AddressInput::Domain(host) => format!("https://{}", host),
            AddressInput::Search(query) => {
                format!("{}{}", config.search_url, encode_query(query))
            }
        }
    }
}

/// Percent-encode a search query as a URI component
pub fn encode_query(query: &str) -> String {
    utf8_percent_encode(query, QUERY_COMPONENT).to_string()
}

/// Resolve raw URL bar text to a loadable URL
pub fn resolve_input(input: &str, config: &BrowserConfig) -> Option<String> {
    AddressInput::classify(input).map(|address| address.to_url(config))
}

/// Tab label for a URL: the URL with its http(s) scheme removed
///
/// Examples:
/// - https://example.com → example.com
/// - http://localhost:3000/app → localhost:3000/app
/// - about:blank → about:blank
pub fn display_label(url: &str) -> String {
    SCHEME_PREFIX.replace(url, "").into_owned()
}
