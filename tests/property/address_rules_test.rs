//! Property-based tests for URL bar resolution.
//!
//! These check the three ordered input rules (direct URL, dotted host,
//! search query) and the empty-input rule over arbitrary input.

use percent_encoding::percent_decode_str;
use proptest::prelude::*;
use tab_strip::resolve_input;
use tab_strip::tab_strip::TabStrip;

const SEARCH_URL: &str = "https://duckduckgo.com/?q=";

/// Characters encodeURIComponent leaves unescaped, plus the escape marker
fn is_component_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || "-_.!~*'()%".contains(c)
}

proptest! {
    #[test]
    fn direct_urls_are_used_verbatim(
        scheme in prop_oneof![Just("http://"), Just("https://")],
        rest in "[a-zA-Z0-9./?=&_-]{0,40}",
    ) {
        let input = format!("{}{}", scheme, rest);
        prop_assert_eq!(resolve_input(&input), Some(input.clone()));
    }

    #[test]
    fn dotted_input_gets_https_prefix(input in "[a-z0-9 /-]{0,12}\\.[a-z0-9 /.-]{0,12}") {
        prop_assume!(input.trim() == input);
        prop_assume!(!input.starts_with("http://") && !input.starts_with("https://"));

        prop_assert_eq!(resolve_input(&input), Some(format!("https://{}", input)));
    }

    #[test]
    fn other_input_is_an_encoded_search(input in "[^.\\s][^.]{0,20}[^.\\s]|[^.\\s]") {
        prop_assume!(!input.starts_with("http://") && !input.starts_with("https://"));

        let url = resolve_input(&input).unwrap();
        let query = url.strip_prefix(SEARCH_URL).unwrap();

        prop_assert!(query.chars().all(is_component_safe), "unsafe character in {}", query);
        prop_assert_eq!(percent_decode_str(query).decode_utf8().unwrap(), input.as_str());
    }

    #[test]
    fn blank_input_leaves_active_tab_unchanged(blank in "[ \\t\\n\\r]{0,8}") {
        let mut strip = TabStrip::default();
        strip.set_url_field("example.com".to_string());
        strip.open_url();
        let before = strip.active_entry().clone();

        strip.set_url_field(blank);

        prop_assert_eq!(strip.open_url(), None);
        prop_assert_eq!(strip.active_entry(), &before);
    }
}
