//! Device classification from a user-agent string.

use regex::Regex;

/// Mobile-platform markers. Any match classifies the client as Mobile.
const MOBILE_PLATFORMS: &str =
    r"(?i)android|webos|iphone|ipad|ipod|blackberry|iemobile|opera mini";

/// Ordered browser probes; first match wins. Chrome is probed before
/// Safari because every Chrome UA also advertises Safari.
const BROWSER_PROBES: &[(&str, &str)] = &[
    ("chrome", "Chrome"),
    ("safari", "Safari"),
    ("firefox", "Firefox"),
    ("msie", "Internet Explorer"),
    ("trident", "Internet Explorer"),
    ("edge", "Edge"),
];

/// Classify a user-agent string as `"{Mobile|Desktop}, {Browser}"`.
///
/// Best-effort pattern matching; unrecognized agents come back as
/// `"Desktop, Unknown"`.
#[must_use]
pub fn classify(user_agent: &str) -> String {
    let form_factor = if is_mobile(user_agent) {
        "Mobile"
    } else {
        "Desktop"
    };
    format!("{form_factor}, {}", browser_name(user_agent))
}

fn is_mobile(user_agent: &str) -> bool {
    Regex::new(MOBILE_PLATFORMS)
        .ok()
        .is_some_and(|re| re.is_match(user_agent))
}

fn browser_name(user_agent: &str) -> &'static str {
    let ua = user_agent.to_lowercase();
    BROWSER_PROBES
        .iter()
        .find(|(probe, _)| ua.contains(probe))
        .map_or("Unknown", |&(_, name)| name)
}
