//! Device-type detection from a user-agent string.

const MOBILE_MARKERS: &[&str] = &[
    "phone",
    "pad",
    "pod",
    "iphone",
    "ipod",
    "ios",
    "ipad",
    "android",
    "mobile",
    "blackberry",
    "iemobile",
    "mqqbrowser",
    "juc",
    "fennec",
    "wosbrowser",
    "browserng",
    "webos",
    "symbian",
    "windows phone",
];

/// Whether `user_agent` describes a desktop browser.
///
/// Returns `false` when any mobile marker appears anywhere in the string,
/// ignoring case.
#[must_use]
pub fn is_desktop(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    !MOBILE_MARKERS.iter().any(|marker| ua.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desktop_agents() {
        assert!(is_desktop(
            "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36"
        ));
        assert!(is_desktop(""));
    }

    #[test]
    fn test_mobile_agents() {
        assert!(!is_desktop(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15"
        ));
        assert!(!is_desktop("Mozilla/5.0 (Linux; Android 14; Pixel 8) Mobile Safari/537.36"));
        assert!(!is_desktop("Opera/9.80 (J2ME/MIDP; Opera Mini/9.80; U; en) Presto/2.5.25 Version/10.54 MQQBROWSER"));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(!is_desktop("SOMETHING ANDROID"));
        assert!(!is_desktop("tablet iPaD"));
    }
}
