//! User-agent classification policies.
//!
//! Both policies are deliberately coarse; the point is aggregate device and
//! browser breakdowns, not identity resolution. The device policy is an
//! ordered rule table so new classes can be added without touching control
//! flow; the SQL report layer renders the same table into a `CASE`
//! expression.

/// Ordered device rules: `(substring, label)`, case-sensitive, first match
/// wins. A user agent containing both "Mobile" and "Tablet" classifies as
/// Mobile because the Mobile rule is listed first.
pub const DEVICE_RULES: &[(&str, &str)] = &[("Mobile", "Mobile"), ("Tablet", "Tablet")];

/// Label for user agents matching no device rule.
pub const DEVICE_DEFAULT: &str = "Desktop";

/// Classify a user agent into a coarse device class.
pub fn classify_device(user_agent: &str) -> &'static str {
    for (needle, label) in DEVICE_RULES {
        if user_agent.contains(needle) {
            return label;
        }
    }
    DEVICE_DEFAULT
}

/// Extract the browser family: the token before the first `/`.
///
/// Fixed contract: when the user agent contains no `/`, the whole string is
/// the family (so a bare "Opera" groups under "Opera" and the empty string
/// groups under "").
pub fn browser_family(user_agent: &str) -> &str {
    match user_agent.split_once('/') {
        Some((family, _)) => family,
        None => user_agent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_beats_tablet() {
        assert_eq!(classify_device("Mozilla/5.0 Tablet Mobile"), "Mobile");
    }

    #[test]
    fn tablet_when_no_mobile() {
        assert_eq!(classify_device("Mozilla/5.0 Tablet Safari"), "Tablet");
    }

    #[test]
    fn desktop_is_the_default() {
        assert_eq!(classify_device("Mozilla/5.0 (X11; Linux x86_64)"), "Desktop");
        assert_eq!(classify_device(""), "Desktop");
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(classify_device("mobile browser"), "Desktop");
    }

    #[test]
    fn browser_family_takes_token_before_slash() {
        assert_eq!(browser_family("Chrome/98.0"), "Chrome");
        assert_eq!(browser_family("Mozilla/5.0 (Macintosh)"), "Mozilla");
    }

    #[test]
    fn browser_family_without_slash_is_whole_string() {
        assert_eq!(browser_family("Opera"), "Opera");
        assert_eq!(browser_family(""), "");
    }
}
