//! Pure normalization of upstream payload text.
//!
//! Split out of the fetcher so it can be unit-tested without a network,
//! mirroring how the upstream payload is the only thing it touches.

use super::types::{CommuteResult, TravelMode};

/// Shape a raw upstream duration/distance pair into a successful [`CommuteResult`].
///
/// Duration text is cleansed of trailing zero-valued units; distance text
/// passes through unmodified.
pub fn normalize(
    raw_duration: &str,
    raw_distance: &str,
    travel_mode: TravelMode,
) -> CommuteResult {
    CommuteResult::ok(cleanse_duration(raw_duration), raw_distance, travel_mode)
}

/// Strip the literal trailing substrings `"0 mins"` and `"0 hours"` that the
/// upstream API leaves in (e.g. "2 hours 0 mins", "2 days 0 hours").
///
/// This is a textual cleanup only: the string is never parsed into numeric
/// components, and no other zero-unit phrasing is stripped.
pub fn cleanse_duration(text: &str) -> String {
    let text = without_trailing_zero_unit(text, "0 mins");
    without_trailing_zero_unit(text, "0 hours").to_string()
}

/// Remove `unit` from the end of `text`, but only where it stands as its own
/// word ("10 mins" must not become "1").
fn without_trailing_zero_unit<'a>(text: &'a str, unit: &str) -> &'a str {
    match text.strip_suffix(unit) {
        Some(head) if head.is_empty() || head.ends_with(' ') => head,
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_trailing_zero_mins() {
        assert_eq!(cleanse_duration("2 hours 0 mins"), "2 hours ");
    }

    #[test]
    fn test_strips_trailing_zero_hours() {
        assert_eq!(cleanse_duration("2 days 0 hours"), "2 days ");
    }

    #[test]
    fn test_nonzero_duration_passes_through() {
        assert_eq!(cleanse_duration("1 hour 35 mins"), "1 hour 35 mins");
        assert_eq!(cleanse_duration("25 mins"), "25 mins");
    }

    #[test]
    fn test_ten_mins_is_not_mangled() {
        // "10 mins" ends with the substring "0 mins" but is a real value.
        assert_eq!(cleanse_duration("10 mins"), "10 mins");
        assert_eq!(cleanse_duration("1 hour 20 mins"), "1 hour 20 mins");
    }

    #[test]
    fn test_other_zero_phrasings_pass_through() {
        // Only the two known upstream phrasings are stripped.
        assert_eq!(cleanse_duration("1 week 0 days"), "1 week 0 days");
    }

    #[test]
    fn test_normalize_keeps_distance_unchanged() {
        let result = normalize("2 hours 0 mins", "150 km", TravelMode::Driving);
        assert_eq!(result.duration, "2 hours ");
        assert_eq!(result.distance, "150 km");
        assert!(result.success);
        assert_eq!(result.travel_mode, TravelMode::Driving);
    }
}
