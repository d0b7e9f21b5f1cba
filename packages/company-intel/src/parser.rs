//! Parser for free-form `key: value` completion text.
//!
//! Language-model completions are line-oriented but otherwise
//! unstructured; this module maps them onto a [`CompanyRecord`] without
//! ever failing. Lines that don't fit the shape are dropped silently and
//! the affected fields keep their sentinel values.

use tracing::trace;

use crate::record::{CompanyRecord, Field, FIELD_MARKERS};

/// Parse a multi-line profile text into a record.
///
/// For each line:
/// - split on the first `": "` occurrence; no separator means the line
///   is skipped (further occurrences stay in the value);
/// - lowercase the key and substring-match it against the marker table
///   in its documented order, first match wins;
/// - on a match, overwrite the field with the trimmed value, so a later
///   line claiming the same field wins.
pub fn parse_profile_text(text: &str) -> CompanyRecord {
    let mut record = CompanyRecord::default();

    for line in text.lines() {
        let Some((key, value)) = line.split_once(": ") else {
            continue;
        };

        let key = key.trim().to_lowercase();
        let Some(field) = match_field(&key) else {
            trace!(key = %key, "no field marker matched");
            continue;
        };

        field.set(&mut record, value.trim());
    }

    record
}

/// First marker (in checked order) contained in the key, if any.
fn match_field(key: &str) -> Option<Field> {
    FIELD_MARKERS
        .iter()
        .find(|(marker, _)| key.contains(marker))
        .map(|(_, field)| *field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::NOT_AVAILABLE;

    #[test]
    fn parses_simple_line() {
        let record = parse_profile_text("CEO: Jane Doe");
        assert_eq!(record.ceo, "Jane Doe");
    }

    #[test]
    fn trims_values() {
        let record = parse_profile_text("CEO:   Jane Doe  ");
        assert_eq!(record.ceo, "Jane Doe");
    }

    #[test]
    fn line_without_separator_keeps_sentinels() {
        let record = parse_profile_text("this line mentions a ceo but has no separator");
        assert_eq!(record, CompanyRecord::default());
    }

    #[test]
    fn colon_without_space_is_not_a_separator() {
        let record = parse_profile_text("CEO:Jane Doe");
        assert_eq!(record.ceo, NOT_AVAILABLE);
    }

    #[test]
    fn last_matching_line_wins() {
        let record = parse_profile_text("CEO: Jane Doe\nCEO: John Roe");
        assert_eq!(record.ceo, "John Roe");
    }

    #[test]
    fn split_is_limited_to_first_occurrence() {
        let record = parse_profile_text("Website: https://acme.example: the main site");
        assert_eq!(record.website, "https://acme.example: the main site");
    }

    #[test]
    fn key_matching_is_case_insensitive_substring() {
        let record = parse_profile_text("The Industry Sector: Aerospace");
        assert_eq!(record.industry, "Aerospace");
    }

    #[test]
    fn first_marker_in_checked_order_wins() {
        // "location" is tested before "competitors" in the marker table.
        let record = parse_profile_text("Location of Competitors: Toontown");
        assert_eq!(record.location, "Toontown");
        assert_eq!(record.competitors, NOT_AVAILABLE);
    }

    #[test]
    fn parses_full_profile() {
        let text = "\
CEO: Wile E. Coyote
Industry: Aerospace
Career Opportunities: Test pilots wanted
Products: Rockets, anvils
Location: Toontown
Competitors: Road Runner Inc.
Email: contact@acme.example";

        let record = parse_profile_text(text);
        assert_eq!(record.ceo, "Wile E. Coyote");
        assert_eq!(record.industry, "Aerospace");
        assert_eq!(record.career, "Test pilots wanted");
        assert_eq!(record.products, "Rockets, anvils");
        assert_eq!(record.location, "Toontown");
        assert_eq!(record.competitors, "Road Runner Inc.");
        assert_eq!(record.email, "contact@acme.example");
        assert_eq!(record.description, NOT_AVAILABLE);
        assert_eq!(record.website, NOT_AVAILABLE);
    }
}
