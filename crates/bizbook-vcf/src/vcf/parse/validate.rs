//! Whole-file plausibility check.

const BEGIN_MARKER: &str = "BEGIN:VCARD";
const END_MARKER: &str = "END:VCARD";

/// Returns whether `text` contains `BEGIN:VCARD` followed later by `END:VCARD`.
///
/// Matching is case-sensitive and may span lines. A `false` result means
/// the caller should reject the file without parsing it.
#[must_use]
pub fn validate_content(text: &str) -> bool {
    text.find(BEGIN_MARKER)
        .is_some_and(|start| text[start + BEGIN_MARKER.len()..].contains(END_MARKER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_plain_text() {
        assert!(!validate_content("not a vcard"));
        assert!(!validate_content(""));
    }

    #[test]
    fn accepts_minimal_card() {
        assert!(validate_content("BEGIN:VCARD\nFN:X\nEND:VCARD\n"));
    }

    #[test]
    fn markers_may_appear_mid_line() {
        assert!(validate_content("preamble BEGIN:VCARD body END:VCARD trailer"));
    }

    #[test]
    fn order_matters() {
        assert!(!validate_content("END:VCARD\nFN:X\nBEGIN:VCARD\n"));
        assert!(!validate_content("BEGIN:VCARD\nFN:X\n"));
    }

    #[test]
    fn keywords_are_case_sensitive() {
        assert!(!validate_content("begin:vcard\nFN:X\nend:vcard\n"));
    }

    #[test]
    fn markers_do_not_overlap() {
        assert!(!validate_content("BEGIN:VCARD"));
    }
}
