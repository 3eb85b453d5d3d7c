//! Display-name resolution.

/// Name used when a card carries neither a usable `FN` nor `N`.
pub const UNKNOWN_CONTACT: &str = "Unknown Contact";

/// Stringified missing values some exporters write into `FN`.
const NULLISH_NAMES: [&str; 2] = ["null", "undefined"];

/// Picks one display name from the `FN` and `N` values of a card.
///
/// `FN` wins when present. Otherwise `N` (`Last;First;Middle;Prefix;Suffix`)
/// gives `"First Last"`, or whichever of the two is set. The result is never
/// empty.
#[must_use]
pub fn resolve_name(formatted: &str, structured: &str) -> String {
    if !formatted.is_empty() && !NULLISH_NAMES.contains(&formatted) {
        return formatted.to_string();
    }

    if let Some(name) = name_from_components(structured) {
        return name;
    }

    UNKNOWN_CONTACT.to_string()
}

fn name_from_components(structured: &str) -> Option<String> {
    if structured.is_empty() {
        return None;
    }

    let parts: Vec<&str> = structured.split(';').collect();
    let [last, first, ..] = parts.as_slice() else {
        return None;
    };

    match (first.trim(), last.trim()) {
        ("", "") => None,
        (first, "") => Some(first.to_string()),
        ("", last) => Some(last.to_string()),
        (first, last) => Some(format!("{first} {last}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatted_name_wins() {
        assert_eq!(resolve_name("Jane Doe", "Smith;John;;;"), "Jane Doe");
    }

    #[test]
    fn nullish_formatted_name_falls_through() {
        assert_eq!(resolve_name("null", "Doe;Jane;;;"), "Jane Doe");
        assert_eq!(resolve_name("undefined", "Doe;Jane;;;"), "Jane Doe");
    }

    #[test]
    fn structured_name_first_then_last() {
        assert_eq!(resolve_name("", "Doe;Jane;;;"), "Jane Doe");
        assert_eq!(resolve_name("", " Doe ; Jane ;Q;Dr.;"), "Jane Doe");
    }

    #[test]
    fn structured_name_single_component() {
        assert_eq!(resolve_name("", "Doe;;;;"), "Doe");
        assert_eq!(resolve_name("", ";Jane;;;"), "Jane");
    }

    #[test]
    fn structured_name_needs_two_components() {
        assert_eq!(resolve_name("", "Doe"), UNKNOWN_CONTACT);
    }

    #[test]
    fn empty_structured_name_uses_placeholder() {
        assert_eq!(resolve_name("", ";;;;"), UNKNOWN_CONTACT);
        assert_eq!(resolve_name("", ""), UNKNOWN_CONTACT);
    }
}
