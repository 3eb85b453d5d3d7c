//! Tie-break rules for properties that repeat within one card.
//!
//! Each rule folds a new candidate into whatever is already held and
//! returns the survivor. Only one value per field is ever kept.

/// A decoded value and whether its property line marked it as preferred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub value: String,
    pub preferred: bool,
}

impl Candidate {
    /// A phone candidate, preferred when the line mentions a mobile number.
    #[must_use]
    pub fn phone(key: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        let preferred = mentions_any(key, &value, MOBILE_MARKERS);
        Self { value, preferred }
    }

    /// An email candidate, preferred when the line carries a `PREF` marker.
    #[must_use]
    pub fn email(key: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        let preferred = mentions_any(key, &value, PREF_MARKERS);
        Self { value, preferred }
    }
}

const MOBILE_MARKERS: &[&str] = &["cell", "mobile"];
const PREF_MARKERS: &[&str] = &["pref"];

/// Case-insensitive substring search over the property key and its value.
fn mentions_any(key: &str, value: &str, markers: &[&str]) -> bool {
    [key, value].iter().any(|text| {
        let text = text.to_lowercase();
        markers.iter().any(|marker| text.contains(marker))
    })
}

/// Mobile beats everything; a held mobile is never replaced; otherwise the
/// first number seen is kept.
#[must_use]
pub fn best_phone(current: Option<Candidate>, new: Candidate) -> Candidate {
    match current {
        None => new,
        Some(held) if held.preferred => held,
        Some(_) if new.preferred => new,
        Some(held) => held,
    }
}

/// The first preferred address wins and is never replaced. Without one,
/// the latest address seen wins, even when it is empty. An empty held
/// value counts as nothing held.
#[must_use]
pub fn best_email(current: Option<Candidate>, new: Candidate) -> Candidate {
    match current {
        Some(held) if held.preferred && !held.value.is_empty() => held,
        _ => new,
    }
}

/// The first address wins unconditionally.
#[must_use]
pub fn best_address(current: Option<String>, new: String) -> String {
    current.unwrap_or(new)
}

/// The latest note wins; an empty note clears any earlier one.
#[must_use]
pub fn latest_note(new: String) -> Option<String> {
    (!new.is_empty()).then_some(new)
}
