//! Property-name dispatch table.

/// The vCard properties the importer reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// `FN`
    FormattedName,
    /// `N` (Last;First;Middle;Prefix;Suffix)
    StructuredName,
    /// `TEL`
    Phone,
    /// `EMAIL`
    Email,
    /// `ADR`
    Address,
    /// `NOTE`
    Note,
}

/// Property prefixes in match order. The first matching entry wins.
///
/// `FN` must precede `N`.
pub const FIELD_PREFIXES: [(&str, FieldKind); 6] = [
    ("FN", FieldKind::FormattedName),
    ("N", FieldKind::StructuredName),
    ("TEL", FieldKind::Phone),
    ("EMAIL", FieldKind::Email),
    ("ADR", FieldKind::Address),
    ("NOTE", FieldKind::Note),
];

impl FieldKind {
    /// Looks up the field for an uppercased property key such as
    /// `TEL;TYPE=CELL` or `item1.EMAIL`.
    ///
    /// A prefix matches only when it is followed by the end of the key or by
    /// a `;` parameter list, so `NOTE` never resolves to `N`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let key = strip_group(key);
        FIELD_PREFIXES
            .iter()
            .find(|(prefix, _)| {
                key.strip_prefix(prefix)
                    .is_some_and(|rest| rest.is_empty() || rest.starts_with(';'))
            })
            .map(|&(_, kind)| kind)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FormattedName => "FN",
            Self::StructuredName => "N",
            Self::Phone => "TEL",
            Self::Email => "EMAIL",
            Self::Address => "ADR",
            Self::Note => "NOTE",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strips an optional property group (`item1.` in `item1.TEL`).
#[must_use]
pub fn strip_group(key: &str) -> &str {
    if let Some((group, rest)) = key.split_once('.') {
        // Group must be alphanumeric + hyphen
        if !group.is_empty()
            && group
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return rest;
        }
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_names() {
        assert_eq!(FieldKind::from_key("FN"), Some(FieldKind::FormattedName));
        assert_eq!(FieldKind::from_key("N"), Some(FieldKind::StructuredName));
        assert_eq!(FieldKind::from_key("TEL"), Some(FieldKind::Phone));
        assert_eq!(FieldKind::from_key("EMAIL"), Some(FieldKind::Email));
        assert_eq!(FieldKind::from_key("ADR"), Some(FieldKind::Address));
        assert_eq!(FieldKind::from_key("NOTE"), Some(FieldKind::Note));
    }

    #[test]
    fn parameters_do_not_block_match() {
        assert_eq!(
            FieldKind::from_key("TEL;TYPE=CELL"),
            Some(FieldKind::Phone)
        );
        assert_eq!(FieldKind::from_key("ADR;HOME"), Some(FieldKind::Address));
        assert_eq!(
            FieldKind::from_key("FN;CHARSET=UTF-8"),
            Some(FieldKind::FormattedName)
        );
    }

    #[test]
    fn n_does_not_swallow_other_properties() {
        assert_eq!(FieldKind::from_key("NOTE"), Some(FieldKind::Note));
        assert_eq!(FieldKind::from_key("NICKNAME"), None);
        assert_eq!(FieldKind::from_key("N;CHARSET=UTF-8"), Some(FieldKind::StructuredName));
    }

    #[test]
    fn unknown_keys() {
        assert_eq!(FieldKind::from_key("VERSION"), None);
        assert_eq!(FieldKind::from_key("TELEX"), None);
        assert_eq!(FieldKind::from_key(""), None);
    }

    #[test]
    fn grouped_keys() {
        assert_eq!(FieldKind::from_key("ITEM1.EMAIL"), Some(FieldKind::Email));
        assert_eq!(
            FieldKind::from_key("ITEM2.TEL;TYPE=WORK"),
            Some(FieldKind::Phone)
        );
    }

    #[test]
    fn strip_group_ignores_dots_in_parameters() {
        assert_eq!(strip_group("TEL;TYPE=A.B"), "TEL;TYPE=A.B");
        assert_eq!(strip_group(".TEL"), ".TEL");
        assert_eq!(strip_group("item-1.TEL"), "TEL");
    }
}
